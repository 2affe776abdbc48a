pub mod lnmarkets;
