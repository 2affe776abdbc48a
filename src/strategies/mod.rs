pub mod smoke_test;
