pub mod order;
pub mod response;
pub mod ticker;
