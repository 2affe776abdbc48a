pub mod client;
pub mod error;
pub mod parsers;
pub mod signature;

pub use client::{LnMarketsRest, LnmCredentials};
pub use error::LnmError;
pub use parsers::LnmParser;
