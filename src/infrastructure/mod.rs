pub mod exchange;
pub mod logging;
