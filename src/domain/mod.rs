pub mod constants;
pub mod enums;
pub mod model;
pub mod traits;
pub mod units;
