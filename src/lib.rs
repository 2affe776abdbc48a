pub mod config_loader;
pub mod domain;
pub mod infrastructure;
pub mod strategies;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::model::order::*;
pub use domain::model::response::*;
pub use domain::model::ticker::*;
pub use domain::traits::*;
pub use domain::units::*;
pub use infrastructure::exchange::lnmarkets::*;
pub use strategies::smoke_test::*;
