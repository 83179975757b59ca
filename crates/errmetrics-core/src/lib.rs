pub mod config;
pub mod error;
pub mod kind;
pub mod series;

pub use config::*;
pub use error::*;
pub use kind::*;
pub use series::*;
