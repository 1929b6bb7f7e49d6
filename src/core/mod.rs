pub mod config;
pub mod error;
pub mod types;

pub use config::FleetConfig;
pub use error::{FleetError, Result};
pub use types::{GunId, GunModel};
