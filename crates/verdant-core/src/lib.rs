pub mod config;
pub mod error;

pub use config::VerdantConfig;
pub use error::{Result, VerdantError};
