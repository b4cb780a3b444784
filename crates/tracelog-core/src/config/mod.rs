//! Logger configuration
//!
//! Two knobs: the minimum `Level` and the output `LogFormat`.

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{LogConfig, LogFormat};
