pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::shell::ShellCacheDropper;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::ClearRamEngine;
pub use crate::domain::model::{DropLevel, DropReport, MenuChoice, RunOutcome};
pub use crate::domain::ports::{CacheDropper, DropCommandConfig};
pub use crate::utils::error::{ClearRamError, Result};
