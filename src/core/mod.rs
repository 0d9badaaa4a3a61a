pub mod engine;
pub mod info;
pub mod menu;

pub use crate::domain::model::{DropLevel, DropReport, MenuChoice, RunOutcome};
pub use crate::domain::ports::{CacheDropper, DropCommandConfig};
pub use crate::utils::error::Result;
