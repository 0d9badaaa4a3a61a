pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "clear-ram")]
#[command(about = "Drop the Linux page cache, dentries and inodes from an interactive menu")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Answer the menu without prompting (1, 2, 3 or 4)
    #[arg(long, allow_hyphen_values = true)]
    pub choice: Option<String>,

    /// Show the command that would run without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Log available memory before and after the drop
    #[arg(long)]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 沒有 --config 時使用預設指令設定
    pub fn load_toml_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn monitoring_enabled(&self, toml: &TomlConfig) -> bool {
        self.monitor || toml.monitoring_enabled()
    }
}
