use crate::core::DropCommandConfig;
use crate::utils::error::{ClearRamError, Result};
use crate::utils::validation::{
    validate_absolute_path, validate_non_empty_string, validate_shell_word, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ESCALATION: &str = "sudo";
pub const DEFAULT_SHELL: &str = "sh";
pub const DEFAULT_CONTROL_FILE: &str = "/proc/sys/vm/drop_caches";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub command: CommandConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    pub escalation: String,
    pub shell: String,
    pub control_file: String,
    pub sync_first: bool,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            escalation: DEFAULT_ESCALATION.to_string(),
            shell: DEFAULT_SHELL.to_string(),
            control_file: DEFAULT_CONTROL_FILE.to_string(),
            sync_first: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ClearRamError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClearRamError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ESCALATION})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClearRamError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_shell_word("command.escalation", &self.command.escalation)?;
        validate_non_empty_string("command.shell", &self.command.shell)?;
        validate_shell_word("command.shell", &self.command.shell)?;
        validate_absolute_path("command.control_file", &self.command.control_file)?;
        validate_shell_word("command.control_file", &self.command.control_file)?;
        Ok(())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl DropCommandConfig for TomlConfig {
    fn escalation(&self) -> &str {
        &self.command.escalation
    }

    fn shell(&self) -> &str {
        &self.command.shell
    }

    fn control_file(&self) -> &str {
        &self.command.control_file
    }

    fn sync_first(&self) -> bool {
        self.command.sync_first
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
