use crate::core::{CacheDropper, DropCommandConfig, DropLevel, DropReport};
use crate::utils::error::{ClearRamError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// 透過提權程式執行 `sh -c 'sync; echo N > drop_caches'`
#[derive(Debug, Clone)]
pub struct ShellCacheDropper<C: DropCommandConfig> {
    config: C,
}

impl<C: DropCommandConfig> ShellCacheDropper<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn script(&self, level: DropLevel) -> String {
        let write = format!("echo {} > {}", level, self.config.control_file());
        if self.config.sync_first() {
            format!("sync; {}", write)
        } else {
            write
        }
    }

    fn command(&self, level: DropLevel) -> Command {
        let escalation = self.config.escalation();
        let mut command = if escalation.is_empty() {
            Command::new(self.config.shell())
        } else {
            let mut command = Command::new(escalation);
            command.arg(self.config.shell());
            command
        };

        command
            .arg("-c")
            .arg(self.script(level))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

#[async_trait]
impl<C: DropCommandConfig> CacheDropper for ShellCacheDropper<C> {
    fn describe(&self, level: DropLevel) -> String {
        let escalation = self.config.escalation();
        let shell_call = format!("{} -c '{}'", self.config.shell(), self.script(level));
        if escalation.is_empty() {
            shell_call
        } else {
            format!("{} {}", escalation, shell_call)
        }
    }

    async fn drop_caches(&self, level: DropLevel) -> Result<DropReport> {
        let description = self.describe(level);
        tracing::debug!("Spawning: {}", description);

        let status = self
            .command(level)
            .status()
            .await
            .map_err(|source| ClearRamError::ExecError {
                command: description.clone(),
                source,
            })?;

        tracing::debug!("`{}` finished with {}", description, status);

        Ok(DropReport {
            level,
            command: description,
            exit_status: Some(status),
            spawn_error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    #[test]
    fn test_describe_default_command() {
        let dropper = ShellCacheDropper::new(TomlConfig::default());

        assert_eq!(
            dropper.describe(DropLevel::PageCache),
            "sudo sh -c 'sync; echo 1 > /proc/sys/vm/drop_caches'"
        );
        assert_eq!(
            dropper.describe(DropLevel::DentriesInodes),
            "sudo sh -c 'sync; echo 2 > /proc/sys/vm/drop_caches'"
        );
        assert_eq!(
            dropper.describe(DropLevel::All),
            "sudo sh -c 'sync; echo 3 > /proc/sys/vm/drop_caches'"
        );
    }

    #[test]
    fn test_describe_without_escalation_or_sync() {
        let mut config = TomlConfig::default();
        config.command.escalation = String::new();
        config.command.sync_first = false;
        let dropper = ShellCacheDropper::new(config);

        assert_eq!(
            dropper.describe(DropLevel::All),
            "sh -c 'echo 3 > /proc/sys/vm/drop_caches'"
        );
    }
}
