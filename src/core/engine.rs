use crate::core::info::INFO_TEXT;
use crate::core::menu;
use crate::domain::model::{DropLevel, DropReport, MenuChoice, RunOutcome};
use crate::domain::ports::CacheDropper;
use crate::utils::error::{ClearRamError, Result};
use crate::utils::monitor::MemoryMonitor;
use std::io::{BufRead, Write};

pub const NO_CACHE_CLEARED: &str = "No cache was cleared.";
pub const CACHE_CLEARED: &str = "Cache cleared successfully!";
pub const DRY_RUN_NOTICE: &str = "Dry run: no cache was cleared.";

pub struct ClearRamEngine<D: CacheDropper> {
    dropper: D,
    monitor: MemoryMonitor,
    dry_run: bool,
}

impl<D: CacheDropper> ClearRamEngine<D> {
    pub fn new(dropper: D) -> Self {
        Self::new_with_monitoring(dropper, false)
    }

    pub fn new_with_monitoring(dropper: D, monitor_enabled: bool) -> Self {
        Self {
            dropper,
            monitor: MemoryMonitor::new(monitor_enabled),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn dropper(&self) -> &D {
        &self.dropper
    }

    /// 顯示選單、讀取一行輸入並執行
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<RunOutcome> {
        menu::write_menu(out)?;
        let choice = menu::read_choice(input)?;
        self.dispatch(choice, out).await
    }

    /// 不顯示選單，直接處理已知的選項 (用於 `--choice`)
    pub async fn run_choice<W: Write>(&self, raw_choice: &str, out: &mut W) -> Result<RunOutcome> {
        self.dispatch(MenuChoice::parse(raw_choice), out).await
    }

    async fn dispatch<W: Write>(&self, choice: MenuChoice, out: &mut W) -> Result<RunOutcome> {
        tracing::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::ShowInfo => {
                write!(out, "{}", INFO_TEXT)?;
                writeln!(out, "{}", NO_CACHE_CLEARED)?;
                Ok(RunOutcome::InfoShown)
            }
            MenuChoice::Drop(level) => self.drop_level(level, out).await,
            MenuChoice::InvalidOption(value) => {
                let err = ClearRamError::InvalidOption { value };
                writeln!(out, "{}", err.user_friendly_message())?;
                Err(err)
            }
            MenuChoice::InvalidInput(input) => {
                let err = ClearRamError::InvalidInput { input };
                writeln!(out, "{}", err.user_friendly_message())?;
                Err(err)
            }
        }
    }

    async fn drop_level<W: Write>(&self, level: DropLevel, out: &mut W) -> Result<RunOutcome> {
        let command = self.dropper.describe(level);
        writeln!(out, "Running: {}", command)?;
        out.flush()?;

        if self.dry_run {
            tracing::info!("🔍 Dry run, skipping level {} drop", level);
            writeln!(out, "{}", DRY_RUN_NOTICE)?;
            return Ok(RunOutcome::DryRun { level, command });
        }

        let before = self.monitor.log_stats("Before drop");
        let report = match self.dropper.drop_caches(level).await {
            Ok(report) => report,
            Err(ClearRamError::ExecError { command, source }) => {
                tracing::warn!("⚠️ `{}` could not be started: {}", command, source);
                DropReport {
                    level,
                    command,
                    exit_status: None,
                    spawn_error: Some(source.to_string()),
                }
            }
            Err(e) => return Err(e),
        };

        if let Some(status) = report.exit_status.filter(|s| !s.success()) {
            tracing::warn!("⚠️ `{}` exited with {}", report.command, status);
        } else if report.succeeded() {
            tracing::info!("✅ Dropped caches at level {}", level);
        }

        // 指令是否成功啟動或結束都不影響，照常輸出成功訊息
        writeln!(out, "{}", CACHE_CLEARED)?;
        self.monitor.log_delta(before);

        Ok(RunOutcome::CacheDropped(report))
    }
}
