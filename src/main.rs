use clap::Parser;
use clear_ram::utils::error::ErrorCategory;
use clear_ram::utils::{logger, validation::Validate};
use clear_ram::{CliConfig, ClearRamEngine, RunOutcome, ShellCacheDropper};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證指令設定
    let toml = match config.load_toml_config().and_then(|toml| {
        toml.validate()?;
        Ok(toml)
    }) {
        Ok(toml) => toml,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let monitor_enabled = config.monitoring_enabled(&toml);
    if monitor_enabled {
        tracing::info!("🔍 Memory monitoring enabled");
    }

    let engine = ClearRamEngine::new_with_monitoring(ShellCacheDropper::new(toml), monitor_enabled)
        .with_dry_run(config.dry_run);

    let mut stdout = std::io::stdout().lock();
    let result = match &config.choice {
        Some(choice) => engine.run_choice(choice, &mut stdout).await,
        None => {
            let mut stdin = std::io::stdin().lock();
            engine.run(&mut stdin, &mut stdout).await
        }
    };

    match result {
        Ok(RunOutcome::InfoShown) => tracing::debug!("Info shown, nothing dropped"),
        Ok(RunOutcome::DryRun { level, .. }) => tracing::debug!("Dry run for level {}", level),
        Ok(RunOutcome::CacheDropped(report)) => {
            tracing::debug!("Level {} command succeeded: {}", report.level, report.succeeded())
        }
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            // 輸入錯誤的訊息已經印在 stdout
            if e.category() != ErrorCategory::UserInput {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
