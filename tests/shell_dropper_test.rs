use anyhow::Result;
use clear_ram::{
    CacheDropper, ClearRamEngine, ClearRamError, DropLevel, RunOutcome, ShellCacheDropper,
    TomlConfig,
};
use tempfile::TempDir;

/// 不提權，把等級寫到暫存檔而不是 /proc
fn local_config(control_file: &str) -> Result<TomlConfig> {
    let toml_content = format!(
        r#"
[command]
escalation = ""
shell = "sh"
control_file = "{}"
sync_first = true
"#,
        control_file
    );
    Ok(TomlConfig::from_toml_str(&toml_content)?)
}

#[tokio::test]
async fn test_shell_dropper_writes_level_to_control_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let control_file = temp_dir.path().join("drop_caches");
    let control_path = control_file.to_str().unwrap().to_string();

    let dropper = ShellCacheDropper::new(local_config(&control_path)?);

    for level in DropLevel::ALL_LEVELS {
        let report = dropper.drop_caches(level).await?;

        assert!(report.succeeded());
        assert_eq!(
            report.command,
            format!("sh -c 'sync; echo {} > {}'", level, control_path)
        );
        assert_eq!(tokio::fs::read_to_string(&control_file).await?, format!("{}\n", level));
    }
    Ok(())
}

#[tokio::test]
async fn test_engine_end_to_end_with_local_control_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let control_file = temp_dir.path().join("drop_caches");
    let control_path = control_file.to_str().unwrap().to_string();

    let engine = ClearRamEngine::new(ShellCacheDropper::new(local_config(&control_path)?));
    let mut stdin = std::io::Cursor::new("2\n");
    let mut stdout = Vec::new();

    let outcome = engine.run(&mut stdin, &mut stdout).await?;

    assert!(matches!(outcome, RunOutcome::CacheDropped(_)));
    let output = String::from_utf8(stdout)?;
    assert!(output.contains("Running: sh -c 'sync; echo 2 > "));
    assert!(output.contains("Cache cleared successfully!"));
    assert_eq!(std::fs::read_to_string(&control_file)?, "2\n");
    Ok(())
}

#[tokio::test]
async fn test_failed_write_still_reports_success() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // 目錄不存在，重新導向會失敗
    let control_path = format!("{}/missing/drop_caches", temp_dir.path().to_str().unwrap());

    let engine = ClearRamEngine::new(ShellCacheDropper::new(local_config(&control_path)?));
    let mut stdout = Vec::new();

    let outcome = engine.run_choice("1", &mut stdout).await?;

    match outcome {
        RunOutcome::CacheDropped(report) => assert!(!report.succeeded()),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(String::from_utf8(stdout)?.contains("Cache cleared successfully!"));
    Ok(())
}

#[tokio::test]
async fn test_missing_escalation_program_is_exec_error() -> Result<()> {
    let mut config = TomlConfig::default();
    config.command.escalation = "clear-ram-no-such-program".to_string();
    let dropper = ShellCacheDropper::new(config);

    let err = dropper.drop_caches(DropLevel::PageCache).await.unwrap_err();

    assert!(matches!(err, ClearRamError::ExecError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_missing_escalation_program_still_prints_success() -> Result<()> {
    let mut config = TomlConfig::default();
    config.command.escalation = "clear-ram-no-such-program".to_string();
    let engine = ClearRamEngine::new(ShellCacheDropper::new(config));
    let mut stdout = Vec::new();

    let outcome = engine.run_choice("1", &mut stdout).await?;

    match outcome {
        RunOutcome::CacheDropped(report) => {
            assert!(report.spawn_error.is_some());
            assert!(!report.succeeded());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    let output = String::from_utf8(stdout)?;
    assert!(output.contains(
        "Running: clear-ram-no-such-program sh -c 'sync; echo 1 > /proc/sys/vm/drop_caches'"
    ));
    assert!(output.ends_with("Cache cleared successfully!\n"));
    Ok(())
}

#[tokio::test]
async fn test_dry_run_leaves_control_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let control_file = temp_dir.path().join("drop_caches");
    let control_path = control_file.to_str().unwrap().to_string();

    let engine = ClearRamEngine::new(ShellCacheDropper::new(local_config(&control_path)?))
        .with_dry_run(true);
    let mut stdout = Vec::new();

    let outcome = engine.run_choice("3", &mut stdout).await?;

    assert!(matches!(outcome, RunOutcome::DryRun { level: DropLevel::All, .. }));
    assert!(!control_file.exists());
    Ok(())
}
