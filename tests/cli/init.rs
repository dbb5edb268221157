use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .twraprc.json"), "stdout:\n{}", stdout);
    assert!(test.root().join(".twraprc.json").exists());

    let content = test.read_file(".twraprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["translationFn"], "t");
    assert_eq!(parsed["scripts"][0], "Hangul");
    assert!(parsed.get("includes").is_some());
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".twraprc.json", "{}")?;

    let (code, _, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"), "stderr:\n{}", stderr);
    assert_eq!(test.read_file(".twraprc.json")?, "{}");

    Ok(())
}
