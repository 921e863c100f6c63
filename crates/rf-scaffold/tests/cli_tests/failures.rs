//! Failure-path tests: every fatal error exits non-zero with no artifacts.

use super::{TestEnv, TestResult};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_missing_root() -> TestResult {
    let env = TestEnv::new()?;

    env.cmd()
        .arg("/nonexistent/build/sensor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!env.workdir.join("testcase").exists());
    assert!(!env.workdir.join("libraries").exists());
    Ok(())
}

#[test]
fn test_empty_tree() -> TestResult {
    let env = TestEnv::new()?;
    let empty_root = env.workdir.join("emptymod");
    fs::create_dir_all(empty_root.join("nested/deeper"))?;

    env.cmd()
        .arg(&empty_root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scannable files"));

    assert!(!env.workdir.join("run_emptymod.sh").exists());
    assert!(!env.workdir.join("testcase").exists());
    Ok(())
}

#[test]
fn test_invalid_module_name() -> TestResult {
    let env = TestEnv::new()?;
    let root = env.workdir.join("my-module");
    fs::create_dir_all(&root)?;
    fs::write(root.join("out.json"), "{}")?;

    env.cmd()
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid module name"));
    Ok(())
}

#[test]
fn test_unreadable_rule_table() -> TestResult {
    let env = TestEnv::new()?;

    env.cmd()
        .arg(&env.module_root)
        .args(["--rules", "/nonexistent/rules.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load rule table"));

    assert!(!env.suite_path().exists());
    Ok(())
}

#[test]
fn test_malformed_rule_table() -> TestResult {
    let env = TestEnv::new()?;
    let rules = env.workdir.join("rules.toml");
    fs::write(
        &rules,
        r#"
[[rule]]
code = "10203"
path = "$.a"
expected = "1"
"#,
    )?;

    env.cmd()
        .arg(&env.module_root)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rule code"));

    assert!(!env.suite_path().exists());
    Ok(())
}
