//! Successful generation tests.

use super::{TestEnv, TestResult};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_generates_three_artifacts() -> TestResult {
    let env = TestEnv::new()?;

    env.cmd()
        .arg(&env.module_root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test suite"))
        .stdout(predicate::str::contains("Library stub"))
        .stdout(predicate::str::contains("Run script"));

    assert!(env.suite_path().is_file());
    assert!(env.library_path().is_file());
    assert!(env.run_script_path().is_file());
    Ok(())
}

#[test]
fn test_suite_carries_legacy_collision() -> TestResult {
    let env = TestEnv::new()?;
    env.cmd().arg(&env.module_root).assert().success();

    let suite = fs::read_to_string(env.suite_path())?;
    // Path check and first file check share "0101".
    assert!(suite.contains("AD_SENSOR_OUTPUT_CHECK_0101 Compilation_Path_Check"));
    assert!(suite.contains("AD_SENSOR_OUTPUT_CHECK_0101 Compilation_File_Check"));
    assert!(suite.contains("AD_SENSOR_OUTPUT_CHECK_0102 Compilation_File_Check"));
    Ok(())
}

#[test]
fn test_suite_injects_table_assertions() -> TestResult {
    let env = TestEnv::new()?;
    env.cmd().arg(&env.module_root).assert().success();

    let suite = fs::read_to_string(env.suite_path())?;
    assert!(suite.contains("$.file_cache.cache_path    transparent-cache/file"));
    assert!(suite.contains("$.identify.algorithmVersion    CSVEHXV_v1.5.0.0"));
    // Only two file cases exist, so the 0103/0104 rules never fire.
    assert!(!suite.contains("$.CommonConfig.CollectMode"));
    Ok(())
}

#[test]
fn test_library_stub_contract() -> TestResult {
    let env = TestEnv::new()?;
    env.cmd().arg(&env.module_root).assert().success();

    let stub = fs::read_to_string(env.library_path())?;
    assert!(stub.contains("class TestSensor(object):"));
    assert!(stub.contains("def compilation_path_check(self, output_path):"));
    assert!(stub.contains("def compilation_file_check(self, output_path, output_filename):"));
    assert!(stub.contains("def read_file(self, output_path, output_filename):"));
    assert!(stub.contains("def arrest_result(self, data, act, ect):"));
    Ok(())
}

#[test]
fn test_run_script_points_at_suite_dir() -> TestResult {
    let env = TestEnv::new()?;
    env.cmd().arg(&env.module_root).assert().success();

    let script = fs::read_to_string(env.run_script_path())?;
    assert!(script.contains("testcase/sensor/"));
    assert!(script.contains("--include priority-P0"));
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> TestResult {
    let env = TestEnv::new()?;

    env.cmd().arg(&env.module_root).assert().success();
    let first = fs::read(env.suite_path())?;

    env.cmd().arg(&env.module_root).assert().success();
    assert_eq!(first, fs::read(env.suite_path())?);
    Ok(())
}

#[test]
fn test_unique_codes_flag() -> TestResult {
    let env = TestEnv::new()?;

    env.cmd()
        .arg(&env.module_root)
        .arg("--unique-codes")
        .assert()
        .success();

    let suite = fs::read_to_string(env.suite_path())?;
    assert!(suite.contains("AD_SENSOR_OUTPUT_CHECK_0100 Compilation_Path_Check"));
    assert!(suite.contains("AD_SENSOR_OUTPUT_CHECK_0101 Compilation_File_Check"));
    assert!(!suite.contains("0101 Compilation_Path_Check"));
    Ok(())
}

#[test]
fn test_custom_rule_table() -> TestResult {
    let env = TestEnv::new()?;
    let rules = env.workdir.join("rules.toml");
    fs::write(
        &rules,
        r#"
[[rule]]
code = "0102"
path = "$.identify.mode"
expected = "calibrated"
"#,
    )?;

    env.cmd()
        .arg(&env.module_root)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success();

    let suite = fs::read_to_string(env.suite_path())?;
    assert!(suite.contains("$.identify.mode    calibrated"));
    assert!(!suite.contains("$.file_cache.cache_path"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_run_script_executable() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new()?;
    env.cmd().arg(&env.module_root).assert().success();

    let mode = fs::metadata(env.run_script_path())?.permissions().mode();
    assert_eq!(mode & 0o111, 0o111);
    Ok(())
}
