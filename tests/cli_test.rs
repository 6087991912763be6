//! Integration tests for the propkit binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn propkit() -> Command {
    let mut cmd = Command::new(cargo_bin("propkit"));
    cmd.env_remove("PROPKIT_ENV_PREFIX").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_no_args_lists_properties() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .assert()
        .success()
        .stdout(predicate::str::contains("os.name --- "));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_list_prefix_filters() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["-D", "app.mode=dev", "list", "--prefix", "app."])
        .assert()
        .success()
        .stdout("app.mode --- dev\n");
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = propkit().args(["list", "--json"]).output()?;
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["os.name"], std::env::consts::OS);
    Ok(())
}

#[test]
fn cli_get_defined_property() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["-D", "app.mode=dev", "get", "app.mode"])
        .assert()
        .success()
        .stdout("dev\n");
    Ok(())
}

#[test]
fn cli_get_uses_default() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["get", "missing.key", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");
    Ok(())
}

#[test]
fn cli_get_missing_fails() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["get", "missing.key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Property not found: missing.key"));
    Ok(())
}

#[test]
fn cli_set_prints_stored_value() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["set", "app.mode", "--default", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod"));
    Ok(())
}

#[test]
fn cli_set_without_value_is_contract_violation() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["set", "app.mode"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Contract violation"));
    Ok(())
}

#[test]
fn cli_quiet_hides_status() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["--quiet", "set", "app.mode", "dev"])
        .assert()
        .success()
        .stdout("dev\n");
    Ok(())
}

#[test]
fn cli_rejects_bad_definition() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["-D", "broken", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid property definition"));
    Ok(())
}

#[test]
fn cli_env_prefix_loads_variables() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .env("PROPKIT_ENV_PREFIX", "PKTEST_")
        .env("PKTEST_DB_HOST", "localhost")
        .args(["get", "db.host"])
        .assert()
        .success()
        .stdout("localhost\n");
    Ok(())
}

#[test]
fn cli_define_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .env("PKTEST_DB_HOST", "localhost")
        .args(["--env-prefix", "PKTEST_", "-D", "db.host=remote", "get", "db.host"])
        .assert()
        .success()
        .stdout("remote\n");
    Ok(())
}

#[test]
fn cli_check_blank_text() -> Result<(), Box<dyn std::error::Error>> {
    propkit()
        .args(["check", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("blank_or_absent: true"))
        .stdout(predicate::str::contains("empty_or_absent: false"));
    Ok(())
}

#[test]
fn cli_check_absent_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = propkit().args(["check", "--json"]).output()?;
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["present"], false);
    assert_eq!(parsed["empty_or_absent"], true);
    Ok(())
}
