use assert_cmd::Command;
use predicates::prelude::*;

fn pandora() -> Command {
    Command::cargo_bin("pandora").unwrap()
}

#[test]
fn prints_parsed_configuration_as_json() {
    let output = pandora()
        .args(["-u", "-t", "64", "-z", "500, 502", "--kxfile", "PNG, Jpg"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["BASIC"]["UNZIP"], true);
    assert_eq!(json["BASIC"]["THREAD_COUNT"], 64);
    assert_eq!(json["BASIC"]["HTTP_CODES"], serde_json::json!([500, 502]));
    assert_eq!(
        json["KEMONO"]["KEMONO_EXCLUDE_FILE"],
        serde_json::json!(["png", "jpg"])
    );
}

#[test]
fn help_exits_cleanly_with_usage() {
    pandora()
        .args(["-u", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("-t, --threads"));
}

#[test]
fn unknown_switch_fails() {
    pandora()
        .arg("--doesnotexist")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown switch: --doesnotexist"));
}

#[test]
fn missing_argument_fails() {
    pandora()
        .arg("-t")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Switch -t requires an integer"));
}
