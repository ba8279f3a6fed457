//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn strassen() -> Command {
    let mut cmd = Command::cargo_bin("strassen").expect("binary not found");
    cmd.env_remove("STRASSEN_SIZE")
        .env_remove("STRASSEN_THRESHOLD")
        .env_remove("STRASSEN_MAX_PARALLEL_DEPTH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    strassen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strassen"))
        .stdout(predicate::str::contains("--max-parallel-depth"));
}

#[test]
fn version_flag() {
    strassen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strassen"));
}

#[test]
fn demo_product_quiet() {
    strassen()
        .args(["--demo", "-t", "1", "--algo", "strassen", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[80, 70, 60, 50]"))
        .stdout(predicate::str::contains("[560, 502, 444, 386]"));
}

#[test]
fn demo_all_algorithms_agree() {
    strassen()
        .args(["--demo", "-t", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: Strassen"))
        .stdout(predicate::str::contains("Algorithm: Naive"))
        .stdout(predicate::str::contains("Comparison Results:"));
}

#[test]
fn details_mode() {
    strassen()
        .args(["--demo", "-t", "1", "-d", "1", "--algo", "strassen", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base cases: 49"))
        .stdout(predicate::str::contains("Dispatches: 1 parallel, 7 sequential"));
}

#[test]
fn random_operands_sequential() {
    strassen()
        .args(["-n", "64", "-t", "8", "-d", "0"])
        .assert()
        .success();
}

#[test]
fn env_var_configuration() {
    strassen()
        .env("STRASSEN_SIZE", "16")
        .env("STRASSEN_THRESHOLD", "2")
        .args(["--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"size\": 16"))
        .stdout(predicate::str::contains("\"threshold\": 2"));
}

#[test]
fn json_report() {
    let output = strassen()
        .args(["--demo", "-t", "1", "--json", "-p"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["size"], 4);
    assert_eq!(json["consistent"], true);
    assert_eq!(json["results"][0]["algorithm"], "Strassen");
    assert_eq!(json["results"][0]["stats"]["base_cases"], 49);
    assert_eq!(
        json["results"][1]["product"][3],
        serde_json::json!([560, 502, 444, 386])
    );
}

#[test]
fn zero_threshold_is_config_error() {
    strassen()
        .args(["--demo", "-t", "0"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn odd_split_is_rejected_without_padding() {
    strassen()
        .args(["-n", "12", "-t", "1", "--algo", "strassen", "-q"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid size 3"));
}

#[test]
fn odd_size_with_padding() {
    strassen()
        .args(["-n", "12", "-t", "1", "--pad"])
        .assert()
        .success();
}

#[test]
fn invalid_algo() {
    strassen()
        .args(["--demo", "--algo", "winograd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown multiplier"));
}

#[test]
fn expired_timeout() {
    strassen()
        .args(["-n", "256", "-t", "1", "--timeout", "0s"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn zero_workers_rejected() {
    strassen()
        .args(["--demo", "--workers", "0"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn dedicated_pool() {
    strassen()
        .args(["-n", "64", "-t", "8", "--workers", "2", "--algo", "strassen"])
        .assert()
        .success();
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("product.txt");
    strassen()
        .args(["--demo", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().last(), Some("560 502 444 386"));
}

#[test]
fn completion_bash() {
    strassen()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strassen"));
}
