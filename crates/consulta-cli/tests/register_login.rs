use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn register_args(name: &str, email: &str, password: &str) -> Vec<String> {
    vec![
        "register".into(),
        "--name".into(),
        name.into(),
        "--email".into(),
        email.into(),
        "--password".into(),
        password.into(),
    ]
}

#[test]
fn test_register_then_login_round_trip() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("Ann Lee", " Ann@Test.com ", "abcdef"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Ann Lee"));

    // Login matches against the normalized email.
    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(["login", "--email", "ann@test.com", "--password", "abcdef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Ann Lee"));
}

#[test]
fn test_duplicate_email_rejected_across_casing() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("A", "a@x.com", "secret1"))
        .assert()
        .success();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("B", " A@X.com ", "secret2"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "User with this email already exists",
        ));
}

#[test]
fn test_wrong_password_fails_with_generic_message() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("Ann", "ann@test.com", "abcdef"))
        .assert()
        .success();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(["login", "--email", "ann@test.com", "--password", "wrong1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong email or password"));
}

#[test]
fn test_short_password_fails_validation_before_store() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("Ann", "ann@test.com", "abc"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Password must be at least 6 characters",
        ));

    // Validation short-circuited: nothing was persisted.
    assert!(!dir.path().join("accounts.json").exists());
}

#[test]
fn test_headless_commands_log_to_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("Ann", "ann@test.com", "abcdef"))
        .assert()
        .success();

    let logs: Vec<_> = std::fs::read_dir(dir.path().join("logs"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);
    let contents = std::fs::read_to_string(&logs[0]).unwrap();
    assert!(contents.contains("registered account"));
}

#[test]
fn test_blank_fields_fail_validation() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("consulta")
        .env("CONSULTA_HOME", dir.path())
        .args(register_args("   ", "ann@test.com", "abcdef"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill all fields"));
}
