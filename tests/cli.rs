use assert_cmd::Command;
use predicates::prelude::*;

const HELLO_HASH: &str = "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1";

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shacrypt"));
    cmd.env_remove("SHACRYPT_ALGORITHM")
        .env_remove("SHACRYPT_ROUNDS");
    cmd
}

#[test]
fn hash_with_explicit_salt() {
    bin()
        .env("SHACRYPT_PASSWORD", "Hello world!")
        .arg("hash")
        .arg("--salt")
        .arg("saltstring")
        .assert()
        .success()
        .stdout(predicate::str::contains(HELLO_HASH));
}

#[test]
fn hash_with_sha256_and_rounds() {
    bin()
        .env("SHACRYPT_PASSWORD", "pw")
        .arg("hash")
        .arg("--algorithm")
        .arg("5")
        .arg("--rounds")
        .arg("1000")
        .arg("--salt")
        .arg("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$5$rounds=1000$abc$zdUXQ3de2d3x/8MYX1t30oZjPfJThZR5heHeVDYi8j6",
        ));
}

#[test]
fn hash_with_setting() {
    bin()
        .env("SHACRYPT_PASSWORD", "super password")
        .arg("hash")
        .arg("--setting")
        .arg("$5$salt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$5$salt$hiNtIdUiCzVfs12fahM0sjQcF6XU0yE5G46VOsYmS4D",
        ));
}

#[test]
fn hash_reads_password_from_stdin() {
    bin()
        .env_remove("SHACRYPT_PASSWORD")
        .arg("hash")
        .arg("--salt")
        .arg("saltstring")
        .write_stdin("Hello world!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(HELLO_HASH));
}

#[test]
fn hash_with_random_salt() {
    bin()
        .env("SHACRYPT_PASSWORD", "pw")
        .arg("hash")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\$6\$[./0-9A-Za-z]{16}\$[./0-9A-Za-z]{86}\n$").unwrap());
}

#[test]
fn hash_with_invalid_salt_fails() {
    bin()
        .env("SHACRYPT_PASSWORD", "pw")
        .arg("hash")
        .arg("--salt")
        .arg("invalid-salt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid salt string"));
}

#[test]
fn verify_matching_password() {
    bin()
        .env("SHACRYPT_PASSWORD", "Hello world!")
        .arg("verify")
        .arg(HELLO_HASH)
        .assert()
        .success()
        .stdout(predicate::str::contains("password matches"));
}

#[test]
fn verify_wrong_password_fails() {
    bin()
        .env("SHACRYPT_PASSWORD", "wrong_pw")
        .arg("verify")
        .arg(HELLO_HASH)
        .assert()
        .failure()
        .stderr(predicate::str::contains("password does not match"));
}

#[test]
fn verify_unsupported_algorithm_fails() {
    bin()
        .env("SHACRYPT_PASSWORD", "pass")
        .arg("verify")
        .arg("$1$4WZnIm8V$Sg8KVWIq4rKfNz3Z23jZK0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported algorithm"));
}

#[test]
fn empty_piped_password_fails() {
    bin()
        .env_remove("SHACRYPT_PASSWORD")
        .arg("hash")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password provided"));
}
