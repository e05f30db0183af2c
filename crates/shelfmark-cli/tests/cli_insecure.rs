use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn remote_http_requires_insecure_flag() {
    let home_dir = tempfile::tempdir().expect("tempdir");
    let home = home_dir.path();

    Command::cargo_bin("shelfmark")
        .expect("shelfmark binary")
        .env("HOME", home)
        .env("SHELFMARK_CREDENTIAL_STORE", "file")
        .args(["--addr", "http://books.example.com/api", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "refusing to use http:// without --insecure",
        ));
}

#[test]
fn insecure_flag_allows_remote_http() {
    let home_dir = tempfile::tempdir().expect("tempdir");
    let home = home_dir.path();

    Command::cargo_bin("shelfmark")
        .expect("shelfmark binary")
        .env("HOME", home)
        .env("SHELFMARK_CREDENTIAL_STORE", "file")
        .args(["--insecure", "--addr", "http://books.example.com/api", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authenticated\": false"));
}
