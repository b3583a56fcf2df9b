use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn seeded_ledger(temp_dir: &TempDir) -> std::path::PathBuf {
    let ledger = temp_dir.path().join("ledger.json");
    cargo::cargo_bin_cmd!("tarot-ledger")
        .args([
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--date",
            "2024-05-10",
            "--spread",
            "Three Card",
            "--cards",
            "The Fool, The Sun, Nine of Cups",
        ])
        .assert()
        .success();
    ledger
}

#[test]
fn test_list_with_no_color_is_plain() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = seeded_ledger(&temp_dir);

    cargo::cargo_bin_cmd!("tarot-ledger")
        .env("NO_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .args(["list", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 2024-05-10 · Three Card"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_summary_with_clicolor_force() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = seeded_ledger(&temp_dir);

    cargo::cargo_bin_cmd!("tarot-ledger")
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["summary", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarot Summary"));
}

#[test]
fn test_color_disabled_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = seeded_ledger(&temp_dir);
    let config_path = temp_dir.path().join("tarot-ledger.toml");
    std::fs::write(&config_path, "[display]\ncolor = false\n").unwrap();

    cargo::cargo_bin_cmd!("tarot-ledger")
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args([
            "summary",
            "--config",
            config_path.to_str().unwrap(),
            "--file",
            ledger.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tarot Summary"))
        .stdout(predicate::str::contains("- The Fool: 1"));
}
