use predicates::prelude::*;

use crate::common::Corpus;

#[test]
fn show_config_prints_builtin_taxonomy() {
    let corpus = Corpus::new();

    corpus
        .tracker()
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[taxonomy.tables]]"))
        .stdout(predicate::str::contains("category = \"ai_ml\""))
        .stdout(predicate::str::contains("extension = \"mdc\""));
}

#[test]
fn explicit_missing_config_is_fatal() {
    let corpus = Corpus::new();

    corpus
        .tracker()
        .args(["--config", "absent.toml", "show-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn invalid_config_value_names_the_field() {
    let corpus = Corpus::new();
    std::fs::write(corpus.path("bad.toml"), "[report]\nrecent_limit = 0\n").expect("write config");

    corpus
        .tracker()
        .args(["show-config", "--config", "bad.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("report.recent_limit"));
}
