use std::fs;

use predicates::prelude::*;

use crate::common::{write_doc, Corpus};

#[test]
fn fix_yaml_quotes_globs_then_validation_passes() {
    let corpus = Corpus::new();
    let dir = corpus.path("translated");
    write_doc(
        &dir,
        "react",
        "---\ndescription: React 指南\nglobs: *.tsx, *.jsx\n---\n# React\n\n内容\n",
    );

    corpus
        .tracker()
        .args(["validate", "translated"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("YAML parse error"));

    corpus
        .tracker()
        .args(["fix-yaml", "translated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed: 1"))
        .stdout(predicate::str::contains("  - react.mdc"));

    assert_eq!(
        fs::read_to_string(dir.join("react.mdc")).expect("read fixed file"),
        "---\ndescription: React 指南\nglobs: \"*.tsx, *.jsx\"\n---\n# React\n\n内容\n"
    );

    corpus
        .tracker()
        .args(["validate", "translated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All files passed validation."));
}

#[test]
fn fix_yaml_defaults_to_translated_directory_from_config() {
    let corpus = Corpus::new();
    write_doc(&corpus.path("translated"), "flask", "---\nglobs: **/*.py\n---\n# Flask\n");
    fs::write(
        corpus.path("mdc-tracker.toml"),
        "[paths]\ntranslated_dir = \"translated\"\n",
    )
    .expect("write config");

    corpus
        .tracker()
        .args(["fix-yaml", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would fix (dry run): 1"));

    assert_eq!(
        fs::read_to_string(corpus.path("translated/flask.mdc")).expect("read"),
        "---\nglobs: **/*.py\n---\n# Flask\n"
    );
}

#[test]
fn fix_yaml_reports_broken_files_and_fails() {
    let corpus = Corpus::new();
    write_doc(&corpus.path("translated"), "broken", "# no front matter\n");
    write_doc(&corpus.path("translated"), "fine", "---\nglobs: \"*\"\n---\n# ok\n");

    corpus
        .tracker()
        .args(["fix-yaml", "translated"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("Unchanged: 1"))
        .stdout(predicate::str::contains("Some files could not be repaired."));
}

#[test]
fn fix_yaml_on_missing_directory_fails() {
    let corpus = Corpus::new();

    corpus
        .tracker()
        .args(["fix-yaml", "absent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("target directory does not exist"));
}

#[test]
fn fix_yaml_on_empty_directory_succeeds() {
    let corpus = Corpus::new();

    corpus
        .tracker()
        .args(["fix-yaml", "translated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files scanned: 0"));
}
