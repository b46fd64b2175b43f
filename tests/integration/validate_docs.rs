use predicates::prelude::*;

use crate::common::{write_doc, Corpus, VALID_DOC};

#[test]
fn validate_reports_errors_and_warnings() {
    let corpus = Corpus::new();
    let dir = corpus.path("translated");
    write_doc(&dir, "good", VALID_DOC);
    write_doc(
        &dir,
        "english",
        "---\ndescription: Plain English\nglobs: \"*.go\"\n---\nno heading here\n",
    );
    write_doc(&dir, "no-globs", "---\ndescription: 说明\n---\n# 标题\n");

    corpus
        .tracker()
        .args(["validate", "translated"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total files: 3"))
        .stdout(predicate::str::contains("Valid files: 2"))
        .stdout(predicate::str::contains("Invalid files: 1"))
        .stdout(predicate::str::contains(
            "  - no-globs.mdc: front matter is missing the `globs` field",
        ))
        .stdout(predicate::str::contains(
            "  - english.mdc: `description` should contain Chinese text",
        ))
        .stdout(predicate::str::contains(
            "  - english.mdc: Markdown body should contain a heading",
        ));
}

#[test]
fn validate_passes_for_clean_corpus() {
    let corpus = Corpus::new();
    corpus.translated(&["react", "vue"]);

    corpus
        .tracker()
        .args(["validate", "translated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings: 0"));
}
