use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use crate::common::Corpus;

fn read_report(corpus: &Corpus) -> Value {
    let raw = fs::read_to_string(corpus.path("report.json")).expect("report written");
    serde_json::from_str(&raw).expect("report is JSON")
}

#[test]
fn count_writes_console_and_json_reports() {
    let corpus = Corpus::new();
    corpus
        .source(&["react", "mysql", "docker", "django-react-adapter"])
        .translated(&["react"]);

    corpus
        .count()
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 4"))
        .stdout(predicate::str::contains("Translated: 1 (25.0%)"))
        .stdout(predicate::str::contains("Frontend: 1/2 (50.0%)"))
        .stdout(predicate::str::contains("      - mysql.mdc"))
        .stdout(predicate::str::contains("JSON report saved to: report.json"));

    let report = read_report(&corpus);
    assert_eq!(report["stats"]["total"], 4);
    assert_eq!(report["stats"]["translated"], 1);
    assert_eq!(report["stats"]["remaining"], 3);
    assert_eq!(report["stats"]["percentage"], "25.0");
    assert_eq!(
        report["categories"]["frontend"]["files"],
        serde_json::json!(["django-react-adapter", "react"])
    );
    assert_eq!(report["prioritized"]["priority1"], serde_json::json!(["mysql"]));
    assert_eq!(
        report["prioritized"]["others"],
        serde_json::json!(["django-react-adapter", "docker"])
    );
    assert_eq!(
        report["missing"],
        serde_json::json!(["django-react-adapter", "docker", "mysql"])
    );
    assert!(report["timestamp"].as_str().is_some());
}

#[test]
fn empty_translated_directory_reports_zero_percent() {
    let corpus = Corpus::new();
    corpus.source(&["a", "b", "c"]);

    corpus
        .count()
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: 3"));

    let report = read_report(&corpus);
    assert_eq!(report["stats"]["percentage"], "0.0");
    assert_eq!(report["missing"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(report["translated"], serde_json::json!([]));
}

#[test]
fn empty_source_directory_reports_not_applicable() {
    let corpus = Corpus::new();

    corpus
        .count()
        .assert()
        .success()
        .stdout(predicate::str::contains("Current progress: N/A complete"));

    assert_eq!(read_report(&corpus)["stats"]["percentage"], "N/A");
}

#[test]
fn missing_source_directory_exits_with_failure() {
    let corpus = Corpus::new();

    corpus
        .tracker()
        .args(["count", "--source", "absent", "--translated", "translated"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("source directory does not exist"));

    assert!(!corpus.path("translation-progress.json").exists());
}

#[test]
fn missing_translated_directory_exits_with_failure() {
    let corpus = Corpus::new();
    corpus.source(&["a"]);

    corpus
        .tracker()
        .args(["count", "--source", "source", "--translated", "absent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("translated directory does not exist"));
}

#[test]
fn unwritable_report_path_is_a_distinct_failure() {
    let corpus = Corpus::new();
    corpus.source(&["a"]);

    corpus
        .tracker()
        .args([
            "count",
            "--source",
            "source",
            "--translated",
            "translated",
            "--output",
            "no-such-dir/report.json",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write progress report"));
}

#[test]
fn no_json_skips_the_report_file() {
    let corpus = Corpus::new();
    corpus.source(&["a"]).translated(&["a"]);

    corpus
        .count()
        .arg("--no-json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current progress: 100.0% complete"))
        .stdout(predicate::str::contains("JSON report saved").not());

    assert!(!corpus.path("report.json").exists());
}

#[test]
fn reports_are_identical_across_runs_except_timestamp() {
    let corpus = Corpus::new();
    corpus
        .source(&["vue", "flask", "pandas", "html", "svn"])
        .translated(&["vue", "stray"]);

    corpus.count().assert().success();
    let mut first = read_report(&corpus);
    corpus.count().assert().success();
    let mut second = read_report(&corpus);

    first["timestamp"] = Value::Null;
    second["timestamp"] = Value::Null;
    assert_eq!(first, second);
    assert_eq!(first["orphaned"], serde_json::json!(["stray"]));
}

#[test]
fn config_file_supplies_directories() {
    let corpus = Corpus::new();
    corpus.source(&["mysql"]).translated(&["mysql"]);
    fs::write(
        corpus.path("mdc-tracker.toml"),
        "[paths]\nsource_dir = \"source\"\ntranslated_dir = \"translated\"\nreport_path = \"from-config.json\"\n",
    )
    .expect("write config");

    corpus
        .tracker()
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database: 1/1 (100.0%)"));

    assert!(corpus.path("from-config.json").exists());
}
