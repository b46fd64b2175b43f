use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const VALID_DOC: &str =
    "---\ndescription: React 最佳实践\nglobs: \"*.tsx\"\n---\n# React 指南\n\n使用函数组件。\n";

/// A throwaway working directory with `source/` and `translated/` corpora.
pub struct Corpus {
    pub root: TempDir,
}

impl Corpus {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(root.path().join("source")).expect("create source dir");
        fs::create_dir_all(root.path().join("translated")).expect("create translated dir");
        Self { root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn source(&self, ids: &[&str]) -> &Self {
        for id in ids {
            write_doc(&self.path("source"), id, "---\ndescription: x\nglobs: \"*\"\n---\n# x\n");
        }
        self
    }

    pub fn translated(&self, ids: &[&str]) -> &Self {
        for id in ids {
            write_doc(&self.path("translated"), id, VALID_DOC);
        }
        self
    }

    /// Binary invocation rooted in the corpus, isolated from any ambient config.
    pub fn tracker(&self) -> Command {
        let mut command = Command::cargo_bin("mdc-tracker").expect("binary builds");
        command
            .current_dir(self.root.path())
            .env_remove("MDC_TRACKER_CONFIG")
            .env("RUST_LOG", "warn");
        command
    }

    /// `count` against the corpus directories, writing `report.json`.
    pub fn count(&self) -> Command {
        let mut command = self.tracker();
        command.args([
            "count",
            "--source",
            "source",
            "--translated",
            "translated",
            "--output",
            "report.json",
        ]);
        command
    }
}

pub fn write_doc(dir: &Path, id: &str, content: &str) {
    fs::write(dir.join(format!("{id}.mdc")), content).expect("write document");
}
