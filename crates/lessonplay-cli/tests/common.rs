//! Shared fixture for the CLI integration tests.
//!
//! Each integration test file compiles as its own crate, so the compiler
//! cannot see helpers used only from the other files; hence `dead_code`.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use lessonplay_testing::write_file;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let data_dir = root.join("data");

        fs::create_dir_all(data_dir.join("Rehearsal")).expect("Failed to create data dir");
        fs::create_dir_all(data_dir.join("TeachingMethod")).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            root,
            data_dir,
        }
    }

    /// Working directory for commands; config files land here.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn write_transcript(&self, lesson: &str, name: &str, content: &str) -> PathBuf {
        write_file(&self.data_dir, &format!("{}/{}", lesson, name), content)
    }

    pub fn write_labels(&self, content: &str) -> PathBuf {
        write_file(&self.data_dir, "highlow.csv", content)
    }

    pub fn write_annotations(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.root, name, content)
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
        cmd.current_dir(&self.root)
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }
}
