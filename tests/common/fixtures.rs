// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Number of records in [`flights_json`]
#[allow(dead_code)]
pub const FLIGHT_COUNT: usize = 5;

/// A small flight-booking JSON array, two records mention New York
#[allow(dead_code)]
pub fn flights_json() -> String {
    r#"[
  {"id": 1, "from": "New York", "to": "London", "airline": "Oceanic"},
  {"id": 2, "from": "Paris", "to": "Tokyo", "airline": "Skyway"},
  {"id": 3, "from": "Boston", "to": "New York", "airline": "Oceanic"},
  {"id": 4, "from": "Berlin", "to": "Rome", "airline": "Alpine"},
  {"id": 5, "from": "York", "to": "Leeds", "airline": "Northern"}
]"#
    .to_string()
}

/// Temporary directory tree for ingestion tests
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// A mixed tree: plain documents, a JSON array and a nested file
    #[allow(dead_code)]
    pub fn small() -> Self {
        let flights = flights_json();
        Self::with_files(&[
            ("flights.json", flights.as_str()),
            ("notes.txt", "Refund policy: tickets are refundable within 24 hours."),
            ("guides/baggage.md", "# Baggage\n\nOne carry-on bag per passenger."),
            ("config.json", r#"{"airline": "Oceanic", "hub": "New York"}"#),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Add a file with raw bytes (e.g. invalid UTF-8)
    #[allow(dead_code)]
    pub fn add_bytes(&mut self, path: &str, bytes: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        std::fs::write(&full_path, bytes).unwrap();
        self.files.push(full_path.clone());
        full_path
    }

    /// Get path to the repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the repository
    #[allow(dead_code)]
    pub fn file(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}
