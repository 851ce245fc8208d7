// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with input documents
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a text file with given content
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Generate glossary file path matching main implementation
    pub fn generate_glossary_path<P: AsRef<Path>>(&self, output_path: P) -> PathBuf {
        let output_path = output_path.as_ref();
        let mut glossary_path = output_path.to_path_buf();
        let file_stem = glossary_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        glossary_path.set_file_name(format!("{file_stem}_glossary.txt"));
        glossary_path
    }

    /// Check if the derived glossary file exists for given output file
    pub fn glossary_file_exists<P: AsRef<Path>>(&self, output_path: P) -> bool {
        self.generate_glossary_path(output_path).exists()
    }

    /// Read the derived glossary file for given output file
    pub fn read_glossary_file<P: AsRef<Path>>(
        &self,
        output_path: P,
    ) -> Result<String, std::io::Error> {
        fs::read_to_string(self.generate_glossary_path(output_path))
    }
}
