//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_source("main.c", "int main() { return 0; }\n");
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::sources;
    pub use super::TestFixture;
}

/// Common source snippets for testing.
#[allow(dead_code)]
pub mod sources {
    /// A root including one local and one system header (the canonical
    /// end-to-end example).
    pub const MAIN_C: &str =
        "#include \"a.h\"\n#include <stdio.h>\nint main(){ return 0; }\n";

    /// The local header for `MAIN_C`.
    pub const A_H: &str = "#include <stdlib.h>\nint helper(){return 1;}\n";

    /// A root with no includes at all.
    pub const PLAIN_C: &str = "int plain(void) { return 42; }\n";

    /// Two headers including each other.
    pub const CYCLE_A_H: &str = "#include \"cycle_b.h\"\nint a();\n";
    pub const CYCLE_B_H: &str = "#include \"cycle_a.h\"\nint b();\n";

    /// Minimal valid manifest content.
    pub const MINIMAL_MANIFEST: &str = "roots:\n  - main.c\n";
}

/// A test fixture that provides a temporary directory with optional
/// manifest and source files.
///
/// This struct simplifies the common pattern of creating a temp directory
/// and populating it with a `.consolidate.yaml` manifest plus the source
/// tree a consolidation run needs.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.consolidate.yaml` manifest file with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp_dir
            .child(".consolidate.yaml")
            .write_str(content)
            .expect("Failed to write manifest file");
        self
    }

    /// Add a source file with the given path and content.
    pub fn with_source(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write source file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the manifest file.
    pub fn manifest_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".consolidate.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("consolidate");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_manifest() {
        let fixture = TestFixture::new().with_manifest(sources::MINIMAL_MANIFEST);
        assert!(fixture.manifest_path().exists());
    }

    #[test]
    fn test_fixture_with_source() {
        let fixture = TestFixture::new().with_source("main.c", sources::PLAIN_C);
        assert!(fixture.path().join("main.c").exists());
    }

    #[test]
    fn test_manifest_snippet_is_valid_yaml() {
        serde_yaml::from_str::<serde_yaml::Value>(sources::MINIMAL_MANIFEST)
            .expect("Manifest snippet should be valid YAML");
    }
}
