//! File location over an ordered include search path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Resolves bare include names to paths by probing an ordered list of
/// directories.
///
/// The current directory is always probed first, followed by the
/// caller-supplied include directories in the order given. The first
/// directory containing a regular file with the requested name wins.
#[derive(Debug, Clone)]
pub struct FileLocator {
    /// Search directories in probe order, `.` first.
    dirs: Vec<PathBuf>,
}

impl FileLocator {
    /// Create a locator for the given include directories.
    pub fn new<P: AsRef<Path>>(include_dirs: &[P]) -> Self {
        let mut dirs = vec![PathBuf::from(".")];
        dirs.extend(include_dirs.iter().map(|d| d.as_ref().to_path_buf()));
        Self { dirs }
    }

    /// The search directories in probe order.
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Locate `filename` on the search path.
    ///
    /// Returns `Ok(Some(path))` for the first hit, `Ok(None)` if no search
    /// directory contains a regular file with that name (a legitimate,
    /// silent outcome; callers decide whether to diagnose it), and `Err`
    /// only for a genuine I/O failure while probing, which is deliberately
    /// kept distinct from not-found.
    pub fn locate(&self, filename: &str) -> Result<Option<PathBuf>> {
        for dir in &self.dirs {
            let candidate = dir.join(filename);
            match fs::metadata(&candidate) {
                Ok(meta) if meta.is_file() => return Ok(Some(candidate)),
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                // A directory on the search path may itself be missing;
                // probing through it reports NotADirectory on some platforms.
                Err(e) if e.kind() == io::ErrorKind::NotADirectory => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(None)
    }
}
