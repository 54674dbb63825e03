//! The working tree: the files a commit snapshots.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repo::{Error, Result};

/// Names that are never part of a snapshot.
const IGNORED: &[&str] = &[".git", ".DS_Store"];

/// Lists and reads the files in a working directory.
///
/// Only regular files directly inside the root are considered; pit trees
/// are flat. Symbolic links are followed and recorded as the file they
/// point to.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new<P: Into<PathBuf>>(root: P) -> Workspace {
        Workspace { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Return the files in the workspace, relative to its root and sorted by name.
    ///
    /// The `.git` control directory and `.DS_Store` files are skipped. Any
    /// other entry that doesn't resolve to a regular file, such as a
    /// subdirectory, is an `Error::NotAFile`.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();

            if name.to_str().map_or(false, |n| IGNORED.contains(&n)) {
                continue;
            }

            let path = entry.path();
            if !fs::metadata(&path)?.is_file() {
                return Err(Error::NotAFile(path));
            }

            files.push(PathBuf::from(name));
        }

        files.sort();
        Ok(files)
    }

    /// Read the contents of a file, given its path relative to the root.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        Ok(fs::read(self.root.join(path))?)
    }
}
