//! A repository that stores content on the local file system.
//!
//! **IMPORTANT NOTE:** This is intended as a small reference implementation
//! and does not handle all of the edge cases that the traditional `git`
//! command-line interface will handle.
//!
//! That said, it does intentionally use the same loose object format as
//! command-line git, so objects written here can be read by `git cat-file`.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::{write::ZlibEncoder, Compression};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{Error, Repo, Result};
use crate::object::{Id, Object};

/// Prefix for in-flight object files inside a fan-out directory.
const TEMP_OBJECT_PREFIX: &str = "tmp_obj_";

/// Implementation of `pit::repo::Repo` that stores content on the local file system.
///
/// The layout is:
///
/// ```text
/// <work_dir>/.git/
///   objects/<first 2 hex digits>/<remaining 38 hex digits>
///   refs/
///   HEAD
/// ```
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
    objects_dir: PathBuf,
}

impl OnDisk {
    /// Open an existing on-disk pit repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path. Use `init` function to create an empty on-disk repository if
    /// necessary.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(".git");
        if !git_dir.exists() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        Ok(OnDisk::at(work_dir))
    }

    /// Creates a new, empty pit repository on the local file system.
    ///
    /// The working directory itself must already exist. Either all of
    /// `.git`, `.git/objects`, and `.git/refs` are created, or none of them
    /// are left behind.
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref();

        let git_dir = work_dir.join(".git");
        if git_dir.exists() {
            return Err(Error::GitDirShouldntExist(git_dir));
        }

        fs::create_dir(&git_dir)?;

        if let Err(err) = create_skeleton(&git_dir) {
            // Best effort cleanup; `err` is what gets reported.
            let _ = fs::remove_dir_all(&git_dir);
            return Err(err);
        }

        let work_dir = fs::canonicalize(work_dir)?;
        info!(path = %work_dir.display(), "initialized repository");

        Ok(OnDisk::at(work_dir))
    }

    fn at(work_dir: PathBuf) -> OnDisk {
        let git_dir = work_dir.join(".git");
        let objects_dir = git_dir.join("objects");

        OnDisk {
            work_dir,
            git_dir,
            objects_dir,
        }
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the path to the `.git/objects` directory.
    pub fn objects_dir(&self) -> &Path {
        self.objects_dir.as_path()
    }

    /// Return the path to the head reference file.
    pub fn head_path(&self) -> PathBuf {
        self.git_dir.join("HEAD")
    }

    /// Return the path where the object with the given ID is stored.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        self.objects_dir.join(id.loose_path())
    }

    /// Compress `object` into a fresh temporary file in its fan-out directory.
    ///
    /// Returns the still-unnamed file and the path it should be renamed to.
    /// Nothing exists at the final path until the caller persists the file.
    /// On Unix the file is made read-only (0444), as git does for loose objects.
    pub(crate) fn write_temp_object(&self, object: &Object) -> Result<(NamedTempFile, PathBuf)> {
        let object_path = self.object_path(&object.id());
        let fan_out_dir = object_path.parent().unwrap_or_else(|| self.objects_dir.as_path());

        DirBuilder::new().recursive(true).create(fan_out_dir)?;

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_OBJECT_PREFIX)
            .rand_bytes(6)
            .tempfile_in(fan_out_dir)?;

        {
            let mut encoder = ZlibEncoder::new(&mut temp, Compression::default());
            encoder.write_all(&object.header())?;
            encoder.write_all(object.content())?;
            encoder.finish()?;
        }

        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o444))?;
        }

        Ok((temp, object_path))
    }
}

impl Repo for OnDisk {
    /// Writes the object as a zlib-compressed loose object.
    ///
    /// The compressed frame is written to a temporary file which is then
    /// renamed onto its final path, so the final path never holds a partial
    /// object. An existing object with the same ID is replaced by identical
    /// content.
    fn put_object(&mut self, object: &Object) -> Result<()> {
        let (temp, object_path) = self.write_temp_object(object)?;

        temp.persist(&object_path).map_err(|err| err.error)?;

        debug!(
            id = %object.id(),
            kind = %object.kind(),
            len = object.len(),
            "wrote loose object"
        );
        Ok(())
    }

    /// Appends `commit` and a newline to `.git/HEAD`, creating it if needed.
    ///
    /// There is no locking: two processes committing at once may interleave.
    fn append_head(&mut self, commit: &Id) -> Result<()> {
        let mut head = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.head_path())?;

        writeln!(head, "{}", commit)?;

        debug!(commit = %commit, "appended to HEAD");
        Ok(())
    }
}

fn create_skeleton(git_dir: &Path) -> Result<()> {
    fs::create_dir(git_dir.join("objects"))?;
    fs::create_dir(git_dir.join("refs"))?;
    Ok(())
}

#[cfg(test)]
mod tests;
