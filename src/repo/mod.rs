//! Represents a pit repository.
//!
//! ## Design Goals
//!
//! The required methods on the `Repo` trait are the primitive operations a
//! storage mechanism must provide: writing an object and moving the head.
//! The provided methods build the snapshot workflow on top of those, so any
//! storage mechanism gets `store` and `commit_workspace` for free.
//!
//! Pit ships one storage mechanism, a `.git` directory on the local file
//! system (see `pit::repo::on_disk`).

use chrono::{DateTime, FixedOffset};
use tracing::info;

use crate::identity::Identity;
use crate::object::{Attribution, Blob, Commit, Content, Entry, Id, Object, Tree};
use crate::workspace::Workspace;

mod error;
pub use error::{Error, Result};

pub mod on_disk;

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing a pit repo.
pub trait Repo {
    /// Write a sealed object into the repository.
    ///
    /// Writing an object whose ID is already present must succeed and leave
    /// equivalent content in place.
    fn put_object(&mut self, object: &Object) -> Result<()>;

    /// Record `commit` as the most recent commit.
    fn append_head(&mut self, commit: &Id) -> Result<()>;

    /// Serialize, hash, and persist a `Blob`, `Tree`, or `Commit`.
    ///
    /// Returns the new object's ID. The input is not modified.
    fn store<C: Content + ?Sized>(&mut self, content: &C) -> Result<Id>
    where
        Self: Sized,
    {
        let object = Object::from_content(content)?;
        self.put_object(&object)?;
        Ok(object.id())
    }

    /// Snapshot every file in `workspace` into a new commit and move the head to it.
    ///
    /// Objects are stored blobs first, then the tree, then the commit, so
    /// nothing ever references an object that hasn't been written yet.
    fn commit_workspace(
        &mut self,
        workspace: &Workspace,
        identity: &Identity,
        message: &str,
        when: DateTime<FixedOffset>,
    ) -> Result<Id>
    where
        Self: Sized,
    {
        let author = Attribution::new(identity.name(), identity.email(), when)?;

        let mut tree = Tree::default();
        for path in workspace.list_files()? {
            let name = path
                .to_str()
                .ok_or_else(|| Error::NonUtf8Path(path.clone()))?
                .to_string();

            let blob = Blob::new(workspace.read_file(&path)?);
            let id = self.store(&blob)?;
            tree.push(Entry::from_id(name, id));
        }

        let tree_id = self.store(&tree)?;

        let commit = Commit::new(tree_id, author, message);
        let commit_id = self.store(&commit)?;

        self.append_head(&commit_id)?;

        info!(commit = %commit_id, tree = %tree_id, files = tree.entries().len(), "created commit");
        Ok(commit_id)
    }
}
