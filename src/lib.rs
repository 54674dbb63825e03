//! Pit is a minimal content-addressable object store modeled on git's internals.
//!
//! It records snapshots of a working directory as zlib-compressed,
//! SHA-1-addressed blob, tree, and commit objects inside a `.git` directory.

pub mod identity;
pub mod object;
pub mod repo;
pub mod workspace;
