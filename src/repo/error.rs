use std::path::PathBuf;

use thiserror::Error;

use crate::object::{AttributionError, ContentError};

/// Describes the potential error conditions that might arise from pit `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("work dir {0} doesn't exist")]
    WorkDirDoesntExist(PathBuf),

    #[error("git dir {0} doesn't exist")]
    GitDirDoesntExist(PathBuf),

    #[error("git dir {0} already exists")]
    GitDirShouldntExist(PathBuf),

    #[error("author identity unknown: {0} is not set")]
    MissingIdentity(&'static str),

    #[error("path {0} is not valid UTF-8")]
    NonUtf8Path(PathBuf),

    #[error("{0} is not a regular file")]
    NotAFile(PathBuf),

    #[error(transparent)]
    InvalidAttribution(#[from] AttributionError),

    #[error(transparent)]
    InvalidContent(#[from] ContentError),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for pit `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
