//! Represents the pit concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the binary data.

use sha1::{Digest, Sha1};
use thiserror::Error;

mod attribution;
pub use attribution::{Attribution, AttributionError};

mod blob;
pub use blob::Blob;

mod commit;
pub use commit::Commit;

mod id;
pub use id::{Id, ParseIdError, ID_LEN};

mod kind;
pub use kind::Kind;

mod tree;
pub use tree::{Entry, Tree, REGULAR_FILE_MODE};

/// An error which can be returned when serializing object content.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ContentError {
    /// A tree entry's ID is not 40 lowercase hex digits.
    #[error("invalid object ID: {0}")]
    InvalidId(#[from] ParseIdError),

    /// A tree entry's name is empty, `.` or `..`, or contains `/` or NUL.
    #[error("invalid tree entry name {0:?}")]
    InvalidEntryName(String),

    /// Two tree entries share a name.
    #[error("duplicate tree entry name {0:?}")]
    DuplicateEntryName(String),
}

/// Anything that can be turned into the raw content of a pit object.
///
/// Implemented by `Blob`, `Tree`, and `Commit`. The object store consumes
/// this trait; it never needs to know which variant it was given.
pub trait Content {
    /// The kind token written into the storage frame.
    fn kind(&self) -> Kind;

    /// Produce the exact content bytes that will be framed, hashed, and stored.
    fn serialize(&self) -> Result<Vec<u8>, ContentError>;
}

/// Describes a single object whose content has been serialized and whose ID
/// has been computed.
///
/// An `Object` is immutable. Its ID is derived at construction time, so there
/// is never an `Object` without an ID.
#[derive(Clone, Debug)]
pub struct Object {
    id: Id,
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new Object from raw content and compute its ID.
    pub fn new(kind: Kind, content: Vec<u8>) -> Object {
        let mut hasher = Sha1::new();
        hasher.update(header(kind, content.len()));
        hasher.update(&content);

        let final_hash = hasher.finalize();

        let mut id = [0; ID_LEN];
        id.copy_from_slice(final_hash.as_slice());

        Object {
            id: Id::from(id),
            kind,
            content,
        }
    }

    /// Serialize a `Blob`, `Tree`, or `Commit` and seal the result.
    ///
    /// Fails before any hashing occurs if the content can't be serialized.
    pub fn from_content<C: Content + ?Sized>(content: &C) -> Result<Object, ContentError> {
        Ok(Object::new(content.kind(), content.serialize()?))
    }

    /// Return the ID of the object.
    ///
    /// This is functionally equivalent to the output of
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object).
    pub fn id(&self) -> Id {
        self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the size (in bytes) of the object's content, not including the header.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the raw content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the `<kind> <len>\0` prefix of the storage frame.
    pub fn header(&self) -> Vec<u8> {
        header(self.kind, self.len())
    }
}

fn header(kind: Kind, len: usize) -> Vec<u8> {
    format!("{} {}\0", kind, len).into_bytes()
}
