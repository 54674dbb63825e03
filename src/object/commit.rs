use super::{Attribution, Content, ContentError, Id, Kind};

/// A snapshot record: one tree, one attribution, and a message.
///
/// Pit has no separate committer identity, so the attribution is written
/// for both the `author` and `committer` lines. There are no parent commits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    tree: Id,
    author: Attribution,
    message: String,
}

impl Commit {
    pub fn new<M: Into<String>>(tree: Id, author: Attribution, message: M) -> Commit {
        Commit {
            tree,
            author,
            message: message.into(),
        }
    }

    pub fn tree(&self) -> Id {
        self.tree
    }

    pub fn author(&self) -> &Attribution {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Content for Commit {
    fn kind(&self) -> Kind {
        Kind::Commit
    }

    fn serialize(&self) -> Result<Vec<u8>, ContentError> {
        let lines = [
            format!("tree {}", self.tree),
            format!("author {}", self.author),
            format!("committer {}", self.author),
            String::new(),
            self.message.clone(),
        ];

        Ok(lines.join("\n").into_bytes())
    }
}
