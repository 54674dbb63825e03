use super::{Content, ContentError, Id, Kind};

/// Mode token written for every tree entry. Pit only records regular files.
pub const REGULAR_FILE_MODE: &str = "100644";

/// A single (name, object ID) pair inside a tree.
///
/// The ID is kept in its hex form and is only decoded when the tree is
/// serialized. The name is checked at the same time: it must be a single
/// path component, so it may not be empty, `.` or `..`, and may not contain
/// `/` or NUL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    name: String,
    id: String,
}

impl Entry {
    pub fn new<N: Into<String>, I: Into<String>>(name: N, id: I) -> Entry {
        Entry {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Create an entry pointing at an already-stored object.
    pub fn from_id<N: Into<String>>(name: N, id: Id) -> Entry {
        Entry::new(name, id.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A flat listing of entries.
///
/// Entries are serialized in byte-wise order of their names, so two trees
/// built from the same entries always produce the same ID, no matter the
/// order in which the entries were added.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<Entry>,
}

impl Tree {
    pub fn new(entries: Vec<Entry>) -> Tree {
        Tree { entries }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl Content for Tree {
    fn kind(&self) -> Kind {
        Kind::Tree
    }

    fn serialize(&self) -> Result<Vec<u8>, ContentError> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        for entry in &sorted {
            if !is_valid_name(&entry.name) {
                return Err(ContentError::InvalidEntryName(entry.name.clone()));
            }
        }

        if let Some(pair) = sorted.windows(2).find(|pair| pair[0].name == pair[1].name) {
            return Err(ContentError::DuplicateEntryName(pair[0].name.clone()));
        }

        let mut r = Vec::new();
        for entry in sorted {
            let id = Id::from_hex(&entry.id)?;

            r.extend_from_slice(REGULAR_FILE_MODE.as_bytes());
            r.push(b' ');
            r.extend_from_slice(entry.name.as_bytes());
            r.push(0);
            r.extend_from_slice(id.as_bytes());
        }

        Ok(r)
    }
}

fn is_valid_name(name: &str) -> bool {
    !matches!(name, "" | "." | "..") && !name.contains(|c| c == '/' || c == '\0')
}
