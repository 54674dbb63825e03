use super::{Content, ContentError, Kind};

/// The content of a single file, stored verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    pub fn new(data: Vec<u8>) -> Blob {
        Blob { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Content for Blob {
    fn kind(&self) -> Kind {
        Kind::Blob
    }

    fn serialize(&self) -> Result<Vec<u8>, ContentError> {
        Ok(self.data.clone())
    }
}
