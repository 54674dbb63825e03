use std::fmt::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Number of bytes in a SHA-1 digest.
pub const ID_LEN: usize = 20;

/// An error which can be returned when parsing a pit object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Among other causes, this variant will be constructed when parsing a string that
    /// contains an uppercase letter.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// ID string is too large to store in target integer type.
    #[error("value is more than 40 digits long")]
    Overflow,

    /// ID string is too small to store in target integer type.
    #[error("value is less than 40 digits long")]
    Underflow,
}

/// An object ID is the SHA-1 digest of an object's storage frame.
/// It is stored as a 20-byte signature, but can also be represented as 40 hex digits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Id {
    id: [u8; ID_LEN],
}

impl Id {
    /// Create a new ID from a 20-byte slice.
    ///
    /// It is an error if the slice contains anything other than 20 bytes.
    pub fn new(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            ID_LEN => {
                let mut buf = [0; ID_LEN];
                buf.copy_from_slice(id);
                Ok(Id { id: buf })
            }
            0 => Err(ParseIdError::Empty),
            n if n < ID_LEN => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            40 => {
                let mut buf = [0; ID_LEN];
                for (byte, pair) in buf.iter_mut().zip(hex.chunks(2)) {
                    *byte = digit_value(pair[0])? << 4 | digit_value(pair[1])?;
                }
                Ok(Id { id: buf })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Returns the raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.id
    }

    /// Returns the path of this object relative to the `objects` directory.
    ///
    /// The first two hex digits name the fan-out directory and the
    /// remaining 38 name the file within it.
    pub fn loose_path(&self) -> PathBuf {
        let hex = self.to_string();
        let (dir, file) = hex.split_at(2);
        [dir, file].iter().collect()
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(id: [u8; ID_LEN]) -> Id {
        Id { id }
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let b = [
            0x3c, 0xd9, 0x32, 0x9a, 0xc5, 0x36, 0x13, 0xa0, 0xbf, 0xa1, 0x98, 0xae, 0x28, 0xf3,
            0xaf, 0x95, 0x7e, 0x49, 0x57, 0x3c,
        ];

        let oid = Id::new(&b).unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
        assert_eq!(oid.as_bytes(), &b[..]);

        let b: [u8; 0] = [];
        assert_eq!(Id::new(&b).unwrap_err(), ParseIdError::Empty);

        assert_eq!(Id::new(&[7; 19]).unwrap_err(), ParseIdError::Underflow);
        assert_eq!(Id::new(&[7; 21]).unwrap_err(), ParseIdError::Overflow);
    }

    #[test]
    fn from_hex() {
        let oid = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573c".as_bytes()).unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
        assert_eq!(oid.as_bytes()[0], 0x3c);
        assert_eq!(oid.as_bytes()[19], 0x3c);
    }

    #[test]
    fn from_str() {
        let oid = Id::from_str("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert_eq!(oid.to_string(), "3cd9329ac53613a0bfa198ae28f3af957e49573c");
    }

    #[test]
    fn all_zero_is_accepted() {
        let oid = Id::from_hex("0000000000000000000000000000000000000000").unwrap();
        assert_eq!(oid.as_bytes(), &[0; 20][..]);
    }

    #[test]
    fn from_empty_str() {
        let err = Id::from_hex("").unwrap_err();
        assert_eq!(err, ParseIdError::Empty);
        assert_eq!(err.to_string(), "cannot parse object ID from empty string");
    }

    #[test]
    fn from_invalid_str() {
        let err = Id::from_hex("3cD9329ac53613a0bfa198ae28f3af957e49573c").unwrap_err();
        assert_eq!(err, ParseIdError::InvalidDigit('D'));
        assert_eq!(err.to_string(), "value contains invalid digit `D`");

        let err = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e4957zz").unwrap_err();
        assert_eq!(err, ParseIdError::InvalidDigit('z'));
    }

    #[test]
    fn from_hex_too_long() {
        let err = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573c4").unwrap_err();
        assert_eq!(err, ParseIdError::Overflow);
        assert_eq!(err.to_string(), "value is more than 40 digits long");
    }

    #[test]
    fn from_hex_too_short() {
        let err = Id::from_hex("3cd9329ac53613a0bfa198ae28f3af957e49573").unwrap_err();
        assert_eq!(err, ParseIdError::Underflow);
        assert_eq!(err.to_string(), "value is less than 40 digits long");
    }

    #[test]
    fn loose_path() {
        let oid = Id::from_str("3cd9329ac53613a0bfa198ae28f3af957e49573c").unwrap();
        assert_eq!(
            oid.loose_path(),
            PathBuf::from("3c").join("d9329ac53613a0bfa198ae28f3af957e49573c")
        );
    }
}
