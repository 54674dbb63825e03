use std::fmt;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// An error which can be returned when constructing an `Attribution`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AttributionError {
    /// The name contains whitespace or a NUL byte.
    #[error("name {0:?} contains a character not allowed in a signature")]
    InvalidName(String),

    /// The email contains whitespace or a NUL byte.
    #[error("email {0:?} contains a character not allowed in a signature")]
    InvalidEmail(String),

    /// The UTC offset is outside the range -12:00 to +14:00.
    #[error("illegal time zone offset: {0} minutes")]
    IllegalTzOffset(i32),
}

/// An `Attribution` combines a person's identity (name and e-mail address)
/// with the timestamp for a particular action.
///
/// Attributions are used for both the author and committer lines of a commit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribution {
    name: String,
    email: String,
    when: DateTime<FixedOffset>,
}

impl Attribution {
    /// Creates a new attribution.
    ///
    /// The signature is a space-separated record, so neither the name nor
    /// the email may contain whitespace (including CR and LF) or NUL.
    pub fn new(
        name: &str,
        email: &str,
        when: DateTime<FixedOffset>,
    ) -> Result<Attribution, AttributionError> {
        if name.chars().any(is_forbidden) {
            return Err(AttributionError::InvalidName(name.to_string()));
        }

        if email.chars().any(is_forbidden) {
            return Err(AttributionError::InvalidEmail(email.to_string()));
        }

        let tz_offset = when.offset().local_minus_utc() / 60;
        if !(-720..=840).contains(&tz_offset) {
            return Err(AttributionError::IllegalTzOffset(tz_offset));
        }

        Ok(Attribution {
            name: name.to_string(),
            email: email.to_string(),
            when,
        })
    }

    /// Returns the person's human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the timestamp in seconds relative to the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.when.timestamp()
    }

    /// Returns the timezone offset (minutes relative to GMT).
    pub fn tz_offset(&self) -> i32 {
        self.when.offset().local_minus_utc() / 60
    }

    /// Returns the timezone formatted in human readable offset from GMT.
    pub fn format_tz(&self) -> String {
        let tz_offset = self.tz_offset();
        let sign = if tz_offset < 0 { "-" } else { "+" };

        let offset = tz_offset.abs();
        let hours = offset / 60;
        let min = offset % 60;

        format!("{}{:02}{:02}", sign, hours, min)
    }
}

fn is_forbidden(c: char) -> bool {
    c == '\0' || c.is_whitespace()
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.email,
            self.timestamp(),
            self.format_tz()
        )
    }
}
