//! Author identity configuration.
//!
//! The commit workflow takes an `Identity` as an explicit argument. Reading
//! it from the process environment is confined to `Identity::from_env`, which
//! the command-line front end calls.

use std::env;

use crate::repo::{Error, Result};

/// Environment variable holding the author's name.
pub const AUTHOR_NAME_VAR: &str = "GIT_AUTHOR_NAME";

/// Environment variable holding the author's email address.
pub const AUTHOR_EMAIL_VAR: &str = "GIT_AUTHOR_EMAIL";

/// The person recorded as author and committer of new commits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identity {
    name: String,
    email: String,
}

impl Identity {
    pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> Identity {
        Identity {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Read the identity from `GIT_AUTHOR_NAME` and `GIT_AUTHOR_EMAIL`.
    pub fn from_env() -> Result<Identity> {
        Identity::from_lookup(|var| env::var(var).ok())
    }

    /// Read the identity through an arbitrary variable lookup.
    ///
    /// A variable that is missing or empty yields `Error::MissingIdentity`
    /// naming that variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Identity>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| -> Result<String> {
            match lookup(var) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::MissingIdentity(var)),
            }
        };

        let name = require(AUTHOR_NAME_VAR)?;
        let email = require(AUTHOR_EMAIL_VAR)?;

        Ok(Identity { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
