//! Per-backend identifier newtypes.
//!
//! The two storage backends use different id schemes: the session backend
//! hands out random string tokens, the database backend uses autoincrement
//! row ids. Each scheme gets its own newtype so ids from one backend can
//! never be passed to the other.

use std::convert::Infallible;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token identifying a list in the session backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListToken(String);

/// Opaque token identifying a todo in the session backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoToken(String);

/// Row id identifying a list in the database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListRowId(i64);

/// Row id identifying a todo in the database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoRowId(i64);

impl ListToken {
    /// Generates a fresh random token (128-bit, collision probability
    /// negligible at this scale).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TodoToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ListRowId {
    /// Wraps a row id returned by the database.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl TodoRowId {
    /// Wraps a row id returned by the database.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ListToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TodoToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ListRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TodoRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Tokens round-trip through request paths and bodies as plain strings, so
// any string parses; a token that was never issued simply finds nothing.
impl FromStr for ListToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl FromStr for TodoToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl FromStr for ListRowId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for TodoRowId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
