use serde::{Deserialize, Serialize};
use std::fmt;

/// A single trimmed, non-empty target taken from user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointToken(String);

impl EndpointToken {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EndpointToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_delimiter(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Splits a raw target list (e.g. "10.0.0.1, example.com; db1") into tokens.
///
/// Any run of commas, semicolons or whitespace separates two tokens. Empty
/// pieces are dropped, order is kept and duplicates are not removed.
pub fn tokenize(raw: &str) -> Vec<EndpointToken> {
    raw.split(is_delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(EndpointToken::new)
        .collect()
}
