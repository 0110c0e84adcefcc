use std::fmt;

use serde::{Deserialize, Serialize};

/// A single quote extracted from a source document.
///
/// Immutable after construction. Fields are free text; degenerate parses may
/// yield empty strings and callers must tolerate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub body: String,
    pub author: String,
}

impl Quote {
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}
