//! Report — the narration produced by a city operation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, human-readable lines describing what an operation did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append every line of `other`, keeping order.
    pub fn append(&mut self, other: Report) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl From<String> for Report {
    fn from(line: String) -> Self {
        Self { lines: vec![line] }
    }
}

impl From<&str> for Report {
    fn from(line: &str) -> Self {
        Self::from(line.to_string())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
