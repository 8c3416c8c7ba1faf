//! The `Bite` record.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// A coding exercise: its number, title and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bite {
    pub number: u32,
    pub title: String,
    pub points: u32,
}

impl Bite {
    /// Create a new bite.
    pub fn new(number: u32, title: impl Into<String>, points: u32) -> Self {
        Bite {
            number,
            title: title.into(),
            points,
        }
    }

    /// Writes the one-line description of this bite.
    pub fn describe<W: Write>(&self, out: &mut W) -> Result<()> {
        debug!(number = self.number, "describing bite");
        writeln!(out, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for Bite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bite : {} - {} - points {}",
            self.number, self.title, self.points
        )
    }
}
