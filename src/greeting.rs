//! Greeting formatters.
//!
//! Four flavours of the same greeting. The first one insists on a name and
//! returns; the next two fall back to [`DEFAULT_NAME`] and print; the last
//! falls back and returns.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Name used when the caller doesn't supply one.
pub const DEFAULT_NAME: &str = "stranger";

/// Placeholder rendered by [`greet_require_name`] for a missing name.
pub const MISSING_NAME: &str = "undefined";

/// Returns `"Hello "` followed by the name.
///
/// There is no fallback here: a missing name is rendered as
/// [`MISSING_NAME`] rather than rejected.
pub fn greet_require_name(name: Option<&str>) -> String {
    "Hello ".to_string() + name.unwrap_or(MISSING_NAME)
}

/// Writes a greeting line, substituting [`DEFAULT_NAME`] when no name is given.
pub fn greet_with_check<W: Write>(out: &mut W, name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => {
            debug!("no name given, greeting {DEFAULT_NAME}");
            DEFAULT_NAME
        }
    };
    writeln!(out, "{}", "Hello ".to_string() + name)?;
    Ok(())
}

/// Writes `Hello {name}`, with the default applied at the call boundary.
pub fn greet_with_default<W: Write>(out: &mut W, name: Option<&str>) -> Result<()> {
    let name = name.unwrap_or(DEFAULT_NAME);
    debug!(name, "greeting");
    writeln!(out, "Hello {name}")?;
    Ok(())
}

/// Returns the greeting instead of printing it.
pub fn greet_arrow(name: Option<&str>) -> String {
    format!("Hello {}", name.unwrap_or(DEFAULT_NAME))
}
