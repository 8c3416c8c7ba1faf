//! Variadic argument printer.

use std::fmt::Display;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Writes each argument on its own line, in the order given.
///
/// Mixed value types go through the [`print_arguments!`](crate::print_arguments)
/// macro, which builds the slice of trait objects for you.
pub fn print_arguments<W: Write>(out: &mut W, args: &[&dyn Display]) -> Result<()> {
    debug!(count = args.len(), "printing arguments");
    for arg in args {
        writeln!(out, "{arg}")?;
    }
    Ok(())
}

/// Prints any number of `Display` values to `out`, one per line.
///
/// ```
/// let mut out = Vec::new();
/// hello_bites::print_arguments!(&mut out, 1, "a", true).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1\na\ntrue\n");
/// ```
#[macro_export]
macro_rules! print_arguments {
    ($out:expr $(, $arg:expr)* $(,)?) => {
        $crate::arguments::print_arguments(
            $out,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}
