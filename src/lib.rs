#![forbid(unsafe_code)]

//! Small, independent helpers: greeting formatters, a Fahrenheit to Celsius
//! converter, a variadic argument printer and the `Bite` record.
//!
//! Operations that print take the output channel as any [`std::io::Write`],
//! one line per write.

pub mod arguments;
pub mod bite;
pub mod error;
pub mod greeting;
pub mod temperature;

pub use bite::Bite;
pub use error::{Error, Result};
pub use greeting::{DEFAULT_NAME, greet_arrow, greet_require_name, greet_with_check, greet_with_default};
pub use temperature::to_celsius;
