use tracing::trace;

/// Converts a Fahrenheit reading to Celsius.
///
/// No range checks; NaN and infinities pass straight through.
pub fn to_celsius(fahrenheit: f64) -> f64 {
    let celsius = (5.0 / 9.0) * (fahrenheit - 32.0);
    trace!(fahrenheit, celsius, "converted");
    celsius
}
