//! Arithmetic service
//!
//! The computation side of the API, kept behind a trait so the HTTP layer
//! can be tested against a stub without a real calculator (or vice versa).

/// Render a result with exactly three digits after the decimal point.
pub fn format_result(value: f64) -> String {
    format!("{:.3}", value)
}

/// The four arithmetic operations, each returning the formatted result.
pub trait Calculator: Send + Sync {
    fn addition(&self, a: f64, b: f64) -> String;
    fn subtraction(&self, a: f64, b: f64) -> String;
    fn multiplication(&self, a: f64, b: f64) -> String;
    fn division(&self, a: f64, b: f64) -> String;
}

/// Production calculator backed by plain `f64` arithmetic.
///
/// Division by zero is not special-cased: the `f64` result ("inf", "-inf"
/// or "NaN") is formatted like any other value.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatCalculator;

impl Calculator for FloatCalculator {
    fn addition(&self, a: f64, b: f64) -> String {
        format_result(a + b)
    }

    fn subtraction(&self, a: f64, b: f64) -> String {
        format_result(a - b)
    }

    fn multiplication(&self, a: f64, b: f64) -> String {
        format_result(a * b)
    }

    fn division(&self, a: f64, b: f64) -> String {
        format_result(a / b)
    }
}
