//! Query-parameter types for API requests

use serde::Deserialize;

/// The two operands every calc endpoint takes, as `?a=..&b=..`.
///
/// Both are required; axum rejects the request with a client error when
/// either is missing or not a number.
#[derive(Debug, Deserialize)]
pub struct OperandsQuery {
    pub a: f64,
    pub b: f64,
}
