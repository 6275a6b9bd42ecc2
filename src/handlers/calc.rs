//! Calculator API handlers
//!
//! Each handler parses the two operands from the query string and
//! delegates to the configured [`Calculator`](crate::service::Calculator).
//! The formatted string comes back as the plain-text response body.

use axum::extract::{Query, State};

use crate::dto::OperandsQuery;
use crate::SharedState;

pub async fn calc_addition(
    State(state): State<SharedState>,
    Query(params): Query<OperandsQuery>,
) -> String {
    state.calculator.addition(params.a, params.b)
}

pub async fn calc_subtraction(
    State(state): State<SharedState>,
    Query(params): Query<OperandsQuery>,
) -> String {
    state.calculator.subtraction(params.a, params.b)
}

pub async fn calc_multiplication(
    State(state): State<SharedState>,
    Query(params): Query<OperandsQuery>,
) -> String {
    state.calculator.multiplication(params.a, params.b)
}

pub async fn calc_division(
    State(state): State<SharedState>,
    Query(params): Query<OperandsQuery>,
) -> String {
    state.calculator.division(params.a, params.b)
}
