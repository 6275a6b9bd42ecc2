//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::*;
use crate::SharedState;

pub fn calc_routes() -> Router<SharedState> {
    Router::new()
        .route("/addition", get(calc_addition))
        .route("/subtraction", get(calc_subtraction))
        .route("/multiplication", get(calc_multiplication))
        .route("/division", get(calc_division))
}
