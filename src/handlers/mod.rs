//! HTTP handlers

mod calc;

pub use calc::*;
