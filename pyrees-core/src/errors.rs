//! Error types for the style scoring core.
//!
//! Scoring itself never fails: front-end errors are recovered inside the
//! extractor, and curve errors can only come from user-supplied parameters.

use thiserror::Error;

/// Failure reported by a language front-end.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontendError {
    /// Source could not be split into tokens
    #[error("tokenize error: {message}")]
    Tokenize { message: String },

    /// Source could not be parsed into a syntax tree
    #[error("parse error: {message}")]
    Parse { message: String },
}

/// Rejected conversion curve parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("max_mark must be a non-negative finite number, got {0}")]
    InvalidMaxMark(f64),

    #[error("curve bounds must be finite and satisfy lo <= lotol <= hitol <= hi, got ({lo}, {lotol}, {hitol}, {hi})")]
    UnorderedBounds { lo: f64, lotol: f64, hitol: f64, hi: f64 },
}
