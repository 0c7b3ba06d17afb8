//! Error types.
//!
//! `Infeasible` is deliberately absent: an instance with no valid completion
//! is a normal outcome and is reported through [`Solution`](crate::Solution).

use thiserror::Error;

/// A malformed problem instance. Raised before any search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("string length must be positive")]
    EmptyString,

    #[error("run bound k must be positive")]
    ZeroRunBound,

    #[error("{field} has length {found}, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field} contains invalid symbol {found:?} at position {index}")]
    InvalidSymbol {
        field: &'static str,
        index: usize,
        found: char,
    },
}

/// Failure of a solve call.
///
/// Malformed input is rejected by [`Instance::new`](crate::Instance::new)
/// with an [`InstanceError`], so no solve entry point produces
/// `InvalidInstance` itself. The variant lets callers that build instances
/// and solve them in one function use `?` on both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid instance: {0}")]
    InvalidInstance(#[from] InstanceError),

    #[error("{free} free positions exceed the exhaustive search limit of {limit}")]
    IntractableInputSize { free: usize, limit: usize },
}

/// Invalid engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block size must be positive")]
    ZeroBlockSize,
}

/// Failure while reading the line-oriented test-case format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseParseError {
    #[error("unexpected end of input while reading {what}")]
    MissingLine { what: &'static str },

    #[error("line {line}: expected {what}, found {found:?}")]
    BadHeader {
        line: usize,
        what: &'static str,
        found: String,
    },

    #[error("case {case}: {source}")]
    Instance {
        case: usize,
        #[source]
        source: InstanceError,
    },
}

pub type SolveResult<T> = Result<T, SolveError>;
