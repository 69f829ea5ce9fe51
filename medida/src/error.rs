//! Conversion and validation errors
//!
//! Every error names the ids or types involved, so a failure inside a
//! bridged conversion still points at the unit that caused it.

use thiserror::Error;

/// Machine-readable error codes
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_TYPES: &str = "INCOMPATIBLE_TYPES";
    pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
    pub const UNSUPPORTED_TYPE: &str = "UNSUPPORTED_TYPE";
    pub const INVALID_RELATION: &str = "INVALID_RELATION";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
}

/// Error type for catalog lookups, conversions and validation
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("unknown unit of measure '{0}'")]
    UnknownUnit(String),

    #[error("cannot convert {from} ({from_kind}) to {to} ({to_kind}): no relation bridges these types")]
    IncompatibleTypes {
        from: String,
        to: String,
        from_kind: String,
        to_kind: String,
    },

    #[error("unit '{id}' is of type {expected}, not {got}")]
    TypeMismatch {
        id: String,
        expected: String,
        got: String,
    },

    #[error("unsupported measurement type '{0}'")]
    UnsupportedType(String),

    #[error("invalid relation 1 {un} = {factor} {de}: factor must be finite and positive")]
    InvalidRelation { un: String, factor: f64, de: String },

    #[error("invalid relation list: {0}")]
    Json(#[from] serde_json::Error),
}

impl UnitError {
    /// Stable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            UnitError::IncompatibleTypes { .. } => codes::INCOMPATIBLE_TYPES,
            UnitError::TypeMismatch { .. } => codes::TYPE_MISMATCH,
            UnitError::UnsupportedType(_) => codes::UNSUPPORTED_TYPE,
            UnitError::InvalidRelation { .. } => codes::INVALID_RELATION,
            UnitError::Json(_) => codes::PARSE_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, UnitError>;
