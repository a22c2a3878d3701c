//! Error type and integer status codes.
//!
//! Callers embedded in a larger solver often propagate a plain status
//! integer. `0` is success; every [`RayleighError`] variant maps to a fixed
//! non-zero code through [`RayleighError::status_code`].

use thiserror::Error;

/// Status code for a successful call.
pub const STATUS_SUCCESS: i32 = 0;

/// Errors produced while building friction state or its collaborators.
///
/// The tendency kernel itself never fails; these come from configuration
/// lookup and from constructing mesh or field containers.
#[derive(Debug, Error)]
pub enum RayleighError {
    /// A required configuration key is absent.
    #[error("missing configuration key '{key}'")]
    MissingKey { key: String },

    /// A configuration key holds a value of the wrong type.
    #[error("configuration key '{key}' is not a {expected}")]
    WrongType { key: String, expected: &'static str },

    /// The configuration document is valid JSON but not an object.
    #[error("configuration document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The configuration document could not be parsed.
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An edge reports more active levels than the mesh has.
    #[error("edge {edge} has {levels} active levels but the mesh has only {max_levels}")]
    InvalidExtent {
        edge: usize,
        levels: usize,
        max_levels: usize,
    },

    /// Array dimensions disagree.
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl RayleighError {
    /// Integer status code for this error (never [`STATUS_SUCCESS`]).
    pub fn status_code(&self) -> i32 {
        match self {
            RayleighError::MissingKey { .. } => 1,
            RayleighError::WrongType { .. } => 2,
            RayleighError::Parse(_) => 3,
            RayleighError::InvalidExtent { .. } => 4,
            RayleighError::ShapeMismatch { .. } => 5,
            RayleighError::NotAnObject { .. } => 6,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, RayleighError>;

/// Collapse a result into its integer status code.
///
/// # Example
///
/// ```
/// use rayleigh_rs::{status_of, RayleighError, STATUS_SUCCESS};
///
/// let ok: rayleigh_rs::Result<()> = Ok(());
/// assert_eq!(status_of(&ok), STATUS_SUCCESS);
///
/// let err: rayleigh_rs::Result<()> = Err(RayleighError::MissingKey { key: "x".into() });
/// assert_ne!(status_of(&err), STATUS_SUCCESS);
/// ```
pub fn status_of<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_SUCCESS,
        Err(e) => e.status_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RayleighError::MissingKey {
            key: "config_rayleigh_friction".to_string(),
        };
        assert!(err.to_string().contains("config_rayleigh_friction"));

        let err = RayleighError::InvalidExtent {
            edge: 4,
            levels: 70,
            max_levels: 60,
        };
        assert!(err.to_string().contains("edge 4"));
    }

    #[test]
    fn test_status_codes_are_nonzero_and_distinct() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            RayleighError::MissingKey { key: "a".into() },
            RayleighError::WrongType {
                key: "a".into(),
                expected: "boolean",
            },
            RayleighError::Parse(parse),
            RayleighError::NotAnObject { found: "array" },
            RayleighError::InvalidExtent {
                edge: 0,
                levels: 2,
                max_levels: 1,
            },
            RayleighError::ShapeMismatch {
                expected: 1,
                actual: 2,
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.status_code()).collect();
        assert!(codes.iter().all(|&c| c != STATUS_SUCCESS));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
