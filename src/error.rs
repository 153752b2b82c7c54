//! Error types shared by the pattern modules.
//!
//! Most components are total functions and never fail. The few lookups and
//! resource checks that can fail return a [`PatternError`] instead of
//! panicking, so callers branch on the variant.

use thiserror::Error;

/// Failure cases for factory lookups, account access, chat room membership
/// and catalog queries.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("unknown product variant `{0}`")]
    UnknownVariant(String),

    #[error("unknown product family `{0}`")]
    UnknownFamily(String),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientResource { requested: u64, available: u64 },

    #[error("deposit of {requested} exceeds remaining capacity {headroom}")]
    CapacityExceeded { requested: u64, headroom: u64 },

    #[error("access denied for principal `{0}`")]
    AccessDenied(String),

    #[error("name `{0}` is already taken")]
    NameTaken(String),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using [`PatternError`].
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PatternError::UnknownVariant("bicycle".to_string());
        assert_eq!(err.to_string(), "unknown product variant `bicycle`");

        let err = PatternError::InsufficientResource {
            requested: 150,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: requested 150, available 100"
        );

        let err = PatternError::CapacityExceeded {
            requested: 2,
            headroom: 1,
        };
        assert_eq!(err.to_string(), "deposit of 2 exceeds remaining capacity 1");
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PatternError = parse.unwrap_err().into();
        assert!(matches!(err, PatternError::Serialization(_)));
    }
}
