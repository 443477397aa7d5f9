//! Error types for xmlnode-set.
//!
//! Every setter reports one of two conditions: the target node was not valid
//! for the operation, or a formatted value could not be rendered.

use thiserror::Error;

use crate::format::FormatError;
use crate::node::NodeKind;

/// Errors that can occur while replacing a node value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// The node (after first-child fallback) does not accept this operation
    #[error("{operation}: invalid target node of kind {kind}")]
    InvalidTarget {
        /// Operation that was attempted
        operation: &'static str,
        /// Kind of the node the operation resolved to
        kind: NodeKind,
    },

    /// A formatted value failed to render
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Result type alias for node value operations.
pub type SetResult<T> = Result<T, SetError>;

impl SetError {
    /// Create an invalid-target error.
    pub fn invalid_target(operation: &'static str, kind: NodeKind) -> Self {
        Self::InvalidTarget { operation, kind }
    }

    /// Check if this is an invalid-target error.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Self::InvalidTarget { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SetError::invalid_target("set_opaque", NodeKind::Integer);
        assert_eq!(err.to_string(), "set_opaque: invalid target node of kind integer");
        assert!(err.is_invalid_target());

        let err = SetError::from(FormatError::MissingArgument { index: 1 });
        assert_eq!(err.to_string(), "format error: missing argument #1");
        assert!(!err.is_invalid_target());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SetError>();
    }
}
