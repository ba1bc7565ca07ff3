use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::patch::PatchStage;

/// Main error type for render-patch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid patch plan {}: {message}", .path.display())]
    Plan { message: String, path: PathBuf },

    #[error("Patch step out of order: expected stage {expected}, patcher is at {actual}")]
    OutOfOrder {
        expected: PatchStage,
        actual: PatchStage,
    },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new plan error
    pub fn plan_error(message: impl fmt::Display, path: impl Into<PathBuf>) -> Self {
        Self::Plan {
            message: message.to_string(),
            path: path.into(),
        }
    }

    pub fn out_of_order(expected: PatchStage, actual: PatchStage) -> Self {
        Self::OutOfOrder { expected, actual }
    }
}

/// Result type alias using PatchError
pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_message_names_path() {
        let err = PatchError::io_error(
            io::Error::new(io::ErrorKind::NotFound, "gone"),
            "RenderWindow.cpp",
        );
        let msg = err.to_string();
        assert!(msg.contains("RenderWindow.cpp"));
        assert!(msg.contains("gone"));
        match err {
            PatchError::Io { path, .. } => assert_eq!(path, PathBuf::from("RenderWindow.cpp")),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_order_names_both_stages() {
        let err = PatchError::out_of_order(PatchStage::LineDeleted, PatchStage::Start);
        let msg = err.to_string();
        assert!(msg.contains("expected stage line-deleted"));
        assert!(msg.contains("patcher is at start"));
    }
}
