//! # Error Handling for Photo-Set Preparation
//!
//! Error types for the compaction pipeline. The taxonomy follows the run
//! model: a validation problem aborts only the storefront configuration it
//! belongs to, while a decode or composition failure is fatal for that run
//! and no partial photo set is ever returned. Infeasible and
//! no-compaction-needed are legitimate outcomes, not errors; they live in
//! [`crate::compactor::CompactOutcome`].
//!
//! ## Classification
//!
//! Every error reports a severity so batch callers can decide how loudly to
//! surface it:
//!
//! - `Warning`: the configuration was rejected up front, siblings unaffected
//! - `Fatal`: the run started and failed; its output was discarded

use std::{error::Error as StdError, fmt, path::PathBuf};

use grid_compose::ComposeError;

/// Severity levels for pipeline errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The affected configuration was rejected before any pixel work
    Warning,
    /// The run produced nothing and must be retried after a fix
    Fatal,
}

/// Base error type for the photo-set preparation library
#[derive(Debug)]
pub enum PackError {
    /// Configuration or precondition validation errors
    Validation {
        field: &'static str,
        reason: String,
    },
    /// Input photo bytes could not be decoded
    Decode {
        name: String,
        source: ComposeError,
    },
    /// Grid compositing or resizing failures
    Composition {
        stage: &'static str,
        source: ComposeError,
    },
    /// File I/O at the CLI surface
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PackError {
    /// Create a validation error for a named field or precondition.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap a decode failure for the named input photo.
    pub fn decode(name: impl Into<String>, source: ComposeError) -> Self {
        Self::Decode {
            name: name.into(),
            source,
        }
    }

    /// Wrap a raster-layer failure from the named pipeline stage.
    pub fn composition(stage: &'static str, source: ComposeError) -> Self {
        Self::Composition { stage, source }
    }

    /// Wrap a file I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PackError::Validation { .. } => ErrorSeverity::Warning,
            PackError::Decode { .. } | PackError::Composition { .. } | PackError::Io { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    /// Whether the run started and its whole photo set was dropped.
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Fatal
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::Validation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            PackError::Decode { name, source } => {
                write!(f, "Could not decode '{}': {}", name, source)
            }
            PackError::Composition { stage, source } => {
                write!(f, "Composition failed during {}: {}", stage, source)
            }
            PackError::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for PackError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            PackError::Decode { source, .. } | PackError::Composition { source, .. } => {
                Some(source)
            }
            PackError::Io { source, .. } => Some(source),
            PackError::Validation { .. } => None,
        }
    }
}
