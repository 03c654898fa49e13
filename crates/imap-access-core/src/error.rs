//! Error types and result alias for the archive metadata core.
//!
//! Every failure in this crate is surfaced to the immediate caller as a typed
//! condition. Nothing is retried, recovered locally, or downgraded to a
//! warning: a file that cannot be parsed, validated, or grouped must stop the
//! operation that touched it.

use crate::archive_paths::ViolationReport;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, validating, or grouping archive files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input string does not match the filename convention at all.
    ///
    /// Carries the offending string and the convention template so callers
    /// can display what was expected.
    #[error("filename '{filename}' does not match expected convention {convention}")]
    InvalidFormat {
        /// The string that failed to parse.
        filename: String,
        /// Human-readable template of the expected convention.
        convention: &'static str,
    },

    /// The filename matched the convention but one or more field values
    /// violate the mission rules.
    ///
    /// The report carries the union of all violations found, not just the
    /// first, so a caller sees every problem in one failure.
    #[error("invalid file name '{filename}': {report}")]
    InvalidFile {
        /// The filename whose fields failed validation.
        filename: String,
        /// Every violation found during the legality pass.
        report: ViolationReport,
    },

    /// A processing input was given filenames whose source, data type, and
    /// descriptor are not all identical.
    #[error("mixed processing input: {message}")]
    MixedInputs {
        /// Description of which derived fields disagreed.
        message: String,
    },

    /// A processing input was constructed from zero filenames.
    #[error("a processing input requires at least one file")]
    EmptyInput,

    /// A serialized processing input carried a kind tag this crate does not
    /// recognize.
    ///
    /// Deserialization fails loudly here instead of silently dropping the
    /// entry: a processing step must never run against a thinner dependency
    /// set than the one that was serialized for it.
    #[error("unrecognized processing input kind '{kind}'")]
    UnknownInputKind {
        /// The unrecognized kind tag from the wire payload.
        kind: String,
    },

    /// The wire payload could not be decoded as JSON.
    #[error("malformed processing input payload: {message}")]
    Serialization {
        /// Description of the decode failure.
        message: String,
    },
}

impl Error {
    /// Creates a format error for a string that does not match the science
    /// filename convention.
    #[must_use]
    pub fn invalid_format(filename: impl Into<String>) -> Self {
        Self::InvalidFormat {
            filename: filename.into(),
            convention: crate::naming::FILENAME_CONVENTION,
        }
    }

    /// Creates a format error for a string that does not match the ancillary
    /// filename convention.
    #[must_use]
    pub fn invalid_ancillary_format(filename: impl Into<String>) -> Self {
        Self::InvalidFormat {
            filename: filename.into(),
            convention: crate::naming::ANCILLARY_CONVENTION,
        }
    }

    /// Creates a serialization error from a decode failure.
    #[must_use]
    pub fn serialization(source: &serde_json::Error) -> Self {
        Self::Serialization {
            message: source.to_string(),
        }
    }
}
