//! Error types for the skytrack core.

use std::fmt;

/// Result type for skytrack core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building configuration or parsing text.
///
/// The numeric routines themselves are total and never return these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An orbit descriptor failed validation.
    InvalidDescriptor {
        /// The satellite id of the offending descriptor.
        satellite: String,
        /// Description of what was invalid.
        detail: String,
    },
    /// A coordinate format template could not be used.
    InvalidTemplate {
        /// The template text.
        template: String,
        /// Description of what was invalid.
        detail: String,
    },
    /// A civil date/time string could not be parsed.
    InvalidDateTime {
        /// Which field failed.
        context: &'static str,
        /// Description of what was invalid.
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDescriptor { satellite, detail } => {
                write!(f, "invalid orbit descriptor for {satellite}: {detail}")
            }
            Error::InvalidTemplate { template, detail } => {
                write!(f, "invalid coordinate template '{template}': {detail}")
            }
            Error::InvalidDateTime { context, detail } => {
                write!(f, "invalid {context}: {detail}")
            }
        }
    }
}

impl std::error::Error for Error {}
