//! Error handling for key-agreement operations

use core::fmt;

use ecpdh_algorithms::error::Error as PrimitiveError;
use ecpdh_api::error::Error as CoreError;

/// Error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error from the curve arithmetic layer
    Primitive(PrimitiveError),

    /// A group could not be built from its domain parameters
    GroupConstruction {
        /// Curve being constructed
        curve: &'static str,
        /// Which step failed
        details: &'static str,
    },

    /// Generating or importing a keypair failed
    KeyGeneration {
        /// Curve in use
        curve: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// The shared secret could not be derived or encoded
    Agreement {
        /// Curve in use
        curve: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::GroupConstruction { curve, details } => {
                write!(f, "Cannot construct {}: {}", curve, details)
            },
            Error::KeyGeneration { curve, details } => {
                write!(f, "Key generation error for {}: {}", curve, details)
            },
            Error::Agreement { curve, details } => {
                write!(f, "Key agreement error for {}: {}", curve, details)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::GroupConstruction { curve, .. } => CoreError::ArithmeticFailure { context: curve },
            Error::KeyGeneration { curve, .. } => CoreError::ArithmeticFailure { context: curve },
            Error::Agreement { curve, .. } => CoreError::ArithmeticFailure { context: curve },
        }
    }
}

// Include validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
