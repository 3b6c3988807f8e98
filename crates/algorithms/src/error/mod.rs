//! Error handling for the curve arithmetic layer

use core::fmt;

use ecpdh_api::Error as CoreError;

/// The error type for curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Scalar outside `[1, q-1]`
    ScalarRange {
        /// Context where the scalar was rejected
        context: &'static str,
    },

    /// Coordinates out of range or not on the curve
    InvalidPoint {
        /// Context where the point was rejected
        context: &'static str,
    },

    /// The point at infinity was found where an affine point is required
    Identity {
        /// Operation that produced or received the identity
        operation: &'static str,
    },

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Feature not implemented by this backend
    NotImplemented {
        /// Name of the unimplemented feature
        feature: &'static str,
    },

    /// The random number generator failed or kept producing unusable output
    RandomGeneration {
        /// Context of the failing draw
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for curve arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::ScalarRange { context } => {
                write!(f, "Scalar out of range in {}", context)
            },
            Error::InvalidPoint { context } => {
                write!(f, "Invalid point in {}", context)
            },
            Error::Identity { operation } => {
                write!(f, "Point at infinity in {}", operation)
            },
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            },
            Error::NotImplemented { feature } => {
                write!(f, "Feature not implemented: {}", feature)
            },
            Error::RandomGeneration { context } => {
                write!(f, "Random generation failed in {}", context)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, .. } => CoreError::ArithmeticFailure { context: name },
            Error::Length { context, .. } => CoreError::MalformedInput {
                context,
                reason: "unexpected length",
            },
            Error::ScalarRange { context } => CoreError::MalformedInput {
                context,
                reason: "scalar outside [1, q-1]",
            },
            Error::InvalidPoint { context } => CoreError::InvalidPoint { context },
            Error::Identity { operation } => CoreError::ArithmeticFailure { context: operation },
            Error::Processing { operation, .. } => CoreError::ArithmeticFailure { context: operation },
            Error::NotImplemented { feature } => CoreError::ArithmeticFailure { context: feature },
            Error::RandomGeneration { context } => CoreError::RandomGeneration { context },
        }
    }
}

// Include the validation submodule
pub mod validate;
