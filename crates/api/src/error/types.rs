//! Error type definitions for key-exchange operations

use core::fmt;

/// Primary error type for key-exchange operations
///
/// Every failure surfaced by a session maps onto exactly one of these
/// variants. None of them ever carries secret material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The group identifier is unknown or is not an ECP group
    UnsupportedGroup {
        /// IANA transform identifier that was requested
        group: u16,
    },

    /// The arithmetic layer could not provide a curve, point or scalar
    AllocationFailure {
        context: &'static str,
    },

    /// Input bytes have the wrong length or do not encode an acceptable value
    MalformedInput {
        context: &'static str,
        reason: &'static str,
    },

    /// Peer coordinates are out of range or the point is not on the curve
    InvalidPoint {
        context: &'static str,
    },

    /// Scalar multiplication, coordinate extraction or group setup failed
    ArithmeticFailure {
        context: &'static str,
    },

    /// The shared secret was requested before a successful exchange
    NotComputed,

    /// The random number generator failed
    RandomGeneration {
        context: &'static str,
    },
}

/// Coarse classification of an [`Error`], stable across contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedGroup,
    AllocationFailure,
    MalformedInput,
    InvalidPoint,
    ArithmeticFailure,
    NotComputed,
    RandomGeneration,
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedGroup { .. } => ErrorKind::UnsupportedGroup,
            Self::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::InvalidPoint { .. } => ErrorKind::InvalidPoint,
            Self::ArithmeticFailure { .. } => ErrorKind::ArithmeticFailure,
            Self::NotComputed => ErrorKind::NotComputed,
            Self::RandomGeneration { .. } => ErrorKind::RandomGeneration,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedGroup { group } => {
                write!(f, "Unsupported Diffie-Hellman group: {}", group)
            },
            Self::AllocationFailure { context } => {
                write!(f, "Allocation failure: {}", context)
            },
            Self::MalformedInput { context, reason } => {
                write!(f, "{}: malformed input ({})", context, reason)
            },
            Self::InvalidPoint { context } => {
                write!(f, "Invalid point: {}", context)
            },
            Self::ArithmeticFailure { context } => {
                write!(f, "Arithmetic failure: {}", context)
            },
            Self::NotComputed => {
                write!(f, "Shared secret has not been computed")
            },
            Self::RandomGeneration { context } => {
                write!(f, "Random generation error: {}", context)
            },
        }
    }
}
