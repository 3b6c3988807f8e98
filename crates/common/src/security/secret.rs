//! Secret data types with guaranteed zeroization
//!
//! Shared secrets and private scalars live in these wrappers for their whole
//! lifetime. Contents are wiped when a value is cleared, not only when it
//! is dropped.

use core::fmt;

use alloc::vec::Vec;
use ecpdh_api::error::{Error, Result};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Variable-size secret byte vector that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Zeroization of the contents on `clear`, before the buffer is released
/// - Constant-time equality
/// - A `Debug` implementation that never prints the bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a secret vector from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self { data: slice.to_vec() }
    }

    /// Create an empty secret vector able to hold `capacity` bytes without
    /// reallocating
    ///
    /// Growing past the capacity would leave an unwiped copy behind, so
    /// callers building secrets piecewise should size this exactly.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    /// Big-endian `value` left-padded with zeros to exactly `width` bytes
    ///
    /// Leading zero bytes of `value` beyond `width` are dropped; any other
    /// excess is an error.
    pub fn left_padded(value: &[u8], width: usize) -> Result<Self> {
        let first = value.iter().position(|&b| b != 0).unwrap_or(value.len());
        let significant = &value[first..];
        if significant.len() > width {
            return Err(Error::MalformedInput {
                context: "SecretVec::left_padded",
                reason: "value wider than target width",
            });
        }

        let mut data = Vec::with_capacity(width);
        data.resize(width - significant.len(), 0);
        data.extend_from_slice(significant);
        Ok(Self { data })
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Extend the vector with additional data
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        self.data.extend_from_slice(slice);
    }

    /// Wipe the contents, leaving an empty vector
    pub fn clear(&mut self) {
        self.data.zeroize();
    }

    /// Copy the contents into a buffer that zeroizes on drop
    pub fn to_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.data.clone())
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl ConstantTimeEq for SecretVec {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Length is public; only the contents are compared in constant time
        if self.data.len() != other.data.len() {
            return Choice::from(0);
        }
        self.data.as_slice().ct_eq(other.data.as_slice())
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_vec_operations() {
        let mut vec = SecretVec::from_slice(&[1, 2, 3, 4]);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);

        vec.extend_from_slice(&[5, 6]);
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5, 6]);

        vec.clear();
        assert!(vec.is_empty());
    }

    #[test]
    fn test_left_padded() {
        let padded = SecretVec::left_padded(&[0xAB, 0xCD], 4).unwrap();
        assert_eq!(padded.as_slice(), &[0, 0, 0xAB, 0xCD]);

        // Redundant leading zeros are tolerated
        let trimmed = SecretVec::left_padded(&[0, 0, 0, 0x01, 0x02], 3).unwrap();
        assert_eq!(trimmed.as_slice(), &[0, 0x01, 0x02]);

        let zero = SecretVec::left_padded(&[], 2).unwrap();
        assert_eq!(zero.as_slice(), &[0, 0]);

        assert!(SecretVec::left_padded(&[1, 2, 3], 2).is_err());
    }

    #[test]
    fn test_constant_time_equality() {
        let a = SecretVec::from_slice(&[1, 2, 3]);
        let b = SecretVec::from_slice(&[1, 2, 3]);
        let c = SecretVec::from_slice(&[1, 2, 4]);
        let d = SecretVec::from_slice(&[1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretVec::from_slice(&[0xDE, 0xAD]);
        let rendered = format!("{:?}", secret);
        assert_eq!(rendered, "SecretVec(len=2, [REDACTED])");
    }

    #[test]
    fn test_to_zeroizing_is_independent() {
        let mut secret = SecretVec::from_slice(&[7, 7, 7]);
        let copy = secret.to_zeroizing();
        secret.clear();
        assert_eq!(copy.as_slice(), &[7, 7, 7]);
    }
}
