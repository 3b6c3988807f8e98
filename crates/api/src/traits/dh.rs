//! Interactive Diffie-Hellman exchange
//!
//! A session owns one private value, publishes the matching public value,
//! accepts exactly one peer value at a time and derives the shared secret
//! from it. Destruction is `Drop`.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::types::DhGroup;

/// A Diffie-Hellman exchange as driven by an IKE key-management daemon
pub trait DiffieHellman {
    /// Group this exchange operates in
    fn dh_group(&self) -> DhGroup;

    /// Our public value in the group's wire encoding
    fn public_value(&self) -> Result<Vec<u8>>;

    /// Accept the peer's public value and compute the shared secret
    ///
    /// On failure the exchange holds no shared secret.
    fn set_other_public_value(&mut self, value: &[u8]) -> Result<()>;

    /// Replace our private value with a caller-supplied one
    fn set_private_value(&mut self, value: &[u8]) -> Result<()>;

    /// A copy of the shared secret
    ///
    /// # Security Note
    /// The returned bytes are zeroized when dropped; derive keys from them
    /// and discard them promptly.
    fn shared_secret(&self) -> Result<Zeroizing<Vec<u8>>>;
}
