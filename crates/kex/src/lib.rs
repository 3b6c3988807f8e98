//! Elliptic-curve Diffie-Hellman key agreement for IKE
//!
//! This crate implements the ECP Diffie-Hellman groups negotiated by IKEv2:
//! the NIST curves of RFC 5903 and the Brainpool curves of RFC 6954. A
//! session generates a keypair, publishes `x‖y`, validates the peer's value
//! and derives the shared secret either as `x‖y` (RFC 4753) or as the
//! x-coordinate alone (RFC 5903), depending on the configuration.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ecdh;
pub mod error;
pub mod settings;

// Re-exports
pub use ecdh::{BrainpoolGroupBuilder, CoordinateCodec, CurveRegistry, CurveSpec, EcdhProvider, EcdhSession};
pub use error::{Error, Result};
#[cfg(feature = "std")]
pub use settings::MemorySettings;
pub use settings::{x_coordinate_only_key, EcpSettings, DEFAULT_NAMESPACE, X_COORDINATE_ONLY_KEY};
