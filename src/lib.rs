//! # ecpdh
//!
//! Elliptic-curve Diffie-Hellman for IPsec/IKE key management.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecpdh = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): operating-system randomness and the mutable settings store
//! - `kex` (default): ECDH sessions over the IKE ECP groups
//! - `algorithms`: curve arithmetic without the session layer
//! - `serde`: serialization of group identifiers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecpdh-api`]: Error taxonomy, group identifiers and traits
//! - [`ecpdh-common`]: Zeroizing secret containers
//! - [`ecpdh-params`]: NIST and Brainpool domain parameters
//! - [`ecpdh-algorithms`]: Curve groups and scalar multiplication
//! - [`ecpdh-kex`]: ECDH sessions, curve registry and coordinate codec

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ecpdh_api as api;
pub use ecpdh_common as common;
pub use ecpdh_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecpdh_algorithms as algorithms;

#[cfg(feature = "kex")]
pub use ecpdh_kex as kex;

/// Common imports for ecpdh users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{DhGroup, Error, Result};

    // Re-export core traits
    pub use crate::api::{DiffieHellman, Settings};

    // Re-export security types
    pub use crate::common::SecretVec;

    #[cfg(feature = "kex")]
    pub use crate::kex::{EcdhProvider, EcdhSession, EcpSettings};

    #[cfg(all(feature = "kex", feature = "std"))]
    pub use crate::kex::MemorySettings;
}
