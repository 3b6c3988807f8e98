//! Elliptic curve arithmetic for prime-field Diffie-Hellman groups
//!
//! This crate provides the group operations behind the key-agreement layer:
//! point validation, scalar range checks, scalar multiplication and random
//! scalar generation. Every curve is reached through the object-safe
//! [`ec::CurveGroup`] trait, whether its arithmetic comes from a RustCrypto
//! curve crate or from explicit domain parameters.
//!
//! The library is usable in `no_std` environments with an allocator.
//!
//! # Security Features
//!
//! - Scalars and point coordinates are zeroized on drop
//! - Range checks on scalars and coordinates are constant-time
//! - Explicit-parameter scalar multiplication performs the same sequence of
//!   group operations for every scalar of a given width

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve groups
pub mod ec;
pub use ec::{
    named_group, random_scalar, CurveGroup, EcPoint, EcScalar, NamedCurve, NativeGroup, PrimeCurve,
    PrimeWeierstrassGroup,
};
