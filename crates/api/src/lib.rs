//! Public API traits and types for the ecpdh library
//!
//! This crate provides the public API surface for the ecpdh ecosystem: the
//! error taxonomy shared by every layer, the IKE group identifiers, and the
//! traits that connect a key-exchange session to its caller and to the
//! configuration store.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{DiffieHellman, Settings};
