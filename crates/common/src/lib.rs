//! Common implementations and shared functionality for the ecpdh library
//!
//! This crate provides the secure-memory types used by the arithmetic and
//! key-exchange layers to hold private scalars and shared secrets.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod security;

pub use security::SecretVec;
