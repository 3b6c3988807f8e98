//! Security primitives and memory safety utilities

pub mod secret;

pub use secret::SecretVec;
