//! Validation utilities for key-agreement operations

use super::{Error, Result};

/// Validate a keypair generation or import step
pub fn key_generation(condition: bool, curve: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::KeyGeneration { curve, details });
    }
    Ok(())
}

/// Validate a shared-secret derivation step
pub fn agreement(condition: bool, curve: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Agreement { curve, details });
    }
    Ok(())
}

// Re-export input validations for convenience
pub use ecpdh_api::error::validate::length;
