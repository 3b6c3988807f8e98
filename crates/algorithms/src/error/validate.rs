//! Validation utilities for curve arithmetic

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a point lies on the curve
#[inline(always)]
pub fn on_curve(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}
