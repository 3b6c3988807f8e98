//! Validation utilities shared by every layer

use super::{Error, Result};

/// Validate an exact input length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MalformedInput {
            context,
            reason: "unexpected length",
        });
    }
    Ok(())
}
