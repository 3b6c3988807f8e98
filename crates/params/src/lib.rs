//! Constant values for the ecpdh library
//!
//! Domain parameters are stored as big-endian byte strings, each padded to
//! the width of the field, exactly as they appear in the defining standards.

#![no_std]

pub mod traditional;
