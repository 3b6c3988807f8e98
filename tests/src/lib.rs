//! Integration tests and test vectors for the ecpdh library
pub mod vectors;
