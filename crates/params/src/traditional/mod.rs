//! Constants for traditional (elliptic-curve) key agreement

pub mod ecp;
