//! Trait definitions for the key-exchange API

pub mod dh;
pub mod settings;

pub use dh::DiffieHellman;
pub use settings::Settings;
