//! Known-answer vectors for ECDH over the IKE ECP groups
//!
//! Vectors live as JSON files under `src/vectors/ecdh/`; values are hex
//! strings so the files can be checked against their published sources.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One side of a published key agreement
#[derive(Debug, Clone, Deserialize)]
pub struct EcdhVector {
    /// Where the values come from
    pub source: String,
    /// IANA Diffie-Hellman group number
    pub group: u16,
    /// Our private value, big-endian hex
    pub private: String,
    /// Our public value `x‖y`, hex
    pub public: String,
    /// The peer's public value `x‖y`, hex
    pub peer_public: String,
    /// x-coordinate of the shared point, hex
    pub shared_x: String,
    /// y-coordinate of the shared point, hex
    pub shared_y: String,
}

impl EcdhVector {
    pub fn private_bytes(&self) -> Vec<u8> {
        decode(&self.private)
    }

    pub fn public_bytes(&self) -> Vec<u8> {
        decode(&self.public)
    }

    pub fn peer_public_bytes(&self) -> Vec<u8> {
        decode(&self.peer_public)
    }

    /// The expected shared secret in either format
    pub fn shared_secret(&self, x_only: bool) -> Vec<u8> {
        let mut secret = decode(&self.shared_x);
        if !x_only {
            secret.extend_from_slice(&decode(&self.shared_y));
        }
        secret
    }
}

#[derive(Debug, Deserialize)]
struct VectorFile {
    vectors: Vec<EcdhVector>,
}

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("ecdh")
}

/// Load every vector in `src/vectors/ecdh/<name>.json`
pub fn load(name: &str) -> Result<Vec<EcdhVector>, String> {
    let path = vector_dir().join(format!("{}.json", name));
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let file: VectorFile =
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse JSON: {}", e))?;
    Ok(file.vectors)
}

fn decode(value: &str) -> Vec<u8> {
    hex::decode(value).unwrap_or_else(|e| panic!("bad hex in vector file: {}", e))
}
