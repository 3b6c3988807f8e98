// File: crates/kex/src/ecdh/codec.rs
//! Wire encoding of ECP points
//!
//! IKE carries ECP values as the bare concatenation `x‖y`, each coordinate
//! big-endian and left-padded to the byte length of the field prime. There
//! is no SEC1 prefix octet and no compressed form.

use ecpdh_algorithms::ec::{CurveGroup, EcPoint};
use ecpdh_api::{Error as ApiError, Result as ApiResult};
use ecpdh_common::SecretVec;

use crate::error::validate;

/// Converts between points and their IKE byte encoding
pub struct CoordinateCodec;

impl CoordinateCodec {
    /// Parse a peer's `x‖y` value into a validated point of `group`
    ///
    /// # Errors
    /// - `MalformedInput` if `bytes` is not exactly two field elements long
    /// - `InvalidPoint` if a coordinate is not below `p` or the point is not
    ///   on the curve
    pub fn decode(group: &dyn CurveGroup, bytes: &[u8]) -> ApiResult<EcPoint> {
        let width = group.field_element_len();
        validate::length("ECDH public value", bytes.len(), 2 * width)?;

        let (x, y) = bytes.split_at(width);
        group
            .point_from_affine(x, y)
            .map_err(|_| ApiError::InvalidPoint { context: "ECDH public value" })
    }

    /// Encode `point` as `x‖y`, or as `x` alone when `x_only` is set
    ///
    /// Each coordinate occupies exactly one field element. The identity has
    /// no affine coordinates and cannot be encoded.
    pub fn encode(group: &dyn CurveGroup, point: &EcPoint, x_only: bool) -> ApiResult<SecretVec> {
        let width = group.field_element_len();
        let (x, y) = point.coordinates()?;
        let x = SecretVec::left_padded(x, width).map_err(|_| ApiError::ArithmeticFailure {
            context: "x-coordinate wider than field",
        })?;

        let mut encoded = SecretVec::with_capacity(if x_only { width } else { 2 * width });
        encoded.extend_from_slice(x.as_slice());
        if !x_only {
            let y = SecretVec::left_padded(y, width).map_err(|_| ApiError::ArithmeticFailure {
                context: "y-coordinate wider than field",
            })?;
            encoded.extend_from_slice(y.as_slice());
        }
        Ok(encoded)
    }
}
