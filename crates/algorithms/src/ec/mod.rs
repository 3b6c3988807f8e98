// File: crates/algorithms/src/ec/mod.rs
//! Elliptic Curve Primitives
//!
//! This module exposes prime-field short Weierstrass groups behind one
//! object-safe trait, [`CurveGroup`]. Two backends implement it:
//!
//! - [`native`]: the NIST curves, using the RustCrypto curve crates
//!   through their `elliptic-curve` arithmetic.
//! - [`weierstrass`]: any curve given by explicit domain parameters
//!   `(p, a, b, G, q)`, using `crypto-bigint` Montgomery arithmetic with
//!   complete projective formulas. The Brainpool groups take this path.
//!
//! Points cross the trait boundary as big-endian affine coordinates padded
//! to the field width, and scalars as big-endian integers padded to the
//! order width, so callers never see backend types.

use core::fmt;

use alloc::boxed::Box;
use alloc::vec::Vec;
use ecpdh_common::SecretVec;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

pub mod native;
pub mod weierstrass;

pub use native::NativeGroup;
pub use weierstrass::{PrimeCurve, PrimeWeierstrassGroup};

/// Upper bound on rejection-sampling rounds when drawing a scalar
///
/// With the top byte masked to the order's bit length a draw is accepted
/// with probability above one half for every supported curve.
const MAX_SCALAR_ATTEMPTS: usize = 128;

/// A point of a curve group: the identity or an affine point
///
/// Coordinates are big-endian and exactly one field element wide. A value
/// of this type says nothing about which curve it belongs to; groups
/// validate points they did not produce themselves.
#[derive(Clone, PartialEq, Eq)]
pub enum EcPoint {
    /// The point at infinity
    Identity,
    /// An affine point `(x, y)`
    Affine {
        /// x-coordinate
        x: Vec<u8>,
        /// y-coordinate
        y: Vec<u8>,
    },
}

impl EcPoint {
    /// Build an affine point from already padded coordinates
    pub fn affine(x: Vec<u8>, y: Vec<u8>) -> Self {
        EcPoint::Affine { x, y }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, EcPoint::Identity)
    }

    /// Affine coordinates `(x, y)`
    ///
    /// The identity has no affine representation and yields an error.
    pub fn coordinates(&self) -> Result<(&[u8], &[u8])> {
        match self {
            EcPoint::Affine { x, y } => Ok((x.as_slice(), y.as_slice())),
            EcPoint::Identity => Err(Error::Identity {
                operation: "affine coordinate extraction",
            }),
        }
    }
}

impl Zeroize for EcPoint {
    fn zeroize(&mut self) {
        if let EcPoint::Affine { x, y } = self {
            x.zeroize();
            y.zeroize();
        }
    }
}

impl Drop for EcPoint {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for EcPoint {}

impl fmt::Debug for EcPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcPoint::Identity => write!(f, "EcPoint::Identity"),
            EcPoint::Affine { x, .. } => write!(f, "EcPoint::Affine({} bytes, [REDACTED])", x.len()),
        }
    }
}

/// A scalar in `[1, q-1]` for some group order `q`
///
/// Stored big-endian, padded to the byte length of `q`, and zeroized on
/// drop. Only a [`CurveGroup`] can create one, which guarantees the range.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcScalar {
    bytes: SecretVec,
}

impl EcScalar {
    pub(crate) fn as_be_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Byte length of the encoded scalar
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a scalar has at least one byte
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for EcScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcScalar([REDACTED])")
    }
}

/// A prime-order elliptic curve group usable for Diffie-Hellman
pub trait CurveGroup: Send + Sync {
    /// Standard name of the curve
    fn name(&self) -> &'static str;

    /// Byte length of one field element
    fn field_element_len(&self) -> usize;

    /// Bit length of the group order `q`
    fn order_bits(&self) -> usize;

    /// Byte length of an encoded scalar
    fn order_len(&self) -> usize {
        (self.order_bits() + 7) / 8
    }

    /// The generator `G`
    fn generator(&self) -> EcPoint;

    /// Build a point from big-endian affine coordinates
    ///
    /// Each coordinate must be exactly one field element wide, less than
    /// `p`, and the point must satisfy the curve equation.
    fn point_from_affine(&self, x: &[u8], y: &[u8]) -> Result<EcPoint>;

    /// Does `point` satisfy the curve equation?
    ///
    /// The identity is reported as not on the curve, since it can never be
    /// a valid public value.
    fn is_on_curve(&self, point: &EcPoint) -> bool;

    /// Interpret big-endian bytes as a scalar in `[1, q-1]`
    ///
    /// Leading zero bytes are ignored, so inputs of any length are accepted
    /// as long as the value is in range.
    fn scalar_from_be_bytes(&self, bytes: &[u8]) -> Result<EcScalar>;

    /// Compute `scalar · point`
    fn mul(&self, point: &EcPoint, scalar: &EcScalar) -> Result<EcPoint>;

    /// Compute `scalar · G`
    fn mul_generator(&self, scalar: &EcScalar) -> Result<EcPoint> {
        self.mul(&self.generator(), scalar)
    }
}

impl fmt::Debug for dyn CurveGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveGroup")
            .field("name", &self.name())
            .field("field_element_len", &self.field_element_len())
            .finish()
    }
}

/// Curves the arithmetic backend may know by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// NIST P-192
    NistP192,
    /// NIST P-224
    NistP224,
    /// NIST P-256
    NistP256,
    /// NIST P-384
    NistP384,
    /// NIST P-521
    NistP521,
    /// brainpoolP224r1
    BrainpoolP224r1,
    /// brainpoolP256r1
    BrainpoolP256r1,
    /// brainpoolP384r1
    BrainpoolP384r1,
    /// brainpoolP512r1
    BrainpoolP512r1,
}

impl NamedCurve {
    /// Does the backend have a built-in implementation of this curve?
    ///
    /// Curves without one must be constructed from explicit parameters.
    pub const fn is_native(self) -> bool {
        matches!(
            self,
            NamedCurve::NistP192
                | NamedCurve::NistP224
                | NamedCurve::NistP256
                | NamedCurve::NistP384
                | NamedCurve::NistP521
        )
    }
}

/// Instantiate a built-in curve
///
/// Fails with `NotImplemented` when [`NamedCurve::is_native`] is false.
pub fn named_group(curve: NamedCurve) -> Result<Box<dyn CurveGroup>> {
    use ecpdh_params::traditional::ecp;

    let group: Box<dyn CurveGroup> = match curve {
        NamedCurve::NistP192 => Box::new(NativeGroup::<p192::NistP192>::new(&ecp::NIST_P192)),
        NamedCurve::NistP224 => Box::new(NativeGroup::<p224::NistP224>::new(&ecp::NIST_P224)),
        NamedCurve::NistP256 => Box::new(NativeGroup::<p256::NistP256>::new(&ecp::NIST_P256)),
        NamedCurve::NistP384 => Box::new(NativeGroup::<p384::NistP384>::new(&ecp::NIST_P384)),
        NamedCurve::NistP521 => Box::new(NativeGroup::<p521::NistP521>::new(&ecp::NIST_P521)),
        NamedCurve::BrainpoolP224r1
        | NamedCurve::BrainpoolP256r1
        | NamedCurve::BrainpoolP384r1
        | NamedCurve::BrainpoolP512r1 => {
            return Err(Error::NotImplemented {
                feature: "built-in Brainpool arithmetic",
            })
        }
    };
    Ok(group)
}

/// Draw a uniformly random scalar in `[1, q-1]`
///
/// Random bytes are masked to the bit length of `q` and rejected until they
/// fall in range.
pub fn random_scalar<R>(group: &dyn CurveGroup, rng: &mut R) -> Result<EcScalar>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let len = group.order_len();
    let excess_bits = len * 8 - group.order_bits();
    let top_mask = 0xFFu8 >> excess_bits;

    let mut candidate = Zeroizing::new(alloc::vec![0u8; len]);
    for _ in 0..MAX_SCALAR_ATTEMPTS {
        rng.try_fill_bytes(&mut candidate)
            .map_err(|_| Error::RandomGeneration { context: "scalar generation" })?;
        candidate[0] &= top_mask;
        if let Ok(scalar) = group.scalar_from_be_bytes(&candidate) {
            return Ok(scalar);
        }
    }
    Err(Error::RandomGeneration {
        context: "scalar generation exhausted its attempts",
    })
}

/// Bit length of a big-endian integer
pub(crate) fn bit_length(bytes: &[u8]) -> usize {
    match bytes.iter().position(|&b| b != 0) {
        Some(i) => (bytes.len() - i - 1) * 8 + (8 - bytes[i].leading_zeros() as usize),
        None => 0,
    }
}

/// Constant-time `a < b` for big-endian integers of equal length
pub(crate) fn ct_lt_be(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    let mut lt = Choice::from(0);
    let mut eq = Choice::from(1);
    for (x, y) in a.iter().zip(b.iter()) {
        lt |= eq & x.ct_lt(y);
        eq &= x.ct_eq(y);
    }
    lt
}

/// Range-check `bytes` against the order `q` and wrap it as a scalar
///
/// `q` is big-endian without leading zeros beyond its natural width.
pub(crate) fn scalar_below_order(bytes: &[u8], q: &[u8], context: &'static str) -> Result<EcScalar> {
    let width = (bit_length(q) + 7) / 8;
    let q = &q[q.len() - width..];

    let padded = SecretVec::left_padded(bytes, width)
        .map_err(|_| Error::ScalarRange { context })?;
    let is_zero = padded.as_slice().iter().fold(0u8, |acc, &b| acc | b).ct_eq(&0);
    let in_range = ct_lt_be(padded.as_slice(), q) & !is_zero;
    if !bool::from(in_range) {
        return Err(Error::ScalarRange { context });
    }
    Ok(EcScalar { bytes: padded })
}

/// Copy a big-endian value into exactly `width` bytes
///
/// Callers guarantee the value fits; extra leading bytes must be zero.
pub(crate) fn fit_to_width(value: &[u8], width: usize) -> Vec<u8> {
    if value.len() >= width {
        value[value.len() - width..].to_vec()
    } else {
        let mut out = alloc::vec![0u8; width - value.len()];
        out.extend_from_slice(value);
        out
    }
}
