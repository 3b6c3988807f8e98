// File: crates/algorithms/src/ec/weierstrass.rs
//! Short Weierstrass curves from explicit domain parameters
//!
//! Curve: y² = x³ + ax + b over 𝔽ₚ for an odd prime p, with a generator of
//! prime order q (cofactor 1).
//!
//! Implements:
//! - Montgomery-form field arithmetic via `crypto-bigint` boxed integers,
//!   so one implementation serves every field size,
//! - homogeneous projective coordinates (X:Y:Z) with the complete addition
//!   and doubling formulas of Renes, Costello and Batina
//!   (<https://eprint.iacr.org/2015/1060>, algorithms 1 and 3), valid for
//!   any `a` on prime-order curves,
//! - MSB-first double-and-add scalar multiplication with a fixed number
//!   of group operations per scalar bit.
//!
//! Construction is two-phase: a [`PrimeCurve`] knows only `(p, a, b)` and
//! can build points; [`PrimeCurve::with_generator`] consumes it and yields a
//! [`PrimeWeierstrassGroup`]. A curve without a generator can therefore
//! never be used for key agreement.

use alloc::vec::Vec;
use crypto_bigint::modular::{BoxedMontyForm, BoxedMontyParams};
use crypto_bigint::{BoxedUint, Limb, Odd};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use super::{bit_length, ct_lt_be, fit_to_width, scalar_below_order, CurveGroup, EcPoint, EcScalar};
use crate::error::{validate, Error, Result};

/// The prime field 𝔽ₚ in Montgomery form
#[derive(Clone)]
struct PrimeField {
    /// Byte width of one element
    width: usize,
    /// Modulus, big-endian, exactly `width` bytes
    modulus: Vec<u8>,
    params: BoxedMontyParams,
}

impl PrimeField {
    fn new(p: &[u8]) -> Result<Self> {
        let bits = bit_length(p);
        validate::parameter(bits > 2, "p", "field prime must exceed 3")?;
        let width = (bits + 7) / 8;
        let modulus = p[p.len() - width..].to_vec();

        let value = BoxedUint::from_be_slice(&modulus, Self::precision(width))
            .map_err(|_| Error::param("p", "cannot be decoded"))?;
        let odd = Option::<Odd<BoxedUint>>::from(value.to_odd())
            .ok_or(Error::param("p", "field prime must be odd"))?;

        Ok(Self {
            width,
            modulus,
            params: BoxedMontyParams::new(odd),
        })
    }

    /// Limb-aligned precision wide enough for `width` bytes
    fn precision(width: usize) -> u32 {
        ((width * 8) as u32).div_ceil(Limb::BITS) * Limb::BITS
    }

    /// Decode a canonical element: exactly `width` bytes and less than p
    fn element(&self, bytes: &[u8]) -> Option<BoxedMontyForm> {
        if bytes.len() != self.width || !bool::from(ct_lt_be(bytes, &self.modulus)) {
            return None;
        }
        let value = BoxedUint::from_be_slice(bytes, Self::precision(self.width)).ok()?;
        Some(BoxedMontyForm::new(value, self.params.clone()))
    }

    fn zero(&self) -> BoxedMontyForm {
        BoxedMontyForm::zero(self.params.clone())
    }

    fn one(&self) -> BoxedMontyForm {
        BoxedMontyForm::one(self.params.clone())
    }

    /// Canonical big-endian encoding, exactly `width` bytes
    fn to_bytes(&self, element: &BoxedMontyForm) -> Vec<u8> {
        let mut value = element.retrieve();
        let raw = Zeroizing::new(value.to_be_bytes());
        value.zeroize();
        fit_to_width(&raw, self.width)
    }

    fn is_zero(&self, element: &BoxedMontyForm) -> bool {
        bool::from(element.retrieve().is_zero())
    }

    fn eq(&self, lhs: &BoxedMontyForm, rhs: &BoxedMontyForm) -> bool {
        bool::from(lhs.retrieve().ct_eq(&rhs.retrieve()))
    }
}

/// A point in homogeneous projective coordinates; the identity is (0:1:0)
#[derive(Clone)]
struct ProjectivePoint {
    x: BoxedMontyForm,
    y: BoxedMontyForm,
    z: BoxedMontyForm,
}

/// The curve y² = x³ + ax + b over a prime field, without a generator
#[derive(Clone)]
pub struct PrimeCurve {
    field: PrimeField,
    a: BoxedMontyForm,
    b: BoxedMontyForm,
    /// 3·b, used by both complete formulas
    b3: BoxedMontyForm,
}

impl PrimeCurve {
    /// Define a curve from big-endian `p`, `a` and `b`
    ///
    /// `p` must be an odd prime greater than 3 (primality is not tested),
    /// `a` and `b` must be reduced modulo `p` and padded to its width, and
    /// the curve must be non-singular.
    pub fn new(p: &[u8], a: &[u8], b: &[u8]) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let a = field.element(a).ok_or(Error::param("a", "not a canonical field element"))?;
        let b = field.element(b).ok_or(Error::param("b", "not a canonical field element"))?;
        let b3 = &(&b + &b) + &b;

        // 4a³ + 27b² ≠ 0
        let a3 = &(&a * &a) * &a;
        let b2 = &b * &b;
        let mut discriminant = field.zero();
        for _ in 0..4 {
            discriminant = &discriminant + &a3;
        }
        for _ in 0..27 {
            discriminant = &discriminant + &b2;
        }
        validate::parameter(!field.is_zero(&discriminant), "a, b", "curve is singular")?;

        Ok(Self { field, a, b, b3 })
    }

    /// Byte width of one field element
    pub fn field_element_len(&self) -> usize {
        self.field.width
    }

    /// Build an affine point on this curve from big-endian coordinates
    pub fn point(&self, x: &[u8], y: &[u8]) -> Result<EcPoint> {
        validate::length("affine x-coordinate", x.len(), self.field.width)?;
        validate::length("affine y-coordinate", y.len(), self.field.width)?;
        let point = EcPoint::affine(x.to_vec(), y.to_vec());
        validate::on_curve(self.contains(&point), "affine point")?;
        Ok(point)
    }

    /// Does the affine point satisfy the curve equation?
    pub fn contains(&self, point: &EcPoint) -> bool {
        let (x, y) = match point.coordinates() {
            Ok(coordinates) => coordinates,
            Err(_) => return false,
        };
        match (self.field.element(x), self.field.element(y)) {
            (Some(x), Some(y)) => self.satisfies_equation(&x, &y),
            _ => false,
        }
    }

    /// Attach a generator of prime order `order`, producing a usable group
    ///
    /// Consumes the curve; on error nothing usable is left behind.
    pub fn with_generator(
        self,
        name: &'static str,
        generator: EcPoint,
        order: &[u8],
        cofactor: u32,
    ) -> Result<PrimeWeierstrassGroup> {
        validate::parameter(cofactor == 1, "cofactor", "only prime-order groups are supported")?;
        validate::parameter(self.contains(&generator), "generator", "not a point on the curve")?;

        let order_bits = bit_length(order);
        validate::parameter(order_bits > 1, "q", "group order must exceed 1")?;
        let order = order[order.len() - (order_bits + 7) / 8..].to_vec();
        validate::parameter(order[order.len() - 1] & 1 == 1, "q", "group order must be odd")?;

        Ok(PrimeWeierstrassGroup {
            name,
            curve: self,
            generator,
            order,
            order_bits,
            cofactor,
        })
    }

    fn satisfies_equation(&self, x: &BoxedMontyForm, y: &BoxedMontyForm) -> bool {
        let lhs = y * y;
        let rhs = &(&(&(x * x) * x) + &(&self.a * x)) + &self.b;
        self.field.eq(&lhs, &rhs)
    }

    fn identity(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.field.zero(),
            y: self.field.one(),
            z: self.field.zero(),
        }
    }

    /// Lift a validated point into projective coordinates
    fn lift(&self, point: &EcPoint) -> Result<ProjectivePoint> {
        if point.is_identity() {
            return Ok(self.identity());
        }
        let (x, y) = point.coordinates()?;
        let x = self.field.element(x).ok_or(Error::InvalidPoint { context: "x-coordinate" })?;
        let y = self.field.element(y).ok_or(Error::InvalidPoint { context: "y-coordinate" })?;
        validate::on_curve(self.satisfies_equation(&x, &y), "affine point")?;
        Ok(ProjectivePoint { x, y, z: self.field.one() })
    }

    /// Project back to affine coordinates
    fn normalize(&self, point: &ProjectivePoint) -> EcPoint {
        match Option::<BoxedMontyForm>::from(point.z.invert()) {
            Some(z_inv) => {
                let x = &point.x * &z_inv;
                let y = &point.y * &z_inv;
                EcPoint::affine(self.field.to_bytes(&x), self.field.to_bytes(&y))
            }
            None => EcPoint::Identity,
        }
    }

    /// Complete addition, RCB algorithm 1
    fn add(&self, p: &ProjectivePoint, q: &ProjectivePoint) -> ProjectivePoint {
        let (a, b3) = (&self.a, &self.b3);

        let mut t0 = &p.x * &q.x;
        let mut t1 = &p.y * &q.y;
        let mut t2 = &p.z * &q.z;

        let mut t3 = &(&p.x + &p.y) * &(&q.x + &q.y);
        let mut t4 = &t0 + &t1;
        t3 = &t3 - &t4;

        t4 = &(&p.x + &p.z) * &(&q.x + &q.z);
        let mut t5 = &t0 + &t2;
        t4 = &t4 - &t5;

        t5 = &(&p.y + &p.z) * &(&q.y + &q.z);
        let mut x3 = &t1 + &t2;
        t5 = &t5 - &x3;

        let mut z3 = a * &t4;
        x3 = b3 * &t2;
        z3 = &x3 + &z3;
        x3 = &t1 - &z3;
        z3 = &t1 + &z3;
        let mut y3 = &x3 * &z3;

        t1 = &(&t0 + &t0) + &t0;
        t2 = a * &t2;
        t4 = b3 * &t4;
        t1 = &t1 + &t2;
        t2 = a * &(&t0 - &t2);
        t4 = &t4 + &t2;

        t0 = &t1 * &t4;
        y3 = &y3 + &t0;
        t0 = &t5 * &t4;
        x3 = &(&t3 * &x3) - &t0;
        t0 = &t3 * &t1;
        z3 = &(&t5 * &z3) + &t0;

        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// Complete doubling, RCB algorithm 3
    fn double(&self, p: &ProjectivePoint) -> ProjectivePoint {
        let (a, b3) = (&self.a, &self.b3);

        let mut t0 = &p.x * &p.x;
        let t1 = &p.y * &p.y;
        let mut t2 = &p.z * &p.z;
        let mut t3 = &p.x * &p.y;
        t3 = &t3 + &t3;

        let mut z3 = &p.x * &p.z;
        z3 = &z3 + &z3;
        let mut x3 = a * &z3;
        let mut y3 = &(b3 * &t2) + &x3;
        x3 = &t1 - &y3;
        y3 = &t1 + &y3;
        y3 = &x3 * &y3;
        x3 = &t3 * &x3;

        z3 = b3 * &z3;
        t2 = a * &t2;
        t3 = &(a * &(&t0 - &t2)) + &z3;
        z3 = &t0 + &t0;
        t0 = &(&z3 + &t0) + &t2;
        t0 = &t0 * &t3;
        y3 = &y3 + &t0;

        t2 = &p.y * &p.z;
        t2 = &t2 + &t2;
        t0 = &t2 * &t3;
        x3 = &x3 - &t0;
        z3 = &t2 * &t1;
        z3 = &z3 + &z3;
        z3 = &z3 + &z3;

        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// `scalar · point` for a big-endian scalar
    ///
    /// Every bit costs one doubling and one addition regardless of its value.
    fn multiply(&self, point: &ProjectivePoint, scalar: &[u8]) -> ProjectivePoint {
        let mut acc = self.identity();
        for &byte in scalar.iter() {
            for i in (0..8).rev() {
                acc = self.double(&acc);
                let sum = self.add(&acc, point);
                if (byte >> i) & 1 == 1 {
                    acc = sum;
                }
            }
        }
        acc
    }
}

/// A prime-order group on an explicitly parameterized curve
#[derive(Clone)]
pub struct PrimeWeierstrassGroup {
    name: &'static str,
    curve: PrimeCurve,
    generator: EcPoint,
    /// Big-endian, without leading zero bytes
    order: Vec<u8>,
    order_bits: usize,
    cofactor: u32,
}

impl PrimeWeierstrassGroup {
    /// The underlying curve
    pub fn curve(&self) -> &PrimeCurve {
        &self.curve
    }

    /// Order of the generator, big-endian
    pub fn order(&self) -> &[u8] {
        &self.order
    }

    /// Cofactor of the group
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// `order · point` computed with an unrestricted multiplier
    ///
    /// Used to confirm that a point lies in the prime-order subgroup;
    /// [`CurveGroup::mul`] only accepts scalars below the order.
    pub fn mul_by_order(&self, point: &EcPoint) -> Result<EcPoint> {
        let lifted = self.curve.lift(point)?;
        Ok(self.curve.normalize(&self.curve.multiply(&lifted, &self.order)))
    }
}

impl CurveGroup for PrimeWeierstrassGroup {
    fn name(&self) -> &'static str {
        self.name
    }

    fn field_element_len(&self) -> usize {
        self.curve.field_element_len()
    }

    fn order_bits(&self) -> usize {
        self.order_bits
    }

    fn generator(&self) -> EcPoint {
        self.generator.clone()
    }

    fn point_from_affine(&self, x: &[u8], y: &[u8]) -> Result<EcPoint> {
        self.curve.point(x, y)
    }

    fn is_on_curve(&self, point: &EcPoint) -> bool {
        self.curve.contains(point)
    }

    fn scalar_from_be_bytes(&self, bytes: &[u8]) -> Result<EcScalar> {
        scalar_below_order(bytes, &self.order, self.name)
    }

    fn mul(&self, point: &EcPoint, scalar: &EcScalar) -> Result<EcPoint> {
        let lifted = self.curve.lift(point)?;
        let product = self.curve.multiply(&lifted, scalar.as_be_bytes());
        Ok(self.curve.normalize(&product))
    }
}
