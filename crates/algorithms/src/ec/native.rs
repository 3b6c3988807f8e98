//! Built-in curves backed by the RustCrypto `elliptic-curve` arithmetic
//!
//! One generic adapter covers every curve crate that implements
//! [`CurveArithmetic`] with SEC1 point encoding. Points are moved across
//! the [`CurveGroup`] boundary through uncompressed SEC1 encodings, which
//! also performs the field-range and curve-equation checks.

use core::marker::PhantomData;

use alloc::vec::Vec;
use ecpdh_params::traditional::ecp::CurveDomainParams;
use elliptic_curve::group::{Curve as _, Group};
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, NonZeroScalar, ProjectivePoint};
use zeroize::Zeroize;

use super::{bit_length, scalar_below_order, CurveGroup, EcPoint, EcScalar};
use crate::error::{validate, Error, Result};

/// A named curve served by a RustCrypto curve crate
pub struct NativeGroup<C> {
    params: &'static CurveDomainParams,
    _curve: PhantomData<fn() -> C>,
}

impl<C> NativeGroup<C>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    /// Wrap curve `C`, described by `params`
    ///
    /// `params` supplies the name and the order used for range checks; it
    /// must describe the same curve as `C`.
    pub fn new(params: &'static CurveDomainParams) -> Self {
        Self {
            params,
            _curve: PhantomData,
        }
    }

    fn field_bytes(&self, bytes: &[u8]) -> Result<FieldBytes<C>> {
        let mut repr = FieldBytes::<C>::default();
        validate::length(self.params.name, bytes.len(), repr.len())?;
        repr.copy_from_slice(bytes);
        Ok(repr)
    }

    fn to_affine_point(&self, point: &EcPoint) -> Result<AffinePoint<C>> {
        let (x, y) = point.coordinates()?;
        let x = self.field_bytes(x)?;
        let y = self.field_bytes(y)?;
        let encoded = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);
        Option::<AffinePoint<C>>::from(AffinePoint::<C>::from_encoded_point(&encoded))
            .ok_or(Error::InvalidPoint { context: self.params.name })
    }

    fn to_nonzero_scalar(&self, scalar: &EcScalar) -> Result<NonZeroScalar<C>> {
        let mut repr = self.field_bytes(scalar.as_be_bytes())?;
        let k = Option::<NonZeroScalar<C>>::from(NonZeroScalar::<C>::from_repr(repr.clone()));
        repr.as_mut_slice().zeroize();
        k.ok_or(Error::ScalarRange { context: self.params.name })
    }

    fn from_projective(&self, point: ProjectivePoint<C>) -> Result<EcPoint> {
        if bool::from(point.is_identity()) {
            return Ok(EcPoint::Identity);
        }
        let encoded = point.to_affine().to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Ok(EcPoint::affine(x.to_vec(), y.to_vec())),
            _ => Err(Error::Processing {
                operation: "affine coordinate extraction",
                details: "encoding carries no coordinates",
            }),
        }
    }
}

impl<C> CurveGroup for NativeGroup<C>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    fn name(&self) -> &'static str {
        self.params.name
    }

    fn field_element_len(&self) -> usize {
        self.params.field_element_len()
    }

    fn order_bits(&self) -> usize {
        bit_length(self.params.q)
    }

    fn generator(&self) -> EcPoint {
        EcPoint::affine(self.params.x.to_vec(), self.params.y.to_vec())
    }

    fn point_from_affine(&self, x: &[u8], y: &[u8]) -> Result<EcPoint> {
        let point = EcPoint::affine(x.to_vec(), y.to_vec());
        self.to_affine_point(&point)?;
        Ok(point)
    }

    fn is_on_curve(&self, point: &EcPoint) -> bool {
        self.to_affine_point(point).is_ok()
    }

    fn scalar_from_be_bytes(&self, bytes: &[u8]) -> Result<EcScalar> {
        scalar_below_order(bytes, self.params.q, self.params.name)
    }

    fn mul(&self, point: &EcPoint, scalar: &EcScalar) -> Result<EcPoint> {
        if point.is_identity() {
            return Ok(EcPoint::Identity);
        }
        let base = ProjectivePoint::<C>::from(self.to_affine_point(point)?);
        let mut k = self.to_nonzero_scalar(scalar)?;
        let product = base * *k;
        k.zeroize();
        self.from_projective(product)
    }

    fn mul_generator(&self, scalar: &EcScalar) -> Result<EcPoint> {
        let mut k = self.to_nonzero_scalar(scalar)?;
        let product = ProjectivePoint::<C>::generator() * *k;
        k.zeroize();
        self.from_projective(product)
    }
}
