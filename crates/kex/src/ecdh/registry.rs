// File: crates/kex/src/ecdh/registry.rs
//! Mapping from IKE group numbers to curve implementations

use alloc::boxed::Box;

use ecpdh_algorithms::ec::{named_group, CurveGroup, NamedCurve};
use ecpdh_api::{DhGroup, Error as ApiError, Result as ApiResult};
use ecpdh_params::traditional::ecp::{CurveDomainParams, BRAINPOOL_CURVES};

use super::brainpool::BrainpoolGroupBuilder;

/// How a group's arithmetic is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSpec {
    /// Built into the arithmetic backend
    Named(NamedCurve),
    /// Constructed from explicit domain parameters
    Explicit(&'static CurveDomainParams),
}

/// Resolves [`DhGroup`]s to curve groups
pub struct CurveRegistry;

impl CurveRegistry {
    /// How `group` would be implemented, or `None` if it is not an ECP group
    pub fn lookup(group: DhGroup) -> Option<CurveSpec> {
        let curve = match group {
            DhGroup::Ecp192 => NamedCurve::NistP192,
            DhGroup::Ecp224 => NamedCurve::NistP224,
            DhGroup::Ecp256 => NamedCurve::NistP256,
            DhGroup::Ecp384 => NamedCurve::NistP384,
            DhGroup::Ecp521 => NamedCurve::NistP521,
            DhGroup::Ecp224Bp => NamedCurve::BrainpoolP224r1,
            DhGroup::Ecp256Bp => NamedCurve::BrainpoolP256r1,
            DhGroup::Ecp384Bp => NamedCurve::BrainpoolP384r1,
            DhGroup::Ecp512Bp => NamedCurve::BrainpoolP512r1,
            DhGroup::Modp2048 | DhGroup::Modp3072 | DhGroup::Curve25519 | DhGroup::Curve448 => {
                return None
            }
        };

        if curve.is_native() {
            return Some(CurveSpec::Named(curve));
        }
        let name = brainpool_name(curve)?;
        BRAINPOOL_CURVES
            .iter()
            .copied()
            .find(|params| params.name == name)
            .map(CurveSpec::Explicit)
    }

    /// Instantiate the curve group for `group`
    pub fn resolve(group: DhGroup) -> ApiResult<Box<dyn CurveGroup>> {
        match Self::lookup(group) {
            Some(CurveSpec::Named(curve)) => Ok(named_group(curve)?),
            Some(CurveSpec::Explicit(params)) => Ok(Box::new(BrainpoolGroupBuilder::build(params)?)),
            None => Err(ApiError::UnsupportedGroup { group: group.id() }),
        }
    }

    /// Instantiate the curve group for a raw IANA group number
    pub fn resolve_id(id: u16) -> ApiResult<Box<dyn CurveGroup>> {
        Self::resolve(DhGroup::try_from(id)?)
    }
}

fn brainpool_name(curve: NamedCurve) -> Option<&'static str> {
    match curve {
        NamedCurve::BrainpoolP224r1 => Some("brainpoolP224r1"),
        NamedCurve::BrainpoolP256r1 => Some("brainpoolP256r1"),
        NamedCurve::BrainpoolP384r1 => Some("brainpoolP384r1"),
        NamedCurve::BrainpoolP512r1 => Some("brainpoolP512r1"),
        _ => None,
    }
}
