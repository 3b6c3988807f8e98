// File: crates/kex/src/ecdh/brainpool.rs
//! Brainpool groups from explicit domain parameters
//!
//! RFC 5639 curves are not built into the arithmetic backend, so each one is
//! assembled from its `(p, a, b, G, q)` table: first the curve, then the
//! generator on it, then the group. Each stage validates its inputs and a
//! failure at any stage leaves nothing behind.

use ecpdh_algorithms::ec::{PrimeCurve, PrimeWeierstrassGroup};
use ecpdh_params::traditional::ecp::CurveDomainParams;
use tracing::debug;

use crate::error::{Error, Result};

/// Builds a [`PrimeWeierstrassGroup`] from a domain-parameter table
pub struct BrainpoolGroupBuilder;

impl BrainpoolGroupBuilder {
    /// Construct the group described by `params`
    ///
    /// Pure: the result depends only on `params`.
    pub fn build(params: &'static CurveDomainParams) -> Result<PrimeWeierstrassGroup> {
        let curve = PrimeCurve::new(params.p, params.a, params.b).map_err(|e| {
            debug!("{}: curve parameters rejected: {}", params.name, e);
            Error::GroupConstruction {
                curve: params.name,
                details: "invalid curve parameters",
            }
        })?;

        let generator = curve.point(params.x, params.y).map_err(|e| {
            debug!("{}: generator rejected: {}", params.name, e);
            Error::GroupConstruction {
                curve: params.name,
                details: "generator is not on the curve",
            }
        })?;

        let group = curve
            .with_generator(params.name, generator, params.q, params.cofactor)
            .map_err(|e| {
                debug!("{}: generator assignment rejected: {}", params.name, e);
                Error::GroupConstruction {
                    curve: params.name,
                    details: "invalid generator order or cofactor",
                }
            })?;

        debug!("{}: constructed from explicit parameters", params.name);
        Ok(group)
    }
}
