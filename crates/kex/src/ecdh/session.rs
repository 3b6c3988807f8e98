// File: crates/kex/src/ecdh/session.rs
//! One ECDH exchange
//!
//! A session is created with a fresh keypair, hands out its public value,
//! accepts the peer's value and derives the shared secret. The secret is
//! present exactly when the last peer value was accepted; every failure
//! leaves the session without one.
//!
//! # Security Features
//!
//! - Peer values are range- and curve-checked before any multiplication
//! - A product at infinity is rejected, never encoded
//! - The private scalar, the peer point and the secret are zeroized on drop,
//!   and a previous secret is wiped before a new one is computed

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use ecpdh_algorithms::ec::{random_scalar, CurveGroup, EcPoint, EcScalar};
use ecpdh_api::{DhGroup, DiffieHellman, Error as ApiError, Result as ApiResult, Settings};
use ecpdh_common::SecretVec;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use super::codec::CoordinateCodec;
use super::registry::CurveRegistry;
use crate::error::validate;
use crate::settings::{x_coordinate_only_key, DEFAULT_NAMESPACE};

/// An ECDH exchange on one of the IKE ECP groups
pub struct EcdhSession {
    group: DhGroup,
    curve: Box<dyn CurveGroup>,
    private_key: EcScalar,
    /// Our public value, already in `x‖y` wire form
    public_value: Vec<u8>,
    peer: Option<EcPoint>,
    shared_secret: Option<SecretVec>,
    settings: Arc<dyn Settings>,
    x_only_key: String,
}

impl EcdhSession {
    /// Start an exchange on `group` with a key from the operating system RNG
    #[cfg(feature = "std")]
    pub fn new(group: DhGroup, settings: Arc<dyn Settings>) -> ApiResult<Self> {
        Self::with_rng(group, settings, &mut rand::rngs::OsRng)
    }

    /// Start an exchange on `group` with a key drawn from `rng`
    ///
    /// # Errors
    /// - `UnsupportedGroup` if `group` is not an ECP group
    /// - `ArithmeticFailure` if the curve cannot be set up
    /// - `RandomGeneration` if `rng` fails
    pub fn with_rng<R>(group: DhGroup, settings: Arc<dyn Settings>, rng: &mut R) -> ApiResult<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let curve = CurveRegistry::resolve(group)?;
        let private_key = random_scalar(curve.as_ref(), rng)?;
        let public_value = public_value_for(curve.as_ref(), &private_key)?;

        debug!("created {} ECDH session on {}", group, curve.name());
        Ok(Self {
            group,
            curve,
            private_key,
            public_value,
            peer: None,
            shared_secret: None,
            settings,
            x_only_key: x_coordinate_only_key(DEFAULT_NAMESPACE),
        })
    }

    /// Look the shared-secret format up in `namespace` instead of the default
    pub fn in_namespace(mut self, namespace: &str) -> Self {
        self.x_only_key = x_coordinate_only_key(namespace);
        self
    }

    /// Replace the private value with a caller-supplied big-endian integer
    ///
    /// Any length is accepted as long as the value lies in `[1, q-1]`; the
    /// public value is recomputed. On error the previous keypair stays in
    /// place. A shared secret computed earlier is not affected.
    pub fn set_private_value(&mut self, value: &[u8]) -> ApiResult<()> {
        let private_key = self.curve.scalar_from_be_bytes(value)?;
        let public_value = public_value_for(self.curve.as_ref(), &private_key)?;

        self.private_key = private_key;
        self.public_value.zeroize();
        self.public_value = public_value;
        Ok(())
    }

    /// Our public value `x‖y`, each coordinate one field element wide
    ///
    /// Always the full point, whatever the shared-secret format.
    pub fn get_my_public_value(&self) -> Vec<u8> {
        self.public_value.clone()
    }

    /// Accept the peer's public value and derive the shared secret
    ///
    /// The shared-secret format is read from the settings on every call, so
    /// a configuration change applies to the next exchange.
    ///
    /// # Errors
    /// - `MalformedInput` if the value has the wrong length
    /// - `InvalidPoint` if it is not a point on the curve
    /// - `ArithmeticFailure` if the product is the point at infinity
    pub fn set_other_public_value(&mut self, value: &[u8]) -> ApiResult<()> {
        self.clear_secret();

        let peer = match self
            .group
            .verify_value(value)
            .and_then(|_| CoordinateCodec::decode(self.curve.as_ref(), value))
        {
            Ok(point) => point,
            Err(e) => {
                warn!("ECDH public value is malformed");
                return Err(e);
            }
        };

        let secret = match self.compute_secret(&peer) {
            Ok(secret) => secret,
            Err(e) => {
                warn!("ECDH shared secret computation failed");
                return Err(e);
            }
        };

        self.peer = Some(peer);
        self.shared_secret = Some(secret);
        Ok(())
    }

    /// A copy of the shared secret
    ///
    /// Fails with `NotComputed` until a peer value has been accepted.
    pub fn get_shared_secret(&self) -> ApiResult<SecretVec> {
        self.shared_secret.clone().ok_or(ApiError::NotComputed)
    }

    /// Has a shared secret been derived from the current peer value?
    pub fn is_computed(&self) -> bool {
        self.shared_secret.is_some()
    }

    /// The group this session was created for
    pub fn get_dh_group(&self) -> DhGroup {
        self.group
    }

    fn compute_secret(&self, peer: &EcPoint) -> ApiResult<SecretVec> {
        let name = self.curve.name();
        let mut product = self.curve.mul(peer, &self.private_key)?;
        validate::agreement(!product.is_identity(), name, "product is the point at infinity")
            .map_err(ApiError::from)?;

        let x_only = self.settings.get_bool(&self.x_only_key, true);
        let encoded = CoordinateCodec::encode(self.curve.as_ref(), &product, x_only);
        product.zeroize();
        encoded
    }

    fn clear_secret(&mut self) {
        if let Some(mut secret) = self.shared_secret.take() {
            secret.clear();
        }
        if let Some(mut peer) = self.peer.take() {
            peer.zeroize();
        }
    }
}

/// `k·G` in wire form
fn public_value_for(curve: &dyn CurveGroup, private_key: &EcScalar) -> ApiResult<Vec<u8>> {
    let public = curve.mul_generator(private_key)?;
    validate::key_generation(!public.is_identity(), curve.name(), "public value is the identity")
        .map_err(ApiError::from)?;
    let encoded = CoordinateCodec::encode(curve, &public, false)?;
    Ok(encoded.as_slice().to_vec())
}

impl Drop for EcdhSession {
    fn drop(&mut self) {
        self.clear_secret();
        self.private_key.zeroize();
        self.public_value.zeroize();
        debug!("destroyed {} ECDH session", self.group);
    }
}

impl fmt::Debug for EcdhSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdhSession")
            .field("group", &self.group)
            .field("curve", &self.curve.name())
            .field("computed", &self.is_computed())
            .finish_non_exhaustive()
    }
}

impl DiffieHellman for EcdhSession {
    fn dh_group(&self) -> DhGroup {
        self.get_dh_group()
    }

    fn public_value(&self) -> ApiResult<Vec<u8>> {
        Ok(self.get_my_public_value())
    }

    fn set_other_public_value(&mut self, value: &[u8]) -> ApiResult<()> {
        EcdhSession::set_other_public_value(self, value)
    }

    fn set_private_value(&mut self, value: &[u8]) -> ApiResult<()> {
        EcdhSession::set_private_value(self, value)
    }

    fn shared_secret(&self) -> ApiResult<Zeroizing<Vec<u8>>> {
        self.get_shared_secret().map(|secret| secret.to_zeroizing())
    }
}
