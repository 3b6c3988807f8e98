// File: crates/kex/src/ecdh/mod.rs
//! ECDH over the IKE ECP groups
//!
//! The NIST groups (19, 20, 21, 25, 26) run on the built-in curve
//! arithmetic. The Brainpool groups (27 to 30) are assembled from explicit
//! domain parameters by [`BrainpoolGroupBuilder`]. [`CurveRegistry`] hides
//! that difference, so an [`EcdhSession`] behaves the same on every group.

pub mod brainpool;
pub mod codec;
pub mod registry;
pub mod session;

pub use brainpool::BrainpoolGroupBuilder;
pub use codec::CoordinateCodec;
pub use registry::{CurveRegistry, CurveSpec};
pub use session::EcdhSession;

use alloc::string::String;
use alloc::sync::Arc;

use ecpdh_api::{DhGroup, Result as ApiResult, Settings};
use rand::{CryptoRng, RngCore};

use crate::settings::{EcpSettings, DEFAULT_NAMESPACE};

/// Creates ECDH sessions that share one configuration source
#[derive(Clone)]
pub struct EcdhProvider {
    settings: Arc<dyn Settings>,
    namespace: String,
}

impl EcdhProvider {
    /// A provider reading its options from `settings`
    pub fn new(settings: Arc<dyn Settings>) -> Self {
        Self {
            settings,
            namespace: String::from(DEFAULT_NAMESPACE),
        }
    }

    /// Read options from `namespace` instead of the default
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Groups this provider can create sessions for, NIST first
    pub fn supported_groups(&self) -> &'static [DhGroup] {
        &DhGroup::ECP_GROUPS
    }

    /// Can this provider create a session for `group`?
    pub fn supports(&self, group: DhGroup) -> bool {
        CurveRegistry::lookup(group).is_some()
    }

    /// Start an exchange on `group` with a key from the operating system RNG
    #[cfg(feature = "std")]
    pub fn create(&self, group: DhGroup) -> ApiResult<EcdhSession> {
        Ok(EcdhSession::new(group, Arc::clone(&self.settings))?.in_namespace(&self.namespace))
    }

    /// Start an exchange on `group` with a key drawn from `rng`
    pub fn create_with_rng<R>(&self, group: DhGroup, rng: &mut R) -> ApiResult<EcdhSession>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Ok(EcdhSession::with_rng(group, Arc::clone(&self.settings), rng)?.in_namespace(&self.namespace))
    }

    /// Start an exchange on a raw IANA group number
    #[cfg(feature = "std")]
    pub fn create_by_id(&self, id: u16) -> ApiResult<EcdhSession> {
        let group = DhGroup::try_from(id)?;
        if !self.supports(group) {
            return Err(ecpdh_api::Error::UnsupportedGroup { group: id });
        }
        self.create(group)
    }
}

impl Default for EcdhProvider {
    fn default() -> Self {
        Self::new(Arc::new(EcpSettings::default()))
    }
}

impl core::fmt::Debug for EcdhProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EcdhProvider")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
