//! Diffie-Hellman group identifiers
//!
//! Group numbers follow the IANA "Transform Type 4 - Diffie-Hellman Group
//! Transform IDs" registry used by IKEv2. Only the ECP groups are served by
//! this library; the remaining identifiers exist so that a negotiated but
//! unsupported group can be named and rejected cleanly.

use core::convert::TryFrom;
use core::fmt;

use crate::error::{validate, Error, Result};

/// A Diffie-Hellman group as negotiated by IKE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum DhGroup {
    /// 2048-bit MODP group (RFC 3526)
    Modp2048 = 14,
    /// 3072-bit MODP group (RFC 3526)
    Modp3072 = 15,
    /// NIST P-256 (RFC 5903)
    Ecp256 = 19,
    /// NIST P-384 (RFC 5903)
    Ecp384 = 20,
    /// NIST P-521 (RFC 5903)
    Ecp521 = 21,
    /// NIST P-192 (RFC 5114)
    Ecp192 = 25,
    /// NIST P-224 (RFC 5114)
    Ecp224 = 26,
    /// brainpoolP224r1 (RFC 6954)
    Ecp224Bp = 27,
    /// brainpoolP256r1 (RFC 6954)
    Ecp256Bp = 28,
    /// brainpoolP384r1 (RFC 6954)
    Ecp384Bp = 29,
    /// brainpoolP512r1 (RFC 6954)
    Ecp512Bp = 30,
    /// Curve25519 (RFC 8031)
    Curve25519 = 31,
    /// Curve448 (RFC 8031)
    Curve448 = 32,
}

impl DhGroup {
    /// All ECP groups, NIST first, then Brainpool
    pub const ECP_GROUPS: [DhGroup; 9] = [
        DhGroup::Ecp192,
        DhGroup::Ecp224,
        DhGroup::Ecp256,
        DhGroup::Ecp384,
        DhGroup::Ecp521,
        DhGroup::Ecp224Bp,
        DhGroup::Ecp256Bp,
        DhGroup::Ecp384Bp,
        DhGroup::Ecp512Bp,
    ];

    /// IANA transform identifier
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Conventional name of the group
    pub const fn name(self) -> &'static str {
        match self {
            DhGroup::Modp2048 => "MODP_2048",
            DhGroup::Modp3072 => "MODP_3072",
            DhGroup::Ecp256 => "ECP_256",
            DhGroup::Ecp384 => "ECP_384",
            DhGroup::Ecp521 => "ECP_521",
            DhGroup::Ecp192 => "ECP_192",
            DhGroup::Ecp224 => "ECP_224",
            DhGroup::Ecp224Bp => "ECP_224_BP",
            DhGroup::Ecp256Bp => "ECP_256_BP",
            DhGroup::Ecp384Bp => "ECP_384_BP",
            DhGroup::Ecp512Bp => "ECP_512_BP",
            DhGroup::Curve25519 => "CURVE_25519",
            DhGroup::Curve448 => "CURVE_448",
        }
    }

    /// Whether this is a prime-field Weierstrass (ECP) group
    pub const fn is_ecp(self) -> bool {
        self.field_element_len().is_some()
    }

    /// Whether this is one of the Brainpool ECP groups
    pub const fn is_brainpool(self) -> bool {
        matches!(
            self,
            DhGroup::Ecp224Bp | DhGroup::Ecp256Bp | DhGroup::Ecp384Bp | DhGroup::Ecp512Bp
        )
    }

    /// Byte length of one field element, for ECP groups
    pub const fn field_element_len(self) -> Option<usize> {
        match self {
            DhGroup::Ecp192 => Some(24),
            DhGroup::Ecp224 | DhGroup::Ecp224Bp => Some(28),
            DhGroup::Ecp256 | DhGroup::Ecp256Bp => Some(32),
            DhGroup::Ecp384 | DhGroup::Ecp384Bp => Some(48),
            DhGroup::Ecp521 => Some(66),
            DhGroup::Ecp512Bp => Some(64),
            _ => None,
        }
    }

    /// Byte length of a public value (`x‖y`), for ECP groups
    pub const fn public_value_len(self) -> Option<usize> {
        match self.field_element_len() {
            Some(len) => Some(2 * len),
            None => None,
        }
    }

    /// Check that a received public value has the length this group requires
    ///
    /// This is the cheap pre-check done before any point decoding.
    pub fn verify_value(self, value: &[u8]) -> Result<()> {
        match self.public_value_len() {
            Some(expected) => validate::length("public value", value.len(), expected),
            None => Err(Error::UnsupportedGroup { group: self.id() }),
        }
    }
}

impl TryFrom<u16> for DhGroup {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        let group = match value {
            14 => DhGroup::Modp2048,
            15 => DhGroup::Modp3072,
            19 => DhGroup::Ecp256,
            20 => DhGroup::Ecp384,
            21 => DhGroup::Ecp521,
            25 => DhGroup::Ecp192,
            26 => DhGroup::Ecp224,
            27 => DhGroup::Ecp224Bp,
            28 => DhGroup::Ecp256Bp,
            29 => DhGroup::Ecp384Bp,
            30 => DhGroup::Ecp512Bp,
            31 => DhGroup::Curve25519,
            32 => DhGroup::Curve448,
            _ => return Err(Error::UnsupportedGroup { group: value }),
        };
        Ok(group)
    }
}

impl From<DhGroup> for u16 {
    fn from(group: DhGroup) -> Self {
        group.id()
    }
}

impl fmt::Display for DhGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_iana_round_trip() {
        for group in DhGroup::ECP_GROUPS.iter() {
            assert_eq!(DhGroup::try_from(group.id()).unwrap(), *group);
        }
        assert_eq!(DhGroup::try_from(19).unwrap(), DhGroup::Ecp256);
        assert_eq!(DhGroup::try_from(30).unwrap(), DhGroup::Ecp512Bp);
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        assert_eq!(
            DhGroup::try_from(0),
            Err(Error::UnsupportedGroup { group: 0 })
        );
        assert!(DhGroup::try_from(0xFFFF).is_err());
    }

    #[test]
    fn test_ecp_classification() {
        assert!(DhGroup::ECP_GROUPS.iter().all(|g| g.is_ecp()));
        assert!(!DhGroup::Modp2048.is_ecp());
        assert!(!DhGroup::Curve25519.is_ecp());
        assert!(DhGroup::Ecp384Bp.is_brainpool());
        assert!(!DhGroup::Ecp384.is_brainpool());
    }

    #[test]
    fn test_public_value_lengths() {
        assert_eq!(DhGroup::Ecp192.public_value_len(), Some(48));
        assert_eq!(DhGroup::Ecp521.public_value_len(), Some(132));
        assert_eq!(DhGroup::Ecp512Bp.public_value_len(), Some(128));
        assert_eq!(DhGroup::Curve448.public_value_len(), None);
    }

    #[test]
    fn test_verify_value() {
        assert!(DhGroup::Ecp256.verify_value(&[0u8; 64]).is_ok());
        assert_eq!(
            DhGroup::Ecp256.verify_value(&[0u8; 65]).unwrap_err().kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            DhGroup::Modp2048.verify_value(&[0u8; 256]).unwrap_err().kind(),
            ErrorKind::UnsupportedGroup
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(DhGroup::Ecp256Bp.name(), "ECP_256_BP");
        assert_eq!(DhGroup::Ecp521.to_string(), "ECP_521");
    }
}
