//! Name-based lookup of the supported curves.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::edwards::Ed25519;
use crate::errors::CurveError;
use crate::group::Group;
use crate::sec1::{NistP256, NistP384, Secp256k1};

/// Standard curve names understood by the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveName {
    Secp256k1,
    P256,
    P384,
    Ed25519,
}

/// Accepted spellings for each curve.
const NAMES: &[(CurveName, &[&str])] = &[
    (CurveName::Secp256k1, &["secp256k1"]),
    (CurveName::P256, &["P-256", "secp256r1", "prime256v1", "p256"]),
    (CurveName::P384, &["P-384", "secp384r1", "p384"]),
    (CurveName::Ed25519, &["Ed25519", "edwards25519"]),
];

impl CurveName {
    pub const ALL: [CurveName; 4] = [
        CurveName::Secp256k1,
        CurveName::P256,
        CurveName::P384,
        CurveName::Ed25519,
    ];

    /// Canonical spelling, as written into serialized parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveName::Secp256k1 => "secp256k1",
            CurveName::P256 => "P-256",
            CurveName::P384 => "P-384",
            CurveName::Ed25519 => "Ed25519",
        }
    }

    /// Resolves the group context for this curve.
    ///
    /// Contexts are built once per process and shared afterwards.
    pub fn group(self) -> &'static dyn Group {
        static SECP256K1: OnceLock<Secp256k1> = OnceLock::new();
        static P256: OnceLock<NistP256> = OnceLock::new();
        static P384: OnceLock<NistP384> = OnceLock::new();
        static ED25519: OnceLock<Ed25519> = OnceLock::new();

        match self {
            CurveName::Secp256k1 => SECP256K1.get_or_init(Secp256k1::new) as &dyn Group,
            CurveName::P256 => P256.get_or_init(NistP256::new) as &dyn Group,
            CurveName::P384 => P384.get_or_init(NistP384::new) as &dyn Group,
            CurveName::Ed25519 => ED25519.get_or_init(Ed25519::new) as &dyn Group,
        }
    }
}

impl FromStr for CurveName {
    type Err = CurveError;

    /// Case-insensitive match against canonical names and aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(s)))
            .map(|(curve, _)| *curve)
            .ok_or_else(|| CurveError::InvalidCurve(s.to_owned()))
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CurveName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurveName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Looks up a curve context by name.
///
/// # Errors
///
/// Returns [`CurveError::InvalidCurve`] for names outside the registry.
pub fn curve_by_name(name: &str) -> Result<&'static dyn Group, CurveError> {
    name.parse::<CurveName>().map(CurveName::group)
}
