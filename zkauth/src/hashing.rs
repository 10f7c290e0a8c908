//! Named digest algorithms and hashing into curve-order scalars.
//!
//! Inputs are fed to the digest back to back with no separators or length
//! prefixes. Callers are responsible for making the concatenation unambiguous:
//! every value except one must be fixed-width or length-delimited, otherwise
//! `("ab", "c")` and `("a", "bc")` hash identically. The protocol relies on
//! this only for `data || R || salt`, where `R` and the salt have fixed widths
//! under one set of parameters.

use core::fmt;
use core::str::FromStr;

use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::errors::ZkError;

/// Digest algorithms usable in [`Params`](crate::Params).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    /// Blake2b with a 64-byte digest.
    Blake2b,
    /// Blake2s with a 32-byte digest.
    Blake2s,
}

/// Canonical name and digest width of every algorithm.
const ALGORITHMS: &[(HashAlgorithm, &str, usize)] = &[
    (HashAlgorithm::Md5, "md5", 16),
    (HashAlgorithm::Sha1, "sha1", 20),
    (HashAlgorithm::Sha224, "sha224", 28),
    (HashAlgorithm::Sha256, "sha256", 32),
    (HashAlgorithm::Sha512, "sha512", 64),
    (HashAlgorithm::Sha3_224, "sha3-224", 28),
    (HashAlgorithm::Sha3_256, "sha3-256", 32),
    (HashAlgorithm::Sha3_384, "sha3-384", 48),
    (HashAlgorithm::Sha3_512, "sha3-512", 64),
    (HashAlgorithm::Blake2b, "blake2b", 64),
    (HashAlgorithm::Blake2s, "blake2s", 32),
];

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 11] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
    ];

    fn entry(&self) -> &'static (HashAlgorithm, &'static str, usize) {
        // ALGORITHMS lists every variant in declaration order.
        &ALGORITHMS[*self as usize]
    }

    /// Canonical name, e.g. `sha3-256`.
    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        self.entry().2
    }

    /// Digests the concatenation of `values`.
    pub fn digest<'a, I>(&self, values: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        match self {
            HashAlgorithm::Md5 => digest_with::<Md5, _>(values),
            HashAlgorithm::Sha1 => digest_with::<Sha1, _>(values),
            HashAlgorithm::Sha224 => digest_with::<Sha224, _>(values),
            HashAlgorithm::Sha256 => digest_with::<Sha256, _>(values),
            HashAlgorithm::Sha512 => digest_with::<Sha512, _>(values),
            HashAlgorithm::Sha3_224 => digest_with::<Sha3_224, _>(values),
            HashAlgorithm::Sha3_256 => digest_with::<Sha3_256, _>(values),
            HashAlgorithm::Sha3_384 => digest_with::<Sha3_384, _>(values),
            HashAlgorithm::Sha3_512 => digest_with::<Sha3_512, _>(values),
            HashAlgorithm::Blake2b => digest_with::<Blake2b512, _>(values),
            HashAlgorithm::Blake2s => digest_with::<Blake2s256, _>(values),
        }
    }
}

fn digest_with<'a, D, I>(values: I) -> Vec<u8>
where
    D: Digest,
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut hasher = D::new();
    for value in values {
        hasher.update(value);
    }
    hasher.finalize().to_vec()
}

impl FromStr for HashAlgorithm {
    type Err = ZkError;

    /// Accepts the canonical names plus `_` in place of `-` (`sha3_256`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        ALGORITHMS
            .iter()
            .find(|(_, name, _)| *name == normalized)
            .map(|(algorithm, _, _)| *algorithm)
            .ok_or_else(|| ZkError::UnsupportedAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Digests the concatenation of `values` with `algorithm`.
pub fn hash<'a, I>(algorithm: HashAlgorithm, values: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    algorithm.digest(values)
}

/// Interprets the digest of `values` as a big-endian integer reduced mod `order`.
pub fn hash_to_scalar<'a, I>(algorithm: HashAlgorithm, values: I, order: &BigUint) -> BigUint
where
    I: IntoIterator<Item = &'a [u8]>,
{
    BigUint::from_bytes_be(&hash(algorithm, values)) % order
}
