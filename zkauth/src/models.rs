//! Protocol value types and their serialized forms.
//!
//! Every type is immutable once built and round-trips losslessly through
//! [`to_json`](Params::to_json) / [`from_json`](Params::from_json). Byte fields
//! are base64 in JSON.

use core::fmt;

use curve::CurveName;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::codec::base64_bytes;
use crate::errors::ZkError;
use crate::hashing::HashAlgorithm;

/// Parameters shared by prover and verifier: hash algorithm, curve and salt.
///
/// A [`Signature`] only verifies under the exact parameters it was created with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ParamsRepr")]
pub struct Params {
    algorithm: HashAlgorithm,
    curve: CurveName,
    #[serde(with = "base64_bytes")]
    salt: Vec<u8>,
}

#[derive(Deserialize)]
struct ParamsRepr {
    algorithm: HashAlgorithm,
    curve: CurveName,
    #[serde(with = "base64_bytes")]
    salt: Vec<u8>,
}

impl TryFrom<ParamsRepr> for Params {
    type Error = ZkError;

    fn try_from(repr: ParamsRepr) -> Result<Self, Self::Error> {
        Params::new(repr.algorithm, repr.curve, repr.salt)
    }
}

impl Params {
    /// Builds parameters from an existing salt.
    ///
    /// # Errors
    ///
    /// Returns [`ZkError::InvalidParams`] if `salt` is empty.
    pub fn new(algorithm: HashAlgorithm, curve: CurveName, salt: Vec<u8>) -> Result<Self, ZkError> {
        if salt.is_empty() {
            return Err(ZkError::InvalidParams("salt must not be empty".into()));
        }
        Ok(Self {
            algorithm,
            curve,
            salt,
        })
    }

    /// Builds parameters with `salt_size` fresh random bytes.
    pub fn random<R: CryptoRng + ?Sized>(
        rng: &mut R,
        algorithm: HashAlgorithm,
        curve: CurveName,
        salt_size: usize,
    ) -> Result<Self, ZkError> {
        let mut salt = vec![0u8; salt_size];
        rng.fill_bytes(&mut salt);
        Self::new(algorithm, curve, salt)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn curve(&self) -> CurveName {
        self.curve
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

/// Public commitment to a secret: `G * H(secret || salt)`.
///
/// This is what a verifier stores at registration time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    params: Params,
    #[serde(with = "base64_bytes")]
    signature: Vec<u8>,
}

impl Signature {
    pub fn new(params: Params, signature: Vec<u8>) -> Self {
        Self { params, signature }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Encoded curve point.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

/// Non-interactive proof of knowledge of the secret behind a [`Signature`].
///
/// `c` is the Fiat-Shamir challenge and `m` the response, both minimal
/// big-endian integers below the curve order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof {
    params: Params,
    #[serde(with = "base64_bytes")]
    c: Vec<u8>,
    #[serde(with = "base64_bytes")]
    m: Vec<u8>,
}

impl Proof {
    pub fn new(params: Params, c: Vec<u8>, m: Vec<u8>) -> Self {
        Self { params, c, m }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn c(&self) -> &[u8] {
        &self.c
    }

    pub fn m(&self) -> &[u8] {
        &self.m
    }
}

/// A message together with a proof bound to it; sent once, prover to verifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Data {
    data: String,
    proof: Proof,
}

impl Data {
    pub fn new(data: impl Into<String>, proof: Proof) -> Self {
        Self {
            data: data.into(),
            proof,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn proof(&self) -> &Proof {
        &self.proof
    }
}

macro_rules! impl_serialized_forms {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $model {
                /// Compact JSON form.
                pub fn to_json(&self) -> Result<String, ZkError> {
                    Ok(serde_json::to_string(self)?)
                }

                /// # Errors
                ///
                /// Returns [`ZkError::Serialization`] for malformed JSON, unknown
                /// algorithm or curve names, bad base64, or an empty salt.
                pub fn from_json(json: &str) -> Result<Self, ZkError> {
                    Ok(serde_json::from_str(json)?)
                }

                /// Compact binary form for storage.
                pub fn to_bytes(&self) -> Result<Vec<u8>, ZkError> {
                    Ok(bincode::serialize(self)?)
                }

                pub fn from_bytes(bytes: &[u8]) -> Result<Self, ZkError> {
                    Ok(bincode::deserialize(bytes)?)
                }
            }

            impl fmt::Display for $model {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

impl_serialized_forms!(Params, Signature, Proof, Data);
