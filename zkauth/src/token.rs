//! Signed, time-bounded tokens carrying a [`Signature`] for stateless login.
//!
//! Tokens use the compact JWS layout `header.claims.mac`, each segment
//! base64url without padding. The MAC is HMAC over one of the digests in
//! [`TokenAlgorithm`]; any other standards-compliant signer can be plugged in
//! through [`TokenSigner`].

use core::fmt;
use core::str::FromStr;

use blake2::{Blake2b512, Blake2s256};
use hmac::digest::core_api::BlockSizeUser;
use hmac::{Mac, SimpleHmac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::codec::{b64url_decode, b64url_encode};
use crate::errors::{TokenError, ZkError};
use crate::models::Signature;

/// MAC algorithms accepted in the token header.
///
/// `Hs3_*` and `Hb2*` are HMAC over SHA-3 and BLAKE2 (`Hb2s` is Blake2s-256,
/// `Hb2b` is Blake2b-512).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenAlgorithm {
    Hs256,
    Hs512,
    Hs3_224,
    Hs3_256,
    Hs3_384,
    Hs3_512,
    Hb2s,
    Hb2b,
}

/// Header name of every token algorithm.
const TOKEN_ALGORITHMS: &[(TokenAlgorithm, &str)] = &[
    (TokenAlgorithm::Hs256, "HS256"),
    (TokenAlgorithm::Hs512, "HS512"),
    (TokenAlgorithm::Hs3_224, "HS3_224"),
    (TokenAlgorithm::Hs3_256, "HS3_256"),
    (TokenAlgorithm::Hs3_384, "HS3_384"),
    (TokenAlgorithm::Hs3_512, "HS3_512"),
    (TokenAlgorithm::Hb2s, "HB2S"),
    (TokenAlgorithm::Hb2b, "HB2B"),
];

impl TokenAlgorithm {
    /// Name written to the `alg` header field.
    pub fn as_str(&self) -> &'static str {
        // TOKEN_ALGORITHMS lists every variant in declaration order.
        TOKEN_ALGORITHMS[*self as usize].1
    }

    fn tag(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, TokenError> {
        match self {
            TokenAlgorithm::Hs256 => hmac_tag::<Sha256>(key, message),
            TokenAlgorithm::Hs512 => hmac_tag::<Sha512>(key, message),
            TokenAlgorithm::Hs3_224 => hmac_tag::<Sha3_224>(key, message),
            TokenAlgorithm::Hs3_256 => hmac_tag::<Sha3_256>(key, message),
            TokenAlgorithm::Hs3_384 => hmac_tag::<Sha3_384>(key, message),
            TokenAlgorithm::Hs3_512 => hmac_tag::<Sha3_512>(key, message),
            TokenAlgorithm::Hb2s => hmac_tag::<Blake2s256>(key, message),
            TokenAlgorithm::Hb2b => hmac_tag::<Blake2b512>(key, message),
        }
    }

    fn check(&self, key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool, TokenError> {
        match self {
            TokenAlgorithm::Hs256 => hmac_check::<Sha256>(key, message, tag),
            TokenAlgorithm::Hs512 => hmac_check::<Sha512>(key, message, tag),
            TokenAlgorithm::Hs3_224 => hmac_check::<Sha3_224>(key, message, tag),
            TokenAlgorithm::Hs3_256 => hmac_check::<Sha3_256>(key, message, tag),
            TokenAlgorithm::Hs3_384 => hmac_check::<Sha3_384>(key, message, tag),
            TokenAlgorithm::Hs3_512 => hmac_check::<Sha3_512>(key, message, tag),
            TokenAlgorithm::Hb2s => hmac_check::<Blake2s256>(key, message, tag),
            TokenAlgorithm::Hb2b => hmac_check::<Blake2b512>(key, message, tag),
        }
    }
}

fn hmac_with<D: Digest + BlockSizeUser>(key: &[u8], message: &[u8]) -> Result<SimpleHmac<D>, TokenError> {
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key).map_err(|_| TokenError::InvalidKey)?;
    mac.update(message);
    Ok(mac)
}

fn hmac_tag<D: Digest + BlockSizeUser>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, TokenError> {
    Ok(hmac_with::<D>(key, message)?.finalize().into_bytes().to_vec())
}

fn hmac_check<D: Digest + BlockSizeUser>(key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool, TokenError> {
    Ok(hmac_with::<D>(key, message)?.verify_slice(tag).is_ok())
}

impl FromStr for TokenAlgorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOKEN_ALGORITHMS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(algorithm, _)| *algorithm)
            .ok_or_else(|| TokenError::UnsupportedAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for TokenAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried by a login token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// JSON form of the wrapped [`Signature`].
    pub signature: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Not-before, seconds since the Unix epoch.
    pub nbf: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    pub iss: String,
}

impl Claims {
    pub fn new(signature: &Signature, issuer: &str, now: i64, lifetime: i64) -> Result<Self, ZkError> {
        Ok(Self {
            signature: signature.to_json()?,
            iat: now,
            nbf: now,
            exp: now.saturating_add(lifetime),
            iss: issuer.to_owned(),
        })
    }

    /// Decodes the wrapped signature.
    pub fn signature(&self) -> Result<Signature, ZkError> {
        Signature::from_json(&self.signature)
    }

    /// Checks issuer and validity window at time `now`, allowing `leeway`
    /// seconds of clock skew on both edges.
    ///
    /// Timestamps are whole seconds, so a token stays valid through its `exp`
    /// second. The leeway is capped at the token lifetime.
    pub fn validate(&self, now: i64, issuer: &str, leeway: i64) -> Result<(), TokenError> {
        let leeway = leeway.clamp(0, self.exp.saturating_sub(self.nbf).max(0));
        if self.iss != issuer {
            return Err(TokenError::WrongIssuer(self.iss.clone()));
        }
        if now.saturating_add(leeway) < self.nbf {
            return Err(TokenError::NotYetValid);
        }
        if now.saturating_sub(leeway) > self.exp {
            return Err(TokenError::Expired);
        }
        Ok(())
    }
}

/// Issues and authenticates tokens.
///
/// `verify` only checks the algorithm and MAC; the validity window is checked
/// separately through [`Claims::validate`].
pub trait TokenSigner: Send + Sync + fmt::Debug {
    /// Header name of the algorithm this signer produces and accepts.
    fn algorithm(&self) -> &str;

    fn sign(&self, claims: &Claims) -> Result<String, ZkError>;

    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

/// HMAC token signer keyed by a shared secret.
#[derive(Clone)]
pub struct HmacTokenSigner {
    algorithm: TokenAlgorithm,
    secret: Vec<u8>,
}

impl HmacTokenSigner {
    pub fn new(algorithm: TokenAlgorithm, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for HmacTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacTokenSigner")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl TokenSigner for HmacTokenSigner {
    fn algorithm(&self) -> &str {
        self.algorithm.as_str()
    }

    fn sign(&self, claims: &Claims) -> Result<String, ZkError> {
        let header = Header {
            alg: self.algorithm.as_str().to_owned(),
            typ: Some("JWT".to_owned()),
        };
        let signing_input = format!(
            "{}.{}",
            b64url_encode(serde_json::to_vec(&header)?),
            b64url_encode(serde_json::to_vec(claims)?)
        );
        let tag = self.algorithm.tag(&self.secret, signing_input.as_bytes())?;
        Ok(format!("{signing_input}.{}", b64url_encode(tag)))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut segments = token.split('.');
        let (Some(header), Some(claims), Some(tag), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let decoded: Header = b64url_decode(header)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)?;
        // Only the configured algorithm is accepted, whatever the header claims.
        if decoded.alg != self.algorithm() {
            return Err(TokenError::AlgorithmMismatch);
        }

        let tag = b64url_decode(tag).map_err(|_| TokenError::Malformed)?;
        let signing_input = &token[..header.len() + 1 + claims.len()];
        if !self.algorithm.check(&self.secret, signing_input.as_bytes(), &tag)? {
            return Err(TokenError::BadSignature);
        }

        b64url_decode(claims)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Malformed)
    }
}
