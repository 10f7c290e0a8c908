//! The zero-knowledge authentication engine.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use curve::Group;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

use crate::codec::{bytes_to_int, int_to_bytes, to_text};
use crate::config::ZkConfig;
use crate::errors::{TokenError, ZkError};
use crate::hashing::hash_to_scalar;
use crate::models::{Data, Params, Proof, Signature};
use crate::token::{Claims, HmacTokenSigner, TokenSigner};

#[derive(Clone, Debug)]
struct TokenIssuer {
    signer: Arc<dyn TokenSigner>,
    issuer: String,
    leeway: i64,
}

/// Schnorr identification over a named curve, made non-interactive with
/// Fiat-Shamir.
///
/// An engine is bound to one set of [`Params`]. The prover registers
/// `G * H(secret)` once as a [`Signature`]; each login attempt then sends a
/// [`Proof`] of knowledge of `H(secret)` bound to a message, typically a
/// challenge token handed out by the verifier.
///
/// # Example
///
/// ```
/// use zkauth::ZeroKnowledge;
///
/// let client = ZeroKnowledge::new("secp256k1", "sha3_256").expect("valid config");
/// let signature = client.create_signature("John").expect("signature");
///
/// // The verifier rebuilds an engine around the stored parameters.
/// let server = ZeroKnowledge::from_params(signature.params().clone());
/// let challenge = server.token();
///
/// let proof = client.sign("John", &challenge).expect("proof");
/// assert!(server.verify(&proof, &signature));
/// ```
#[derive(Clone, Debug)]
pub struct ZeroKnowledge {
    params: Params,
    group: &'static dyn Group,
    token: Option<TokenIssuer>,
}

impl ZeroKnowledge {
    /// Creates an engine with fresh random parameters.
    ///
    /// # Errors
    ///
    /// [`ZkError::InvalidCurve`] or [`ZkError::UnsupportedAlgorithm`] for unknown names.
    pub fn new(curve_name: &str, hash_alg: &str) -> Result<Self, ZkError> {
        Self::from_config(&ZkConfig::new(curve_name, hash_alg))
    }

    /// Creates an engine with fresh random parameters and optional token support.
    pub fn from_config(config: &ZkConfig) -> Result<Self, ZkError> {
        Self::from_config_with_rng(&mut rand::rng(), config)
    }

    pub fn from_config_with_rng<R: CryptoRng + ?Sized>(
        rng: &mut R,
        config: &ZkConfig,
    ) -> Result<Self, ZkError> {
        config.validate()?;
        let params = Params::random(
            rng,
            config.hash_algorithm()?,
            config.curve_name()?,
            config.salt_size,
        )?;

        let mut engine = Self::from_params(params);
        if let Some(token) = &config.token {
            let signer = HmacTokenSigner::new(token.token_algorithm()?, token.secret.as_bytes());
            engine.token = Some(TokenIssuer {
                signer: Arc::new(signer),
                issuer: token.issuer.clone(),
                leeway: i64::try_from(token.leeway_secs)
                    .map_err(|_| ZkError::InvalidParams("leeway_secs is out of range".into()))?,
            });
        }
        Ok(engine)
    }

    /// Rebuilds an engine around existing parameters, e.g. those of a stored
    /// [`Signature`].
    pub fn from_params(params: Params) -> Self {
        Self {
            group: params.curve().group(),
            params,
            token: None,
        }
    }

    /// Installs a custom token signer.
    pub fn with_token_signer(
        mut self,
        signer: Arc<dyn TokenSigner>,
        issuer: impl Into<String>,
        leeway: Duration,
    ) -> Self {
        self.token = Some(TokenIssuer {
            signer,
            issuer: issuer.into(),
            leeway: i64::try_from(leeway.as_secs()).unwrap_or(i64::MAX),
        });
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn salt(&self) -> &[u8] {
        self.params.salt()
    }

    pub fn curve(&self) -> &'static dyn Group {
        self.group
    }

    /// Random session value of `ceil(bits(p) / 8)` bytes for binding a proof
    /// to one exchange.
    pub fn token(&self) -> Vec<u8> {
        self.token_with_rng(&mut rand::rng())
    }

    pub fn token_with_rng<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Vec<u8> {
        let mut token = vec![0u8; (self.group.field_bits() as usize).div_ceil(8)];
        rng.fill_bytes(&mut token);
        token
    }

    /// Computes `H(values || salt) mod n`.
    ///
    /// `None` entries are dropped before hashing, so `[None, Some(x)]` and
    /// `[Some(x)]` hash identically, and so do an absent value and an empty
    /// one. Peers must apply the same rule to interoperate. See
    /// [`hashing`](crate::hashing) for the concatenation caveat.
    pub fn hash(&self, values: &[Option<&[u8]>]) -> BigUint {
        let inputs = values
            .iter()
            .flatten()
            .copied()
            .chain(core::iter::once(self.params.salt()));
        hash_to_scalar(self.params.algorithm(), inputs, self.group.order())
    }

    /// Derives the public commitment `G * hash(secret)`.
    ///
    /// Deterministic for a given secret and parameters.
    pub fn create_signature(&self, secret: impl AsRef<[u8]>) -> Result<Signature, ZkError> {
        let key = self.hash(&[Some(secret.as_ref())]);
        let point = self.group.mul_generator(&key)?;
        Ok(Signature::new(self.params.clone(), point))
    }

    /// Proves knowledge of `secret`, bound to the optional `data`.
    pub fn create_proof(
        &self,
        secret: impl AsRef<[u8]>,
        data: Option<&[u8]>,
    ) -> Result<Proof, ZkError> {
        self.create_proof_with_rng(&mut rand::rng(), secret, data)
    }

    /// Proves knowledge of `secret` using nonces from `rng`.
    ///
    /// With `key = hash(secret)` and a fresh uniform nonce `r`:
    /// `R = G * r`, `c = hash(data, R)` and `m = r - c * key mod n`.
    /// The nonce must never repeat for the same secret, so `rng` has to be a
    /// cryptographically secure generator that is never reseeded to a past state.
    pub fn create_proof_with_rng<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        secret: impl AsRef<[u8]>,
        data: Option<&[u8]>,
    ) -> Result<Proof, ZkError> {
        let n = self.group.order();
        let key = self.hash(&[Some(secret.as_ref())]);
        let r = random_below(rng, n);
        let commitment = self.group.mul_generator(&r)?;
        let c = self.hash(&[data, Some(commitment.as_slice())]);
        let m = (r + n - (&c * &key) % n) % n;

        Ok(Proof::new(
            self.params.clone(),
            int_to_bytes(&c),
            int_to_bytes(&m),
        ))
    }

    /// Wraps a proof over `data` together with `data` itself.
    ///
    /// Non-UTF-8 data is carried as base64 text (see [`to_text`]).
    pub fn sign(&self, secret: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> Result<Data, ZkError> {
        self.sign_with_rng(&mut rand::rng(), secret, data)
    }

    pub fn sign_with_rng<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        secret: impl AsRef<[u8]>,
        data: impl AsRef<[u8]>,
    ) -> Result<Data, ZkError> {
        let data = to_text(data);
        let proof = self.create_proof_with_rng(rng, secret, Some(data.as_bytes()))?;
        Ok(Data::new(data, proof))
    }

    /// Checks `envelope.proof` against `signature` for the message `envelope.data`.
    ///
    /// Recomputes `P = G * m + S * c` and accepts iff `c == hash(data, P)`.
    /// `c` and `m` must be reduced and minimally encoded, so each proof has a
    /// single accepted byte form. Every failure yields `false`.
    pub fn verify(&self, envelope: &Data, signature: &Signature) -> bool {
        let proof = envelope.proof();
        if proof.params() != &self.params || signature.params() != &self.params {
            debug!("proof or signature parameters differ from the engine's");
            return false;
        }

        let width = self.group.scalar_len();
        if proof.c().len() > width || proof.m().len() > width {
            debug!("proof scalars are wider than the group order");
            return false;
        }
        let n = self.group.order();
        let c = bytes_to_int(proof.c());
        let m = bytes_to_int(proof.m());
        if &c >= n || &m >= n {
            debug!("proof scalars are not reduced");
            return false;
        }
        if int_to_bytes(&c) != proof.c() || int_to_bytes(&m) != proof.m() {
            debug!("proof scalars are not minimally encoded");
            return false;
        }

        if let Err(err) = self.group.validate_point(signature.signature()) {
            debug!(%err, "signature point rejected");
            return false;
        }
        let point = match self
            .group
            .double_scalar_mul_basepoint(&m, &c, signature.signature())
        {
            Ok(point) => point,
            Err(err) => {
                debug!(%err, "could not recompute the commitment");
                return false;
            }
        };

        c == self.hash(&[Some(envelope.data().as_bytes()), Some(point.as_slice())])
    }

    /// Whether `signature` holds a valid point of its curve's prime-order group.
    pub fn signature_is_valid(signature: &Signature) -> bool {
        signature
            .params()
            .curve()
            .group()
            .is_valid_point(signature.signature())
    }

    /// Issues a token carrying `signature` that is valid for `expiry`.
    ///
    /// # Errors
    ///
    /// [`TokenError::MissingSecret`] if the engine has no token configuration.
    pub fn generate_jwt(&self, signature: &Signature, expiry: Duration) -> Result<String, ZkError> {
        let issuer = self.token.as_ref().ok_or(TokenError::MissingSecret)?;
        let lifetime = i64::try_from(expiry.as_secs())
            .map_err(|_| ZkError::InvalidParams("token expiry is out of range".into()))?;
        let claims = Claims::new(signature, &issuer.issuer, Utc::now().timestamp(), lifetime)?;
        issuer.signer.sign(&claims)
    }

    /// Authenticates a token and returns its claims.
    ///
    /// Forged, expired, not-yet-valid or foreign tokens yield `None`; the reason
    /// is logged.
    pub fn verify_jwt(&self, token: &str) -> Option<Claims> {
        self.verify_jwt_at(token, Utc::now().timestamp())
    }

    pub(crate) fn verify_jwt_at(&self, token: &str, now: i64) -> Option<Claims> {
        let Some(issuer) = &self.token else {
            warn!("token presented to an engine without a token secret");
            return None;
        };

        let result = issuer
            .signer
            .verify(token)
            .and_then(|claims| claims.validate(now, &issuer.issuer, issuer.leeway).map(|()| claims));
        match result {
            Ok(claims) => Some(claims),
            Err(err) => {
                warn!(%err, algorithm = issuer.signer.algorithm(), "token rejected");
                None
            }
        }
    }

    /// Verifies a login whose message is a token issued by [`generate_jwt`](Self::generate_jwt).
    ///
    /// The proof is checked against the signature carried in the token, under
    /// that signature's parameters.
    pub fn login(&self, login_data: &Data) -> bool {
        let Some(claims) = self.verify_jwt(login_data.data()) else {
            return false;
        };
        let signature = match claims.signature() {
            Ok(signature) => signature,
            Err(err) => {
                warn!(%err, "token carries an unreadable signature");
                return false;
            }
        };
        Self::from_params(signature.params().clone()).verify(login_data, &signature)
    }
}

/// Uniform sample from `[0, n)` by rejection sampling over `bits(n)`-bit strings.
fn random_below<R: CryptoRng + ?Sized>(rng: &mut R, n: &BigUint) -> BigUint {
    let bits = n.bits() as usize;
    let mut buf = vec![0u8; bits.div_ceil(8)];
    let mask = 0xffu8 >> (buf.len() * 8 - bits);
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < n {
            return candidate;
        }
    }
}
