//! Zero-knowledge password authentication with Schnorr proofs over named curves.
//!
//! A prover shows that it knows the secret behind a registered public
//! commitment without revealing the secret. The scheme is Schnorr
//! identification made non-interactive with Fiat-Shamir:
//!
//! - Registration: `key = H(secret || salt) mod n`, the verifier stores the
//!   [`Signature`] `S = G * key`.
//! - Login: the prover picks a fresh nonce `r`, computes `R = G * r`,
//!   `c = H(data || R || salt)` and `m = r - c * key mod n`, and sends
//!   [`Data`] `{ data, proof: { c, m } }`.
//! - Verification: `P = G * m + S * c` equals `R` for an honest proof, so the
//!   verifier accepts iff `c == H(data || P || salt)`.
//!
//! The curve (`secp256k1`, `P-256`, `P-384`, `Ed25519`) and the hash algorithm
//! are chosen per [`Params`], together with a random salt. Optionally a
//! signature can be wrapped in a signed, short-lived token so that a stateless
//! server can hand it out as the login challenge.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use zkauth::{TokenConfig, ZeroKnowledge, ZkConfig};
//!
//! // Server side, holding the token secret.
//! let server = ZeroKnowledge::from_config(
//!     &ZkConfig::new("secp256k1", "sha3-256").with_token(TokenConfig::new("server-secret")),
//! )
//! .expect("valid config");
//!
//! // Client registration.
//! let client = ZeroKnowledge::new("secp256k1", "sha3-256").expect("valid config");
//! let signature = client.create_signature("correct horse").expect("signature");
//!
//! // The server issues a challenge token wrapping the stored signature...
//! let challenge = server
//!     .generate_jwt(&signature, Duration::from_secs(10))
//!     .expect("token");
//!
//! // ...which the client proves knowledge over.
//! let login = client.sign("correct horse", &challenge).expect("proof");
//! assert!(server.login(&login));
//!
//! let forged = client.sign("wrong password", &challenge).expect("proof");
//! assert!(!server.login(&forged));
//! ```
//!
//! # Security Considerations
//!
//! - Proof nonces come from a cryptographically secure generator on every
//!   call; reusing a nonce for two proofs under one secret reveals the key
//! - Hash inputs are concatenated raw, see [`hashing`] for the caller's
//!   obligation
//! - Verification never reports why it failed; reasons are only logged at
//!   `debug`/`warn` level through `tracing`

pub mod codec;
mod config;
mod constants;
mod engine;
mod errors;
pub mod hashing;
mod models;
pub mod token;


pub use config::{TokenConfig, ZkConfig};
pub use constants::{
    DEFAULT_CURVE, DEFAULT_HASH_ALGORITHM, DEFAULT_ISSUER, DEFAULT_SALT_SIZE,
    DEFAULT_TOKEN_ALGORITHM, DEFAULT_TOKEN_EXPIRY,
};
pub use curve::{CurveName, Group};
pub use engine::ZeroKnowledge;
pub use errors::{TokenError, ZkError};
pub use hashing::HashAlgorithm;
pub use models::{Data, Params, Proof, Signature};
pub use token::{Claims, HmacTokenSigner, TokenAlgorithm, TokenSigner};
