//! Error types for the zero-knowledge authentication scheme.
//!
//! Only configuration problems and malformed serialized input surface as
//! errors. Verification paths collapse every failure into `false`/`None`, so
//! [`ZkError::InvalidPoint`] and [`TokenError`] are mostly seen in logs.

use curve::CurveError;
use thiserror::Error;

/// Errors produced while configuring an engine or decoding protocol values.
#[derive(Debug, Error)]
pub enum ZkError {
    /// The curve name is not in the registry.
    #[error("the curve '{0}' is invalid")]
    InvalidCurve(String),

    /// The hash or token algorithm name is not supported.
    #[error("hash algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    /// A point failed to decode or lies outside the prime-order group.
    #[error("invalid curve point")]
    InvalidPoint,

    /// Parameters or configuration values were rejected.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A signed token could not be issued or was rejected.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Compact binary encoding or decoding failed.
    #[error("binary encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl From<CurveError> for ZkError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidCurve(name) => ZkError::InvalidCurve(name),
            CurveError::InvalidPoint | CurveError::ScalarOutOfRange => ZkError::InvalidPoint,
        }
    }
}

/// Reasons a signed token is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No token secret was configured on the engine.
    #[error("no token secret configured")]
    MissingSecret,

    /// The configured token algorithm name is unknown.
    #[error("token algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    /// The token header names an algorithm other than the configured one.
    #[error("token algorithm does not match the configured one")]
    AlgorithmMismatch,

    /// The MAC key was rejected by the MAC implementation.
    #[error("invalid token key")]
    InvalidKey,

    /// The token is not three base64url segments of valid JSON.
    #[error("malformed token")]
    Malformed,

    /// The MAC does not match the header and claims.
    #[error("token signature mismatch")]
    BadSignature,

    /// The `exp` claim is in the past.
    #[error("token expired")]
    Expired,

    /// The `nbf` claim is in the future.
    #[error("token not yet valid")]
    NotYetValid,

    /// The `iss` claim names a different issuer.
    #[error("unexpected token issuer '{0}'")]
    WrongIssuer(String),
}
