//! Error types for the named-curve registry.

use thiserror::Error;

/// Errors raised while resolving curves or decoding group elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The requested curve name is not in the registry.
    #[error("the curve '{0}' is invalid")]
    InvalidCurve(String),

    /// The bytes do not encode a point of the prime-order group.
    ///
    /// This covers wrong lengths, non-canonical encodings, points that are not
    /// on the curve, and (for Ed25519) points outside the prime-order subgroup.
    #[error("invalid curve point encoding")]
    InvalidPoint,

    /// A scalar was not reduced modulo the group order.
    #[error("scalar is not below the group order")]
    ScalarOutOfRange,
}
