use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::registry::CurveName;

/// A prime-order group on a named curve, seen through its canonical encodings.
///
/// Scalars are unsigned big integers that must already be reduced modulo
/// [`Group::order`]; points travel as fixed-width compressed encodings of
/// [`Group::point_len`] bytes. Implementations delegate all arithmetic to a
/// vetted curve crate.
pub trait Group: Send + Sync + core::fmt::Debug {
    fn name(&self) -> CurveName;

    /// Order `n` of the subgroup generated by the base point.
    fn order(&self) -> &BigUint;

    /// Bit length of the base field prime `p`.
    fn field_bits(&self) -> u64;

    /// Width in bytes of an encoded point.
    fn point_len(&self) -> usize;

    /// Encoded base point `G`.
    fn generator(&self) -> Vec<u8>;

    /// Computes `G * scalar`.
    fn mul_generator(&self, scalar: &BigUint) -> Result<Vec<u8>, CurveError>;

    /// Computes `point * scalar`.
    fn scalar_mul(&self, point: &[u8], scalar: &BigUint) -> Result<Vec<u8>, CurveError>;

    /// Computes `a + b`.
    fn add(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>, CurveError>;

    /// Computes `G * a + point * b`.
    ///
    /// The result may be the identity, whose encoding is then whatever the
    /// backing crate produces for it; it is only ever hashed, never decoded.
    fn double_scalar_mul_basepoint(
        &self,
        a: &BigUint,
        b: &BigUint,
        point: &[u8],
    ) -> Result<Vec<u8>, CurveError>;

    /// Checks that `bytes` is a canonical encoding of a non-identity element of
    /// the prime-order group.
    fn validate_point(&self, bytes: &[u8]) -> Result<(), CurveError>;

    #[inline]
    fn is_valid_point(&self, bytes: &[u8]) -> bool {
        self.validate_point(bytes).is_ok()
    }

    /// Number of bytes needed to hold any value below the group order.
    #[inline]
    fn scalar_len(&self) -> usize {
        (self.order().bits() as usize).div_ceil(8)
    }
}

/// Left-pads the big-endian encoding of `value` to `width` bytes.
///
/// Returns `None` when `value` does not fit.
pub(crate) fn to_fixed_be(value: &BigUint, width: usize) -> Option<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if bytes.len() > width {
        return None;
    }
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(&bytes);
    Some(out)
}

/// Rejects scalars that are not reduced modulo `order`.
#[inline]
pub(crate) fn check_reduced(scalar: &BigUint, order: &BigUint) -> Result<(), CurveError> {
    if scalar < order {
        Ok(())
    } else {
        Err(CurveError::ScalarOutOfRange)
    }
}
