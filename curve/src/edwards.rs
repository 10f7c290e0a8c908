//! The twisted Edwards form of Curve25519, backed by `curve25519-dalek`.
//!
//! The full curve group has cofactor 8; only points in the prime-order
//! subgroup generated by the Ed25519 base point are accepted.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;
use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::group::{check_reduced, Group};
use crate::registry::CurveName;

const POINT_LEN: usize = 32;

/// Edwards25519 with the Ed25519 base point.
#[derive(Debug)]
pub struct Ed25519 {
    order: BigUint,
}

impl Ed25519 {
    pub(crate) fn new() -> Self {
        // l = 2^252 + 27742317777372353535851937790883648493
        let order = (BigUint::from(1u8) << 252u32)
            + BigUint::from(27_742_317_777_372_353_535_851_937_790_883_648_493u128);
        Self { order }
    }

    fn scalar(&self, value: &BigUint) -> Result<Scalar, CurveError> {
        check_reduced(value, &self.order)?;
        let mut le = value.to_bytes_le();
        le.resize(32, 0);
        let bytes: [u8; 32] = le.try_into().map_err(|_| CurveError::ScalarOutOfRange)?;
        Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes)).ok_or(CurveError::ScalarOutOfRange)
    }

    fn decode(bytes: &[u8]) -> Result<EdwardsPoint, CurveError> {
        let compressed = CompressedEdwardsY::from_slice(bytes).map_err(|_| CurveError::InvalidPoint)?;
        let point = compressed.decompress().ok_or(CurveError::InvalidPoint)?;
        // Decompression tolerates y >= p; insist on the canonical encoding.
        if point.compress() != compressed {
            return Err(CurveError::InvalidPoint);
        }
        Ok(point)
    }

    fn encode(point: &EdwardsPoint) -> Vec<u8> {
        point.compress().to_bytes().to_vec()
    }
}

impl Group for Ed25519 {
    fn name(&self) -> CurveName {
        CurveName::Ed25519
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn field_bits(&self) -> u64 {
        255
    }

    fn point_len(&self) -> usize {
        POINT_LEN
    }

    fn generator(&self) -> Vec<u8> {
        Self::encode(&EdwardsPoint::mul_base(&Scalar::ONE))
    }

    fn mul_generator(&self, scalar: &BigUint) -> Result<Vec<u8>, CurveError> {
        let k = self.scalar(scalar)?;
        Ok(Self::encode(&EdwardsPoint::mul_base(&k)))
    }

    fn scalar_mul(&self, point: &[u8], scalar: &BigUint) -> Result<Vec<u8>, CurveError> {
        let p = Self::decode(point)?;
        let k = self.scalar(scalar)?;
        Ok(Self::encode(&(p * k)))
    }

    fn add(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>, CurveError> {
        let a = Self::decode(a)?;
        let b = Self::decode(b)?;
        Ok(Self::encode(&(a + b)))
    }

    fn double_scalar_mul_basepoint(
        &self,
        a: &BigUint,
        b: &BigUint,
        point: &[u8],
    ) -> Result<Vec<u8>, CurveError> {
        let p = Self::decode(point)?;
        let a = self.scalar(a)?;
        let b = self.scalar(b)?;
        // Inputs are public during verification, so the variable-time path is fine.
        Ok(Self::encode(&EdwardsPoint::vartime_double_scalar_mul_basepoint(&b, &p, &a)))
    }

    fn validate_point(&self, bytes: &[u8]) -> Result<(), CurveError> {
        let p = Self::decode(bytes)?;
        if p.is_identity() || !p.is_torsion_free() {
            return Err(CurveError::InvalidPoint);
        }
        Ok(())
    }
}
