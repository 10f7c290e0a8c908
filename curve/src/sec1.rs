//! Short-Weierstrass curves backed by the RustCrypto `elliptic-curve` stack.
//!
//! Points are SEC1-compressed (`0x02`/`0x03` tag followed by the x-coordinate),
//! so the encoded width is one byte more than the field element width.
//! Scalars are converted through their big-endian field representation.

use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::group::{check_reduced, to_fixed_be, Group};
use crate::registry::CurveName;

macro_rules! sec1_group {
    (
        $(#[$meta:meta])*
        $module:ident, $group:ident, $krate:ident, $curve:ident,
        name: $name:expr, field_bytes: $width:expr, field_bits: $bits:expr
    ) => {
        mod $module {
            use super::*;
            use $krate::elliptic_curve::bigint::Encoding;
            use $krate::elliptic_curve::group::Group as _;
            use $krate::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
            use $krate::elliptic_curve::{Curve, PrimeField};
            use $krate::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};

            $(#[$meta])*
            #[derive(Debug)]
            pub struct $group {
                order: BigUint,
            }

            impl $group {
                pub(crate) fn new() -> Self {
                    Self {
                        order: BigUint::from_bytes_be(&<$krate::$curve as Curve>::ORDER.to_be_bytes()),
                    }
                }

                fn scalar(&self, value: &BigUint) -> Result<Scalar, CurveError> {
                    check_reduced(value, &self.order)?;
                    let repr = to_fixed_be(value, $width).ok_or(CurveError::ScalarOutOfRange)?;
                    Option::<Scalar>::from(Scalar::from_repr(*FieldBytes::from_slice(&repr)))
                        .ok_or(CurveError::ScalarOutOfRange)
                }

                fn decode(&self, bytes: &[u8]) -> Result<ProjectivePoint, CurveError> {
                    // Only the compressed form is canonical; this also rules out the
                    // identity, uncompressed and compact encodings.
                    if bytes.len() != $width + 1 || !matches!(bytes[0], 0x02 | 0x03) {
                        return Err(CurveError::InvalidPoint);
                    }
                    let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| CurveError::InvalidPoint)?;
                    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
                        .map(ProjectivePoint::from)
                        .ok_or(CurveError::InvalidPoint)
                }

                fn encode(point: &ProjectivePoint) -> Vec<u8> {
                    AffinePoint::from(*point)
                        .to_encoded_point(true)
                        .as_bytes()
                        .to_vec()
                }
            }

            impl Group for $group {
                fn name(&self) -> CurveName {
                    $name
                }

                fn order(&self) -> &BigUint {
                    &self.order
                }

                fn field_bits(&self) -> u64 {
                    $bits
                }

                fn point_len(&self) -> usize {
                    $width + 1
                }

                fn generator(&self) -> Vec<u8> {
                    Self::encode(&ProjectivePoint::generator())
                }

                fn mul_generator(&self, scalar: &BigUint) -> Result<Vec<u8>, CurveError> {
                    let k = self.scalar(scalar)?;
                    Ok(Self::encode(&(ProjectivePoint::generator() * k)))
                }

                fn scalar_mul(&self, point: &[u8], scalar: &BigUint) -> Result<Vec<u8>, CurveError> {
                    let p = self.decode(point)?;
                    let k = self.scalar(scalar)?;
                    Ok(Self::encode(&(p * k)))
                }

                fn add(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>, CurveError> {
                    let a = self.decode(a)?;
                    let b = self.decode(b)?;
                    Ok(Self::encode(&(a + b)))
                }

                fn double_scalar_mul_basepoint(
                    &self,
                    a: &BigUint,
                    b: &BigUint,
                    point: &[u8],
                ) -> Result<Vec<u8>, CurveError> {
                    let p = self.decode(point)?;
                    let a = self.scalar(a)?;
                    let b = self.scalar(b)?;
                    Ok(Self::encode(&(ProjectivePoint::generator() * a + p * b)))
                }

                fn validate_point(&self, bytes: &[u8]) -> Result<(), CurveError> {
                    let p = self.decode(bytes)?;
                    if bool::from(p.is_identity()) {
                        return Err(CurveError::InvalidPoint);
                    }
                    Ok(())
                }
            }
        }

        pub use $module::$group;
    };
}

sec1_group!(
    /// The Koblitz curve `secp256k1`.
    secp256k1, Secp256k1, k256, Secp256k1,
    name: CurveName::Secp256k1, field_bytes: 32, field_bits: 256
);

sec1_group!(
    /// NIST P-256 (`secp256r1`).
    nist_p256, NistP256, p256, NistP256,
    name: CurveName::P256, field_bytes: 32, field_bits: 256
);

sec1_group!(
    /// NIST P-384 (`secp384r1`).
    nist_p384, NistP384, p384, NistP384,
    name: CurveName::P384, field_bytes: 48, field_bits: 384
);
