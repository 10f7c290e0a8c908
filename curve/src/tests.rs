use super::*;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_scalar(rng: &mut StdRng, group: &dyn Group) -> BigUint {
    let bytes: [u8; 64] = rng.random();
    BigUint::from_bytes_be(&bytes) % group.order()
}

#[test]
fn test_lookup_accepts_aliases_case_insensitively() {
    assert_eq!("secp256k1".parse::<CurveName>(), Ok(CurveName::Secp256k1));
    assert_eq!("SECP256K1".parse::<CurveName>(), Ok(CurveName::Secp256k1));
    assert_eq!("prime256v1".parse::<CurveName>(), Ok(CurveName::P256));
    assert_eq!("secp384r1".parse::<CurveName>(), Ok(CurveName::P384));
    assert_eq!("ed25519".parse::<CurveName>(), Ok(CurveName::Ed25519));

    for curve in CurveName::ALL {
        assert_eq!(curve.to_string().parse::<CurveName>(), Ok(curve));
        assert_eq!(curve.group().name(), curve);
    }
}

#[test]
fn test_lookup_rejects_unknown_curve() {
    let err = curve_by_name("brainpoolP256r1").unwrap_err();
    assert_eq!(err, CurveError::InvalidCurve("brainpoolP256r1".to_owned()));
}

#[test]
fn test_field_and_point_sizes() {
    let expected = [
        (CurveName::Secp256k1, 256, 33),
        (CurveName::P256, 256, 33),
        (CurveName::P384, 384, 49),
        (CurveName::Ed25519, 255, 32),
    ];
    for (curve, bits, len) in expected {
        let group = curve.group();
        assert_eq!(group.field_bits(), bits);
        assert_eq!(group.point_len(), len);
        assert_eq!(group.generator().len(), len);
        assert!(group.is_valid_point(&group.generator()));
    }
}

#[test]
fn test_secp256k1_order() {
    let order = BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .unwrap();
    assert_eq!(CurveName::Secp256k1.group().order(), &order);
}

#[test]
fn test_mul_generator_by_one_is_generator() {
    for curve in CurveName::ALL {
        let group = curve.group();
        let one = BigUint::from(1u8);
        assert_eq!(group.mul_generator(&one).unwrap(), group.generator());
    }
}

#[test]
fn test_scalar_mul_matches_mul_generator() {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in CurveName::ALL {
        let group = curve.group();
        let k = random_scalar(&mut rng, group);
        let via_point = group.scalar_mul(&group.generator(), &k).unwrap();
        assert_eq!(via_point, group.mul_generator(&k).unwrap());
    }
}

#[test]
fn test_add_is_scalar_addition() {
    let mut rng = StdRng::seed_from_u64(7);
    for curve in CurveName::ALL {
        let group = curve.group();
        let a = random_scalar(&mut rng, group);
        let b = random_scalar(&mut rng, group);
        let sum = (&a + &b) % group.order();

        let lhs = group
            .add(&group.mul_generator(&a).unwrap(), &group.mul_generator(&b).unwrap())
            .unwrap();
        assert_eq!(lhs, group.mul_generator(&sum).unwrap());
    }
}

#[test]
fn test_double_scalar_mul_basepoint() {
    let mut rng = StdRng::seed_from_u64(1234);
    for curve in CurveName::ALL {
        let group = curve.group();
        let a = random_scalar(&mut rng, group);
        let b = random_scalar(&mut rng, group);
        let x = random_scalar(&mut rng, group);
        let point = group.mul_generator(&x).unwrap();

        let expected = (&a + &b * &x) % group.order();
        assert_eq!(
            group.double_scalar_mul_basepoint(&a, &b, &point).unwrap(),
            group.mul_generator(&expected).unwrap()
        );
    }
}

#[test]
fn test_unreduced_scalar_is_rejected() {
    for curve in CurveName::ALL {
        let group = curve.group();
        let n = group.order().clone();
        assert_eq!(group.mul_generator(&n), Err(CurveError::ScalarOutOfRange));
    }
}

#[test]
fn test_sec1_rejects_bad_encodings() {
    let group = CurveName::Secp256k1.group();
    let mut point = group.generator();

    assert!(!group.is_valid_point(&point[1..]));
    assert!(!group.is_valid_point(&[0u8]));

    point[0] ^= 0xff;
    assert_eq!(group.validate_point(&point), Err(CurveError::InvalidPoint));
}

#[test]
fn test_sec1_accepts_only_compressed_tags() {
    for curve in [CurveName::Secp256k1, CurveName::P256, CurveName::P384] {
        let group = curve.group();
        let point = group.generator();
        let b = BigUint::from(3u8);

        for tag in [0x00, 0x01, 0x04, 0x05, 0x06, 0x07] {
            let mut other = point.clone();
            other[0] = tag;
            assert_eq!(group.validate_point(&other), Err(CurveError::InvalidPoint), "{curve} {tag:#04x}");
            assert!(group.double_scalar_mul_basepoint(&b, &b, &other).is_err());
            assert!(group.scalar_mul(&other, &b).is_err());
            assert!(group.add(&other, &point).is_err());
        }

        let mut negated = point.clone();
        negated[0] ^= 0x01;
        assert!(group.is_valid_point(&negated));
    }
}

#[test]
fn test_ed25519_rejects_identity_and_torsion() {
    let group = CurveName::Ed25519.group();

    let mut identity = [0u8; 32];
    identity[0] = 1;
    assert!(!group.is_valid_point(&identity));

    // y = 0 is a point of order 4.
    assert!(!group.is_valid_point(&[0u8; 32]));

    assert!(!group.is_valid_point(&[0u8; 31]));
}
