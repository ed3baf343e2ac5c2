use curval::curve::{curve_by_id, CurveId};
use curval::keys::{KeyError, PrivateKey, PublicKey};
use curval::rng::FixedEntropy;
use curval::scalar::Int;

const PRIV_HEX: &str = "29EE955FEDA1A85F87ED4004958479706BA6C71FC99A67697A9A13D9D08C618E";
const PUB_X: &str = "F979F942AE743F27902B62CA4E8A8FE0F8A979EE3AD7BD0817339A665C3E7F4F";
const PUB_Y: &str = "B8CF959134B5C66BCC333A968B26D0ADACCFAD26F1EA8607D647E5B679C49184";

#[test]
fn private_key_from_hex_accepts_prefix_and_case() {
    let curve = curve_by_id(CurveId::Secp256k1);

    let plain = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();
    let prefixed = PrivateKey::from_hex(&format!("0x{PRIV_HEX}"), &curve).unwrap();
    let lower = PrivateKey::from_hex(&PRIV_HEX.to_lowercase(), &curve).unwrap();

    assert_eq!(plain, prefixed);
    assert_eq!(plain, lower);
    assert_eq!(plain.to_hex(), PRIV_HEX);
}

#[test]
fn private_key_from_hex_rejects_malformed_input() {
    let curve = curve_by_id(CurveId::Secp256k1);

    assert!(matches!(
        PrivateKey::from_hex("0x123", &curve),
        Err(KeyError::InvalidHex)
    ));
    assert!(matches!(
        PrivateKey::from_hex("zz", &curve),
        Err(KeyError::InvalidHex)
    ));
}

#[test]
fn private_key_round_trips_through_every_format() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();

    assert_eq!(
        PrivateKey::from_be_bytes(&key.to_be_bytes(), &curve).unwrap(),
        key
    );
    assert_eq!(
        PrivateKey::from_base64(&key.to_base64(), &curve).unwrap(),
        key
    );
    assert_eq!(
        PrivateKey::from_dec(&key.scalar().to_dec(), &curve).unwrap(),
        key
    );
}

#[test]
fn private_key_known_base64_and_decimal_forms() {
    let curve = curve_by_id(CurveId::Secp256k1);

    let from_b64 =
        PrivateKey::from_base64("Ke6VX+2hqF+H7UAElYR5cGumxx/JmmdpepoT2dCMYY4=", &curve).unwrap();
    assert_eq!(from_b64.to_hex(), PRIV_HEX);

    let from_dec = PrivateKey::from_dec(
        "18966367339757297816191470218080495970874636138294917155927132817286226534798",
        &curve,
    )
    .unwrap();
    assert_eq!(from_dec.to_hex(), PRIV_HEX);

    assert!(matches!(
        PrivateKey::from_base64("not base64 at all!", &curve),
        Err(KeyError::InvalidBase64)
    ));
    assert!(matches!(
        PrivateKey::from_dec("12x4", &curve),
        Err(KeyError::InvalidDecimal)
    ));
}

#[test]
fn private_key_enforces_scalar_range() {
    let curve = curve_by_id(CurveId::Secp256k1);

    assert!(matches!(
        PrivateKey::from_be_bytes(&[0u8; 32], &curve),
        Err(KeyError::ScalarOutOfRange)
    ));

    // n itself is out of range, n - 1 is the largest valid scalar.
    let n_hex = curve.order().to_hex_padded(64);
    assert!(matches!(
        PrivateKey::from_hex(&n_hex, &curve),
        Err(KeyError::ScalarOutOfRange)
    ));

    let n_minus_1 = curve.order() - &Int::one();
    assert!(PrivateKey::from_hex(&n_minus_1.to_hex_padded(64), &curve).is_ok());

    assert!(matches!(
        PrivateKey::from_hex(&"FF".repeat(32), &curve),
        Err(KeyError::ScalarOutOfRange)
    ));

    assert!(matches!(
        PrivateKey::from_dec("-5", &curve),
        Err(KeyError::ScalarOutOfRange)
    ));
}

#[test]
fn derives_secp256k1_public_key() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();

    let public = PublicKey::derive(&key, &curve).unwrap();

    assert_eq!(public.point().x.to_hex_padded_upper(64), PUB_X);
    assert_eq!(public.point().y.to_hex_padded_upper(64), PUB_Y);
}

#[test]
fn sec1_encodings_match_known_vectors() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();
    let public = PublicKey::derive(&key, &curve).unwrap();

    // y is even, so the compressed form leads with 02.
    assert_eq!(public.to_hex_compressed(&curve), format!("02{PUB_X}"));
    assert_eq!(
        public.to_hex_uncompressed(&curve),
        format!("04{PUB_X}{PUB_Y}")
    );

    assert_eq!(public.to_sec1_compressed(&curve).len(), 33);
    assert_eq!(public.to_sec1_uncompressed(&curve).len(), 65);
}

#[test]
fn sec1_decoding_round_trips() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();
    let public = PublicKey::derive(&key, &curve).unwrap();

    let from_compressed =
        PublicKey::from_sec1(&public.to_sec1_compressed(&curve), &curve).unwrap();
    assert_eq!(from_compressed, public);

    let from_uncompressed =
        PublicKey::from_sec1(&public.to_sec1_uncompressed(&curve), &curve).unwrap();
    assert_eq!(from_uncompressed, public);

    // Odd-parity decompression: the generator's negation has odd y iff
    // the generator's is even, so flipping the tag flips the point.
    let g_compressed = {
        let one = PrivateKey::from_dec("1", &curve).unwrap();
        PublicKey::derive(&one, &curve)
            .unwrap()
            .to_sec1_compressed(&curve)
    };

    let mut flipped = g_compressed.clone();
    flipped[0] = if flipped[0] == 0x02 { 0x03 } else { 0x02 };

    let g = PublicKey::from_sec1(&g_compressed, &curve).unwrap();
    let minus_g = PublicKey::from_sec1(&flipped, &curve).unwrap();

    assert_eq!(g.point().x, minus_g.point().x);
    assert_ne!(g.point().y, minus_g.point().y);
    assert_eq!(
        curve.field().add(&g.point().y, &minus_g.point().y),
        Int::zero()
    );
}

#[test]
fn sec1_decoding_rejects_malformed_input() {
    let curve = curve_by_id(CurveId::Secp256k1);

    assert!(matches!(
        PublicKey::from_sec1(&[], &curve),
        Err(KeyError::InvalidEncoding)
    ));
    assert!(matches!(
        PublicKey::from_sec1(&[0x05; 33], &curve),
        Err(KeyError::InvalidEncoding)
    ));
    assert!(matches!(
        PublicKey::from_sec1(&[0x02; 30], &curve),
        Err(KeyError::InvalidEncoding)
    ));

    // x = 0 gives rhs = 7, which is not a square modulo the secp256k1
    // prime, so decompression must fail.
    let mut bytes = vec![0u8; 33];
    bytes[0] = 0x02;
    assert!(matches!(
        PublicKey::from_sec1(&bytes, &curve),
        Err(KeyError::NotOnCurve)
    ));

    // A mangled uncompressed point is off-curve.
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();
    let public = PublicKey::derive(&key, &curve).unwrap();
    let mut uncompressed = public.to_sec1_uncompressed(&curve);
    uncompressed[64] ^= 0x01;
    assert!(matches!(
        PublicKey::from_sec1(&uncompressed, &curve),
        Err(KeyError::NotOnCurve)
    ));
}

#[test]
fn sec1_decoding_is_weierstrass_only() {
    let curve = curve_by_id(CurveId::Curve25519);

    assert!(matches!(
        PublicKey::from_sec1(&[0x02; 33], &curve),
        Err(KeyError::UnsupportedForm)
    ));
}

#[test]
fn derives_curve25519_public_key_with_smaller_root_y() {
    let curve = curve_by_id(CurveId::Curve25519);

    // k = 1 must reproduce the generator, with y chosen as the smaller
    // of the two roots (which the registered base point's y is).
    let one = PrivateKey::from_dec("1", &curve).unwrap();
    let public = PublicKey::derive(&one, &curve).unwrap();

    assert_eq!(public.point(), curve.generator());

    // k = 2: x from the ladder, y the smaller root of the curve equation.
    let two = PrivateKey::from_dec("2", &curve).unwrap();
    let public = PublicKey::derive(&two, &curve).unwrap();

    assert_eq!(
        public.point().x.to_hex_padded(64),
        "20d342d51873f1b7d9750c687d1571148f3f5ced1e350b5c5cae469cdd684efb"
    );
    assert_eq!(
        public.point().y.to_hex_padded(64),
        "13b57e011700e8ae050a00945d2ba2f377659eb28d8d391ebcd70465c72df563"
    );

    let f = curve.field();
    let other_root = f.sub(f.modulus(), &public.point().y);
    assert!(public.point().y < other_root);
}

#[test]
fn montgomery_derivation_accepts_injected_entropy() {
    let curve = curve_by_id(CurveId::Curve25519);

    // A scalar below the Curve25519 group order (which is just above
    // 2^252, so the secp256k1 test scalar would be out of range here).
    let key = PrivateKey::from_hex(
        "09EE955FEDA1A85F87ED4004958479706BA6C71FC99A67697A9A13D9D08C618E",
        &curve,
    )
    .unwrap();

    let mut l = [0x33u8; 32];
    l[0] = 0x02;

    let a = PublicKey::derive_with(&key, &curve, &mut FixedEntropy::new(l.to_vec())).unwrap();
    let b = PublicKey::derive(&key, &curve).unwrap();

    // The randomiser must not influence the derived key.
    assert_eq!(a, b);

    // The result satisfies the curve equation by² = x(x² + ax + 1).
    let f = curve.field();
    let p = a.point();
    let lhs = f.eval(|| curve.b() * &f.sq(&p.y));
    let rhs = f.eval(|| &p.x * &(&p.x * &p.x + curve.a() * &p.x + Int::one()));
    assert_eq!(lhs, rhs);
}
