use curval::curve::{curve_by_id, CurveId};
use curval::field::{ArithmeticError, Field};
use curval::scalar::Int;

fn f13() -> Field {
    Field::new(Int::from(13u32))
}

#[test]
fn field_reduce_lands_in_range() {
    let f = f13();

    assert_eq!(f.reduce(&Int::from(26u32)), Int::zero());
    assert_eq!(f.reduce(&Int::from(-1i32)), Int::from(12u32));
    assert_eq!(f.reduce(&Int::from(40u32)), Int::from(1u32));
}

#[test]
fn field_eval_reduces_deferred_expression() {
    let f = f13();

    let r = f.eval(|| Int::from(6u32) * Int::from(7u32) + Int::from(100u32));
    assert_eq!(r, Int::from(142u32 % 13));
}

#[test]
fn field_named_operations_reduce() {
    let f = f13();
    let a = Int::from(9u32);
    let b = Int::from(11u32);

    assert_eq!(f.add(&a, &b), Int::from(7u32));
    assert_eq!(f.sub(&a, &b), Int::from(11u32));
    assert_eq!(f.mul(&a, &b), Int::from(8u32));
    assert_eq!(f.sq(&b), Int::from(4u32));
    assert_eq!(f.neg(&a), Int::from(4u32));
    assert_eq!(f.pow(&Int::from(2u32), &Int::from(12u32)), Int::one());
}

#[test]
fn field_inverse_satisfies_group_laws() {
    let f = f13();

    for value in 1u32..13 {
        let a = Int::from(value);
        let inv = f.inverse(&a).unwrap();

        assert_eq!(f.mul(&a, &inv), Int::one(), "a * a^-1 for a = {value}");
        assert_eq!(f.inverse(&inv).unwrap(), a, "involution for a = {value}");
    }
}

#[test]
fn field_inverse_of_zero_fails() {
    let f = f13();

    assert!(matches!(
        f.inverse(&Int::zero()),
        Err(ArithmeticError::NotInvertible)
    ));
    assert!(matches!(
        f.inverse(&Int::from(13u32)),
        Err(ArithmeticError::NotInvertible)
    ));
}

#[test]
fn field_division() {
    let f = f13();

    // 8 / 11 = 8 * 6 = 48 = 9 (mod 13), since 11 * 6 = 66 = 1 (mod 13).
    assert_eq!(f.div(&Int::from(8u32), &Int::from(11u32)).unwrap(), Int::from(9u32));
    assert!(f.div(&Int::from(8u32), &Int::zero()).is_err());
}

#[test]
fn field_sqrt_small_primes_tonelli_path() {
    // 13 = 1 (mod 4) exercises Tonelli–Shanks.
    let f = f13();

    assert_eq!(
        f.sqrt(&Int::from(4u32)),
        vec![Int::from(2u32), Int::from(11u32)]
    );
    assert_eq!(f.sqrt(&Int::from(2u32)), Vec::<Int>::new());

    let f41 = Field::new(Int::from(41u32));
    assert_eq!(
        f41.sqrt(&Int::from(2u32)),
        vec![Int::from(17u32), Int::from(24u32)]
    );
    assert_eq!(f41.sqrt(&Int::from(3u32)), Vec::<Int>::new());

    let f29 = Field::new(Int::from(29u32));
    assert_eq!(
        f29.sqrt(&Int::from(5u32)),
        vec![Int::from(11u32), Int::from(18u32)]
    );
    assert_eq!(f29.sqrt(&Int::from(2u32)), Vec::<Int>::new());
}

#[test]
fn field_sqrt_of_zero_is_zero() {
    assert_eq!(f13().sqrt(&Int::zero()), vec![Int::zero()]);
}

#[test]
fn field_sqrt_fast_path_on_secp256k1_prime() {
    // The secp256k1 prime is 3 (mod 4).
    let curve = curve_by_id(CurveId::Secp256k1);
    let f = curve.field();

    // The generator's y is a square root of x^3 + 7.
    let g = curve.generator();
    let rhs = f.eval(|| &g.x * &g.x * &g.x + Int::from(7u32));

    let roots = f.sqrt(&rhs);
    assert_eq!(roots.len(), 2);
    assert!(roots.contains(&g.y));

    // Smaller root first, and both square back to the input.
    assert!(roots[0] < roots[1]);
    for root in &roots {
        assert_eq!(f.sq(root), rhs);
    }

    assert_eq!(f.add(&roots[0], &roots[1]), Int::zero());
}

#[test]
fn field_sqrt_nonresidue_on_secp256k1_prime() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let f = curve.field();

    // p - 1 is a non-residue for p = 3 (mod 4).
    let minus_one = f.reduce(&Int::from(-1i32));
    assert!(f.sqrt(&minus_one).is_empty());
}

#[test]
fn field_sqrt_on_curve25519_prime() {
    // p = 2^255 - 19 is 5 (mod 8), exercising the general path on a
    // cryptographic prime.
    let curve = curve_by_id(CurveId::Curve25519);
    let f = curve.field();

    let g = curve.generator();
    let rhs = f.eval(|| {
        &g.x * &(&g.x * &g.x + Int::from(486662u32) * &g.x + Int::one())
    });

    let roots = f.sqrt(&rhs);
    assert_eq!(roots.len(), 2);
    assert!(roots.contains(&g.y));
    assert!(roots[0] < roots[1]);

    for root in &roots {
        assert_eq!(f.sq(root), rhs);
    }
}

#[test]
fn field_descriptor_is_shareable_and_immutable() {
    let f = f13();
    let clone = f.clone();

    assert_eq!(f, clone);
    assert_eq!(f.modulus(), &Int::from(13u32));
    assert_eq!(f.byte_len(), 1);

    let secp = curve_by_id(CurveId::Secp256k1);
    assert_eq!(secp.field().byte_len(), 32);
}

#[test]
#[should_panic(expected = "must exceed 3")]
fn field_rejects_tiny_modulus() {
    let _ = Field::new(Int::from(3u32));
}

#[test]
#[should_panic(expected = "must be odd")]
fn field_rejects_even_modulus() {
    let _ = Field::new(Int::from(10u32));
}
