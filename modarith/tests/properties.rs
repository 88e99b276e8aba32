//! Property-based tests for the modular arithmetic kernel.

use modarith::{
    Bezout, BigInt, JacobiSymbol, extended_gcd, gcd, jacobi_symbol, mod_inverse, mod_pow,
    odd_part, sqrt_mod_p,
};
use num_integer::Integer;
use num_traits::{One, Zero};
use proptest::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Odd primes covering every residue class modulo 8.
const PRIMES: &[u64] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 193, 257, 7681, 12289, 65537, 786433, 998244353,
];

fn int(n: i64) -> BigInt {
    BigInt::from(n)
}

fn naive_pow(a: &BigInt, e: u32, m: &BigInt) -> BigInt {
    let mut acc = BigInt::one().mod_floor(m);
    for _ in 0..e {
        acc = (acc * a).mod_floor(m);
    }
    acc
}

/// Euler's criterion: `a^((p - 1) / 2)` is `1` for residues and `p - 1` otherwise.
fn euler_criterion(a: &BigInt, p: &BigInt) -> JacobiSymbol {
    let e = mod_pow(a, &((p - 1u32) >> 1u32), p);
    if e.is_zero() {
        JacobiSymbol::Zero
    } else if e.is_one() {
        JacobiSymbol::One
    } else {
        JacobiSymbol::MinusOne
    }
}

fn prime() -> impl Strategy<Value = BigInt> {
    prop::sample::select(PRIMES).prop_map(BigInt::from)
}

fn odd_modulus() -> impl Strategy<Value = BigInt> {
    (0i64..5000).prop_map(|k| int(2 * k + 1))
}

proptest! {
    #[test]
    fn extended_gcd_is_bezout_identity(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let (a, b) = (int(a), int(b));
        let Bezout { gcd: d, s, t } = extended_gcd(&a, &b);
        prop_assert_eq!(&s * &a + &t * &b, d.clone());
        prop_assert_eq!(d, gcd(&a, &b));
    }

    #[test]
    fn gcd_divides_both(a in 1i64..1_000_000, b in 1i64..1_000_000) {
        let d = gcd(&int(a), &int(b));
        prop_assert!(int(a).is_multiple_of(&d));
        prop_assert!(int(b).is_multiple_of(&d));
    }

    #[test]
    fn inverse_of_coprime(a in -100_000i64..100_000, m in 1i64..100_000) {
        let (a, m) = (int(a), int(m));
        prop_assume!(gcd(&a, &m).magnitude().is_one());
        let x = mod_inverse(&a, &m).unwrap();
        prop_assert!(x >= BigInt::zero() && x < m);
        prop_assert_eq!((x * &a).mod_floor(&m), BigInt::one().mod_floor(&m));
    }

    #[test]
    fn non_coprime_is_not_invertible(a in 1i64..10_000, m in 2i64..10_000, k in 2i64..50) {
        let (a, m) = (int(a * k), int(m * k));
        prop_assert!(mod_inverse(&a, &m).is_err());
    }

    #[test]
    fn pow_matches_repeated_multiplication(a in -1000i64..1000, e in 0u32..64, p in prime()) {
        let a = int(a);
        prop_assert_eq!(mod_pow(&a, &BigInt::from(e), &p), naive_pow(&a, e, &p));
    }

    #[test]
    fn odd_part_recomposes(n in any::<i64>()) {
        prop_assume!(n != 0);
        let n = int(n);
        let (k, q) = odd_part(&n);
        prop_assert!(q.is_odd());
        prop_assert_eq!(q << k, n);
    }

    #[test]
    fn jacobi_is_multiplicative(n1 in -10_000i64..10_000, n2 in -10_000i64..10_000, m in odd_modulus()) {
        let j1 = i8::from(jacobi_symbol(&int(n1), &m));
        let j2 = i8::from(jacobi_symbol(&int(n2), &m));
        let j12 = i8::from(jacobi_symbol(&(int(n1) * int(n2)), &m));
        prop_assert!((-1..=1).contains(&j12));
        prop_assert_eq!(j12, j1 * j2);
    }

    #[test]
    fn jacobi_of_one(m in odd_modulus()) {
        prop_assert_eq!(jacobi_symbol(&BigInt::one(), &m), JacobiSymbol::One);
    }

    #[test]
    fn jacobi_matches_euler_criterion(a in any::<i32>(), p in prime()) {
        let a = BigInt::from(a);
        prop_assert_eq!(jacobi_symbol(&a, &p), euler_criterion(&a, &p));
    }

    #[test]
    fn sqrt_of_residue(x in 1i64..1_000_000, p in prime(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let a = (int(x) * int(x)).mod_floor(&p);
        let root = sqrt_mod_p(&a, &p, &mut rng);
        prop_assert_eq!((&root * &root).mod_floor(&p), a);
    }
}

#[test]
fn sqrt_is_deterministic_for_a_fixed_seed() {
    let p = int(998_244_353);
    let a = int(5);

    let roots: Vec<BigInt> = (0..2)
        .map(|_| sqrt_mod_p(&a, &p, &mut ChaCha8Rng::seed_from_u64(7)))
        .collect();

    assert_eq!(roots[0], roots[1]);
}

#[test]
fn sqrt_on_large_primes() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // 2^255 - 19 ≡ 5 (mod 8)
    let p25519 = (BigInt::one() << 255u32) - 19;
    // 2^224 - 2^96 + 1 ≡ 1 (mod 8), with 2^96 | p - 1
    let p224 = (BigInt::one() << 224u32) - (BigInt::one() << 96u32) + 1;
    // 2^127 - 1 ≡ 7 (mod 8)
    let m127 = (BigInt::one() << 127u32) - 1;

    for p in [p25519, p224, m127] {
        for x in [2u64, 3, 0xdead_beef, u64::MAX] {
            let a = (BigInt::from(x) * BigInt::from(x)).mod_floor(&p);
            let root = sqrt_mod_p(&a, &p, &mut rng);
            assert_eq!((&root * &root).mod_floor(&p), a);
        }
    }
}
