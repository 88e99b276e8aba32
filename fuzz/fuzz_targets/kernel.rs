#![no_main]
use libfuzzer_sys::fuzz_target;
use modarith::{BigInt, extended_gcd, jacobi_symbol, mod_inverse, mod_pow, sqrt_mod_p};
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

/// Base field moduli of P-224 (≡ 1 mod 8), Curve25519 (≡ 5 mod 8) and
/// secp256k1 (≡ 3 mod 4).
fn moduli() -> [BigInt; 3] {
    let one = BigInt::one();
    [
        (&one << 224u32) - (&one << 96u32) + 1,
        (&one << 255u32) - 19,
        (&one << 256u32) - (&one << 32u32) - 977,
    ]
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());
    let sign = if data[32] & 1 == 0 { Sign::Plus } else { Sign::Minus };
    let a = BigInt::from_bytes_be(sign, &data[33..64]);
    let b = BigInt::from_bytes_be(Sign::Plus, &data[64..96]);

    // Bézout identity for arbitrary integers
    let bezout = extended_gcd(&a, &b);
    assert_eq!(&bezout.s * &a + &bezout.t * &b, bezout.gcd);

    for p in moduli() {
        let x = a.mod_floor(&p);

        if x.is_zero() {
            assert!(mod_inverse(&a, &p).is_err());
            continue;
        }

        let inv = mod_inverse(&a, &p).unwrap();
        assert!((&x * &inv).mod_floor(&p).is_one());

        // Euler's criterion
        let euler = mod_pow(&x, &((&p - 1u32) >> 1u32), &p);
        let symbol = jacobi_symbol(&x, &p);
        assert_eq!(symbol.is_one(), euler.is_one());

        let square = (&x * &x).mod_floor(&p);
        let root = sqrt_mod_p(&square, &p, &mut rng);
        assert_eq!((&root * &root).mod_floor(&p), square);
    }
});
