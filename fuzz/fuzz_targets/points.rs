#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::Sign;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use weierstrass::{
    BigInt, Point,
    named::{NamedCurve, nist_p224, nist_p256, secp256k1},
};

fn test_group(p1: &Point<'_>, p2: &Point<'_>, s: &BigInt) {
    let sum = p1.add(p2).unwrap();
    assert!(sum.is_on_curve());
    assert_eq!(sum, p2.add(p1).unwrap());

    // addition and doubling agree
    assert_eq!(p1.double().unwrap(), p1.add(p1).unwrap());

    assert!(sum.add(&-&sum).unwrap().is_identity());
    assert_eq!(sum.sub(p2).unwrap(), *p1);

    // [s]P + [s]P = [2s]P
    let scalar_mul = p1.scalar_mul(s).unwrap();
    assert_eq!(
        scalar_mul.add(&scalar_mul).unwrap(),
        p1.scalar_mul(&(s * 2u32)).unwrap()
    );
}

fn test_curve(named: &NamedCurve, data: &[u8], rng: &mut ChaChaRng) {
    let curve = named.curve();
    let g = named.generator();

    // lift two fuzzed x-coordinates, falling back to the generator
    let lift = |x: &[u8], rng: &mut ChaChaRng| {
        curve
            .lift_x(BigInt::from_bytes_be(Sign::Plus, x), rng)
            .pop()
            .unwrap_or_else(|| g.clone())
    };

    let p1 = lift(&data[32..64], rng);
    let p2 = lift(&data[64..96], rng);
    let sign = if data[96] & 1 == 0 { Sign::Plus } else { Sign::Minus };
    let s = BigInt::from_bytes_be(sign, &data[97..129]);

    test_group(&p1, &p2, &s);
    test_group(&g, &p1, &s);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 129 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    for named in [nist_p224(), nist_p256(), secp256k1()] {
        test_curve(&named, data, &mut rng);
    }
});
