//! Development-related functionality.

/// Implement group law tests for the curve `y² = x³ + ax + b` over `F_p`.
///
/// The tests enumerate the whole group, so `p` should stay small. Expands to
/// `#[test]` functions in the calling module, which needs `rand_chacha` as a
/// dev-dependency.
#[macro_export]
macro_rules! test_group_law {
    ($a:expr, $b:expr, $p:expr) => {
        fn curve() -> $crate::Curve {
            $crate::Curve::new($a, $b, $p).unwrap()
        }

        fn all_points(curve: &$crate::Curve) -> ::std::vec::Vec<$crate::Point<'_>> {
            use $crate::modarith::rand_core::SeedableRng;

            curve
                .points_with_rng(::rand_chacha::ChaCha8Rng::seed_from_u64(0x5eed))
                .collect()
        }

        #[test]
        fn enumeration_matches_order() {
            let curve = curve();
            let points = all_points(&curve);
            let distinct: ::std::collections::HashSet<_> = points.iter().cloned().collect();

            assert_eq!($crate::BigInt::from(points.len()), curve.order());
            assert_eq!(distinct.len(), points.len());
            assert!(points.iter().all(|p| p.is_on_curve()));
        }

        #[test]
        fn identity_is_neutral() {
            let curve = curve();
            let identity = curve.identity();

            for p in all_points(&curve) {
                assert_eq!(p.add(&identity).unwrap(), p);
                assert_eq!(identity.add(&p).unwrap(), p);
            }
        }

        #[test]
        fn negation_is_inverse() {
            let curve = curve();

            for p in all_points(&curve) {
                assert!(p.add(&-&p).unwrap().is_identity());
                assert_eq!(-(-p.clone()), p);
            }
        }

        #[test]
        fn add_is_closed_and_commutative() {
            let curve = curve();
            let points = all_points(&curve);

            for p in points.iter().take(12) {
                for q in &points {
                    let sum = p.add(q).unwrap();
                    assert!(sum.is_on_curve(), "{p} + {q} = {sum}");
                    assert_eq!(sum, q.add(p).unwrap());
                }
            }
        }

        #[test]
        fn add_is_associative() {
            let curve = curve();
            let points = all_points(&curve);
            let sample: ::std::vec::Vec<_> = points.iter().step_by(3).take(8).collect();

            for p in &sample {
                for q in &sample {
                    for r in &sample {
                        let left = p.add(q).unwrap().add(r).unwrap();
                        let right = p.add(&q.add(r).unwrap()).unwrap();
                        assert_eq!(left, right, "({p} + {q}) + {r}");
                    }
                }
            }
        }

        #[test]
        fn add_vs_double() {
            let curve = curve();

            for p in all_points(&curve) {
                assert_eq!(p.add(&p).unwrap(), p.double().unwrap());
            }
        }

        #[test]
        fn add_and_sub() {
            let curve = curve();
            let points = all_points(&curve);

            for p in points.iter().take(8) {
                for q in &points {
                    assert_eq!(&p.add(q).unwrap().sub(q).unwrap(), p);
                }
            }
        }

        #[test]
        fn scalar_mul_matches_repeated_add() {
            let curve = curve();

            for p in all_points(&curve).into_iter().take(6) {
                let mut expected = curve.identity();

                for k in 0u32..20 {
                    assert_eq!(p.scalar_mul(&$crate::BigInt::from(k)).unwrap(), expected);
                    expected = expected.add(&p).unwrap();
                }
            }
        }

        #[test]
        fn negative_scalar() {
            let curve = curve();

            for p in all_points(&curve).into_iter().take(6) {
                for k in 1i32..10 {
                    assert_eq!(
                        p.scalar_mul(&$crate::BigInt::from(-k)).unwrap(),
                        -p.scalar_mul(&$crate::BigInt::from(k)).unwrap()
                    );
                }
            }
        }

        #[test]
        fn order_annihilates_group() {
            let curve = curve();
            let order = curve.order();

            for p in all_points(&curve) {
                assert!(p.scalar_mul(&order).unwrap().is_identity(), "{p}");
            }
        }
    };
}
