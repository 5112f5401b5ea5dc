//! Property-based tests for real algebraic numbers

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::algebraic::*;
use ralg_math::univariate::UnivariatePolynomial;
use std::cmp::Ordering;

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Roots of `x^2 - n` for small positive `n`, plus a few rationals
fn numbers_strategy() -> impl Strategy<Value = Vec<RealAlgebraicNumber>> {
    prop::collection::vec(
        prop_oneof![
            (1i64..12).prop_map(|n| {
                let p = UnivariatePolynomial::from_integers(&[-n, 0, 1]);
                isolate_real_roots(&p).unwrap()
            }),
            (-6i64..6, 1i64..4).prop_map(|(n, d)| {
                vec![RealAlgebraicNumber::from_rational(BigRational::new(
                    BigInt::from(n),
                    BigInt::from(d),
                ))]
            }),
        ],
        1..5,
    )
    .prop_map(|groups| groups.into_iter().flatten().collect())
}

#[cfg(test)]
mod comparison_properties {
    use super::*;

    proptest! {
        /// Comparison agrees with the floating point approximation when the
        /// approximations are far apart
        #[test]
        fn compare_matches_approximation(numbers in numbers_strategy()) {
            for a in &numbers {
                for b in &numbers {
                    let ord = a.try_compare(b).unwrap();
                    prop_assert_eq!(ord, b.try_compare(a).unwrap().reverse());
                    let (fa, fb) = (a.approximate(), b.approximate());
                    if (fa - fb).abs() > 1.0 {
                        prop_assert_eq!(ord, fa.partial_cmp(&fb).unwrap());
                    }
                }
            }
        }

        /// Sorting yields a consistent total order
        #[test]
        fn sorted_is_transitive(mut numbers in numbers_strategy()) {
            numbers.sort();
            for i in 0..numbers.len() {
                for j in i..numbers.len() {
                    prop_assert_ne!(numbers[i].cmp(&numbers[j]), Ordering::Greater);
                }
            }
        }

        /// Refinement shrinks the interval and keeps the value
        #[test]
        fn refine_preserves_value(n in 2i64..50, steps in 1usize..20) {
            let p = UnivariatePolynomial::from_integers(&[-n, 0, 1]);
            let root = isolate_real_roots(&p).unwrap().pop().unwrap();
            let mut refined = root.clone();
            for _ in 0..steps {
                let before = refined.interval().width();
                refined.refine();
                if refined.is_interval() {
                    prop_assert!(refined.interval().width() < before);
                }
            }
            prop_assert_eq!(refined.try_compare(&root).unwrap(), Ordering::Equal);
        }

        /// A sample between two numbers lies strictly between them
        #[test]
        fn sample_between_separates(numbers in numbers_strategy()) {
            let mut sorted = numbers;
            sorted.sort();
            sorted.dedup();
            for pair in sorted.windows(2) {
                let s = sample_between(&pair[0], &pair[1], DEFAULT_MAX_REFINEMENTS).unwrap();
                prop_assert!(pair[0] < s && s < pair[1]);
            }
        }

        /// The integer samples below and above are the nearest integers
        #[test]
        fn integer_samples_are_tight(numbers in numbers_strategy()) {
            let one = RealAlgebraicNumber::from_integer(1);
            for a in &numbers {
                let below = sample_below(a);
                let above = sample_above(a);
                prop_assert!(below.is_integer() && above.is_integer());
                prop_assert!(&below < a && a < &above);
                let next = RealAlgebraicNumber::from_rational(below.value().unwrap() + one.value().unwrap());
                prop_assert!(&next >= a);
                let prev = RealAlgebraicNumber::from_rational(above.value().unwrap() - one.value().unwrap());
                prop_assert!(&prev <= a);
            }
        }

        /// try_simplify_to_numeric holds exactly at the represented root
        #[test]
        fn simplify_to_numeric_only_at_root(k in 1i64..6, probe in -10i64..10) {
            // (x - k)(x^2 - 2) isolates k within ]k - 1/4, k + 1/4[
            let p = &UnivariatePolynomial::from_integers(&[-k, 1])
                * &UnivariatePolynomial::from_integers(&[-2, 0, 1]);
            let quarter = BigRational::new(BigInt::from(1), BigInt::from(4));
            let root = RealAlgebraicNumber::from_bounds(&p, rat(k) - &quarter, rat(k) + &quarter).unwrap();
            prop_assert_eq!(root.try_simplify_to_numeric(&rat(probe)), probe == k);
        }
    }
}
