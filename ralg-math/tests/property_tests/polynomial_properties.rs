//! Property-based tests for multivariate polynomials

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::polynomial::*;
use ralg_math::variable::Variable;
use rustc_hash::FxHashMap;

/// Strategy for polynomials in two variables
fn polynomial_strategy() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((-5i64..5, 0u32..3, 0u32..3), 0..5).prop_map(|terms| {
        let terms = terms.into_iter().map(|(c, ex, ey)| {
            Term::new(
                rat(c),
                ralg_math::Monomial::from_exponents([
                    (Variable::from_index(0), ex),
                    (Variable::from_index(1), ey),
                ]),
            )
        });
        Polynomial::from_terms(terms, Default::default())
    })
}

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn point(x: i64, y: i64) -> FxHashMap<Variable, BigRational> {
    let mut values = FxHashMap::default();
    values.insert(Variable::from_index(0), rat(x));
    values.insert(Variable::from_index(1), rat(y));
    values
}

#[cfg(test)]
mod polynomial_ring_properties {
    use super::*;

    proptest! {
        /// Evaluation is a ring homomorphism
        #[test]
        fn evaluation_respects_arithmetic(
            p in polynomial_strategy(),
            q in polynomial_strategy(),
            x in -3i64..3,
            y in -3i64..3
        ) {
            let at = point(x, y);
            let pv = p.evaluate(&at).unwrap();
            let qv = q.evaluate(&at).unwrap();
            prop_assert_eq!((&p + &q).evaluate(&at).unwrap(), &pv + &qv);
            prop_assert_eq!((&p - &q).evaluate(&at).unwrap(), &pv - &qv);
            prop_assert_eq!((&p * &q).evaluate(&at).unwrap(), &pv * &qv);
        }

        /// Substituting one variable then evaluating matches direct evaluation
        #[test]
        fn substitute_then_evaluate(p in polynomial_strategy(), x in -3i64..3, y in -3i64..3) {
            let at = point(x, y);
            let partial = p.substitute(Variable::from_index(0), &rat(x));
            prop_assert!(!partial.has(Variable::from_index(0)));
            prop_assert_eq!(partial.evaluate(&at).unwrap(), p.evaluate(&at).unwrap());
        }

        /// Terms stay strictly decreasing in the polynomial's order
        #[test]
        fn terms_sorted(p in polynomial_strategy(), q in polynomial_strategy()) {
            let r = &p * &q;
            for pair in r.terms().windows(2) {
                prop_assert_eq!(
                    r.order().compare(&pair[0].monomial, &pair[1].monomial),
                    std::cmp::Ordering::Greater
                );
            }
        }
    }
}
