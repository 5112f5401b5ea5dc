//! Property-based tests for monomial arithmetic

use proptest::prelude::*;
use ralg_math::monomial::*;
use ralg_math::variable::Variable;
use std::cmp::Ordering;

/// Strategy for monomials over four variables with small exponents
fn monomial_strategy() -> impl Strategy<Value = Monomial> {
    prop::collection::vec((0u32..4, 0u32..4), 0..5).prop_map(|pairs| {
        Monomial::from_exponents(
            pairs
                .into_iter()
                .map(|(v, e)| (Variable::from_index(v), e)),
        )
    })
}

#[cfg(test)]
mod monomial_arithmetic_properties {
    use super::*;

    proptest! {
        /// Multiplication keeps the invariants and sums degrees
        #[test]
        fn mul_is_consistent(a in monomial_strategy(), b in monomial_strategy()) {
            let p = a.mul(&b);
            prop_assert!(p.is_consistent());
            prop_assert_eq!(p.degree(), a.degree() + b.degree());
        }

        /// Multiplication is commutative
        #[test]
        fn mul_commutative(a in monomial_strategy(), b in monomial_strategy()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        /// Multiplication is associative
        #[test]
        fn mul_associative(
            a in monomial_strategy(),
            b in monomial_strategy(),
            c in monomial_strategy()
        ) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        /// Dividing a product by a factor gives back the other factor
        #[test]
        fn div_undoes_mul(a in monomial_strategy(), b in monomial_strategy()) {
            let p = a.mul(&b);
            prop_assert_eq!(p.div(&b), Some(a.clone()));
            prop_assert!(p.dividable_by(&a));
        }

        /// lcm is divisible by both arguments
        #[test]
        fn lcm_divisible(a in monomial_strategy(), b in monomial_strategy()) {
            let l = Monomial::lcm(&a, &b);
            prop_assert!(l.is_consistent());
            prop_assert!(l.dividable_by(&a));
            prop_assert!(l.dividable_by(&b));
            prop_assert_eq!(l.degree() + a.gcd(&b).degree(), a.degree() + b.degree());
        }

        /// calc_lcm_and_divide_by matches lcm followed by division
        #[test]
        fn lcm_quotient(a in monomial_strategy(), b in monomial_strategy()) {
            let expected = Monomial::lcm(&a, &b).div(&b);
            prop_assert_eq!(Some(a.calc_lcm_and_divide_by(&b)), expected);
        }
    }
}

#[cfg(test)]
mod monomial_order_properties {
    use super::*;

    proptest! {
        /// Both orders are compatible with multiplication
        #[test]
        fn orders_compatible_with_mul(
            a in monomial_strategy(),
            b in monomial_strategy(),
            c in monomial_strategy()
        ) {
            for order in [MonomialOrder::Lex, MonomialOrder::GrLex] {
                let before = order.compare(&a, &b);
                let after = order.compare(&a.mul(&c), &b.mul(&c));
                prop_assert_eq!(before, after);
            }
        }

        /// Equal under an order iff structurally equal
        #[test]
        fn orders_are_total(a in monomial_strategy(), b in monomial_strategy()) {
            let equal = a == b;
            prop_assert_eq!(a.lex_cmp(&b) == Ordering::Equal, equal);
            prop_assert_eq!(a.grlex_cmp(&b) == Ordering::Equal, equal);
            prop_assert_eq!(a.grlex_cmp(&b), b.grlex_cmp(&a).reverse());
        }
    }
}
