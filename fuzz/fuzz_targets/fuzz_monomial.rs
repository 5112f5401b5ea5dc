//! Fuzz target for monomial arithmetic
//!
//! This fuzzer builds monomials from random exponent vectors and checks the
//! algebraic identities between multiplication, division, gcd and lcm.

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use ralg_math::{Monomial, MonomialOrder, Variable};
use std::cmp::Ordering;

/// A monomial as raw variable/exponent pairs, normalised on construction
#[derive(Debug, Arbitrary)]
struct RawMonomial {
    pairs: Vec<(u8, u8)>,
}

impl RawMonomial {
    fn build(&self) -> Monomial {
        // Keep exponents small so that products cannot overflow.
        Monomial::from_exponents(
            self.pairs
                .iter()
                .take(8)
                .map(|&(v, e)| (Variable::from_index(u32::from(v % 6)), u32::from(e % 8))),
        )
    }
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);
    let (a, b) = match <(RawMonomial, RawMonomial)>::arbitrary(&mut unstructured) {
        Ok((a, b)) => (a.build(), b.build()),
        Err(_) => return,
    };
    assert!(a.is_consistent() && b.is_consistent());

    let product = a.mul(&b);
    assert!(product.is_consistent());
    assert_eq!(product.degree(), a.degree() + b.degree());
    assert_eq!(product.div(&a), Some(b.clone()));
    assert_eq!(product.div(&b), Some(a.clone()));

    let gcd = a.gcd(&b);
    let lcm = Monomial::lcm(&a, &b);
    assert!(gcd.is_consistent() && lcm.is_consistent());
    assert!(a.dividable_by(&gcd) && b.dividable_by(&gcd));
    assert!(lcm.dividable_by(&a) && lcm.dividable_by(&b));
    assert_eq!(gcd.mul(&lcm), product);
    assert_eq!(Some(a.calc_lcm_and_divide_by(&b)), lcm.div(&b));

    match a.div(&b) {
        Some(q) => {
            assert!(a.dividable_by(&b));
            assert_eq!(q.mul(&b), a);
        }
        None => assert!(!a.dividable_by(&b)),
    }

    for order in [MonomialOrder::Lex, MonomialOrder::GrLex] {
        let ord = order.compare(&a, &b);
        assert_eq!(ord, order.compare(&b, &a).reverse());
        assert_eq!(ord == Ordering::Equal, a == b);
        // Orders are compatible with multiplication.
        assert_eq!(order.compare(&a.mul(&lcm), &b.mul(&lcm)), ord);
    }
});
