//! Choosing simple rational sample points around real algebraic numbers.
//!
//! Below and above a number the sample is the nearest integer on that side.
//! Between two numbers it is the simplest rational that separates them: the
//! integer of smallest absolute value if there is one, otherwise the fraction
//! with the smallest denominator (found by walking the Stern-Brocot tree with
//! continued fractions). Candidates are checked against the numbers exactly,
//! so isolating intervals are only refined while a candidate fails.

use super::number::{RanError, RanResult, RealAlgebraicNumber};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

/// The simplest rational in the open interval `]lower, upper[`.
///
/// # Panics
///
/// Panics if `lower >= upper`.
pub fn simplest_rational_between(lower: &BigRational, upper: &BigRational) -> BigRational {
    assert!(lower < upper, "empty interval ]{}, {}[", lower, upper);
    if lower.is_negative() && upper.is_positive() {
        return BigRational::zero();
    }
    if !upper.is_positive() {
        return -simplest_positive(&-upper, &-lower);
    }
    simplest_positive(lower, upper)
}

/// Simplest rational in `]lower, upper[` for `0 <= lower < upper`.
fn simplest_positive(lower: &BigRational, upper: &BigRational) -> BigRational {
    let floor = lower.floor();
    let next = &floor + BigRational::one();
    if &next < upper {
        return next;
    }
    let lo = lower - &floor;
    let hi = upper - &floor;
    if lo.is_zero() {
        // ]0, hi[ with hi <= 1: the simplest element is 1/n for the smallest
        // n with 1/n < hi.
        let n = (BigRational::one() / &hi).floor() + BigRational::one();
        return floor + BigRational::one() / n;
    }
    let inverse = simplest_positive(&(BigRational::one() / &hi), &(BigRational::one() / &lo));
    floor + BigRational::one() / inverse
}

/// Refine `a` until it is numeric or its isolating interval is shorter than 1.
fn narrow_to_unit(a: &RealAlgebraicNumber) -> RealAlgebraicNumber {
    let mut a = a.clone();
    while a.is_interval() && a.interval().width() >= BigRational::one() {
        a.refine();
    }
    a
}

/// The largest integer strictly below `a`.
pub fn sample_below(a: &RealAlgebraicNumber) -> RealAlgebraicNumber {
    let a = narrow_to_unit(a);
    let value = match &a {
        RealAlgebraicNumber::Numeric { value, .. } => value.ceil() - BigRational::one(),
        RealAlgebraicNumber::Interval(ir) => {
            let n = ir.interval().upper().floor();
            if a.cmp_rational(&n) == Ordering::Greater {
                n
            } else {
                n - BigRational::one()
            }
        }
    };
    RealAlgebraicNumber::from_rational(value)
}

/// The smallest integer strictly above `a`.
pub fn sample_above(a: &RealAlgebraicNumber) -> RealAlgebraicNumber {
    let a = narrow_to_unit(a);
    let value = match &a {
        RealAlgebraicNumber::Numeric { value, .. } => value.floor() + BigRational::one(),
        RealAlgebraicNumber::Interval(ir) => {
            let n = ir.interval().lower().ceil();
            if a.cmp_rational(&n) == Ordering::Less {
                n
            } else {
                n + BigRational::one()
            }
        }
    };
    RealAlgebraicNumber::from_rational(value)
}

/// The simplest rational strictly between `a` and `b`.
///
/// Both numbers are refined locally until the simplest rational of
/// `]lower(a), upper(b)[` lies strictly between them.
///
/// # Panics
///
/// Panics if `a >= b`.
pub fn sample_between(
    a: &RealAlgebraicNumber,
    b: &RealAlgebraicNumber,
    max_refinements: u32,
) -> RanResult<RealAlgebraicNumber> {
    let mut a = a.clone();
    let mut b = b.clone();
    let ord = a.compare_refining(&mut b, max_refinements)?;
    assert!(ord == Ordering::Less, "sample_between needs {} < {}", a, b);

    let mut steps = 0;
    loop {
        let candidate = simplest_rational_between(a.interval().lower(), b.interval().upper());
        if a.cmp_rational(&candidate) == Ordering::Less
            && b.cmp_rational(&candidate) == Ordering::Greater
        {
            return Ok(RealAlgebraicNumber::from_rational(candidate));
        }
        if steps >= max_refinements {
            return Err(RanError::RefinementLimit {
                limit: max_refinements,
            });
        }
        a.refine();
        b.refine();
        steps += 1;
    }
}
