//! Rational intervals.
//!
//! A [`RationalInterval`] with `lower < upper` stands for the open interval
//! `]lower, upper[`; isolating intervals of real algebraic numbers are always
//! open. An interval with `lower == upper` is the single point `lower`, which
//! is what an isolating interval collapses to once bisection hits the root
//! exactly.
//!
//! The arithmetic operations treat intervals as closed and are used to bound
//! the value of a polynomial over a box of algebraic numbers.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Interval with rational endpoints, `lower <= upper`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalInterval {
    lower: BigRational,
    upper: BigRational,
}

impl RationalInterval {
    /// Create an interval. Returns `None` if `lower > upper`.
    pub fn new(lower: BigRational, upper: BigRational) -> Option<Self> {
        if lower > upper {
            return None;
        }
        Some(Self { lower, upper })
    }

    /// The point interval `[value, value]`.
    pub fn point(value: BigRational) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    /// Lower endpoint.
    #[inline]
    pub fn lower(&self) -> &BigRational {
        &self.lower
    }

    /// Upper endpoint.
    #[inline]
    pub fn upper(&self) -> &BigRational {
        &self.upper
    }

    /// Returns true if both endpoints coincide.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// Midpoint of the interval.
    pub fn midpoint(&self) -> BigRational {
        (&self.lower + &self.upper) / BigRational::from_integer(BigInt::from(2))
    }

    /// Width `upper - lower`.
    pub fn width(&self) -> BigRational {
        &self.upper - &self.lower
    }

    /// Membership in the open interval. A point interval contains its point.
    pub fn contains_open(&self, value: &BigRational) -> bool {
        if self.is_point() {
            return value == &self.lower;
        }
        value > &self.lower && value < &self.upper
    }

    /// Membership in the closed interval.
    pub fn contains_closed(&self, value: &BigRational) -> bool {
        value >= &self.lower && value <= &self.upper
    }

    /// Returns true if the open interiors (or points) do not meet.
    ///
    /// Two open intervals sharing only an endpoint are disjoint.
    pub fn disjoint_from(&self, other: &RationalInterval) -> bool {
        self.position_relative_to(other).is_some()
    }

    /// `Some(Less)` if every element of `self` lies strictly below every
    /// element of `other`, `Some(Greater)` for the converse, `None` if the
    /// intervals (as open sets or points) may share a value.
    pub fn position_relative_to(&self, other: &RationalInterval) -> Option<Ordering> {
        let touch_ok = !self.is_point() || !other.is_point();
        if self.upper < other.lower || (touch_ok && self.upper == other.lower) {
            return Some(Ordering::Less);
        }
        if self.lower > other.upper || (touch_ok && self.lower == other.upper) {
            return Some(Ordering::Greater);
        }
        None
    }

    /// Intersection of the two intervals, if not empty.
    pub fn intersection(&self, other: &RationalInterval) -> Option<RationalInterval> {
        let lower = (&self.lower).max(&other.lower).clone();
        let upper = (&self.upper).min(&other.upper).clone();
        RationalInterval::new(lower, upper)
    }

    /// Split at the midpoint into the lower and the upper half.
    pub fn bisect(&self) -> (RationalInterval, RationalInterval) {
        let mid = self.midpoint();
        (
            RationalInterval {
                lower: self.lower.clone(),
                upper: mid.clone(),
            },
            RationalInterval {
                lower: mid,
                upper: self.upper.clone(),
            },
        )
    }

    /// Sign of all elements if the closed interval does not straddle zero.
    ///
    /// Returns `Some(Equal)` only for the point interval `[0, 0]`.
    pub fn sign(&self) -> Option<Ordering> {
        if self.lower.is_positive() {
            Some(Ordering::Greater)
        } else if self.upper.is_negative() {
            Some(Ordering::Less)
        } else if self.lower.is_zero() && self.upper.is_zero() {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    /// Closed interval sum.
    pub fn add(&self, other: &RationalInterval) -> RationalInterval {
        RationalInterval {
            lower: &self.lower + &other.lower,
            upper: &self.upper + &other.upper,
        }
    }

    /// Closed interval product.
    pub fn mul(&self, other: &RationalInterval) -> RationalInterval {
        let products = [
            &self.lower * &other.lower,
            &self.lower * &other.upper,
            &self.upper * &other.lower,
            &self.upper * &other.upper,
        ];
        let mut lower = products[0].clone();
        let mut upper = products[0].clone();
        for p in &products[1..] {
            if p < &lower {
                lower = p.clone();
            }
            if p > &upper {
                upper = p.clone();
            }
        }
        RationalInterval { lower, upper }
    }

    /// Multiply by a rational constant.
    pub fn scale(&self, c: &BigRational) -> RationalInterval {
        let a = &self.lower * c;
        let b = &self.upper * c;
        if a <= b {
            RationalInterval { lower: a, upper: b }
        } else {
            RationalInterval { lower: b, upper: a }
        }
    }

    /// Closed interval power. Even powers of intervals straddling zero start
    /// at zero.
    pub fn pow(&self, n: u32) -> RationalInterval {
        if n == 0 {
            return RationalInterval::point(BigRational::one());
        }
        let a = pow_rational(&self.lower, n);
        let b = pow_rational(&self.upper, n);
        if n % 2 == 1 {
            return RationalInterval { lower: a, upper: b };
        }
        if self.lower.is_negative() && self.upper.is_positive() {
            let upper = if a > b { a } else { b };
            RationalInterval {
                lower: BigRational::zero(),
                upper,
            }
        } else if a <= b {
            RationalInterval { lower: a, upper: b }
        } else {
            RationalInterval { lower: b, upper: a }
        }
    }
}

/// Raise a rational to a small non-negative power.
pub fn pow_rational(base: &BigRational, n: u32) -> BigRational {
    let mut result = BigRational::one();
    let mut b = base.clone();
    let mut e = n;
    while e > 0 {
        if e & 1 == 1 {
            result *= &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }
    result
}

impl fmt::Display for RationalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "[{}]", self.lower)
        } else {
            write!(f, "]{}, {}[", self.lower, self.upper)
        }
    }
}
