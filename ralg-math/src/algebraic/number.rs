//! Real algebraic numbers.
//!
//! A [`RealAlgebraicNumber`] is either an exact rational (numeric
//! representation) or the unique root of a square-free univariate polynomial
//! inside an open isolating interval (interval representation).
//!
//! Interval-represented numbers keep two invariants at all times:
//!
//! - the open interval `]lower, upper[` contains exactly one real root of the
//!   polynomial;
//! - neither endpoint is a root, so the polynomial has opposite signs at the
//!   two endpoints and sign-based bisection is always well defined.
//!
//! When bisection hits the root exactly, the number turns into its numeric
//! representation.
//!
//! Comparison decides equality exactly through a gcd test and otherwise refines
//! the isolating intervals until they separate. The loop is bounded by a
//! refinement cap; `try_compare` reports the breach, the `Ord` implementation
//! panics on it.

use crate::interval::RationalInterval;
use crate::univariate::UnivariatePolynomial;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Default bound on bisection steps per comparison or refinement request.
pub const DEFAULT_MAX_REFINEMENTS: u32 = 10_000;

/// Default bound on the coefficients handed to the rational root search.
pub const DEFAULT_RATIONAL_ROOT_LIMIT: u64 = 1_000_000;

/// Errors for real algebraic number operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RanError {
    /// The defining polynomial is zero.
    #[error("defining polynomial is zero")]
    ZeroPolynomial,
    /// The interval bounds are reversed.
    #[error("interval is empty")]
    EmptyInterval,
    /// The interval does not contain exactly one root.
    #[error("interval contains {roots} roots instead of exactly one")]
    InvalidIsolation {
        /// Number of distinct roots found in the open interval.
        roots: usize,
    },
    /// A refinement loop exceeded its bisection budget.
    #[error("refinement limit of {limit} bisections exceeded")]
    RefinementLimit {
        /// The exceeded limit.
        limit: u32,
    },
    /// A rational value was requested from an interval representation.
    #[error("number is not in numeric representation")]
    NotNumeric,
}

/// Result alias for real algebraic number operations.
pub type RanResult<T> = Result<T, RanError>;

/// Configuration for constructing and refining real algebraic numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RanConfig {
    /// Maximum bisection steps per comparison or refinement request.
    pub max_refinements: u32,
    /// Count roots with Sturm sequences when building from an interval.
    ///
    /// When disabled the caller is trusted and the count only runs under
    /// debug assertions.
    pub verify_isolation: bool,
    /// Largest constant or leading coefficient for which rational roots are
    /// searched.
    pub rational_root_limit: u64,
}

impl Default for RanConfig {
    fn default() -> Self {
        Self {
            max_refinements: DEFAULT_MAX_REFINEMENTS,
            verify_isolation: true,
            rational_root_limit: DEFAULT_RATIONAL_ROOT_LIMIT,
        }
    }
}

/// Payload of an interval-represented number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRepr {
    polynomial: UnivariatePolynomial,
    interval: RationalInterval,
    is_root: bool,
}

impl IntervalRepr {
    /// The square-free primitive defining polynomial.
    #[inline]
    pub fn polynomial(&self) -> &UnivariatePolynomial {
        &self.polynomial
    }

    /// The open isolating interval.
    #[inline]
    pub fn interval(&self) -> &RationalInterval {
        &self.interval
    }

    /// Sign of the polynomial at the lower endpoint, never `Equal`.
    fn lower_sign(&self) -> Ordering {
        self.polynomial.sign_at(self.interval.lower())
    }

    /// Compare the represented root with a rational, without refinement.
    fn compare_rational(&self, r: &BigRational) -> Ordering {
        if r <= self.interval.lower() {
            return Ordering::Greater;
        }
        if r >= self.interval.upper() {
            return Ordering::Less;
        }
        match self.polynomial.sign_at(r) {
            Ordering::Equal => Ordering::Equal,
            // Same sign as at the lower end: no sign change yet, so the root
            // lies above r.
            s if s == self.lower_sign() => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    /// One bisection step. Returns the midpoint if it is the root.
    fn bisect(&mut self) -> Option<BigRational> {
        let mid = self.interval.midpoint();
        let s = self.polynomial.sign_at(&mid);
        if s == Ordering::Equal {
            return Some(mid);
        }
        let (lower, upper) = if s == self.lower_sign() {
            (mid, self.interval.upper().clone())
        } else {
            (self.interval.lower().clone(), mid)
        };
        self.interval = RationalInterval::new(lower, upper)
            .unwrap_or_else(|| unreachable!("bisection keeps lower < upper"));
        None
    }
}

/// A real algebraic number.
#[derive(Clone)]
pub enum RealAlgebraicNumber {
    /// Exact rational value.
    Numeric {
        /// The value.
        value: BigRational,
        /// Whether this number was produced as a root of a polynomial.
        is_root: bool,
    },
    /// Unique root of a polynomial inside an open isolating interval.
    Interval(Arc<IntervalRepr>),
}

impl RealAlgebraicNumber {
    /// Numeric representation of a rational.
    pub fn from_rational(value: BigRational) -> Self {
        Self::Numeric {
            value,
            is_root: false,
        }
    }

    /// Numeric representation of an integer.
    pub fn from_integer(value: i64) -> Self {
        Self::from_rational(BigRational::from_integer(BigInt::from(value)))
    }

    /// Build the root of `polynomial` isolated by the open `interval`, with
    /// the default configuration.
    pub fn create_safe(
        polynomial: &UnivariatePolynomial,
        interval: RationalInterval,
    ) -> RanResult<Self> {
        Self::create_safe_with(polynomial, interval, &RanConfig::default())
    }

    /// Same as [`create_safe`](Self::create_safe) from raw bounds.
    pub fn from_bounds(
        polynomial: &UnivariatePolynomial,
        lower: BigRational,
        upper: BigRational,
    ) -> RanResult<Self> {
        let interval = RationalInterval::new(lower, upper).ok_or(RanError::EmptyInterval)?;
        Self::create_safe(polynomial, interval)
    }

    /// Build the root of `polynomial` isolated by the open `interval`.
    ///
    /// The polynomial is replaced by its primitive square-free part. A point
    /// interval must hold a root; a linear polynomial yields the numeric
    /// representation. Endpoints that are roots are moved inward.
    pub fn create_safe_with(
        polynomial: &UnivariatePolynomial,
        interval: RationalInterval,
        config: &RanConfig,
    ) -> RanResult<Self> {
        if polynomial.is_zero() {
            return Err(RanError::ZeroPolynomial);
        }
        if interval.is_point() {
            let value = interval.lower().clone();
            if !polynomial.is_root(&value) {
                return Err(RanError::InvalidIsolation { roots: 0 });
            }
            return Ok(Self::Numeric {
                value,
                is_root: true,
            });
        }

        let p = polynomial.square_free_part();
        if config.verify_isolation {
            let roots = p.count_real_roots(interval.lower(), interval.upper());
            if roots != 1 {
                return Err(RanError::InvalidIsolation { roots });
            }
        } else {
            debug_assert_eq!(p.count_real_roots(interval.lower(), interval.upper()), 1);
        }

        let ran = Self::isolated(p, interval, true);
        debug!("created {}", ran);
        Ok(ran)
    }

    /// Build from a square-free `polynomial` known to have exactly one root in
    /// the open `interval`.
    pub(crate) fn isolated(
        polynomial: UnivariatePolynomial,
        interval: RationalInterval,
        is_root: bool,
    ) -> Self {
        if polynomial.is_linear() {
            let value = -polynomial.coefficient(0) / polynomial.coefficient(1);
            return Self::Numeric { value, is_root };
        }

        let mut lower = interval.lower().clone();
        let mut upper = interval.upper().clone();
        while polynomial.is_root(&lower) || polynomial.is_root(&upper) {
            let mid = (&lower + &upper) / BigRational::from_integer(BigInt::from(2));
            if polynomial.is_root(&mid) {
                return Self::Numeric {
                    value: mid,
                    is_root,
                };
            }
            if polynomial.count_real_roots(&lower, &mid) == 1 {
                upper = mid;
            } else {
                lower = mid;
            }
        }
        trace!("isolating interval ]{}, {}[ for {}", lower, upper, polynomial);

        let interval = RationalInterval::new(lower, upper)
            .unwrap_or_else(|| unreachable!("tightening keeps lower < upper"));
        Self::Interval(Arc::new(IntervalRepr {
            polynomial,
            interval,
            is_root,
        }))
    }

    /// Returns true for the numeric representation.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    /// Returns true for the interval representation.
    #[inline]
    pub fn is_interval(&self) -> bool {
        matches!(self, Self::Interval(_))
    }

    /// The rational value of a numeric number.
    pub fn value(&self) -> Option<&BigRational> {
        match self {
            Self::Numeric { value, .. } => Some(value),
            Self::Interval(_) => None,
        }
    }

    /// The rational value, or [`RanError::NotNumeric`].
    pub fn to_rational(&self) -> RanResult<BigRational> {
        self.value().cloned().ok_or(RanError::NotNumeric)
    }

    /// Returns true if this number is known to be an integer.
    ///
    /// Interval-represented numbers are never reported as integers, even if
    /// they happen to be one.
    pub fn is_integer(&self) -> bool {
        self.value().is_some_and(BigRational::is_integer)
    }

    /// Returns true if this number was produced as a root of a polynomial.
    pub fn is_root(&self) -> bool {
        match self {
            Self::Numeric { is_root, .. } => *is_root,
            Self::Interval(ir) => ir.is_root,
        }
    }

    /// Set the root flag.
    pub fn set_root(&mut self, flag: bool) {
        match self {
            Self::Numeric { is_root, .. } => *is_root = flag,
            Self::Interval(ir) => {
                if ir.is_root != flag {
                    Arc::make_mut(ir).is_root = flag;
                }
            }
        }
    }

    /// Builder form of [`set_root`](Self::set_root).
    pub fn with_root(mut self, flag: bool) -> Self {
        self.set_root(flag);
        self
    }

    /// The isolating interval, a point for numeric numbers.
    pub fn interval(&self) -> RationalInterval {
        match self {
            Self::Numeric { value, .. } => RationalInterval::point(value.clone()),
            Self::Interval(ir) => ir.interval.clone(),
        }
    }

    /// The defining polynomial; `x - value` (made primitive) for numeric
    /// numbers.
    pub fn polynomial(&self) -> UnivariatePolynomial {
        match self {
            Self::Numeric { value, .. } => {
                UnivariatePolynomial::new(vec![-value.clone(), BigRational::one()]).primitive()
            }
            Self::Interval(ir) => ir.polynomial.clone(),
        }
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.sign() == Ordering::Equal
    }

    /// Sign of the number, decided without refinement.
    pub fn sign(&self) -> Ordering {
        self.cmp_rational(&BigRational::zero())
    }

    /// Compare with a rational exactly, without refinement.
    pub fn cmp_rational(&self, r: &BigRational) -> Ordering {
        match self {
            Self::Numeric { value, .. } => value.cmp(r),
            Self::Interval(ir) => ir.compare_rational(r),
        }
    }

    /// Halve the isolating interval once. No-op for numeric numbers.
    ///
    /// If the midpoint is the root, the number becomes numeric.
    pub fn refine(&mut self) {
        let hit = match self {
            Self::Numeric { .. } => return,
            Self::Interval(ir) => Arc::make_mut(ir).bisect(),
        };
        if let Some(value) = hit {
            let is_root = self.is_root();
            trace!("refinement hit the root {}", value);
            *self = Self::Numeric { value, is_root };
        }
    }

    /// Refine until the interval width is at most `width`.
    pub fn refine_to_width(&mut self, width: &BigRational, max_refinements: u32) -> RanResult<()> {
        let mut steps = 0;
        while let Self::Interval(ir) = self {
            if ir.interval.width() <= *width {
                return Ok(());
            }
            if steps >= max_refinements {
                return Err(RanError::RefinementLimit {
                    limit: max_refinements,
                });
            }
            self.refine();
            steps += 1;
        }
        Ok(())
    }

    /// Refine until `r` is no longer inside the open isolating interval,
    /// or until this number turns out to equal `r`.
    pub fn refine_avoiding(&mut self, r: &BigRational) {
        loop {
            let Self::Interval(ir) = self else {
                return;
            };
            if !ir.interval.contains_open(r) {
                return;
            }
            if ir.polynomial.is_root(r) {
                let is_root = ir.is_root;
                *self = Self::Numeric {
                    value: r.clone(),
                    is_root,
                };
                return;
            }
            // r is not the root, so each bisection moves an endpoint toward
            // the root and eventually past r.
            self.refine();
        }
    }

    /// Returns true if this number equals the rational `r`.
    ///
    /// For the interval representation this holds iff `r` is a root of the
    /// polynomial inside the isolating interval.
    pub fn try_simplify_to_numeric(&self, r: &BigRational) -> bool {
        match self {
            Self::Numeric { value, .. } => value == r,
            Self::Interval(ir) => ir.interval.contains_open(r) && ir.polynomial.is_root(r),
        }
    }

    /// Look for the rational value of this number.
    ///
    /// Interval-represented numbers are checked against the rational roots of
    /// their polynomial; `None` if there is none in the interval or the
    /// coefficients exceed `limit`.
    pub fn find_rational_value(&self, limit: u64) -> Option<BigRational> {
        match self {
            Self::Numeric { value, .. } => Some(value.clone()),
            Self::Interval(ir) => ir
                .polynomial
                .rational_roots(limit)?
                .into_iter()
                .find(|r| ir.interval.contains_open(r)),
        }
    }

    /// The numeric representation of this number, if it is rational.
    ///
    /// The root flag carries over.
    pub fn to_numeric(&self, limit: u64) -> Option<Self> {
        if self.is_numeric() {
            return Some(self.clone());
        }
        let value = self.find_rational_value(limit)?;
        Some(Self::Numeric {
            value,
            is_root: self.is_root(),
        })
    }

    /// Approximate value as a float.
    ///
    /// A copy is refined to an interval of width at most 2^-20 within the
    /// default budget, so `self` keeps its current interval.
    pub fn approximate(&self) -> f64 {
        let mut r = self.clone();
        if r.is_interval() {
            let width = BigRational::new(BigInt::one(), BigInt::one() << 20u32);
            // On an exhausted budget the narrowest interval reached is used.
            let _ = r.refine_to_width(&width, DEFAULT_MAX_REFINEMENTS);
        }
        let v = match &r {
            Self::Numeric { value, .. } => value.clone(),
            Self::Interval(ir) => ir.interval.midpoint(),
        };
        v.to_f64().unwrap_or(f64::NAN)
    }

    /// Compare two numbers without touching either, within the default
    /// refinement budget.
    pub fn try_compare(&self, other: &Self) -> RanResult<Ordering> {
        self.try_compare_with(other, DEFAULT_MAX_REFINEMENTS)
    }

    /// Compare two numbers without touching either.
    pub fn try_compare_with(&self, other: &Self, max_refinements: u32) -> RanResult<Ordering> {
        let mut a = self.clone();
        let mut b = other.clone();
        a.compare_refining(&mut b, max_refinements)
    }

    /// Compare two numbers, keeping the refinements made along the way.
    pub fn compare_refining(&mut self, other: &mut Self, max_refinements: u32) -> RanResult<Ordering> {
        let mut checked_equality = false;
        let mut steps = 0;
        loop {
            match (&*self, &*other) {
                (Self::Numeric { value: a, .. }, Self::Numeric { value: b, .. }) => {
                    return Ok(a.cmp(b));
                }
                (Self::Numeric { value, .. }, Self::Interval(ir)) => {
                    return Ok(ir.compare_rational(value).reverse());
                }
                (Self::Interval(ir), Self::Numeric { value, .. }) => {
                    return Ok(ir.compare_rational(value));
                }
                (Self::Interval(a), Self::Interval(b)) => {
                    if let Some(ord) = a.interval.position_relative_to(&b.interval) {
                        return Ok(ord);
                    }
                    if !checked_equality {
                        if Self::same_root(a, b) {
                            return Ok(Ordering::Equal);
                        }
                        checked_equality = true;
                    }
                }
            }
            if steps >= max_refinements {
                return Err(RanError::RefinementLimit {
                    limit: max_refinements,
                });
            }
            self.refine();
            other.refine();
            steps += 1;
        }
    }

    /// Exact equality test for two overlapping interval representations.
    ///
    /// A common root of both polynomials inside the intersection is the root
    /// isolated by each of them.
    fn same_root(a: &IntervalRepr, b: &IntervalRepr) -> bool {
        if std::ptr::eq(a, b) {
            return true;
        }
        let g = a.polynomial.gcd(&b.polynomial);
        if g.is_constant() {
            return false;
        }
        match a.interval.intersection(&b.interval) {
            Some(common) => g.count_real_roots(common.lower(), common.upper()) > 0,
            None => false,
        }
    }
}

impl PartialEq for RealAlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RealAlgebraicNumber {}

impl PartialOrd for RealAlgebraicNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealAlgebraicNumber {
    /// Value order.
    ///
    /// # Panics
    ///
    /// Panics if the two numbers cannot be separated within
    /// [`DEFAULT_MAX_REFINEMENTS`] bisections, which only happens for
    /// malformed isolations.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.try_compare(other) {
            Ok(ord) => ord,
            Err(e) => panic!("cannot compare {} with {}: {}", self, other, e),
        }
    }
}

impl From<BigRational> for RealAlgebraicNumber {
    fn from(value: BigRational) -> Self {
        Self::from_rational(value)
    }
}

impl From<i64> for RealAlgebraicNumber {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric { value, .. } => write!(f, "(NR {})", value),
            Self::Interval(ir) => write!(f, "(IR {}, {})", ir.interval, ir.polynomial),
        }
    }
}

impl fmt::Debug for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)?;
        if self.is_root() {
            write!(f, "R")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn frac(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn x2_minus_2() -> UnivariatePolynomial {
        UnivariatePolynomial::from_integers(&[-2, 0, 1])
    }

    fn sqrt2() -> RealAlgebraicNumber {
        RealAlgebraicNumber::from_bounds(&x2_minus_2(), rat(1), rat(2)).expect("isolates sqrt 2")
    }

    fn neg_sqrt2() -> RealAlgebraicNumber {
        RealAlgebraicNumber::from_bounds(&x2_minus_2(), rat(-2), rat(-1)).expect("isolates -sqrt 2")
    }

    #[test]
    fn test_create_safe_rejects_bad_isolation() {
        let p = x2_minus_2();
        assert_eq!(
            RealAlgebraicNumber::from_bounds(&p, rat(-2), rat(2)).err(),
            Some(RanError::InvalidIsolation { roots: 2 })
        );
        assert_eq!(
            RealAlgebraicNumber::from_bounds(&p, rat(2), rat(3)).err(),
            Some(RanError::InvalidIsolation { roots: 0 })
        );
        assert_eq!(
            RealAlgebraicNumber::from_bounds(&p, rat(2), rat(1)).err(),
            Some(RanError::EmptyInterval)
        );
        assert_eq!(
            RealAlgebraicNumber::from_bounds(&UnivariatePolynomial::zero(), rat(0), rat(1)).err(),
            Some(RanError::ZeroPolynomial)
        );
    }

    #[test]
    fn test_create_safe_linear_is_numeric() {
        let p = UnivariatePolynomial::from_integers(&[-1, 2]);
        let r = RealAlgebraicNumber::from_bounds(&p, rat(0), rat(1)).expect("root 1/2");
        assert_eq!(r.value(), Some(&frac(1, 2)));
        assert!(r.is_root());
    }

    #[test]
    fn test_create_safe_moves_root_endpoints() {
        // (x - 1)(x^2 - 2): the endpoint 1 is a root, sqrt 2 is isolated.
        let p = &UnivariatePolynomial::from_integers(&[-1, 1]) * &x2_minus_2();
        let r = RealAlgebraicNumber::from_bounds(&p, rat(1), rat(2)).expect("isolates sqrt 2");
        let i = r.interval();
        assert!(!p.is_root(i.lower()));
        assert!(!p.is_root(i.upper()));
        assert!(i.contains_open(&frac(1414, 1000)) || r.is_numeric());
    }

    #[test]
    fn test_refine_shrinks_and_keeps_root() {
        let mut r = sqrt2();
        for _ in 0..20 {
            let before = r.interval().width();
            r.refine();
            assert!(r.interval().width() < before);
            let i = r.interval();
            assert!(i.lower() * i.lower() < rat(2));
            assert!(i.upper() * i.upper() > rat(2));
        }
    }

    #[test]
    fn test_refine_hits_rational_root() {
        // x^2 - 1/4 on ]0, 1[: the first midpoint is the root.
        let p = UnivariatePolynomial::new(vec![frac(-1, 4), rat(0), rat(1)]);
        let mut r = RealAlgebraicNumber::from_bounds(&p, rat(0), rat(1)).expect("root 1/2");
        assert!(r.is_interval());
        r.refine();
        assert_eq!(r.value(), Some(&frac(1, 2)));
        assert!(r.is_root());
    }

    #[test]
    fn test_sign() {
        assert_eq!(sqrt2().sign(), Ordering::Greater);
        assert_eq!(neg_sqrt2().sign(), Ordering::Less);
        // x^3 - x on ]-1/2, 1/2[ is zero.
        let p = UnivariatePolynomial::from_integers(&[0, -1, 0, 1]);
        let z = RealAlgebraicNumber::from_bounds(&p, frac(-1, 2), frac(1, 2)).expect("root 0");
        assert!(z.is_zero());
    }

    #[test]
    fn test_cmp_rational_does_not_refine() {
        let r = sqrt2();
        assert_eq!(r.cmp_rational(&frac(7, 5)), Ordering::Greater);
        assert_eq!(r.cmp_rational(&frac(3, 2)), Ordering::Less);
        assert_eq!(r.cmp_rational(&rat(5)), Ordering::Less);
        assert_eq!(r.interval(), sqrt2().interval());
        assert_eq!(RealAlgebraicNumber::from_integer(2).cmp_rational(&rat(2)), Ordering::Equal);
    }

    #[test]
    fn test_approximate_refines_a_copy() {
        let roots = crate::isolate_real_roots(&UnivariatePolynomial::from_integers(&[-11, 0, 1]))
            .expect("non-zero");
        let sqrt11 = &roots[1];
        let before = sqrt11.interval();
        assert!((sqrt11.approximate() - 11f64.sqrt()).abs() < 1e-5);
        assert!((roots[0].approximate() + 11f64.sqrt()).abs() < 1e-5);
        assert_eq!(sqrt11.interval(), before);

        assert!((sqrt2().approximate() - std::f64::consts::SQRT_2).abs() < 1e-5);
        assert_eq!(RealAlgebraicNumber::from_rational(frac(1, 4)).approximate(), 0.25);
    }

    #[test]
    fn test_compare_numeric_and_interval() {
        let s = sqrt2();
        assert_eq!(s.try_compare(&RealAlgebraicNumber::from_integer(1)), Ok(Ordering::Greater));
        assert_eq!(
            s.try_compare(&RealAlgebraicNumber::from_rational(frac(3, 2))),
            Ok(Ordering::Less)
        );
        assert!(neg_sqrt2() < RealAlgebraicNumber::from_integer(-1));
    }

    #[test]
    fn test_compare_equal_roots_of_different_polynomials() {
        // sqrt 2 as a root of x^2 - 2 and of x^4 - 4 = (x^2 - 2)(x^2 + 2).
        let q = UnivariatePolynomial::from_integers(&[-4, 0, 0, 0, 1]);
        let other = RealAlgebraicNumber::from_bounds(&q, frac(13, 10), frac(3, 2)).expect("sqrt 2");
        assert_eq!(sqrt2().try_compare(&other), Ok(Ordering::Equal));
        assert_eq!(sqrt2(), other);
    }

    #[test]
    fn test_compare_close_roots() {
        // sqrt 2 against sqrt 3, both isolated by ]1, 2[.
        let p3 = UnivariatePolynomial::from_integers(&[-3, 0, 1]);
        let sqrt3 = RealAlgebraicNumber::from_bounds(&p3, rat(1), rat(2)).expect("sqrt 3");
        assert_eq!(sqrt2().try_compare(&sqrt3), Ok(Ordering::Less));
        assert_eq!(sqrt3.try_compare(&sqrt2()), Ok(Ordering::Greater));
    }

    #[test]
    fn test_compare_refining_reports_limit() {
        let p3 = UnivariatePolynomial::from_integers(&[-3, 0, 1]);
        let mut a = sqrt2();
        let mut b = RealAlgebraicNumber::from_bounds(&p3, rat(1), rat(2)).expect("sqrt 3");
        assert_eq!(
            a.compare_refining(&mut b, 0),
            Err(RanError::RefinementLimit { limit: 0 })
        );
        assert_eq!(a.compare_refining(&mut b, 100), Ok(Ordering::Less));
    }

    #[test]
    fn test_try_simplify_to_numeric() {
        // (x - 1)(x^2 - 2) with 1 isolated in ]1/2, 6/5[.
        let p = &UnivariatePolynomial::from_integers(&[-1, 1]) * &x2_minus_2();
        let r = RealAlgebraicNumber::from_bounds(&p, frac(1, 2), frac(6, 5)).expect("root 1");
        assert!(r.is_interval());
        assert!(r.try_simplify_to_numeric(&rat(1)));
        assert!(!r.try_simplify_to_numeric(&frac(3, 4)));
        assert!(!sqrt2().try_simplify_to_numeric(&rat(1)));
        assert_eq!(r.find_rational_value(DEFAULT_RATIONAL_ROOT_LIMIT), Some(rat(1)));
        let n = r.to_numeric(DEFAULT_RATIONAL_ROOT_LIMIT).expect("rational");
        assert!(n.is_numeric() && n.is_root());
        assert_eq!(sqrt2().find_rational_value(DEFAULT_RATIONAL_ROOT_LIMIT), None);
    }

    #[test]
    fn test_refine_avoiding() {
        let mut r = sqrt2();
        let probe = frac(3, 2);
        r.refine_avoiding(&probe);
        assert!(!r.interval().contains_open(&probe));
        assert!(r.is_interval());
    }

    #[test]
    fn test_refine_to_width() {
        let mut r = sqrt2();
        let eps = frac(1, 1000);
        r.refine_to_width(&eps, DEFAULT_MAX_REFINEMENTS).expect("within budget");
        assert!(r.interval().width() <= eps);
        assert!((r.approximate() - std::f64::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_root_flag_does_not_affect_value() {
        let a = RealAlgebraicNumber::from_integer(3);
        let b = a.clone().with_root(true);
        assert_eq!(a, b);
        assert!(!a.is_root());
        assert!(b.is_root());
        assert!(b.is_integer());
        assert_eq!(a.to_rational(), Ok(rat(3)));
        assert_eq!(sqrt2().to_rational(), Err(RanError::NotNumeric));
    }

    #[test]
    fn test_display() {
        assert_eq!(RealAlgebraicNumber::from_integer(1).to_string(), "(NR 1)");
        assert!(sqrt2().to_string().starts_with("(IR ]1, 2[, "));
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: RanConfig = serde_json::from_str("{\"max_refinements\": 5}").expect("parses");
        assert_eq!(config.max_refinements, 5);
        assert!(config.verify_isolation);
        assert_eq!(config.rational_root_limit, DEFAULT_RATIONAL_ROOT_LIMIT);
    }
}
