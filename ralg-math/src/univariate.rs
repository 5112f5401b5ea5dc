//! Univariate polynomials over the rationals.
//!
//! Dense representation: `coeffs[i]` is the coefficient of `x^i`, with no
//! trailing zeros. These are the defining polynomials of interval-represented
//! real algebraic numbers, so the module focuses on what root isolation needs:
//! exact evaluation, Euclidean division and gcd, square-free parts, Sturm
//! sequences and root bounds.

use crate::polynomial::PolynomialError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Dense univariate polynomial with rational coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct UnivariatePolynomial {
    coeffs: Vec<BigRational>,
}

impl UnivariatePolynomial {
    /// Create from coefficients in increasing degree order.
    pub fn new(coeffs: Vec<BigRational>) -> Self {
        let mut p = Self { coeffs };
        p.strip();
        p
    }

    /// Create from integer coefficients in increasing degree order.
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self::new(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: BigRational) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::new(vec![BigRational::zero(), BigRational::one()])
    }

    /// The monic polynomial with the given roots (with multiplicity).
    pub fn from_roots(roots: &[BigRational]) -> Self {
        roots.iter().fold(Self::constant(BigRational::one()), |acc, r| {
            &acc * &Self::new(vec![-r.clone(), BigRational::one()])
        })
    }

    fn strip(&mut self) {
        while self.coeffs.last().is_some_and(Zero::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Returns true for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true for constants, including zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Returns true if the degree is exactly one.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.coeffs.len() == 2
    }

    /// Degree; the zero polynomial has degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficients in increasing degree order.
    #[inline]
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Coefficient of `x^k`.
    pub fn coefficient(&self, k: usize) -> BigRational {
        self.coeffs.get(k).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Leading coefficient, zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> BigRational {
        self.coeffs.last().cloned().unwrap_or_else(BigRational::zero)
    }

    /// Evaluate at `x` with Horner's scheme.
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        let mut acc = BigRational::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    /// Sign of the value at `x`.
    pub fn sign_at(&self, x: &BigRational) -> Ordering {
        self.evaluate(x).cmp(&BigRational::zero())
    }

    /// Returns true if `x` is a root.
    pub fn is_root(&self, x: &BigRational) -> bool {
        self.evaluate(x).is_zero()
    }

    /// Formal derivative.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, c)| c * BigRational::from_integer(BigInt::from(k)))
                .collect(),
        )
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &BigRational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coeffs: self.coeffs.iter().map(|a| a * c).collect(),
        }
    }

    /// Raise to a power.
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::constant(BigRational::one());
        for _ in 0..n {
            result = &result * self;
        }
        result
    }

    /// The polynomial `p(-x)`.
    pub fn negate_variable(&self) -> Self {
        Self {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| if k % 2 == 1 { -c } else { c.clone() })
                .collect(),
        }
    }

    /// Euclidean division `self = q * divisor + r` with `deg r < deg divisor`.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        let dd = divisor.degree();
        if self.is_zero() || self.degree() < dd {
            return (Self::zero(), self.clone());
        }

        let lc = divisor.leading_coefficient();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![BigRational::zero(); self.degree() - dd + 1];

        for k in (0..quot.len()).rev() {
            let c = &rem[k + dd] / &lc;
            if c.is_zero() {
                continue;
            }
            for (i, d) in divisor.coeffs.iter().enumerate() {
                rem[k + i] -= &c * d;
            }
            quot[k] = c;
        }
        rem.truncate(dd);
        (Self::new(quot), Self::new(rem))
    }

    /// Remainder of the division by a non-zero divisor.
    pub fn rem(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Returns true if `divisor` divides this polynomial exactly.
    pub fn divisible_by(&self, divisor: &Self) -> bool {
        !divisor.is_zero() && self.div_rem_nonzero(divisor).1.is_zero()
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem_nonzero(&b);
            a = b;
            b = r;
        }
        a.normalized()
    }

    /// Scale to a monic polynomial. Zero stays zero.
    pub fn normalized(&self) -> Self {
        let lc = self.leading_coefficient();
        if lc.is_zero() || lc.is_one() {
            return self.clone();
        }
        self.scale(&(BigRational::one() / lc))
    }

    /// Integer-coefficient associate with coprime coefficients and a
    /// positive leading coefficient.
    pub fn primitive(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let denom_lcm = self
            .coeffs
            .iter()
            .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
        let ints: Vec<BigInt> = self
            .coeffs
            .iter()
            .map(|c| (c * BigRational::from_integer(denom_lcm.clone())).to_integer())
            .collect();
        let content = ints.iter().fold(BigInt::zero(), |acc, c| acc.gcd(c));
        let sign = if ints.last().is_some_and(Signed::is_negative) {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        let divisor = content * sign;
        Self::new(
            ints.into_iter()
                .map(|c| BigRational::from_integer(c / &divisor))
                .collect(),
        )
    }

    /// Square-free part `p / gcd(p, p')`, made primitive.
    ///
    /// Has the same real roots as `self`, each with multiplicity one.
    pub fn square_free_part(&self) -> Self {
        if self.degree() <= 1 {
            return self.primitive();
        }
        let g = self.gcd(&self.derivative());
        let result = if g.is_constant() {
            self.primitive()
        } else {
            self.div_rem_nonzero(&g).0.primitive()
        };
        tracing::trace!("square-free part of {} is {}", self, result);
        result
    }

    /// Returns true if `gcd(p, p')` is constant.
    pub fn is_square_free(&self) -> bool {
        !self.is_zero() && self.gcd(&self.derivative()).is_constant()
    }

    /// Sturm sequence `p, p', -rem(p, p'), ...`.
    pub fn sturm_sequence(&self) -> Vec<Self> {
        SturmSequence::new(self).into_polynomials()
    }

    /// Number of distinct real roots in the open interval `]lower, upper[`.
    ///
    /// Endpoints may themselves be roots.
    pub fn count_real_roots(&self, lower: &BigRational, upper: &BigRational) -> usize {
        if self.is_zero() || self.is_constant() {
            return 0;
        }
        SturmSequence::new(&self.square_free_part()).count_roots(lower, upper)
    }

    /// Number of distinct real roots.
    pub fn count_all_real_roots(&self) -> usize {
        if self.is_zero() || self.is_constant() {
            return 0;
        }
        let b = self.cauchy_bound();
        let sf = self.square_free_part();
        SturmSequence::new(&sf).count_roots(&-b.clone(), &b)
    }

    /// Cauchy's bound: every root `r` satisfies `|r| < 1 + max |a_i / a_n|`.
    pub fn cauchy_bound(&self) -> BigRational {
        let lc = self.leading_coefficient();
        if self.is_constant() {
            return BigRational::one();
        }
        let lc_abs = lc.abs();
        let max_ratio = self.coeffs[..self.degree()]
            .iter()
            .map(|c| c.abs() / &lc_abs)
            .max()
            .unwrap_or_else(BigRational::zero);
        BigRational::one() + max_ratio
    }

    /// All rational roots, in increasing order.
    ///
    /// Uses the rational root theorem. Returns `None` when the constant or
    /// leading coefficient of the primitive part exceeds `limit` in absolute
    /// value, since enumerating divisors would be too expensive.
    pub fn rational_roots(&self, limit: u64) -> Option<Vec<BigRational>> {
        if self.is_zero() {
            return None;
        }
        let mut p = self.square_free_part();
        let mut roots = Vec::new();

        // Strip the factor x first.
        if p.coefficient(0).is_zero() && !p.is_constant() {
            roots.push(BigRational::zero());
            p = Self::new(p.coeffs[1..].to_vec());
        }
        if p.is_constant() {
            return Some(roots);
        }

        let a0 = p.coefficient(0).to_integer().abs();
        let an = p.leading_coefficient().to_integer().abs();
        let limit = BigInt::from(limit);
        if a0 > limit || an > limit {
            return None;
        }

        let num_divisors = divisors(&a0);
        let den_divisors = divisors(&an);
        for n in &num_divisors {
            for d in &den_divisors {
                if !n.gcd(d).is_one() {
                    continue;
                }
                let candidate = BigRational::new(n.clone(), d.clone());
                for r in [candidate.clone(), -candidate] {
                    if p.is_root(&r) {
                        roots.push(r);
                    }
                }
            }
        }
        roots.sort();
        roots.dedup();
        Some(roots)
    }

    /// Approximate value at `x`, for diagnostics.
    pub fn evaluate_f64(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c.to_f64().unwrap_or(f64::NAN))
    }
}

/// Positive divisors of a positive integer, by trial division.
fn divisors(n: &BigInt) -> Vec<BigInt> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = BigInt::one();
    while &d * &d <= *n {
        if (n % &d).is_zero() {
            let q = n / &d;
            if q != d {
                large.push(q);
            }
            small.push(d.clone());
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// A precomputed Sturm sequence for repeated root counting.
#[derive(Debug, Clone)]
pub struct SturmSequence {
    polys: Vec<UnivariatePolynomial>,
}

impl SturmSequence {
    /// Build the Sturm sequence of `p`.
    ///
    /// Root counts are exact for square-free `p`.
    pub fn new(p: &UnivariatePolynomial) -> Self {
        let mut polys = vec![p.clone()];
        if p.is_constant() {
            return Self { polys };
        }
        polys.push(p.derivative());
        loop {
            let n = polys.len();
            let (_, r) = polys[n - 2].div_rem_nonzero(&polys[n - 1]);
            if r.is_zero() {
                break;
            }
            polys.push(-r);
        }
        Self { polys }
    }

    /// Number of sign variations of the sequence evaluated at `x`, zeros
    /// skipped.
    pub fn sign_variations(&self, x: &BigRational) -> usize {
        let mut variations = 0;
        let mut last = Ordering::Equal;
        for p in &self.polys {
            let s = p.sign_at(x);
            if s == Ordering::Equal {
                continue;
            }
            if last != Ordering::Equal && s != last {
                variations += 1;
            }
            last = s;
        }
        variations
    }

    /// Number of distinct roots in `]lower, upper[`.
    ///
    /// `V(a) - V(b)` counts the roots in `]a, b]` even if `a` or `b` is a
    /// root, so a root at `upper` is subtracted.
    pub fn count_roots(&self, lower: &BigRational, upper: &BigRational) -> usize {
        if lower >= upper {
            return 0;
        }
        let count = self
            .sign_variations(lower)
            .saturating_sub(self.sign_variations(upper));
        if self.polys[0].is_root(upper) {
            count.saturating_sub(1)
        } else {
            count
        }
    }

    /// The polynomials of the sequence.
    pub fn into_polynomials(self) -> Vec<UnivariatePolynomial> {
        self.polys
    }
}

impl Neg for UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn neg(self) -> Self::Output {
        Self {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Add<&UnivariatePolynomial> for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn add(self, rhs: &UnivariatePolynomial) -> Self::Output {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        UnivariatePolynomial::new(
            (0..n)
                .map(|k| self.coefficient(k) + rhs.coefficient(k))
                .collect(),
        )
    }
}

impl Sub<&UnivariatePolynomial> for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn sub(self, rhs: &UnivariatePolynomial) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul<&UnivariatePolynomial> for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn mul(self, rhs: &UnivariatePolynomial) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return UnivariatePolynomial::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        UnivariatePolynomial::new(coeffs)
    }
}

impl fmt::Display for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match k {
                0 => write!(f, "{c}")?,
                1 => write!(f, "({c})*_r")?,
                _ => write!(f, "({c})*_r^{k}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
