//! Multivariate polynomials over the rationals.
//!
//! A polynomial is a sum of terms kept in decreasing monomial order with like
//! terms merged and zero terms dropped. Terms hold their monomial through a
//! shared [`MonomialRef`], so arithmetic that leaves a monomial unchanged
//! (scaling, adding, multiplying by constants, substituting an absent
//! variable) reuses the existing allocation instead of copying it.

use crate::interval::{pow_rational, RationalInterval};
use crate::monomial::{Exponent, Monomial, MonomialOrder, MonomialRef};
use crate::univariate::UnivariatePolynomial;
use crate::variable::{Variable, VariablePool};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

/// Errors raised by polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolynomialError {
    /// A variable other than the requested main variable occurs.
    #[error("polynomial is not univariate in {0}")]
    NotUnivariate(Variable),
    /// Division by the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,
    /// Evaluation hit a variable without a value.
    #[error("no value for variable {0}")]
    Unassigned(Variable),
}

/// A coefficient times a shared monomial.
#[derive(Clone, PartialEq, Eq)]
pub struct Term {
    /// The coefficient.
    pub coeff: BigRational,
    /// The monomial.
    pub monomial: MonomialRef,
}

impl Term {
    /// Create a new term.
    pub fn new(coeff: BigRational, monomial: impl Into<MonomialRef>) -> Self {
        Self {
            coeff,
            monomial: monomial.into(),
        }
    }

    /// A constant term.
    pub fn constant(c: BigRational) -> Self {
        Self::new(c, Monomial::one())
    }

    /// Returns true if the coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Returns true if the monomial is 1.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.monomial.is_constant()
    }

    /// Product of two terms.
    pub fn mul(&self, other: &Term) -> Term {
        let monomial = if self.monomial.is_constant() {
            Arc::clone(&other.monomial)
        } else if other.monomial.is_constant() {
            Arc::clone(&self.monomial)
        } else {
            Arc::new(self.monomial.mul(&other.monomial))
        };
        Term {
            coeff: &self.coeff * &other.coeff,
            monomial,
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_constant() {
            write!(f, "{}", self.coeff)
        } else {
            write!(f, "({})*{}", self.coeff, self.monomial)
        }
    }
}

/// A multivariate polynomial with rational coefficients.
#[derive(Clone)]
pub struct Polynomial {
    /// Terms in decreasing monomial order.
    terms: Vec<Term>,
    /// The monomial ordering used.
    order: MonomialOrder,
}

impl Polynomial {
    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self {
            terms: Vec::new(),
            order: MonomialOrder::default(),
        }
    }

    /// The constant 1.
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// A constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            terms: vec![Term::constant(c)],
            order: MonomialOrder::default(),
        }
    }

    /// The polynomial `var`.
    pub fn from_var(var: Variable) -> Self {
        Self::from_var_exp(var, 1)
    }

    /// The polynomial `var^exp`.
    pub fn from_var_exp(var: Variable, exp: Exponent) -> Self {
        Self {
            terms: vec![Term::new(BigRational::one(), Monomial::from_var_exp(var, exp))],
            order: MonomialOrder::default(),
        }
    }

    /// Build a polynomial from arbitrary terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms: terms.into_iter().filter(|t| !t.is_zero()).collect(),
            order,
        };
        poly.normalize();
        poly
    }

    /// Build a polynomial from integer coefficients and exponent lists.
    pub fn from_coeffs_int(coeffs: &[(i64, &[(Variable, Exponent)])]) -> Self {
        let terms = coeffs.iter().map(|(c, powers)| {
            Term::new(
                BigRational::from_integer(BigInt::from(*c)),
                Monomial::from_exponents(powers.iter().copied()),
            )
        });
        Self::from_terms(terms, MonomialOrder::default())
    }

    /// Embed a univariate polynomial as a polynomial in `var`.
    pub fn from_univariate(var: Variable, p: &UnivariatePolynomial) -> Self {
        let terms = p
            .coefficients()
            .iter()
            .enumerate()
            .map(|(k, c)| Term::new(c.clone(), Monomial::from_var_exp(var, k as Exponent)));
        Self::from_terms(terms, MonomialOrder::default())
    }

    /// Sort terms by the monomial order and merge like terms.
    fn normalize(&mut self) {
        if self.terms.is_empty() {
            return;
        }
        let order = self.order;
        self.terms
            .sort_by(|a, b| order.compare(&b.monomial, &a.monomial));

        let mut merged: Vec<Term> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            match merged.last_mut() {
                Some(last) if last.monomial == term.monomial => last.coeff += term.coeff,
                _ => merged.push(term),
            }
        }
        merged.retain(|t| !t.is_zero());
        self.terms = merged;
    }

    /// Returns true for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true for constants, including zero.
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(Term::is_constant)
    }

    /// Value of a constant polynomial.
    pub fn constant_value(&self) -> Option<BigRational> {
        match self.terms.as_slice() {
            [] => Some(BigRational::zero()),
            [t] if t.is_constant() => Some(t.coeff.clone()),
            _ => None,
        }
    }

    /// Constant term, zero if absent.
    pub fn constant_term(&self) -> BigRational {
        self.terms
            .iter()
            .find(|t| t.is_constant())
            .map_or_else(BigRational::zero, |t| t.coeff.clone())
    }

    /// Number of terms.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Terms in decreasing monomial order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The leading term.
    #[inline]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Monomial order of the terms.
    #[inline]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Total degree; zero for constants.
    pub fn total_degree(&self) -> Exponent {
        self.terms
            .iter()
            .map(|t| t.monomial.degree())
            .max()
            .unwrap_or(0)
    }

    /// Degree in `var`.
    pub fn degree(&self, var: Variable) -> Exponent {
        self.terms
            .iter()
            .map(|t| t.monomial.exponent_of(var))
            .max()
            .unwrap_or(0)
    }

    /// All variables, sorted.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars: Vec<Variable> = self
            .terms
            .iter()
            .flat_map(|t| t.monomial.variables())
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Returns true if `var` occurs.
    pub fn has(&self, var: Variable) -> bool {
        self.terms.iter().any(|t| t.monomial.has(var))
    }

    /// Negation.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term {
                    coeff: -t.coeff.clone(),
                    monomial: Arc::clone(&t.monomial),
                })
                .collect(),
            order: self.order,
        }
    }

    /// Sum.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let terms = self.terms.iter().chain(&other.terms).cloned();
        Polynomial::from_terms(terms, self.order)
    }

    /// Difference.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Multiply by a rational constant.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Polynomial::zero();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term {
                    coeff: &t.coeff * c,
                    monomial: Arc::clone(&t.monomial),
                })
                .collect(),
            order: self.order,
        }
    }

    /// Product.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(a.mul(b));
            }
        }
        Polynomial::from_terms(terms, self.order)
    }

    /// Multiply by a monomial.
    pub fn mul_monomial(&self, m: &Monomial) -> Polynomial {
        let m = Term::new(BigRational::one(), m.clone());
        Polynomial {
            terms: self.terms.iter().map(|t| t.mul(&m)).collect(),
            order: self.order,
        }
    }

    /// Raise to a power by repeated squaring.
    pub fn pow(&self, n: u32) -> Polynomial {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Replace `var` by a rational value.
    pub fn substitute(&self, var: Variable, value: &BigRational) -> Polynomial {
        let terms = self.terms.iter().map(|t| {
            let exp = t.monomial.exponent_of(var);
            if exp == 0 {
                t.clone()
            } else {
                Term::new(
                    &t.coeff * pow_rational(value, exp),
                    t.monomial.drop_variable(var),
                )
            }
        });
        Polynomial::from_terms(terms, self.order)
    }

    /// Evaluate under a full assignment.
    pub fn evaluate(
        &self,
        values: &FxHashMap<Variable, BigRational>,
    ) -> Result<BigRational, PolynomialError> {
        let mut sum = BigRational::zero();
        for t in &self.terms {
            let mut value = t.coeff.clone();
            for ve in t.monomial.exponents() {
                let x = values
                    .get(&ve.var)
                    .ok_or(PolynomialError::Unassigned(ve.var))?;
                value *= pow_rational(x, ve.exp);
            }
            sum += value;
        }
        Ok(sum)
    }

    /// Enclose the values of this polynomial over a box of closed intervals.
    pub fn evaluate_interval(
        &self,
        ranges: &FxHashMap<Variable, RationalInterval>,
    ) -> Result<RationalInterval, PolynomialError> {
        let mut sum = RationalInterval::point(BigRational::zero());
        for t in &self.terms {
            let mut value = RationalInterval::point(t.coeff.clone());
            for ve in t.monomial.exponents() {
                let range = ranges
                    .get(&ve.var)
                    .ok_or(PolynomialError::Unassigned(ve.var))?;
                value = value.mul(&range.pow(ve.exp));
            }
            sum = sum.add(&value);
        }
        Ok(sum)
    }

    /// Convert to a dense univariate polynomial in `var`.
    pub fn to_univariate(&self, var: Variable) -> Result<UnivariatePolynomial, PolynomialError> {
        let degree = self.degree(var) as usize;
        let mut coeffs = vec![BigRational::zero(); degree + 1];
        for t in &self.terms {
            if let Some(other) = t.monomial.variables().find(|&v| v != var) {
                return Err(PolynomialError::NotUnivariate(other));
            }
            coeffs[t.monomial.exponent_of(var) as usize] += &t.coeff;
        }
        Ok(UnivariatePolynomial::new(coeffs))
    }

    /// Format with the variable names of `pool`.
    pub fn display_with<'a>(&'a self, pool: &'a VariablePool) -> impl fmt::Display + 'a {
        PolynomialDisplay {
            poly: self,
            pool: Some(pool),
        }
    }
}

struct PolynomialDisplay<'a> {
    poly: &'a Polynomial,
    pool: Option<&'a VariablePool>,
}

impl fmt::Display for PolynomialDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }
        for (i, t) in self.poly.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if t.is_constant() {
                write!(f, "{}", t.coeff)?;
                continue;
            }
            match self.pool {
                Some(pool) => write!(f, "({})*{}", t.coeff, t.monomial.display_with(pool))?,
                None => write!(f, "({})*{}", t.coeff, t.monomial)?,
            }
        }
        Ok(())
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for Polynomial {}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PolynomialDisplay {
            poly: self,
            pool: None,
        }
        .fmt(f)
    }
}

impl From<Variable> for Polynomial {
    fn from(var: Variable) -> Self {
        Polynomial::from_var(var)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        Polynomial::add(&self, &other)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        Polynomial::sub(&self, &other)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        Polynomial::sub(self, other)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        Polynomial::mul(&self, &other)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        Polynomial::mul(self, other)
    }
}
