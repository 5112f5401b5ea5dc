//! Assignments of real algebraic numbers to variables, and the sign of a
//! polynomial under an assignment.
//!
//! Numeric values are substituted exactly. What remains is decided by
//! refining the interval-represented values:
//!
//! - with one interval-represented variable the sign is exact: a common root
//!   of the evaluated polynomial and the defining polynomial inside the
//!   isolating interval means zero, otherwise the interval is refined until
//!   the evaluated polynomial has no root in it;
//! - with several, interval arithmetic over the isolating intervals is
//!   refined until it excludes zero, which fails if the value is zero.

use num_rational::BigRational;
use num_traits::Zero;
use ralg_math::{
    Polynomial, PolynomialError, RanError, RationalInterval, RealAlgebraicNumber, Variable,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Errors raised while evaluating under an assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A variable of the polynomial has no value.
    #[error("variable {0} is not assigned")]
    Unassigned(Variable),
    /// Interval arithmetic could not exclude zero.
    #[error("sign undetermined after {iterations} refinements")]
    Undetermined {
        /// Refinement rounds performed.
        iterations: u32,
    },
    /// Failure in real algebraic number arithmetic.
    #[error(transparent)]
    Ran(#[from] RanError),
    /// Failure in polynomial arithmetic.
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// Result alias for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Configuration for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum refinement rounds per sign computation.
    pub max_refinements: u32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_refinements: ralg_math::algebraic::DEFAULT_MAX_REFINEMENTS,
        }
    }
}

/// An assignment of real algebraic numbers to variables.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    values: BTreeMap<Variable, RealAlgebraicNumber>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `var`, returning the previous value.
    pub fn assign(
        &mut self,
        var: Variable,
        value: impl Into<RealAlgebraicNumber>,
    ) -> Option<RealAlgebraicNumber> {
        self.values.insert(var, value.into())
    }

    /// Value of `var`.
    pub fn get(&self, var: Variable) -> Option<&RealAlgebraicNumber> {
        self.values.get(&var)
    }

    /// Returns true if `var` has a value.
    pub fn contains(&self, var: Variable) -> bool {
        self.values.contains_key(&var)
    }

    /// Remove the value of `var`.
    pub fn remove(&mut self, var: Variable) -> Option<RealAlgebraicNumber> {
        self.values.remove(&var)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assigned variables and their values, by variable.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &RealAlgebraicNumber)> + '_ {
        self.values.iter().map(|(v, r)| (*v, r))
    }

    /// Sign of `p` under this assignment, with the default configuration.
    pub fn sign_of(&self, p: &Polynomial) -> EvalResult<Ordering> {
        self.sign_of_with(p, &EvalConfig::default())
    }

    /// Sign of `p` under this assignment.
    pub fn sign_of_with(&self, p: &Polynomial, config: &EvalConfig) -> EvalResult<Ordering> {
        let mut reduced = p.clone();
        let mut irrational: Vec<(Variable, RealAlgebraicNumber)> = Vec::new();
        for var in p.variables() {
            match self.values.get(&var) {
                None => return Err(EvalError::Unassigned(var)),
                Some(RealAlgebraicNumber::Numeric { value, .. }) => {
                    reduced = reduced.substitute(var, value);
                }
                Some(value) => irrational.push((var, value.clone())),
            }
        }

        // Substitution may have cancelled some interval-represented variables.
        irrational.retain(|(var, _)| reduced.has(*var));
        if let Some(c) = reduced.constant_value() {
            return Ok(c.cmp(&BigRational::zero()));
        }

        match irrational.as_slice() {
            [(var, value)] => self.sign_single(&reduced, *var, value, config),
            _ => self.sign_by_intervals(&reduced, &irrational, config),
        }
    }

    /// Exact sign of a polynomial in the single variable `var`, bound to
    /// the interval-represented `value`.
    fn sign_single(
        &self,
        p: &Polynomial,
        var: Variable,
        value: &RealAlgebraicNumber,
        config: &EvalConfig,
    ) -> EvalResult<Ordering> {
        let u = p.to_univariate(var)?;
        let mut value = value.clone();

        if let RealAlgebraicNumber::Interval(ir) = &value {
            let g = u.gcd(ir.polynomial());
            let interval = ir.interval();
            if !g.is_constant() && g.count_real_roots(interval.lower(), interval.upper()) > 0 {
                return Ok(Ordering::Equal);
            }
        }

        for _ in 0..=config.max_refinements {
            let interval = match &value {
                RealAlgebraicNumber::Numeric { value, .. } => return Ok(u.sign_at(value)),
                RealAlgebraicNumber::Interval(ir) => ir.interval().clone(),
            };
            if u.count_real_roots(interval.lower(), interval.upper()) == 0 {
                // No root of u on the open interval: u keeps the sign it has
                // at the midpoint, which lies inside.
                trace!("sign of {} decided on {}", p, interval);
                return Ok(u.sign_at(&interval.midpoint()));
            }
            value.refine();
        }
        Err(RanError::RefinementLimit {
            limit: config.max_refinements,
        }
        .into())
    }

    /// Sign of `p` by interval arithmetic over the isolating intervals.
    fn sign_by_intervals(
        &self,
        p: &Polynomial,
        vars: &[(Variable, RealAlgebraicNumber)],
        config: &EvalConfig,
    ) -> EvalResult<Ordering> {
        let mut values = vars.to_vec();

        for iteration in 0..=config.max_refinements {
            let ranges: FxHashMap<Variable, RationalInterval> = values
                .iter()
                .map(|(v, r)| (*v, r.interval()))
                .collect();
            let range = p.evaluate_interval(&ranges)?;
            if let Some(sign) = range.sign() {
                trace!("sign of {} decided after {} refinements", p, iteration);
                return Ok(sign);
            }
            for (_, r) in &mut values {
                r.refine();
            }
        }
        Err(EvalError::Undetermined {
            iterations: config.max_refinements,
        })
    }
}

impl FromIterator<(Variable, RealAlgebraicNumber)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, RealAlgebraicNumber)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} : {}", var, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use ralg_math::UnivariatePolynomial;

    fn int(n: i64) -> RealAlgebraicNumber {
        RealAlgebraicNumber::from_integer(n)
    }

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn vars() -> (Variable, Variable) {
        (Variable::from_index(0), Variable::from_index(1))
    }

    fn sqrt2() -> RealAlgebraicNumber {
        RealAlgebraicNumber::from_bounds(&UnivariatePolynomial::from_integers(&[-2, 0, 1]), rat(1), rat(2))
            .expect("isolates sqrt 2")
    }

    #[test]
    fn test_numeric_assignment() {
        let (x, y) = vars();
        let p = Polynomial::from_coeffs_int(&[(1, &[(x, 1)]), (-1, &[(y, 1)])]);
        let mut a = Assignment::new();
        a.assign(x, int(3));
        assert_eq!(a.sign_of(&p), Err(EvalError::Unassigned(y)));
        a.assign(y, int(5));
        assert_eq!(a.sign_of(&p), Ok(Ordering::Less));
        a.assign(y, int(3));
        assert_eq!(a.sign_of(&p), Ok(Ordering::Equal));
    }

    #[test]
    fn test_single_interval_variable_is_exact() {
        let (x, y) = vars();
        let mut a = Assignment::new();
        a.assign(x, sqrt2());
        a.assign(y, int(2));

        // x^2 - y is exactly zero
        let zero = Polynomial::from_coeffs_int(&[(1, &[(x, 2)]), (-1, &[(y, 1)])]);
        assert_eq!(a.sign_of(&zero), Ok(Ordering::Equal));

        // x - 1.4142 > 0 and x - 1.4143 < 0
        let p = &Polynomial::from_var(x)
            - &Polynomial::constant(BigRational::new(BigInt::from(14142), BigInt::from(10000)));
        assert_eq!(a.sign_of(&p), Ok(Ordering::Greater));
        let q = &Polynomial::from_var(x)
            - &Polynomial::constant(BigRational::new(BigInt::from(14143), BigInt::from(10000)));
        assert_eq!(a.sign_of(&q), Ok(Ordering::Less));
    }

    #[test]
    fn test_cancelled_variable() {
        let (x, y) = vars();
        let mut a = Assignment::new();
        a.assign(x, sqrt2());
        a.assign(y, int(0));
        // x*y + 1 is 1 once y = 0
        let p = Polynomial::from_coeffs_int(&[(1, &[(x, 1), (y, 1)]), (1, &[])]);
        assert_eq!(a.sign_of(&p), Ok(Ordering::Greater));
    }

    #[test]
    fn test_several_interval_variables() {
        let (x, y) = vars();
        let p3 = UnivariatePolynomial::from_integers(&[-3, 0, 1]);
        let sqrt3 = RealAlgebraicNumber::from_bounds(&p3, rat(1), rat(2)).expect("sqrt 3");
        let a: Assignment = [(x, sqrt2()), (y, sqrt3)].into_iter().collect();

        // y - x > 0
        let p = Polynomial::from_coeffs_int(&[(1, &[(y, 1)]), (-1, &[(x, 1)])]);
        assert_eq!(a.sign_of(&p), Ok(Ordering::Greater));

        // x*y - 2 > 0 since sqrt 6 > 2
        let q = Polynomial::from_coeffs_int(&[(1, &[(x, 1), (y, 1)]), (-2, &[])]);
        assert_eq!(a.sign_of(&q), Ok(Ordering::Greater));
    }

    #[test]
    fn test_several_interval_variables_at_zero_is_undetermined() {
        let (x, y) = vars();
        let a: Assignment = [(x, sqrt2()), (y, sqrt2())].into_iter().collect();
        let p = Polynomial::from_coeffs_int(&[(1, &[(x, 1)]), (-1, &[(y, 1)])]);
        let config = EvalConfig { max_refinements: 8 };
        assert_eq!(
            a.sign_of_with(&p, &config),
            Err(EvalError::Undetermined { iterations: 8 })
        );
    }

    #[test]
    fn test_display() {
        let (x, _) = vars();
        let mut a = Assignment::new();
        a.assign(x, int(1));
        assert_eq!(a.to_string(), "{x0 : (NR 1)}");
        assert_eq!(a.len(), 1);
        assert_eq!(a.remove(x), Some(RealAlgebraicNumber::from_integer(1)));
        assert!(a.is_empty());
    }
}
