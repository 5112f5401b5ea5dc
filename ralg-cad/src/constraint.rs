//! Polynomial sign constraints `p ~ 0`.

use crate::assignment::{Assignment, EvalConfig, EvalResult};
use num_rational::BigRational;
use num_traits::Zero;
use ralg_math::{Polynomial, Variable, VariablePool};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Relation between a polynomial and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// `p = 0`
    Eq,
    /// `p != 0`
    Neq,
    /// `p < 0`
    Less,
    /// `p <= 0`
    Leq,
    /// `p > 0`
    Greater,
    /// `p >= 0`
    Geq,
}

impl Relation {
    /// Returns true if a value with the given sign satisfies the relation.
    pub fn holds(self, sign: Ordering) -> bool {
        match self {
            Relation::Eq => sign == Ordering::Equal,
            Relation::Neq => sign != Ordering::Equal,
            Relation::Less => sign == Ordering::Less,
            Relation::Leq => sign != Ordering::Greater,
            Relation::Greater => sign == Ordering::Greater,
            Relation::Geq => sign != Ordering::Less,
        }
    }

    /// The relation satisfied exactly when this one is not.
    pub fn negation(self) -> Relation {
        match self {
            Relation::Eq => Relation::Neq,
            Relation::Neq => Relation::Eq,
            Relation::Less => Relation::Geq,
            Relation::Leq => Relation::Greater,
            Relation::Greater => Relation::Leq,
            Relation::Geq => Relation::Less,
        }
    }

    /// Symbol of the relation.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "=",
            Relation::Neq => "!=",
            Relation::Less => "<",
            Relation::Leq => "<=",
            Relation::Greater => ">",
            Relation::Geq => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A constraint `polynomial relation 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    polynomial: Polynomial,
    relation: Relation,
}

impl Constraint {
    /// Create a constraint.
    pub fn new(polynomial: Polynomial, relation: Relation) -> Self {
        Self {
            polynomial,
            relation,
        }
    }

    /// The constrained polynomial.
    #[inline]
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// The relation to zero.
    #[inline]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Variables of the polynomial.
    pub fn variables(&self) -> Vec<Variable> {
        self.polynomial.variables()
    }

    /// The negated constraint.
    pub fn negation(&self) -> Constraint {
        Constraint::new(self.polynomial.clone(), self.relation.negation())
    }

    /// Truth value of a variable-free constraint.
    pub fn constant_truth(&self) -> Option<bool> {
        let c = self.polynomial.constant_value()?;
        Some(self.relation.holds(c.cmp(&BigRational::zero())))
    }

    /// Evaluate under an assignment of every variable.
    pub fn evaluate(&self, assignment: &Assignment) -> EvalResult<bool> {
        self.evaluate_with(assignment, &EvalConfig::default())
    }

    /// Evaluate under an assignment with explicit configuration.
    pub fn evaluate_with(&self, assignment: &Assignment, config: &EvalConfig) -> EvalResult<bool> {
        let sign = assignment.sign_of_with(&self.polynomial, config)?;
        Ok(self.relation.holds(sign))
    }

    /// Format with the variable names of `pool`.
    pub fn display_with<'a>(&'a self, pool: &'a VariablePool) -> impl fmt::Display + 'a {
        ConstraintDisplay {
            constraint: self,
            pool,
        }
    }
}

struct ConstraintDisplay<'a> {
    constraint: &'a Constraint,
    pool: &'a VariablePool,
}

impl fmt::Display for ConstraintDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 0",
            self.constraint.polynomial.display_with(self.pool),
            self.constraint.relation
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} 0", self.polynomial, self.relation)
    }
}
