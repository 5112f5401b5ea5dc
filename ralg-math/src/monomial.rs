//! Monomials.
//!
//! A monomial is a product of variables with positive exponents, stored as a
//! list of (variable, exponent) pairs sorted by variable. The constant
//! monomial 1 is the empty list.
//!
//! All binary operations are linear merges of the two sorted lists. Monomials
//! are expected to mention only a handful of variables, so a merge beats
//! repeated binary searches.
//!
//! Monomials are never mutated after construction: arithmetic returns new
//! values, and polynomial terms share them through [`MonomialRef`].

use crate::variable::{Variable, VariablePool};
use rustc_hash::{FxHashMap, FxHasher};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Exponent of a variable inside a monomial.
pub type Exponent = u32;

/// Shared, immutable monomial handle used by polynomial terms.
pub type MonomialRef = Arc<Monomial>;

/// A variable raised to a positive exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarExp {
    /// The variable.
    pub var: Variable,
    /// The exponent, always positive inside a monomial.
    pub exp: Exponent,
}

impl VarExp {
    /// Create a new variable power.
    #[inline]
    pub fn new(var: Variable, exp: Exponent) -> Self {
        Self { var, exp }
    }
}

/// A product of variable powers.
#[derive(Clone, Eq)]
pub struct Monomial {
    /// Variables with their exponents, strictly increasing by variable.
    exponents: SmallVec<[VarExp; 4]>,
    /// Cached sum of all exponents.
    total_degree: Exponent,
    /// Cached hash of `exponents`.
    hash: u64,
}

impl Monomial {
    /// The constant monomial 1.
    #[inline]
    pub fn one() -> Self {
        Self {
            exponents: SmallVec::new(),
            total_degree: 0,
            hash: 0,
        }
    }

    /// The monomial `var`.
    #[inline]
    pub fn from_var(var: Variable) -> Self {
        Self::from_var_exp(var, 1)
    }

    /// The monomial `var^exp`. A zero exponent gives 1.
    pub fn from_var_exp(var: Variable, exp: Exponent) -> Self {
        if exp == 0 {
            return Self::one();
        }
        let mut exponents = SmallVec::new();
        exponents.push(VarExp::new(var, exp));
        Self::from_sorted(exponents, exp)
    }

    /// Build a monomial from arbitrary (variable, exponent) pairs.
    ///
    /// Pairs may come in any order, repeat a variable (exponents add up) or
    /// carry zero exponents (dropped).
    ///
    /// # Panics
    ///
    /// Panics if an exponent or the total degree exceeds [`Exponent::MAX`].
    pub fn from_exponents(pairs: impl IntoIterator<Item = (Variable, Exponent)>) -> Self {
        let mut acc: FxHashMap<Variable, Exponent> = FxHashMap::default();
        for (var, exp) in pairs {
            if exp > 0 {
                let e = acc.entry(var).or_insert(0);
                *e = exponent_sum(*e, exp);
            }
        }

        let mut exponents: SmallVec<[VarExp; 4]> = acc
            .into_iter()
            .map(|(var, exp)| VarExp::new(var, exp))
            .collect();
        exponents.sort_unstable_by_key(|ve| ve.var);

        let total_degree = exponents.iter().fold(0, |d, ve| exponent_sum(d, ve.exp));
        Self::from_sorted(exponents, total_degree)
    }

    fn from_sorted(exponents: SmallVec<[VarExp; 4]>, total_degree: Exponent) -> Self {
        let m = Self {
            hash: compute_hash(&exponents),
            exponents,
            total_degree,
        };
        debug_assert!(m.is_consistent(), "inconsistent monomial {m:?}");
        m
    }

    /// Wrap this monomial in a shared handle.
    #[inline]
    pub fn into_ref(self) -> MonomialRef {
        Arc::new(self)
    }

    /// Total degree, the sum of all exponents.
    #[inline]
    pub fn degree(&self) -> Exponent {
        self.total_degree
    }

    /// Returns true for the constant monomial 1.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.total_degree == 0
    }

    /// Returns true if the total degree is exactly one.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.total_degree == 1
    }

    /// Returns true if the total degree is at most one.
    #[inline]
    pub fn is_at_most_linear(&self) -> bool {
        self.total_degree <= 1
    }

    /// Returns true if all exponents are even.
    pub fn is_square(&self) -> bool {
        self.total_degree % 2 == 0 && self.exponents.iter().all(|ve| ve.exp % 2 == 0)
    }

    /// Number of distinct variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.exponents.len()
    }

    /// The (variable, exponent) pairs in variable order.
    #[inline]
    pub fn exponents(&self) -> &[VarExp] {
        &self.exponents
    }

    /// Iterate over the variables of this monomial in order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.exponents.iter().map(|ve| ve.var)
    }

    /// The only variable of a univariate monomial.
    pub fn single_variable(&self) -> Option<Variable> {
        match self.exponents.as_slice() {
            [ve] => Some(ve.var),
            _ => None,
        }
    }

    /// The largest variable, if any.
    pub fn max_variable(&self) -> Option<Variable> {
        self.exponents.last().map(|ve| ve.var)
    }

    /// Returns true if no variable other than `var` occurs.
    pub fn has_no_other_variable(&self, var: Variable) -> bool {
        match self.exponents.as_slice() {
            [] => true,
            [ve] => ve.var == var,
            _ => false,
        }
    }

    /// Exponent of `var`, 0 if absent.
    pub fn exponent_of(&self, var: Variable) -> Exponent {
        self.exponents
            .iter()
            .find(|ve| ve.var == var)
            .map_or(0, |ve| ve.exp)
    }

    /// Returns true if `var` occurs.
    pub fn has(&self, var: Variable) -> bool {
        self.exponents.iter().any(|ve| ve.var == var)
    }

    /// Multiply by a single variable.
    ///
    /// # Panics
    ///
    /// Panics if an exponent or the total degree exceeds [`Exponent::MAX`].
    pub fn mul_var(&self, var: Variable) -> Monomial {
        let mut exponents: SmallVec<[VarExp; 4]> = SmallVec::with_capacity(self.exponents.len() + 1);
        let mut inserted = false;
        for ve in &self.exponents {
            if !inserted {
                match ve.var.cmp(&var) {
                    Ordering::Equal => {
                        exponents.push(VarExp::new(var, exponent_sum(ve.exp, 1)));
                        inserted = true;
                        continue;
                    }
                    Ordering::Greater => {
                        exponents.push(VarExp::new(var, 1));
                        inserted = true;
                    }
                    Ordering::Less => {}
                }
            }
            exponents.push(*ve);
        }
        if !inserted {
            exponents.push(VarExp::new(var, 1));
        }
        Self::from_sorted(exponents, exponent_sum(self.total_degree, 1))
    }

    /// Multiply two monomials.
    ///
    /// # Panics
    ///
    /// Panics if an exponent or the total degree exceeds [`Exponent::MAX`].
    pub fn mul(&self, other: &Monomial) -> Monomial {
        if self.is_constant() {
            return other.clone();
        }
        if other.is_constant() {
            return self.clone();
        }

        let mut exponents: SmallVec<[VarExp; 4]> = SmallVec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.exponents.len() && j < other.exponents.len() {
            let (a, b) = (self.exponents[i], other.exponents[j]);
            match a.var.cmp(&b.var) {
                Ordering::Less => {
                    exponents.push(a);
                    i += 1;
                }
                Ordering::Greater => {
                    exponents.push(b);
                    j += 1;
                }
                Ordering::Equal => {
                    exponents.push(VarExp::new(a.var, exponent_sum(a.exp, b.exp)));
                    i += 1;
                    j += 1;
                }
            }
        }
        exponents.extend_from_slice(&self.exponents[i..]);
        exponents.extend_from_slice(&other.exponents[j..]);

        Self::from_sorted(exponents, exponent_sum(self.total_degree, other.total_degree))
    }

    /// Returns true if `other` divides this monomial.
    pub fn dividable_by(&self, other: &Monomial) -> bool {
        if other.total_degree > self.total_degree || other.num_variables() > self.num_variables()
        {
            return false;
        }
        let mut j = 0;
        for ve in &self.exponents {
            if j == other.exponents.len() {
                return true;
            }
            let d = other.exponents[j];
            match ve.var.cmp(&d.var) {
                Ordering::Equal => {
                    if d.exp > ve.exp {
                        return false;
                    }
                    j += 1;
                }
                // The divisor has a variable this monomial lacks.
                Ordering::Greater => return false,
                Ordering::Less => {}
            }
        }
        j == other.exponents.len()
    }

    /// Divide by `other`.
    ///
    /// Returns `None` if `other` does not divide this monomial. Dividing a
    /// monomial by itself yields the constant monomial 1.
    pub fn div(&self, other: &Monomial) -> Option<Monomial> {
        if other.is_constant() {
            return Some(self.clone());
        }
        if other.total_degree > self.total_degree || other.num_variables() > self.num_variables()
        {
            return None;
        }

        let mut exponents: SmallVec<[VarExp; 4]> = SmallVec::new();
        let mut j = 0;
        for ve in &self.exponents {
            if j < other.exponents.len() && other.exponents[j].var == ve.var {
                let d = other.exponents[j].exp;
                if d > ve.exp {
                    return None;
                }
                if ve.exp > d {
                    exponents.push(VarExp::new(ve.var, ve.exp - d));
                }
                j += 1;
            } else if j < other.exponents.len() && other.exponents[j].var < ve.var {
                return None;
            } else {
                exponents.push(*ve);
            }
        }
        if j < other.exponents.len() {
            return None;
        }

        Some(Self::from_sorted(
            exponents,
            self.total_degree - other.total_degree,
        ))
    }

    /// Divide by a single occurrence of `var`.
    ///
    /// Returns `None` if `var` does not occur.
    pub fn divide_by_var(&self, var: Variable) -> Option<Monomial> {
        let pos = self.exponents.iter().position(|ve| ve.var == var)?;
        let mut exponents = self.exponents.clone();
        if exponents[pos].exp == 1 {
            exponents.remove(pos);
        } else {
            exponents[pos].exp -= 1;
        }
        Some(Self::from_sorted(exponents, self.total_degree - 1))
    }

    /// Remove every power of `var`.
    pub fn drop_variable(&self, var: Variable) -> Monomial {
        let exp = self.exponent_of(var);
        if exp == 0 {
            return self.clone();
        }
        let exponents = self
            .exponents
            .iter()
            .filter(|ve| ve.var != var)
            .copied()
            .collect();
        Self::from_sorted(exponents, self.total_degree - exp)
    }

    /// Greatest common divisor: per-variable minimum exponent.
    pub fn gcd(&self, other: &Monomial) -> Monomial {
        if self.is_constant() || other.is_constant() {
            return Monomial::one();
        }

        let mut exponents: SmallVec<[VarExp; 4]> = SmallVec::new();
        let mut total_degree = 0;
        let (mut i, mut j) = (0, 0);
        while i < self.exponents.len() && j < other.exponents.len() {
            let (a, b) = (self.exponents[i], other.exponents[j]);
            match a.var.cmp(&b.var) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    let exp = a.exp.min(b.exp);
                    exponents.push(VarExp::new(a.var, exp));
                    total_degree += exp;
                    i += 1;
                    j += 1;
                }
            }
        }
        Self::from_sorted(exponents, total_degree)
    }

    /// Least common multiple: per-variable maximum exponent.
    pub fn lcm(lhs: &Monomial, rhs: &Monomial) -> Monomial {
        if lhs.is_constant() {
            return rhs.clone();
        }
        if rhs.is_constant() {
            return lhs.clone();
        }

        let mut exponents: SmallVec<[VarExp; 4]> = SmallVec::new();
        let mut total_degree = 0;
        let (mut i, mut j) = (0, 0);
        while i < lhs.exponents.len() && j < rhs.exponents.len() {
            let (a, b) = (lhs.exponents[i], rhs.exponents[j]);
            let next = match a.var.cmp(&b.var) {
                Ordering::Less => {
                    i += 1;
                    a
                }
                Ordering::Greater => {
                    j += 1;
                    b
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                    VarExp::new(a.var, a.exp.max(b.exp))
                }
            };
            total_degree += next.exp;
            exponents.push(next);
        }
        for ve in lhs.exponents[i..].iter().chain(&rhs.exponents[j..]) {
            total_degree += ve.exp;
            exponents.push(*ve);
        }
        Self::from_sorted(exponents, total_degree)
    }

    /// Compute `lcm(self, other) / other` in a single pass.
    ///
    /// Polynomial gcd and S-polynomial routines need exactly this cofactor.
    pub fn calc_lcm_and_divide_by(&self, other: &Monomial) -> Monomial {
        let mut exponents: SmallVec<[VarExp; 4]> = SmallVec::new();
        let mut total_degree = 0;
        let mut j = 0;
        for ve in &self.exponents {
            while j < other.exponents.len() && other.exponents[j].var < ve.var {
                j += 1;
            }
            if j < other.exponents.len() && other.exponents[j].var == ve.var {
                let d = other.exponents[j].exp;
                if ve.exp > d {
                    exponents.push(VarExp::new(ve.var, ve.exp - d));
                    total_degree += ve.exp - d;
                }
                j += 1;
            } else {
                exponents.push(*ve);
                total_degree += ve.exp;
            }
        }
        Self::from_sorted(exponents, total_degree)
    }

    /// Raise to the power `n`. `m^0` is 1.
    ///
    /// # Panics
    ///
    /// Panics if an exponent or the total degree exceeds [`Exponent::MAX`].
    pub fn pow(&self, n: Exponent) -> Monomial {
        match n {
            0 => Monomial::one(),
            1 => self.clone(),
            _ => {
                let exponents = self
                    .exponents
                    .iter()
                    .map(|ve| VarExp::new(ve.var, exponent_product(ve.exp, n)))
                    .collect();
                Self::from_sorted(exponents, exponent_product(self.total_degree, n))
            }
        }
    }

    /// The product of all variables of this monomial, each with exponent 1.
    pub fn separable_part(&self) -> Monomial {
        let exponents: SmallVec<[VarExp; 4]> = self
            .exponents
            .iter()
            .map(|ve| VarExp::new(ve.var, 1))
            .collect();
        let total_degree = exponents.len() as Exponent;
        Self::from_sorted(exponents, total_degree)
    }

    /// Lexicographic comparison.
    ///
    /// Variables are scanned in increasing order; a smaller variable present
    /// in only one monomial, or a larger exponent of the same variable, makes
    /// that monomial greater. So for `x < y`, `x^2*y > x*y^2`.
    pub fn lex_cmp(&self, other: &Monomial) -> Ordering {
        let (mut i, mut j) = (0, 0);
        while i < self.exponents.len() && j < other.exponents.len() {
            let (a, b) = (self.exponents[i], other.exponents[j]);
            match a.var.cmp(&b.var) {
                Ordering::Less => return Ordering::Greater,
                Ordering::Greater => return Ordering::Less,
                Ordering::Equal => match a.exp.cmp(&b.exp) {
                    Ordering::Equal => {
                        i += 1;
                        j += 1;
                    }
                    ord => return ord,
                },
            }
        }

        if i < self.exponents.len() {
            Ordering::Greater
        } else if j < other.exponents.len() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Graded lexicographic comparison (total degree first, then lex).
    pub fn grlex_cmp(&self, other: &Monomial) -> Ordering {
        self.total_degree
            .cmp(&other.total_degree)
            .then_with(|| self.lex_cmp(other))
    }

    /// Check the representation invariants: strictly increasing variables,
    /// positive exponents and a correct cached degree.
    pub fn is_consistent(&self) -> bool {
        let mut sum = 0;
        for (k, ve) in self.exponents.iter().enumerate() {
            if ve.exp == 0 {
                return false;
            }
            if k > 0 && self.exponents[k - 1].var >= ve.var {
                return false;
            }
            sum += ve.exp;
        }
        sum == self.total_degree
    }

    /// Format this monomial with the variable names of `pool`.
    pub fn display_with<'a>(&'a self, pool: &'a VariablePool) -> impl fmt::Display + 'a {
        MonomialDisplay {
            monomial: self,
            pool: Some(pool),
        }
    }
}

#[inline]
fn exponent_sum(a: Exponent, b: Exponent) -> Exponent {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("exponent overflow: {a} + {b}"))
}

#[inline]
fn exponent_product(a: Exponent, n: Exponent) -> Exponent {
    a.checked_mul(n)
        .unwrap_or_else(|| panic!("exponent overflow: {a} * {n}"))
}

fn compute_hash(exponents: &[VarExp]) -> u64 {
    let mut hasher = FxHasher::default();
    for ve in exponents {
        ve.hash(&mut hasher);
    }
    hasher.finish()
}

impl Default for Monomial {
    fn default() -> Self {
        Self::one()
    }
}

impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        self.total_degree == other.total_degree
            && self.hash == other.hash
            && self.exponents == other.exponents
    }
}

impl Hash for Monomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

/// Monomials are ordered graded-lexicographically.
impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.grlex_cmp(other)
    }
}

impl From<Variable> for Monomial {
    fn from(var: Variable) -> Self {
        Self::from_var(var)
    }
}

struct MonomialDisplay<'a> {
    monomial: &'a Monomial,
    pool: Option<&'a VariablePool>,
}

impl fmt::Display for MonomialDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_constant() {
            return write!(f, "1");
        }
        for (i, ve) in self.monomial.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            match self.pool.and_then(|p| p.name(ve.var)) {
                Some(name) => write!(f, "{name}")?,
                None => write!(f, "{}", ve.var)?,
            }
            if ve.exp > 1 {
                write!(f, "^{}", ve.exp)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MonomialDisplay {
            monomial: self,
            pool: None,
        }
        .fmt(f)
    }
}

/// Monomial ordering used to keep polynomial terms canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum MonomialOrder {
    /// Lexicographic order.
    Lex,
    /// Graded lexicographic order.
    #[default]
    GrLex,
}

impl MonomialOrder {
    /// Compare two monomials using this ordering.
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.lex_cmp(b),
            MonomialOrder::GrLex => a.grlex_cmp(b),
        }
    }
}
