//! Variables and the variable pool.
//!
//! Monomials and polynomials only store opaque [`Variable`] handles. The
//! handles are handed out by a [`VariablePool`], which is the single authority
//! over variable identity and order. The pool is an explicit value owned by the
//! caller instead of process-wide state, so independent computations (and
//! tests) never observe each other's variables.

use lasso::{Rodeo, Spur};
use rustc_hash::FxHashMap;
use std::fmt;

/// Opaque variable handle.
///
/// Variables are totally ordered by creation index; this order drives every
/// lexicographic monomial comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u32);

impl Variable {
    /// Create a variable handle from a raw index.
    ///
    /// Handles built this way are not registered in any pool; this is meant
    /// for tests and for callers that manage identities themselves.
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// The creation index of this variable.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Registry that creates variables and remembers their names.
#[derive(Debug, Default)]
pub struct VariablePool {
    /// Interned names.
    names: Rodeo,
    /// Name of each variable, indexed by `Variable::index`.
    by_index: Vec<Spur>,
    /// Most recent variable created under a name.
    by_name: FxHashMap<Spur, Variable>,
}

impl VariablePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new variable, even if the name is already in use.
    pub fn fresh(&mut self, name: &str) -> Variable {
        let spur = self.names.get_or_intern(name);
        let var = Variable(self.by_index.len() as u32);
        self.by_index.push(spur);
        self.by_name.insert(spur, var);
        tracing::trace!("fresh variable {} for {:?}", var, name);
        var
    }

    /// Return the variable registered under `name`, creating it if needed.
    pub fn get_or_create(&mut self, name: &str) -> Variable {
        match self.lookup(name) {
            Some(var) => var,
            None => self.fresh(name),
        }
    }

    /// Look up the most recent variable with the given name.
    pub fn lookup(&self, name: &str) -> Option<Variable> {
        let spur = self.names.get(name)?;
        self.by_name.get(&spur).copied()
    }

    /// Name of a variable, if it was created by this pool.
    pub fn name(&self, var: Variable) -> Option<&str> {
        self.by_index
            .get(var.0 as usize)
            .map(|spur| self.names.resolve(spur))
    }

    /// Number of variables created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    /// Returns true if no variable was created yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// Iterate over all variables in creation order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        (0..self.by_index.len() as u32).map(Variable)
    }
}
