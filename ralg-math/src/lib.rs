//! Ralg Math - Monomials, Polynomials and Real Algebraic Numbers
//!
//! This crate provides the exact arithmetic kernel for nonlinear real
//! arithmetic:
//! - [`VariablePool`]: the authority over variable identity and order
//! - [`Monomial`]: sparse variable/exponent products with lexicographic and
//!   graded orders
//! - [`Polynomial`] and [`UnivariatePolynomial`]: rational polynomials,
//!   Sturm sequences and square-free parts
//! - [`RealAlgebraicNumber`]: exact rationals and isolated roots with exact
//!   comparison
//!
//! # Examples
//!
//! ```
//! use ralg_math::{isolate_real_roots, RealAlgebraicNumber, UnivariatePolynomial};
//!
//! // x^2 - 2
//! let p = UnivariatePolynomial::from_integers(&[-2, 0, 1]);
//! let roots = isolate_real_roots(&p).unwrap();
//! assert_eq!(roots.len(), 2);
//!
//! let one = RealAlgebraicNumber::from_integer(1);
//! assert!(roots[0] < one && one < roots[1]);
//! ```
//!
//! ```
//! use ralg_math::{Monomial, VariablePool};
//!
//! let mut pool = VariablePool::new();
//! let x = pool.fresh("x");
//! let x2 = Monomial::from_var_exp(x, 2);
//! let x3 = Monomial::from_var_exp(x, 3);
//!
//! assert!(x2.div(&x3).is_none());
//! assert_eq!(x3.div(&x2), Some(Monomial::from_var(x)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod algebraic;
pub mod interval;
pub mod monomial;
pub mod polynomial;
pub mod univariate;
pub mod variable;

pub use algebraic::{
    isolate_real_roots, sample_above, sample_below, sample_between, RanConfig, RanError,
    RanResult, RealAlgebraicNumber,
};
pub use interval::RationalInterval;
pub use monomial::{Exponent, Monomial, MonomialOrder, MonomialRef, VarExp};
pub use polynomial::{Polynomial, PolynomialError, Term};
pub use univariate::{SturmSequence, UnivariatePolynomial};
pub use variable::{Variable, VariablePool};
