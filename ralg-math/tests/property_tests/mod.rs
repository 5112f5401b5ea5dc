//! Property-based tests for ralg-math
//!
//! This module contains property tests for:
//! - Monomial arithmetic and orderings
//! - Multivariate polynomial arithmetic
//! - Real algebraic number comparison and refinement

mod algebraic_properties;
mod monomial_properties;
mod polynomial_properties;
