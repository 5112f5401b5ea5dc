//! Ralg CAD - Sample Sets and Lifting Samples
//!
//! The sampling layer of cylindrical algebraic decomposition on top of
//! [`ralg_math`]:
//! - [`SampleSet`]: samples kept in value order and in a swappable priority
//!   order ([`SampleOrdering`]) that decides which sample to process next
//! - [`SampleGenerator`]: samples for every cell induced by the real roots of
//!   a set of univariate polynomials
//! - [`Assignment`] and [`Constraint`]: exact signs of multivariate
//!   polynomials at points with algebraic coordinates
//!
//! # Examples
//!
//! ```
//! use ralg_cad::{lift_samples, SampleOrdering};
//! use ralg_math::UnivariatePolynomial;
//!
//! // x^2 - 2 and x - 1
//! let polys = [
//!     UnivariatePolynomial::from_integers(&[-2, 0, 1]),
//!     UnivariatePolynomial::from_integers(&[-1, 1]),
//! ];
//! let samples = lift_samples(&polys, SampleOrdering::IntRatRoot).unwrap();
//!
//! // three roots and a sample in each of the four sections around them
//! assert_eq!(samples.len(), 7);
//! // the integer root is the best sample to process first
//! assert!(samples.next().is_integer() && samples.next().is_root());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assignment;
pub mod constraint;
pub mod lifting;
pub mod sample_set;

pub use assignment::{Assignment, EvalConfig, EvalError, EvalResult};
pub use constraint::{Constraint, Relation};
pub use lifting::{lift_samples, SampleGenerator};
pub use sample_set::{
    ParseSampleOrderingError, SampleOrdering, SampleSet, SampleSetConfig, SampleSetStats,
    SampleSimplification,
};
