//! Real algebraic numbers.
//!
//! Numbers are either exact rationals or roots of square-free polynomials
//! isolated by open rational intervals. Comparison is exact. Root isolation
//! and sample-point selection live in the submodules.

pub mod isolate;
pub mod number;
pub mod sample;

pub use isolate::{isolate_real_roots, isolate_real_roots_with, IsolationStats};
pub use number::{
    IntervalRepr, RanConfig, RanError, RanResult, RealAlgebraicNumber, DEFAULT_MAX_REFINEMENTS,
    DEFAULT_RATIONAL_ROOT_LIMIT,
};
pub use sample::{sample_above, sample_below, sample_between, simplest_rational_between};
