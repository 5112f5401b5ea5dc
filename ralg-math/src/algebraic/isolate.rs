//! Real root isolation.
//!
//! Rational roots are split off first with the rational root theorem and
//! returned in numeric representation. The remaining square-free factor is
//! isolated by Sturm-sequence bisection inside the Cauchy bound.

use super::number::{RanConfig, RanError, RanResult, RealAlgebraicNumber};
use crate::interval::RationalInterval;
use crate::univariate::{SturmSequence, UnivariatePolynomial};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use tracing::debug;

/// Statistics for root isolation.
#[derive(Debug, Clone, Default)]
pub struct IsolationStats {
    /// Rational roots found by the rational root theorem.
    pub rational_roots: u64,
    /// Roots returned in interval representation.
    pub interval_roots: u64,
    /// Bisection steps.
    pub bisections: u64,
}

/// All distinct real roots of `p` in ascending order, flagged as roots.
pub fn isolate_real_roots(p: &UnivariatePolynomial) -> RanResult<Vec<RealAlgebraicNumber>> {
    isolate_real_roots_with(p, &RanConfig::default(), &mut IsolationStats::default())
}

/// Root isolation with explicit configuration and statistics.
pub fn isolate_real_roots_with(
    p: &UnivariatePolynomial,
    config: &RanConfig,
    stats: &mut IsolationStats,
) -> RanResult<Vec<RealAlgebraicNumber>> {
    if p.is_zero() {
        return Err(RanError::ZeroPolynomial);
    }
    let mut sf = p.square_free_part();
    let mut roots = Vec::new();

    if let Some(rationals) = sf.rational_roots(config.rational_root_limit) {
        for r in rationals {
            let linear = UnivariatePolynomial::new(vec![-r.clone(), BigRational::one()]);
            if let Ok((quotient, _)) = sf.div_rem(&linear) {
                sf = quotient;
            }
            roots.push(RealAlgebraicNumber::Numeric {
                value: r,
                is_root: true,
            });
            stats.rational_roots += 1;
        }
        sf = sf.primitive();
    }

    if !sf.is_constant() {
        isolate_by_bisection(&sf, &mut roots, stats);
    }

    roots.sort();
    debug!("isolated {} real roots of {}", roots.len(), p);
    Ok(roots)
}

/// Push the real roots of the square-free, non-constant `p`.
fn isolate_by_bisection(
    p: &UnivariatePolynomial,
    roots: &mut Vec<RealAlgebraicNumber>,
    stats: &mut IsolationStats,
) {
    let sturm = SturmSequence::new(p);
    let bound = p.cauchy_bound();
    let two = BigRational::from_integer(BigInt::from(2));

    let mut pending = vec![(-bound.clone(), bound)];
    while let Some((lower, upper)) = pending.pop() {
        match sturm.count_roots(&lower, &upper) {
            0 => {}
            1 => {
                let interval = RationalInterval::new(lower, upper)
                    .unwrap_or_else(|| unreachable!("pending intervals are non-empty"));
                let root = RealAlgebraicNumber::isolated(p.clone(), interval, true);
                if root.is_interval() {
                    stats.interval_roots += 1;
                } else {
                    stats.rational_roots += 1;
                }
                roots.push(root);
            }
            _ => {
                stats.bisections += 1;
                let mid = (&lower + &upper) / &two;
                if p.is_root(&mid) {
                    stats.rational_roots += 1;
                    roots.push(RealAlgebraicNumber::Numeric {
                        value: mid.clone(),
                        is_root: true,
                    });
                }
                pending.push((lower, mid.clone()));
                pending.push((mid, upper));
            }
        }
    }
}
