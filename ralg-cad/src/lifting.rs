//! Sample generation over a stack of univariate polynomials.
//!
//! One CAD lifting step over a variable needs a sample in every cell of the
//! real line induced by the polynomials: every real root, and one point in
//! each open section between and around them.

use crate::sample_set::{SampleOrdering, SampleSet, SampleSetConfig};
use ralg_math::algebraic::isolate::{isolate_real_roots_with, IsolationStats};
use ralg_math::{
    sample_above, sample_below, sample_between, RanResult, RealAlgebraicNumber,
    UnivariatePolynomial,
};
use tracing::debug;

/// Produces the sample set of one lifting step.
#[derive(Debug, Clone, Default)]
pub struct SampleGenerator {
    config: SampleSetConfig,
    simplify: bool,
    stats: IsolationStats,
}

impl SampleGenerator {
    /// Create a generator producing sample sets with `config`.
    pub fn new(config: SampleSetConfig) -> Self {
        Self {
            config,
            simplify: false,
            stats: IsolationStats::default(),
        }
    }

    /// Run a `simplify()` sweep over every produced sample set.
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Accumulated root isolation statistics.
    pub fn stats(&self) -> &IsolationStats {
        &self.stats
    }

    /// Samples for every cell induced by the real roots of `polys`.
    ///
    /// Zero polynomials are skipped. Roots are flagged as such; the section
    /// samples are not.
    pub fn samples(&mut self, polys: &[UnivariatePolynomial]) -> RanResult<SampleSet> {
        let mut set = SampleSet::with_config(self.config.clone());
        for p in polys.iter().filter(|p| !p.is_zero()) {
            let roots = isolate_real_roots_with(p, &self.config.ran, &mut self.stats)?;
            set.insert_range(roots);
        }

        let roots: Vec<RealAlgebraicNumber> = set.iter().cloned().collect();
        match (roots.first(), roots.last()) {
            (Some(first), Some(last)) => {
                set.insert(sample_below(first));
                for pair in roots.windows(2) {
                    let between =
                        sample_between(&pair[0], &pair[1], self.config.ran.max_refinements)?;
                    set.insert(between);
                }
                set.insert(sample_above(last));
            }
            _ => {
                set.insert(RealAlgebraicNumber::from_integer(0));
            }
        }

        if self.simplify {
            set.simplify();
        }
        debug!(
            "{} samples ({} roots) from {} polynomials",
            set.len(),
            roots.len(),
            polys.len()
        );
        Ok(set)
    }
}

/// Samples of one lifting step with the default configuration and the
/// given priority ordering.
pub fn lift_samples(
    polys: &[UnivariatePolynomial],
    ordering: SampleOrdering,
) -> RanResult<SampleSet> {
    let config = SampleSetConfig {
        ordering,
        ..SampleSetConfig::default()
    };
    SampleGenerator::new(config).samples(polys)
}
