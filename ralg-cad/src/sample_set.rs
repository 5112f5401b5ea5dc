//! Sample sets for CAD lifting.
//!
//! A [`SampleSet`] keeps real algebraic samples under two orders at once:
//!
//! - the value order, which is the identity of a sample (equal values are
//!   stored once) and drives iteration;
//! - a priority order chosen by [`SampleOrdering`], which decides which sample
//!   [`SampleSet::next`] hands out.
//!
//! Both orders live in their own `BTreeSet`. Every insertion and removal
//! touches both, and the priority store is rebuilt whenever the ordering
//! changes.

use ralg_math::{RanConfig, RealAlgebraicNumber};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;
use std::str::FromStr;
use tracing::{debug, trace};

/// Priority order of the samples in a [`SampleSet`].
///
/// Each ordering is a cascade of properties. A sample with the property comes
/// before a sample without it, later stages only break ties of earlier ones,
/// and samples agreeing on every property are ordered by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleOrdering {
    /// Integers, then other rationals, then interval-represented samples;
    /// roots before non-roots within each class.
    #[default]
    IntRatRoot,
    /// Rationals before interval-represented samples, roots before non-roots.
    RatRoot,
}

impl SampleOrdering {
    /// All orderings.
    pub const ALL: [SampleOrdering; 2] = [SampleOrdering::IntRatRoot, SampleOrdering::RatRoot];

    /// Rank of a sample under this ordering; smaller ranks come first.
    fn rank(self, sample: &RealAlgebraicNumber) -> Rank {
        let integer = match self {
            SampleOrdering::IntRatRoot => !sample.is_integer(),
            SampleOrdering::RatRoot => false,
        };
        Rank(integer, !sample.is_numeric(), !sample.is_root())
    }

    /// Compare two samples under this ordering.
    pub fn compare(self, a: &RealAlgebraicNumber, b: &RealAlgebraicNumber) -> Ordering {
        self.rank(a).cmp(&self.rank(b)).then_with(|| a.cmp(b))
    }

    /// Returns true if no sample can be better than `sample` in the property
    /// that matters most for this ordering.
    pub fn is_optimal(self, sample: &RealAlgebraicNumber) -> bool {
        match self {
            SampleOrdering::IntRatRoot => sample.is_integer(),
            SampleOrdering::RatRoot => sample.is_numeric(),
        }
    }
}

impl fmt::Display for SampleOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleOrdering::IntRatRoot => write!(f, "Integer-Rational-Root"),
            SampleOrdering::RatRoot => write!(f, "Rational-Root"),
        }
    }
}

/// Error for unknown ordering names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sample ordering `{0}`")]
pub struct ParseSampleOrderingError(pub String);

impl FromStr for SampleOrdering {
    type Err = ParseSampleOrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleOrdering::ALL
            .into_iter()
            .find(|o| o.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSampleOrderingError(s.to_string()))
    }
}

/// Class flags of a sample, `false` sorting first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank(bool, bool, bool);

/// Entry of the priority store.
#[derive(Clone)]
struct PriorityKey {
    rank: Rank,
    sample: RealAlgebraicNumber,
}

impl PriorityKey {
    fn new(ordering: SampleOrdering, sample: RealAlgebraicNumber) -> Self {
        Self {
            rank: ordering.rank(&sample),
            sample,
        }
    }
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.sample.cmp(&other.sample))
    }
}

/// Configuration for sample sets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSetConfig {
    /// Initial priority ordering.
    pub ordering: SampleOrdering,
    /// Settings for simplifying and generating samples.
    ///
    /// `rational_root_limit` bounds [`SampleSet::simplify`] and
    /// `max_refinements` bounds the section samples built by
    /// [`SampleGenerator`](crate::SampleGenerator). Value comparisons inside
    /// the set go through the `Ord` of [`RealAlgebraicNumber`] and always use
    /// the default refinement budget.
    pub ran: RanConfig,
}

/// Statistics for sample sets.
#[derive(Debug, Clone, Default)]
pub struct SampleSetStats {
    /// Samples inserted.
    pub inserts: u64,
    /// Insertions of values already present.
    pub duplicates: u64,
    /// Samples removed.
    pub removals: u64,
    /// Rebuilds of the priority store.
    pub rebuilds: u64,
    /// Interval-represented samples replaced by numeric ones.
    pub simplifications: u64,
}

/// Replacements made by [`SampleSet::simplify`], old sample to new sample.
pub type SampleSimplification = BTreeMap<RealAlgebraicNumber, RealAlgebraicNumber>;

/// Real algebraic samples under a value order and a priority order.
#[derive(Clone, Default)]
pub struct SampleSet {
    /// Samples in ascending value order.
    samples: BTreeSet<RealAlgebraicNumber>,
    /// The same samples in priority order.
    queue: BTreeSet<PriorityKey>,
    /// Configuration; `config.ordering` orders `queue`.
    config: SampleSetConfig,
    /// Statistics.
    stats: SampleSetStats,
}

impl SampleSet {
    /// Create an empty set with the given priority ordering.
    pub fn new(ordering: SampleOrdering) -> Self {
        Self::with_config(SampleSetConfig {
            ordering,
            ..SampleSetConfig::default()
        })
    }

    /// Create an empty set with the given configuration.
    pub fn with_config(config: SampleSetConfig) -> Self {
        Self {
            samples: BTreeSet::new(),
            queue: BTreeSet::new(),
            config,
            stats: SampleSetStats::default(),
        }
    }

    /// Insert a sample.
    ///
    /// Returns the stored sample and whether it was new. If an equal value is
    /// already present, that sample stays and is returned.
    pub fn insert(&mut self, sample: RealAlgebraicNumber) -> (RealAlgebraicNumber, bool) {
        debug_assert!(self.is_consistent());
        if let Some(existing) = self.samples.get(&sample) {
            self.stats.duplicates += 1;
            return (existing.clone(), false);
        }
        trace!("inserting sample {}", sample);
        self.queue
            .insert(PriorityKey::new(self.config.ordering, sample.clone()));
        self.samples.insert(sample.clone());
        self.stats.inserts += 1;
        (sample, true)
    }

    /// Insert every sample of an iterator.
    pub fn insert_range(&mut self, samples: impl IntoIterator<Item = RealAlgebraicNumber>) {
        for sample in samples {
            self.insert(sample);
        }
    }

    /// Insert every sample of another set.
    pub fn insert_all(&mut self, other: &SampleSet) {
        self.insert_range(other.iter().cloned());
    }

    /// Remove the member equal to `sample` and return its successor in value
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if no member equals `sample`.
    pub fn remove(&mut self, sample: &RealAlgebraicNumber) -> Option<RealAlgebraicNumber> {
        let stored = self
            .samples
            .take(sample)
            .unwrap_or_else(|| panic!("{} is not a member of the sample set", sample));
        self.remove_from_queue(&stored);
        self.stats.removals += 1;
        self.samples
            .range((Bound::Excluded(&stored), Bound::Unbounded))
            .next()
            .cloned()
    }

    /// Remove a stored sample from the priority store. The key is rebuilt
    /// from the stored sample, since the rank depends on its representation.
    fn remove_from_queue(&mut self, stored: &RealAlgebraicNumber) {
        let removed = self
            .queue
            .remove(&PriorityKey::new(self.config.ordering, stored.clone()));
        debug_assert!(removed, "priority store lost {}", stored);
    }

    /// The best sample under the current ordering.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn next(&self) -> &RealAlgebraicNumber {
        match self.queue.first() {
            Some(key) => &key.sample,
            None => panic!("next() on an empty sample set"),
        }
    }

    /// Switch to `ordering` and return the best sample under it.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn next_with(&mut self, ordering: SampleOrdering) -> &RealAlgebraicNumber {
        self.set_ordering(ordering);
        self.next()
    }

    /// Returns true if the best sample is optimal for the current ordering.
    pub fn has_optimal(&self) -> bool {
        self.queue
            .first()
            .is_some_and(|key| self.config.ordering.is_optimal(&key.sample))
    }

    /// Remove and return the best sample.
    pub fn pop(&mut self) -> Option<RealAlgebraicNumber> {
        let key = self.queue.pop_first()?;
        let removed = self.samples.remove(&key.sample);
        debug_assert!(removed, "value store lost {}", key.sample);
        self.stats.removals += 1;
        Some(key.sample)
    }

    /// Change the priority ordering, rebuilding the priority store if needed.
    pub fn set_ordering(&mut self, ordering: SampleOrdering) {
        if ordering == self.config.ordering {
            return;
        }
        debug!(
            "reordering {} samples from {} to {}",
            self.samples.len(),
            self.config.ordering,
            ordering
        );
        self.queue = self
            .samples
            .iter()
            .map(|s| PriorityKey::new(ordering, s.clone()))
            .collect();
        self.config.ordering = ordering;
        self.stats.rebuilds += 1;
    }

    /// Replace the member equal to `from` by the numeric sample `to`.
    ///
    /// `to` takes over the root flag of the replaced member. Returns false if
    /// no member equals `from`, if `to` is not numeric or if it has a
    /// different value.
    pub fn simplify_sample(&mut self, from: &RealAlgebraicNumber, to: RealAlgebraicNumber) -> bool {
        let Some(stored) = self.samples.get(from).cloned() else {
            return false;
        };
        let Some(value) = to.value() else {
            return false;
        };
        if !stored.try_simplify_to_numeric(value) {
            return false;
        }
        let to = to.with_root(stored.is_root());
        debug!("simplifying sample {} to {}", stored, to);

        self.samples.remove(&stored);
        self.remove_from_queue(&stored);
        self.queue.insert(PriorityKey::new(self.config.ordering, to.clone()));
        self.samples.insert(to);
        self.stats.simplifications += 1;
        true
    }

    /// Replace every interval-represented sample that is rational by its
    /// numeric representation.
    ///
    /// Returns the replacements and whether there were any.
    pub fn simplify(&mut self) -> (SampleSimplification, bool) {
        let limit = self.config.ran.rational_root_limit;
        let candidates: Vec<RealAlgebraicNumber> = self
            .samples
            .iter()
            .filter(|s| s.is_interval())
            .cloned()
            .collect();

        let mut replaced = SampleSimplification::new();
        for sample in candidates {
            if let Some(numeric) = sample.to_numeric(limit) {
                if self.simplify_sample(&sample, numeric.clone()) {
                    replaced.insert(sample, numeric);
                }
            }
        }
        let changed = !replaced.is_empty();
        (replaced, changed)
    }

    /// Returns true if a member equals `sample`.
    pub fn contains(&self, sample: &RealAlgebraicNumber) -> bool {
        self.samples.contains(sample)
    }

    /// Returns true if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Samples in ascending value order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RealAlgebraicNumber> + '_ {
        self.samples.iter()
    }

    /// Smallest sample by value.
    pub fn first(&self) -> Option<&RealAlgebraicNumber> {
        self.samples.first()
    }

    /// Largest sample by value.
    pub fn last(&self) -> Option<&RealAlgebraicNumber> {
        self.samples.last()
    }

    /// Current priority ordering.
    #[inline]
    pub fn ordering(&self) -> SampleOrdering {
        self.config.ordering
    }

    /// Configuration.
    #[inline]
    pub fn config(&self) -> &SampleSetConfig {
        &self.config
    }

    /// Statistics.
    #[inline]
    pub fn stats(&self) -> &SampleSetStats {
        &self.stats
    }

    /// Remove all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.queue.clear();
    }

    /// Check that both stores hold the same samples and that every priority
    /// key matches the current ordering.
    pub fn is_consistent(&self) -> bool {
        self.samples.len() == self.queue.len()
            && self.queue.iter().all(|key| {
                key.rank == self.config.ordering.rank(&key.sample)
                    && self.samples.contains(&key.sample)
            })
    }
}

impl Extend<RealAlgebraicNumber> for SampleSet {
    fn extend<T: IntoIterator<Item = RealAlgebraicNumber>>(&mut self, iter: T) {
        self.insert_range(iter);
    }
}

impl FromIterator<RealAlgebraicNumber> for SampleSet {
    fn from_iter<T: IntoIterator<Item = RealAlgebraicNumber>>(iter: T) -> Self {
        let mut set = SampleSet::default();
        set.insert_range(iter);
        set
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a RealAlgebraicNumber;
    type IntoIter = std::collections::btree_set::Iter<'a, RealAlgebraicNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, s) in self.samples.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleSet")
            .field("ordering", &self.config.ordering)
            .field("samples", &self.samples)
            .finish()
    }
}
