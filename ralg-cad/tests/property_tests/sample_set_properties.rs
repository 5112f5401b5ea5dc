//! Property-based tests for sample sets

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_cad::sample_set::*;
use ralg_math::{isolate_real_roots, RealAlgebraicNumber, UnivariatePolynomial};
use std::cmp::Ordering;

/// Roots of `x^2 - n` and small rationals, each possibly flagged as a root
fn samples_strategy() -> impl Strategy<Value = Vec<RealAlgebraicNumber>> {
    prop::collection::vec(
        prop_oneof![
            (1i64..10, any::<bool>()).prop_map(|(n, root)| {
                let p = UnivariatePolynomial::from_integers(&[-n, 0, 1]);
                isolate_real_roots(&p)
                    .unwrap()
                    .into_iter()
                    .map(|r| r.with_root(root))
                    .collect::<Vec<_>>()
            }),
            (-8i64..8, 1i64..4, any::<bool>()).prop_map(|(n, d, root)| {
                vec![RealAlgebraicNumber::from_rational(BigRational::new(
                    BigInt::from(n),
                    BigInt::from(d),
                ))
                .with_root(root)]
            }),
        ],
        1..8,
    )
    .prop_map(|groups| groups.into_iter().flatten().collect())
}

fn ordering_strategy() -> impl Strategy<Value = SampleOrdering> {
    prop_oneof![Just(SampleOrdering::IntRatRoot), Just(SampleOrdering::RatRoot)]
}

#[cfg(test)]
mod sample_set_order_properties {
    use super::*;

    proptest! {
        /// The value order is strictly increasing and both stores agree
        #[test]
        fn value_order_strictly_increasing(
            samples in samples_strategy(),
            ordering in ordering_strategy()
        ) {
            let set: SampleSet = {
                let mut set = SampleSet::new(ordering);
                set.insert_range(samples.iter().cloned());
                set
            };
            prop_assert!(set.is_consistent());
            let values: Vec<_> = set.iter().collect();
            for pair in values.windows(2) {
                prop_assert_eq!(pair[0].cmp(pair[1]), Ordering::Less);
            }
            for s in &samples {
                prop_assert!(set.contains(s));
            }
        }

        /// next() is the minimum under the priority ordering
        #[test]
        fn next_is_priority_minimum(
            samples in samples_strategy(),
            ordering in ordering_strategy()
        ) {
            let mut set = SampleSet::new(ordering);
            set.insert_range(samples);
            let best = set.next().clone();
            for s in set.iter() {
                prop_assert_ne!(ordering.compare(&best, s), Ordering::Greater);
            }
            prop_assert_eq!(set.has_optimal(), ordering.is_optimal(&best));
        }

        /// pop() drains the set in priority order
        #[test]
        fn pop_drains_in_priority_order(
            samples in samples_strategy(),
            ordering in ordering_strategy()
        ) {
            let mut set = SampleSet::new(ordering);
            set.insert_range(samples);
            let len = set.len();
            let mut drained = Vec::new();
            while let Some(s) = set.pop() {
                drained.push(s);
            }
            prop_assert_eq!(drained.len(), len);
            for pair in drained.windows(2) {
                prop_assert_eq!(ordering.compare(&pair[0], &pair[1]), Ordering::Less);
            }
        }

        /// Removal keeps the stores in sync and returns the successor
        #[test]
        fn remove_returns_successor(samples in samples_strategy(), pick in any::<prop::sample::Index>()) {
            let mut set = SampleSet::new(SampleOrdering::IntRatRoot);
            set.insert_range(samples);
            let values: Vec<_> = set.iter().cloned().collect();
            let i = pick.index(values.len());
            let successor = set.remove(&values[i]);
            prop_assert_eq!(successor.as_ref(), values.get(i + 1));
            prop_assert!(!set.contains(&values[i]));
            prop_assert_eq!(set.len(), values.len() - 1);
            prop_assert!(set.is_consistent());
        }

        /// Changing the ordering keeps the samples and reorders the queue
        #[test]
        fn set_ordering_preserves_contents(
            samples in samples_strategy(),
            from in ordering_strategy(),
            to in ordering_strategy()
        ) {
            let mut set = SampleSet::new(from);
            set.insert_range(samples);
            let before: Vec<_> = set.iter().cloned().collect();
            set.set_ordering(to);
            let after: Vec<_> = set.iter().cloned().collect();
            prop_assert_eq!(before, after);
            prop_assert_eq!(set.ordering(), to);
            prop_assert!(set.is_consistent());

            let mut rebuilt = SampleSet::new(to);
            rebuilt.insert_range(set.iter().cloned());
            prop_assert_eq!(set.next(), rebuilt.next());
        }
    }
}
