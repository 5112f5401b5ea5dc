//! Fuzz target for sample sets
//!
//! This fuzzer applies random insertions, removals, pops and ordering
//! switches and checks that the value and priority stores stay in sync.

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use num_rational::BigRational;
use ralg_cad::{SampleOrdering, SampleSet};
use ralg_math::{isolate_real_roots, RealAlgebraicNumber, UnivariatePolynomial};

/// A random sample set operation
#[derive(Debug, Arbitrary)]
enum SampleOp {
    InsertRational { num: i8, den: u8, root: bool },
    InsertSquareRoot { n: u8, negative: bool, root: bool },
    Remove { idx: u8 },
    Pop,
    SwitchOrdering,
    Simplify,
}

fn square_root(n: u8, negative: bool) -> Option<RealAlgebraicNumber> {
    let p = UnivariatePolynomial::from_integers(&[-i64::from(n % 20 + 1), 0, 1]);
    let roots = isolate_real_roots(&p).ok()?;
    if negative {
        roots.into_iter().next()
    } else {
        roots.into_iter().last()
    }
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);
    let mut set = SampleSet::new(SampleOrdering::IntRatRoot);

    // Limit the number of operations to keep runs short
    for _ in 0..64 {
        let op: SampleOp = match unstructured.arbitrary() {
            Ok(op) => op,
            Err(_) => break,
        };

        match op {
            SampleOp::InsertRational { num, den, root } => {
                let value = BigRational::new(BigInt::from(num), BigInt::from(den % 8 + 1));
                set.insert(RealAlgebraicNumber::from_rational(value).with_root(root));
            }
            SampleOp::InsertSquareRoot { n, negative, root } => {
                if let Some(r) = square_root(n, negative) {
                    set.insert(r.with_root(root));
                }
            }
            SampleOp::Remove { idx } => {
                if !set.is_empty() {
                    let target = set.iter().nth(idx as usize % set.len()).cloned();
                    if let Some(target) = target {
                        let successor = set.remove(&target);
                        if let Some(s) = successor {
                            assert!(s > target);
                        }
                    }
                }
            }
            SampleOp::Pop => {
                let expected = (!set.is_empty()).then(|| set.next().clone());
                assert_eq!(set.pop(), expected);
            }
            SampleOp::SwitchOrdering => {
                let next = match set.ordering() {
                    SampleOrdering::IntRatRoot => SampleOrdering::RatRoot,
                    SampleOrdering::RatRoot => SampleOrdering::IntRatRoot,
                };
                set.set_ordering(next);
            }
            SampleOp::Simplify => {
                let before = set.len();
                set.simplify();
                assert!(set.len() <= before);
            }
        }

        assert!(set.is_consistent());
    }
});
