//! Real algebraic numbers taken from nonlinear real arithmetic models.

use num_bigint::BigInt;
use num_rational::BigRational;
use ralg_math::{isolate_real_roots, RanError, RealAlgebraicNumber, UnivariatePolynomial};
use std::cmp::Ordering;
use std::str::FromStr;

fn big(n: &str, d: &str) -> BigRational {
    BigRational::new(
        BigInt::from_str(n).expect("numerator"),
        BigInt::from_str(d).expect("denominator"),
    )
}

fn px() -> UnivariatePolynomial {
    UnivariatePolynomial::from_integers(&[-3528000, 0, 882000, 0, -74760, 0, 3444, 0, -84, 0, 1])
}

fn py() -> UnivariatePolynomial {
    UnivariatePolynomial::from_integers(&[
        -18289152000,
        0,
        4572288000,
        0,
        -387555840,
        0,
        18156096,
        0,
        -556416,
        0,
        11232,
        0,
        -144,
        0,
        1,
    ])
}

fn model_x() -> RealAlgebraicNumber {
    RealAlgebraicNumber::from_bounds(
        &px(),
        big("2927288666429", "1099511627776"),
        big("1463644333215", "549755813888"),
    )
    .expect("isolating interval")
}

fn model_y() -> RealAlgebraicNumber {
    RealAlgebraicNumber::from_bounds(
        &py(),
        big("-147580509", "24822226"),
        big("-73113831", "12411113"),
    )
    .expect("isolating interval")
}

#[test]
fn test_model_numbers_are_interval_represented() {
    let x = model_x();
    let y = model_y();
    assert!(x.is_interval());
    assert!(y.is_interval());
    assert_eq!(x.sign(), Ordering::Greater);
    assert_eq!(y.sign(), Ordering::Less);
    assert!(y < x);
    assert!((x.approximate() - 2.66235).abs() < 1e-3);
    assert!((y.approximate() + 5.914).abs() < 1e-2);
}

#[test]
fn test_coarse_and_fine_isolation_agree() {
    let coarse = RealAlgebraicNumber::from_bounds(&px(), big("85", "32"), big("341", "128"))
        .expect("isolating interval");
    assert_eq!(coarse.try_compare(&model_x()), Ok(Ordering::Equal));

    let isolated = isolate_real_roots(&px()).expect("non-zero polynomial");
    assert_eq!(isolated.len(), 2);
    assert_eq!(isolated[1], model_x());
    assert_eq!(isolated[0].sign(), Ordering::Less);
}

#[test]
fn test_model_numbers_are_irrational() {
    assert_eq!(model_x().find_rational_value(1 << 40), None);
    assert_eq!(model_y().to_rational(), Err(RanError::NotNumeric));
    assert!(!model_y().is_integer());
}

#[test]
fn test_wide_interval_is_rejected() {
    // ]-6, 6[ holds all six real roots of py
    let result = RealAlgebraicNumber::from_bounds(&py(), big("-6", "1"), big("6", "1"));
    assert_eq!(result.err(), Some(RanError::InvalidIsolation { roots: 6 }));
}

#[test]
fn test_golden_ratio_root() {
    // y^2 + y - 1 on ]-212079/131072, -1696631/1048576[
    let p = UnivariatePolynomial::from_integers(&[-1, 1, 1]);
    let y = RealAlgebraicNumber::from_bounds(&p, big("-212079", "131072"), big("-1696631", "1048576"))
        .expect("isolating interval");
    assert!(y.is_interval());
    let expected = -(1.0 + 5f64.sqrt()) / 2.0;
    assert!((y.approximate() - expected).abs() < 1e-5);
    assert!(y < RealAlgebraicNumber::from_integer(-1));
}
