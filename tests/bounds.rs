mod common;

use day10::{bounds::Bounds, matrix::CoefficientMatrix, Machine};
use num::{BigInt, BigUint};

use common::{big_uints, machine};

#[test]
fn bounds_of_sample_machine() {
    let machine =
        Machine::try_from("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}").unwrap();
    let bounds = Bounds::from(&CoefficientMatrix::from(&machine));

    assert_eq!(bounds.as_slice(), big_uints(&[7, 5, 4, 4, 3, 3]).as_slice());
}

#[test]
fn bound_divides_by_multiplicity() {
    let bounds = Bounds::from(&CoefficientMatrix::from(&machine(&[&[0, 0], &[0, 0, 0]], &[5])));

    assert_eq!(bounds.as_slice(), big_uints(&[2, 1]).as_slice());
}

#[test]
fn button_without_effect_is_pinned_to_zero() {
    let bounds = Bounds::from(&CoefficientMatrix::from(&machine(&[&[], &[3], &[0]], &[9])));

    assert_eq!(bounds.as_slice(), big_uints(&[0, 0, 9]).as_slice());
}

#[test]
fn bound_takes_tightest_counter() {
    let bounds = Bounds::from(&CoefficientMatrix::from(&machine(&[&[0, 1, 2]], &[9, 0, 4])));

    assert_eq!(*bounds.get(0), BigUint::from(0u32));
}

#[test]
fn bounds_admit_values() {
    let bounds = Bounds::new(big_uints(&[3, 0]));

    assert!(bounds.admits(0, &BigInt::from(0)));
    assert!(bounds.admits(0, &BigInt::from(3)));
    assert!(!bounds.admits(0, &BigInt::from(4)));
    assert!(!bounds.admits(0, &BigInt::from(-1)));
    assert!(bounds.admits(1, &BigInt::from(0)));
    assert!(!bounds.admits(1, &BigInt::from(1)));
}

#[test]
fn search_size_is_product_of_ranges() {
    let bounds = Bounds::new(big_uints(&[7, 5, 4, 4, 3, 3]));

    assert_eq!(bounds.search_size(&[3, 5]), BigUint::from(20u32));
    assert_eq!(bounds.search_size(&[]), BigUint::from(1u32));
    assert_eq!(
        bounds.search_size(&[0, 1, 2, 3, 4, 5]),
        BigUint::from(8u32 * 6 * 5 * 5 * 4 * 4)
    );
}

#[test]
fn bounds_of_machine_without_buttons() {
    let bounds = Bounds::from(&CoefficientMatrix::from(&machine(&[], &[4, 1])));

    assert!(bounds.is_empty());
    assert_eq!(bounds.len(), 0);
    assert!(!Bounds::new(big_uints(&[0])).is_empty());
}
