//! Sanity checks on the RFC 5639 domain parameters

use ecpdh_algorithms::ec::{CurveGroup, EcPoint};
use ecpdh_kex::BrainpoolGroupBuilder;
use ecpdh_params::traditional::ecp::{BRAINPOOL_CURVES, NIST_CURVES};

#[test]
fn test_brainpool_groups_build() {
    for params in BRAINPOOL_CURVES.iter() {
        let group = BrainpoolGroupBuilder::build(params)
            .unwrap_or_else(|e| panic!("{} does not build: {}", params.name, e));
        assert_eq!(group.name(), params.name);
        assert_eq!(group.field_element_len(), params.p.len());
        assert_eq!(group.cofactor(), 1);
        assert_eq!(group.order_bits(), params.p.len() * 8);
    }
}

#[test]
fn test_brainpool_generator_has_prime_order() {
    for params in BRAINPOOL_CURVES.iter() {
        let group = BrainpoolGroupBuilder::build(params).unwrap();
        let generator = group.generator();
        assert!(group.is_on_curve(&generator), "{}", params.name);
        assert_eq!(
            group.mul_by_order(&generator).unwrap(),
            EcPoint::Identity,
            "{}: q·G is not the identity",
            params.name
        );
    }
}

#[test]
fn test_parameter_widths() {
    for params in BRAINPOOL_CURVES.iter().chain(NIST_CURVES.iter()) {
        let width = params.field_element_len();
        assert_eq!(params.a.len(), width, "{}", params.name);
        assert_eq!(params.b.len(), width, "{}", params.name);
        assert_eq!(params.x.len(), width, "{}", params.name);
        assert_eq!(params.y.len(), width, "{}", params.name);
        assert_eq!(params.cofactor, 1, "{}", params.name);
    }
}
