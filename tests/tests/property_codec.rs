//! Property tests for public-value handling

use std::sync::Arc;

use ecpdh_api::error::ErrorKind;
use ecpdh_api::DhGroup;
use ecpdh_kex::{CoordinateCodec, CurveRegistry, EcdhProvider, EcpSettings};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn ecp_group() -> impl Strategy<Value = DhGroup> {
    prop::sample::select(DhGroup::ECP_GROUPS.to_vec())
}

fn wrong_length(group: DhGroup) -> impl Strategy<Value = Vec<u8>> {
    let expected = group.public_value_len().unwrap_or(0);
    (0usize..200)
        .prop_filter("length must differ", move |len| *len != expected)
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn right_length_noise(group: DhGroup) -> impl Strategy<Value = Vec<u8>> {
    let len = group.public_value_len().unwrap_or(0);
    prop::collection::vec(any::<u8>(), len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fresh_public_values_decode(group in ecp_group(), seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let session = EcdhProvider::default().create_with_rng(group, &mut rng).unwrap();
        let value = session.get_my_public_value();

        let curve = CurveRegistry::resolve(group).unwrap();
        let point = CoordinateCodec::decode(curve.as_ref(), &value).unwrap();
        let encoded = CoordinateCodec::encode(curve.as_ref(), &point, false).unwrap();
        prop_assert_eq!(encoded.as_slice(), value.as_slice());
    }

    #[test]
    fn wrong_lengths_are_malformed(
        (group, value) in ecp_group().prop_flat_map(|g| (Just(g), wrong_length(g)))
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut session = EcdhProvider::default().create_with_rng(group, &mut rng).unwrap();
        let err = session.set_other_public_value(&value).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MalformedInput);
        prop_assert!(!session.is_computed());
    }

    #[test]
    fn random_coordinates_are_not_points(
        (group, value) in ecp_group().prop_flat_map(|g| (Just(g), right_length_noise(g)))
    ) {
        let curve = CurveRegistry::resolve(group).unwrap();
        let err = CoordinateCodec::decode(curve.as_ref(), &value).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidPoint);
    }

    #[test]
    fn failed_exchange_clears_previous_secret(
        (group, noise) in ecp_group().prop_flat_map(|g| (Just(g), right_length_noise(g))),
        x_only in any::<bool>(),
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let provider = EcdhProvider::new(Arc::new(EcpSettings::new(x_only)));
        let mut session = provider.create_with_rng(group, &mut rng).unwrap();
        let peer = provider.create_with_rng(group, &mut rng).unwrap();

        session.set_other_public_value(&peer.get_my_public_value()).unwrap();
        prop_assert!(session.is_computed());

        prop_assert!(session.set_other_public_value(&noise).is_err());
        prop_assert!(!session.is_computed());
        prop_assert_eq!(session.get_shared_secret().unwrap_err(), ecpdh_api::Error::NotComputed);
    }
}
