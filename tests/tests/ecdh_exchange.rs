//! End-to-end exchanges between two sessions on every ECP group

use std::sync::Arc;

use ecpdh_api::error::ErrorKind;
use ecpdh_api::{DhGroup, DiffieHellman, Settings};
use ecpdh_kex::{x_coordinate_only_key, EcdhProvider, EcdhSession, EcpSettings, MemorySettings};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn exchange(provider: &EcdhProvider, group: DhGroup, rng: &mut ChaCha20Rng) -> (EcdhSession, EcdhSession) {
    let mut alice = provider.create_with_rng(group, rng).unwrap();
    let mut bob = provider.create_with_rng(group, rng).unwrap();

    let alice_value = alice.get_my_public_value();
    let bob_value = bob.get_my_public_value();
    alice.set_other_public_value(&bob_value).unwrap();
    bob.set_other_public_value(&alice_value).unwrap();
    (alice, bob)
}

#[test]
fn test_exchange_all_groups_both_formats() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x1ce);

    for x_only in [true, false] {
        let provider = EcdhProvider::new(Arc::new(EcpSettings::new(x_only)));
        for &group in provider.supported_groups() {
            let width = group.field_element_len().unwrap();
            let (alice, bob) = exchange(&provider, group, &mut rng);

            assert_eq!(alice.get_my_public_value().len(), 2 * width, "{}", group);
            let alice_secret = alice.get_shared_secret().unwrap();
            let bob_secret = bob.get_shared_secret().unwrap();
            assert_eq!(alice_secret, bob_secret, "{}", group);

            let expected_len = if x_only { width } else { 2 * width };
            assert_eq!(alice_secret.len(), expected_len, "{} x_only={}", group, x_only);
        }
    }
}

#[test]
fn test_x_only_secret_is_prefix_of_full_secret() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let settings = Arc::new(MemorySettings::new());
    let key = x_coordinate_only_key("charon");
    let provider = EcdhProvider::new(settings.clone());

    for &group in provider.supported_groups() {
        let (mut alice, bob) = exchange(&provider, group, &mut rng);
        let full_peer = bob.get_my_public_value();

        settings.set(key.clone(), true);
        alice.set_other_public_value(&full_peer).unwrap();
        let x_only = alice.get_shared_secret().unwrap();

        settings.set(key.clone(), false);
        alice.set_other_public_value(&full_peer).unwrap();
        let full = alice.get_shared_secret().unwrap();

        assert_eq!(&full.as_slice()[..x_only.len()], x_only.as_slice(), "{}", group);
        assert_eq!(full.len(), 2 * x_only.len(), "{}", group);
    }
}

#[test]
fn test_settings_from_json() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let settings: EcpSettings =
        serde_json::from_str(r#"{"namespace": "pluto", "ecp_x_coordinate_only": false}"#).unwrap();
    let settings: Arc<dyn Settings> = Arc::new(settings);

    // Sessions looking in the configured namespace see the full point
    let provider = EcdhProvider::new(settings.clone()).with_namespace("pluto");
    let (alice, _) = exchange(&provider, DhGroup::Ecp384, &mut rng);
    assert_eq!(alice.get_shared_secret().unwrap().len(), 96);

    // The default namespace is not configured, so the default format applies
    let provider = EcdhProvider::new(settings);
    let (alice, _) = exchange(&provider, DhGroup::Ecp384, &mut rng);
    assert_eq!(alice.get_shared_secret().unwrap().len(), 48);
}

#[test]
fn test_cross_group_values_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let provider = EcdhProvider::default();

    // Same width, different curve: the value is well-formed but off-curve
    let mut nist = provider.create_with_rng(DhGroup::Ecp256, &mut rng).unwrap();
    let brainpool = provider.create_with_rng(DhGroup::Ecp256Bp, &mut rng).unwrap();
    let err = nist.set_other_public_value(&brainpool.get_my_public_value()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPoint);
    assert!(!nist.is_computed());

    // Different width is a length error
    let p384 = provider.create_with_rng(DhGroup::Ecp384, &mut rng).unwrap();
    let err = nist.set_other_public_value(&p384.get_my_public_value()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_unsupported_groups() {
    let provider = EcdhProvider::default();
    for id in [14u16, 15, 31, 32] {
        let err = provider.create_by_id(id).unwrap_err();
        assert_eq!(err, ecpdh_api::Error::UnsupportedGroup { group: id });
    }
    assert_eq!(provider.create_by_id(99).unwrap_err().kind(), ErrorKind::UnsupportedGroup);
}

#[test]
fn test_trait_objects_interoperate() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let provider = EcdhProvider::default();

    let mut sessions: Vec<Box<dyn DiffieHellman>> = DhGroup::ECP_GROUPS
        .iter()
        .map(|&group| Box::new(provider.create_with_rng(group, &mut rng).unwrap()) as Box<dyn DiffieHellman>)
        .collect();
    let peers: Vec<EcdhSession> = DhGroup::ECP_GROUPS
        .iter()
        .map(|&group| provider.create_with_rng(group, &mut rng).unwrap())
        .collect();

    for (session, peer) in sessions.iter_mut().zip(peers.iter()) {
        assert_eq!(session.dh_group(), peer.get_dh_group());
        assert!(session.shared_secret().is_err());
        session.set_other_public_value(&peer.get_my_public_value()).unwrap();
        let secret = session.shared_secret().unwrap();
        assert_eq!(secret.len(), session.dh_group().field_element_len().unwrap());
    }
}

#[test]
fn test_os_rng_sessions() {
    let provider = EcdhProvider::default();
    let mut alice = provider.create(DhGroup::Ecp521).unwrap();
    let mut bob = provider.create(DhGroup::Ecp521).unwrap();
    assert_ne!(alice.get_my_public_value(), bob.get_my_public_value());

    alice.set_other_public_value(&bob.get_my_public_value()).unwrap();
    bob.set_other_public_value(&alice.get_my_public_value()).unwrap();
    assert_eq!(alice.get_shared_secret().unwrap(), bob.get_shared_secret().unwrap());
    assert_eq!(alice.get_shared_secret().unwrap().len(), 66);
}
