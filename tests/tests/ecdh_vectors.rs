//! Published key-agreement vectors, run through full sessions

use std::sync::Arc;

use ecpdh_api::{DhGroup, Settings};
use ecpdh_kex::{EcdhProvider, EcpSettings};
use ecpdh_tests::vectors::{self, EcdhVector};
use rand::rngs::OsRng;

fn provider(x_only: bool) -> EcdhProvider {
    let settings: Arc<dyn Settings> = Arc::new(EcpSettings::new(x_only));
    EcdhProvider::new(settings)
}

fn run_vector(vector: &EcdhVector, x_only: bool) {
    let group = DhGroup::try_from(vector.group).expect("vector group is known");
    let mut session = provider(x_only)
        .create_with_rng(group, &mut OsRng)
        .expect("session creation");

    session
        .set_private_value(&vector.private_bytes())
        .unwrap_or_else(|e| panic!("{}: private value rejected: {}", vector.source, e));
    assert_eq!(
        session.get_my_public_value(),
        vector.public_bytes(),
        "{}: public value",
        vector.source
    );

    session
        .set_other_public_value(&vector.peer_public_bytes())
        .unwrap_or_else(|e| panic!("{}: peer value rejected: {}", vector.source, e));
    let secret = session.get_shared_secret().expect("secret is computed");
    assert_eq!(
        secret.as_slice(),
        vector.shared_secret(x_only).as_slice(),
        "{}: shared secret (x_only = {})",
        vector.source,
        x_only
    );
}

#[test]
fn test_vectors_load() {
    let vectors = vectors::load("ike_ecp").expect("vector file loads");
    assert!(!vectors.is_empty());

    for vector in &vectors {
        let group = DhGroup::try_from(vector.group).expect("vector group is known");
        let width = group.field_element_len().expect("vector group is ECP");
        assert_eq!(vector.public_bytes().len(), 2 * width, "{}", vector.source);
        assert_eq!(vector.peer_public_bytes().len(), 2 * width, "{}", vector.source);
        assert_eq!(vector.shared_secret(true).len(), width, "{}", vector.source);
        assert_eq!(vector.shared_secret(false).len(), 2 * width, "{}", vector.source);
    }
}

#[test]
fn test_vectors_x_only() {
    for vector in vectors::load("ike_ecp").expect("vector file loads") {
        run_vector(&vector, true);
    }
}

#[test]
fn test_vectors_full_point() {
    for vector in vectors::load("ike_ecp").expect("vector file loads") {
        run_vector(&vector, false);
    }
}

#[test]
fn test_missing_vector_file() {
    assert!(vectors::load("no_such_file").is_err());
}
