use hipat_types::prelude::*;

#[test]
fn random_ids_are_unique() {
    let a = Id::new_random();
    let b = Id::new_random();
    assert_ne!(a, b);
    assert!(!a.0.is_empty());
}

#[test]
fn client_ids_carry_prefix() {
    let id = ClientId::new_random();
    assert!(id.0.starts_with("client_"));
}

#[test]
fn ids_serialize_as_plain_strings() {
    let mentor = MentorId("m1".into());
    assert_eq!(serde_json::to_string(&mentor).unwrap(), "\"m1\"");
    let back: MentorId = serde_json::from_str("\"m1\"").unwrap();
    assert_eq!(back, mentor);
}

#[test]
fn now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(b >= a);
    assert!(a > 1_600_000_000_000); // sanity: after 2020
}
