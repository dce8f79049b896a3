//! Property tests for the `UserDetails` wire contract.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use concord_api::{DecodeError, Sequence, UserDetails, Value, WireRecord};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Optional text, biased towards the interesting cases (absent, empty).
fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        ".{0,24}".prop_map(Some),
    ]
}

fn arb_record() -> impl Strategy<Value = UserDetails> {
    (arb_text(), arb_text()).prop_map(|(name, email)| {
        UserDetails::builder().with_name(name).with_email(email).build()
    })
}

/// Records from a two-value domain per field, so equal chains are common.
fn arb_small_record() -> impl Strategy<Value = UserDetails> {
    let text = || prop_oneof![Just(None), Just(Some("x".to_owned()))];
    (text(), text()).prop_map(|(name, email)| {
        UserDetails::builder().with_name(name).with_email(email).build()
    })
}

/// Any element that is neither text nor the absent marker.
fn arb_non_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int64),
        any::<f64>().prop_map(Value::Float64),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::Bytes),
        Just(Value::List(vec![])),
        Just(Value::Map(vec![])),
    ]
}

fn fingerprint(r: &UserDetails) -> u64 {
    let mut h = DefaultHasher::new();
    r.hash(&mut h);
    h.finish()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decode_inverts_encode(record in arb_record()) {
        let decoded = UserDetails::from_sequence(record.to_sequence());
        prop_assert_eq!(decoded, Ok(record));
    }

    #[test]
    fn encoding_is_always_name_then_email(name in arb_text(), email in arb_text()) {
        let record = UserDetails::builder()
            .with_email(email.clone())
            .with_name(name.clone())
            .build();
        let seq = record.to_sequence();
        prop_assert_eq!(seq.len(), 2);
        prop_assert_eq!(seq, Sequence(vec![Value::from(name), Value::from(email)]));
    }

    #[test]
    fn equality_agrees_with_fingerprint(a in arb_record(), b in arb_record()) {
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(fingerprint(&a), fingerprint(&b));
        }
    }

    #[test]
    fn equality_is_transitive(
        a in arb_small_record(),
        b in arb_small_record(),
        c in arb_small_record(),
    ) {
        if a == b && b == c {
            prop_assert_eq!(&a, &c);
            prop_assert_eq!(fingerprint(&a), fingerprint(&c));
        }
    }

    #[test]
    fn same_builder_calls_give_equal_records(name in arb_text(), email in arb_text()) {
        let first = UserDetails::builder().with_name(name.clone()).with_email(email.clone()).build();
        let second = UserDetails::builder().with_name(name).with_email(email).build();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_text_element_is_reported_at_its_index(
        bad in arb_non_text(),
        index in 0usize..2,
        other in arb_text(),
    ) {
        let mut values = vec![Value::from(other.clone()), Value::from(other)];
        let actual = bad.kind();
        values[index] = bad;
        match UserDetails::from_sequence(Sequence(values)) {
            Err(DecodeError::TypeMismatch { index: at, actual: kind, .. }) => {
                prop_assert_eq!(at, index);
                prop_assert_eq!(kind, actual);
            }
            other => prop_assert!(false, "expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn short_sequences_never_decode(len in 0usize..2, text in arb_text()) {
        let seq: Sequence = std::iter::repeat_n(Value::from(text), len).collect();
        let is_malformed = matches!(
            UserDetails::from_sequence(seq),
            Err(DecodeError::MalformedRecord { expected: 2, .. })
        );
        prop_assert!(is_malformed);
    }
}
