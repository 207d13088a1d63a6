#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Maybe` serializes like `Option`; `Outcome` and the failure hierarchy use
//! serde's externally tagged enum representation.

use maybe_result::{AggregateFailure, Failure, Maybe, Outcome, Unit};
use rstest::rstest;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Profile {
    name: String,
    nickname: Maybe<String>,
}

#[rstest]
#[case(Maybe::some(3), "3")]
#[case(Maybe::none(), "null")]
fn maybe_serializes_like_an_option(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&maybe).unwrap(), expected);
    let restored: Maybe<i32> = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, maybe);
}

#[rstest]
fn maybe_field_accepts_null() {
    let profile: Profile = serde_json::from_str(r#"{"name":"ada","nickname":null}"#).unwrap();
    assert_eq!(
        profile,
        Profile {
            name: "ada".to_string(),
            nickname: Maybe::none(),
        }
    );
}

#[rstest]
fn outcome_json_roundtrip() {
    let success: Outcome<i32, Failure> = Outcome::success(42);
    let failure: Outcome<i32, Failure> = Outcome::failure(Failure::new("boom"));

    let success_json = serde_json::to_string(&success).unwrap();
    let failure_json = serde_json::to_string(&failure).unwrap();

    assert_eq!(success_json, r#"{"Success":42}"#);
    assert_eq!(serde_json::from_str::<Outcome<i32, Failure>>(&success_json).unwrap(), success);
    assert_eq!(serde_json::from_str::<Outcome<i32, Failure>>(&failure_json).unwrap(), failure);
}

#[rstest]
fn aggregate_failure_keeps_its_children() {
    let joined = Failure::new("a").join(Failure::new("b"));
    let json = serde_json::to_string(&joined).unwrap();
    let restored: Failure = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, joined);
    assert_eq!(restored.as_aggregate().map(AggregateFailure::len), Some(2));
}

#[rstest]
fn unit_roundtrip() {
    let json = serde_json::to_string(&Unit).unwrap();
    assert_eq!(serde_json::from_str::<Unit>(&json).unwrap(), Unit);
}

#[rstest]
fn deserialized_aggregate_flattens_nested_children() {
    let json = r#"{"failures":[{"Aggregate":{"failures":[{"Message":"a"},{"Message":"b"}]}},{"Message":"c"}]}"#;
    let restored: AggregateFailure = serde_json::from_str(json).unwrap();

    assert_eq!(restored.len(), 3);
    assert!(restored.iter().all(|child| !child.is_aggregate()));
    assert_eq!(restored.message(), "a; b; c");
}
