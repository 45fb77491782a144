use mica_base::errors::messages;
use mica_base::{InvalidOperationState, Nullable};

#[test]
fn present_wrapper_reports_and_returns_its_payload() {
    let n = Nullable::of(42);
    assert!(n.has_value());
    assert_eq!(*n.value().unwrap(), 42);
}

#[test]
fn empty_wrapper_reports_absent_and_fails_the_read() {
    let n = Nullable::<i32>::empty();
    assert!(!n.has_value());
    let err = n.value().unwrap_err();
    assert_eq!(err.operation(), messages::NULLABLE_VALUE);
    assert_eq!(err.requirement(), messages::REQUIRES_PRESENT_VALUE);
}

#[test]
fn repeated_queries_are_idempotent() {
    let n = Nullable::of(String::from("stable"));
    assert!(n.has_value());
    assert!(n.has_value());
    assert_eq!(n.value().unwrap(), "stable");
    assert_eq!(n.value().unwrap(), "stable");
    assert!(n.has_value(), "reads must not consume the payload");

    let absent = Nullable::<String>::empty();
    assert_eq!(absent.value().unwrap_err(), absent.value().unwrap_err());
}

#[test]
fn into_value_moves_the_payload_out() {
    let n = Nullable::of(vec![1, 2, 3]);
    assert_eq!(n.into_value().unwrap(), vec![1, 2, 3]);

    let err = Nullable::<Vec<i32>>::empty().into_value().unwrap_err();
    assert_eq!(err.operation(), messages::NULLABLE_INTO_VALUE);
}

#[test]
fn absent_read_terminates_an_access_chain() {
    // What the evaluator does per link of a safe-navigation chain:
    // forward the error instead of inventing a sentinel.
    fn port_of(config: &Nullable<u16>) -> Result<u16, InvalidOperationState> {
        Ok(*config.value()?)
    }

    assert_eq!(port_of(&Nullable::of(8080)).unwrap(), 8080);

    let err = port_of(&Nullable::empty()).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("invalid operation"), "{rendered}");
    assert!(
        rendered.contains("has_value"),
        "diagnostic must name the violated precondition: {rendered}"
    );
}

#[test]
fn intermediate_links_nest_without_collapsing() {
    let chain: Nullable<Nullable<i64>> = Nullable::of(Nullable::empty());
    assert!(chain.has_value());
    assert!(!chain.value().unwrap().has_value());
}

#[test]
fn default_is_the_empty_wrapper() {
    let n = Nullable::<u8>::default();
    assert!(!n.has_value());
}

#[test]
fn clone_copies_state_without_sharing() {
    let source = Nullable::of(String::from("owned"));
    let copy = source.clone();
    drop(source);
    assert_eq!(copy.value().unwrap(), "owned");
}
