use super::*;

#[test]
fn constructor_helpers_map_to_variants() {
    assert!(matches!(
        ScrollworkError::validation("x"),
        ScrollworkError::Validation(_)
    ));
    assert!(matches!(
        ScrollworkError::mapping("x"),
        ScrollworkError::Mapping(_)
    ));
    assert!(matches!(
        ScrollworkError::evaluation("x"),
        ScrollworkError::Evaluation(_)
    ));
    assert!(matches!(
        ScrollworkError::serde("x"),
        ScrollworkError::Serde(_)
    ));
}

#[test]
fn messages_carry_their_prefix() {
    assert_eq!(
        ScrollworkError::mapping("bad domain").to_string(),
        "mapping error: bad domain"
    );
    assert_eq!(
        ScrollworkError::validation("dangling anchor").to_string(),
        "validation error: dangling anchor"
    );
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let err: ScrollworkError = anyhow::anyhow!("io broke").into();
    assert_eq!(err.to_string(), "io broke");
}
