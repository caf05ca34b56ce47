use crate::directive::RequestContext;
use async_graphql::Value;

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

#[test]
fn empty_context_has_no_entries() {
    let context = RequestContext::new();
    assert!(context.is_empty());
    assert_eq!(context.get("anything"), None);
}

#[test]
fn extending_does_not_modify_the_original() {
    let base = RequestContext::new().with_value("a", string("1"));
    let extended = base.with_value("b", string("2"));

    assert_eq!(base.get("b"), None);
    assert_eq!(extended.get("a"), Some(&string("1")));
    assert_eq!(extended.get("b"), Some(&string("2")));
}

#[test]
fn later_entries_shadow_earlier_ones() {
    let context = RequestContext::new()
        .with_value("key", string("old"))
        .with_value("key", string("new"));

    assert_eq!(context.get("key"), Some(&string("new")));
    assert_eq!(context.entries(), vec![("key", &string("new"))]);
}

#[test]
fn sibling_extensions_are_independent() {
    let base = RequestContext::new().with_value("shared", Value::Boolean(true));
    let left = base.with_value("side", string("left"));
    let right = base.with_value("side", string("right"));

    assert_eq!(left.get("side"), Some(&string("left")));
    assert_eq!(right.get("side"), Some(&string("right")));
    assert_eq!(left.get("shared"), right.get("shared"));
}

#[test]
fn collects_from_pairs() {
    let context: RequestContext = vec![
        ("a", Value::Boolean(true)),
        ("b", Value::Boolean(false)),
    ].into_iter().collect();

    assert!(context.contains_key("a"));
    assert_eq!(context.get("b"), Some(&Value::Boolean(false)));
}
