/// Property-based tests for pointer navigation and accessor chains.
///
/// Strategies generate arbitrary documents (up to 4 levels deep) and pick a
/// pointer that resolves inside them, then check:
/// - `find(set(v, p, x), p) == x`
/// - `set` never changes its input
/// - every location outside the updated path is unchanged in the new tree
/// - an accessor that has failed stays failed, with the same message and path
use dict_core::{find_pointer, set_at_pointer, Accessor, Object, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|pairs| Value::Object(Object::from_pairs(pairs))),
        ]
    })
}

/// Every non-empty pointer that resolves inside `value`, in document order.
fn all_pointers(value: &Value) -> Vec<String> {
    fn walk(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(object) => {
                for (key, child) in object {
                    let path = format!("{prefix}/{key}");
                    out.push(path.clone());
                    walk(child, &path, out);
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    let path = format!("{prefix}/{i}");
                    out.push(path.clone());
                    walk(child, &path, out);
                }
            }
            _ => {}
        }
    }
    let mut out = Vec::new();
    walk(value, "", &mut out);
    out
}

/// A non-empty object document plus one of its resolvable pointers.
fn arb_doc_and_pointer() -> impl Strategy<Value = (Value, String)> {
    prop::collection::vec((arb_key(), arb_value()), 1..6)
        .prop_map(|pairs| Value::Object(Object::from_pairs(pairs)))
        .prop_flat_map(|v| {
            let pointers = all_pointers(&v);
            (Just(v), prop::sample::select(pointers))
        })
}

fn is_on_path(candidate: &str, updated: &str) -> bool {
    let within = |outer: &str, inner: &str| {
        inner == outer || inner.starts_with(&format!("{outer}/"))
    };
    within(updated, candidate) || within(candidate, updated)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn set_then_find_returns_replacement((doc, path) in arb_doc_and_pointer(), x in arb_value()) {
        let updated = set_at_pointer(&doc, &path, x.clone()).expect("resolvable path must set");
        prop_assert_eq!(find_pointer(&updated, &path), Some(&x));
    }

    #[test]
    fn set_leaves_input_untouched((doc, path) in arb_doc_and_pointer(), x in arb_value()) {
        let snapshot = doc.clone();
        let _ = set_at_pointer(&doc, &path, x);
        prop_assert_eq!(doc, snapshot);
    }

    #[test]
    fn set_preserves_everything_off_the_path((doc, path) in arb_doc_and_pointer(), x in arb_leaf()) {
        let updated = set_at_pointer(&doc, &path, x).unwrap();
        for other in all_pointers(&doc) {
            if is_on_path(&other, &path) {
                continue;
            }
            prop_assert_eq!(
                find_pointer(&updated, &other),
                find_pointer(&doc, &other),
                "location {} changed after setting {}", other, path
            );
        }
    }

    #[test]
    fn every_listed_pointer_resolves(doc in arb_value()) {
        for path in all_pointers(&doc) {
            prop_assert!(find_pointer(&doc, &path).is_some(), "{} should resolve", path);
        }
    }

    #[test]
    fn failed_accessor_is_sticky(doc in arb_value(), keys in prop::collection::vec(arb_key(), 1..5), idx in 0usize..8) {
        // a leaf can never be navigated, so this always fails
        let leaf = Value::Integer(1);
        let failed = Accessor::from(&leaf).object("x");
        let mut chain = failed.clone();
        for key in &keys {
            chain = chain.object(key).vector(idx);
        }
        prop_assert_eq!(&chain, &failed);
        prop_assert_eq!(chain.error(), failed.error());

        // and on a generated document, once failed it never recovers
        let mut chain = Accessor::from(&doc);
        let mut first_failure: Option<Accessor<'_>> = None;
        for key in &keys {
            chain = chain.object(key);
            if let Some(failure) = &first_failure {
                prop_assert_eq!(&chain, failure);
            } else if chain.is_err() {
                first_failure = Some(chain.clone());
            }
        }
    }
}
