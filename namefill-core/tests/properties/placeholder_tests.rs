//! Property-based tests for the placeholder fill-state
//!
//! The manager keeps a name index next to the mapping; these tests compare
//! its answers against a plain scan of the mapping after random operation
//! sequences.

use proptest::prelude::*;
use namefill_core::{PlaceholderManager, PlaceholderState};

// ========== Strategies ==========

#[derive(Debug, Clone)]
enum Op {
    Assign(String, String),
    Remove(String, String),
    Clear(String),
    Initialize(Vec<String>),
}

fn arb_key() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(str::to_string)
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["x", "y", "z", "민수", "지영"]).prop_map(str::to_string)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (arb_key(), arb_name()).prop_map(|(k, n)| Op::Assign(k, n)),
        2 => (arb_key(), arb_name()).prop_map(|(k, n)| Op::Remove(k, n)),
        1 => arb_key().prop_map(Op::Clear),
        1 => prop::collection::vec(arb_key(), 0..4).prop_map(Op::Initialize),
    ]
}

fn apply(manager: &mut PlaceholderManager, op: &Op) {
    match op {
        Op::Assign(k, n) => {
            manager.update_placeholder(k, n);
        }
        Op::Remove(k, n) => {
            manager.remove_name(k, n);
        }
        Op::Clear(k) => {
            manager.clear_placeholder(k);
        }
        Op::Initialize(keys) => manager.initialize_placeholders(keys.clone()),
    }
}

fn used_by_scan(state: &PlaceholderState, name: &str) -> bool {
    state.values().any(|names| names.iter().any(|n| n == name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ========== Exclusivity ==========
    //
    // After any sequence of operations, no name appears twice in the mapping.

    #[test]
    fn names_appear_at_most_once(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut manager = PlaceholderManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }
        let mut seen = std::collections::HashSet::new();
        for names in manager.state().values() {
            for name in names {
                prop_assert!(seen.insert(name.clone()), "{} assigned twice", name);
            }
        }
    }

    // ========== isNameUsed ==========
    //
    // is_name_used(n) is true iff n appears in the union of all sequences,
    // and placeholder_of(n) names the sequence holding it.

    #[test]
    fn is_name_used_matches_scan(
        ops in prop::collection::vec(arb_op(), 0..40),
        probe in arb_name()
    ) {
        let mut manager = PlaceholderManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }
        prop_assert_eq!(manager.is_name_used(&probe), used_by_scan(manager.state(), &probe));
        if let Some(key) = manager.placeholder_of(&probe) {
            prop_assert!(manager.names_in(key).is_some_and(|names| names.contains(&probe)));
        }
    }

    // ========== Rejected assignment ==========
    //
    // update_placeholder(p, n) returns false and leaves the state unchanged
    // when n is already present anywhere, including in p.

    #[test]
    fn assigning_used_name_is_rejected(
        ops in prop::collection::vec(arb_op(), 0..30),
        key in arb_key(),
        name in arb_name()
    ) {
        let mut manager = PlaceholderManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }
        let before = manager.state().clone();
        let used = used_by_scan(&before, &name);

        let accepted = manager.update_placeholder(&key, &name);
        prop_assert_eq!(accepted, !used);
        if used {
            prop_assert_eq!(manager.state(), &before);
        } else {
            prop_assert_eq!(manager.names_in(&key).and_then(|n| n.last()), Some(&name));
        }
    }

    // ========== Initialization ==========

    #[test]
    fn initialize_yields_exactly_the_keys(
        ops in prop::collection::vec(arb_op(), 0..20),
        keys in prop::collection::btree_set(arb_key(), 0..4)
    ) {
        let mut manager = PlaceholderManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }
        manager.initialize_placeholders(keys.iter().cloned());
        let got: Vec<&str> = manager.keys().collect();
        let want: Vec<&str> = keys.iter().map(String::as_str).collect();
        prop_assert_eq!(got, want);
        prop_assert!(manager.state().values().all(Vec::is_empty));
    }

    // ========== Round-trip and invalid import ==========

    #[test]
    fn export_import_roundtrips(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut manager = PlaceholderManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }
        let json = manager.export_placeholders().expect("export should succeed");

        let mut restored = PlaceholderManager::new();
        prop_assert_eq!(restored.import_placeholders(&json), Ok(manager.len()));
        prop_assert_eq!(restored.state(), manager.state());
        for name in ["x", "y", "z", "민수", "지영"] {
            prop_assert_eq!(restored.is_name_used(name), manager.is_name_used(name));
        }
    }

    #[test]
    fn invalid_import_leaves_state_unchanged(
        ops in prop::collection::vec(arb_op(), 0..30),
        payload in prop_oneof![
            Just("[]".to_string()),
            Just("[\"a\"]".to_string()),
            Just("{\"a\": \"x\"}".to_string()),
            Just("{\"a\": [\"x\"], \"b\": [\"x\"]}".to_string()),
            Just("nope".to_string()),
            Just("7".to_string()),
        ]
    ) {
        let mut manager = PlaceholderManager::new();
        for op in &ops {
            apply(&mut manager, op);
        }
        let before = manager.export_placeholders().expect("export should succeed");
        prop_assert!(manager.import_placeholders(&payload).is_err());
        prop_assert_eq!(manager.export_placeholders().expect("export should succeed"), before);
    }
}

#[test]
fn initialize_then_assign_scenario() {
    let mut manager = PlaceholderManager::new();
    manager.initialize_placeholders(["a", "b"]);
    assert!(manager.update_placeholder("a", "x"));
    assert_eq!(
        manager.export_placeholders().unwrap(),
        r#"{"a":["x"],"b":[]}"#
    );
}
