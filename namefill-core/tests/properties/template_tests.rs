//! Property-based tests for the template registry

use proptest::prelude::*;
use namefill_core::{TemplateManager, extract_placeholders};

// ========== Strategies ==========

/// Strategy for generating template names
fn arb_template_name() -> impl Strategy<Value = String> {
    "[A-Za-z가-힣][A-Za-z0-9가-힣 _-]{0,30}"
}

/// Strategy for generating template content, sometimes with placeholders
fn arb_content() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,\n]{0,80}",
        prop::collection::vec("[a-z]{1,8}", 0..5).prop_map(|keys| {
            keys.iter()
                .map(|k| format!("{{{{{k}}}}}"))
                .collect::<Vec<_>>()
                .join(" and ")
        }),
    ]
}

fn arb_templates() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_template_name(), arb_content()), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========== Update preserves identity ==========
    //
    // Updating a template replaces name and content, stamps updatedAt, and
    // keeps id, createdAt and list position.

    #[test]
    fn update_preserves_identity(
        templates in arb_templates(),
        pick in any::<prop::sample::Index>(),
        new_name in arb_template_name(),
        new_content in arb_content()
    ) {
        prop_assume!(!templates.is_empty());
        let mut manager = TemplateManager::new();
        for (name, content) in &templates {
            manager.add_template(name.clone(), content.clone());
        }
        let index = pick.index(templates.len());
        let original = manager.list_templates()[index].clone();

        prop_assert!(manager.update_template(&original.id, new_name.clone(), new_content.clone()));

        let updated = &manager.list_templates()[index];
        prop_assert_eq!(&updated.id, &original.id);
        prop_assert_eq!(updated.created_at, original.created_at);
        prop_assert_eq!(&updated.name, &new_name);
        prop_assert_eq!(&updated.content, &new_content);
        prop_assert!(updated.updated_at.is_some());
        prop_assert_eq!(manager.template_count(), templates.len());
    }

    // ========== Update of unknown id ==========

    #[test]
    fn update_unknown_id_is_noop(templates in arb_templates()) {
        let mut manager = TemplateManager::new();
        for (name, content) in &templates {
            manager.add_template(name.clone(), content.clone());
        }
        let before = manager.export_templates().expect("export should succeed");
        prop_assert!(!manager.update_template("missing", "x", "y"));
        prop_assert_eq!(manager.export_templates().expect("export should succeed"), before);
    }

    // ========== Round-trip ==========

    #[test]
    fn export_import_roundtrips(templates in arb_templates(), touch in any::<bool>()) {
        let mut manager = TemplateManager::new();
        for (name, content) in &templates {
            let t = manager.add_template(name.clone(), content.clone());
            if touch {
                manager.update_template(&t.id, name.clone(), content.clone());
            }
        }
        let json = manager.export_templates().expect("export should succeed");

        let mut restored = TemplateManager::new();
        prop_assert_eq!(restored.import_templates(&json), Ok(templates.len()));
        prop_assert_eq!(restored.list_templates(), manager.list_templates());
    }

    // ========== Invalid import ==========

    #[test]
    fn invalid_import_leaves_templates_unchanged(
        templates in arb_templates(),
        payload in prop_oneof![
            Just("{\"id\": 1}".to_string()),
            Just("[{\"name\": \"x\", \"content\": \"y\"}]".to_string()),
            Just("[{\"id\": 3, \"name\": \"x\", \"content\": \"y\"}]".to_string()),
            Just("12.5".to_string()),
            Just("".to_string()),
            Just("[".to_string()),
        ]
    ) {
        let mut manager = TemplateManager::new();
        for (name, content) in &templates {
            manager.add_template(name.clone(), content.clone());
        }
        let before = manager.export_templates().expect("export should succeed");
        prop_assert!(manager.import_templates(&payload).is_err());
        prop_assert_eq!(manager.export_templates().expect("export should succeed"), before);
    }

    // ========== Placeholder discovery ==========
    //
    // Every extracted key is unique and appears as a marker in the content.

    #[test]
    fn extracted_placeholders_are_unique_markers(content in arb_content()) {
        let keys = extract_placeholders(&content);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        prop_assert_eq!(unique.len(), keys.len());
        for key in &keys {
            let marker = format!("{{{{{key}}}}}");
            prop_assert!(content.contains(&marker));
        }
    }
}
