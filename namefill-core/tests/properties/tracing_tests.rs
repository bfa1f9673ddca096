//! Property-based tests for the tracing configuration

use std::path::PathBuf;

use proptest::prelude::*;
use namefill_core::{LoggingSettings, TracingConfig, TracingLevel, TracingOutput, span_names};

// ========== Strategies ==========

/// Strategy for generating tracing levels
fn arb_tracing_level() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

/// Strategy for generating tracing output types
fn arb_tracing_output() -> impl Strategy<Value = TracingOutput> {
    prop_oneof![Just(TracingOutput::Stdout), Just(TracingOutput::Stderr),]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Levels survive Display then FromStr
    #[test]
    fn tracing_level_display_parses_back(level in arb_tracing_level()) {
        prop_assert_eq!(level.to_string().parse::<TracingLevel>().ok(), Some(level));
        prop_assert_eq!(level.to_string().to_uppercase().parse::<TracingLevel>().ok(), Some(level));
    }

    /// Without a custom filter the directive selects this crate at the level
    #[test]
    fn level_directive_targets_crate(
        level in arb_tracing_level(),
        output in arb_tracing_output(),
        include_target in any::<bool>(),
    ) {
        let config = TracingConfig { level, output, include_target, filter: None };

        prop_assert_eq!(config.filter_directive(), format!("namefill_core={level}"));
        prop_assert!(config.env_filter().is_ok());
    }

    /// A custom filter replaces the level directive verbatim
    #[test]
    fn custom_filter_overrides_level(
        level in arb_tracing_level(),
        other in arb_tracing_level(),
    ) {
        let directive = format!("namefill_core::store={other}");
        let settings = LoggingSettings {
            level,
            filter: Some(directive.clone()),
            file: None,
        };
        let config = settings.to_tracing_config();

        prop_assert_eq!(config.filter_directive(), directive);
        prop_assert!(config.env_filter().is_ok());
    }

    /// Logging settings carry their level into the tracing configuration
    #[test]
    fn logging_settings_map_to_tracing_config(level in arb_tracing_level()) {
        let settings = LoggingSettings { level, ..LoggingSettings::default() };
        let config = settings.to_tracing_config();
        prop_assert!(config.env_filter().is_ok());
        prop_assert_eq!(config.level, level);
        prop_assert_eq!(&config.output, &TracingOutput::Stderr);
    }

    /// A configured log file becomes the file output
    #[test]
    fn logging_file_maps_to_file_output(name in "[a-z]{1,12}") {
        let path = PathBuf::from(format!("/tmp/{name}.log"));
        let settings = LoggingSettings {
            file: Some(path.clone()),
            ..LoggingSettings::default()
        };
        prop_assert_eq!(settings.to_tracing_config().output, TracingOutput::File { path });
    }
}

#[test]
fn span_names_are_dotted() {
    for name in [
        span_names::IMPORT_EXECUTE,
        span_names::EXPORT_EXECUTE,
        span_names::TEMPLATE_SELECT,
        span_names::PLACEHOLDER_INITIALIZE,
        span_names::TEMPLATE_RENDER,
    ] {
        assert!(name.contains('.'), "{name}");
    }
}
