//! Property-based tests for tracing configuration

use proptest::prelude::*;
use partition_core::{TracingConfig, TracingLevel, TracingOutput, span_names};

fn tracing_level_strategy() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

fn tracing_output_strategy() -> impl Strategy<Value = TracingOutput> {
    prop_oneof![Just(TracingOutput::Stdout), Just(TracingOutput::Stderr)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Levels survive a Display/FromStr round trip
    #[test]
    fn level_display_round_trip(level in tracing_level_strategy()) {
        prop_assert_eq!(level.to_string().parse::<TracingLevel>(), Ok(level));
    }

    /// The builder keeps every value it is given
    #[test]
    fn config_builder_keeps_values(
        level in tracing_level_strategy(),
        output in tracing_output_strategy(),
        thread_ids in any::<bool>(),
    ) {
        let config = TracingConfig::new()
            .with_level(level)
            .with_output(output.clone())
            .with_thread_ids(thread_ids);
        prop_assert_eq!(config.level, level);
        prop_assert_eq!(config.output, output);
        prop_assert_eq!(config.thread_ids, thread_ids);
    }

    /// Without a custom filter every crate target gets the configured level
    #[test]
    fn default_filter_uses_level(level in tracing_level_strategy()) {
        let directive = TracingConfig::new().with_level(level).filter_directive();
        for part in directive.split(',') {
            let suffix = format!("={level}");
            prop_assert!(part.ends_with(&suffix));
        }
    }

    /// Without `-v` the configured level stays in effect
    #[test]
    fn verbosity_zero_keeps_base(level in tracing_level_strategy()) {
        prop_assert_eq!(TracingLevel::from_verbosity(0, level), level);
    }
}

#[test]
fn span_names_are_dotted_and_distinct() {
    let names = [
        span_names::CONFIG_LOAD,
        span_names::CONFIG_SAVE,
        span_names::SHELL_COMMAND,
        span_names::RANDOM_RUN,
        span_names::DEMO_RUN,
    ];
    for name in names {
        assert!(name.contains('.'), "{name} is not namespaced");
    }
    let unique: std::collections::HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}
