//! Property-based tests for settings serialization

use proptest::prelude::*;
use partition_core::config::{ColorMode, ColorSettings, LayoutSettings, LoggingSettings, Settings};
use partition_core::partition::Color;
use partition_core::TracingLevel;

fn tracing_level_strategy() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

fn layout_strategy() -> impl Strategy<Value = LayoutSettings> {
    (
        0.0f64..100.0,
        0.25f64..4.0,
        proptest::collection::vec(0.0f64..100.0, 0..5),
        0.0f64..20.0,
        1u16..400,
        1u16..200,
    )
        .prop_map(
            |(default_size, gutter, snap_points, snap_threshold, width, height)| LayoutSettings {
                default_size,
                gutter,
                snap_points,
                snap_threshold,
                width,
                height,
            },
        )
}

fn color_settings_strategy() -> impl Strategy<Value = ColorSettings> {
    (
        prop_oneof![Just(ColorMode::Palette), Just(ColorMode::Random)],
        // TOML integers are signed 64-bit
        proptest::option::of(0u64..=i64::MAX as u64),
        proptest::collection::vec(0u32..=0xff_ffff, 1..8),
    )
        .prop_map(|(mode, seed, palette)| ColorSettings {
            mode,
            seed,
            palette: palette.into_iter().map(Color::from_hex).collect(),
        })
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (tracing_level_strategy(), layout_strategy(), color_settings_strategy()).prop_map(
        |(level, layout, colors)| Settings {
            logging: LoggingSettings { level, file: None },
            layout,
            colors,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Valid settings survive a TOML round trip unchanged
    #[test]
    fn settings_round_trip_through_toml(settings in settings_strategy()) {
        prop_assert!(settings.validate().is_ok());
        let text = settings.to_toml_string().unwrap();
        let parsed = Settings::from_toml_str(&text).unwrap();
        prop_assert_eq!(parsed, settings);
    }

    /// Colors render as `#rrggbb` and parse back
    #[test]
    fn color_hex_round_trip(hex in 0u32..=0xff_ffff) {
        let color = Color::from_hex(hex);
        let text = color.to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert!(text.starts_with('#'));
        prop_assert_eq!(text.parse::<Color>().unwrap(), color);
        prop_assert_eq!(color.to_hex(), hex);
    }

    /// The configured snap policy applies the configured points and threshold
    #[test]
    fn layout_settings_drive_snap_policy(layout in layout_strategy()) {
        let policy = layout.snap_policy();
        prop_assert_eq!(&policy.points, &layout.snap_points);
        prop_assert_eq!(policy.threshold, layout.snap_threshold);
    }
}
