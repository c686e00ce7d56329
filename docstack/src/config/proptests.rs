//! Property-based tests for the configuration system.

use super::environment::EnvironmentConfig;
use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::output::OutputFormat;
use proptest::prelude::*;
use std::path::PathBuf;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(OutputFormat::ALL.to_vec())
}

fn log_mode_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["quiet", "normal", "verbose"]).prop_map(str::to_string)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of("[a-z]{1,12}\\.yaml".prop_map(PathBuf::from)),
        prop::option::of(output_format_strategy()),
        prop::option::of(log_mode_strategy()),
        prop::option::of(1u64..=3600),
    )
        .prop_map(
            |(enable_find_path, catalog, output_format, log_mode, resolve_timeout_seconds)| {
                Config {
                    enable_find_path,
                    catalog,
                    output_format,
                    log_mode,
                    resolve_timeout_seconds,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set fields in the higher layer always win; unset ones fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.enable_find_path, high.enable_find_path.or(low.enable_find_path));
        prop_assert_eq!(merged.catalog, high.catalog.or(low.catalog));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.log_mode, high.log_mode.or(low.log_mode));
        prop_assert_eq!(
            merged.resolve_timeout_seconds,
            high.resolve_timeout_seconds.or(low.resolve_timeout_seconds)
        );
    }

    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_default = Config::default();
        ConfigMerger::merge_into(&mut from_default, &config);
        prop_assert_eq!(from_default, config);
    }

    #[test]
    fn config_merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn generated_configs_are_valid(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn find_path_defaults_off(config in config_strategy()) {
        prop_assert_eq!(config.find_path_enabled(), config.enable_find_path == Some(true));
    }

    #[test]
    fn bool_parsing_case_insensitive(value in any::<bool>(), upper in any::<bool>()) {
        let words: &[&str] = if value { &["true", "yes", "on", "1"] } else { &["false", "no", "off", "0"] };
        for word in words {
            let input = if upper { word.to_uppercase() } else { (*word).to_string() };
            prop_assert_eq!(EnvironmentConfig::parse_bool("test", &input).unwrap(), value);
        }
    }

    #[test]
    fn bool_parsing_rejects_other_words(s in "[a-z]{2,8}") {
        prop_assume!(!["true", "false", "yes", "no", "on", "off"].contains(&s.as_str()));
        prop_assert!(EnvironmentConfig::parse_bool("test", &s).is_err());
    }
}
