//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::database::UpgradePolicy;
use crate::output::OutputFormat;
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = UpgradePolicy> {
    prop_oneof![Just(UpgradePolicy::Recreate), Just(UpgradePolicy::Refuse)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(1u64..=60_000),
        prop::option::of(policy_strategy()),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(busy_timeout_ms, upgrade_policy, output_format, disable_autoinit)| Config {
                busy_timeout_ms,
                upgrade_policy,
                output_format,
                disable_autoinit,
            },
        )
}

proptest! {
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.busy_timeout_ms, high.busy_timeout_ms.or(low.busy_timeout_ms));
        prop_assert_eq!(merged.upgrade_policy, high.upgrade_policy.or(low.upgrade_policy));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    #[test]
    fn config_merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
