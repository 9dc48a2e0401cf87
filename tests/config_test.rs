use pattern_recipes::runtime::{ConfigError, DemoConfig, SEED_VAR};

/// The only test in this binary that touches the process environment, so nothing else
/// can observe the variable while it is set.
#[test]
fn test_from_env_reads_seed_variable() {
    std::env::set_var(SEED_VAR, "42");
    let config = DemoConfig::from_env().unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config, DemoConfig { seed: 42 });

    std::env::set_var(SEED_VAR, "not-a-seed");
    let err = DemoConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSeed { ref value, .. } if value == "not-a-seed"));

    std::env::remove_var(SEED_VAR);
    assert!(DemoConfig::from_env().is_ok());
}
