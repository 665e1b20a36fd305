//! Tests for infrastructure constants

use wirekit_infrastructure::constants::*;

#[test]
fn test_config_file_lives_in_config_dir() {
    assert!(DEFAULT_CONFIG_FILENAME.starts_with(DEFAULT_CONFIG_DIR));
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
    assert!(DEFAULT_MANIFEST_FILENAME.ends_with(".toml"));
}

#[test]
fn test_log_env_does_not_collide_with_config_prefix() {
    let config_prefix = format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}");
    assert!(LOG_FILTER_ENV.starts_with(CONFIG_ENV_PREFIX));
    assert!(!LOG_FILTER_ENV.starts_with(&config_prefix));
}
