//! Configuration Loader Tests

use tempfile::TempDir;
use wirekit_domain::BindingScope;
use wirekit_domain::constants::{DEFAULT_MAX_PLANNING_DEPTH, MAX_PLANNING_DEPTH_LIMIT};
use wirekit_infrastructure::config::{ConfigBuilder, ConfigLoader, PlanningConfig};
use wirekit_infrastructure::constants::DEFAULT_LOG_LEVEL;

/// Loader that ignores the developer's environment
fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("WIREKIT_TEST_UNUSED")
}

#[test]
fn test_config_loader_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = isolated_loader()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.planning.max_depth, DEFAULT_MAX_PLANNING_DEPTH);
    assert_eq!(config.planning.default_scope, BindingScope::Transient);
}

#[test]
fn test_config_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wirekit.toml");
    std::fs::write(
        &config_path,
        r#"
[logging]
level = "debug"

[planning]
max_depth = 32
default_scope = "singleton"
"#,
    )
    .unwrap();

    let loader = isolated_loader().with_config_path(&config_path);
    let config = loader.load().unwrap();

    assert_eq!(loader.config_path(), Some(config_path.as_path()));
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
    assert_eq!(config.planning.max_depth, 32);
    assert_eq!(config.planning.default_scope, BindingScope::Singleton);
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wirekit.toml");
    std::fs::write(&config_path, "[planning]\nmax_depth = 0\n").unwrap();

    let err = isolated_loader()
        .with_config_path(&config_path)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("max_depth"));

    std::fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();
    assert!(isolated_loader().with_config_path(&config_path).load().is_err());

    std::fs::write(&config_path, "[planning]\nmax_depth = \"deep\"\n").unwrap();
    assert!(isolated_loader().with_config_path(&config_path).load().is_err());
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_max_depth(12)
        .with_default_scope(BindingScope::Singleton)
        .build()
        .unwrap();
    isolated_loader().save_to_file(&original, &config_path).unwrap();

    let loaded = isolated_loader()
        .with_config_path(&config_path)
        .load()
        .unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_builder_validates() {
    assert!(ConfigBuilder::new().with_max_depth(0).build().is_err());

    let config = ConfigBuilder::new()
        .with_planning(PlanningConfig {
            max_depth: 5,
            ..PlanningConfig::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.planning.container_options().max_depth, 5);
}

#[test]
fn test_max_depth_upper_bound() {
    assert!(
        ConfigBuilder::new()
            .with_max_depth(MAX_PLANNING_DEPTH_LIMIT)
            .build()
            .is_ok()
    );

    let err = ConfigBuilder::new().with_max_depth(20_000).build().unwrap_err();
    assert!(err.to_string().contains("20000"));

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wirekit.toml");
    std::fs::write(&config_path, "[planning]\nmax_depth = 20000\n").unwrap();
    assert!(isolated_loader().with_config_path(&config_path).load().is_err());
}
