//! Environment variable handling and precedence.

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, write_config};
use crate::constants::{ENV_CONFIG_PATH, ENV_THEME};
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::ColorTheme;

#[test]
#[serial]
fn test_env_theme_applied() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("dark"))], || {
        let loader = ConfigLoader::new().from_env().unwrap();
        assert_eq!(loader.theme(), Some(ColorTheme::Dark));
    });
}

#[test]
#[serial]
fn test_env_theme_invalid_names_variable() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("sepia"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, message } => {
                assert_eq!(var, ENV_THEME);
                assert!(message.contains("sepia"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("   ")), (ENV_CONFIG_PATH, Some(""))], || {
        assert_eq!(env_var_or_none(ENV_THEME), None);
        let loader = ConfigLoader::new().from_env().unwrap();
        assert_eq!(loader.theme(), None);
        assert!(loader.config_path().is_none());
    });
}

#[test]
#[serial]
fn test_env_var_is_trimmed() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("  light\n"))], || {
        assert_eq!(env_var_or_none(ENV_THEME).as_deref(), Some("light"));
    });
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([(ENV_THEME, Some("dark"))], || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_theme(ColorTheme::Monochrome)
            .build();
        assert_eq!(config.theme, ColorTheme::Monochrome);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), r#"{ "theme": "light" }"#);

    temp_env::with_vars(
        [
            (ENV_THEME, Some("high_contrast")),
            (ENV_CONFIG_PATH, Some(path.to_str().unwrap())),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .from_file()
                .unwrap()
                .build();
            assert_eq!(config.theme, ColorTheme::HighContrast);
            assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        },
    );
}
