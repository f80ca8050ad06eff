use chrono::FixedOffset;
use epochal::config::Config;
use epochal::pattern;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.clock.utc_offset.is_none());
    assert_eq!(config.output.default_pattern, pattern::DATETIME_FORMAT);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unparseable offset should fail
    config.clock.utc_offset = Some("eight hours".to_string());
    assert!(config.validate().is_err());

    // Reset and test a broken output pattern
    config.clock.utc_offset = Some("+08:00".to_string());
    config.output.default_pattern = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_pattern = \"%Y-%m-%d %H:%M:%S\""));
    assert!(toml_str.contains("enabled = false"));
    // An unset offset is omitted entirely
    assert!(!toml_str.contains("utc_offset"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[clock]
utc_offset = "+08:00"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.clock.utc_offset.as_deref(), Some("+08:00"));
    assert_eq!(config.output.default_pattern, pattern::DATETIME_FORMAT); // default value
    assert!(!config.logging.enabled); // default value
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.clock.utc_offset.is_none());
    assert_eq!(config.output.default_pattern, pattern::DATETIME_FORMAT);
    assert!(!config.logging.enabled);
}

#[test]
fn test_build_clock_honors_configured_offset() {
    let config: Config = toml::from_str("[clock]\nutc_offset = \"+08:00\"\n").unwrap();
    let clock = config.build_clock().unwrap();
    assert_eq!(clock.offset(), FixedOffset::east_opt(8 * 3600).unwrap());

    let config: Config = toml::from_str("[clock]\nutc_offset = \"-05:30\"\n").unwrap();
    let clock = config.build_clock().unwrap();
    assert_eq!(clock.offset(), FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap());
}

#[test]
fn test_build_clock_rejects_garbage_offset() {
    let mut config = Config::default();
    config.clock.utc_offset = Some("mars".to_string());
    assert!(config.build_clock().is_err());
}

#[test]
fn test_validation_accepts_free_output_patterns() {
    let mut config = Config::default();
    config.output.default_pattern = "%d/%m/%Y %H:%M".to_string();
    assert!(config.validate().is_ok());
}
