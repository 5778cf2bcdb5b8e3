//! Loading and parsing TOML configuration.

use std::io::Write;

use solid_patterns::{Channel, Config, CustomerTier, Error, Format, ValidationRules};

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.discount.tier, CustomerTier::Regular);
    assert_eq!(config.notification.channel, Channel::Email);
    assert_eq!(config.export.format, Format::Csv);
    assert_eq!(config.validation, ValidationRules::STRICT);
}

#[test]
fn test_partial_sections() {
    let config = Config::from_toml_str(
        r#"
        [discount]
        tier = "super-vip"

        [validation]
        min_content_chars = 50
        "#,
    )
    .unwrap();

    assert_eq!(config.discount.tier, CustomerTier::SuperVip);
    assert_eq!(config.validation.min_title_chars, 5);
    assert_eq!(config.validation.min_content_chars, 50);
    assert_eq!(config.export.format, Format::Csv);
}

#[test]
fn test_unknown_values_are_rejected() {
    let err = Config::from_toml_str("[discount]\ntier = \"gold\"\n").unwrap_err();
    assert!(matches!(err, Error::TomlParse(_)));

    let err = Config::from_toml_str("[export]\nformat = \"csv\"\nquote = true\n").unwrap_err();
    assert!(matches!(err, Error::TomlParse(_)));

    let err = Config::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap_err();
    assert!(matches!(err, Error::TomlParse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[notification]\nchannel = \"sms\"").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.notification.channel, Channel::Sms);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(err.to_string().contains("absent.toml"));
    match err {
        Error::ConfigRead { path, source } => {
            assert_eq!(path, dir.path().join("absent.toml"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = Config::from_toml_str(
        "[discount]\ntier = \"vip\"\n[export]\nformat = \"xml\"\n",
    )
    .unwrap();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}
