#[cfg(test)]
mod tests {
    use crate::config::{
        ChatsenseConfig, ConfigBuilder, ConfigError, ConfigLoader, LogFormat, LogLevel, validation,
    };
    use crate::intent::Intent;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ChatsenseConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.aggregation.window, 5);
        assert!(!config.entities.resolve_overlaps);
        assert!(config.sentiment.extra_positive.is_empty());
        assert!(config.intent.extra_keywords.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_positive_words(["sensacional"])
            .with_negative_words(vec!["lamentável".to_string()])
            .with_intent_keywords(Intent::Request, ["segunda via"])
            .with_aggregation_window(10)
            .with_overlap_resolution(true)
            .with_log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.sentiment.extra_positive, vec!["sensacional"]);
        assert_eq!(config.sentiment.extra_negative, vec!["lamentável"]);
        assert_eq!(
            config.intent.extra_keywords.get(&Intent::Request),
            Some(&vec!["segunda via".to_string()])
        );
        assert_eq!(config.aggregation.window, 10);
        assert!(config.entities.resolve_overlaps);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_validation() {
        assert!(ConfigBuilder::new().build().is_ok());
        assert!(validation::validate_config(&ChatsenseConfig::default()).is_ok());

        // Empty lexicon entries are a malformed custom lexicon
        assert!(
            ConfigBuilder::new()
                .with_positive_words(["  "])
                .build()
                .is_err()
        );

        // A word cannot carry both polarities
        assert!(
            ConfigBuilder::new()
                .with_positive_words(["Top"])
                .with_negative_words(["top"])
                .build()
                .is_err()
        );

        assert!(
            ConfigBuilder::new()
                .with_intent_keywords(Intent::Greeting, [""])
                .build()
                .is_err()
        );

        assert!(ConfigBuilder::new().with_aggregation_window(0).build().is_err());
    }

    #[test]
    fn test_keywords_for_fallback_intent_rejected() {
        let result = ConfigBuilder::new()
            .with_intent_keywords(Intent::Other, ["qualquer"])
            .build();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatsense.toml");
        std::fs::write(&path, "[intent.extra_keywords]\nother = [\"qualquer\"]\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        assert!(loader.extract().is_err());
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();
        let prod = ConfigBuilder::production().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(dev.logging.format, LogFormat::Pretty);
        assert_eq!(test.logging.level, LogLevel::Warn);
        assert_eq!(prod.logging.level, LogLevel::Info);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatsense.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[sentiment]
extra_positive = ["sensacional"]

[intent.extra_keywords]
complaint = ["estorno"]

[aggregation]
window = 3
"#
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.sentiment.extra_positive, vec!["sensacional"]);
        assert_eq!(
            config.intent.extra_keywords.get(&Intent::Complaint),
            Some(&vec!["estorno".to_string()])
        );
        assert_eq!(config.aggregation.window, 3);
        // Untouched sections keep their defaults
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_load_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatsense.json");
        std::fs::write(&path, r#"{"aggregation": {"window": 0}}"#).unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        assert!(loader.extract().is_err());

        let mut loader = ConfigLoader::new();
        assert!(loader.load_file(dir.path().join("missing.toml")).is_err());
        assert!(loader.load_file(dir.path().join("chatsense.ini")).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_positive_words(["sensacional"])
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ChatsenseConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.sentiment, deserialized.sentiment);
        assert_eq!(config.aggregation, deserialized.aggregation);
    }
}
