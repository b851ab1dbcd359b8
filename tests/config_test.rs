use todo_api::config::{AppConfig, CorsSection, LogFormat};

#[test]
fn defaults_match_documented_values() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3001);
    assert!(config.cors.frontend_url.is_none());
    assert_eq!(config.environment.to_string(), "development");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn partial_sections_fall_back_to_defaults() {
    let config: AppConfig = serde_json::from_str(
        r#"{
            "server": { "port": 8080 },
            "environment": "production",
            "logging": { "format": "json" }
        }"#,
    )
    .expect("partial configuration should deserialize");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.environment.to_string(), "production");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn empty_document_deserializes_to_defaults() {
    let config: AppConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.server.port, 3001);
    assert!(config.cors.frontend_url.is_none());
}

#[test]
fn configured_origin_is_preserved() {
    let config = AppConfig {
        cors: CorsSection {
            frontend_url: Some("http://localhost:3000".to_string()),
        },
        ..Default::default()
    };

    assert_eq!(
        config.cors.frontend_url.as_deref(),
        Some("http://localhost:3000")
    );
}
