//! End-to-end coverage for layered config loading and guard rails.

use std::io::Write;

use marquee_config::{
    CatalogCredential, ConfigLoadError, ConfigLoader, EnvConfig,
};
use marquee_model::SelectionMode;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_file_and_reports_path() {
    let file = write_config(
        r#"
        [catalog]
        access_token = "eyJ.test.token"
        poster_size = "w342"

        [translator]
        contact_email = "ops@example.com"

        [session]
        selection_mode = "implicit"
        source = "br"
        target = "PT"
        initial_window = 4
        "#,
    );

    let load = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env(EnvConfig::default())
        .load()
        .expect("config loads");

    let config = load.config;
    assert_eq!(config.metadata.config_path.as_deref(), Some(file.path()));
    assert_eq!(
        config.catalog.credential,
        Some(CatalogCredential::AccessToken("eyJ.test.token".into()))
    );
    assert_eq!(config.catalog.poster_size.to_tmdb_param(), "w342");
    assert_eq!(config.translator.contact_email.as_deref(), Some("ops@example.com"));
    assert_eq!(config.session.selection_mode, SelectionMode::Implicit);
    // Region codes are normalized to the catalogue's casing.
    assert_eq!(config.session.source_region, "BR");
    assert_eq!(config.session.target_region, "PT");
    assert_eq!(config.session.initial_window, 4);
    assert!(load.warnings.is_empty(), "{:?}", load.warnings);
}

#[test]
fn small_page_size_is_raised_with_warning() {
    let file = write_config(
        r#"
        [catalog]
        api_key = "k"
        page_size = 5
        "#,
    );

    let load = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env(EnvConfig::default())
        .load()
        .expect("config loads");

    assert_eq!(load.config.catalog.page_size, 20);
    assert!(
        load.warnings
            .items
            .iter()
            .any(|w| w.message.contains("page_size"))
    );
}

#[test]
fn identical_regions_move_the_target() {
    let file = write_config(
        r#"
        [catalog]
        api_key = "k"

        [session]
        source = "FR"
        target = "fr"
        "#,
    );

    let load = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env(EnvConfig::default())
        .load()
        .expect("config loads");

    assert_eq!(load.config.session.source_region, "FR");
    assert_ne!(load.config.session.target_region, "FR");
    assert_eq!(load.warnings.items.len(), 1);
}

#[test]
fn unknown_region_is_rejected() {
    let env = EnvConfig {
        tmdb_api_key: Some("k".into()),
        target: Some("XX".into()),
        ..EnvConfig::default()
    };
    let file = write_config("");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env(env)
        .load()
        .expect_err("unknown region");

    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = ConfigLoader::new()
        .with_config_path("/definitely/not/here/marquee.toml")
        .with_env(EnvConfig::default())
        .load()
        .expect_err("missing config");

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_toml_names_the_file() {
    let file = write_config("[catalog\napi_key = 1");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env(EnvConfig::default())
        .load()
        .expect_err("parse failure");

    match err {
        ConfigLoadError::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other:?}"),
    }
}
