//! End-to-end integration test for the resolver stack
//!
//! Exercises the complete flow: JSON file on disk -> loader -> key-path
//! lookup with placeholder substitution and both variable namespaces.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use varconf_core::{Config, Error};
use varconf_json::{JsonLoader, from_file};

/// Set up a config file covering nesting, placeholders, and literals
/// that merely look like directives.
fn setup_config_file() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");

    fs::write(
        &path,
        r#"{
    "var1": {
        "var1-1": "value1-1",
        "var1-2": "value1-2"
    },
    "var2": "~~%var1.var1-1%~~+value2",
    "var3": true,
    "var4": 4,
    "var5": "~~extends:config.var5.json~~",
    "var6": "~~extends:config.var6.json, config.var6-2.json~~",
    "paths": {
        "base": "/srv/app",
        "cache": "%paths.base%/cache",
        "sessions": "%paths.cache%/sessions"
    },
    "greeting": "hello %user.name%"
}"#,
    )
    .unwrap();

    (temp, path)
}

#[test]
fn test_load_and_resolve_nested_paths() {
    let (_temp, path) = setup_config_file();
    let config = from_file(&path).unwrap();

    assert_eq!(config.get("var1.var1-1").unwrap(), json!("value1-1"));
    assert_eq!(config.get("var3").unwrap(), json!(true));
    assert_eq!(config.get("var4").unwrap(), json!(4));
}

#[test]
fn test_placeholders_resolve_against_the_tree() {
    let (_temp, path) = setup_config_file();
    let config = from_file(&path).unwrap();

    assert_eq!(config.get("var2").unwrap(), json!("~~value1-1~~+value2"));

    // Chained references resolve through intermediate values.
    assert_eq!(
        config.get("paths.sessions").unwrap(),
        json!("/srv/app/cache/sessions")
    );
}

#[test]
fn test_extends_style_literals_stay_inert() {
    let (_temp, path) = setup_config_file();
    let config = from_file(&path).unwrap();

    // The ':' keeps these outside the placeholder grammar.
    assert_eq!(
        config.get("var5").unwrap(),
        json!("~~extends:config.var5.json~~")
    );
    assert_eq!(
        config.get("var6").unwrap(),
        json!("~~extends:config.var6.json, config.var6-2.json~~")
    );
}

#[test]
fn test_presence_checks_and_missing_keys() {
    let (_temp, path) = setup_config_file();
    let config = from_file(&path).unwrap();

    assert!(config.has("var1"));
    assert!(config.has("var1.var1-2"));
    assert!(!config.has("var1.var1-3"));
    assert!(!config.has("var100"));

    assert!(matches!(
        config.get("var100").unwrap_err(),
        Error::NotFound { .. }
    ));
    assert_eq!(config.get_or("var100", json!("fallback")).unwrap(), json!("fallback"));
}

#[test]
fn test_user_variables_fill_open_placeholders() {
    let (_temp, path) = setup_config_file();
    let mut config = from_file(&path).unwrap();

    // Until the variable is supplied the greeting cannot resolve.
    assert!(config.get("greeting").is_err());

    config.set_variable("user.name", json!("mira"));
    assert_eq!(config.get("greeting").unwrap(), json!("hello mira"));
}

#[test]
fn test_loader_defaults_reach_the_resolved_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deploy.json");
    fs::write(&path, r#"{"target": "%stage%.example.net"}"#).unwrap();

    let loader =
        JsonLoader::new().with_defaults([("stage", json!("staging"))].into_iter().collect());
    let config = loader.load_file(&path).unwrap();

    assert_eq!(config.get("target").unwrap(), json!("staging.example.net"));
}

#[test]
fn test_whole_tree_retrieval_substitutes_everything() {
    let (_temp, path) = setup_config_file();
    let mut config = from_file(&path).unwrap();
    config.set_variable("user.name", json!("mira"));

    let tree = config.get("").unwrap();
    let object = tree.as_object().unwrap();

    assert_eq!(object["var2"], json!("~~value1-1~~+value2"));
    assert_eq!(object["greeting"], json!("hello mira"));
    // Non-string scalars pass through untouched.
    assert_eq!(object["var4"], json!(4));
}

#[test]
fn test_resolution_reports_where_it_failed() {
    let config = Config::new(json!({"entry": "%no.such.key%"}));

    match config.get("entry").unwrap_err() {
        Error::Resolution { path, source } => {
            assert_eq!(path, "entry");
            assert!(matches!(*source, Error::UnknownPlaceholder { .. }));
        }
        other => panic!("expected Resolution, got: {other}"),
    }

    // A plain value of the same tree still resolves fine.
    let healthy: Value = json!({"entry": "plain"});
    assert_eq!(Config::new(healthy).get("entry").unwrap(), json!("plain"));
}
