//! Loading route files from disk.

use segment_router::config::{load_config, load_trie, ConfigError, LogFormat};
use segment_router::RouteError;

mod common;

#[test]
fn test_load_sample_route_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("routes.toml");
    let (config, trie) = load_trie(&path).unwrap();

    assert_eq!(config.routes.len(), trie.len());
    assert_eq!(config.observability.log_format, LogFormat::Pretty);

    assert_eq!(trie.match_path("/users/me").unwrap().handler, "current_user");
    let found = trie.match_path("/users/42/posts/7").unwrap();
    assert_eq!(found.handler, "get_post");
    assert_eq!(found.param("id"), Some("42"));
    assert_eq!(found.param("post"), Some("7"));
}

#[test]
fn test_duplicate_route_in_file() {
    let path = common::write_route_file(
        "duplicate",
        r#"
        [[routes]]
        template = "/a"
        handler = "one"

        [[routes]]
        template = "a/"
        handler = "two"
        "#,
    );

    let err = load_trie(&path).unwrap_err();
    match err {
        ConfigError::Route(RouteError::RouteAlreadyExists { template }) => {
            assert_eq!(template, "a/");
        }
        other => panic!("unexpected error: {}", other),
    }

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let path = common::write_route_file(
        "invalid",
        r#"
        [observability]
        log_level = "chatty"

        [[routes]]
        template = "/{}"
        handler = "anon"
        "#,
    );

    match load_config(&path).unwrap_err() {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected error: {}", other),
    }

    std::fs::remove_file(&path).unwrap_or_default();
}
