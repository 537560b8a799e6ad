use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_requires_database_url() {
    let err = Config::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

    let err = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/spaces")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/spaces");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.allowed_origins, AllowedOrigins::default());
    assert!(!cfg.seed_sample_data);
    assert!(cfg.static_dir.is_none());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = Config::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/spaces"),
        ("PORT", "9000"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SEED_SAMPLE_DATA", "TRUE"),
        ("ALLOWED_ORIGINS", "https://spaces.example.com/, http://localhost:5173"),
        ("STATIC_DIR", "client/dist"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.db_max_connections, 12);
    assert!(cfg.seed_sample_data);
    assert_eq!(
        cfg.allowed_origins.patterns(),
        &["https://spaces.example.com".to_owned(), "http://localhost:5173".to_owned()]
    );
    assert_eq!(cfg.static_dir, Some(PathBuf::from("client/dist")));
}

#[test]
fn from_lookup_rejects_bad_numbers_and_flags() {
    let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });

    let err =
        Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("SEED_SAMPLE_DATA", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SEED_SAMPLE_DATA", .. }));
}

#[test]
fn exact_origins_match_exactly() {
    let origins = AllowedOrigins::parse("http://localhost:3000");
    assert!(origins.matches("http://localhost:3000"));
    assert!(!origins.matches("http://localhost:30001"));
    assert!(!origins.matches("https://localhost:3000"));
}

#[test]
fn wildcard_origin_matches_subdomains_only() {
    let origins = AllowedOrigins::default();
    assert!(origins.matches("https://space-max.vercel.app"));
    assert!(origins.matches("https://preview-123.vercel.app"));
    assert!(!origins.matches("https://.vercel.app"));
    assert!(!origins.matches("https://evil.com/x.vercel.app"));
    assert!(!origins.matches("http://space-max.vercel.app"));
}

#[test]
fn star_alone_matches_everything() {
    assert!(AllowedOrigins::parse("*").matches("https://anything.example"));
}
