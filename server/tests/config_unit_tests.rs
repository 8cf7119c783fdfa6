//! Unit tests for environment-based configuration
//!
//! Serialized because they mutate process-wide environment variables.

use serial_test::serial;
use server::config::Config;

fn clear_env() {
    std::env::remove_var("HOST");
    std::env::remove_var("PORT");
    std::env::remove_var("MONGO_URI");
    std::env::remove_var("MONGO_DB");
}

#[test]
#[serial]
fn loads_with_defaults() {
    clear_env();
    std::env::set_var("MONGO_URI", "mongodb://localhost:27017");

    let config = Config::from_env().expect("config should load");

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    assert_eq!(config.database, "WarmPaws");
}

#[test]
#[serial]
fn honors_explicit_values() {
    clear_env();
    std::env::set_var("HOST", "127.0.0.1");
    std::env::set_var("PORT", "8080");
    std::env::set_var("MONGO_URI", "mongodb://db.internal:27017");
    std::env::set_var("MONGO_DB", "WarmPawsStaging");

    let config = Config::from_env().expect("config should load");

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.database, "WarmPawsStaging");
}

#[test]
#[serial]
fn requires_mongo_uri() {
    clear_env();

    let err = Config::from_env().expect_err("missing MONGO_URI should fail");
    assert!(err.to_string().contains("MONGO_URI"));
}

#[test]
#[serial]
fn rejects_unparsable_port() {
    clear_env();
    std::env::set_var("MONGO_URI", "mongodb://localhost:27017");
    std::env::set_var("PORT", "not-a-port");

    let err = Config::from_env().expect_err("bad PORT should fail");
    assert!(err.to_string().contains("PORT"));
}

#[test]
#[serial]
fn rejects_empty_mongo_uri() {
    clear_env();
    std::env::set_var("MONGO_URI", "");

    assert!(Config::from_env().is_err());
}
