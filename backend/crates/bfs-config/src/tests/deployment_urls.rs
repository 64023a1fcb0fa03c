use crate::Config;
use crate::tests::{EnvGuard, setup_env};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

#[test]
#[serial]
fn given_redis_cache_url_when_validate_then_ok() {
    // Given
    let _env = setup_env();
    let _cache = EnvGuard::set("CACHE_URL", "redis://127.0.0.1:6379/0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.cache.url.as_deref(), some(eq("redis://127.0.0.1:6379/0")));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_non_redis_cache_url_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _cache = EnvGuard::set("CACHE_URL", "memcached://127.0.0.1:11211");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_cache_url_when_load_then_cache_disabled() {
    // Given
    let _env = setup_env();
    let _cache = EnvGuard::set("CACHE_URL", "   ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.cache.url, none());
}

#[test]
#[serial]
fn given_malformed_monitoring_dsn_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _dsn = EnvGuard::set("MONITORING_DSN", "not a url");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_monitoring_dsn_when_validate_then_ok() {
    // Given
    let _env = setup_env();
    let _dsn = EnvGuard::set("MONITORING_DSN", "https://monitor.example.com/api/1/events");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_public_base_url_with_trailing_slash_when_base_url_then_trimmed() {
    // Given
    let _env = setup_env();
    let _base = EnvGuard::set("PUBLIC_API_BASE_URL", "https://portal.example.com/");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url(), eq("https://portal.example.com"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_public_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _base = EnvGuard::set("PUBLIC_API_BASE_URL", "portal.example.com");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
