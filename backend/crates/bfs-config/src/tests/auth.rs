use crate::Config;
use crate::tests::{EnvGuard, setup_env};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_missing_auth_secret_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _secret = EnvGuard::remove("AUTH_SECRET");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("AUTH_SECRET is required")
    );
}

#[test]
#[serial]
fn given_short_auth_secret_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _secret = EnvGuard::set("AUTH_SECRET", "too-short");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_weak_hash_parameters_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _memory = EnvGuard::set("BFS_AUTH_HASH_MEMORY_KIB", "4096");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_refresh_ttl_not_longer_than_access_ttl_when_validate_then_error() {
    // Given
    let _env = setup_env();
    let _access = EnvGuard::set("BFS_AUTH_ACCESS_TOKEN_TTL_SECS", "3600");
    let _refresh = EnvGuard::set("BFS_AUTH_REFRESH_TOKEN_TTL_SECS", "3600");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_custom_token_ttls_when_load_then_applied() {
    // Given
    let _env = setup_env();
    let _access = EnvGuard::set("BFS_AUTH_ACCESS_TOKEN_TTL_SECS", "600");
    let _refresh = EnvGuard::set("BFS_AUTH_REFRESH_TOKEN_TTL_SECS", "86400");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.access_token_ttl_secs, eq(600));
    assert_that!(config.auth.refresh_token_ttl_secs, eq(86400));
    assert_that!(config.validate(), ok(anything()));
}
