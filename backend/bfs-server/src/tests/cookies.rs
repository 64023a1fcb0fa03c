use crate::api::cookies::{
    CookieSettings, REFRESH_COOKIE, SESSION_COOKIE, access_token, read_cookie,
};

use http::{HeaderMap, HeaderValue, header};

fn settings(secure: bool) -> CookieSettings {
    CookieSettings {
        secure,
        access_ttl_secs: 900,
        refresh_ttl_secs: 604_800,
    }
}

#[test]
fn given_login_when_headers_built_then_both_cookies_are_http_only_and_lax() {
    // Given
    let cookies = settings(false);

    // When
    let headers = cookies.login_headers("access-abc", "refresh-xyz");

    // Then
    let values: Vec<&str> = headers
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(values.len(), 2);
    assert!(values[0].starts_with("bfs_session=access-abc"));
    assert!(values[1].starts_with("bfs_refresh=refresh-xyz"));
    for value in &values {
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Path=/"));
        assert!(!value.contains("Secure"));
    }
    assert!(values[0].contains("Max-Age=900"));
}

#[test]
fn given_secure_settings_when_cookie_built_then_marked_secure() {
    // Given
    let cookies = settings(true);

    // When
    let cookie = cookies.session_cookie("token");

    // Then
    assert!(cookie.contains("Secure"));
}

#[test]
fn given_logout_when_headers_built_then_cookies_expire_immediately() {
    // Given
    let cookies = settings(false);

    // When
    let headers = cookies.logout_headers();

    // Then
    let values: Vec<&str> = headers
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v.contains("Max-Age=0")));
}

#[test]
fn given_cookie_header_with_several_cookies_when_read_then_finds_named_one() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; bfs_session=abc123; bfs_refresh=r1"),
    );

    // When / Then
    assert_eq!(read_cookie(&headers, SESSION_COOKIE).as_deref(), Some("abc123"));
    assert_eq!(read_cookie(&headers, REFRESH_COOKIE).as_deref(), Some("r1"));
    assert_eq!(read_cookie(&headers, "missing"), None);
}

#[test]
fn given_empty_cookie_value_when_read_then_none() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("bfs_session="));

    // When / Then
    assert_eq!(read_cookie(&headers, SESSION_COOKIE), None);
}

#[test]
fn given_bearer_and_cookie_when_access_token_then_bearer_wins() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
    headers.insert(header::COOKIE, HeaderValue::from_static("bfs_session=from-cookie"));

    // When
    let token = access_token(&headers);

    // Then
    assert_eq!(token.as_deref(), Some("from-header"));
}

#[test]
fn given_only_cookie_when_access_token_then_cookie_used() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("bfs_session=from-cookie"));

    // When
    let token = access_token(&headers);

    // Then
    assert_eq!(token.as_deref(), Some("from-cookie"));
}
