//! Session cookies.
//!
//! `bfs_session` carries the access token and `bfs_refresh` the refresh
//! token. Both are HttpOnly and SameSite=Lax; `Secure` follows
//! `server.secure_cookies`.

use bfs_auth::JwtValidator;

use axum::http::{HeaderMap, HeaderValue, header};
use cookie::{Cookie, SameSite, time::Duration as CookieDuration};

pub const SESSION_COOKIE: &str = "bfs_session";
pub const REFRESH_COOKIE: &str = "bfs_refresh";

/// How session cookies are written
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

impl CookieSettings {
    pub fn session_cookie(&self, access_token: &str) -> String {
        self.build(SESSION_COOKIE, access_token, self.access_ttl_secs)
    }

    pub fn refresh_cookie(&self, refresh_token: &str) -> String {
        self.build(REFRESH_COOKIE, refresh_token, self.refresh_ttl_secs)
    }

    /// `Set-Cookie` values that expire both session cookies
    pub fn clear_cookies(&self) -> [String; 2] {
        [
            self.build(SESSION_COOKIE, "", 0),
            self.build(REFRESH_COOKIE, "", 0),
        ]
    }

    /// Headers that set both cookies after a login
    pub fn login_headers(&self, access_token: &str, refresh_token: &str) -> HeaderMap {
        headers_with_cookies([
            self.session_cookie(access_token),
            self.refresh_cookie(refresh_token),
        ])
    }

    pub fn logout_headers(&self) -> HeaderMap {
        headers_with_cookies(self.clear_cookies())
    }

    fn build(&self, name: &'static str, value: &str, max_age_secs: i64) -> String {
        Cookie::build((name, value.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(CookieDuration::seconds(max_age_secs))
            .build()
            .to_string()
    }
}

pub fn headers_with_cookies<I>(cookies: I) -> HeaderMap
where
    I: IntoIterator<Item = String>,
{
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            headers.append(header::SET_COOKIE, value);
        }
    }
    headers
}

/// Value of the named cookie from the request's `Cookie` headers
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse(raw.to_string()))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Access token from `Authorization: Bearer`, falling back to the session cookie
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| JwtValidator::bearer_token(value).ok())
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    bearer.or_else(|| read_cookie(headers, SESSION_COOKIE))
}
