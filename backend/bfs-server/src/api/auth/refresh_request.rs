use serde::Deserialize;

/// Body of `POST /api/auth/refresh`; the `bfs_refresh` cookie is used when
/// the body is empty or omits the token.
#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}
