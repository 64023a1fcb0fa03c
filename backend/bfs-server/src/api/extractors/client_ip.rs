use crate::AppState;

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};

const UNKNOWN_CLIENT: &str = "unknown";

/// Client address used as the rate-limit key.
///
/// The socket peer, unless the server sits behind a trusted proxy, in which
/// case the first entry of `X-Forwarded-For`, then `X-Real-IP`, wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl ClientIp {
    pub fn resolve(
        headers: &HeaderMap,
        peer: Option<SocketAddr>,
        trust_proxy_headers: bool,
    ) -> Self {
        let forwarded = trust_proxy_headers
            .then(|| Self::forwarded_for(headers))
            .flatten();

        let address = match (forwarded, peer) {
            (Some(forwarded), _) => forwarded.to_string(),
            (None, Some(peer)) => peer.ip().to_string(),
            (None, None) => UNKNOWN_CLIENT.to_string(),
        };
        Self(address)
    }

    fn forwarded_for(headers: &HeaderMap) -> Option<&str> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        header("x-forwarded-for").or_else(|| header("x-real-ip"))
    }
}

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self::resolve(&parts.headers, peer, state.trust_proxy_headers))
    }
}
