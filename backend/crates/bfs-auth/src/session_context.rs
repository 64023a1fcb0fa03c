use crate::{Claims, Result as AuthErrorResult};

use bfs_core::Role;

use uuid::Uuid;

/// Identity extracted from a verified access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub role: Role,
}

impl SessionContext {
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        Ok(Self {
            user_id: Claims::require_uuid("sub", &claims.sub)?,
            session_id: Claims::require_uuid("sid", &claims.sid)?,
            role: claims.role,
        })
    }
}
