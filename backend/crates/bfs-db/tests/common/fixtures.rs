use bfs_core::{Investment, User};

use uuid::Uuid;

pub fn test_user(email: &str) -> User {
    User::new(
        email.to_string(),
        "Test User".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo".to_string(),
    )
}

pub fn test_investment(
    user_id: Uuid,
    name: &str,
    asset_class: &str,
    invested: f64,
    value: f64,
) -> Investment {
    Investment::new(
        user_id,
        name.to_string(),
        asset_class.to_string(),
        invested,
        value,
    )
}
