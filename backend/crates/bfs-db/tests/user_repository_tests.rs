mod common;

use common::{create_test_pool, create_test_user, test_user};

use bfs_core::Role;
use bfs_db::UserRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_created_user_when_found_by_email_then_fields_round_trip() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "jane@example.com").await;
    let repo = UserRepository::new(pool);

    // When
    let found = repo.find_by_email("jane@example.com").await.unwrap();

    // Then
    assert_that!(found, some(anything()));
    let found = found.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.name, eq(&user.name));
    assert_that!(found.role, eq(Role::User));
    assert_that!(found.profile_complete, eq(false));
    assert_that!(found.created_at.timestamp(), eq(user.created_at.timestamp()));
}

#[tokio::test]
async fn given_existing_email_when_creating_again_then_unique_violation() {
    // Given
    let pool = create_test_pool().await;
    create_test_user(&pool, "dup@example.com").await;
    let repo = UserRepository::new(pool);

    // When
    let result = repo.create(&test_user("dup@example.com")).await;

    // Then
    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().is_unique_violation());
}

#[tokio::test]
async fn given_unknown_id_when_find_by_id_then_none() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    // When
    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    // Then
    assert_that!(found, none());
}

#[tokio::test]
async fn given_profile_change_when_update_profile_then_persisted() {
    // Given
    let pool = create_test_pool().await;
    let mut user = create_test_user(&pool, "profile@example.com").await;
    let repo = UserRepository::new(pool);
    user.update_profile("Jane Doe".to_string(), Some("555-0100".to_string()));

    // When
    let updated = repo.update_profile(&user).await.unwrap();

    // Then
    assert_that!(updated, eq(true));
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Jane Doe"));
    assert_that!(found.phone.as_deref(), some(eq("555-0100")));
    assert_that!(found.profile_complete, eq(true));
}

#[tokio::test]
async fn given_user_when_set_role_then_role_changes() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "agent@example.com").await;
    let repo = UserRepository::new(pool);

    // When
    repo.set_role(user.id, Role::Agent).await.unwrap();

    // Then
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_that!(found.role, eq(Role::Agent));
}
