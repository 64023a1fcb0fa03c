mod common;

use common::create_test_pool;

use bfs_core::ContactMessage;
use bfs_db::ContactMessageRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_contact_message_when_created_then_counted() {
    // Given
    let pool = create_test_pool().await;
    let repo = ContactMessageRepository::new(pool);
    let message = ContactMessage::new(
        "Pat Visitor".to_string(),
        "pat@example.com".to_string(),
        "Please call me about Medicare options.".to_string(),
    );

    // When
    repo.create(&message).await.unwrap();

    // Then
    assert_that!(repo.count().await.unwrap(), eq(1));
}
