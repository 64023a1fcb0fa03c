use bfs_db::Cache;

use googletest::prelude::*;

#[tokio::test]
async fn given_disabled_cache_when_get_after_set_then_miss() {
    // Given
    let cache = Cache::disabled();
    let key = Cache::key("financial-summary", "user-1");

    // When
    cache.set_json(&key, &vec![1, 2, 3]).await.unwrap();
    let value: Option<Vec<i32>> = cache.get_json(&key).await.unwrap();

    // Then
    assert_that!(value, none());
    assert_that!(cache.is_enabled(), eq(false));
    assert_that!(cache.ping().await, ok(anything()));
}

#[test]
fn given_namespace_and_id_when_key_then_prefixed() {
    assert_that!(
        Cache::key("financial-summary", 42),
        eq("bfs:financial-summary:42")
    );
}
