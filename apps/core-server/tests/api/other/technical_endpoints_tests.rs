use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check_requires_no_token() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.unauthenticated_api().other.health().await;

    // THEN
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.unauthenticated_api().other.metrics().await;

    // THEN
    assert_eq!(resp.status(), 200);
}
