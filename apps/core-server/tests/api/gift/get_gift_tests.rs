use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_gift_reports_remaining_quantity() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;
    assert_eq!(resp.status(), 201);

    // WHEN
    let resp = context.api.gifts.get(&fixture.gift_id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["id"], fixture.gift_id.to_string());
    assert_eq!(resp["familyId"], fixture.family_id.to_string());
    assert_eq!(resp["totalQuantity"], 5);
    assert_eq!(resp["claimedQuantity"], 2);
    assert_eq!(resp["remainingQuantity"], 3);
}

#[tokio::test]
async fn test_get_unknown_gift() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.gifts.get(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "GIFT_NOT_FOUND");
    assert_eq!(resp["message"], "Gift not found");
}

#[tokio::test]
async fn test_get_gift_invalid_id() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.gifts.get(&"not-a-uuid").await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "INVALID_INPUT");
}
