use similar_asserts::assert_eq;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_claim() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;
    let claim_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    // WHEN
    let resp = context.api.claims.get(&claim_id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["id"], claim_id);
    assert_eq!(resp["giftId"], fixture.gift_id.to_string());
    assert_eq!(resp["claimantId"], fixture.claimant_id.to_string());
    assert_eq!(resp["quantity"], 2);
    assert!(resp["createdDate"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_get_unknown_claim() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.claims.get(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "CLAIM_NOT_FOUND");
}

#[tokio::test]
async fn test_list_gift_claims() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;
    let claim_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    // WHEN
    let resp = context.api.claims.list_for_gift(&fixture.gift_id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    let claims = resp.as_array().unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0]["id"], claim_id);
}

#[tokio::test]
async fn test_list_claims_of_unknown_gift() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.claims.list_for_gift(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "GIFT_NOT_FOUND");
}
