use similar_asserts::assert_eq;
use sql_data_provider::test_utilities::{count_claims, get_claimed_quantity};
use uuid::Uuid;

use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_cancel_then_reclaim() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(2).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;
    assert_eq!(resp.status(), 201);
    let claim_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    // WHEN
    let resp = context.api.claims.cancel(&claim_id).await;

    // THEN
    assert_eq!(resp.status(), 204);
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        0
    );
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 0);

    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.json_value().await["claimedQuantity"], 2);
}

#[tokio::test]
async fn test_cancel_claim_by_admin() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(3).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 3)
        .await;
    let claim_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    // WHEN
    let resp = context
        .api_with_token(fixtures::ADMIN_TOKEN)
        .claims
        .cancel(&claim_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 204);
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_cancel_claim_of_someone_else_is_forbidden() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(3).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;
    let claim_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    // WHEN
    let resp = context
        .api_with_token(fixtures::OTHER_DONOR_TOKEN)
        .claims
        .cancel(&claim_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "FORBIDDEN");
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_cancel_unknown_claim() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.claims.cancel(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "CLAIM_NOT_FOUND");
}

#[tokio::test]
async fn test_cancel_claim_twice() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(3).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;
    let claim_id = resp.json_value().await["id"].as_str().unwrap().to_owned();
    assert_eq!(context.api.claims.cancel(&claim_id).await.status(), 204);

    // WHEN
    let resp = context.api.claims.cancel(&claim_id).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        0
    );
}
