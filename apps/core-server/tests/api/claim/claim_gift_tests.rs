use gift_core::model::campaign::CampaignStatus;
use rstest::rstest;
use serde_json::json;
use similar_asserts::assert_eq;
use sql_data_provider::test_utilities::{
    count_claims, get_claimed_quantity, insert_claim_fixture, insert_person,
};
use uuid::Uuid;

use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_claim_gift_success() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["claimedQuantity"], 2);
    assert!(resp["id"].as_str().unwrap().parse::<Uuid>().is_ok());

    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        2
    );
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_claims_never_exceed_total_quantity() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;
    let other_claimant = insert_person(&context.db, fixture.family_id, Some("donor-2"))
        .await
        .unwrap();
    let other_api = context.api_with_token(fixtures::OTHER_DONOR_TOKEN);

    // WHEN
    let (first, second) = tokio::join!(
        context
            .api
            .claims
            .claim(&fixture.gift_id, &fixture.claimant_id, 3),
        other_api.claims.claim(&fixture.gift_id, &other_claimant, 4),
    );

    // THEN
    let (winner_quantity, loser) = match (first.status(), second.status()) {
        (201, 409) => (3, second),
        (409, 201) => (4, first),
        statuses => panic!("unexpected statuses {statuses:?}"),
    };
    assert_eq!(loser.json_value().await["code"], "INSUFFICIENT_QUANTITY");

    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        winner_quantity
    );
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_claims_on_connection_pool() {
    // GIVEN
    let context = TestContext::new_with_file_database().await;
    let other_api = context.api_with_token(fixtures::OTHER_DONOR_TOKEN);

    for _ in 0..10 {
        let fixture = insert_claim_fixture(
            &context.db,
            CampaignStatus::Active,
            5,
            Some(fixtures::DONOR_IDENTITY),
        )
        .await
        .unwrap();
        let other_claimant = insert_person(&context.db, fixture.family_id, Some("donor-2"))
            .await
            .unwrap();

        // WHEN
        let (first, second) = tokio::join!(
            context
                .api
                .claims
                .claim(&fixture.gift_id, &fixture.claimant_id, 3),
            other_api.claims.claim(&fixture.gift_id, &other_claimant, 4),
        );

        // THEN
        let (winner_quantity, loser) = match (first.status(), second.status()) {
            (201, 409) => (3, second),
            (409, 201) => (4, first),
            statuses => panic!("unexpected statuses {statuses:?}"),
        };
        let loser = loser.json_value().await;
        assert_eq!(loser["code"], "INSUFFICIENT_QUANTITY");

        assert_eq!(
            get_claimed_quantity(&context.db, &fixture.gift_id)
                .await
                .unwrap(),
            winner_quantity
        );
        assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 1);
    }
}

#[tokio::test]
async fn test_claim_gift_for_person_of_another_donor() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api_with_token(fixtures::OTHER_DONOR_TOKEN)
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "FORBIDDEN");
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        0
    );
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_claim_gift_admin_on_behalf_of_person() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api_with_token(fixtures::ADMIN_TOKEN)
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 2)
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.json_value().await["claimedQuantity"], 2);
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_claim_gift_insufficient_quantity() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(2).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 3)
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "INSUFFICIENT_QUANTITY");
    assert_eq!(resp["message"], "Not enough remaining quantity");
}

#[rstest]
#[case(CampaignStatus::Draft)]
#[case(CampaignStatus::Closed)]
#[case(CampaignStatus::Archived)]
#[tokio::test]
async fn test_claim_gift_campaign_not_active(#[case] status: CampaignStatus) {
    // GIVEN
    let (context, fixture) = TestContext::new_with_campaign(status, 5).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "CAMPAIGN_INACTIVE");
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        0
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(11)]
#[tokio::test]
async fn test_claim_gift_invalid_quantity(#[case] quantity: i64) {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(50).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, quantity)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "INVALID_INPUT");
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        0
    );
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_claim_gift_malformed_body() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim_raw(
            &fixture.gift_id,
            json!({ "claimantId": fixture.claimant_id, "quantity": 1.5 }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_claim_unknown_gift() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&Uuid::new_v4(), &fixture.claimant_id, 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "GIFT_NOT_FOUND");
}

#[tokio::test]
async fn test_claim_gift_unknown_claimant() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &Uuid::new_v4(), 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "FAMILY_NOT_FOUND");
}

#[tokio::test]
async fn test_claim_gift_twice_by_same_claimant() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;
    assert_eq!(resp.status(), 201);

    // WHEN
    let resp = context
        .api
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 409);
    assert_eq!(resp.json_value().await["code"], "ALREADY_CLAIMED");
    assert_eq!(
        get_claimed_quantity(&context.db, &fixture.gift_id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_claim_gift_without_token() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .unauthenticated_api()
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert!(resp.text().await.is_empty());
    assert_eq!(count_claims(&context.db, &fixture.gift_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_claim_gift_with_unknown_token() {
    // GIVEN
    let (context, fixture) = TestContext::new_with_gift(5).await;

    // WHEN
    let resp = context
        .api_with_token("not-a-token")
        .claims
        .claim(&fixture.gift_id, &fixture.claimant_id, 1)
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
}
