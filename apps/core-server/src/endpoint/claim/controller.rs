use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::{ClaimId, GiftId};

use super::dto::{ClaimGiftRequestRestDTO, ClaimGiftResponseRestDTO, GetClaimResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse, VecResponse,
};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/gift/v1/{id}/claim",
    request_body = ClaimGiftRequestRestDTO,
    responses(CreatedOrErrorResponse<ClaimGiftResponseRestDTO>),
    params(
        ("id" = GiftId, Path, description = "Gift id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Claim gift",
    description = indoc::formatdoc! {"
        Reserves units of a gift for a claimant. The campaign of the gift must be active and the
        requested quantity must not exceed the remaining quantity. Concurrent claims never
        reserve more than the total quantity of the gift. The claimant must be linked to the
        caller, administrators may claim on behalf of any person.
    "},
)]
pub(crate) async fn post_claim(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<GiftId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<ClaimGiftRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<ClaimGiftResponseRestDTO> {
    let result = state
        .core
        .claim_service
        .claim_gift(&id, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "claiming gift")
}

#[utoipa::path(
    get,
    path = "/api/gift/v1/{id}/claim",
    responses(OkOrErrorResponse<VecResponse<GetClaimResponseRestDTO>>),
    params(
        ("id" = GiftId, Path, description = "Gift id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "List gift claims",
    description = "Returns all claims of a gift, newest first.",
)]
pub(crate) async fn get_gift_claims(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<GiftId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<VecResponse<GetClaimResponseRestDTO>> {
    let result = state.core.claim_service.get_gift_claims(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting gift claims")
}

#[utoipa::path(
    get,
    path = "/api/claim/v1/{id}",
    responses(OkOrErrorResponse<GetClaimResponseRestDTO>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve claim",
    description = "Returns details of a claim.",
)]
pub(crate) async fn get_claim(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetClaimResponseRestDTO> {
    let result = state.core.claim_service.get_claim(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting claim")
}

#[utoipa::path(
    delete,
    path = "/api/claim/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Cancel claim",
    description = indoc::formatdoc! {"
        Deletes a claim and returns its units to the gift. Only the claimant or an
        administrator can cancel a claim.
    "},
)]
pub(crate) async fn delete_claim(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state.core.claim_service.cancel_claim(&id).await;
    EmptyOrErrorResponse::from_result(result, state, "cancelling claim")
}
