use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::GiftId;

use super::dto::GetGiftResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/gift/v1/{id}",
    responses(OkOrErrorResponse<GetGiftResponseRestDTO>),
    params(
        ("id" = GiftId, Path, description = "Gift id")
    ),
    tag = "gift_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve gift",
    description = "Returns details of a gift, including the quantity that can still be claimed.",
)]
pub(crate) async fn get_gift(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<GiftId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetGiftResponseRestDTO> {
    let result = state.core.gift_service.get_gift(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting gift")
}
