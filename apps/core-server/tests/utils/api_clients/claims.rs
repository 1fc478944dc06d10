use std::fmt::Display;

use serde_json::json;

use super::{HttpClient, Response};

pub struct ClaimsApi {
    client: HttpClient,
}

impl ClaimsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn claim(
        &self,
        gift_id: &impl Display,
        claimant_id: &impl Display,
        quantity: i64,
    ) -> Response {
        let body = json!({
            "claimantId": claimant_id.to_string(),
            "quantity": quantity,
        });

        self.claim_raw(gift_id, body).await
    }

    pub async fn claim_raw(&self, gift_id: &impl Display, body: serde_json::Value) -> Response {
        let url = format!("/api/gift/v1/{gift_id}/claim");
        self.client.post(&url, body).await
    }

    pub async fn list_for_gift(&self, gift_id: &impl Display) -> Response {
        let url = format!("/api/gift/v1/{gift_id}/claim");
        self.client.get(&url).await
    }

    pub async fn get(&self, id: &impl Display) -> Response {
        let url = format!("/api/claim/v1/{id}");
        self.client.get(&url).await
    }

    pub async fn cancel(&self, id: &impl Display) -> Response {
        let url = format!("/api/claim/v1/{id}");
        self.client.delete(&url).await
    }
}
