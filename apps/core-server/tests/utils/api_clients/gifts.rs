use std::fmt::Display;

use super::{HttpClient, Response};

pub struct GiftsApi {
    client: HttpClient,
}

impl GiftsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &impl Display) -> Response {
        let url = format!("/api/gift/v1/{id}");
        self.client.get(&url).await
    }
}
