use super::{HttpClient, Response};

pub struct EmailTemplatesApi {
    client: HttpClient,
}

impl EmailTemplatesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn seed(&self) -> Response {
        self.client.post("/api/email-template/v1/seed", None).await
    }

    pub async fn list(&self) -> Response {
        self.client.get("/api/email-template/v1").await
    }
}
