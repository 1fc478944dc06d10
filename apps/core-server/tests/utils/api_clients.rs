use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::claims::ClaimsApi;
use self::email_templates::EmailTemplatesApi;
use self::gifts::GiftsApi;
use self::other::OtherApi;

pub mod claims;
pub mod email_templates;
pub mod gifts;
pub mod other;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{url}", self.base_url);
        let request = http_client().request(method, url);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let mut request = self.request(reqwest::Method::POST, url);
        if let Some(body) = body.into() {
            request = request.json(&body);
        }

        Response {
            resp: request.send().await.unwrap(),
        }
    }

    pub async fn delete(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }
}

pub struct Client {
    pub gifts: GiftsApi,
    pub claims: ClaimsApi,
    pub email_templates: EmailTemplatesApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String, token: String) -> Self {
        Self::build(HttpClient {
            base_url,
            token: Some(token),
        })
    }

    pub fn unauthenticated(base_url: String) -> Self {
        Self::build(HttpClient {
            base_url,
            token: None,
        })
    }

    fn build(client: HttpClient) -> Self {
        Self {
            gifts: GiftsApi::new(client.clone()),
            claims: ClaimsApi::new(client.clone()),
            email_templates: EmailTemplatesApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
