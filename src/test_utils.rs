use async_trait::async_trait;

use crate::fetch::HttpClient;

/// Answers every request with the same canned response.
#[derive(Clone)]
pub struct StaticClient {
    status: u16,
    body: Vec<u8>,
}

impl StaticClient {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
impl HttpClient for StaticClient {
    async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        let response = http::Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .unwrap();
        Ok(reqwest::Response::from(response))
    }
}

pub const SAMPLE_FEED: &str = include_str!("../tests/fixtures/disruptions.xml");
