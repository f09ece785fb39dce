use async_trait::async_trait;
use reqwest::{Request, Response};

/// Sends the GET for the disruption document. The server and CLI use
/// [`super::BasicClient`]; tests answer with canned XML.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
