use async_trait::async_trait;
use reqwest::{Request, Response};

/// The seam between the pipeline and the network. Tests swap in a canned
/// implementation; production uses [`super::BasicClient`] wrapped in
/// [`super::auth::AgencyHeaders`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
