mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::Result;

/// Issues a GET for `url` through `client` and hands back the raw response.
/// Status handling is left to the caller.
pub async fn get<C: HttpClient>(client: &C, url: reqwest::Url) -> Result<reqwest::Response> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);
    Ok(client.execute(req).await?)
}
