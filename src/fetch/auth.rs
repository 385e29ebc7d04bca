use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};

/// An [`HttpClient`] wrapper that stamps every outgoing request with the
/// static headers the opendata API expects: the agency selector
/// (`X-Agency-Id`), `Accept: application/json`, and the API key
/// (`X-API-KEY`).
///
/// The key is passed through as-is. An empty key still produces a valid
/// header; the remote side rejects it with a non-200 status.
pub struct AgencyHeaders<C> {
    pub inner: C,
    pub agency_id: String,
    pub api_key: String,
}

impl<C> AgencyHeaders<C> {
    pub fn new(inner: C, agency_id: String, api_key: String) -> Self {
        Self {
            inner,
            agency_id,
            api_key,
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for AgencyHeaders<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        let headers = req.headers_mut();
        headers.insert(
            "X-Agency-Id",
            self.agency_id
                .parse()
                .expect("AgencyHeaders: invalid agency id"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-API-KEY",
            self.api_key.parse().expect("AgencyHeaders: invalid API key"),
        );
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use std::sync::Mutex;

    /// Records the headers of each request it sees and answers 200.
    struct CaptureClient {
        seen: Mutex<Vec<HeaderMap>>,
    }

    #[async_trait]
    impl HttpClient for CaptureClient {
        async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            self.seen.lock().unwrap().push(req.headers().clone());
            let resp = http::Response::builder().status(200).body("").unwrap();
            Ok(resp.into())
        }
    }

    #[tokio::test]
    async fn test_injects_all_three_headers() {
        let client = AgencyHeaders::new(
            CaptureClient {
                seen: Mutex::new(vec![]),
            },
            "2".to_string(),
            "secret".to_string(),
        );

        let req = reqwest::Request::new(
            reqwest::Method::GET,
            "http://mock.local/stop_times".parse().unwrap(),
        );
        client.execute(req).await.unwrap();

        let seen = client.inner.seen.lock().unwrap();
        let headers = &seen[0];
        assert_eq!(headers.get("X-Agency-Id").unwrap(), "2");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get("X-API-KEY").unwrap(), "secret");
    }

    #[tokio::test]
    async fn test_empty_key_is_still_sent() {
        let client = AgencyHeaders::new(
            CaptureClient {
                seen: Mutex::new(vec![]),
            },
            "2".to_string(),
            String::new(),
        );

        let req = reqwest::Request::new(
            reqwest::Method::GET,
            "http://mock.local/shapes".parse().unwrap(),
        );
        client.execute(req).await.unwrap();

        let seen = client.inner.seen.lock().unwrap();
        assert_eq!(seen[0].get("X-API-KEY").unwrap(), "");
    }
}
