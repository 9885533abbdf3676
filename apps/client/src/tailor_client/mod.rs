//! Tailor Client: the single point of entry for calls to the tailoring backend.
//!
//! No other module talks HTTP. One request per submit, with no retries and no
//! timeout beyond the HTTP stack's default.

use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::TailorError;
use crate::models::payload::TailorRequest;

pub const TAILOR_PATH: &str = "/api/tailor";

#[derive(Debug, Clone)]
pub struct TailorClient {
    client: Client,
    endpoint: String,
}

impl TailorClient {
    pub fn new(base_url: &str) -> Result<Self, TailorError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: tailor_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the payload and returns the raw response body of a 2xx reply.
    /// Any other status is an error and its body is not handed back as a result.
    pub async fn tailor(&self, request: &TailorRequest) -> Result<String, TailorError> {
        debug!(
            endpoint = %self.endpoint,
            items = request.items.len(),
            top_x = request.top_x,
            "sending tailor request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Tailor service returned {}: {}", status, body);
            return Err(TailorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(bytes = body.len(), "tailor request succeeded");
        Ok(body)
    }
}

/// Joins the configured base URL with the fixed tailor path.
/// An empty base yields a relative URL, which fails at send time as a transport error.
pub fn tailor_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), TAILOR_PATH)
}

/// Pretty-prints a JSON body; anything that is not JSON is returned unchanged.
pub fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            tailor_endpoint("http://localhost:8000/"),
            "http://localhost:8000/api/tailor"
        );
        assert_eq!(
            tailor_endpoint("http://localhost:8000"),
            "http://localhost:8000/api/tailor"
        );
    }

    #[test]
    fn test_empty_base_is_relative() {
        assert_eq!(tailor_endpoint(""), "/api/tailor");
    }

    #[test]
    fn test_pretty_body_formats_json() {
        assert_eq!(pretty_body(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_pretty_body_keeps_non_json() {
        assert_eq!(pretty_body("Internal Server Error"), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_empty_base_url_fails_as_transport() {
        let client = TailorClient::new("").unwrap();
        let request = TailorRequest {
            rewrite: true,
            job_description: String::new(),
            top_x: 0,
            skills: vec![],
            items: vec![],
        };
        let err = client.tailor(&request).await.unwrap_err();
        assert!(matches!(err, TailorError::Transport(_)));
    }
}
