// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Practicum homework-status API.
//!
//! One GET per call, no retries: the poll loop's fixed interval is the only
//! retry mechanism.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use revwatch_core::{Cursor, RevwatchError, TransportFailure};
use tracing::debug;

/// HTTP client bound to one endpoint and one OAuth token.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl PracticumClient {
    /// Creates a client that sends `Authorization: OAuth <token>` on every request.
    pub fn new(token: &str, endpoint: &str, timeout: Duration) -> Result<Self, RevwatchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            RevwatchError::Config(format!("invalid practicum.endpoint `{endpoint}`: {e}"))
        })?;

        let mut auth = HeaderValue::from_str(&format!("OAuth {token}")).map_err(|e| {
            RevwatchError::Config(format!("invalid practicum.token header value: {e}"))
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("revwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RevwatchError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Requests all homework status changes since `from_date`.
    ///
    /// Returns the decoded JSON body as-is. Anything but `200 OK` is a
    /// [`TransportFailure::Status`]; a body that is not JSON is a
    /// [`TransportFailure::MalformedPayload`].
    pub async fn homework_statuses(
        &self,
        from_date: Cursor,
    ) -> Result<serde_json::Value, TransportFailure> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from_date", &from_date.to_string());

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| TransportFailure::Request {
                    message: e.to_string(),
                })?;

        let status = response.status();
        debug!(status = %status, from_date, "homework statuses response received");

        if status != StatusCode::OK {
            return Err(TransportFailure::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure::Request {
                message: format!("failed to read response body: {e}"),
            })?;

        serde_json::from_str(&body).map_err(|e| TransportFailure::MalformedPayload {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STATUS_PATH: &str = "/api/user_api/homework_statuses/";

    fn test_client(server: &MockServer) -> PracticumClient {
        PracticumClient::new(
            "test-token",
            &format!("{}{STATUS_PATH}", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn sends_oauth_header_and_cursor() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"homeworks": [], "current_date": 2000});

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .and(header("Authorization", "OAuth test-token"))
            .and(query_param("from_date", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client(&server).homework_statuses(1000).await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn non_ok_status_is_a_transport_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server).homework_statuses(0).await.unwrap_err();
        assert_eq!(err, TransportFailure::Status { code: 503 });
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected_too() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = test_client(&server).homework_statuses(0).await.unwrap_err();
        assert_eq!(err, TransportFailure::Status { code: 204 });
    }

    #[tokio::test]
    async fn non_json_body_is_malformed_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = test_client(&server).homework_statuses(0).await.unwrap_err();
        assert!(
            matches!(err, TransportFailure::MalformedPayload { .. }),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_failure() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = PracticumClient::new(
            "test-token",
            "http://127.0.0.1:9/statuses/",
            Duration::from_secs(2),
        )
        .unwrap();

        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, TransportFailure::Request { .. }), "got: {err:?}");
    }

    #[test]
    fn invalid_endpoint_is_a_config_error() {
        let err = PracticumClient::new("t", "not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, RevwatchError::Config(_)));
    }

    #[test]
    fn token_with_newline_is_a_config_error() {
        let err = PracticumClient::new("bad\ntoken", "https://example.com/", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, RevwatchError::Config(_)));
    }
}
