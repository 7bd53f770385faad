//! User directory HTTP client.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// One entry in the user directory. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Failures surfaced in the home screen's error area.
#[derive(Debug, Error)]
pub enum UsersError {
    #[error("Request failed: {}", .0.as_u16())]
    Status(StatusCode),
    #[error("Request timed out.")]
    Timeout,
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Failed to decode users: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UsersError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UsersError::Timeout
        } else if err.is_decode() {
            UsersError::Decode(err.to_string())
        } else {
            UsersError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
}

impl UsersClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.users_url.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the full user list.
    pub async fn fetch_users(&self) -> Result<Vec<User>, UsersError> {
        tracing::debug!(url = %self.url, "fetching users");

        let mut request = self.http.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "user list request failed");
            return Err(UsersError::Status(status));
        }

        let bytes = response.bytes().await?;
        let users: Vec<User> =
            serde_json::from_slice(&bytes).map_err(|e| UsersError::Decode(e.to_string()))?;
        tracing::debug!(count = users.len(), "users loaded");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> UsersClient {
        UsersClient::new(format!("{}/users", server.uri()), None)
    }

    #[tokio::test]
    async fn test_fetch_users_parses_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "phone": "1-770"},
                {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv"}
            ])))
            .mount(&server)
            .await;

        let users = client_for(&server).fetch_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[1].email, "Shanna@melissa.tv");
    }

    #[tokio::test]
    async fn test_fetch_users_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let users = client_for(&server).fetch_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, UsersError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(err.to_string(), "Request failed: 503");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, UsersError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = UsersClient::new(
            format!("{}/users", server.uri()),
            Some(Duration::from_millis(100)),
        );
        let err = client.fetch_users().await.unwrap_err();
        assert!(matches!(err, UsersError::Timeout));
    }
}
