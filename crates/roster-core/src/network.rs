//! Connectivity probe.
//!
//! Any HTTP response from the probe URL counts as online, whatever its status.
//! Only transport failures (DNS, connect, timeout) count as offline.

use std::time::Duration;

use crate::config::Config;

/// Probe timeout, independent of the user-list timeout.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Last known connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkStatus {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl NetworkStatus {
    pub fn label(self) -> Option<&'static str> {
        match self {
            NetworkStatus::Unknown => None,
            NetworkStatus::Online => Some("Online"),
            NetworkStatus::Offline => Some("Offline"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkProbe {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl NetworkProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.probe_url.clone(), PROBE_TIMEOUT)
    }

    /// Issues one HEAD request and classifies the outcome.
    pub async fn check(&self) -> NetworkStatus {
        match self
            .http
            .head(&self.url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => {
                tracing::trace!(status = %response.status(), "probe reachable");
                NetworkStatus::Online
            }
            Err(err) => {
                tracing::debug!(error = %err, url = %self.url, "probe failed");
                NetworkStatus::Offline
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_any_response_is_online() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let probe = NetworkProbe::new(server.uri(), Duration::from_secs(1));
        assert_eq!(probe.check().await, NetworkStatus::Online);
    }

    #[tokio::test]
    async fn test_unreachable_is_offline() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let probe = NetworkProbe::new(uri, Duration::from_millis(500));
        assert_eq!(probe.check().await, NetworkStatus::Offline);
    }

    #[test]
    fn test_labels() {
        assert_eq!(NetworkStatus::Unknown.label(), None);
        assert_eq!(NetworkStatus::Online.label(), Some("Online"));
        assert_eq!(NetworkStatus::Offline.label(), Some("Offline"));
    }
}
