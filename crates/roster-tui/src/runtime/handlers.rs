//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. They perform I/O
//! only and never touch state; the runtime spawns them and routes the result
//! through the inbox.

use roster_core::network::NetworkProbe;
use roster_core::users::UsersClient;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Fetches the user list for `session_key`, or reports cancellation.
pub async fn fetch_users(
    client: UsersClient,
    session_key: u64,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let fetch = async {
        client
            .fetch_users()
            .await
            .map_err(|err| err.to_string())
    };

    let result = match cancel {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(session_key, "users fetch cancelled");
                return UiEvent::UsersCancelled { session_key };
            }
            result = fetch => result,
        },
        None => fetch.await,
    };

    UiEvent::UsersLoaded {
        session_key,
        result,
    }
}

pub async fn probe_network(probe: NetworkProbe) -> UiEvent {
    UiEvent::NetworkChecked(probe.check().await)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_cancelled_fetch_reports_cancellation() {
        // Unroutable address; the cancel token wins before any timeout.
        let client = UsersClient::new("http://10.255.255.1/users", Some(Duration::from_secs(30)));
        let token = CancellationToken::new();
        token.cancel();

        let event = fetch_users(client, 3, Some(token)).await;
        assert!(matches!(event, UiEvent::UsersCancelled { session_key: 3 }));
    }
}
