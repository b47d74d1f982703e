//! One-shot fetch of the user collection.
//!
//! The directory is populated exactly once per instance, by a GET issued
//! when the front end starts (the fetch-on-mount of the original UI).
//! The result travels back to the event loop over a channel; if the loop
//! is gone by then, the result is dropped without touching any state.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::error::{Result, UtentiError};
use crate::user::User;

/// The reference users endpoint
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Outcome of the one-shot fetch, as delivered to the event loop
pub type FetchOutcome = std::result::Result<Vec<User>, UtentiError>;

/// Build the HTTP client used for the single directory request
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// GET the endpoint and decode a JSON array of user records.
///
/// Non-2xx statuses become `UnexpectedStatus`; a body that is not a JSON
/// array of objects with `id` and `name` becomes `Decode`.
#[instrument(skip(client))]
pub async fn fetch_users(client: &reqwest::Client, endpoint: &str) -> Result<Vec<User>> {
    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UtentiError::unexpected_status(status.as_u16(), endpoint));
    }

    let body = response.bytes().await?;
    let users: Vec<User> = serde_json::from_slice(&body)
        .map_err(|err| UtentiError::decode(endpoint.to_string(), err))?;

    debug!(count = users.len(), "fetched user records");
    Ok(users)
}

/// Spawn the one-shot fetch on a background task and hand back the
/// receiving end of its result channel.
///
/// The sender side checks for a closed channel before committing: if the
/// UI was torn down while the request was in flight, the outcome is
/// discarded instead of being pushed at disposed state.
pub fn spawn_fetch(client: reqwest::Client, endpoint: String) -> mpsc::UnboundedReceiver<FetchOutcome> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let outcome = fetch_users(&client, &endpoint).await;

        if tx.is_closed() {
            debug!("fetch resolved after receiver was dropped; discarding");
            return;
        }
        if tx.send(outcome).is_err() {
            debug!("fetch receiver dropped between check and send; discarding");
        }
    });

    rx
}
