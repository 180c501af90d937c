//! Backend API Wrappers
//!
//! Frontend bindings to the REST endpoints, served under `/api`.

use gloo_net::http::Request;
use leptos::prelude::on_cleanup;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

use crate::models::Consumable;

const CONSUMABLES_URL: &str = "/api/consommables/";

/// The one failure path of this frontend: the inventory fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(gloo_net::Error),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(gloo_net::Error),
}

impl FetchError {
    /// True when the request died because our own scope-cleanup abort
    /// fired, which happens on every normal teardown with a fetch
    /// still in flight.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            FetchError::Request(gloo_net::Error::JsError(js)) if js.name == "AbortError"
        )
    }
}

/// Builds an abort signal tied to the current reactive owner: when the
/// owning scope is disposed the controller aborts, so a fetch that
/// outlives its view never writes to dead state.
///
/// Must be called during component setup, not from inside a spawned
/// future (on_cleanup needs the owner).
pub fn scope_abort_signal() -> Option<AbortSignal> {
    let controller = send_wrapper::SendWrapper::new(AbortController::new().ok()?);
    let signal = controller.signal();
    on_cleanup(move || controller.abort());
    Some(signal)
}

/// Fetches the full consumable collection. One shot, no retry.
pub async fn list_consumables(abort: Option<AbortSignal>) -> Result<Vec<Consumable>, FetchError> {
    let response = Request::get(CONSUMABLES_URL)
        .abort_signal(abort.as_ref())
        .send()
        .await
        .map_err(FetchError::Request)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response.json().await.map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_decode_failures_are_not_aborts() {
        assert!(!FetchError::Status(500).is_abort());
        assert!(!FetchError::Request(gloo_net::Error::GlooError("offline".to_string())).is_abort());
        assert!(!FetchError::Decode(gloo_net::Error::GlooError("not json".to_string())).is_abort());
    }
}
