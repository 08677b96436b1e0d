//! Shared blocking-over-async plumbing for the HTTP providers.
//!
//! The collaborator traits in `wayfinder-core` are synchronous. Each
//! provider owns a `current_thread` Tokio runtime and drives its `reqwest`
//! futures to completion on it. When the caller is already inside a
//! multi-threaded Tokio runtime (detected via [`Handle::try_current`]), the
//! provider uses that runtime's handle with [`tokio::task::block_in_place`]
//! to avoid nested-runtime panics; inside a `current_thread` runtime it
//! falls back to its own runtime, which may block the caller's runtime.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Default request timeout in seconds for both providers.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent.
///
/// Nominatim's usage policy requires an identifying user agent, so the
/// providers always send one.
pub(crate) const DEFAULT_USER_AGENT: &str = "wayfinder/0.1";

/// Errors constructing an HTTP provider.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// An HTTP client paired with a runtime to drive it synchronously.
pub(crate) struct BlockingClient {
    client: Client,
    runtime: Runtime,
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl BlockingClient {
    /// Build a client with the given timeout and user agent.
    pub(crate) fn new(timeout: Duration, user_agent: &str) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self { client, runtime })
    }

    /// The wrapped `reqwest` client.
    pub(crate) const fn client(&self) -> &Client {
        &self.client
    }

    /// Run `future` to completion on whichever runtime is appropriate.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }
}
