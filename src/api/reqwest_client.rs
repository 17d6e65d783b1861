//! [`HttpClient`] backed by `reqwest`.
//!
//! Requests run as tasks on a caller-supplied tokio runtime, so `get` returns
//! immediately and the completion fires later from that task.
//!
//! Redirects are not followed: a 3xx is reported to the loader like any other
//! status.  If the task never gets to run (runtime already shut down, or shut
//! down mid-request) the completion still fires once, with a failure.

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::redirect::Policy;
use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

use super::http_client::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse};

/// Time allowed to establish a TCP/TLS connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Time allowed for the whole request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Build a client with the default timeouts and redirects disabled.
    ///
    /// `runtime` is where request tasks get spawned; inside async code pass
    /// `Handle::current()`.
    pub fn new(runtime: Handle) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::none())
            .build()?;
        Ok(Self::with_client(client, runtime))
    }

    /// Use an already configured `reqwest::Client`.
    ///
    /// The client's redirect policy is used as-is; build it with
    /// `Policy::none()` to keep 3xx responses visible.
    pub fn with_client(client: Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = self.client.clone();
        let url = url.clone();

        let guard = CompletionGuard::new(completion);

        self.runtime.spawn(async move {
            guard.complete(fetch(&client, url).await);
        });
    }
}

/// Owns a completion until it is called.
///
/// Dropping the guard uncalled (the spawned future was dropped before it
/// finished) delivers a failure instead.
struct CompletionGuard(Option<HttpClientCompletion>);

impl CompletionGuard {
    fn new(completion: HttpClientCompletion) -> Self {
        Self(Some(completion))
    }

    fn complete(mut self, result: HttpClientResult) {
        if let Some(completion) = self.0.take() {
            completion(result);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(completion) = self.0.take() {
            warn!("Request task dropped before completing");
            completion(HttpClientResult::Failure(anyhow!("request task cancelled")));
        }
    }
}

async fn fetch(client: &Client, url: Url) -> HttpClientResult {
    debug!(url = %url, "GET");

    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(url = %url, error = %e, "Request failed");
            return HttpClientResult::Failure(e.into());
        }
    };

    let status = response.status().as_u16();

    match response.bytes().await {
        Ok(body) => {
            debug!(url = %url, status, bytes = body.len(), "Response received");
            HttpClientResult::Success(body.to_vec(), HttpResponse::new(url, status))
        }
        Err(e) => {
            warn!(url = %url, status, error = %e, "Failed to read response body");
            HttpClientResult::Failure(e.into())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
