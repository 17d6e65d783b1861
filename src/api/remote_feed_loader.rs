//! Loading the feed from a remote endpoint.
//!
//! [`RemoteFeedLoader`] owns a URL and an [`HttpClient`].  Each call to
//! [`load`](RemoteFeedLoader::load) issues one GET and translates the single
//! transport outcome into a [`RemoteLoadResult`]:
//!
//! | Transport outcome                 | Result                     |
//! |-----------------------------------|----------------------------|
//! | failure of any kind               | `Err(Connectivity)`        |
//! | response with status other than 200 | `Err(InvalidData)`       |
//! | 200 with a body that won't decode | `Err(InvalidData)`         |
//! | 200 with a valid feed document    | `Ok(items)`                |
//!
//! There is no retry, caching, or de-duplication; a caller wanting another
//! attempt calls `load` again.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

use super::feed_items_mapper;
use super::http_client::{HttpClient, HttpClientResult};
use crate::feed::{FeedLoader, LoadFeedResult};

/// The two ways a remote load can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoteFeedLoaderError {
    /// No response was obtained.
    #[error("connectivity error")]
    Connectivity,
    /// A response arrived but had the wrong status or an undecodable body.
    #[error("invalid data")]
    InvalidData,
}

pub type RemoteLoadResult = LoadFeedResult<RemoteFeedLoaderError>;

/// Loads [`FeedItem`](crate::FeedItem)s from a fixed URL.
///
/// Construction does no I/O.  The URL and client are fixed for the lifetime
/// of the loader, so one instance can serve concurrent callers.
///
/// If the loader is dropped while a request is still in flight, that
/// request's result is discarded and its completion never runs.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    // In-flight completions hold a `Weak` to this; see `load`.
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue one GET to the configured URL and deliver the mapped outcome
    /// to `completion`.
    ///
    /// `completion` runs exactly once, after the client reports back, unless
    /// this loader has been dropped by then.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(RemoteLoadResult) + Send + 'static,
    {
        debug!(url = %self.url, "Loading feed");

        let alive = Arc::downgrade(&self.alive);
        let url = self.url.clone();

        self.client.get(
            &self.url,
            Box::new(move |result| {
                if alive.upgrade().is_none() {
                    debug!(url = %url, "Loader dropped before request finished; discarding result");
                    return;
                }
                completion(map_result(result));
            }),
        );
    }

    /// Future-based form of [`load`](Self::load).
    ///
    /// Resolves to `Err(Connectivity)` if the client drops its completion
    /// without ever calling it.
    pub async fn load_async(&self) -> RemoteLoadResult {
        let (tx, rx) = oneshot::channel();

        self.load(move |result| {
            // The receiver is only gone if the caller stopped awaiting.
            let _ = tx.send(result);
        });

        match rx.await {
            Ok(result) => result,
            Err(_) => {
                warn!(url = %self.url, "HTTP client dropped its completion without responding");
                Err(RemoteFeedLoaderError::Connectivity)
            }
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    type Error = RemoteFeedLoaderError;

    fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadFeedResult<Self::Error>) + Send + 'static,
    {
        RemoteFeedLoader::load(self, completion);
    }
}

fn map_result(result: HttpClientResult) -> RemoteLoadResult {
    match result {
        HttpClientResult::Success(data, response) => {
            let mapped = feed_items_mapper::map(&data, &response);
            match &mapped {
                Ok(items) => debug!(url = %response.url, count = items.len(), "Feed loaded"),
                Err(e) => debug!(
                    url = %response.url,
                    status = response.status,
                    bytes = data.len(),
                    "Rejected feed response: {e}"
                ),
            }
            mapped
        }
        HttpClientResult::Failure(error) => {
            debug!(error = %error, "Feed request failed");
            Err(RemoteFeedLoaderError::Connectivity)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
