//! The transport seam.
//!
//! [`RemoteFeedLoader`](super::RemoteFeedLoader) never talks to the network
//! directly.  It asks an [`HttpClient`] for the bytes at a URL and gets back
//! exactly one [`HttpClientResult`].  Production code plugs in
//! [`ReqwestHttpClient`](super::ReqwestHttpClient); tests plug in a spy that
//! records requests and completes them on demand.

use url::Url;

/// Response metadata for a request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The URL the response was received for.
    pub url: Url,
    /// HTTP status code, reported verbatim.
    pub status: u16,
}

impl HttpResponse {
    pub fn new(url: Url, status: u16) -> Self {
        Self { url, status }
    }
}

/// Outcome of a single HTTP attempt.
#[derive(Debug)]
pub enum HttpClientResult {
    /// A response was received.  Any status code counts, not just 2xx.
    Success(Vec<u8>, HttpResponse),
    /// No response was obtained (DNS, refused connection, timeout, ...).
    Failure(anyhow::Error),
}

/// Single-shot completion handed to [`HttpClient::get`].
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Performs GET requests on behalf of a loader.
///
/// Implementations must call `completion` exactly once, either before `get`
/// returns or later from another thread or task.  There is no retry and no
/// cancellation at this layer.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
