//! Remote (HTTP) feed loading.
//!
//! * [`http_client`]: the transport seam ([`HttpClient`] and its result type).
//! * [`remote_feed_loader`]: [`RemoteFeedLoader`], which turns transport
//!   outcomes into feed results.
//! * `feed_items_mapper`: status check and JSON decoding (crate-private).
//! * [`reqwest_client`]: the production [`HttpClient`].

mod feed_items_mapper;
pub mod http_client;
pub mod remote_feed_loader;
pub mod reqwest_client;

pub use http_client::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse};
pub use remote_feed_loader::{RemoteFeedLoader, RemoteFeedLoaderError, RemoteLoadResult};
pub use reqwest_client::ReqwestHttpClient;
