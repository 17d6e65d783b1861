//! essential-feed: load a JSON feed over HTTP with a pluggable transport.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────────────┐  get(url)   ┌──────────────┐
//! │  RemoteFeedLoader   │ ──────────► │  HttpClient  │  (trait)
//! │  (maps the result)  │ ◄────────── │              │
//! └─────────────────────┘  completion └──────────────┘
//!           │                           ▲
//!           ▼                           │ impl
//!   Result<Vec<FeedItem>,     ReqwestHttpClient / test spies
//!     RemoteFeedLoaderError>
//! ```
//!
//! * **`feed`**: the [`FeedItem`] value type and the [`FeedLoader`] trait.
//! * **`api`**: the [`HttpClient`] seam, [`RemoteFeedLoader`], and the
//!   `reqwest`-backed client.

pub mod api;
pub mod feed;

pub use api::{
    HttpClient, HttpClientResult, HttpResponse, RemoteFeedLoader, RemoteFeedLoaderError,
    RemoteLoadResult, ReqwestHttpClient,
};
pub use feed::{FeedItem, FeedLoader, LoadFeedResult};
