//! Feed domain layer.
//!
//! This module defines the [`FeedLoader`] capability and the common
//! [`FeedItem`] type.  It knows nothing about HTTP; concrete loaders live
//! elsewhere (see [`crate::api`]).
//!
//! ## For contributors: adding a new loader
//!
//! 1. Define a struct holding whatever configuration the loader needs.
//! 2. Implement [`FeedLoader`] for it, choosing an `Error` type that
//!    describes the failures callers should be able to tell apart.
//! 3. Call the completion exactly once per `load`.

mod feed_item;

pub use feed_item::FeedItem;

/// Outcome of a single feed load.
pub type LoadFeedResult<E> = Result<Vec<FeedItem>, E>;

/// Anything that can load a batch of [`FeedItem`]s.
///
/// `load` hands its outcome to `completion` rather than returning it, so
/// implementations are free to finish on the calling thread or on some
/// background task.
///
/// ```ignore
/// fn print_count<L: FeedLoader>(loader: &L)
/// where
///     L::Error: std::fmt::Display,
/// {
///     loader.load(|result| match result {
///         Ok(items) => println!("{} items", items.len()),
///         Err(e) => eprintln!("load failed: {e}"),
///     });
/// }
/// ```
pub trait FeedLoader {
    /// Failure type delivered through the completion.
    type Error;

    /// Start one load.
    ///
    /// `completion` runs exactly once per call.  The only exception is a
    /// loader dropped before its load finished: that result is discarded
    /// and `completion` never runs.
    fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadFeedResult<Self::Error>) + Send + 'static;
}
