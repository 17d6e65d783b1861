//! Decoding of the remote feed payload.
//!
//! This is a pure function (no I/O) so the status and JSON rules can be
//! tested without a transport.  The expected document is:
//!
//! ```json
//! {
//!   "items": [
//!     { "id": "<uuid>", "description": "...", "location": "...", "image": "<url>" }
//!   ]
//! }
//! ```
//!
//! `id` and `image` are required; `description` and `location` may be absent
//! or `null`.  One bad item rejects the whole payload.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use super::http_client::HttpResponse;
use super::remote_feed_loader::RemoteFeedLoaderError;
use crate::feed::FeedItem;

const OK_200: u16 = 200;

#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Map a received response into feed items.
///
/// Only status 200 is accepted; anything else is [`InvalidData`] without
/// looking at the body.
///
/// [`InvalidData`]: RemoteFeedLoaderError::InvalidData
pub(crate) fn map(
    data: &[u8],
    response: &HttpResponse,
) -> Result<Vec<FeedItem>, RemoteFeedLoaderError> {
    if response.status != OK_200 {
        return Err(RemoteFeedLoaderError::InvalidData);
    }

    let root: Root =
        serde_json::from_slice(data).map_err(|_| RemoteFeedLoaderError::InvalidData)?;

    Ok(root.items.into_iter().map(FeedItem::from).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_response() -> HttpResponse {
        HttpResponse::new(Url::parse("https://a-url.com").unwrap(), 200)
    }

    fn to_bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn rejects_non_200_even_with_valid_body() {
        let body = to_bytes(json!({ "items": [] }));
        for status in [199, 201, 204, 300, 304, 400, 404, 500] {
            let response = HttpResponse::new(Url::parse("https://a-url.com").unwrap(), status);
            assert_eq!(
                map(&body, &response),
                Err(RemoteFeedLoaderError::InvalidData),
                "status {status}"
            );
        }
    }

    #[test]
    fn rejects_empty_body() {
        assert_eq!(map(b"", &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
    }

    #[test]
    fn rejects_document_without_items_key() {
        let body = to_bytes(json!({ "entries": [] }));
        assert_eq!(map(&body, &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
    }

    #[test]
    fn rejects_items_that_is_not_a_list() {
        let body = to_bytes(json!({ "items": "nope" }));
        assert_eq!(map(&body, &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
    }

    #[test]
    fn accepts_missing_and_null_optionals() {
        let id = Uuid::new_v4();
        let body = to_bytes(json!({
            "items": [{ "id": id, "description": null, "image": "https://a-url.com/1.png" }]
        }));

        let items = map(&body, &ok_response()).unwrap();

        assert_eq!(
            items,
            vec![FeedItem::new(
                id,
                None,
                None,
                Url::parse("https://a-url.com/1.png").unwrap()
            )]
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let body = to_bytes(json!({
            "items": [{ "id": Uuid::new_v4(), "image": "https://a-url.com", "likes": 3 }],
            "next_page": null
        }));
        assert_eq!(map(&body, &ok_response()).unwrap().len(), 1);
    }

    #[test]
    fn one_item_missing_id_fails_the_batch() {
        let body = to_bytes(json!({
            "items": [
                { "id": Uuid::new_v4(), "image": "https://a-url.com/1.png" },
                { "image": "https://a-url.com/2.png" }
            ]
        }));
        assert_eq!(map(&body, &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
    }

    #[test]
    fn one_item_missing_image_fails_the_batch() {
        let body = to_bytes(json!({
            "items": [
                { "id": Uuid::new_v4(), "image": "https://a-url.com/1.png" },
                { "id": Uuid::new_v4(), "description": "no image" }
            ]
        }));
        assert_eq!(map(&body, &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
    }

    #[test]
    fn malformed_id_or_image_fails_the_batch() {
        let bad_id = to_bytes(json!({
            "items": [{ "id": "not-a-uuid", "image": "https://a-url.com" }]
        }));
        let bad_image = to_bytes(json!({
            "items": [{ "id": Uuid::new_v4(), "image": "not a url" }]
        }));

        assert_eq!(map(&bad_id, &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
        assert_eq!(map(&bad_image, &ok_response()), Err(RemoteFeedLoaderError::InvalidData));
    }
}
