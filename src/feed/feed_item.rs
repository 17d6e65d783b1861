//! The value type every feed loader produces.
//!
//! `FeedItem` is a plain, immutable record.  Loaders convert whatever their
//! wire format looks like into `FeedItem`s so callers never see transport
//! or decoding details.

use url::Url;
use uuid::Uuid;

/// A single feed entry.
///
/// Equality is structural: two items compare equal when every field matches,
/// which is what tests rely on when checking that decoded items pass through
/// unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FeedItem {
    /// Stable unique identifier.
    pub id: Uuid,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Optional human-readable location.
    pub location: Option<String>,

    /// Absolute URL of the item's image.
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_item(description: Option<&str>) -> FeedItem {
        FeedItem::new(
            Uuid::new_v4(),
            description.map(String::from),
            None,
            Url::parse("https://a-url.com/image.png").unwrap(),
        )
    }

    #[test]
    fn optional_fields_stay_none() {
        let item = make_item(None);
        assert!(item.description.is_none());
        assert!(item.location.is_none());
    }

    #[test]
    fn clones_compare_equal() {
        let item = make_item(Some("a description"));
        assert_eq!(item.clone(), item);
    }

    #[test]
    fn items_with_different_ids_differ() {
        let a = make_item(Some("same"));
        let mut b = a.clone();
        b.id = Uuid::new_v4();
        assert_ne!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
