use serde::{Deserialize, Serialize};

/// One item entry scraped from the listing page.
///
/// Field declaration order is the artifact field order, so the struct
/// serializes straight into the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: String,
    pub product_url: String,
    pub condition: String,
}

impl Listing {
    /// Artifact id for this listing, derived from its product URL.
    pub fn item_id(&self, keep_queryless: bool) -> Option<&str> {
        item_id_from_url(&self.product_url, keep_queryless)
    }
}

/// Extracts the item id from a product URL: the last non-empty path
/// segment, cut at the first `?`.
///
/// Live listing links carry tracking parameters after the `?`, and the
/// prefix is the stable numeric id. A URL without any `?` only yields an
/// id when `keep_queryless` is set, and the id is never empty.
pub fn item_id_from_url(url: &str, keep_queryless: bool) -> Option<&str> {
    let tail = url.rsplit('/').find(|segment| !segment.is_empty())?;
    match tail.split_once('?') {
        Some((id, _query)) if !id.is_empty() => Some(id),
        Some(_) => None,
        None if keep_queryless => Some(tail),
        None => None,
    }
}
