use scraper::{ElementRef, Html, Selector};

use crate::crawler::models::Listing;

/// Compiled selectors for the four sub-fields of one listing fragment.
struct ItemSelectors {
    title: Selector,
    price: Selector,
    link: Selector,
    subtitle: Selector,
}

impl ItemSelectors {
    fn new() -> Self {
        Self {
            title: Selector::parse(".s-item__title").unwrap(),
            price: Selector::parse(".s-item__price").unwrap(),
            link: Selector::parse("a.s-item__link").unwrap(),
            subtitle: Selector::parse(".s-item__subtitle").unwrap(),
        }
    }

    /// Maps one `.s-item` fragment to a [`Listing`]. The four lookups are
    /// independent; a missing sub-element yields an empty string, never an
    /// error, since result pages routinely contain stub entries.
    fn listing_from(&self, element: &ElementRef) -> Listing {
        Listing {
            title: child_text(element, &self.title),
            price: child_text(element, &self.price),
            product_url: child_attr(element, &self.link, "href"),
            condition: child_text(element, &self.subtitle),
        }
    }
}

/// Extracts every listing entry on the page, in document order.
pub fn extract_listings(html: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let items = Selector::parse(".s-item").unwrap();
    let selectors = ItemSelectors::new();

    document
        .select(&items)
        .map(|element| selectors.listing_from(&element))
        .collect()
}

/// Trimmed text of the first match under `element`, or an empty string.
fn child_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Attribute of the first match under `element`, or an empty string.
fn child_attr(element: &ElementRef, selector: &Selector, attr: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|node| node.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}
