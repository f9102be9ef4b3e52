use scraper::{ElementRef, Html, Selector};
use tagkit_core::dedup_preserving_order;

use crate::TagError;

pub const DEFAULT_NAME_SELECTOR: &str = "span.name";
pub const DEFAULT_COUNT_SELECTOR: &str = "span.count";

pub trait TagExtractor {
    /// Ordered, deduplicated tag entries found in one document.
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Extracts `"<name> (<count>)"` entries from `<a href>` elements:
/// - the name is the first descendant matching the name selector
/// - the count, if any, is the first descendant matching the count selector
/// - anchors without a name contribute nothing.
#[derive(Debug, Clone)]
pub struct AnchorTagExtractor {
    anchor: Selector,
    name: Selector,
    count: Selector,
}

impl AnchorTagExtractor {
    pub fn new() -> Result<Self, TagError> {
        Self::with_selectors(DEFAULT_NAME_SELECTOR, DEFAULT_COUNT_SELECTOR)
    }

    pub fn with_selectors(name: &str, count: &str) -> Result<Self, TagError> {
        Ok(Self {
            anchor: parse_selector("a[href]")?,
            name: parse_selector(name)?,
            count: parse_selector(count)?,
        })
    }

    fn entry_for(&self, anchor: ElementRef) -> Option<String> {
        let name = element_text(anchor.select(&self.name).next()?);
        let entry = match anchor.select(&self.count).next() {
            Some(count) => format!("{name} ({})", element_text(count)),
            None => name,
        };
        (!entry.is_empty()).then_some(entry)
    }
}

impl TagExtractor for AnchorTagExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        let entries = doc
            .select(&self.anchor)
            .filter_map(|anchor| self.entry_for(anchor));
        dedup_preserving_order(entries)
    }
}

/// Concatenate per-document results, then dedup the whole collection.
pub fn extract_from_documents<I, S>(extractor: &dyn TagExtractor, documents: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let all = documents
        .into_iter()
        .flat_map(|doc| extractor.extract(doc.as_ref()));
    dedup_preserving_order(all)
}

fn parse_selector(selector: &str) -> Result<Selector, TagError> {
    Selector::parse(selector).map_err(|err| TagError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
