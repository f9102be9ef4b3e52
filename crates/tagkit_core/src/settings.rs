use std::path::PathBuf;

use crate::{SortOrder, DEFAULT_BASE_URL, DEFAULT_SEPARATOR};

pub const DEFAULT_TAGS_FILE: &str = "tags.txt";
pub const DEFAULT_TAG_COUNT: usize = 3;

/// User-adjustable inputs shared by both tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tags_file: PathBuf,
    pub base_url: String,
    pub tag_count: usize,
    pub sort: SortOrder,
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tags_file: PathBuf::from(DEFAULT_TAGS_FILE),
            base_url: DEFAULT_BASE_URL.to_string(),
            tag_count: DEFAULT_TAG_COUNT,
            sort: SortOrder::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
