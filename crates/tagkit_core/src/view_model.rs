use crate::SortOrder;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub tags_file: String,
    pub base_url: String,
    pub tag_count: usize,
    pub sort: SortOrder,
    pub pool_size: usize,
    /// `Tag 1: name (count)` style lines for the last selection.
    pub selection_lines: Vec<String>,
    pub current_url: Option<String>,
    /// File names (not full paths) queued for extraction.
    pub html_files: Vec<String>,
    pub separator: String,
    pub extracted_count: usize,
    pub result_text: String,
    pub dirty: bool,
}
