use std::path::{Path, PathBuf};

use crate::view_model::AppViewModel;
use crate::{
    build_search_url, extract_tag_name, join_tags, Notice, Settings, SortOrder, TagPool,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: Settings,
    pool: TagPool,
    selection: Vec<String>,
    current_url: Option<String>,
    html_files: Vec<PathBuf>,
    html_input: String,
    extracted: Vec<String>,
    notices: Vec<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut settings: Settings) -> Self {
        settings.tag_count = settings.tag_count.max(1);
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            tags_file: self.settings.tags_file.display().to_string(),
            base_url: self.settings.base_url.clone(),
            tag_count: self.settings.tag_count,
            sort: self.settings.sort,
            pool_size: self.pool.len(),
            selection_lines: self
                .selection
                .iter()
                .enumerate()
                .map(|(i, tag)| format!("Tag {}: {}", i + 1, tag))
                .collect(),
            current_url: self.current_url.clone(),
            html_files: self
                .html_files
                .iter()
                .map(|path| display_file_name(path))
                .collect(),
            separator: self.settings.separator.clone(),
            extracted_count: self.extracted.len(),
            result_text: self.result_text(),
            dirty: self.dirty,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pool(&self) -> &TagPool {
        &self.pool
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn html_files(&self) -> &[PathBuf] {
        &self.html_files
    }

    pub fn html_input(&self) -> &str {
        &self.html_input
    }

    pub fn extracted(&self) -> &[String] {
        &self.extracted
    }

    /// Extracted tags joined with the configured separator.
    pub fn result_text(&self) -> String {
        join_tags(&self.extracted, &self.settings.separator)
    }

    /// Drain notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
        self.dirty = true;
    }

    pub(crate) fn settings_mut(&mut self) -> &mut Settings {
        self.dirty = true;
        &mut self.settings
    }

    pub(crate) fn set_tag_count(&mut self, count: usize) {
        self.settings_mut().tag_count = count.max(1);
    }

    pub(crate) fn set_sort(&mut self, sort: SortOrder) {
        self.settings_mut().sort = sort;
    }

    pub(crate) fn set_pool(&mut self, pool: TagPool) {
        self.pool = pool;
        self.dirty = true;
    }

    /// Store the draw and rebuild the URL from the count-stripped names.
    pub(crate) fn apply_selection(&mut self, selection: Vec<String>) {
        let names: Vec<&str> = selection.iter().map(|tag| extract_tag_name(tag)).collect();
        let url = build_search_url(
            &self.settings.base_url,
            &names,
            self.settings.sort.as_str(),
        );
        self.selection = selection;
        self.current_url = Some(url);
        self.dirty = true;
    }

    pub(crate) fn add_html_files(&mut self, paths: Vec<PathBuf>) {
        self.html_files.extend(paths);
        self.dirty = true;
    }

    pub(crate) fn clear_html_files(&mut self) {
        self.html_files.clear();
        self.dirty = true;
    }

    pub(crate) fn set_html_input(&mut self, html: String) {
        self.html_input = html;
        self.dirty = true;
    }

    pub(crate) fn set_extracted(&mut self, tags: Vec<String>) {
        self.extracted = tags;
        self.dirty = true;
    }
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
