use tagkit_core::AppViewModel;

/// Lines printed after a `generate` run: the drawn tags, then the URL.
pub fn render_selection(view: &AppViewModel) -> Vec<String> {
    let mut lines = view.selection_lines.clone();
    if let Some(url) = &view.current_url {
        lines.push(url.clone());
    }
    lines
}

/// The joined extraction result, if anything was extracted.
pub fn render_extraction(view: &AppViewModel) -> Option<String> {
    (view.extracted_count > 0).then(|| view.result_text.clone())
}

/// One-line summary for the debug log.
pub fn status_line(view: &AppViewModel) -> String {
    format!(
        "Pool: {} tags | Draw: {} ({}) | Files: {} | Extracted: {}",
        view.pool_size,
        view.tag_count,
        view.sort,
        view.html_files.len(),
        view.extracted_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selection_lists_tags_then_url() {
        let view = AppViewModel {
            selection_lines: vec!["Tag 1: a (3)".to_string(), "Tag 2: b".to_string()],
            current_url: Some("https://x/?q=tag%3Aa%2C+b&sort=popular".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(
            render_selection(&view),
            vec![
                "Tag 1: a (3)",
                "Tag 2: b",
                "https://x/?q=tag%3Aa%2C+b&sort=popular"
            ]
        );
    }

    #[test]
    fn empty_extraction_renders_nothing() {
        assert_eq!(render_extraction(&AppViewModel::default()), None);
        let view = AppViewModel {
            extracted_count: 2,
            result_text: "a, b".to_string(),
            ..AppViewModel::default()
        };
        assert_eq!(render_extraction(&view).as_deref(), Some("a, b"));
    }

    #[test]
    fn status_line_summarizes_counts() {
        let view = AppViewModel {
            pool_size: 12,
            tag_count: 3,
            ..AppViewModel::default()
        };
        assert_eq!(
            status_line(&view),
            "Pool: 12 tags | Draw: 3 (popular-week) | Files: 0 | Extracted: 0"
        );
    }
}
