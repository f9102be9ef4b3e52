use tagkit_logging::tagkit_debug;

use crate::{AppState, Effect, FailureKind, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TagsFileChanged(path) => {
            state.settings_mut().tags_file = path;
            Vec::new()
        }
        Msg::BaseUrlChanged(url) => {
            state.settings_mut().base_url = url;
            Vec::new()
        }
        Msg::TagCountChanged(count) => {
            state.set_tag_count(count);
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            state.set_sort(sort);
            Vec::new()
        }
        Msg::SeparatorChanged(separator) => {
            state.settings_mut().separator = separator;
            Vec::new()
        }
        Msg::LoadClicked => vec![Effect::LoadPool {
            path: state.settings().tags_file.clone(),
        }],
        Msg::PoolLoaded(Ok(pool)) => {
            state.notify(Notice::info(format!("Loaded {} tags", pool.len())));
            state.set_pool(pool);
            Vec::new()
        }
        Msg::PoolLoaded(Err(failure)) => {
            // An empty file replaces the pool; other failures keep the last good one.
            if failure.kind == FailureKind::EmptyPool {
                state.set_pool(Default::default());
            }
            state.notify(Notice::from_failure(&failure));
            Vec::new()
        }
        Msg::GenerateClicked => {
            if state.pool().is_empty() {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Load a tag file first",
                ));
                return (state, Vec::new());
            }
            let available = state.pool().len();
            let mut count = state.settings().tag_count;
            if count > available {
                state.notify(Notice::warning(
                    FailureKind::InsufficientPoolSize,
                    format!("Only {available} tags available; drawing {available}"),
                ));
                count = available;
            }
            tagkit_debug!("Drawing {} of {} tags", count, available);
            vec![Effect::DrawSelection {
                pool: state.pool().clone(),
                count,
            }]
        }
        Msg::SelectionDrawn(selection) => {
            state.apply_selection(selection);
            Vec::new()
        }
        Msg::OpenInBrowserClicked => match state.current_url().map(str::to_string) {
            Some(url) => vec![Effect::OpenUrl { url }],
            None => {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Generate a URL first",
                ));
                Vec::new()
            }
        },
        Msg::CopyUrlClicked => match state.current_url().map(str::to_string) {
            Some(text) => vec![Effect::CopyToClipboard { text }],
            None => {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Generate a URL first",
                ));
                Vec::new()
            }
        },
        Msg::HtmlFilesSelected(paths) => {
            if !paths.is_empty() {
                state.add_html_files(paths);
                let selected = state.html_files().len();
                state.notify(Notice::info(format!("{selected} files selected")));
            }
            Vec::new()
        }
        Msg::ClearFilesClicked => {
            state.clear_html_files();
            state.notify(Notice::info("File list cleared"));
            Vec::new()
        }
        Msg::HtmlInputChanged(html) => {
            state.set_html_input(html);
            Vec::new()
        }
        Msg::ClearHtmlInputClicked => {
            state.set_html_input(String::new());
            Vec::new()
        }
        Msg::ExtractFromFilesClicked => {
            if state.html_files().is_empty() {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Select HTML files first",
                ));
                Vec::new()
            } else {
                vec![Effect::ExtractFiles {
                    paths: state.html_files().to_vec(),
                }]
            }
        }
        Msg::ExtractFromTextClicked => {
            let html = state.html_input().trim().to_string();
            if html.is_empty() {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Paste HTML first",
                ));
                Vec::new()
            } else {
                vec![Effect::ExtractText { html }]
            }
        }
        Msg::ExtractionDone { tags, failures } => {
            for failure in &failures {
                state.notify(Notice::from_failure(failure));
            }
            if tags.is_empty() {
                state.set_extracted(Vec::new());
                state.notify(Notice::warning(
                    FailureKind::NoMatchesFound,
                    "No <span class=\"name\"> found inside <a href> elements",
                ));
            } else {
                state.notify(Notice::info(format!(
                    "Extracted {} unique tags",
                    tags.len()
                )));
                state.set_extracted(tags);
            }
            Vec::new()
        }
        Msg::SaveClicked(path) => {
            if state.extracted().is_empty() {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Nothing to save; extract tags first",
                ));
                Vec::new()
            } else {
                vec![Effect::SaveTags {
                    path,
                    tags: state.extracted().to_vec(),
                    separator: state.settings().separator.clone(),
                }]
            }
        }
        Msg::SaveDone(Ok(path)) => {
            state.notify(Notice::info(format!("Saved to {}", path.display())));
            Vec::new()
        }
        Msg::SaveDone(Err(failure)) => {
            state.notify(Notice::from_failure(&failure));
            Vec::new()
        }
        Msg::CopyResultClicked => {
            if state.extracted().is_empty() {
                state.notify(Notice::warning(
                    FailureKind::MissingInput,
                    "Nothing to copy",
                ));
                Vec::new()
            } else {
                vec![Effect::CopyToClipboard {
                    text: state.result_text(),
                }]
            }
        }
        Msg::ClearResultClicked => {
            state.set_extracted(Vec::new());
            state.notify(Notice::info("Result cleared"));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
