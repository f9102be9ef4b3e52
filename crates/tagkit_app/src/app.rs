use std::collections::VecDeque;
use std::io::Write;

use tagkit_core::{update, AppState, AppViewModel, Msg, NoticeLevel};
use tagkit_logging::{tagkit_debug, tagkit_error, tagkit_info, tagkit_warn};

use crate::effects::EffectRunner;
use crate::render;

/// Owns the application state and feeds effect results back through `update`.
pub struct App<W: Write> {
    state: AppState,
    runner: EffectRunner<W>,
    had_errors: bool,
}

impl<W: Write> App<W> {
    pub fn new(state: AppState, runner: EffectRunner<W>) -> Self {
        Self {
            state,
            runner,
            had_errors: false,
        }
    }

    /// Apply `msg` and every message produced by the effects it triggers.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            self.report_notices();
            for effect in effects {
                if let Some(next) = self.runner.run(effect) {
                    inbox.push_back(next);
                }
            }
        }
        if self.state.consume_dirty() {
            tagkit_debug!("{}", render::status_line(&self.state.view()));
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Whether any error-level notice was raised so far.
    pub fn had_errors(&self) -> bool {
        self.had_errors
    }

    pub fn print(&mut self, line: &str) {
        self.runner.emit(line);
    }

    fn report_notices(&mut self) {
        for notice in self.state.take_notices() {
            match notice.level {
                NoticeLevel::Info => tagkit_info!("{}", notice.message),
                NoticeLevel::Warning => tagkit_warn!("{}", notice.message),
                NoticeLevel::Error => {
                    self.had_errors = true;
                    match notice.kind {
                        Some(kind) => tagkit_error!("{}: {}", kind, notice.message),
                        None => tagkit_error!("{}", notice.message),
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        self.runner.output()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tagkit_core::{Settings, SortOrder};
    use tagkit_engine::AnchorTagExtractor;
    use tempfile::TempDir;

    use super::*;

    fn app(settings: Settings) -> App<Vec<u8>> {
        tagkit_logging::initialize_for_tests();
        let runner = EffectRunner::new(
            StdRng::seed_from_u64(1),
            AnchorTagExtractor::new().unwrap(),
            Vec::new(),
        );
        App::new(AppState::with_settings(settings), runner)
    }

    #[test]
    fn load_then_generate_produces_url_for_drawn_tags() {
        let temp = TempDir::new().unwrap();
        let tags_file = temp.path().join("tags.txt");
        fs::write(&tags_file, "large breasts (12345), glasses").unwrap();

        let mut app = app(Settings {
            tags_file,
            tag_count: 2,
            sort: SortOrder::PopularWeek,
            ..Settings::default()
        });
        app.dispatch(Msg::LoadClicked);
        app.dispatch(Msg::GenerateClicked);

        let view = app.view();
        assert_eq!(view.pool_size, 2);
        assert_eq!(view.selection_lines.len(), 2);
        let url = view.current_url.expect("url");
        assert!(url.starts_with("https://nhentai.net/search/?q=tag%3A"));
        assert!(url.contains("large+breasts"));
        assert!(url.contains("glasses"));
        assert!(!url.contains("12345"));
        assert!(url.ends_with("&sort=popular-week"));
        assert!(!app.had_errors());
    }

    #[test]
    fn oversized_count_is_clamped_not_an_error() {
        let temp = TempDir::new().unwrap();
        let tags_file = temp.path().join("tags.txt");
        fs::write(&tags_file, "solo").unwrap();

        let mut app = app(Settings {
            tags_file,
            tag_count: 4,
            ..Settings::default()
        });
        app.dispatch(Msg::LoadClicked);
        app.dispatch(Msg::GenerateClicked);
        assert_eq!(app.view().selection_lines, vec!["Tag 1: solo"]);
        assert!(!app.had_errors());
    }

    #[test]
    fn missing_tag_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut app = app(Settings {
            tags_file: temp.path().join("absent.txt"),
            ..Settings::default()
        });
        app.dispatch(Msg::LoadClicked);
        app.dispatch(Msg::GenerateClicked);
        assert!(app.had_errors());
        assert_eq!(app.view().current_url, None);
    }

    #[test]
    fn extract_text_and_save() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.txt");
        let mut app = app(Settings::default());

        app.dispatch(Msg::HtmlInputChanged(
            r#"<a href="/x"><span class="name">foo</span><span class="count">10</span></a>
               <a href="/y"><span class="name">bar</span></a>"#
                .to_string(),
        ));
        app.dispatch(Msg::ExtractFromTextClicked);
        app.dispatch(Msg::SaveClicked(output.clone()));

        assert_eq!(app.view().result_text, "foo (10), bar");
        assert_eq!(fs::read_to_string(output).unwrap(), "foo (10), bar");
        assert!(!app.had_errors());
    }

    #[test]
    fn extract_files_with_missing_entry_reports_error_but_keeps_results() {
        let temp = TempDir::new().unwrap();
        let page = temp.path().join("page.html");
        fs::write(&page, r#"<a href="/bar"><span class="name">bar</span></a>"#).unwrap();

        let mut app = app(Settings::default());
        app.dispatch(Msg::HtmlFilesSelected(vec![
            page.clone(),
            temp.path().join("gone.html"),
            page,
        ]));
        app.dispatch(Msg::ExtractFromFilesClicked);

        assert_eq!(app.view().result_text, "bar");
        assert!(app.had_errors());
    }

    #[test]
    fn copy_result_goes_to_output() {
        let mut app = app(Settings::default());
        app.dispatch(Msg::ExtractionDone {
            tags: vec!["a".to_string(), "b".to_string()],
            failures: Vec::new(),
        });
        app.dispatch(Msg::SeparatorChanged("|".to_string()));
        app.dispatch(Msg::CopyResultClicked);
        app.print("done");
        assert_eq!(String::from_utf8_lossy(app.output()), "a|b\ndone\n");
    }
}
