use std::io::Write;

use rand::rngs::StdRng;
use tagkit_core::{Effect, Msg, OperationFailure};
use tagkit_engine::{
    extract_from_files, load_tag_pool, save_tags, select_random, AnchorTagExtractor, TagExtractor,
};
use tagkit_logging::{tagkit_debug, tagkit_info, tagkit_warn};

/// Executes effects synchronously and turns their outcome into follow-up messages.
///
/// Browser and clipboard requests are written to `out` for the caller to use.
pub struct EffectRunner<W: Write> {
    rng: StdRng,
    extractor: AnchorTagExtractor,
    out: W,
}

impl<W: Write> EffectRunner<W> {
    pub fn new(rng: StdRng, extractor: AnchorTagExtractor, out: W) -> Self {
        Self {
            rng,
            extractor,
            out,
        }
    }

    pub fn run(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::LoadPool { path } => {
                tagkit_info!("LoadPool path={:?}", path);
                let result = load_tag_pool(&path).map_err(OperationFailure::from);
                Some(Msg::PoolLoaded(result))
            }
            Effect::DrawSelection { pool, count } => {
                let selection = select_random(pool.as_slice(), count, &mut self.rng);
                tagkit_debug!("Drew {:?}", selection);
                Some(Msg::SelectionDrawn(selection))
            }
            Effect::OpenUrl { url } => {
                self.emit(&url);
                None
            }
            Effect::CopyToClipboard { text } => {
                self.emit(&text);
                None
            }
            Effect::ExtractFiles { paths } => {
                tagkit_info!("ExtractFiles count={}", paths.len());
                let extraction = extract_from_files(&self.extractor, &paths);
                Some(Msg::ExtractionDone {
                    tags: extraction.tags,
                    failures: extraction
                        .failures
                        .into_iter()
                        .map(OperationFailure::from)
                        .collect(),
                })
            }
            Effect::ExtractText { html } => {
                tagkit_info!("ExtractText html_len={}", html.len());
                Some(Msg::ExtractionDone {
                    tags: self.extractor.extract(&html),
                    failures: Vec::new(),
                })
            }
            Effect::SaveTags {
                path,
                tags,
                separator,
            } => {
                let result = save_tags(&path, &tags, &separator).map_err(OperationFailure::from);
                Some(Msg::SaveDone(result))
            }
        }
    }

    pub fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tagkit_warn!("Failed to write output: {}", err);
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use tagkit_core::{FailureKind, TagPool};
    use tempfile::TempDir;

    use super::*;

    fn runner() -> EffectRunner<Vec<u8>> {
        EffectRunner::new(
            StdRng::seed_from_u64(9),
            AnchorTagExtractor::new().unwrap(),
            Vec::new(),
        )
    }

    #[test]
    fn load_pool_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let msg = runner().run(Effect::LoadPool {
            path: temp.path().join("absent.txt"),
        });
        match msg {
            Some(Msg::PoolLoaded(Err(failure))) => {
                assert_eq!(failure.kind, FailureKind::FileNotFound)
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn draw_selection_returns_distinct_entries() {
        let msg = runner().run(Effect::DrawSelection {
            pool: TagPool::parse("a, b, c, d"),
            count: 3,
        });
        match msg {
            Some(Msg::SelectionDrawn(selection)) => {
                assert_eq!(selection.len(), 3);
                let mut sorted = selection.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn extract_text_returns_tags() {
        let msg = runner().run(Effect::ExtractText {
            html: r#"<a href="/t"><span class="name">foo</span><span class="count">10</span></a>"#
                .to_string(),
        });
        assert_eq!(
            msg,
            Some(Msg::ExtractionDone {
                tags: vec!["foo (10)".to_string()],
                failures: Vec::new(),
            })
        );
    }

    #[test]
    fn save_tags_writes_joined_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tags.txt");
        let msg = runner().run(Effect::SaveTags {
            path: path.clone(),
            tags: vec!["a".to_string(), "b (2)".to_string()],
            separator: "|".to_string(),
        });
        assert_eq!(msg, Some(Msg::SaveDone(Ok(path.clone()))));
        assert_eq!(fs::read_to_string(path).unwrap(), "a|b (2)");
    }

    #[test]
    fn clipboard_and_browser_requests_are_printed() {
        let mut runner = runner();
        assert_eq!(
            runner.run(Effect::OpenUrl {
                url: "https://example.test/".to_string()
            }),
            None
        );
        assert_eq!(
            runner.run(Effect::CopyToClipboard {
                text: "copied".to_string()
            }),
            None
        );
        assert_eq!(
            String::from_utf8_lossy(runner.output()),
            "https://example.test/\ncopied\n"
        );
    }
}
