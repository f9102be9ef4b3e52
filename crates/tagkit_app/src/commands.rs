use std::io::{self, Read, Write};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tagkit_core::{AppState, Msg};
use tagkit_engine::AnchorTagExtractor;

use crate::app::App;
use crate::cli::{ExtractArgs, GenerateArgs};
use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::render;

fn build_app<W: Write>(
    config: &AppConfig,
    seed: Option<u64>,
    name_selector: Option<String>,
    count_selector: Option<String>,
    out: W,
) -> anyhow::Result<App<W>> {
    let name_selector = name_selector.unwrap_or_else(|| config.name_selector.clone());
    let count_selector = count_selector.unwrap_or_else(|| config.count_selector.clone());
    let extractor = AnchorTagExtractor::with_selectors(&name_selector, &count_selector)
        .context("invalid extraction selector")?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let runner = EffectRunner::new(rng, extractor, out);
    Ok(App::new(
        AppState::with_settings(config.settings.clone()),
        runner,
    ))
}

/// Load the tag pool, draw a selection and print it followed by the URL.
pub fn run_generate<W: Write>(
    config: AppConfig,
    args: GenerateArgs,
    out: W,
) -> anyhow::Result<App<W>> {
    let mut app = build_app(&config, args.seed, None, None, out)?;

    if let Some(path) = args.tags_file {
        app.dispatch(Msg::TagsFileChanged(path));
    }
    if let Some(count) = args.count {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        app.dispatch(Msg::TagCountChanged(count));
    }
    if let Some(sort) = args.sort {
        app.dispatch(Msg::SortChanged(sort));
    }
    if let Some(url) = args.base_url {
        app.dispatch(Msg::BaseUrlChanged(url));
    }

    app.dispatch(Msg::LoadClicked);
    if app.view().pool_size > 0 {
        app.dispatch(Msg::GenerateClicked);
    }

    for line in render::render_selection(&app.view()) {
        app.print(&line);
    }
    Ok(app)
}

/// Extract tags from the listed files, or from `input` when none are given.
///
/// `--output` is only written when something was extracted.
pub fn run_extract<R: Read, W: Write>(
    config: AppConfig,
    args: ExtractArgs,
    input: R,
    out: W,
) -> anyhow::Result<App<W>> {
    let mut app = build_app(&config, None, args.name_selector, args.count_selector, out)?;

    if let Some(separator) = args.separator {
        app.dispatch(Msg::SeparatorChanged(separator));
    }

    if args.files.is_empty() {
        let html = io::read_to_string(input).context("failed to read HTML from stdin")?;
        app.dispatch(Msg::HtmlInputChanged(html));
        app.dispatch(Msg::ExtractFromTextClicked);
    } else {
        app.dispatch(Msg::HtmlFilesSelected(args.files));
        app.dispatch(Msg::ExtractFromFilesClicked);
    }

    if let Some(path) = args.output {
        if app.view().extracted_count > 0 {
            app.dispatch(Msg::SaveClicked(path));
        }
    }

    if let Some(result) = render::render_extraction(&app.view()) {
        app.print(&result);
    }
    Ok(app)
}
