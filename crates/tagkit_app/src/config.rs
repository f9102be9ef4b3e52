use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tagkit_core::{Settings, SortOrder};
use tagkit_engine::{DEFAULT_COUNT_SELECTOR, DEFAULT_NAME_SELECTOR};
use tagkit_logging::{tagkit_info, tagkit_warn};

const CONFIG_FILENAME: &str = "tagkit.ron";

/// Settings file layout. Every field is optional and falls back to the default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct SettingsFile {
    tags_file: Option<PathBuf>,
    base_url: Option<String>,
    tag_count: Option<usize>,
    sort: Option<String>,
    separator: Option<String>,
    name_selector: Option<String>,
    count_selector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub settings: Settings,
    pub name_selector: String,
    pub count_selector: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            name_selector: DEFAULT_NAME_SELECTOR.to_string(),
            count_selector: DEFAULT_COUNT_SELECTOR.to_string(),
        }
    }
}

/// Load settings from `explicit`, or from `./tagkit.ron` when present.
///
/// Problems with an explicitly named file are errors; problems with the
/// implicit default file are logged and defaults are used.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_from(path),
        None => {
            let path = PathBuf::from(CONFIG_FILENAME);
            match load_from(&path) {
                Ok(config) => Ok(config),
                Err(err) => {
                    if !is_not_found(&err) {
                        tagkit_warn!("Ignoring settings file {:?}: {:#}", path, err);
                    }
                    Ok(AppConfig::default())
                }
            }
        }
    }
}

fn load_from(path: &Path) -> anyhow::Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let config = parse(&content)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    tagkit_info!("Loaded settings from {:?}", path);
    Ok(config)
}

fn parse(content: &str) -> anyhow::Result<AppConfig> {
    let file: SettingsFile = ron::from_str(content)?;
    let defaults = AppConfig::default();

    let sort = match file.sort {
        Some(label) => label.parse::<SortOrder>().map_err(|msg| anyhow!(msg))?,
        None => defaults.settings.sort,
    };

    Ok(AppConfig {
        settings: Settings {
            tags_file: file.tags_file.unwrap_or(defaults.settings.tags_file),
            base_url: file.base_url.unwrap_or(defaults.settings.base_url),
            tag_count: file
                .tag_count
                .unwrap_or(defaults.settings.tag_count)
                .max(1),
            sort,
            separator: file.separator.unwrap_or(defaults.settings.separator),
        },
        name_selector: file.name_selector.unwrap_or(defaults.name_selector),
        count_selector: file.count_selector.unwrap_or(defaults.count_selector),
    })
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}
