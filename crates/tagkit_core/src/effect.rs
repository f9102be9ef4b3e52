use std::path::PathBuf;

use crate::TagPool;

/// Side effects requested by `update`, executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadPool { path: PathBuf },
    DrawSelection { pool: TagPool, count: usize },
    OpenUrl { url: String },
    CopyToClipboard { text: String },
    ExtractFiles { paths: Vec<PathBuf> },
    ExtractText { html: String },
    SaveTags {
        path: PathBuf,
        tags: Vec<String>,
        separator: String,
    },
}
