use std::fs;
use std::path::{Path, PathBuf};

use tagkit_core::dedup_preserving_order;
use tagkit_logging::{tagkit_debug, tagkit_warn};

use crate::{decode_html, TagError, TagExtractor};

/// Result of a multi-file extraction. Failed files are listed, not fatal.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub tags: Vec<String>,
    pub failures: Vec<TagError>,
}

/// Read an HTML file and decode it to a string.
pub fn read_html_file(path: &Path) -> Result<String, TagError> {
    let bytes = fs::read(path).map_err(|err| TagError::from_read(path, err))?;
    let decoded = decode_html(&bytes).map_err(|err| TagError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    tagkit_debug!(
        "Decoded {:?} as {} ({} bytes)",
        path,
        decoded.encoding_label,
        bytes.len()
    );
    Ok(decoded.html)
}

/// Extract from every file in order; the combined result is deduplicated.
pub fn extract_from_files(extractor: &dyn TagExtractor, paths: &[PathBuf]) -> FileExtraction {
    let mut tags = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match read_html_file(path) {
            Ok(html) => tags.extend(extractor.extract(&html)),
            Err(err) => {
                tagkit_warn!("Skipping {:?}: {}", path, err);
                failures.push(err);
            }
        }
    }
    FileExtraction {
        tags: dedup_preserving_order(tags),
        failures,
    }
}
