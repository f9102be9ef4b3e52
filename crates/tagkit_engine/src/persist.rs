use std::io::Write;
use std::path::{Path, PathBuf};

use tagkit_core::join_tags;
use tagkit_logging::tagkit_info;
use tempfile::NamedTempFile;

use crate::TagError;

/// Atomically write content to a target path by writing a temp file next to
/// it, then renaming.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn write(&self, content: &str) -> Result<PathBuf, TagError> {
        self.write_inner(content).map_err(|source| TagError::Write {
            path: self.target.clone(),
            source,
        })?;
        Ok(self.target.clone())
    }

    fn write_inner(&self, content: &str) -> std::io::Result<()> {
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Rename over the target; the old content stays until it succeeds.
        tmp.persist(&self.target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Serialize `tags` with `separator` and write them to `path`.
pub fn save_tags<S: AsRef<str>>(
    path: &Path,
    tags: &[S],
    separator: &str,
) -> Result<PathBuf, TagError> {
    let content = join_tags(tags, separator);
    let written = AtomicFileWriter::new(path.to_path_buf()).write(&content)?;
    tagkit_info!("Saved {} tags to {:?}", tags.len(), written);
    Ok(written)
}
