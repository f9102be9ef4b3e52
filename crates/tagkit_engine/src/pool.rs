use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;
use tagkit_core::TagPool;
use tagkit_logging::tagkit_info;

use crate::TagError;

/// Read a comma-separated tag file into a pool.
///
/// A leading UTF-8 BOM is ignored; any other invalid UTF-8 is a decode error.
pub fn load_tag_pool(path: &Path) -> Result<TagPool, TagError> {
    let bytes = fs::read(path).map_err(|err| TagError::from_read(path, err))?;
    let (content, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(TagError::Decode {
            path: path.to_path_buf(),
            message: "file is not valid UTF-8".into(),
        });
    }

    let pool = TagPool::parse(&content);
    if pool.is_empty() {
        return Err(TagError::EmptyPool {
            path: path.to_path_buf(),
        });
    }
    tagkit_info!("Loaded {} tags from {:?}", pool.len(), path);
    Ok(pool)
}
