//! Tagkit engine: file IO, random selection and HTML extraction.
mod decode;
mod error;
mod extract;
mod files;
mod persist;
mod pool;
mod sample;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use error::TagError;
pub use extract::{
    extract_from_documents, AnchorTagExtractor, TagExtractor, DEFAULT_COUNT_SELECTOR,
    DEFAULT_NAME_SELECTOR,
};
pub use files::{extract_from_files, read_html_file, FileExtraction};
pub use persist::{save_tags, AtomicFileWriter};
pub use pool::load_tag_pool;
pub use sample::select_random;
