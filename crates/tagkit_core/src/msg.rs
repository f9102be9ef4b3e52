use std::path::PathBuf;

use crate::{OperationFailure, SortOrder, TagPool};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the tag file path.
    TagsFileChanged(PathBuf),
    /// User edited the base search URL.
    BaseUrlChanged(String),
    /// User picked how many tags to draw. Zero is raised to one.
    TagCountChanged(usize),
    SortChanged(SortOrder),
    /// User clicked Load.
    LoadClicked,
    /// Host finished reading the tag file.
    PoolLoaded(Result<TagPool, OperationFailure>),
    /// User clicked Generate.
    GenerateClicked,
    /// Host finished the random draw.
    SelectionDrawn(Vec<String>),
    OpenInBrowserClicked,
    CopyUrlClicked,
    /// User added HTML files to the extraction list.
    HtmlFilesSelected(Vec<PathBuf>),
    ClearFilesClicked,
    /// User edited the pasted HTML text.
    HtmlInputChanged(String),
    ClearHtmlInputClicked,
    SeparatorChanged(String),
    ExtractFromFilesClicked,
    ExtractFromTextClicked,
    /// Host finished extraction. Per-file failures do not abort the batch.
    ExtractionDone {
        tags: Vec<String>,
        failures: Vec<OperationFailure>,
    },
    /// User chose a save target for the extracted tags.
    SaveClicked(PathBuf),
    SaveDone(Result<PathBuf, OperationFailure>),
    CopyResultClicked,
    ClearResultClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
