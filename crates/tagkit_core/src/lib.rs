//! Tagkit core: pure state machine, tag text transforms and view-model helpers.
mod effect;
mod msg;
mod notice;
mod pool;
mod query;
mod serialize;
mod settings;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notice::{FailureKind, Notice, NoticeLevel, OperationFailure};
pub use pool::{dedup_preserving_order, TagPool};
pub use query::{build_search_url, extract_tag_name, SortOrder, DEFAULT_BASE_URL};
pub use serialize::{join_tags, DEFAULT_SEPARATOR};
pub use settings::{Settings, DEFAULT_TAGS_FILE, DEFAULT_TAG_COUNT};
pub use state::AppState;
pub use update::update;
pub use view_model::AppViewModel;
