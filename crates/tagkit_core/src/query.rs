use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "https://nhentai.net/search/";

/// Sort parameter appended to generated search URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    PopularToday,
    #[default]
    PopularWeek,
    Popular,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::PopularToday,
        SortOrder::PopularWeek,
        SortOrder::Popular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::PopularToday => "popular-today",
            SortOrder::PopularWeek => "popular-week",
            SortOrder::Popular => "popular",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!("unknown sort order {wanted:?} (expected popular-today, popular-week or popular)")
            })
    }
}

/// Strip a trailing count annotation: `"large breasts (12345)"` -> `"large breasts"`.
pub fn extract_tag_name(entry: &str) -> &str {
    match entry.split_once('(') {
        Some((name, _)) => name.trim(),
        None => entry.trim(),
    }
}

/// Build `{base_url}?q={query}&sort={sort}` from bare tag names.
///
/// Only space, comma and colon are encoded; everything else passes through.
pub fn build_search_url<S: AsRef<str>>(base_url: &str, names: &[S], sort: &str) -> String {
    let tag_query = names
        .iter()
        .map(|name| name.as_ref().replace(' ', "+"))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!("tag:{tag_query}");
    let encoded = query
        .replace(' ', "+")
        .replace(',', "%2C")
        .replace(':', "%3A");
    format!("{base_url}?q={encoded}&sort={sort}")
}
