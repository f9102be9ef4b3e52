use std::collections::HashSet;

/// Ordered list of tag entries. Every entry is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagPool {
    entries: Vec<String>,
}

impl TagPool {
    /// Parse comma-separated content, keeping the original order.
    ///
    /// Duplicates are kept; only empty or whitespace-only pieces are dropped.
    pub fn parse(content: &str) -> Self {
        Self::from_entries(content.split(','))
    }

    /// Build a pool from arbitrary entries, trimming and dropping blanks.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

/// Remove exact duplicates, keeping the first occurrence of each entry.
pub fn dedup_preserving_order<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
