pub const DEFAULT_SEPARATOR: &str = ", ";

/// Join entries with `separator`. Entries containing the separator are not escaped.
pub fn join_tags<S: AsRef<str>>(tags: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(tag.as_ref());
    }
    out
}
