use pretty_assertions::assert_eq;
use tagkit_core::{build_search_url, extract_tag_name, SortOrder, DEFAULT_BASE_URL};

#[test]
fn count_annotation_is_stripped() {
    assert_eq!(extract_tag_name("large breasts (12345)"), "large breasts");
    assert_eq!(extract_tag_name("glasses"), "glasses");
}

#[test]
fn name_cleanup_cuts_at_first_parenthesis() {
    assert_eq!(extract_tag_name("a (b) (c)"), "a");
    assert_eq!(extract_tag_name("  padded  "), "padded");
}

#[test]
fn search_url_encodes_space_comma_and_colon() {
    let url = build_search_url(
        DEFAULT_BASE_URL,
        &["large breasts", "glasses"],
        SortOrder::PopularWeek.as_str(),
    );
    assert_eq!(
        url,
        "https://nhentai.net/search/?q=tag%3Alarge+breasts%2C+glasses&sort=popular-week"
    );
}

#[test]
fn search_url_leaves_other_characters_alone() {
    let url = build_search_url("http://x/", &["a&b", "c/d"], "popular");
    assert_eq!(url, "http://x/?q=tag%3Aa&b%2C+c/d&sort=popular");
}

#[test]
fn single_tag_has_no_separator() {
    let url = build_search_url("http://x/", &["solo"], "popular-today");
    assert_eq!(url, "http://x/?q=tag%3Asolo&sort=popular-today");
}

#[test]
fn sort_order_parses_its_own_labels() {
    for order in SortOrder::ALL {
        assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
    }
    assert_eq!("Popular-Week".parse::<SortOrder>(), Ok(SortOrder::PopularWeek));
    assert!("newest".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::default(), SortOrder::PopularWeek);
}
