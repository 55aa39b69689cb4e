/// Decide whether a request keyword triggers a name search.
///
/// Returns the trimmed keyword when it is non-blank and not the placeholder
/// `"null"` (any case) that form round-trips produce for an absent value.
/// `None` means the caller lists companies unfiltered.
pub fn search_term(keyword: Option<&str>) -> Option<&str> {
    let trimmed = keyword?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::search_term;

    #[test]
    fn absent_blank_and_null_placeholder_mean_no_search() {
        assert_eq!(search_term(None), None);
        assert_eq!(search_term(Some("")), None);
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(Some("null")), None);
        assert_eq!(search_term(Some(" NULL ")), None);
    }

    #[test]
    fn real_keywords_are_trimmed() {
        assert_eq!(search_term(Some("Glob")), Some("Glob"));
        assert_eq!(search_term(Some("  Acme  ")), Some("Acme"));
        assert_eq!(search_term(Some("nullify")), Some("nullify"));
    }
}
