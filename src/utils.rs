use crate::error::SearchError;

/// Checks `haystack` for `needle`, where `needle` is already lowercased.
pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Returns the value untouched, or `None` if it is missing or empty.
///
/// Whitespace is significant: `" "` is a valid query.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validates the token and query of a search request.
pub fn validate_params<'a>(
    token: Option<&'a str>,
    query: Option<&'a str>,
) -> Result<(&'a str, &'a str), SearchError> {
    match (non_empty(token), non_empty(query)) {
        (Some(token), Some(query)) => Ok((token, query)),
        _ => Err(SearchError::InvalidRequest),
    }
}

/// Appends the page size to the first request of a paginated resource.
pub fn first_page_url(base: &str, path: &str, limit: u32) -> String {
    format!(
        "{base}/{path}?limit={limit}",
        base = base.trim_end_matches('/'),
        path = path.trim_start_matches('/'),
        limit = limit
    )
}
