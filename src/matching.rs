//! Segment-based matching of a concrete path against a route pattern.
//!
//! - Split both by `/` into non-empty segments
//! - Literal segments must match exactly
//! - `:param` segments capture the path segment into [`RouteParams`]
//! - The whole path must be consumed; there is no prefix matching
//!
//! Used by [`RouteTable::find`](crate::routes::RouteTable::find) for routes
//! such as `/transit/:id` that are reached by drill-down navigation.

use crate::params::RouteParams;
use crate::path::split_path;

/// Match `path` against `pattern`, returning captured parameters on success.
///
/// # Examples
///
/// ```
/// use teamflow_nav::matching::match_pattern;
///
/// let params = match_pattern("/transit/42", "/transit/:id").unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
///
/// assert!(match_pattern("/transit/42/edit", "/transit/:id").is_none());
/// assert!(match_pattern("/tasks/table", "/tasks/board").is_none());
/// ```
pub fn match_pattern(path: &str, pattern: &str) -> Option<RouteParams> {
    let path_segments = split_path(path);
    let pattern_segments = split_path(pattern);

    if path_segments.len() != pattern_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (pattern_seg, path_seg) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = extract_param_name(pattern_seg) {
            params.insert(name.to_string(), (*path_seg).to_string());
        } else if pattern_seg != path_seg {
            return None;
        }
    }

    Some(params)
}

/// Extract parameter name from a pattern segment.
///
/// ```
/// use teamflow_nav::matching::extract_param_name;
///
/// assert_eq!(extract_param_name(":id"), Some("id"));
/// assert_eq!(extract_param_name("transit"), None);
/// ```
pub fn extract_param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':').filter(|name| !name.is_empty())
}

/// Return `true` if the pattern contains at least one `:param` segment.
pub fn is_dynamic(pattern: &str) -> bool {
    split_path(pattern)
        .iter()
        .any(|seg| extract_param_name(seg).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_literal_match() {
        let params = match_pattern("/tasks/table", "/tasks/table");
        assert!(params.is_some_and(|p| p.is_empty()));
    }

    #[test]
    fn test_multiple_params() {
        let params =
            match_pattern("/declarations/cargo/9/items/3", "/declarations/:kind/:id/items/:item")
                .expect("should match");
        assert_eq!(params.get("kind"), Some(&"cargo".to_string()));
        assert_eq!(params.get_as::<u32>("id"), Some(9));
        assert_eq!(params.get_as::<u32>("item"), Some(3));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(match_pattern("/transit", "/transit/:id").is_none());
        assert!(match_pattern("/transit/1/2", "/transit/:id").is_none());
    }

    #[test]
    fn test_root() {
        assert!(match_pattern("/", "/").is_some());
        assert!(match_pattern("/", "/dashboard").is_none());
    }

    #[test]
    fn test_bare_colon_is_literal() {
        assert_eq!(extract_param_name(":"), None);
        assert!(match_pattern("/a/:", "/a/:").is_some());
        assert!(match_pattern("/a/b", "/a/:").is_none());
    }

    #[test]
    fn test_is_dynamic() {
        assert!(is_dynamic("/transit/:id"));
        assert!(!is_dynamic("/transit"));
    }
}
