//! Path helpers.
//!
//! # Normalisation rules
//!
//! 1. **Empty paths** normalise to `"/"` (root)
//! 2. **Leading slashes** are ensured (`"dashboard"` → `"/dashboard"`)
//! 3. **Trailing slashes** are removed, except for root
//! 4. **Repeated slashes** collapse (`"//tasks//table"` → `"/tasks/table"`)
//!
//! [`normalize_path`] returns `Cow<str>` so that already-normalised paths,
//! which is nearly every path coming from the URL collaborator, are not
//! reallocated.

use std::borrow::Cow;

/// Normalise a path for comparison.
///
/// # Examples
///
/// ```
/// use teamflow_nav::normalize_path;
///
/// assert_eq!(normalize_path("/dashboard"), "/dashboard");
/// assert_eq!(normalize_path("dashboard"), "/dashboard");
/// assert_eq!(normalize_path("/tasks/board/"), "/tasks/board");
/// assert_eq!(normalize_path("//tasks//board"), "/tasks/board");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &'_ str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }

    let already = path.starts_with('/') && !path.ends_with('/') && !path.contains("//");
    if already {
        return Cow::Borrowed(path);
    }

    let segments = split_path(path);
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

/// Canonical form of a configured node path. `None` for empty paths, which
/// are treated the same as an absent path.
pub(crate) fn canonical_path(path: &str) -> Option<String> {
    if path.trim().is_empty() {
        None
    } else {
        Some(normalize_path(path.trim()).into_owned())
    }
}

/// Path as mounted by a relative router: the leading `/` removed.
///
/// ```
/// use teamflow_nav::path::relative_mount_path;
///
/// assert_eq!(relative_mount_path("/tasks/table"), "tasks/table");
/// assert_eq!(relative_mount_path("/"), "");
/// ```
pub fn relative_mount_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Split a path into its non-empty segments.
///
/// ```
/// use teamflow_nav::path::split_path;
///
/// assert_eq!(split_path("/transit/42"), vec!["transit", "42"]);
/// assert_eq!(split_path("/"), Vec::<&str>::new());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Title derived from a path segment: dashes become spaces and the first
/// letter is upper-cased.
///
/// ```
/// use teamflow_nav::path::segment_title;
///
/// assert_eq!(segment_title("customs-declaration"), "Customs declaration");
/// assert_eq!(segment_title("path"), "Path");
/// ```
pub fn segment_title(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Last non-empty segment of a path, if any.
pub fn last_segment(path: &str) -> Option<&str> {
    path.split('/').rev().find(|s| !s.is_empty())
}
