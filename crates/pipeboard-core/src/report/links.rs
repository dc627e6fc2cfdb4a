/// Rebase a stored artifact path for display: drop everything up to and
/// including the first occurrence of `marker` and prepend `prefix`. A path
/// without the marker passes through unchanged; an empty path yields no link.
///
/// Display only; no filtering decision depends on this.
pub fn rebase_link(path: &str, marker: &str, prefix: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    match path.find(marker) {
        Some(idx) => Some(format!("{}{}", prefix, &path[idx + marker.len()..])),
        None => Some(path.to_string()),
    }
}
