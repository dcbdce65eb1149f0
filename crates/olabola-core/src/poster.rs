use regex::{NoExpand, Regex};

/// Last path segment of a vault-relative path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Where a poster lives once relocated: `<posters_dir>/<basename>`.
pub fn destination(posters_dir: &str, poster: &str) -> String {
    let dir = posters_dir.trim_end_matches('/');
    if dir.is_empty() {
        basename(poster).to_string()
    } else {
        format!("{}/{}", dir, basename(poster))
    }
}

/// The reference written into grid rows: `<prefix>/<basename>`.
pub fn grid_reference(link_prefix: &str, poster: &str) -> String {
    destination(link_prefix, poster)
}

/// Point the first `poster: <old>` line of `content` at `new`.
///
/// Returns `None` when the old reference does not appear literally.
pub fn rewrite_reference(content: &str, old: &str, new: &str) -> Option<String> {
    let re = Regex::new(&format!("poster: {}", regex::escape(old))).ok()?;
    if !re.is_match(content) {
        return None;
    }
    let replacement = format!("poster: {}", new);
    Some(re.replacen(content, 1, NoExpand(&replacement)).into_owned())
}
