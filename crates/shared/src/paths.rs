//! Path and extension verification for editable view files.

/// Folds backslashes to forward slashes and drops a leading `~` root marker.
fn normalize(path: &str) -> String {
    path.replace('\\', "/").trim_start_matches('~').to_string()
}

/// True if a normalized path contains a `..` traversal segment.
fn has_traversal(normalized: &str) -> bool {
    normalized.split('/').any(|segment| segment == "..")
}

/// Verifies that `path` lies under one of the allowed directories.
///
/// Directory entries are matched as whole path prefixes on the normalized
/// path. Blank entries are skipped; an effectively empty allowed set fails
/// the check rather than erroring.
pub fn verify_edit_path<S: AsRef<str>>(path: &str, allowed_dirs: &[S]) -> bool {
    let normalized = normalize(path);
    if has_traversal(&normalized) {
        return false;
    }

    allowed_dirs
        .iter()
        .map(|dir| normalize(dir.as_ref()))
        .filter(|dir| !dir.trim().is_empty())
        .any(|dir| {
            let dir = dir.trim_end_matches('/');
            !dir.is_empty() && normalized.starts_with(&format!("{dir}/"))
        })
}

/// Verifies that the file extension of `path` is one of the allowed
/// extensions (listed without a leading dot, compared case-insensitively).
pub fn verify_file_extension<S: AsRef<str>>(path: &str, allowed_exts: &[S]) -> bool {
    let normalized = normalize(path);
    let file_name = normalized.rsplit('/').next().unwrap_or("");

    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => allowed_exts
            .iter()
            .any(|a| a.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_edit_path_accepts_path_under_allowed_dir() {
        assert!(verify_edit_path("/views/home.cshtml", &["/views"]));
        assert!(verify_edit_path("/views/shared/layout.cshtml", &["/views"]));
        assert!(verify_edit_path("/masterpages/site.master", &["/masterpages", "/views"]));
    }

    #[test]
    fn test_verify_edit_path_rejects_path_outside_allowed_dirs() {
        assert!(!verify_edit_path("/scripts/home.cshtml", &["/views"]));
        assert!(!verify_edit_path("/viewsextra/home.cshtml", &["/views"]));
        assert!(!verify_edit_path("/views", &["/views"]));
    }

    #[test]
    fn test_verify_edit_path_normalizes_separators_and_root_marker() {
        assert!(verify_edit_path("\\views\\home.cshtml", &["/views"]));
        assert!(verify_edit_path("/views/home.cshtml", &["~/views"]));
    }

    #[test]
    fn test_verify_edit_path_rejects_traversal() {
        assert!(!verify_edit_path("/views/../secrets/home.cshtml", &["/views"]));
        assert!(!verify_edit_path("/views/..", &["/views"]));
    }

    #[test]
    fn test_verify_edit_path_empty_allowed_set_fails() {
        let empty: [&str; 0] = [];
        assert!(!verify_edit_path("/views/home.cshtml", &empty));
        assert!(!verify_edit_path("/views/home.cshtml", &["", "  "]));
    }

    #[test]
    fn test_verify_file_extension_matches_allowed() {
        assert!(verify_file_extension("/views/home.cshtml", &["cshtml", "vbhtml"]));
        assert!(verify_file_extension("/views/home.vbhtml", &["cshtml", "vbhtml"]));
        assert!(verify_file_extension("/masterpages/site.master", &["master"]));
    }

    #[test]
    fn test_verify_file_extension_is_case_insensitive() {
        assert!(verify_file_extension("/views/home.CSHTML", &["cshtml"]));
        assert!(verify_file_extension("/views/home.cshtml", &["CSHTML"]));
    }

    #[test]
    fn test_verify_file_extension_accepts_leading_dot_in_allowed_list() {
        assert!(verify_file_extension("/views/home.cshtml", &[".cshtml"]));
    }

    #[test]
    fn test_verify_file_extension_rejects_wrong_or_missing_extension() {
        assert!(!verify_file_extension("/views/home.aspx", &["cshtml", "vbhtml"]));
        assert!(!verify_file_extension("/views/home", &["cshtml"]));
        assert!(!verify_file_extension("/views/.cshtml", &["cshtml"]));
    }

    #[test]
    fn test_verify_file_extension_uses_final_segment_only() {
        assert!(!verify_file_extension("/views.cshtml/home.aspx", &["cshtml"]));
    }
}
