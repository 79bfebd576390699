//! File-path normalization for API-served media.
//!
//! The content API stores server-relative paths, sometimes with Windows
//! separators and a leading slash. Display URLs are built by joining the API
//! origin with the normalized path.

/// Converts backslashes to forward slashes and strips leading slashes so the
/// result can be appended to the API base URL. Idempotent.
pub fn clean_file_path(file_path: &str) -> String {
    file_path.replace('\\', "/").trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_backslashes() {
        assert_eq!(
            clean_file_path(r"uploads\hero\candle.png"),
            "uploads/hero/candle.png"
        );
    }

    #[test]
    fn strips_leading_slashes() {
        assert_eq!(clean_file_path("/uploads/a.jpg"), "uploads/a.jpg");
        assert_eq!(clean_file_path("//uploads/a.jpg"), "uploads/a.jpg");
        assert_eq!(clean_file_path(r"\uploads\a.jpg"), "uploads/a.jpg");
    }

    #[test]
    fn leaves_clean_paths_alone() {
        assert_eq!(clean_file_path("uploads/a.jpg"), "uploads/a.jpg");
        assert_eq!(clean_file_path(&clean_file_path("/up\\a.jpg")), "up/a.jpg");
    }
}
