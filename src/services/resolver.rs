use glob::glob;

use crate::api::middleware::AppError;

/// Resolves a glob-style root pattern into a concrete list of file paths.
///
/// Resolution is metadata-only: no file contents are read. Output order is
/// the glob walk order (alphabetical within each directory), so the result
/// is stable for a fixed filesystem state.
pub struct FileResolver;

impl FileResolver {
    /// Resolve `pattern`, optionally keeping only paths ending in
    /// `.<extension>`.
    ///
    /// Zero matches is not an error: the result is an empty list.
    /// Directory entries that cannot be read during the walk are skipped.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the pattern itself is malformed.
    pub fn resolve(pattern: &str, extension: Option<&str>) -> Result<Vec<String>, AppError> {
        let entries = glob(pattern)
            .map_err(|e| AppError::InvalidArgument(format!("Invalid glob pattern '{}': {}", pattern, e)))?;

        let suffix = extension.map(|ext| format!(".{}", ext.trim_start_matches('.')));

        let files = entries
            .filter_map(Result::ok)
            .map(|path| path.to_string_lossy().into_owned())
            .filter(|path| match &suffix {
                Some(suffix) => path.ends_with(suffix.as_str()),
                None => true,
            })
            .collect();

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"a,b\n1,2\n").unwrap();
    }

    #[test]
    fn test_zero_matches_returns_empty_list() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.csv", dir.path().display());

        let files = FileResolver::resolve(&pattern, None).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_resolves_matching_files_in_stable_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "b.csv");
        touch(&dir, "a.csv");
        touch(&dir, "c.txt");
        let pattern = format!("{}/*.csv", dir.path().display());

        let files = FileResolver::resolve(&pattern, None).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.csv"));
        assert!(files[1].ends_with("b.csv"));
    }

    #[test]
    fn test_extension_filter_restricts_matches() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "a.csv");
        touch(&dir, "b.parquet");
        let pattern = format!("{}/*", dir.path().display());

        let files = FileResolver::resolve(&pattern, Some("csv")).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.csv"));
    }

    #[test]
    fn test_invalid_pattern_is_invalid_argument() {
        let err = FileResolver::resolve("data/***.csv", None).unwrap_err();
        match err {
            AppError::InvalidArgument(msg) => assert!(msg.contains("Invalid glob pattern")),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
