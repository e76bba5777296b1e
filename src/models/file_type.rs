use crate::api::middleware::AppError;

/// Supported tabular file formats.
///
/// The wire-level `file_type` tag is parsed into this enum exactly once at
/// the tool boundary; everything downstream dispatches on the enum with an
/// exhaustive match, so adding a format is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Parquet,
}

impl FileType {
    /// Parse a wire-level tag (`"csv"` or `"parquet"`).
    ///
    /// Any other value fails with an explicit unsupported-type error; there
    /// is no fallback to a default format.
    pub fn from_tag(tag: &str) -> Result<Self, AppError> {
        match tag.to_lowercase().as_str() {
            "csv" => Ok(FileType::Csv),
            "parquet" => Ok(FileType::Parquet),
            other => Err(AppError::UnsupportedFileType(format!(
                "Unsupported file type: {}. Supported types are csv and parquet",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(FileType::from_tag("csv").unwrap(), FileType::Csv);
        assert_eq!(FileType::from_tag("parquet").unwrap(), FileType::Parquet);
        // Tags are case-insensitive on the wire
        assert_eq!(FileType::from_tag("CSV").unwrap(), FileType::Csv);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = FileType::from_tag("xml").unwrap_err();
        match err {
            AppError::UnsupportedFileType(msg) => {
                assert!(msg.contains("xml"));
            }
            other => panic!("expected UnsupportedFileType, got {:?}", other),
        }
    }
}
