use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::api::middleware::AppError;
use crate::models::FileType;

/// Reads tabular files into in-memory frames, dispatching on [`FileType`].
///
/// Every read fully materializes the file; there is no lazy or streaming
/// path. A multi-file read concatenates in input order and fails as a whole
/// on the first error, so callers never see a partial table.
pub struct TabularReader;

impl TabularReader {
    /// Read a single file into a frame.
    ///
    /// # Errors
    /// * `FileNotFound` if the path does not exist
    /// * `Parse` if the content cannot be parsed as the given format
    pub fn read_one(location: &str, file_type: FileType) -> Result<DataFrame, AppError> {
        if !Path::new(location).exists() {
            return Err(AppError::FileNotFound(format!("File not found: {}", location)));
        }

        match file_type {
            FileType::Csv => CsvReadOptions::default()
                .try_into_reader_with_file_path(Some(location.into()))
                .and_then(|reader| reader.finish())
                .map_err(|e| AppError::Parse(format!("Failed to parse CSV file {}: {}", location, e))),
            FileType::Parquet => {
                let file = File::open(location).map_err(|e| Self::open_error(location, e))?;
                ParquetReader::new(file).finish().map_err(|e| {
                    AppError::Parse(format!("Failed to parse Parquet file {}: {}", location, e))
                })
            }
        }
    }

    /// Read several files and vertically concatenate them in input order.
    ///
    /// All files must share the file type and an identical column schema;
    /// the concatenation step is where a mismatch surfaces. Rows keep
    /// input-path order and are never re-sorted.
    ///
    /// # Errors
    /// * `InvalidArgument` if `locations` is empty
    /// * any `read_one` failure, unchanged
    /// * `SchemaMismatch` if the files' columns differ in name, order, or type
    pub fn read_many(locations: &[String], file_type: FileType) -> Result<DataFrame, AppError> {
        let (first, rest) = locations.split_first().ok_or_else(|| {
            AppError::InvalidArgument("file_locations must contain at least one path".to_string())
        })?;

        let mut combined = Self::read_one(first, file_type)?;
        for location in rest {
            let next = Self::read_one(location, file_type)?;
            combined = combined.vstack(&next).map_err(|e| {
                AppError::SchemaMismatch(format!(
                    "Schema mismatch while concatenating {}: {}",
                    location, e
                ))
            })?;
        }

        Ok(combined)
    }

    /// An open failure on an existing path is an I/O problem, not malformed
    /// content, so it is not reported as a parse error.
    fn open_error(location: &str, e: std::io::Error) -> AppError {
        AppError::Internal(format!("Failed to open file {}: {}", location, e))
    }
}
