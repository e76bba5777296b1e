use polars::prelude::*;
use serde_json::{Map, Value};

use crate::api::middleware::AppError;
use crate::models::FileType;
use crate::services::reader::TabularReader;

/// Reports a single file's column-name → type-name mapping.
///
/// The schema is produced fresh from the file on every call and keeps the
/// table's native column order.
pub struct SchemaInspector;

impl SchemaInspector {
    /// Inspect one file and return its schema as an ordered map.
    ///
    /// Failure modes are exactly those of [`TabularReader::read_one`].
    pub fn inspect(location: &str, file_type: FileType) -> Result<Map<String, Value>, AppError> {
        let df = TabularReader::read_one(location, file_type)?;

        let mut schema = Map::new();
        for column in df.get_columns() {
            schema.insert(
                column.name().to_string(),
                Value::String(Self::type_name(column.dtype())),
            );
        }

        Ok(schema)
    }

    /// Wire-level name for a column's data type.
    fn type_name(dtype: &DataType) -> String {
        match dtype {
            DataType::Boolean => "Boolean".to_string(),
            DataType::Int8 => "Int8".to_string(),
            DataType::Int16 => "Int16".to_string(),
            DataType::Int32 => "Int32".to_string(),
            DataType::Int64 => "Int64".to_string(),
            DataType::UInt8 => "UInt8".to_string(),
            DataType::UInt16 => "UInt16".to_string(),
            DataType::UInt32 => "UInt32".to_string(),
            DataType::UInt64 => "UInt64".to_string(),
            DataType::Float32 => "Float32".to_string(),
            DataType::Float64 => "Float64".to_string(),
            DataType::String => "String".to_string(),
            DataType::Date => "Date".to_string(),
            DataType::Datetime(_, _) => "Datetime".to_string(),
            DataType::Time => "Time".to_string(),
            DataType::Duration(_) => "Duration".to_string(),
            DataType::Null => "Null".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_reports_every_column_with_inferred_type() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "id,name,amount,active\n1,alpha,1.5,true\n2,beta,2.5,false\n").unwrap();

        let schema = SchemaInspector::inspect(&path.to_string_lossy(), FileType::Csv).unwrap();

        assert_eq!(schema.len(), 4);
        let keys: Vec<&String> = schema.keys().collect();
        assert_eq!(keys, vec!["id", "name", "amount", "active"]);
        assert_eq!(schema["id"], "Int64");
        assert_eq!(schema["name"], "String");
        assert_eq!(schema["amount"], "Float64");
        assert_eq!(schema["active"], "Boolean");
    }

    #[test]
    fn test_inspect_missing_file() {
        let err = SchemaInspector::inspect("missing.csv", FileType::Csv).unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
    }

    #[test]
    fn test_type_names_are_friendly() {
        assert_eq!(SchemaInspector::type_name(&DataType::Int64), "Int64");
        assert_eq!(SchemaInspector::type_name(&DataType::String), "String");
        assert_eq!(
            SchemaInspector::type_name(&DataType::Datetime(TimeUnit::Microseconds, None)),
            "Datetime"
        );
    }
}
