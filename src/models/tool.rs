use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered tool operation as advertised to calling agents.
///
/// `input_schema` is a JSON-schema-style object describing the argument
/// shape; it is documentation for the caller and is not used to validate
/// arguments (marshalling happens through serde).
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

fn default_file_type() -> String {
    "csv".to_string()
}

/// Arguments for the `get_schema` tool.
#[derive(Debug, Deserialize)]
pub struct GetSchemaParams {
    pub file_location: String,
    #[serde(default = "default_file_type")]
    pub file_type: String,
}

/// Arguments for the `execute_polars_sql` tool.
#[derive(Debug, Deserialize)]
pub struct ExecuteSqlParams {
    pub file_locations: Vec<String>,
    pub query: String,
    #[serde(default = "default_file_type")]
    pub file_type: String,
}

/// Materialized result of one query execution.
///
/// Rows preserve the engine's row order; each record preserves the result's
/// column order. The whole result is built in memory before it is returned;
/// there is no pagination or streaming.
#[derive(Debug, Serialize)]
pub struct QueryOutcome {
    pub rows: Vec<Map<String, Value>>,
    pub row_count: usize,
    pub execution_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_defaults_to_csv() {
        let params: GetSchemaParams =
            serde_json::from_value(serde_json::json!({ "file_location": "data/a.csv" })).unwrap();
        assert_eq!(params.file_type, "csv");

        let params: ExecuteSqlParams = serde_json::from_value(serde_json::json!({
            "file_locations": ["data/a.csv"],
            "query": "SELECT * FROM self"
        }))
        .unwrap();
        assert_eq!(params.file_type, "csv");
    }

    #[test]
    fn test_explicit_file_type_is_kept() {
        let params: GetSchemaParams = serde_json::from_value(serde_json::json!({
            "file_location": "data/a.parquet",
            "file_type": "parquet"
        }))
        .unwrap();
        assert_eq!(params.file_type, "parquet");
    }

    #[test]
    fn test_missing_required_argument_fails() {
        let result: Result<ExecuteSqlParams, _> =
            serde_json::from_value(serde_json::json!({ "query": "SELECT 1" }));
        assert!(result.is_err());
    }
}
