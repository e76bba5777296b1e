use axum::{
    extract::{Path, State},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::api::handlers::{files, query, schema};
use crate::api::middleware::AppError;
use crate::config::Config;
use crate::models::ToolDescriptor;
use crate::services::sql_functions;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Descriptors for every registered tool, in registration order.
///
/// Produced fresh per listing; the `query` parameter description embeds the
/// rendered SQL function catalogue so calling agents can see the supported
/// dialect surface.
pub fn descriptors() -> Vec<ToolDescriptor> {
    let file_type_property = json!({
        "type": "string",
        "description": "The type of the file to be read. Supported types are csv and parquet",
        "default": "csv",
    });

    vec![
        ToolDescriptor::new(
            "get_files_list",
            "Get the list of files that are source of data",
            json!({
                "type": "object",
                "properties": {},
                "required": [],
            }),
        ),
        ToolDescriptor::new(
            "get_schema",
            "Get the schema of a single data file from the given file location",
            json!({
                "type": "object",
                "properties": {
                    "file_location": {
                        "type": "string",
                        "description": "Path of the data file to inspect",
                    },
                    "file_type": file_type_property.clone(),
                },
                "required": ["file_location"],
            }),
        ),
        ToolDescriptor::new(
            "execute_polars_sql",
            "Reads the data from the given file locations. Note that file_locations \
             can be a list of multiple files. However, all files must have the same \
             schema and the same columns. Executes the given polars SQL query and \
             returns the result. The query must use the table name `self` to refer \
             to the source data.",
            json!({
                "type": "object",
                "properties": {
                    "file_locations": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Paths of the data files to query; all must share one schema",
                    },
                    "query": {
                        "type": "string",
                        "description": sql_functions::query_parameter_description(),
                    },
                    "file_type": file_type_property,
                },
                "required": ["file_locations", "query"],
            }),
        ),
    ]
}

/// List all registered tools with their input schemas
pub async fn list_tools(State(_state): State<AppState>) -> Json<Value> {
    Json(json!({ "tools": descriptors() }))
}

/// Invoke a tool by its registered name
///
/// The body is the tool's JSON argument object; tools without arguments may
/// be called with no body at all.
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: String,
) -> Result<Json<Value>, AppError> {
    tracing::info!("Invoking tool: {}", name);
    let args: Value = if body.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str(&body)
            .map_err(|e| AppError::InvalidArgument(format!("Invalid tool arguments: {}", e)))?
    };

    match name.as_str() {
        "get_files_list" => files::get_files_list(&state).await,
        "get_schema" => schema::get_schema(marshal(args)?).await,
        "execute_polars_sql" => query::execute_polars_sql(marshal(args)?).await,
        other => Err(AppError::NotFound(format!("Unknown tool: {}", other))),
    }
}

/// Marshal a JSON argument object into a tool's typed parameters.
fn marshal<T: DeserializeOwned>(args: Value) -> Result<T, AppError> {
    serde_json::from_value(args)
        .map_err(|e| AppError::InvalidArgument(format!("Invalid tool arguments: {}", e)))
}
