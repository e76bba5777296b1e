use axum::Json;
use serde_json::{json, Value};

use crate::api::middleware::AppError;
use crate::models::{FileType, GetSchemaParams};
use crate::services::inspector::SchemaInspector;

/// Get the schema of a single data file
///
/// The file is fully parsed on every call; nothing is cached. The response
/// map keeps the table's native column order.
pub async fn get_schema(params: GetSchemaParams) -> Result<Json<Value>, AppError> {
    tracing::info!(
        "Inspecting schema of {} (file_type: {})",
        params.file_location,
        params.file_type
    );

    let file_type = FileType::from_tag(&params.file_type)?;

    let schema = tokio::task::spawn_blocking(move || {
        SchemaInspector::inspect(&params.file_location, file_type)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Schema inspection task failed: {}", e)))??;

    Ok(Json(json!({ "schema": schema })))
}
