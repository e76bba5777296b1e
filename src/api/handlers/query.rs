use axum::Json;
use serde_json::{json, Value};

use crate::api::middleware::AppError;
use crate::models::{ExecuteSqlParams, FileType};
use crate::services::executor::QueryExecutor;

/// Execute a polars SQL query against one or more data files
///
/// The query string reaches the engine exactly as given; any reader or
/// engine failure is the operation's failure, with no partial result.
pub async fn execute_polars_sql(params: ExecuteSqlParams) -> Result<Json<Value>, AppError> {
    tracing::info!(
        "Executing query over {} file(s) (file_type: {}): {}",
        params.file_locations.len(),
        params.file_type,
        params.query
    );

    let file_type = FileType::from_tag(&params.file_type)?;

    let outcome = tokio::task::spawn_blocking(move || {
        QueryExecutor::execute(&params.file_locations, file_type, &params.query)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Query task failed: {}", e)))??;

    Ok(Json(json!({
        "rows": outcome.rows,
        "row_count": outcome.row_count,
        "execution_time_ms": outcome.execution_time_ms,
    })))
}
