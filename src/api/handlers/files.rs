use axum::Json;
use serde_json::{json, Value};

use crate::api::handlers::tools::AppState;
use crate::api::middleware::AppError;
use crate::services::resolver::FileResolver;

/// List the files that are the source of data
///
/// Resolves the configured root pattern (and optional extension filter)
/// against the current filesystem state. Read-only enumeration; zero
/// matches yields an empty list, never an error.
pub async fn get_files_list(state: &AppState) -> Result<Json<Value>, AppError> {
    let data = &state.config.data;
    tracing::info!("Resolving file list for pattern: {}", data.root_pattern);

    let files = FileResolver::resolve(&data.root_pattern, data.extension.as_deref())?;

    Ok(Json(json!({ "files": files })))
}
