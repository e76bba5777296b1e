// Query execution over resolved file sets.
//
// Loads the combined table, binds it as `self` in a fresh SQL context, and
// runs the query string exactly as given. No validation, rewriting, or
// caching happens on the way to the engine.

use std::time::Instant;

use polars::prelude::*;
use polars::sql::SQLContext;

use crate::api::middleware::AppError;
use crate::models::{FileType, QueryOutcome};
use crate::services::convert::ResultConverter;
use crate::services::reader::TabularReader;

/// Executes ad hoc SQL against one or more tabular files.
///
/// Each call builds its own context and table, so concurrent executions
/// share nothing. The entire input and result materialize in memory; there
/// is no streaming or backpressure (known limitation).
pub struct QueryExecutor;

impl QueryExecutor {
    /// Execute `query` against the concatenation of `locations`.
    ///
    /// The combined table is the only binding in the query scope, under the
    /// fixed name `self`.
    ///
    /// # Errors
    /// * `InvalidArgument` if `locations` is empty
    /// * any [`TabularReader`] failure, unchanged
    /// * `Query` with the engine's diagnostic verbatim if the query is
    ///   syntactically or semantically invalid
    pub fn execute(
        locations: &[String],
        file_type: FileType,
        query: &str,
    ) -> Result<QueryOutcome, AppError> {
        if locations.is_empty() {
            return Err(AppError::InvalidArgument(
                "file_locations must contain at least one path".to_string(),
            ));
        }

        let start_time = Instant::now();

        let df = TabularReader::read_many(locations, file_type)?;

        let mut ctx = SQLContext::new();
        ctx.register("self", df.lazy());

        let result = ctx
            .execute(query)
            .and_then(|lazy| lazy.collect())
            .map_err(|e| AppError::Query(e.to_string()))?;

        let rows = ResultConverter::to_row_records(&result)?;
        let execution_time_ms = start_time.elapsed().as_millis() as u64;

        Ok(QueryOutcome {
            row_count: rows.len(),
            rows,
            execution_time_ms,
        })
    }
}
