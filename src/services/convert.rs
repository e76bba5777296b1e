//! Converts engine frames to JSON row records.
//!
//! Each row becomes a JSON object keyed by column name; row order and
//! per-row column order match the frame exactly.

use chrono::{DateTime, NaiveDate};
use polars::prelude::*;
use serde_json::{Map, Number, Value};

use crate::api::middleware::AppError;

/// Converts query results to the wire-level row-record format.
pub struct ResultConverter;

impl ResultConverter {
    /// Convert a frame into an ordered sequence of row records.
    pub fn to_row_records(df: &DataFrame) -> Result<Vec<Map<String, Value>>, AppError> {
        let columns = df.get_columns();
        let mut rows = Vec::with_capacity(df.height());

        for row_idx in 0..df.height() {
            let mut record = Map::new();
            for column in columns {
                let value = column
                    .as_materialized_series()
                    .get(row_idx)
                    .map_err(|e| AppError::Internal(format!("Failed to read result value: {}", e)))?;
                record.insert(column.name().to_string(), Self::any_value_to_json(&value));
            }
            rows.push(record);
        }

        Ok(rows)
    }

    /// Convert a single cell value to JSON.
    ///
    /// Non-finite floats have no JSON representation and become null.
    /// Temporal values are rendered as ISO-8601 strings; anything without a
    /// dedicated arm falls back to its display form.
    fn any_value_to_json(value: &AnyValue) -> Value {
        match value {
            AnyValue::Null => Value::Null,
            AnyValue::Boolean(b) => Value::Bool(*b),
            AnyValue::String(s) => Value::String((*s).to_string()),
            AnyValue::StringOwned(s) => Value::String(s.to_string()),
            AnyValue::Int8(v) => Value::Number((*v).into()),
            AnyValue::Int16(v) => Value::Number((*v).into()),
            AnyValue::Int32(v) => Value::Number((*v).into()),
            AnyValue::Int64(v) => Value::Number((*v).into()),
            AnyValue::UInt8(v) => Value::Number((*v).into()),
            AnyValue::UInt16(v) => Value::Number((*v).into()),
            AnyValue::UInt32(v) => Value::Number((*v).into()),
            AnyValue::UInt64(v) => Value::Number((*v).into()),
            AnyValue::Float32(v) => Self::float_to_json(*v as f64),
            AnyValue::Float64(v) => Self::float_to_json(*v),
            AnyValue::Date(days) => Self::date_to_json(*days),
            AnyValue::Datetime(v, unit, _) => Self::datetime_to_json(*v, *unit),
            AnyValue::DatetimeOwned(v, unit, _) => Self::datetime_to_json(*v, *unit),
            other => Value::String(format!("{}", other)),
        }
    }

    fn float_to_json(v: f64) -> Value {
        Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
    }

    fn date_to_json(days_since_epoch: i32) -> Value {
        // Days relative to 1970-01-01; 719_163 is that date in days-from-CE
        NaiveDate::from_num_days_from_ce_opt(days_since_epoch + 719_163)
            .map(|date| Value::String(date.to_string()))
            .unwrap_or_else(|| Value::Number(days_since_epoch.into()))
    }

    fn datetime_to_json(value: i64, unit: TimeUnit) -> Value {
        let per_second: i64 = match unit {
            TimeUnit::Nanoseconds => 1_000_000_000,
            TimeUnit::Microseconds => 1_000_000,
            TimeUnit::Milliseconds => 1_000,
        };
        let nanos_multiplier = 1_000_000_000 / per_second;
        let secs = value.div_euclid(per_second);
        let nanos = (value.rem_euclid(per_second) * nanos_multiplier) as u32;

        DateTime::from_timestamp(secs, nanos)
            .map(|dt| Value::String(dt.naive_utc().to_string()))
            .unwrap_or_else(|| Value::Number(value.into()))
    }
}
