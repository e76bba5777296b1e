//! Static catalogue of SQL functions supported by the query engine.
//!
//! This is pure documentation data: it is rendered into the description of
//! the `execute_polars_sql` query parameter so calling agents know what the
//! dialect supports. It never influences query execution.

pub const AGGREGATE_FUNCTIONS: &[&str] = &[
    "avg",
    "count",
    "first",
    "last",
    "max",
    "median",
    "min",
    "sum",
    "quantile_count",
    "quantile_disc",
    "stddev",
    "variance",
];

pub const ARRAY_FUNCTIONS: &[&str] = &[
    "array_agg",
    "array_contains",
    "array_get",
    "array_length",
    "array_lower",
    "array_mean",
    "array_reverse",
    "array_sum",
    "array_to_string",
    "array_unique",
    "array_upper",
    "unnest",
];

pub const BITWISE_FUNCTIONS: &[&str] = &["bit_and", "bit_count", "bit_or", "bit_xor"];

pub const CONDITIONAL_FUNCTIONS: &[&str] =
    &["coalesce", "greatest", "if", "ifnull", "least", "nullif"];

pub const MATHEMATICAL_FUNCTIONS: &[&str] = &[
    "abs", "cbrt", "ceil", "div", "exp", "floor", "ln", "log2", "log10", "mod", "pi", "pow",
    "round", "sign", "sqrt",
];

pub const STRING_FUNCTIONS: &[&str] = &[
    "bit_length",
    "concat",
    "concat_ws",
    "date",
    "ends_with",
    "initcap",
    "left",
    "length",
    "lower",
    "ltrim",
    "normalize",
    "octet_length",
    "regexp_like",
    "replace",
    "reverse",
    "right",
    "rtrim",
    "starts_with",
    "strpos",
    "strptime",
    "substr",
    "timestamp",
    "upper",
];

pub const TEMPORAL_FUNCTIONS: &[&str] = &["date_part", "extract", "strftime"];

pub const TYPE_FUNCTIONS: &[&str] = &["cast", "try_cast"];

pub const TRIGONOMETRIC_FUNCTIONS: &[&str] = &[
    "acos", "acosd", "asin", "asind", "atan", "atand", "atan2", "atan2d", "cot", "cotd", "cos",
    "cosd", "degrees", "radians", "sin", "sind", "tan", "tand",
];

/// Catalogue entries in rendering order: (category, function names).
pub const CATALOGUE: &[(&str, &[&str])] = &[
    ("aggregate", AGGREGATE_FUNCTIONS),
    ("array", ARRAY_FUNCTIONS),
    ("bitwise", BITWISE_FUNCTIONS),
    ("conditional", CONDITIONAL_FUNCTIONS),
    ("mathematical", MATHEMATICAL_FUNCTIONS),
    ("string", STRING_FUNCTIONS),
    ("temporal", TEMPORAL_FUNCTIONS),
    ("type", TYPE_FUNCTIONS),
    ("trigonometric", TRIGONOMETRIC_FUNCTIONS),
];

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the catalogue as the human-readable block embedded in the
/// `query` parameter description.
pub fn render_catalogue() -> String {
    let mut sections = Vec::with_capacity(CATALOGUE.len());
    for (category, functions) in CATALOGUE {
        let names: Vec<String> = functions.iter().map(|f| format!("- {}", capitalize(f))).collect();
        sections.push(format!("{}:\n{}\n", capitalize(category), names.join("\n")));
    }
    sections.join("\n")
}

/// Full description text for the `query` parameter of `execute_polars_sql`.
pub fn query_parameter_description() -> String {
    format!(
        "The polars SQL query to be executed. The query must use the table \
         name `self` to refer to the source data. Supported functions are:\n\n{}",
        render_catalogue()
    )
}
