pub mod files;
pub mod query;
pub mod schema;
pub mod tools;
