pub mod convert;
pub mod executor;
pub mod inspector;
pub mod reader;
pub mod resolver;
pub mod sql_functions; // Static catalogue, documentation only

pub use convert::*;
pub use executor::*;
pub use inspector::*;
pub use reader::*;
pub use resolver::*;
