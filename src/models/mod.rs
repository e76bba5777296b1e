pub mod file_type;
pub mod tool;

pub use file_type::*;
pub use tool::*;
