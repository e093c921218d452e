pub mod placeholder;
pub mod statement;
pub mod value;

pub use placeholder::{PLACEHOLDER, translate_placeholders, where_suffix};
pub use statement::{Filter, Statement};
pub use value::SqlValue;
