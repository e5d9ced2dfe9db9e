//! Domain models for clitree
//!
//! Descriptors for options and params, plus the values the tokenizer
//! produces. Descriptors are validated on construction (fail-fast pattern).

pub mod arguments;
pub mod option;
pub mod param;
pub mod value;

pub use arguments::Arguments;
pub use option::CliOption;
pub use param::{active_multiple, Param};
pub use value::{Value, ValueType};
