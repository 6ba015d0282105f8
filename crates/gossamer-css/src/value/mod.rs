//! Property value model: the value union, units, colors, and the closed
//! value-keyword table.

mod keyword;
mod types;

pub use keyword::Keyword;
pub use types::{Color, FunctionValue, ListSeparator, Unit, UnitFlags, Value, ValueList};
