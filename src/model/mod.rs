//! Data model: source tree nodes, output rows, type-code tables.

mod node;
mod row;
mod tool_type;

pub use node::ToolNode;
pub use row::{LatheRow, MillRow, LATHE_HEADERS, MILL_HEADERS};
pub use tool_type::{LatheToolType, MillToolType};
