//! Output generation: table assembly and row identifiers.

mod guid;
mod table;

pub use guid::{IdGenerator, SequentialIds, UuidIds};
pub use table::{generate_lathe_table, generate_mill_table};
