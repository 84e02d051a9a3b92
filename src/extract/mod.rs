//! Row extraction pipelines, one per tool family.
//!
//! The two pipelines share nothing but the source tree shape and the
//! output file discipline; no data flows between them.

mod lathe;
mod mill;

pub use lathe::extract_lathe_rows;
pub use mill::extract_mill_rows;
