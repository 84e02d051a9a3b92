//! Source-format parsing.

mod tlm;

pub use tlm::{decode_latin1, parse_tlm_file, parse_tlm_str};
