//! Textual decoding of GRids.

pub mod parse;
mod serialize;

pub use parse::{parse_parts, parse_with, Cursor, ID_SCHEME_LEN, PREFIX};
