//! Utility modules for GRid.

pub mod check;

pub use check::{compute_check, verify, ALPHABET, PAYLOAD_LEN};
