//! Core data types for GRid.

pub mod defaults;
pub mod grid;

pub use defaults::{
    default_issuer_code, reset_default_issuer_code, set_default_issuer_code, GridFactory,
};
pub use grid::{Grid, Parts, DEFAULT_ID_SCHEME, SEPARATOR};
