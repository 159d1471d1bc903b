//! GRid: Global Release Identifier.
//!
//! This crate models, parses, validates and formats GRids, the fixed-structure
//! identifiers assigned to digital music releases.
//!
//! # Overview
//!
//! A GRid has four parts:
//!
//! | Part | Length | Example |
//! |------|--------|---------|
//! | ID scheme | 2 | `A1` |
//! | Issuer code | 5 | `2425G` |
//! | Release number | 10 | `ABC1234002` |
//! | Check character | 1 | `M` |
//!
//! Written compactly (`A12425GABC1234002M`) or hyphenated
//! (`A1-2425G-ABC1234002-M`).
//!
//! # Quick Start
//!
//! ```rust
//! use grid_id::{Field, Grid, Parts};
//!
//! // Build from parts; the check character is derived
//! let grid = Grid::new(
//!     Parts::new()
//!         .with_issuer_code("2425G")
//!         .with_release_number("ABC1234002"),
//! );
//! assert_eq!(grid.formatted(), "A1-2425G-ABC1234002-M");
//!
//! // Parse free-form input; parsing never fails
//! let mut parsed = Grid::parse("grid:a1-2425g-abc1234002-q");
//! assert!(!parsed.is_valid());
//! assert_eq!(
//!     parsed.errors().messages(Field::CheckCharacter),
//!     Some(vec!["verification failed".to_string()])
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: The [`Grid`] value type, its parts and default configuration
//! - [`codec`]: Tolerant parsing of textual input
//! - [`validate`]: Field rules and the per-field error report
//! - [`util`]: The mod-37 check character
//! - [`error`]: Error types
//!
//! # Validity
//!
//! Construction and parsing accept anything. Validity is a separate, explicit
//! check ([`Grid::is_valid`]) that records at most one error per field.

pub mod codec;
pub mod error;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::parse_parts;
pub use error::{Field, FieldError, GridError};
pub use model::{
    default_issuer_code, reset_default_issuer_code, set_default_issuer_code, Grid, GridFactory,
    Parts, DEFAULT_ID_SCHEME,
};
pub use util::{compute_check, verify, ALPHABET};
pub use validate::{validate_grid, Errors};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
