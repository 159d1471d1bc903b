//! Default issuer code configuration.
//!
//! Grids constructed without an issuer code take one from a [`GridFactory`].
//! [`Grid::new`] and [`Grid::parse`] use [`GridFactory::global`], which reads
//! the process-wide default set by [`set_default_issuer_code`].
//!
//! The process-wide default is shared by every thread. Tests that change it
//! should call [`reset_default_issuer_code`] when done, or prefer an explicit
//! factory:
//!
//! ```rust
//! use grid_id::{GridFactory, Parts};
//!
//! let factory = GridFactory::new().with_default_issuer_code("2425G");
//! let grid = factory.build(Parts::new().with_release_number("ABC1234002"));
//! assert_eq!(grid.to_string(), "A12425GABC1234002M");
//! ```

use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::codec::parse_with;
use crate::model::grid::{Grid, Parts};

lazy_static! {
    static ref DEFAULT_ISSUER_CODE: RwLock<Option<String>> = RwLock::new(None);
}

/// Sets the process-wide default issuer code. `None` clears it.
pub fn set_default_issuer_code(issuer_code: Option<&str>) {
    tracing::debug!(?issuer_code, "setting default issuer code");
    let mut guard = DEFAULT_ISSUER_CODE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = issuer_code.map(str::to_owned);
}

/// Returns a copy of the process-wide default issuer code.
pub fn default_issuer_code() -> Option<String> {
    DEFAULT_ISSUER_CODE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Clears the process-wide default issuer code.
pub fn reset_default_issuer_code() {
    set_default_issuer_code(None);
}

/// Builds grids with an explicit default issuer code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridFactory {
    default_issuer_code: Option<String>,
}

impl GridFactory {
    /// Creates a factory with no default issuer code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory holding the current process-wide default.
    pub fn global() -> Self {
        Self {
            default_issuer_code: default_issuer_code(),
        }
    }

    /// Sets the issuer code applied when none is given.
    pub fn with_default_issuer_code(mut self, issuer_code: impl Into<String>) -> Self {
        self.default_issuer_code = Some(issuer_code.into());
        self
    }

    pub fn default_issuer_code(&self) -> Option<&str> {
        self.default_issuer_code.as_deref()
    }

    /// Creates a grid from `parts`. See [`Grid::new`] for the defaults applied.
    pub fn build(&self, parts: Parts) -> Grid {
        Grid::with_default_issuer_code(parts, self.default_issuer_code.as_deref())
    }

    /// Parses `input`. See [`Grid::parse`].
    pub fn parse<'a>(&self, input: impl Into<Option<&'a str>>) -> Grid {
        parse_with(input.into(), self)
    }
}
