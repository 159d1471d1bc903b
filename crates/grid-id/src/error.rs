//! Error types for GRid validation.

use std::fmt;

use thiserror::Error;

use crate::validate::Errors;

/// The four parts of a GRid, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    IdScheme,
    IssuerCode,
    ReleaseNumber,
    CheckCharacter,
}

impl Field {
    /// All fields, in the order they appear in an identifier.
    pub const ALL: [Field; 4] = [
        Field::IdScheme,
        Field::IssuerCode,
        Field::ReleaseNumber,
        Field::CheckCharacter,
    ];

    /// Returns the canonical key for this field (e.g., "issuer_code").
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::IdScheme => "id_scheme",
            Field::IssuerCode => "issuer_code",
            Field::ReleaseNumber => "release_number",
            Field::CheckCharacter => "check_character",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reason a field failed validation.
///
/// The `Display` output is the fixed message reported for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    /// The field is absent.
    #[error("required")]
    Required,

    /// Wrong length or a non-alphanumeric character.
    #[error("must be {length} alphanumeric characters")]
    Malformed { length: usize },

    /// The ID scheme is not the one this crate understands.
    #[error("must be {}", crate::DEFAULT_ID_SCHEME)]
    WrongScheme,

    /// The check character does not match the other fields.
    #[error("verification failed")]
    VerificationFailed,
}

/// Error returned by [`Grid::parse_strict`](crate::Grid::parse_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid GRid {input:?}: {errors}")]
    Invalid { input: String, errors: Errors },
}

impl GridError {
    /// Returns the per-field report behind this error.
    pub fn errors(&self) -> &Errors {
        match self {
            GridError::Invalid { errors, .. } => errors,
        }
    }
}
