//! Field-level validation for GRid values.
//!
//! Each of the four fields is checked independently against a fixed grammar
//! and the results are collected in an [`Errors`] report. At most one
//! [`FieldError`] is recorded per field: a missing field short-circuits its
//! format check.
//!
//! Validation never mutates the fields it looks at and never fails; the
//! caller decides what an invalid identifier means for them.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::{Field, FieldError};
use crate::model::Grid;
use crate::DEFAULT_ID_SCHEME;

/// Number of characters in an issuer code.
pub const ISSUER_CODE_LEN: usize = 5;

/// Number of characters in a release number.
pub const RELEASE_NUMBER_LEN: usize = 10;

/// Per-field validation report.
///
/// Only fields with at least one error have an entry. Iteration follows the
/// canonical field order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    fields: FxHashMap<Field, Vec<FieldError>>,
}

impl Errors {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field has errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Records `error` against `field`.
    pub fn add(&mut self, field: Field, error: FieldError) {
        self.fields.entry(field).or_default().push(error);
    }

    /// Returns true if `field` has at least one error.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns the errors recorded against `field`.
    pub fn get(&self, field: Field) -> Option<&[FieldError]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    /// Returns the messages recorded against `field`.
    pub fn messages(&self, field: Field) -> Option<Vec<String>> {
        self.get(field)
            .map(|errors| errors.iter().map(ToString::to_string).collect())
    }

    /// Iterates over fields with errors, in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[FieldError])> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|errors| (field, errors)))
    }

    fn record(&mut self, field: Field, error: Option<FieldError>) {
        if let Some(error) = error {
            self.add(field, error);
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, errors)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: ")?;
            for (j, error) in errors.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{error}")?;
            }
        }
        Ok(())
    }
}

/// Validates every field of `grid`, in canonical order.
pub fn validate_grid(grid: &Grid) -> Errors {
    let mut errors = Errors::new();

    errors.record(Field::IdScheme, validate_id_scheme(grid.id_scheme()));
    errors.record(Field::IssuerCode, validate_issuer_code(grid.issuer_code()));
    errors.record(
        Field::ReleaseNumber,
        validate_release_number(grid.release_number()),
    );
    errors.record(
        Field::CheckCharacter,
        validate_check_character(grid.check_character(), grid.expected_check_character()),
    );

    errors
}

/// The ID scheme must be exactly [`DEFAULT_ID_SCHEME`]. Absent counts as wrong.
pub fn validate_id_scheme(id_scheme: Option<&str>) -> Option<FieldError> {
    (id_scheme != Some(DEFAULT_ID_SCHEME)).then_some(FieldError::WrongScheme)
}

/// The issuer code must be present and 5 alphanumeric characters.
pub fn validate_issuer_code(issuer_code: Option<&str>) -> Option<FieldError> {
    validate_alphanumeric(issuer_code, ISSUER_CODE_LEN)
}

/// The release number must be present and 10 alphanumeric characters.
pub fn validate_release_number(release_number: Option<&str>) -> Option<FieldError> {
    validate_alphanumeric(release_number, RELEASE_NUMBER_LEN)
}

/// The check character must be present and equal to `expected`.
///
/// `expected` is what the check algorithm derives from the other fields; when
/// it is `None` (malformed content) no check character can match.
pub fn validate_check_character(
    check_character: Option<char>,
    expected: Option<char>,
) -> Option<FieldError> {
    match check_character {
        None => Some(FieldError::Required),
        Some(c) if Some(c) != expected => Some(FieldError::VerificationFailed),
        Some(_) => None,
    }
}

fn validate_alphanumeric(value: Option<&str>, length: usize) -> Option<FieldError> {
    let Some(value) = value else {
        return Some(FieldError::Required);
    };

    let well_formed = value.chars().count() == length
        && value.chars().all(|c| c.is_ascii_alphanumeric());

    (!well_formed).then_some(FieldError::Malformed { length })
}
