//! The GRid value type.
//!
//! A [`Grid`] holds the four parts of a Global Release Identifier as raw,
//! possibly malformed data. Nothing is validated at construction or
//! assignment time; [`Grid::is_valid`] is the explicit validity check.
//!
//! The check character is derived whenever the scheme, issuer code or release
//! number is assigned, so it only disagrees with the other fields when it was
//! supplied explicitly at construction (or by the parser).

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::model::defaults::GridFactory;
use crate::util::compute_check;
use crate::validate::{validate_grid, Errors};

/// The only ID scheme currently assigned.
pub const DEFAULT_ID_SCHEME: &str = "A1";

/// Separator used by the hyphenated form.
pub const SEPARATOR: char = '-';

/// Raw parts of a GRid, keyed by their canonical field names.
///
/// Used both as constructor input and as the mapping rendering of a
/// [`Grid`] (see [`Grid::to_parts`]). No case transformation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Parts {
    pub id_scheme: Option<String>,
    pub issuer_code: Option<String>,
    pub release_number: Option<String>,
    pub check_character: Option<char>,
}

impl Parts {
    /// Creates an empty set of parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ID scheme.
    pub fn with_id_scheme(mut self, id_scheme: impl Into<String>) -> Self {
        self.id_scheme = Some(id_scheme.into());
        self
    }

    /// Sets the issuer code.
    pub fn with_issuer_code(mut self, issuer_code: impl Into<String>) -> Self {
        self.issuer_code = Some(issuer_code.into());
        self
    }

    /// Sets the release number.
    pub fn with_release_number(mut self, release_number: impl Into<String>) -> Self {
        self.release_number = Some(release_number.into());
        self
    }

    /// Sets the check character. It will not be derived when given.
    pub fn with_check_character(mut self, check_character: char) -> Self {
        self.check_character = Some(check_character);
        self
    }
}

/// A Global Release Identifier.
///
/// ```rust
/// use grid_id::{Grid, Parts};
///
/// let mut grid = Grid::new(
///     Parts::new()
///         .with_issuer_code("2425G")
///         .with_release_number("ABC1234002"),
/// );
/// assert_eq!(grid.check_character(), Some('M'));
/// assert_eq!(grid.formatted(), "A1-2425G-ABC1234002-M");
/// assert!(grid.is_valid());
/// ```
///
/// Equality and hashing use the canonical compact form (see [`Display`]),
/// so two grids built from differently cased parts compare equal.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone)]
pub struct Grid {
    id_scheme: Option<String>,
    issuer_code: Option<String>,
    release_number: Option<String>,
    check_character: Option<char>,
    errors: Errors,
}

impl Grid {
    /// Creates a grid from `parts`, applying the process-wide defaults.
    ///
    /// - `id_scheme` defaults to [`DEFAULT_ID_SCHEME`]
    /// - `issuer_code` defaults to the process-wide default issuer code, if set
    /// - `check_character` is computed from the other fields if not given
    ///
    /// Use a [`GridFactory`] to supply the default issuer code explicitly.
    pub fn new(parts: Parts) -> Self {
        GridFactory::global().build(parts)
    }

    pub(crate) fn with_default_issuer_code(parts: Parts, default: Option<&str>) -> Self {
        let Parts {
            id_scheme,
            issuer_code,
            release_number,
            check_character,
        } = parts;

        let mut grid = Self {
            id_scheme: id_scheme.or_else(|| Some(DEFAULT_ID_SCHEME.to_owned())),
            issuer_code: issuer_code.or_else(|| default.map(str::to_owned)),
            release_number,
            check_character,
            errors: Errors::new(),
        };
        if grid.check_character.is_none() {
            grid.recalculate_check_character();
        }
        grid
    }

    /// Parses `input` into a grid. Never fails.
    ///
    /// Accepts the compact and hyphenated forms, in any case, with an
    /// optional `GRID:` prefix. Absent or blank input yields a grid built
    /// from no parts. Call [`Grid::is_valid`] to find out whether the result
    /// is usable.
    ///
    /// ```rust
    /// use grid_id::Grid;
    ///
    /// let grid = Grid::parse("grid:A1-2425G-ABC1234002-M");
    /// assert_eq!(grid.issuer_code(), Some("2425G"));
    /// assert_eq!(grid.to_string(), "A12425GABC1234002M");
    ///
    /// assert!(!Grid::parse(None).is_valid());
    /// ```
    pub fn parse<'a>(input: impl Into<Option<&'a str>>) -> Self {
        GridFactory::global().parse(input)
    }

    /// Parses `input` and returns it only if it is valid.
    pub fn parse_strict(input: &str) -> Result<Self, GridError> {
        let mut grid = Self::parse(input);
        if grid.is_valid() {
            Ok(grid)
        } else {
            Err(GridError::Invalid {
                input: input.to_owned(),
                errors: grid.errors,
            })
        }
    }

    pub fn id_scheme(&self) -> Option<&str> {
        self.id_scheme.as_deref()
    }

    pub fn issuer_code(&self) -> Option<&str> {
        self.issuer_code.as_deref()
    }

    pub fn release_number(&self) -> Option<&str> {
        self.release_number.as_deref()
    }

    pub fn check_character(&self) -> Option<char> {
        self.check_character
    }

    /// Returns the report from the most recent [`Grid::is_valid`] call.
    ///
    /// The report is not updated by later assignments.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Assigns the ID scheme and recomputes the check character.
    pub fn set_id_scheme(&mut self, id_scheme: Option<&str>) {
        self.id_scheme = id_scheme.map(str::to_owned);
        self.recalculate_check_character();
    }

    /// Assigns the issuer code and recomputes the check character.
    pub fn set_issuer_code(&mut self, issuer_code: Option<&str>) {
        self.issuer_code = issuer_code.map(str::to_owned);
        self.recalculate_check_character();
    }

    /// Assigns the release number and recomputes the check character.
    pub fn set_release_number(&mut self, release_number: Option<&str>) {
        self.release_number = release_number.map(str::to_owned);
        self.recalculate_check_character();
    }

    /// Overwrites the check character with the one derived from the other fields.
    pub fn recalculate_check_character(&mut self) {
        self.check_character = self.expected_check_character();
    }

    /// Returns the check character the other fields call for, if derivable.
    pub fn expected_check_character(&self) -> Option<char> {
        compute_check(&self.payload())
    }

    /// Validates every field, replacing the previous report.
    ///
    /// Returns true if no field has errors; see [`Grid::errors`] otherwise.
    pub fn is_valid(&mut self) -> bool {
        self.errors = validate_grid(self);
        tracing::debug!(grid = %self, errors = %self.errors, "validated GRid");
        self.errors.is_empty()
    }

    /// Validates every field without touching the stored report.
    pub fn validate(&self) -> Errors {
        validate_grid(self)
    }

    /// Returns the raw parts, as stored.
    pub fn to_parts(&self) -> Parts {
        Parts {
            id_scheme: self.id_scheme.clone(),
            issuer_code: self.issuer_code.clone(),
            release_number: self.release_number.clone(),
            check_character: self.check_character,
        }
    }

    /// Returns the hyphenated form, e.g. `A1-2425G-ABC1234002-M`.
    ///
    /// Absent parts are skipped rather than left empty.
    pub fn formatted(&self) -> String {
        self.render(&SEPARATOR.to_string())
    }

    /// Compares against a string by parsing it first.
    ///
    /// Only the string side is normalized by parsing, so this is not
    /// symmetric with comparing two grids: `"A1-2425G-ABC1234002-M"` is
    /// loosely equal to the grid it describes, while the grid's own compact
    /// form of a malformed value may parse into different parts.
    pub fn loose_eq(&self, other: &str) -> bool {
        *self == Self::parse(other)
    }

    /// Upper-cased scheme, issuer code and release number. Input to the check algorithm.
    fn payload(&self) -> String {
        [
            self.id_scheme.as_deref(),
            self.issuer_code.as_deref(),
            self.release_number.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<String>()
        .to_uppercase()
    }

    fn render(&self, separator: &str) -> String {
        let check = self.check_character.map(String::from);
        [
            self.id_scheme.as_deref(),
            self.issuer_code.as_deref(),
            self.release_number.as_deref(),
            check.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(separator)
        .to_uppercase()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Parts::default())
    }
}

/// The compact form, e.g. `A12425GABC1234002M`. This is the canonical identity.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

/// Loose comparison; see [`Grid::loose_eq`].
impl PartialEq<str> for Grid {
    fn eq(&self, other: &str) -> bool {
        self.loose_eq(other)
    }
}

/// Loose comparison; see [`Grid::loose_eq`].
impl PartialEq<&str> for Grid {
    fn eq(&self, other: &&str) -> bool {
        self.loose_eq(other)
    }
}

impl FromStr for Grid {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Grid {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Parts> for Grid {
    fn from(parts: Parts) -> Self {
        Self::new(parts)
    }
}
