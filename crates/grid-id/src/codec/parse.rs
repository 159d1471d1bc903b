//! Tolerant parsing of textual GRids.
//!
//! Parsing is purely positional: after trimming, upper-casing and removing an
//! optional `GRID:` prefix, fixed-width slices are taken from the front of
//! the input (2, 5 and 10 characters), each optionally followed by a single
//! hyphen. The check character is the last character of whatever is left.
//!
//! Nothing here fails. Input that does not fit yields absent parts and the
//! resulting grid reports the problem when validated.

use crate::model::{Grid, GridFactory, Parts, SEPARATOR};
use crate::validate::{ISSUER_CODE_LEN, RELEASE_NUMBER_LEN};

/// Optional prefix accepted in front of a GRid (compared after upper-casing).
pub const PREFIX: &str = "GRID:";

/// Number of characters in an ID scheme.
pub const ID_SCHEME_LEN: usize = 2;

/// Cursor over the characters of an upper-cased GRid body.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    /// Creates a cursor at the start of `body`.
    pub fn new(body: &str) -> Self {
        Self {
            chars: body.chars().collect(),
            pos: 0,
        }
    }

    /// Returns the number of unconsumed characters.
    pub fn remaining_len(&self) -> usize {
        self.chars.len() - self.pos
    }

    /// Takes exactly `n` characters and then a single separator, if present.
    ///
    /// If fewer than `n` remain, they are consumed and `None` is returned.
    pub fn take(&mut self, n: usize) -> Option<String> {
        if self.remaining_len() < n {
            self.pos = self.chars.len();
            return None;
        }
        let slice: String = self.chars[self.pos..self.pos + n].iter().collect();
        self.pos += n;
        self.skip_separator();
        Some(slice)
    }

    /// Returns the last unconsumed character without consuming it.
    pub fn last(&self) -> Option<char> {
        self.chars[self.pos..].last().copied()
    }

    fn skip_separator(&mut self) {
        if self.chars.get(self.pos) == Some(&SEPARATOR) {
            self.pos += 1;
        }
    }
}

/// Splits `input` into raw parts. Absent or blank input yields empty parts.
pub fn parse_parts(input: Option<&str>) -> Parts {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Parts::default();
    };

    let upper = input.to_uppercase();
    let body = upper.strip_prefix(PREFIX).unwrap_or(&upper);

    let mut cursor = Cursor::new(body);
    let id_scheme = cursor.take(ID_SCHEME_LEN);
    let issuer_code = cursor.take(ISSUER_CODE_LEN);
    let release_number = cursor.take(RELEASE_NUMBER_LEN);
    let check_character = cursor.last();

    tracing::trace!(
        input,
        ?id_scheme,
        ?issuer_code,
        ?release_number,
        ?check_character,
        remaining = cursor.remaining_len(),
        "split GRid"
    );

    Parts {
        id_scheme,
        issuer_code,
        release_number,
        check_character,
    }
}

/// Parses `input` into a grid built by `factory`.
///
/// The check character is kept as found; a wrong one is reported by
/// validation rather than silently replaced.
pub fn parse_with(input: Option<&str>, factory: &GridFactory) -> Grid {
    factory.build(parse_parts(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, FieldError};

    const VALID: [&str; 6] = [
        "grid:A12425GABC1234002M",
        "grid:A1-2425G-ABC1234002-M",
        "GRiD:A12425G-ABC1234002-M",
        "A1-2425GABC1234002-M",
        "  a1-2425g-abc1234002-m\n",
        "A12425GABC1234002M",
    ];

    fn parse(input: Option<&str>) -> Grid {
        parse_with(input, &GridFactory::new())
    }

    #[test]
    fn test_parse_valid_formats() {
        for input in VALID {
            let mut grid = parse(Some(input));
            assert!(grid.is_valid(), "{input}: {}", grid.errors());
            assert_eq!(grid.id_scheme(), Some("A1"));
            assert_eq!(grid.issuer_code(), Some("2425G"));
            assert_eq!(grid.release_number(), Some("ABC1234002"));
            assert_eq!(grid.check_character(), Some('M'));
        }
    }

    #[test]
    fn test_parse_invalid_formats() {
        for input in [None, Some(""), Some("   "), Some("BAD"), Some("!-")] {
            let mut grid = parse(input);
            assert!(!grid.is_valid(), "{input:?}");
        }
    }

    #[test]
    fn test_parse_absent_and_blank() {
        for input in [None, Some(""), Some(" \t ")] {
            let parts = parse_parts(input);
            assert_eq!(parts, Parts::default());

            let mut grid = parse(input);
            assert_eq!(grid.id_scheme(), Some("A1"));
            assert!(!grid.is_valid());
            assert!(grid.errors().contains(Field::IssuerCode));
            assert!(grid.errors().contains(Field::ReleaseNumber));
        }
    }

    #[test]
    fn test_parse_punctuation() {
        let parts = parse_parts(Some("!-"));
        assert_eq!(parts.id_scheme.as_deref(), Some("!-"));
        assert_eq!(parts.issuer_code, None);
        assert_eq!(parts.release_number, None);
        assert_eq!(parts.check_character, None);

        let mut grid = parse(Some("!-"));
        assert!(!grid.is_valid());
        assert_eq!(
            grid.errors().get(Field::IdScheme),
            Some(&[FieldError::WrongScheme][..])
        );
    }

    #[test]
    fn test_short_slice_leaves_field_absent() {
        let parts = parse_parts(Some("A12425GABC"));
        assert_eq!(parts.id_scheme.as_deref(), Some("A1"));
        assert_eq!(parts.issuer_code.as_deref(), Some("2425G"));
        assert_eq!(parts.release_number, None);
        assert_eq!(parts.check_character, None);

        let parts = parse_parts(Some("BAD"));
        assert_eq!(parts.id_scheme.as_deref(), Some("BA"));
        assert_eq!(parts.issuer_code, None);
        assert_eq!(parts.check_character, None);
    }

    #[test]
    fn test_short_slice_is_not_taken_as_check_character() {
        let parts = parse_parts(Some("A1-24"));
        assert_eq!(parts.id_scheme.as_deref(), Some("A1"));
        assert_eq!(parts.issuer_code, None);
        assert_eq!(parts.release_number, None);
        assert_eq!(parts.check_character, None);

        let grid = parse(Some("A1-24"));
        assert_eq!(grid.check_character(), Some('W'));
        assert_eq!(grid.to_string(), "A1W");
    }

    #[test]
    fn test_check_character_is_last_of_remainder() {
        let parts = parse_parts(Some("A1-2425G-ABC1234002-XYZ"));
        assert_eq!(parts.release_number.as_deref(), Some("ABC1234002"));
        assert_eq!(parts.check_character, Some('Z'));

        let parts = parse_parts(Some("A1-2425G-ABC1234002"));
        assert_eq!(parts.check_character, None);
    }

    #[test]
    fn test_wrong_check_character_is_kept() {
        let mut grid = parse(Some("A1-2425G-ABC1234002-Q"));
        assert_eq!(grid.check_character(), Some('Q'));
        assert!(!grid.is_valid());
        assert_eq!(
            grid.errors().messages(Field::CheckCharacter),
            Some(vec!["verification failed".to_string()])
        );
    }

    #[test]
    fn test_missing_check_character_is_derived() {
        let grid = parse(Some("A1-2425G-ABC1234002"));
        assert_eq!(grid.check_character(), Some('M'));
    }

    #[test]
    fn test_spaces_are_content() {
        let parts = parse_parts(Some("A1 2425G ABC1234002 M"));
        assert_eq!(parts.id_scheme.as_deref(), Some("A1"));
        assert_eq!(parts.issuer_code.as_deref(), Some(" 2425"));

        let mut grid = parse(Some("A1 2425G ABC1234002 M"));
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_only_one_separator_is_skipped() {
        let parts = parse_parts(Some("A1--2425G-ABC1234002-M"));
        assert_eq!(parts.issuer_code.as_deref(), Some("-2425"));
    }

    #[test]
    fn test_cursor() {
        let mut cursor = Cursor::new("AB-CDE");
        assert_eq!(cursor.take(2).as_deref(), Some("AB"));
        assert_eq!(cursor.remaining_len(), 3);
        assert_eq!(cursor.last(), Some('E'));
        assert_eq!(cursor.take(3).as_deref(), Some("CDE"));
        assert_eq!(cursor.last(), None);

        let mut cursor = Cursor::new("CDE-F");
        assert_eq!(cursor.take(10), None);
        assert_eq!(cursor.remaining_len(), 0);
        assert_eq!(cursor.last(), None);
        assert_eq!(cursor.take(1), None);
    }
}
