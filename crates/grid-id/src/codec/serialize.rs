//! Serde support for [`Grid`].
//!
//! A grid serializes as its compact form and deserializes through the
//! tolerant parser, so any string is accepted. Validate after deserializing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::Grid;

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Grid::parse(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Grid, Parts};

    fn grid() -> Grid {
        Grid::new(
            Parts::new()
                .with_issuer_code("2425G")
                .with_release_number("ABC1234002"),
        )
    }

    #[test]
    fn test_grid_serializes_as_compact_string() {
        let json = serde_json::to_string(&grid()).unwrap();
        assert_eq!(json, "\"A12425GABC1234002M\"");
    }

    #[test]
    fn test_grid_deserializes_any_form() {
        let parsed: Grid = serde_json::from_str("\"grid:a1-2425g-abc1234002-m\"").unwrap();
        assert_eq!(parsed, grid());

        let mut malformed: Grid = serde_json::from_str("\"!-\"").unwrap();
        assert!(!malformed.is_valid());
    }

    #[test]
    fn test_parts_json_keys() {
        let json = serde_json::to_value(grid().to_parts()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id_scheme": "A1",
                "issuer_code": "2425G",
                "release_number": "ABC1234002",
                "check_character": "M",
            })
        );

        let parts: Parts = serde_json::from_str(r#"{"issuer_code": "2425G"}"#).unwrap();
        assert_eq!(parts, Parts::new().with_issuer_code("2425G"));
    }
}
