//! Character Catalog
//!
//! Seed data loading for the character list.

use crate::models::Character;

const SEED_CHARACTERS: &str = include_str!("../assets/characters.json");

/// Parse a JSON array of characters
pub fn load_characters(json: &str) -> Result<Vec<Character>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Characters bundled with the app
pub fn seed_characters() -> Result<Vec<Character>, String> {
    load_characters(SEED_CHARACTERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_characters_parse() {
        let characters = seed_characters().expect("seed should parse");

        assert!(!characters.is_empty());
        assert_eq!(characters[0].id, 1);
        assert_eq!(characters[0].name, "Rick Sanchez");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let characters = seed_characters().unwrap();
        let mut ids: Vec<_> = characters.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), characters.len());
    }

    #[test]
    fn test_load_characters_reports_errors() {
        let err = load_characters(r#"[{"id": "one"}]"#).unwrap_err();
        assert!(!err.is_empty());

        assert_eq!(load_characters("[]").unwrap(), Vec::new());
    }
}
