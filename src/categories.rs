//! The frozen category table.
//!
//! Translates between the short category key used by clients, our display
//! name, and the label used inside the question corpus. Loaded once, never
//! mutated.

/// Immutable category reference record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable short identifier ("any" or a small number as a string)
    pub key: &'static str,
    /// Name shown to players
    pub display_name: &'static str,
    /// Label used inside the corpus for querying
    pub external_name: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { key: "any", display_name: "surprise me", external_name: "Any Category" },
    Category { key: "9", display_name: "general knowledge", external_name: "General Knowledge" },
    Category { key: "10", display_name: "books", external_name: "Entertainment: Books" },
    Category { key: "11", display_name: "films", external_name: "Entertainment: Film" },
    Category { key: "12", display_name: "music", external_name: "Entertainment: Music" },
    Category { key: "13", display_name: "theater & musicals", external_name: "Entertainment: Musicals & Theatres" },
    Category { key: "14", display_name: "television", external_name: "Entertainment: Television" },
    Category { key: "15", display_name: "video games", external_name: "Entertainment: Video Games" },
    Category { key: "16", display_name: "board games", external_name: "Entertainment: Board Games" },
    Category { key: "17", display_name: "science & nature", external_name: "Science & Nature" },
    Category { key: "18", display_name: "computers", external_name: "Science: Computers" },
    Category { key: "19", display_name: "math", external_name: "Science: Mathematics" },
    Category { key: "20", display_name: "mythology", external_name: "Mythology" },
    Category { key: "21", display_name: "sports", external_name: "Sports" },
    Category { key: "22", display_name: "geography", external_name: "Geography" },
    Category { key: "23", display_name: "history", external_name: "History" },
    Category { key: "24", display_name: "politics", external_name: "Politics" },
    Category { key: "25", display_name: "art", external_name: "Art" },
    Category { key: "26", display_name: "celebrities", external_name: "Celebrities" },
    Category { key: "27", display_name: "animals", external_name: "Animals" },
    Category { key: "28", display_name: "vehicles", external_name: "Vehicles" },
    Category { key: "29", display_name: "comics", external_name: "Entertainment: Comics" },
    Category { key: "30", display_name: "tech gadgets", external_name: "Science: Gadgets" },
    Category { key: "31", display_name: "anime & manga", external_name: "Entertainment: Japanese Anime & Manga" },
    Category { key: "32", display_name: "cartoons & animation", external_name: "Entertainment: Cartoon & Animations" },
];

/// Look up a category by its key
pub fn resolve(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// True if the key is "any" or resolvable in the table
pub fn is_valid_key(key: &str) -> bool {
    resolve(key).is_some()
}

/// True if the request carries a non-empty list of resolvable category keys
pub fn validate_keys(keys: &[String]) -> bool {
    !keys.is_empty() && keys.iter().all(|k| is_valid_key(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_keys() {
        // "any" plus keys 9 through 32
        assert_eq!(CATEGORIES.len(), 25);
        assert!(resolve("any").is_some());
        for key in 9..=32 {
            assert!(
                resolve(&key.to_string()).is_some(),
                "missing category key {}",
                key
            );
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, cat) in CATEGORIES.iter().enumerate() {
            assert!(
                !CATEGORIES[i + 1..].iter().any(|c| c.key == cat.key),
                "duplicate key {}",
                cat.key
            );
        }
    }

    #[test]
    fn test_resolve_maps_key_to_external_name() {
        assert_eq!(resolve("9").unwrap().external_name, "General Knowledge");
        assert_eq!(resolve("22").unwrap().external_name, "Geography");
        assert_eq!(resolve("any").unwrap().external_name, "Any Category");
    }

    #[test]
    fn test_resolve_rejects_unknown_keys() {
        assert!(resolve("8").is_none());
        assert!(resolve("33").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("geography").is_none());
    }

    #[test]
    fn test_validate_keys() {
        let ok = vec!["9".to_string(), "any".to_string(), "32".to_string()];
        assert!(validate_keys(&ok));

        let bad = vec!["9".to_string(), "99".to_string()];
        assert!(!validate_keys(&bad));

        // empty list is not a valid request
        assert!(!validate_keys(&[]));
    }
}
