use crate::models::{Category, QuizItem};
use std::fs;
use std::path::{Path, PathBuf};

/// Deck files found under `decks/`, sorted for a stable pick order.
pub fn get_deck_files() -> Vec<PathBuf> {
    let decks_dir = PathBuf::from("decks");
    let mut files = Vec::new();

    if decks_dir.exists()
        && decks_dir.is_dir()
        && let Ok(entries) = fs::read_dir(&decks_dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

/// Loads a JSON deck file: an array of `{text, category, explanation}`
/// records. Items with an empty text or explanation are dropped.
pub fn load_deck(path: &Path) -> std::io::Result<Vec<QuizItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<QuizItem> = serde_json::from_str(&content)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(items
        .into_iter()
        .filter(|i| !i.text.trim().is_empty() && !i.explanation.trim().is_empty())
        .collect())
}

/// The original «пів» deck, shipped inline so the binary runs with no deck
/// file present.
pub fn default_deck() -> Vec<QuizItem> {
    vec![
        QuizItem {
            text: "пів Києва".to_string(),
            category: Category::Half,
            explanation: "«пів Києва» означає половину Києва, тому пишемо окремо частку «пів» і слово в родовому відмінку.".to_string(),
        },
        QuizItem {
            text: "пів міста".to_string(),
            category: Category::Half,
            explanation: "«пів міста» вказує на половину певного міста. Частку і іменник пишемо окремо (у родовому відмінку).".to_string(),
        },
        QuizItem {
            text: "півострів".to_string(),
            category: Category::Whole,
            explanation: "«півострів» — географічний термін, цілісне поняття, тому пишеться разом.".to_string(),
        },
        QuizItem {
            text: "пів годинки".to_string(),
            category: Category::Half,
            explanation: "«пів годинки» означає половину години, отже частка «пів» і слово пишуться окремо.".to_string(),
        },
        QuizItem {
            text: "півкуля".to_string(),
            category: Category::Whole,
            explanation: "«півкуля» — це цілісне поняття (одна з половин кулі), тому пишемо разом.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_deck_parses_items() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"[
                {{"text":"пів Києва","category":"half","explanation":"окремо"}},
                {{"text":"півострів","category":"whole","explanation":"разом"}}
            ]"#
        )
        .unwrap();

        let items = load_deck(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, Category::Half);
        assert_eq!(items[1].category, Category::Whole);
    }

    #[test]
    fn test_load_deck_filters_empty_fields() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"[
                {{"text":"пів міста","category":"half","explanation":"окремо"}},
                {{"text":"  ","category":"half","explanation":"окремо"}},
                {{"text":"півкуля","category":"whole","explanation":""}}
            ]"#
        )
        .unwrap();

        let items = load_deck(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "пів міста");
    }

    #[test]
    fn test_load_deck_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "not json").unwrap();
        assert!(load_deck(file.path()).is_err());
    }

    #[test]
    fn test_default_deck_has_both_categories() {
        let deck = default_deck();
        assert_eq!(deck.len(), 5);
        assert!(deck.iter().any(|i| i.category == Category::Half));
        assert!(deck.iter().any(|i| i.category == Category::Whole));
        assert!(deck.iter().all(|i| !i.explanation.is_empty()));
    }
}
