// File: src/core/titla.rs
use crate::core::alphabet::{is_acceptable, is_word_char, LIGATURE_MARKER};
use log::{info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Provisional default relations: letters assumed to have a dedicated
/// letter-titlo glyph in the annotation font, shown as that single glyph when
/// preceded by `=`. The glyph slots are not confirmed against the font; load
/// the font's own relation table with `TitlaTable::from_json_file` instead.
const LETTER_TITLA: [(char, &str); 9] = [
    ('в', "b"),
    ('с', "c"),
    ('д', "d"),
    ('г', "g"),
    ('о', "?"),
    ('р', ">"),
    ('х', "+"),
    ('з', "5"),
    ('ч', "7"),
];

#[derive(Debug, Error)]
pub enum TitlaTableError {
    #[error("failed to read titla table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse titla table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("titla key {0:?} must be '=' followed by exactly one character")]
    MalformedKey(String),
}

/// Display expansions for `=`+letter sequences, keyed by the letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlaTable {
    relations: HashMap<char, String>,
}

impl Default for TitlaTable {
    fn default() -> Self {
        Self {
            relations: LETTER_TITLA
                .iter()
                .map(|&(letter, glyph)| (letter, glyph.to_string()))
                .collect(),
        }
    }
}

impl TitlaTable {
    pub fn empty() -> Self {
        Self { relations: HashMap::new() }
    }

    /// Reads a JSON object such as `{"=д": "d"}`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, TitlaTableError> {
        let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
        let mut relations = HashMap::with_capacity(raw.len());
        for (key, expansion) in raw {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next(), chars.next()) {
                (Some(LIGATURE_MARKER), Some(letter), None) => letter,
                _ => return Err(TitlaTableError::MalformedKey(key)),
            };
            if !is_acceptable(letter) || !is_word_char(letter) {
                warn!("Titla key {:?} can never match and will be ignored during display.", key);
            }
            relations.insert(letter, expansion);
        }
        Ok(Self { relations })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TitlaTableError> {
        let file = File::open(path)?;
        let table = Self::from_json_reader(BufReader::new(file))?;
        info!("Loaded {} titla relations from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn get(&self, letter: char) -> Option<&str> {
        self.relations.get(&letter).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Rewrites every `=`+word-character pair into its display glyph.
    ///
    /// Single left-to-right pass; pairs never overlap and expanded output is
    /// not scanned again. A pair whose letter is outside the alphabet, or has
    /// no relation, is copied through unchanged. Never fails.
    pub fn expand(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c != LIGATURE_MARKER {
                result.push(c);
                continue;
            }
            match chars.peek() {
                Some(&next) if is_word_char(next) => {
                    chars.next();
                    match self.get(next).filter(|_| is_acceptable(next)) {
                        Some(glyph) => result.push_str(glyph),
                        None => {
                            result.push(c);
                            result.push(next);
                        }
                    }
                }
                _ => result.push(c),
            }
        }

        result
    }
}

/// Display form of `text` with the built-in relations.
pub fn to_display(text: &str) -> String {
    TitlaTable::default().expand(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> TitlaTable {
        TitlaTable::from_json_reader(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_default_relations() {
        let t = TitlaTable::default();
        assert_eq!(t.len(), 9);
        assert_eq!(t.get('д'), Some("d"));
        assert_eq!(t.expand("=дн=ь"), "dн=ь");
        assert_eq!(to_display("=гдь"), "gдь");
    }

    #[test]
    fn test_unmapped_letter_passes_through() {
        assert_eq!(to_display("=а"), "=а");
        assert_eq!(to_display("x=_y"), "x=_y");
    }

    #[test]
    fn test_non_word_follower_passes_through() {
        assert_eq!(to_display("а= б"), "а= б");
        assert_eq!(to_display("="), "=");
        assert_eq!(to_display("а=.="), "а=.=");
    }

    #[test]
    fn test_follower_outside_alphabet_passes_through() {
        let t = table(r#"{"=ѣ": "E"}"#);
        assert_eq!(t.expand("=ѣ"), "=ѣ");
    }

    #[test]
    fn test_only_the_pair_is_substituted() {
        let t = table(r#"{"=b": "B"}"#);
        assert_eq!(t.expand("a=b c"), "aB c");
    }

    #[test]
    fn test_no_rescan_of_expansion() {
        let t = table(r#"{"=а": "=б", "=б": "Z"}"#);
        assert_eq!(t.expand("=а"), "=б");
        assert_eq!(t.expand("=а=б"), "=бZ");
    }

    #[test]
    fn test_pairs_do_not_overlap() {
        // '=' is not a word character, so scanning resumes on the second one
        let t = table(r#"{"=д": "D"}"#);
        assert_eq!(t.expand("==д"), "=D");
        assert_eq!(t.expand("=дд"), "Dд");
    }

    #[test]
    fn test_malformed_keys() {
        for json in [r#"{"д": "x"}"#, r#"{"=дд": "x"}"#, r#"{"": "x"}"#, r#"{"-д": "x"}"#] {
            assert!(matches!(
                TitlaTable::from_json_reader(json.as_bytes()),
                Err(TitlaTableError::MalformedKey(_))
            ));
        }
        assert!(matches!(
            TitlaTable::from_json_reader("not json".as_bytes()),
            Err(TitlaTableError::Json(_))
        ));
    }

    #[test]
    fn test_empty_table_is_identity() {
        let t = TitlaTable::empty();
        assert!(t.is_empty());
        assert_eq!(t.expand("=д=с"), "=д=с");
    }
}
