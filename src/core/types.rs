// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::validator::validate;

/// A line annotation that passed the grammar checks.
/// The text is kept exactly as entered; no normalization happens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Literal(String);

impl Literal {
    /// The "no annotation" value.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Only the validator builds literals from raw text.
    pub(crate) fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Literal {
    type Error = ValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        validate(&text)?;
        Ok(Self(text))
    }
}

impl FromStr for Literal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> Self {
        literal.0
    }
}

impl AsRef<str> for Literal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a raw annotation string was rejected.
/// Positions are char indices into the rejected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("character {ch:?} at position {position} is not in the alphabet")]
    InvalidCharacter { ch: char, position: usize },
    #[error("line starts with diacritical sign {ch:?}")]
    LeadingDiacritical { ch: char },
    #[error("line ends with a titlo marker and no letter")]
    TrailingLigatureMarker,
    #[error("two diacritical signs in a row at position {position}")]
    ConsecutiveDiacriticals { position: usize },
    #[error("titlo marker at position {position} is not followed by a letter")]
    LigatureMissingLetter { position: usize },
}

impl ValidationError {
    /// Prompt shown to the annotator in the editor UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "Введён некорректный символ!",
            Self::LeadingDiacritical { .. } => {
                "Диакритический знак не может быть в начале строки!"
            }
            Self::TrailingLigatureMarker => "Титло не может быть в конце строки без буквы!",
            Self::ConsecutiveDiacriticals { .. } => {
                "В строке не могут подряд идти 2 диакритических знака!"
            }
            Self::LigatureMissingLetter { .. } => "После титла обязана идти буква!",
        }
    }
}
