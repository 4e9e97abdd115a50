// File: src/core/validator.rs
use crate::core::alphabet::{first_unacceptable, is_diacritical, is_letter, LIGATURE_MARKER};
use crate::core::types::{Literal, ValidationError};
use log::debug;

/// Checks a raw line annotation and wraps it as a [`Literal`].
///
/// The checks run in a fixed order and the first failure wins:
/// alphabet membership, leading diacritical sign, trailing titlo marker,
/// then a left-to-right pass over adjacent pairs (two diacriticals in a row,
/// or a marker not followed by a letter). The empty string is always valid.
pub fn validate(text: &str) -> Result<Literal, ValidationError> {
    check(text).map(|()| Literal::new_unchecked(text.to_string())).map_err(|err| {
        debug!("Rejected annotation {:?}: {}", text, err);
        err
    })
}

pub fn is_valid(text: &str) -> bool {
    check(text).is_ok()
}

fn check(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Ok(());
    }

    if let Some((position, ch)) = first_unacceptable(text) {
        return Err(ValidationError::InvalidCharacter { ch, position });
    }

    let chars: Vec<char> = text.chars().collect();

    if is_diacritical(chars[0]) {
        return Err(ValidationError::LeadingDiacritical { ch: chars[0] });
    }
    if chars[chars.len() - 1] == LIGATURE_MARKER {
        return Err(ValidationError::TrailingLigatureMarker);
    }

    for (position, pair) in chars.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        if is_diacritical(current) && is_diacritical(next) {
            return Err(ValidationError::ConsecutiveDiacriticals { position });
        }
        if current == LIGATURE_MARKER && !is_letter(next) {
            return Err(ValidationError::LigatureMissingLetter { position });
        }
    }

    Ok(())
}
