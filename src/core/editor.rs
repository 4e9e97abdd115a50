use crate::core::alphabet::first_unacceptable;
use crate::core::titla::TitlaTable;
use crate::core::types::{Literal, ValidationError};
use crate::core::validator::validate;
use log::debug;

/// What the annotator sees above the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Shown(String),
    /// The raw text holds a character the font cannot draw; nothing is shown
    /// until it is removed.
    Disabled { ch: char, position: usize },
}

/// One line-annotation editing session.
///
/// Raw text comes from typing (`set_text` replaces it wholesale) or from the
/// on-screen keyboard (`append` adds at the end). The preview is recomputed
/// after every edit; `confirm` is the only way to get a [`Literal`] out.
#[derive(Debug, Clone)]
pub struct LineEditor {
    titla: TitlaTable,
    text: String,
    preview: Preview,
}

impl LineEditor {
    pub fn new(titla: TitlaTable) -> Self {
        Self {
            titla,
            text: String::new(),
            preview: Preview::Shown(String::new()),
        }
    }

    /// Opens a session on a stored annotation. Stored values are shown
    /// expanded even when they would not pass today's checks.
    pub fn with_previous(titla: TitlaTable, previous: &str) -> Self {
        let preview = Preview::Shown(titla.expand(previous));
        Self {
            titla,
            text: previous.to_string(),
            preview,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn titla(&self) -> &TitlaTable {
        &self.titla
    }

    pub fn set_text(&mut self, text: &str) -> &Preview {
        self.text.clear();
        self.text.push_str(text);
        self.refresh()
    }

    pub fn append(&mut self, piece: &str) -> &Preview {
        self.text.push_str(piece);
        self.refresh()
    }

    pub fn backspace(&mut self) -> &Preview {
        self.text.pop();
        self.refresh()
    }

    pub fn clear(&mut self) -> &Preview {
        self.text.clear();
        self.refresh()
    }

    pub fn confirm(&self) -> Result<Literal, ValidationError> {
        validate(&self.text)
    }

    fn refresh(&mut self) -> &Preview {
        self.preview = match first_unacceptable(&self.text) {
            Some((position, ch)) => {
                debug!("Preview disabled by {:?} at {}", ch, position);
                Preview::Disabled { ch, position }
            }
            None => Preview::Shown(self.titla.expand(&self.text)),
        };
        &self.preview
    }
}
