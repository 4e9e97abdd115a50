use crate::core::titla::{TitlaTable, TitlaTableError};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line arguments for the line annotation editor.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File holding recently confirmed lines
    #[arg(long = "history", default_value = "line_history.bin")]
    pub history: PathBuf,

    /// JSON table overriding the built-in titla relations, e.g. {"=д": "d"}
    #[arg(long = "titla")]
    pub titla: Option<PathBuf>,

    /// How many confirmed lines to remember
    #[arg(long = "window", default_value_t = 10, value_parser = validate_window)]
    pub window: usize,

    /// Stored annotation to open for re-editing
    #[arg(long = "previous")]
    pub previous: Option<String>,
}

impl Args {
    /// The override table when one is given, the built-in relations otherwise.
    pub fn titla_table(&self) -> Result<TitlaTable, TitlaTableError> {
        match &self.titla {
            Some(path) => TitlaTable::from_json_file(path),
            None => Ok(TitlaTable::default()),
        }
    }
}

// The window must hold at least one line
fn validate_window(s: &str) -> Result<usize, String> {
    match usize::from_str(s) {
        Ok(val) if val >= 1 => Ok(val),
        _ => Err("WINDOW must be a whole number of at least 1".to_string()),
    }
}
