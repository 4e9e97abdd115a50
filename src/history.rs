// File: src/history.rs
use crate::core::types::Literal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Recently confirmed line annotations, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredLines")]
pub struct RecentLines {
    window_size: usize,
    lines: VecDeque<Literal>,
}

/// On-disk shape; the window and line count are not trusted until clamped.
#[derive(Deserialize)]
struct StoredLines {
    window_size: usize,
    lines: VecDeque<Literal>,
}

impl From<StoredLines> for RecentLines {
    fn from(stored: StoredLines) -> Self {
        let mut history = Self {
            window_size: stored.window_size,
            lines: stored.lines,
        };
        history.resize(stored.window_size);
        history
    }
}

impl RecentLines {
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            window_size,
            lines: VecDeque::with_capacity(window_size),
        }
    }

    /// Remembers a confirmed line. Empty annotations are skipped; a line
    /// that is already remembered moves to the back.
    pub fn record(&mut self, line: Literal) {
        if line.is_empty() {
            return;
        }
        if let Some(idx) = self.lines.iter().position(|l| *l == line) {
            self.lines.remove(idx);
        }
        while self.lines.len() >= self.window_size {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn latest(&self) -> Option<&Literal> {
        self.lines.back()
    }

    pub fn get(&self, index: usize) -> Option<&Literal> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Changes the window, dropping the oldest lines if it shrank.
    pub fn resize(&mut self, window_size: usize) {
        self.window_size = window_size.max(1);
        while self.lines.len() > self.window_size {
            self.lines.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Literal {
        s.parse().unwrap()
    }

    #[test]
    fn test_window_drops_oldest() {
        let mut history = RecentLines::new(2);
        history.record(lit("а"));
        history.record(lit("б"));
        history.record(lit("в"));
        let lines: Vec<&str> = history.iter().map(Literal::as_str).collect();
        assert_eq!(lines, vec!["б", "в"]);
        assert_eq!(history.latest(), Some(&lit("в")));
    }

    #[test]
    fn test_repeat_moves_to_back() {
        let mut history = RecentLines::new(3);
        history.record(lit("а"));
        history.record(lit("б"));
        history.record(lit("а"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0), Some(&lit("б")));
        assert_eq!(history.latest(), Some(&lit("а")));
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let mut history = RecentLines::new(3);
        history.record(Literal::empty());
        assert!(history.is_empty());
    }

    #[test]
    fn test_decoded_history_is_clamped() {
        let history: RecentLines =
            serde_json::from_str(r#"{"window_size": 0, "lines": ["а", "б", "в"]}"#).unwrap();
        assert_eq!(history.window_size(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&lit("в")));
    }

    #[test]
    fn test_zero_window_is_clamped_and_resize_trims() {
        let mut history = RecentLines::new(0);
        assert_eq!(history.window_size(), 1);
        history.resize(3);
        history.record(lit("а"));
        history.record(lit("б"));
        history.record(lit("в"));
        history.resize(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&lit("в")));
    }
}
