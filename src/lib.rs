// src/lib.rs

pub mod config;
pub mod core;
pub mod history;
pub mod persistence;

pub use crate::core::editor::{LineEditor, Preview};
pub use crate::core::titla::{to_display, TitlaTable};
pub use crate::core::types::{Literal, ValidationError};
pub use crate::core::validator::{is_valid, validate};
pub use crate::history::RecentLines;
