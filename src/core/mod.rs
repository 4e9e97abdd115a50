// src/core/mod.rs

pub mod alphabet;
pub mod editor;
pub mod titla;
pub mod types;
pub mod validator;
