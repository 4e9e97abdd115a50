// File: src/core/alphabet.rs
use std::collections::HashSet;
use std::sync::OnceLock;

/// Every character the annotation font can draw, punctuation included.
const ALL_LETTERS_SRC: &str = " !\"#$%'+,-.0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ\\^_`abcdefghijklmnopqrstuvwxyz{|}ЂЃѓ…†‡€‰Љ‹ЊЌЋЏђ‘’“”•™љ›њќћџЎўЈ¤Ґ¦§Ё©®Ї°±Ііґµё№єјЅѕїАБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдежзийклмнопрстуфхцчшщъыьэюя";

/// Letters that may carry a titlo.
const LETTERS_SRC: &str = "абвгдежзийклмнопрстуфхцчшщъыьэюяufimoptvwxzіµѕ ,.;:°";

/// Digits standing in for combining marks.
const DIACRITICAL_SIGNS_SRC: &str = "1268";

/// Titla glyphs of the font.
const TITLA_SRC: &str = "57+=>?bcdg";

/// Typed before a letter to put a titlo over it.
pub const LIGATURE_MARKER: char = '=';

fn build(src: &str) -> HashSet<char> {
    src.chars().collect()
}

pub fn all_letters() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| build(ALL_LETTERS_SRC))
}

pub fn letters() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| build(LETTERS_SRC))
}

pub fn diacritical_signs() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| build(DIACRITICAL_SIGNS_SRC))
}

pub fn titla() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| build(TITLA_SRC))
}

#[inline]
pub fn is_acceptable(c: char) -> bool {
    all_letters().contains(&c)
}

#[inline]
pub fn is_letter(c: char) -> bool {
    letters().contains(&c)
}

#[inline]
pub fn is_diacritical(c: char) -> bool {
    diacritical_signs().contains(&c)
}

#[inline]
pub fn is_titla(c: char) -> bool {
    titla().contains(&c)
}

/// A "word" character: letter, digit or underscore, Unicode-aware.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Finds the first character the font cannot draw.
/// Returns its char index together with the character.
pub fn first_unacceptable(text: &str) -> Option<(usize, char)> {
    text.chars().enumerate().find(|&(_, c)| !is_acceptable(c))
}
