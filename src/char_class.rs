//! Escaping and character-class tables.
//!
//! Everything here is a pure lookup or formatting helper; the builder calls
//! into it and wraps the result in a fragment.

use crate::error::RegexError;

/// Characters that carry meaning outside a character class.
const RESERVED: &[char] = &['$', '(', ')', '*', '+', '.', '?', '[', '^', '{', '|', '\\'];

/// Characters escaped inside `[...]`.
const CLASS_RESERVED: &[char] = &['-', '.', '[', ']', '\\', '^'];

/// Escape every reserved character of `text` with a leading backslash.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// One member of a character-class specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassItem {
    Single(char),
    Range(char, char),
}

/// Split a class specification into single characters and `x..y` ranges.
pub fn parse_class_spec(spec: &str) -> Vec<ClassItem> {
    let chars: Vec<char> = spec.chars().collect();
    let mut items = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if i + 3 < chars.len() && chars[i + 1] == '.' && chars[i + 2] == '.' {
            items.push(ClassItem::Range(chars[i], chars[i + 3]));
            i += 4;
        } else {
            items.push(ClassItem::Single(chars[i]));
            i += 1;
        }
    }
    items
}

fn push_class_char(out: &mut String, ch: char) {
    if CLASS_RESERVED.contains(&ch) {
        out.push('\\');
    }
    out.push(ch);
}

/// Render a class specification as `[...]`, or `[^...]` when `negated`.
pub fn class(spec: &str, negated: bool) -> String {
    let mut out = String::from(if negated { "[^" } else { "[" });
    for item in parse_class_spec(spec) {
        match item {
            ClassItem::Single(ch) => push_class_char(&mut out, ch),
            ClassItem::Range(lo, hi) => {
                push_class_char(&mut out, lo);
                out.push('-');
                push_class_char(&mut out, hi);
            }
        }
    }
    out.push(']');
    out
}

/// The class matching one digit of `base`.
pub fn digit_class(base: u32, negated: bool) -> Result<String, RegexError> {
    let text = match (base, negated) {
        (10, false) => "\\d",
        (10, true) => "\\D",
        (2, false) => "[01]",
        (2, true) => "[^01]",
        (8, false) => "[0-7]",
        (8, true) => "[^0-7]",
        (16, false) => "[0-9a-fA-F]",
        (16, true) => "[^0-9a-fA-F]",
        (base, _) => return Err(RegexError::UnsupportedBase(base)),
    };
    Ok(text.to_string())
}

/// Non-printable characters with a dedicated escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonPrintable {
    Bell,
    Escape,
    FormFeed,
    LineFeed,
    CarriageReturn,
    Tab,
    VerticalTab,
    Backspace,
}

impl NonPrintable {
    pub fn snippet(self) -> &'static str {
        match self {
            Self::Bell => "\\a",
            Self::Escape => "\\e",
            Self::FormFeed => "\\f",
            Self::LineFeed => "\\n",
            Self::CarriageReturn => "\\r",
            Self::Tab => "\\t",
            Self::VerticalTab => "\\v",
            // `\b` outside a class is a word boundary
            Self::Backspace => "[\\b]",
        }
    }
}

/// `\cX` for the control character of `letter`.
pub fn control(letter: char) -> String {
    format!("\\c{}", letter.to_ascii_uppercase())
}

/// `\xHH` for an 8-bit code.
pub fn ansi(code: u8) -> String {
    format!("\\x{code:02X}")
}

/// `\x{H…}` for a Unicode code point.
pub fn unicode_char(code_point: u32) -> String {
    format!("\\x{{{code_point:X}}}")
}
