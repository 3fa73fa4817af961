//! Leaf fragments: literals, escapes, character classes and anchors.

use super::Regex;
use crate::char_class::{self, NonPrintable};
use crate::error::Rejected;
use crate::fragment::Fragment;
use crate::unicode::Unicode;

// Literals and escaped characters
impl Regex {
    /// Match `text` exactly; reserved characters are escaped.
    pub fn literal(self, text: &str) -> Self {
        self.push(Fragment::literal(text))
    }

    fn non_printable(self, ch: NonPrintable) -> Self {
        match ch {
            NonPrintable::Backspace => self.push(Fragment::class(ch.snippet())),
            _ => self.push(Fragment::atom(ch.snippet())),
        }
    }

    pub fn bell(self) -> Self {
        self.non_printable(NonPrintable::Bell)
    }

    pub fn esc(self) -> Self {
        self.non_printable(NonPrintable::Escape)
    }

    pub fn ff(self) -> Self {
        self.non_printable(NonPrintable::FormFeed)
    }

    pub fn lf(self) -> Self {
        self.non_printable(NonPrintable::LineFeed)
    }

    pub fn cr(self) -> Self {
        self.non_printable(NonPrintable::CarriageReturn)
    }

    pub fn tab(self) -> Self {
        self.non_printable(NonPrintable::Tab)
    }

    pub fn vtab(self) -> Self {
        self.non_printable(NonPrintable::VerticalTab)
    }

    pub fn backspace(self) -> Self {
        self.non_printable(NonPrintable::Backspace)
    }

    /// `\r\n` as a single two-atom fragment.
    pub fn crlf(self) -> Self {
        self.push(Fragment::concatenation(vec![
            Fragment::atom(NonPrintable::CarriageReturn.snippet()),
            Fragment::atom(NonPrintable::LineFeed.snippet()),
        ]))
    }

    /// The control character of `letter`, e.g. `\cG` for `'g'`.
    pub fn control(self, letter: char) -> Self {
        self.push(Fragment::atom(char_class::control(letter)))
    }

    pub fn ansi(self, code: u8) -> Self {
        self.push(Fragment::atom(char_class::ansi(code)))
    }

    pub fn unicode_char(self, code_point: u32) -> Self {
        self.push(Fragment::atom(char_class::unicode_char(code_point)))
    }
}

// Character classes
impl Regex {
    /// One character of `spec`; `x..y` denotes an inclusive range.
    pub fn chars(self, spec: &str) -> Self {
        self.push(Fragment::class(char_class::class(spec, false)))
    }

    /// One character not in `spec`.
    pub fn not_chars(self, spec: &str) -> Self {
        self.push(Fragment::class(char_class::class(spec, true)))
    }

    /// Any character, newlines included.
    pub fn any_char(self) -> Self {
        self.push(Fragment::class("(?s:.)"))
    }

    pub fn not_newline(self) -> Self {
        self.push(Fragment::class("."))
    }

    pub fn digit(self) -> Self {
        self.push(Fragment::class("\\d"))
    }

    pub fn not_digit(self) -> Self {
        self.push(Fragment::class("\\D"))
    }

    /// One digit of `base` (2, 8, 10 or 16).
    pub fn digit_in_base(self, base: u32) -> Result<Self, Rejected> {
        let (regex, class) = self.check(char_class::digit_class(base, false))?;
        Ok(regex.push(Fragment::class(class)))
    }

    pub fn not_digit_in_base(self, base: u32) -> Result<Self, Rejected> {
        let (regex, class) = self.check(char_class::digit_class(base, true))?;
        Ok(regex.push(Fragment::class(class)))
    }

    pub fn word_char(self) -> Self {
        self.push(Fragment::class("\\w"))
    }

    pub fn not_word_char(self) -> Self {
        self.push(Fragment::class("\\W"))
    }

    pub fn whitespace(self) -> Self {
        self.push(Fragment::class("\\s"))
    }

    pub fn not_whitespace(self) -> Self {
        self.push(Fragment::class("\\S"))
    }

    /// One extended grapheme cluster.
    pub fn extended_unicode(self) -> Self {
        self.push(Fragment::class("\\X"))
    }

    pub fn unicode(self, property: Unicode) -> Self {
        self.push(Fragment::class(property.escape(false)))
    }

    pub fn not_unicode(self, property: Unicode) -> Self {
        self.push(Fragment::class(property.escape(true)))
    }
}

// Anchors
impl Regex {
    pub fn start_of_string(self) -> Self {
        self.push(Fragment::anchor("\\A"))
    }

    pub fn end_of_string(self) -> Self {
        self.push(Fragment::anchor("\\z"))
    }

    /// End of string, or before a final line break.
    pub fn end_of_string_ignore_final_break(self) -> Self {
        self.push(Fragment::anchor("\\Z"))
    }

    pub fn start_of_line(self) -> Self {
        self.push(Fragment::anchor("^"))
    }

    pub fn end_of_line(self) -> Self {
        self.push(Fragment::anchor("$"))
    }

    pub fn word_limit(self) -> Self {
        self.push(Fragment::anchor("\\b"))
    }

    pub fn not_word_limit(self) -> Self {
        self.push(Fragment::anchor("\\B"))
    }

    /// The empty pattern.
    pub fn nothing(self) -> Self {
        self.push(Fragment::empty())
    }
}
