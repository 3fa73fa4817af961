//! Recursive descent compiler for chain scripts.
//!
//! Transforms a textual chain of builder calls into a tree-structured
//! [`CompiledCode`]. A script is a whitespace-separated sequence of
//! commands; `!` comments out the rest of a line.
//!
//! | Argument      | Meaning                                           |
//! |---------------|---------------------------------------------------|
//! | `3`           | Decimal number                                    |
//! | `"ab"`, `/ab/`| Text bounded by any punctuation except `(`, `)`, `!` |
//! | `( … )`       | Sub-script standing for a sub-expression          |

use itertools::Itertools;
use phf::{Map, phf_map};
use std::iter::Peekable;
use std::str::Chars;

use anyhow::{Result, bail};

use crate::code::*;

/// Compile a chain script into a [`CompiledCode`] tree.
pub fn compile(input: &str) -> Result<CompiledCode> {
    let mut compiler = Compiler {
        chars: input.chars().peekable(),
    };
    let code = compiler.compile_sequence()?;
    compiler.skip_whitespace_and_comments();
    if compiler.chars.peek().is_some() {
        bail!("Syntax error: unexpected characters after commands.");
    }
    Ok(code)
}

struct Compiler<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Compiler<'_> {
    /// Parse a sequence of commands until EOF or `)`.
    fn compile_sequence(&mut self) -> Result<CompiledCode> {
        let mut instructions = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            match self.chars.peek() {
                None | Some(')') => break,
                _ => instructions.push(self.compile_command()?),
            }
        }
        Ok(CompiledCode { instructions })
    }

    /// Parse one command: name, then any number of arguments.
    fn compile_command(&mut self) -> Result<Instruction> {
        let op = self.parse_command()?;
        let mut args = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            match self.chars.peek() {
                Some(&ch) if ch.is_ascii_digit() => args.push(Arg::Number(self.parse_number()?)),
                Some('(') => args.push(Arg::Block(self.compile_block()?)),
                Some(&ch) if is_text_delimiter(ch) => args.push(Arg::Text(self.parse_text()?)),
                _ => break,
            }
        }
        Ok(Instruction { op, args })
    }

    /// Parse a command name and look it up.
    fn parse_command(&mut self) -> Result<Op> {
        let name: String = self
            .chars
            .peeking_take_while(|&ch| ch.is_ascii_alphanumeric() || ch == '_')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        if name.is_empty() {
            match self.chars.peek() {
                Some(ch) => bail!("Syntax error: expected command name, found {ch:?}."),
                None => bail!("Syntax error: expected command name."),
            }
        }
        name_to_op(&name)
    }

    /// Parse `( … )`.
    fn compile_block(&mut self) -> Result<CompiledCode> {
        // Consume '('
        self.chars.next();
        let body = self.compile_sequence()?;
        match self.chars.next() {
            Some(')') => Ok(body),
            _ => bail!("Syntax error: unclosed parenthesis."),
        }
    }

    fn parse_number(&mut self) -> Result<u32> {
        let digits: String = self
            .chars
            .peeking_take_while(|ch| ch.is_ascii_digit())
            .collect();
        Ok(digits.parse::<u32>()?)
    }

    /// Parse a delimiter-bounded text argument.
    fn parse_text(&mut self) -> Result<String> {
        let Some(delim) = self.chars.next() else {
            bail!("Syntax error: expected text delimiter.");
        };
        let mut content = String::new();
        loop {
            match self.chars.next() {
                Some(c) if c == delim => return Ok(content),
                Some(c) => content.push(c),
                None => bail!("Syntax error: unclosed text parameter."),
            }
        }
    }

    /// Skip whitespace and `!`-to-end-of-line comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.chars.peek() {
                Some(&ch) if ch.is_whitespace() => {
                    self.chars.next();
                }
                Some(&'!') => {
                    for ch in self.chars.by_ref() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }
}

fn is_text_delimiter(ch: char) -> bool {
    ch.is_ascii_punctuation() && !matches!(ch, '(' | ')' | '!')
}

/// Map of command names to their opcodes.
/// Please keep names sorted alphabetically for readability.
const NAME_TO_OP_MAP: Map<&'static str, Op> = phf_map! {
    "after" => Op::After,
    "alt" => Op::Alt,
    "ansi" => Op::Ansi,
    "any_char" => Op::AnyChar,
    "any_times" => Op::AnyTimes,
    "at_least" => Op::AtLeast,
    "at_least_one" => Op::AtLeastOne,
    "atomic" => Op::Atomic,
    "backref" => Op::Backref,
    "backspace" => Op::Backspace,
    "before" => Op::Before,
    "bell" => Op::Bell,
    "between" => Op::Between,
    "capture" => Op::Capture,
    "case_insensitive" => Op::CaseInsensitive,
    "case_sensitive" => Op::CaseSensitive,
    "chars" => Op::Chars,
    "cond" => Op::Cond,
    "control" => Op::Control,
    "cr" => Op::Cr,
    "crlf" => Op::Crlf,
    "digit" => Op::Digit,
    "end_of_line" => Op::EndOfLine,
    "end_of_string" => Op::EndOfString,
    "end_of_string_ignore_final_break" => Op::EndOfStringIgnoreFinalBreak,
    "esc" => Op::Esc,
    "extended_unicode" => Op::ExtendedUnicode,
    "ff" => Op::Ff,
    "greedy" => Op::Greedy,
    "group" => Op::Group,
    "lazy" => Op::Lazy,
    "lf" => Op::Lf,
    "literal" => Op::Literal,
    "match" => Op::Match,
    "not_after" => Op::NotAfter,
    "not_before" => Op::NotBefore,
    "not_chars" => Op::NotChars,
    "not_cond" => Op::NotCond,
    "not_digit" => Op::NotDigit,
    "not_newline" => Op::NotNewline,
    "not_unicode" => Op::NotUnicode,
    "not_whitespace" => Op::NotWhitespace,
    "not_word_char" => Op::NotWordChar,
    "not_word_limit" => Op::NotWordLimit,
    "nothing" => Op::Nothing,
    "optional" => Op::Optional,
    "possessive" => Op::Possessive,
    "start" => Op::Start,
    "start_of_line" => Op::StartOfLine,
    "start_of_string" => Op::StartOfString,
    "tab" => Op::Tab,
    "times" => Op::Times,
    "unicode" => Op::Unicode,
    "unicode_char" => Op::UnicodeChar,
    "vtab" => Op::Vtab,
    "whitespace" => Op::Whitespace,
    "word_char" => Op::WordChar,
    "word_limit" => Op::WordLimit,
};

/// Map a command name to its opcode.
fn name_to_op(name: &str) -> Result<Op> {
    NAME_TO_OP_MAP
        .get(name)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Syntax error: unknown command '{}'.", name))
}
