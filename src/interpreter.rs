//! Execution engine for compiled chain scripts.
//!
//! Each instruction is replayed as one builder call on a fresh [`Regex`];
//! block arguments are executed recursively into sub-expressions. Argument
//! shapes are validated here, per opcode.

use anyhow::{Result, bail};

use crate::{Regex, RegexError};
use crate::code::*;
use crate::unicode::Unicode;

/// Execute compiled code, returning the built expression. Top-level entry point.
pub fn execute(code: &CompiledCode) -> Result<Regex> {
    code.instructions
        .iter()
        .try_fold(Regex::new(), execute_instruction)
}

/// Apply a single instruction to `regex`.
fn execute_instruction(regex: Regex, instr: &Instruction) -> Result<Regex> {
    use Arg::{Number, Text};

    let regex = match (instr.op, instr.args.as_slice()) {
        (Op::Literal, [Text(text)]) => regex.literal(text),
        (Op::Bell, []) => regex.bell(),
        (Op::Esc, []) => regex.esc(),
        (Op::Ff, []) => regex.ff(),
        (Op::Lf, []) => regex.lf(),
        (Op::Cr, []) => regex.cr(),
        (Op::Tab, []) => regex.tab(),
        (Op::Vtab, []) => regex.vtab(),
        (Op::Backspace, []) => regex.backspace(),
        (Op::Crlf, []) => regex.crlf(),
        (Op::Control, [Text(text)]) => regex.control(single_char(text)?),
        (Op::Ansi, [Number(code)]) => regex.ansi(u8::try_from(*code)?),
        (Op::UnicodeChar, [Number(code_point)]) => regex.unicode_char(*code_point),

        (Op::Chars, [Text(spec)]) => regex.chars(spec),
        (Op::NotChars, [Text(spec)]) => regex.not_chars(spec),
        (Op::AnyChar, []) => regex.any_char(),
        (Op::NotNewline, []) => regex.not_newline(),
        (Op::Digit, []) => regex.digit(),
        (Op::Digit, [Number(base)]) => regex.digit_in_base(*base).map_err(RegexError::from)?,
        (Op::NotDigit, []) => regex.not_digit(),
        (Op::NotDigit, [Number(base)]) => regex.not_digit_in_base(*base).map_err(RegexError::from)?,
        (Op::WordChar, []) => regex.word_char(),
        (Op::NotWordChar, []) => regex.not_word_char(),
        (Op::Whitespace, []) => regex.whitespace(),
        (Op::NotWhitespace, []) => regex.not_whitespace(),
        (Op::ExtendedUnicode, []) => regex.extended_unicode(),
        (Op::Unicode, [Text(name)]) => regex.unicode(property(name)?),
        (Op::NotUnicode, [Text(name)]) => regex.not_unicode(property(name)?),

        (Op::StartOfString, []) => regex.start_of_string(),
        (Op::EndOfString, []) => regex.end_of_string(),
        (Op::EndOfStringIgnoreFinalBreak, []) => regex.end_of_string_ignore_final_break(),
        (Op::StartOfLine, []) => regex.start_of_line(),
        (Op::EndOfLine, []) => regex.end_of_line(),
        (Op::WordLimit, []) => regex.word_limit(),
        (Op::NotWordLimit, []) => regex.not_word_limit(),
        (Op::Nothing, []) => regex.nothing(),

        (Op::Start, []) => regex.start(),
        (Op::Alt, []) => regex.alt(),
        (Op::Alt, [Number(count)]) => regex.alt_last(*count as usize),
        (Op::Alt, blocks) if !blocks.is_empty() => regex.alt_of(sub_expressions(blocks)?),
        (Op::Group, []) => regex.group(),
        (Op::Group, [Number(count)]) => regex.group_last(*count as usize),
        (Op::Group, [block]) => regex.group_of(sub_expression(block)?),
        (Op::Capture, []) => regex.capture(),
        (Op::Capture, [Text(name)]) => regex.capture_named(name).map_err(RegexError::from)?,
        (Op::Atomic, []) => regex.atomic(),
        (Op::Backref, [Number(number)]) => regex.backref(*number as usize),
        (Op::Backref, [Text(name)]) => regex.named_backref(name).map_err(RegexError::from)?,

        (Op::Optional, []) => regex.optional(),
        (Op::Optional, [block]) => regex.optional_of(sub_expression(block)?),
        (Op::AnyTimes, []) => regex.any_times(),
        (Op::AnyTimes, [block]) => regex.any_times_of(sub_expression(block)?),
        (Op::AtLeastOne, []) => regex.at_least_one(),
        (Op::AtLeastOne, [block]) => regex.at_least_one_of(sub_expression(block)?),
        (Op::AtLeast, [Number(n)]) => regex.at_least(*n),
        (Op::AtLeast, [Number(n), block]) => regex.at_least_of(*n, sub_expression(block)?),
        (Op::Between, [Number(min), Number(max)]) => regex.between(*min, *max),
        (Op::Between, [Number(min), Number(max), block]) => {
            regex.between_of(*min, *max, sub_expression(block)?)
        }
        (Op::Times, [Number(n)]) => regex.times(*n),
        (Op::Times, [Number(n), block]) => regex.times_of(*n, sub_expression(block)?),
        (Op::Greedy, []) => regex.greedy(),
        (Op::Lazy, []) => regex.lazy(),
        (Op::Possessive, []) => regex.possessive(),

        (Op::Before, []) => regex.before(),
        (Op::NotBefore, []) => regex.not_before(),
        (Op::After, []) => regex.after(),
        (Op::NotAfter, []) => regex.not_after(),
        (Op::Match, [Number(number)]) => regex.match_group(*number as usize),
        (Op::Match, [Text(name)]) => regex.match_named(name).map_err(RegexError::from)?,
        (Op::Cond, []) => regex.cond(),
        (Op::NotCond, []) => regex.not_cond(),

        (Op::CaseInsensitive, []) => regex.case_insensitive(),
        (Op::CaseInsensitive, [Number(enabled)]) => regex.set_case_insensitive(*enabled != 0),
        (Op::CaseSensitive, []) => regex.case_sensitive(),
        (Op::CaseSensitive, [Number(enabled)]) => regex.set_case_sensitive(*enabled != 0),

        (op, _) => bail!("Syntax error: invalid arguments for {op:?}."),
    };
    Ok(regex)
}

/// Execute a block argument into a sub-expression.
fn sub_expression(arg: &Arg) -> Result<Regex> {
    match arg {
        Arg::Block(code) => execute(code),
        _ => bail!("Syntax error: expected a parenthesised sub-expression."),
    }
}

fn sub_expressions(args: &[Arg]) -> Result<Vec<Regex>> {
    args.iter().map(sub_expression).collect()
}

fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("Syntax error: expected a single character, found {text:?}."),
    }
}

fn property(name: &str) -> Result<Unicode> {
    Unicode::from_name(name).ok_or_else(|| anyhow::anyhow!("Unknown Unicode property {name:?}."))
}
