//! Tree-based intermediate representation for compiled chain scripts.

/// A compiled sequence of builder calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledCode {
    pub instructions: Vec<Instruction>,
}

/// One builder call with its raw arguments.
///
/// Argument shapes are checked when the instruction is executed, since
/// several operations accept more than one shape (`alt`, `alt 2`,
/// `alt (…) (…)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub op: Op,
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A decimal integer, e.g. `3`
    Number(u32),
    /// Delimited text, e.g. `/ab/` or `"ab"`
    Text(String),
    /// A parenthesised sub-script standing for a sub-expression
    Block(CompiledCode),
}

/// Opcode identifying a builder operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Literals and escapes
    Literal,
    Bell,
    Esc,
    Ff,
    Lf,
    Cr,
    Tab,
    Vtab,
    Backspace,
    Crlf,
    Control,
    Ansi,
    UnicodeChar,

    // Character classes
    Chars,
    NotChars,
    AnyChar,
    NotNewline,
    Digit,
    NotDigit,
    WordChar,
    NotWordChar,
    Whitespace,
    NotWhitespace,
    ExtendedUnicode,
    Unicode,
    NotUnicode,

    // Anchors
    StartOfString,
    EndOfString,
    EndOfStringIgnoreFinalBreak,
    StartOfLine,
    EndOfLine,
    WordLimit,
    NotWordLimit,
    Nothing,

    // Combinators
    Start,
    Alt,
    Group,
    Capture,
    Atomic,
    Backref,

    // Quantifiers
    Optional,
    AnyTimes,
    AtLeastOne,
    AtLeast,
    Between,
    Times,
    Greedy,
    Lazy,
    Possessive,

    // Assertions and conditionals
    Before,
    NotBefore,
    After,
    NotAfter,
    Match,
    Cond,
    NotCond,

    // Case
    CaseInsensitive,
    CaseSensitive,
}
