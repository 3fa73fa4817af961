//! A fluent builder for PCRE-style regular expressions.
//!
//! Each call pushes a fragment onto a stack or combines fragments already on
//! it; precedence is handled for you, so a quantifier always binds to the
//! whole of the fragment it follows.
//!
//! # Example
//!
//! ```rust
//! use regex_chain::Regex;
//!
//! let pattern = Regex::new()
//!     .literal("a")
//!     .literal("b")
//!     .literal("c")
//!     .alt_last(2)
//!     .capture()
//!     .literal("d")
//!     .backref(1);
//!
//! assert_eq!(pattern.to_string(), "a(b|c)d\\g{1}");
//! assert_eq!(pattern.to_regex(), "/a(b|c)d\\g{1}/m");
//! ```
//!
//! The same chain can be written as a script and run through the compiler:
//!
//! ```rust
//! use regex_chain::{compile, execute};
//!
//! let code = compile("literal 'ab' any_times lazy").unwrap();
//! assert_eq!(execute(&code).unwrap().to_string(), "(?:ab)*?");
//! ```

mod char_class;
pub mod code;
pub mod compiler;
mod error;
pub mod fragment;
pub mod interpreter;
mod regex;
mod unicode;

pub use code::CompiledCode;
pub use compiler::compile;
pub use error::{Rejected, RegexError};
pub use fragment::{
    CaseMode, Capture, Fragment, Greediness, Kind, Lookaround, Quantifier, QuantifierState,
};
pub use interpreter::execute;
pub use regex::Regex;
pub use unicode::Unicode;
