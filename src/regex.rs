//! The [`Regex`] builder: a stack of fragments driven by chained calls.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Rejected, RegexError};
use crate::fragment::{BackRef, CaseMode, Capture, CondTest, Fragment, Greediness, Node};

mod assert;
mod case;
mod chars;
mod group;
mod repeat;

/// A pattern under construction.
///
/// Every call consumes the builder and returns it, so a pattern reads as one
/// chain. Fallible calls return `Result<Regex, Rejected>`; the error hands
/// the builder back unchanged.
#[derive(Debug, Clone, Default)]
pub struct Regex {
    /// Fragments in creation order; only the tail is ever popped.
    stack: Vec<Fragment>,
    /// Start of the span that span-consuming calls use by default.
    scope_mark: Option<usize>,
    /// Case scope covering the whole builder, set by a case call on an empty stack.
    case_mode: Option<CaseMode>,
    capture_count: usize,
    capture_names: HashMap<String, usize>,
    /// Set by a greediness call made before any quantifier existed.
    default_greediness: Option<Greediness>,
    quantifier_count: usize,
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clone().into_fragment().content())
    }
}

// Constructors and inspection
impl Regex {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.stack
    }

    /// Number of capturing groups created so far.
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// The number assigned to the capture called `name`.
    pub fn capture_number(&self, name: &str) -> Option<usize> {
        self.capture_names.get(name).copied()
    }

    /// Mark the current end of the stack as the start of the default span.
    pub fn start(mut self) -> Self {
        self.scope_mark = Some(self.stack.len());
        self
    }
}

// Serialization
impl Regex {
    /// `/pattern/m`
    pub fn to_regex(&self) -> String {
        self.delimited('/', "m")
    }

    /// The pattern between `delimiter`s, with the multiline modifier.
    ///
    /// Alphanumeric, backslash and whitespace delimiters are rejected:
    /// escaping them would turn literals into escape sequences.
    pub fn to_regex_with(&self, delimiter: char) -> Result<String, RegexError> {
        check_delimiter(delimiter)?;
        Ok(self.delimited(delimiter, "m"))
    }

    /// `/pattern/muS`
    pub fn to_utf8_regex(&self) -> String {
        self.delimited('/', "muS")
    }

    pub fn to_utf8_regex_with(&self, delimiter: char) -> Result<String, RegexError> {
        check_delimiter(delimiter)?;
        Ok(self.delimited(delimiter, "muS"))
    }

    fn delimited(&self, delimiter: char, modifiers: &str) -> String {
        let body = escape_delimiter(&self.to_string(), delimiter);
        format!("{delimiter}{body}{delimiter}{modifiers}")
    }
}

fn check_delimiter(delimiter: char) -> Result<(), RegexError> {
    if delimiter.is_alphanumeric() || delimiter == '\\' || delimiter.is_whitespace() {
        return Err(RegexError::InvalidDelimiter(delimiter));
    }
    Ok(())
}

/// Escape unescaped occurrences of `delimiter`.
fn escape_delimiter(body: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            out.push(ch);
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            if ch == delimiter {
                out.push('\\');
            }
            out.push(ch);
        }
    }
    out
}

// Stack plumbing shared by the operation modules
impl Regex {
    fn push(mut self, fragment: Fragment) -> Self {
        self.stack.push(fragment);
        self
    }

    /// Pop every fragment since the scope mark (or the whole stack) and clear the mark.
    fn take_scope(&mut self) -> Vec<Fragment> {
        let from = self.scope_mark.take().unwrap_or(0).min(self.stack.len());
        self.stack.split_off(from)
    }

    /// Pop the last `count` fragments, or as many as there are.
    fn take_last(&mut self, count: usize) -> Vec<Fragment> {
        let from = self.stack.len().saturating_sub(count);
        let taken = self.stack.split_off(from);
        self.clamp_scope_mark();
        taken
    }

    fn pop_or_empty(&mut self) -> Fragment {
        let top = self.stack.pop().unwrap_or_else(Fragment::empty);
        self.clamp_scope_mark();
        top
    }

    fn clamp_scope_mark(&mut self) {
        if let Some(mark) = self.scope_mark
            && mark > self.stack.len()
        {
            self.scope_mark = Some(self.stack.len());
        }
    }

    /// Fold the whole builder into one fragment.
    fn into_fragment(self) -> Fragment {
        let fragment = Fragment::concatenation(self.stack);
        match self.case_mode {
            Some(mode) => fragment.scoped(mode),
            None => fragment,
        }
    }

    /// Fold an independently built sub-expression into one fragment owned by
    /// this builder, merging its capture registry and quantifier serials.
    /// A capture name the host already uses is re-pointed at the absorbed
    /// capture; keeping names unique across sub-expressions is up to the caller.
    fn absorb(&mut self, expr: Regex) -> Fragment {
        let capture_offset = self.capture_count;
        let serial_offset = self.quantifier_count;
        self.capture_count += expr.capture_count;
        self.quantifier_count += expr.quantifier_count;
        for (name, number) in &expr.capture_names {
            self.capture_names.insert(name.clone(), number + capture_offset);
        }

        let mut fragment = expr.into_fragment();
        fragment.walk_mut(&mut |node| match node {
            Node::Group {
                capture: Capture::Numbered(number) | Capture::Named { number, .. },
                ..
            } => *number += capture_offset,
            Node::Quantified { state, .. } => state.serial += serial_offset,
            _ => {}
        });
        fragment
    }

    /// Register a new capture, returning the parentheses it renders with.
    fn next_capture(&mut self, name: Option<&str>) -> Capture {
        self.capture_count += 1;
        let number = self.capture_count;
        match name {
            Some(name) => {
                self.capture_names.insert(name.to_string(), number);
                Capture::Named {
                    number,
                    name: name.to_string(),
                }
            }
            None => Capture::Numbered(number),
        }
    }

    fn resolve_name(&self, name: &str) -> Result<usize, RegexError> {
        self.capture_number(name)
            .ok_or_else(|| RegexError::UnknownCaptureName(name.to_string()))
    }

    /// Attach the builder to the outcome of a fallible lookup, handing it
    /// back inside the error on failure.
    fn check<T>(self, result: Result<T, RegexError>) -> Result<(Self, T), Rejected> {
        match result {
            Ok(value) => Ok((self, value)),
            Err(error) => Err(Rejected::new(self, error)),
        }
    }

    fn push_backreference(self, target: BackRef) -> Self {
        self.push(Fragment::backreference(target))
    }

    fn push_condition(self, test: CondTest) -> Self {
        self.push(Fragment::condition(test))
    }
}
