//! Alternation, grouping, captures and backreferences.

use super::Regex;
use crate::error::{Rejected, RegexError};
use crate::fragment::{BackRef, Capture, Fragment};

// Alternation
impl Regex {
    /// Alternate every fragment since [`start`](Regex::start), or the whole stack.
    pub fn alt(mut self) -> Self {
        let parts = self.take_scope();
        self.push_alternation(parts)
    }

    /// Alternate the last `count` fragments.
    pub fn alt_last(mut self, count: usize) -> Self {
        let parts = self.take_last(count);
        self.push_alternation(parts)
    }

    /// Alternate independently built expressions.
    pub fn alt_of(mut self, exprs: impl IntoIterator<Item = Regex>) -> Self {
        let parts = exprs.into_iter().map(|expr| self.absorb(expr)).collect();
        self.push_alternation(parts)
    }

    /// An alternation that will sit next to other content is wrapped at once;
    /// one that is the whole stack stays bare until something else needs it wrapped.
    fn push_alternation(self, parts: Vec<Fragment>) -> Self {
        let alternation = Fragment::alternation(parts);
        if !self.stack.is_empty() && alternation.needs_wrap_for_concatenation() {
            return self.push(Fragment::group(Capture::NonCapturing, alternation));
        }
        self.push(alternation)
    }
}

// Grouping
impl Regex {
    /// Fold every fragment since [`start`](Regex::start), or the whole stack,
    /// into one unit for the next call.
    pub fn group(mut self) -> Self {
        let parts = self.take_scope();
        self.push(Fragment::concatenation(parts))
    }

    /// Fold the last `count` fragments into one unit.
    pub fn group_last(mut self, count: usize) -> Self {
        let parts = self.take_last(count);
        self.push(Fragment::concatenation(parts))
    }

    /// Append an independently built expression as one unit.
    pub fn group_of(mut self, expr: Regex) -> Self {
        let fragment = self.absorb(expr);
        self.push(fragment)
    }

    /// Make the top fragment atomic: `(?>…)`.
    pub fn atomic(mut self) -> Self {
        let top = self.pop_or_empty();
        self.push(top.regroup(Capture::Atomic))
    }
}

// Captures and backreferences
impl Regex {
    /// Capture the top fragment as the next numbered group.
    pub fn capture(mut self) -> Self {
        let capture = self.next_capture(None);
        let top = self.pop_or_empty();
        self.push(top.regroup(capture))
    }

    /// Capture the top fragment as a named group, `(?P<name>…)`.
    ///
    /// Names must be unique within the builder.
    pub fn capture_named(mut self, name: &str) -> Result<Self, Rejected> {
        if self.capture_names.contains_key(name) {
            let error = RegexError::DuplicateCaptureName(name.to_string());
            return Err(Rejected::new(self, error));
        }
        let capture = self.next_capture(Some(name));
        let top = self.pop_or_empty();
        Ok(self.push(top.regroup(capture)))
    }

    /// `\g{number}`
    pub fn backref(self, number: usize) -> Self {
        self.push_backreference(BackRef::Number(number))
    }

    /// `(?P=name)` for a capture declared earlier in the chain.
    pub fn named_backref(self, name: &str) -> Result<Self, Rejected> {
        let resolved = self.resolve_name(name);
        let (regex, _) = self.check(resolved)?;
        Ok(regex.push_backreference(BackRef::Name(name.to_string())))
    }
}
