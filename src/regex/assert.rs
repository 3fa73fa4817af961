//! Look-around assertions and conditionals.

use super::Regex;
use crate::error::Rejected;
use crate::fragment::{CondTest, Fragment, Lookaround};

// Look-around
impl Regex {
    /// The span since [`start`](Regex::start) must precede the current position: `(?<=…)`.
    pub fn before(self) -> Self {
        self.lookaround(Lookaround::Behind)
    }

    /// `(?<!…)`
    pub fn not_before(self) -> Self {
        self.lookaround(Lookaround::NotBehind)
    }

    /// The span since [`start`](Regex::start) must follow the current position: `(?=…)`.
    pub fn after(self) -> Self {
        self.lookaround(Lookaround::Ahead)
    }

    /// `(?!…)`
    pub fn not_after(self) -> Self {
        self.lookaround(Lookaround::NotAhead)
    }

    fn lookaround(mut self, kind: Lookaround) -> Self {
        let parts = self.take_scope();
        self.push(Fragment::lookaround(kind, Fragment::concatenation(parts)))
    }
}

// Conditionals
impl Regex {
    /// Test whether group `number` matched; alone it renders `(?(n)|(?!))`.
    pub fn match_group(self, number: usize) -> Self {
        self.push_condition(CondTest::Group(number))
    }

    /// Test whether the named group matched.
    pub fn match_named(self, name: &str) -> Result<Self, Rejected> {
        let resolved = self.resolve_name(name);
        let (regex, _) = self.check(resolved)?;
        Ok(regex.push_condition(CondTest::Named(name.to_string())))
    }

    /// `(?(test)then|else)` from the latest test and the fragments after it.
    pub fn cond(self) -> Self {
        self.conditional(false)
    }

    /// Like [`cond`](Regex::cond) with the branches swapped.
    pub fn not_cond(self) -> Self {
        self.conditional(true)
    }

    fn conditional(mut self, swap: bool) -> Self {
        let Some(test_at) = self.stack.iter().rposition(Fragment::is_condition_test) else {
            return self;
        };
        let mut branches = self.stack.split_off(test_at + 1);
        let Some(test) = self.stack.pop() else {
            return self;
        };
        self.clamp_scope_mark();

        let otherwise = if branches.len() >= 2 {
            branches.pop()
        } else {
            None
        };
        let then = Fragment::concatenation(branches);
        let otherwise = otherwise.unwrap_or_else(Fragment::empty);
        let (then, otherwise) = if swap { (otherwise, then) } else { (then, otherwise) };
        self.push(Fragment::conditional(test.into_condition_test(), then, otherwise))
    }
}
