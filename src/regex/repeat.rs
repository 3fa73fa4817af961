//! Quantifiers and the greedy/lazy/possessive modifiers that retarget them.
//!
//! Chained forms quantify the top fragment; the `_of` forms quantify an
//! independently built expression and append the result.

use super::Regex;
use crate::fragment::{Fragment, Greediness, Quantifier, QuantifierState};

// Chained quantifiers
impl Regex {
    /// `?`
    pub fn optional(self) -> Self {
        self.quantify(Quantifier::Optional)
    }

    /// `*`
    pub fn any_times(self) -> Self {
        self.quantify(Quantifier::AnyTimes)
    }

    /// `+`
    pub fn at_least_one(self) -> Self {
        self.quantify(Quantifier::AtLeastOne)
    }

    /// `{n,}`
    pub fn at_least(self, n: u32) -> Self {
        self.quantify(Quantifier::at_least(n))
    }

    /// `{min,max}`
    pub fn between(self, min: u32, max: u32) -> Self {
        self.quantify(Quantifier::between(min, max))
    }

    /// `{n}`
    pub fn times(self, n: u32) -> Self {
        self.quantify(Quantifier::between(n, n))
    }

    fn quantify(mut self, quantifier: Quantifier) -> Self {
        let target = self.pop_or_empty();
        self.push_quantified(target, quantifier)
    }
}

// Quantifiers over sub-expressions
impl Regex {
    pub fn optional_of(self, expr: Regex) -> Self {
        self.quantify_expr(expr, Quantifier::Optional)
    }

    pub fn any_times_of(self, expr: Regex) -> Self {
        self.quantify_expr(expr, Quantifier::AnyTimes)
    }

    pub fn at_least_one_of(self, expr: Regex) -> Self {
        self.quantify_expr(expr, Quantifier::AtLeastOne)
    }

    pub fn at_least_of(self, n: u32, expr: Regex) -> Self {
        self.quantify_expr(expr, Quantifier::at_least(n))
    }

    pub fn between_of(self, min: u32, max: u32, expr: Regex) -> Self {
        self.quantify_expr(expr, Quantifier::between(min, max))
    }

    pub fn times_of(self, n: u32, expr: Regex) -> Self {
        self.quantify_expr(expr, Quantifier::between(n, n))
    }

    fn quantify_expr(mut self, expr: Regex, quantifier: Quantifier) -> Self {
        let target = self.absorb(expr);
        self.push_quantified(target, quantifier)
    }

    fn push_quantified(mut self, target: Fragment, quantifier: Quantifier) -> Self {
        self.quantifier_count += 1;
        let state = QuantifierState {
            greediness: self.default_greediness.unwrap_or_default(),
            locked: false,
            ambient: self.default_greediness.is_some(),
            serial: self.quantifier_count,
        };
        self.push(Fragment::quantified(target, quantifier, state))
    }
}

// Greediness modifiers
impl Regex {
    /// Make the pending quantifier greedy.
    pub fn greedy(self) -> Self {
        self.retarget(Greediness::Greedy)
    }

    /// Make the pending quantifier lazy: `*?`, `+?`, …
    pub fn lazy(self) -> Self {
        self.retarget(Greediness::Lazy)
    }

    /// Make the pending quantifier possessive: `*+`, `++`, …
    pub fn possessive(self) -> Self {
        self.retarget(Greediness::Possessive)
    }

    /// Lock the quantifier a modifier call refers to.
    ///
    /// A quantifier on top of the stack is targeted directly. Otherwise the
    /// most recently created quantifier that is still open (neither locked
    /// nor created under a chain-wide default) is targeted, wherever it was
    /// folded to. Before any quantifier exists the call sets the chain-wide
    /// default instead; in every other case it does nothing.
    fn retarget(mut self, greediness: Greediness) -> Self {
        if let Some(state) = self.stack.last_mut().and_then(Fragment::quantifier_state_mut)
            && !state.locked
        {
            state.lock(greediness);
            return self;
        }

        let latest = self
            .stack
            .iter()
            .filter_map(Fragment::latest_open_quantifier)
            .max();
        match latest {
            Some(serial) => {
                for fragment in &mut self.stack {
                    fragment.lock_quantifier(serial, greediness);
                }
            }
            None if self.quantifier_count == 0 => self.default_greediness = Some(greediness),
            None => {}
        }
        self
    }
}
