//! Fragment types: the syntactic pieces a [`Regex`](crate::Regex) accumulates.
//!
//! A fragment is a small tree. Its text is rendered on demand, and the
//! precedence helpers ([`Fragment::needs_wrap_for_suffix`],
//! [`Fragment::needs_wrap_for_concatenation`]) decide where non-capturing
//! parentheses are needed when fragments are combined.

use itertools::Itertools;

use crate::char_class::escape_literal;

/// The syntactic category of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Literal,
    CharClass,
    Anchor,
    Assertion,
    Group,
    Alternation,
    Concatenation,
    Quantified,
    Conditional,
    Backreference,
    Empty,
}

/// What kind of parentheses a group fragment carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// `(?:…)`
    NonCapturing,
    /// `(?>…)`
    Atomic,
    /// `(…)`
    Numbered(usize),
    /// `(?P<name>…)`
    Named { number: usize, name: String },
}

impl Capture {
    fn opener(&self) -> String {
        match self {
            Self::NonCapturing => "(?:".to_string(),
            Self::Atomic => "(?>".to_string(),
            Self::Numbered(_) => "(".to_string(),
            Self::Named { name, .. } => format!("(?P<{name}>"),
        }
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Numbered(_) | Self::Named { .. })
    }
}

/// Zero-width look-around direction and polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookaround {
    /// `(?<=…)`
    Behind,
    /// `(?<!…)`
    NotBehind,
    /// `(?=…)`
    Ahead,
    /// `(?!…)`
    NotAhead,
}

impl Lookaround {
    fn opener(self) -> &'static str {
        match self {
            Self::Behind => "(?<=",
            Self::NotBehind => "(?<!",
            Self::Ahead => "(?=",
            Self::NotAhead => "(?!",
        }
    }
}

/// A repetition suffix, already normalised to its shortest spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Optional,
    AnyTimes,
    AtLeastOne,
    AtLeast(u32),
    Between(u32, u32),
    Times(u32),
}

impl Quantifier {
    /// `{n,}`, with `n = 0` and `n = 1` collapsing to `*` and `+`.
    pub fn at_least(n: u32) -> Self {
        match n {
            0 => Self::AnyTimes,
            1 => Self::AtLeastOne,
            n => Self::AtLeast(n),
        }
    }

    /// `{m,n}`, with `{0,1}` collapsing to `?` and `{k,k}` to `{k}`.
    /// Reversed bounds are swapped.
    pub fn between(min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        match (min, max) {
            (0, 1) => Self::Optional,
            (min, max) if min == max => Self::Times(min),
            (min, max) => Self::Between(min, max),
        }
    }

    pub fn suffix(&self) -> String {
        match self {
            Self::Optional => "?".to_string(),
            Self::AnyTimes => "*".to_string(),
            Self::AtLeastOne => "+".to_string(),
            Self::AtLeast(n) => format!("{{{n},}}"),
            Self::Between(min, max) => format!("{{{min},{max}}}"),
            Self::Times(n) => format!("{{{n}}}"),
        }
    }
}

/// How a quantifier consumes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Greediness {
    #[default]
    Greedy,
    Lazy,
    Possessive,
}

impl Greediness {
    fn suffix(self) -> &'static str {
        match self {
            Self::Greedy => "",
            Self::Lazy => "?",
            Self::Possessive => "+",
        }
    }
}

/// Retargeting state attached to every quantified fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantifierState {
    pub greediness: Greediness,
    /// Set once an explicit greedy/lazy/possessive call has targeted this quantifier.
    pub locked: bool,
    /// The greediness came from a chain-wide default rather than an explicit call.
    pub ambient: bool,
    /// Creation order within the owning builder.
    pub(crate) serial: usize,
}

impl QuantifierState {
    pub(crate) fn lock(&mut self, greediness: Greediness) {
        self.greediness = greediness;
        self.locked = true;
    }

    /// Whether a modifier call may still reach this quantifier from further up the chain.
    pub(crate) fn is_open(&self) -> bool {
        !self.locked && !self.ambient
    }
}

/// Inline case-sensitivity toggle scoped to one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Insensitive,
    Sensitive,
}

impl CaseMode {
    fn open(self) -> &'static str {
        match self {
            Self::Insensitive => "(?i)",
            Self::Sensitive => "(?-i)",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Self::Insensitive => "(?-i)",
            Self::Sensitive => "(?i)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackRef {
    Number(usize),
    Name(String),
}

/// The test of a conditional: a group number, a group name, or a look-around fragment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CondTest {
    Group(usize),
    Named(String),
    Assertion(Box<Fragment>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Empty,
    /// Unescaped text; escaped on rendering.
    Literal(String),
    /// One pre-escaped atom such as `\t` or `\x{263A}`.
    Atom(String),
    Class(String),
    Anchor(&'static str),
    Lookaround {
        kind: Lookaround,
        inner: Box<Fragment>,
    },
    Group {
        capture: Capture,
        inner: Box<Fragment>,
    },
    Alternation(Vec<Fragment>),
    Concatenation(Vec<Fragment>),
    Quantified {
        inner: Box<Fragment>,
        quantifier: Quantifier,
        state: QuantifierState,
    },
    /// `branches` is `None` for a bare `match_group` test awaiting `cond`.
    Conditional {
        test: CondTest,
        branches: Option<(Box<Fragment>, Box<Fragment>)>,
    },
    Backreference(BackRef),
}

/// One syntactic unit of a pattern plus the metadata needed to combine it safely.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub(crate) node: Node,
    case: Option<CaseMode>,
}

// Constructors
impl Fragment {
    pub(crate) fn new(node: Node) -> Self {
        Self { node, case: None }
    }

    pub fn empty() -> Self {
        Self::new(Node::Empty)
    }

    pub(crate) fn literal(text: &str) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        Self::new(Node::Literal(text.to_string()))
    }

    pub(crate) fn atom(text: impl Into<String>) -> Self {
        Self::new(Node::Atom(text.into()))
    }

    pub(crate) fn class(text: impl Into<String>) -> Self {
        Self::new(Node::Class(text.into()))
    }

    pub(crate) fn anchor(text: &'static str) -> Self {
        Self::new(Node::Anchor(text))
    }

    pub(crate) fn lookaround(kind: Lookaround, inner: Fragment) -> Self {
        Self::new(Node::Lookaround {
            kind,
            inner: Box::new(inner),
        })
    }

    pub(crate) fn group(capture: Capture, inner: Fragment) -> Self {
        Self::new(Node::Group {
            capture,
            inner: Box::new(inner),
        })
    }

    /// Join `parts` with `|`. Zero parts give the empty fragment and a single
    /// part is returned unchanged.
    pub(crate) fn alternation(mut parts: Vec<Fragment>) -> Self {
        match parts.len() {
            0 => Self::empty(),
            1 => parts.remove(0),
            _ => Self::new(Node::Alternation(parts)),
        }
    }

    /// Concatenate `parts`, splicing nested unscoped concatenations and
    /// dropping empty fragments.
    pub(crate) fn concatenation(parts: Vec<Fragment>) -> Self {
        let mut flat = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Fragment {
                    node: Node::Concatenation(inner),
                    case: None,
                } => flat.extend(inner),
                Fragment {
                    node: Node::Empty,
                    case: None,
                } => {}
                part => flat.push(part),
            }
        }
        match flat.len() {
            0 => Self::empty(),
            1 => flat.remove(0),
            _ => Self::new(Node::Concatenation(flat)),
        }
    }

    /// Apply `quantifier` to `target`, wrapping it first when the suffix
    /// would otherwise bind to its last atom only.
    pub(crate) fn quantified(target: Fragment, quantifier: Quantifier, state: QuantifierState) -> Self {
        let inner = if target.needs_wrap_for_suffix() {
            Self::group(Capture::NonCapturing, target)
        } else {
            target
        };
        Self::new(Node::Quantified {
            inner: Box::new(inner),
            quantifier,
            state,
        })
    }

    pub(crate) fn condition(test: CondTest) -> Self {
        Self::new(Node::Conditional { test, branches: None })
    }

    pub(crate) fn conditional(test: CondTest, then: Fragment, otherwise: Fragment) -> Self {
        Self::new(Node::Conditional {
            test,
            branches: Some((Box::new(then), Box::new(otherwise))),
        })
    }

    pub(crate) fn backreference(target: BackRef) -> Self {
        Self::new(Node::Backreference(target))
    }
}

// Metadata
impl Fragment {
    pub fn kind(&self) -> Kind {
        match &self.node {
            Node::Empty => Kind::Empty,
            Node::Literal(_) | Node::Atom(_) => Kind::Literal,
            Node::Class(_) => Kind::CharClass,
            Node::Anchor(_) => Kind::Anchor,
            Node::Lookaround { .. } => Kind::Assertion,
            Node::Group { .. } => Kind::Group,
            Node::Alternation(_) => Kind::Alternation,
            Node::Concatenation(_) => Kind::Concatenation,
            Node::Quantified { .. } => Kind::Quantified,
            Node::Conditional { .. } => Kind::Conditional,
            Node::Backreference(_) => Kind::Backreference,
        }
    }

    /// The parentheses of a group fragment, `None` for every other kind.
    pub fn capture(&self) -> Option<&Capture> {
        match &self.node {
            Node::Group { capture, .. } => Some(capture),
            _ => None,
        }
    }

    pub fn group_name(&self) -> Option<&str> {
        match self.capture() {
            Some(Capture::Named { name, .. }) => Some(name),
            _ => None,
        }
    }

    pub fn quantifier_state(&self) -> Option<&QuantifierState> {
        match &self.node {
            Node::Quantified { state, .. } => Some(state),
            _ => None,
        }
    }

    pub(crate) fn quantifier_state_mut(&mut self) -> Option<&mut QuantifierState> {
        match &mut self.node {
            Node::Quantified { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn case_mode(&self) -> Option<CaseMode> {
        self.case
    }

    /// True when a repetition suffix appended to the content would not bind
    /// to the whole fragment.
    pub fn needs_wrap_for_suffix(&self) -> bool {
        if self.case.is_some() {
            return true;
        }
        match &self.node {
            Node::Empty => true,
            Node::Literal(text) => text.chars().count() != 1,
            Node::Alternation(_) | Node::Concatenation(_) | Node::Quantified { .. } => true,
            Node::Atom(_)
            | Node::Class(_)
            | Node::Anchor(_)
            | Node::Lookaround { .. }
            | Node::Group { .. }
            | Node::Conditional { .. }
            | Node::Backreference(_) => false,
        }
    }

    /// True when placing the content next to other content would change its
    /// meaning, i.e. for a bare alternation.
    pub fn needs_wrap_for_concatenation(&self) -> bool {
        self.case.is_none() && matches!(self.node, Node::Alternation(_))
    }

    /// Whether `cond` may use this fragment as its test.
    pub(crate) fn is_condition_test(&self) -> bool {
        self.case.is_none()
            && matches!(
                self.node,
                Node::Conditional { branches: None, .. } | Node::Lookaround { .. }
            )
    }
}

// Transformations
impl Fragment {
    /// Replace the case scope of this fragment.
    pub(crate) fn set_case(&mut self, mode: CaseMode) {
        self.case = Some(mode);
    }

    /// Scope this fragment to `mode` without discarding a scope it already has.
    pub(crate) fn scoped(self, mode: CaseMode) -> Self {
        if self.case.is_none() {
            return Self {
                case: Some(mode),
                ..self
            };
        }
        Self {
            node: Node::Concatenation(vec![self]),
            case: Some(mode),
        }
    }

    /// Give this fragment the parentheses `capture`, converting a bare
    /// non-capturing group in place instead of nesting a new layer.
    pub(crate) fn regroup(self, capture: Capture) -> Self {
        match self {
            Fragment {
                node:
                    Node::Group {
                        capture: Capture::NonCapturing,
                        inner,
                    },
                case: None,
            } => Self::new(Node::Group { capture, inner }),
            other => Self::group(capture, other),
        }
    }

    pub(crate) fn into_condition_test(self) -> CondTest {
        match self.node {
            Node::Conditional {
                test,
                branches: None,
            } => test,
            _ => CondTest::Assertion(Box::new(self)),
        }
    }

    /// Visit every node of the tree, parents before children.
    pub(crate) fn walk<F: FnMut(&Node)>(&self, f: &mut F) {
        f(&self.node);
        match &self.node {
            Node::Lookaround { inner, .. }
            | Node::Group { inner, .. }
            | Node::Quantified { inner, .. } => inner.walk(f),
            Node::Alternation(parts) | Node::Concatenation(parts) => {
                for part in parts {
                    part.walk(f);
                }
            }
            Node::Conditional { test, branches } => {
                if let CondTest::Assertion(assertion) = test {
                    assertion.walk(f);
                }
                if let Some((then, otherwise)) = branches {
                    then.walk(f);
                    otherwise.walk(f);
                }
            }
            Node::Empty
            | Node::Literal(_)
            | Node::Atom(_)
            | Node::Class(_)
            | Node::Anchor(_)
            | Node::Backreference(_) => {}
        }
    }

    /// Mutable counterpart of [`walk`](Fragment::walk).
    pub(crate) fn walk_mut<F: FnMut(&mut Node)>(&mut self, f: &mut F) {
        f(&mut self.node);
        match &mut self.node {
            Node::Lookaround { inner, .. }
            | Node::Group { inner, .. }
            | Node::Quantified { inner, .. } => inner.walk_mut(f),
            Node::Alternation(parts) | Node::Concatenation(parts) => {
                for part in parts {
                    part.walk_mut(f);
                }
            }
            Node::Conditional { test, branches } => {
                if let CondTest::Assertion(assertion) = test {
                    assertion.walk_mut(f);
                }
                if let Some((then, otherwise)) = branches {
                    then.walk_mut(f);
                    otherwise.walk_mut(f);
                }
            }
            Node::Empty
            | Node::Literal(_)
            | Node::Atom(_)
            | Node::Class(_)
            | Node::Anchor(_)
            | Node::Backreference(_) => {}
        }
    }

    /// Serial of the most recently created quantifier in this tree that a
    /// modifier call may still reach.
    pub(crate) fn latest_open_quantifier(&self) -> Option<usize> {
        let mut latest = None;
        self.walk(&mut |node| {
            if let Node::Quantified { state, .. } = node
                && state.is_open()
            {
                latest = latest.max(Some(state.serial));
            }
        });
        latest
    }

    /// Lock the quantifier with the given serial, if it lives in this tree.
    pub(crate) fn lock_quantifier(&mut self, serial: usize, greediness: Greediness) {
        self.walk_mut(&mut |node| {
            if let Node::Quantified { state, .. } = node
                && state.serial == serial
            {
                state.lock(greediness);
            }
        });
    }
}

// Rendering
impl Fragment {
    /// The pattern text this fragment contributes.
    pub fn content(&self) -> String {
        self.render(None)
    }

    /// Render inside a case scope `enclosing`. A toggle equal to the
    /// enclosing mode is omitted, and a closing toggle restores the
    /// enclosing mode rather than switching it off.
    fn render(&self, enclosing: Option<CaseMode>) -> String {
        match self.case {
            Some(mode) if Some(mode) != enclosing => format!(
                "{}{}{}",
                mode.open(),
                self.render_in_sequence(Some(mode)),
                enclosing.map_or(mode.close(), CaseMode::open)
            ),
            Some(_) => self.render_in_sequence(enclosing),
            None => self.render_node(enclosing),
        }
    }

    /// Content wrapped in `(?:…)` when it is a bare alternation.
    fn render_in_sequence(&self, scope: Option<CaseMode>) -> String {
        if matches!(self.node, Node::Alternation(_)) {
            format!("(?:{})", self.render_node(scope))
        } else {
            self.render_node(scope)
        }
    }

    /// Content as it must appear next to other content.
    fn sequenced_content(&self, scope: Option<CaseMode>) -> String {
        if self.needs_wrap_for_concatenation() {
            format!("(?:{})", self.render(scope))
        } else {
            self.render(scope)
        }
    }

    fn render_node(&self, scope: Option<CaseMode>) -> String {
        match &self.node {
            Node::Empty => String::new(),
            Node::Literal(text) => escape_literal(text),
            Node::Atom(text) | Node::Class(text) => text.clone(),
            Node::Anchor(text) => text.to_string(),
            Node::Lookaround { kind, inner } => {
                format!("{}{})", kind.opener(), inner.render(scope))
            }
            Node::Group { capture, inner } => {
                format!("{}{})", capture.opener(), inner.render(scope))
            }
            Node::Alternation(parts) => parts.iter().map(|part| part.render(scope)).join("|"),
            Node::Concatenation(parts) => {
                parts.iter().map(|part| part.sequenced_content(scope)).join("")
            }
            Node::Quantified {
                inner,
                quantifier,
                state,
            } => format!(
                "{}{}{}",
                inner.render(scope),
                quantifier.suffix(),
                state.greediness.suffix()
            ),
            Node::Conditional { test, branches } => {
                let test = match test {
                    CondTest::Group(number) => format!("({number})"),
                    CondTest::Named(name) => format!("(<{name}>)"),
                    CondTest::Assertion(assertion) => assertion.render(scope),
                };
                match branches {
                    Some((then, otherwise)) => format!(
                        "(?{test}{}|{})",
                        then.sequenced_content(scope),
                        otherwise.sequenced_content(scope)
                    ),
                    None => format!("(?{test}|(?!))"),
                }
            }
            Node::Backreference(BackRef::Number(number)) => format!("\\g{{{number}}}"),
            Node::Backreference(BackRef::Name(name)) => format!("(?P={name})"),
        }
    }
}
