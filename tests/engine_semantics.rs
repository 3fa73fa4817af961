//! Feed built patterns to a real backtracking engine and check what they match.

use regex_chain::{Regex, Unicode, compile, execute};

fn engine(pattern: &Regex) -> fancy_regex::Regex {
    let source = pattern.to_string();
    fancy_regex::Regex::new(&source).unwrap_or_else(|err| panic!("{source:?} rejected: {err}"))
}

fn full_match(pattern: Regex) -> fancy_regex::Regex {
    engine(&Regex::new().start_of_string().group_of(pattern).end_of_string())
}

fn matches(re: &fancy_regex::Regex, text: &str) -> bool {
    re.is_match(text).unwrap()
}

#[test]
fn alternation_is_isolated_from_neighbours() {
    let re = full_match(Regex::new().literal("cat").literal("dog").alt_last(2));
    assert!(matches(&re, "cat"));
    assert!(matches(&re, "dog"));
    assert!(!matches(&re, "catdog"));
}

#[test]
fn quantifier_covers_whole_literal() {
    let re = full_match(Regex::new().literal("ab").at_least_one());
    assert!(matches(&re, "ababab"));
    assert!(!matches(&re, "abb"));
}

#[test]
fn capture_numbers_follow_creation_order() {
    let re = engine(
        &Regex::new()
            .literal("a")
            .literal("b")
            .literal("c")
            .alt_last(2)
            .capture()
            .literal("d"),
    );
    let caps = re.captures("xacd").unwrap().unwrap();
    assert_eq!(caps.get(1).map(|m| m.as_str()), Some("c"));
}

#[test]
fn absorbed_captures_are_renumbered() {
    let re = engine(&Regex::new().literal("x").capture().alt_of([
        Regex::new().literal("y").capture(),
        Regex::new().literal("z").capture(),
    ]));
    let caps = re.captures("xz").unwrap().unwrap();
    assert_eq!(caps.get(1).map(|m| m.as_str()), Some("x"));
    assert!(caps.get(2).is_none());
    assert_eq!(caps.get(3).map(|m| m.as_str()), Some("z"));
}

#[test]
fn named_capture_is_reported_by_name() {
    let re = engine(&Regex::new().digit().times(4).capture_named("year").unwrap());
    let caps = re.captures("in 1984.").unwrap().unwrap();
    assert_eq!(caps.name("year").map(|m| m.as_str()), Some("1984"));
}

#[test]
fn lookahead_does_not_consume() {
    let re = engine(&Regex::new().literal("foo").start().literal("bar").after());
    let found = re.find("foobar").unwrap().unwrap();
    assert_eq!(found.as_str(), "foo");
    assert!(!matches(&re, "foobaz"));
}

#[test]
fn negative_lookahead() {
    let re = engine(&Regex::new().literal("q").start().literal("u").not_after());
    assert!(matches(&re, "qi"));
    assert!(!matches(&re, "qu"));
}

#[test]
fn lookbehind_selects_amount() {
    let re = engine(&Regex::new().literal("$").before().digit().at_least_one());
    let found = re.find("cost: $42").unwrap().unwrap();
    assert_eq!(found.as_str(), "42");
}

#[test]
fn atomic_group_gives_nothing_back() {
    let re = engine(&Regex::new().literal("a").any_times().atomic().literal("a"));
    assert!(!matches(&re, "aaa"));
}

#[test]
fn lazy_quantifier_stops_early() {
    let re = engine(
        &Regex::new()
            .start_of_string()
            .any_char()
            .any_times()
            .lazy()
            .capture()
            .literal("b"),
    );
    let caps = re.captures("abab").unwrap().unwrap();
    assert_eq!(caps.get(1).map(|m| m.as_str()), Some("a"));
}

#[test]
fn case_scope_is_closed_after_fragment() {
    let re = full_match(Regex::new().literal("ab").case_insensitive().literal("c"));
    assert!(matches(&re, "ABc"));
    assert!(!matches(&re, "ABC"));
}

#[test]
fn same_mode_scope_keeps_outer_scope_open() {
    let re = full_match(
        Regex::new()
            .case_insensitive()
            .literal("a")
            .case_insensitive()
            .literal("b"),
    );
    assert!(matches(&re, "AB"));

    let re = full_match(
        Regex::new()
            .literal("a")
            .case_insensitive()
            .literal("b")
            .group()
            .case_insensitive(),
    );
    assert!(matches(&re, "AB"));
}

#[test]
fn opposite_scope_restores_outer_mode() {
    let re = full_match(
        Regex::new()
            .case_insensitive()
            .literal("a")
            .case_sensitive()
            .literal("b"),
    );
    assert!(matches(&re, "aB"));
    assert!(!matches(&re, "AB"));
}

#[test]
fn any_char_includes_newline() {
    assert!(matches(&full_match(Regex::new().any_char()), "\n"));
    assert!(!matches(&full_match(Regex::new().not_newline()), "\n"));
}

#[test]
fn character_classes() {
    let re = full_match(Regex::new().chars("a..f_"));
    assert!(matches(&re, "_"));
    assert!(matches(&re, "c"));
    assert!(!matches(&re, "g"));

    let re = full_match(Regex::new().not_chars("0..9"));
    assert!(matches(&re, "x"));
    assert!(!matches(&re, "5"));
}

#[test]
fn hexadecimal_digits() {
    let re = full_match(Regex::new().digit_in_base(16).unwrap().at_least_one());
    assert!(matches(&re, "dEadBeef09"));
    assert!(!matches(&re, "xyz"));
}

#[test]
fn unicode_letters() {
    let re = full_match(Regex::new().unicode(Unicode::Letter).at_least_one());
    assert!(matches(&re, "été"));
    assert!(!matches(&re, "e1"));
}

#[test]
fn escaped_characters() {
    let re = full_match(Regex::new().tab().crlf().unicode_char(0x263A));
    assert!(matches(&re, "\t\r\n\u{263A}"));
}

#[test]
fn anchors_bound_the_input() {
    let re = engine(&Regex::new().start_of_string().literal("a").end_of_string());
    assert!(matches(&re, "a"));
    assert!(!matches(&re, "ba"));
    assert!(!matches(&re, "a\n"));
}

#[test]
fn script_output_runs_on_engine() {
    let code = compile(
        "start_of_string
         word_char at_least_one capture 'user'
         literal '@'
         alt (literal 'example') (literal 'test')
         literal '.org'
         end_of_string",
    )
    .unwrap();
    let re = engine(&execute(&code).unwrap());
    let caps = re.captures("ada@example.org").unwrap().unwrap();
    assert_eq!(caps.name("user").map(|m| m.as_str()), Some("ada"));
    assert!(!matches(&re, "ada@elsewhere.org"));
}
