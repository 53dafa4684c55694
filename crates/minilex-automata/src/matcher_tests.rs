use minilex_syntax::parse;

use crate::Dfa;

fn compile(pattern: &str) -> Dfa {
    crate::compile(&parse(pattern).expect("pattern should parse"))
}

#[test]
fn digits_plus() {
    let dfa = compile("[0-9]+");
    assert!(dfa.is_match("0"));
    assert!(dfa.is_match("123"));
    assert!(!dfa.is_match(""));
    assert!(!dfa.is_match("12a"));
}

#[test]
fn keyword_alternatives() {
    let dfa = compile("int|float|global|char|bool");
    assert!(dfa.is_match("int"));
    assert!(dfa.is_match("bool"));
    // no transition out of the accepting state after "int"
    assert!(!dfa.is_match("integer"));
    assert!(!dfa.is_match(""));
}

#[test]
fn single_bit() {
    let dfa = compile("0|1");
    assert!(dfa.is_match("0"));
    assert!(dfa.is_match("1"));
    assert!(!dfa.is_match("01"));
    assert!(!dfa.is_match("2"));
    assert!(!dfa.is_match(""));
}

#[test]
fn lowercase_word() {
    let dfa = compile("[a-z]+");
    assert!(dfa.is_match("abc"));
    assert!(!dfa.is_match(""));
    assert!(!dfa.is_match("abc1"));
}

#[test]
fn delimited_comment() {
    let dfa = compile("@[a-zA-Z0-9]*@");
    assert!(dfa.is_match("@@"));
    assert!(dfa.is_match("@a1B@"));
    assert!(!dfa.is_match("@a"));
    assert!(!dfa.is_match("a@"));
}

#[test]
fn matching_is_anchored_not_substring() {
    let dfa = compile("ab");
    assert!(dfa.is_match("ab"));
    assert!(!dfa.is_match("xab"));
    assert!(!dfa.is_match("abx"));
}

#[test]
fn star_and_plus_differ_only_on_empty() {
    for inner in ["a", "[a-z]", "(ab)", "(a|b)"] {
        let star = compile(&format!("{inner}*"));
        let plus = compile(&format!("{inner}+"));
        assert!(star.is_match(""), "inner {inner:?}");
        assert!(!plus.is_match(""), "inner {inner:?}");
        for candidate in ["a", "ab", "abab", "b", "zz", "a1"] {
            if plus.is_match(candidate) {
                assert!(star.is_match(candidate), "inner {inner:?}, candidate {candidate:?}");
            }
        }
    }
}

#[test]
fn empty_pattern_accepts_empty_only() {
    let dfa = compile("");
    assert!(dfa.is_match(""));
    assert!(!dfa.is_match("a"));
}

#[test]
fn negated_class_string_literal() {
    let dfa = compile("\"[^\"]*\"");
    assert!(dfa.is_match("\"\""));
    assert!(dfa.is_match("\"hello world\""));
    assert!(!dfa.is_match("\"unterminated"));
    assert!(!dfa.is_match("\"a\"b\""));
}

#[test]
fn matching_is_pure_and_repeatable() {
    let dfa = compile("(a|b)*abb");
    for _ in 0..3 {
        assert!(dfa.is_match("ababb"));
        assert!(!dfa.is_match("ababa"));
    }
}

#[test]
fn dfa_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dfa>();
}
