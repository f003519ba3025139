//! tests/render_snapshots.rs
//! Snapshot tests for the plain-text output regions.

use primelens::core::analysis::Analyzer;
use primelens::core::disclosure::Disclosure;
use primelens::render::{lines, to_plain};

fn rendered(input: &str, disclosure: Disclosure) -> String {
    let report = Analyzer::default().analyze(input).unwrap();
    to_plain(&lines(&report, disclosure)).trim_end().to_string()
}

#[test]
fn six_renders_all_regions() {
    insta::assert_snapshot!(rendered("6", Disclosure::Hidden), @r###"
    Prime Factorization: {2: 1, 3: 1}
    LCM: 6
    Factorial: 720
    Sum of Digits: 6
    Is Perfect Square: false
    "###);
}

#[test]
fn one_renders_empty_map() {
    insta::assert_snapshot!(rendered("1", Disclosure::Hidden), @r###"
    Prime Factorization: {}
    LCM: 1
    Factorial: 1
    Sum of Digits: 1
    Is Perfect Square: true
    "###);
}

#[test]
fn abbreviated_factorial_hidden() {
    insta::assert_snapshot!(rendered("75", Disclosure::Hidden), @r###"
    Prime Factorization: {3: 1, 5: 2}
    LCM: 75
    Factorial (Approx): 2.48 × 10^109
    Exact: [hidden; toggle to show]
    Sum of Digits: 12
    Is Perfect Square: false
    "###);
}

#[test]
fn abbreviated_factorial_shown() {
    insta::assert_snapshot!(rendered("75", Disclosure::Shown), @r###"
    Prime Factorization: {3: 1, 5: 2}
    LCM: 75
    Factorial (Approx): 2.48 × 10^109
    Exact: 24809140811395398091946477116594033660926243886570122837795894512655842677572867409443815424000000000000000000
    Sum of Digits: 12
    Is Perfect Square: false
    "###);
}
