/**
 * End-to-end: pattern text in, random matching strings out.
 */

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use rr_regex_parse::{ErrorKind, Feature, Node, ParseOptions, Pattern};

fn render(source: &str, seed: u64) -> String {
    let pattern = Pattern::new(source).unwrap();
    let mut rng = Mcg128Xsl64::seed_from_u64(seed);
    pattern.render(&mut rng)
}

fn kind(source: &str) -> ErrorKind {
    Pattern::new(source).unwrap_err().kind
}

#[test]
fn escapes_render_their_code_points() {
    assert_eq!(render(r"\x41", 0), "A");
    assert_eq!(render(r"\101", 0), "A");
    assert_eq!(render(r"\x{1F600}", 0), "\u{1F600}");
    assert_eq!(render(r"\12", 0), "\n");
    assert_eq!(render(r"\18", 0), "\u{1}8");
    assert_eq!(render(r"\N{U+263A}", 0), "\u{263A}");
}

#[test]
fn small_decimal_escape_is_backreference() {
    assert_eq!(kind(r"a\7"), ErrorKind::NotImplemented(Feature::Backreferences));
    assert_eq!(kind(r"\8"), ErrorKind::NotImplemented(Feature::Backreferences));
    assert_eq!(kind(r"\81"), ErrorKind::NotImplemented(Feature::Backreferences));
}

#[test]
fn unterminated_braced_hex() {
    match kind(r"\x{41") {
        ErrorKind::UnexpectedEndOfInput{ .. } => {},
        k => panic!("unexpected {:?}", k),
    }
}

#[test]
fn groups_are_not_implemented() {
    let e = Pattern::new("a(b|c)*").unwrap_err();
    assert!(e.is_not_implemented());
    assert_eq!(e.position, 1);
}

#[test]
fn alternation() {
    let pattern = Pattern::new("ab|cd").unwrap();
    match pattern.root() {
        Node::Alternates(alts) => {
            assert_eq!(alts.len(), 2);
            assert!(alts.iter().all(|n| match n { Node::Sequence(s) => s.len() == 2, _ => false }));
        },
        n => panic!("unexpected {:?}", n),
    }

    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..100 {
        seen.insert(render("ab|cd", seed));
    }
    assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec!["ab", "cd"]);
}

#[test]
fn bounded_repetition() {
    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..100 {
        seen.insert(render("a{2,3}", seed));
    }
    assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec!["aa", "aaa"]);
}

#[test]
fn quantified_literal_repeats_whole() {
    for seed in 0..50 {
        let s = render(r"\Qab\E{2}", seed);
        assert_eq!(s, "abab");
    }
}

#[test]
fn case_insensitive_only_changes_case() {
    let pattern = Pattern::with_options("a+", &ParseOptions::new().case_sensitive(false)).unwrap();
    let mut rng = Mcg128Xsl64::seed_from_u64(11);
    let mut upper = false;
    let mut lower = false;
    for _ in 0..100 {
        for c in pattern.render(&mut rng).chars() {
            match c {
                'A' => upper = true,
                'a' => lower = true,
                c => panic!("unexpected {:?}", c),
            }
        }
    }
    assert!(upper && lower);
}

#[test]
fn concurrent_rendering() {
    let pattern = Pattern::new("x|y+").unwrap();
    std::thread::scope(|s| {
        for seed in 0..4 {
            let pattern = &pattern;
            s.spawn(move || {
                let mut rng = Mcg128Xsl64::seed_from_u64(seed);
                for _ in 0..100 {
                    let sample = pattern.render(&mut rng);
                    assert!(sample == "x" || (!sample.is_empty() && sample.chars().all(|c| c == 'y')));
                }
            });
        }
    });
}

#[test]
fn same_seed_same_output() {
    let pattern = Pattern::new(r"a*b?c{1,4}|d+").unwrap();
    let mut first = Mcg128Xsl64::seed_from_u64(1234);
    let mut second = Mcg128Xsl64::seed_from_u64(1234);
    for _ in 0..20 {
        assert_eq!(pattern.render(&mut first), pattern.render(&mut second));
    }
}

proptest! {
    #[test]
    fn alphanumeric_literal_renders_itself(source in "[a-zA-Z0-9]{0,24}", seed in any::<u64>()) {
        prop_assert_eq!(render(&source, seed), source);
    }

    #[test]
    fn escaped_punctuation_renders_itself(source in "[!-/:-@\\[-`{-~]{1,12}", seed in any::<u64>()) {
        let escaped: String = source.chars().flat_map(|c| vec!['\\', c]).collect();
        prop_assert_eq!(render(&escaped, seed), source);
    }
}
