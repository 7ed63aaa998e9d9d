/**
 * A compiled pattern and the options it is compiled with.
 */

use std::str::FromStr;
use rand::Rng;
use crate::ast::{Node, Sample};
use crate::error::{ParseError, Result};
use crate::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// When false, every literal may be rendered in either case
    pub case_sensitive: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self{ case_sensitive: true }
    }
}

/// The case mapping of `c` if it is a single code point, `c` itself
/// otherwise ('ß' does not become "SS").
fn single_case<I>(c: char, mut mapped: I) -> char where I : Iterator<Item = char> {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => c,
    }
}

/// A parsed pattern. It is immutable, so it can be shared between threads
/// that each bring their own random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    root: Node,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        Self::with_options(source, &ParseOptions::default())
    }

    pub fn with_options(source: &str, options: &ParseOptions) -> Result<Self> {
        Ok(Self{ root: parser::parse(source, options)? })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn generate<'a, R>(&'a self, rng: &'a mut R) -> Sample<'a, R> where R : Rng + ?Sized {
        self.root.generate(rng)
    }

    /// Draws one sample and turns it into a string.
    pub fn render<R>(&self, rng: &mut R) -> String where R : Rng + ?Sized {
        let mut sample = self.generate(rng);
        let mut result = String::new();
        while let Some((c, case_sensitive)) = sample.next() {
            if case_sensitive {
                result.push(c);
            }
            else if sample.rng().gen_bool(0.5) {
                result.push(single_case(c, c.to_uppercase()));
            }
            else {
                result.push(single_case(c, c.to_lowercase()));
            }
        }
        result
    }
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod pattern_tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn default_is_case_sensitive() {
        assert!(ParseOptions::default().case_sensitive);
        assert!(!ParseOptions::new().case_sensitive(false).case_sensitive);
    }

    #[test]
    fn from_str() {
        let p: Pattern = "ab".parse().unwrap();
        assert_eq!(p, Pattern::new("ab").unwrap());
        assert!("a\\".parse::<Pattern>().is_err());
    }

    #[test]
    fn render_literal() {
        let p = Pattern::new(r"a\.b").unwrap();
        let mut rng = Mcg128Xsl64::seed_from_u64(0);
        assert_eq!(p.render(&mut rng), "a.b");
    }

    #[test]
    fn render_ignores_case() {
        let p = Pattern::with_options("a", &ParseOptions::new().case_sensitive(false)).unwrap();
        let mut rng = Mcg128Xsl64::seed_from_u64(5);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..100 {
            seen.insert(p.render(&mut rng));
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec!["A".to_string(), "a".to_string()]);
    }

    #[test]
    fn uncased_chars_unchanged() {
        let p = Pattern::with_options("1-2", &ParseOptions::new().case_sensitive(false)).unwrap();
        let mut rng = Mcg128Xsl64::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(p.render(&mut rng), "1-2");
        }
    }

    #[test]
    fn multi_char_case_mapping_kept() {
        let p = Pattern::with_options("\u{df}", &ParseOptions::new().case_sensitive(false)).unwrap();
        let mut rng = Mcg128Xsl64::seed_from_u64(9);
        for _ in 0..50 {
            assert_eq!(p.render(&mut rng), "\u{df}");
        }
    }

    #[test]
    fn single_case_mapping() {
        assert_eq!(single_case('a', 'a'.to_uppercase()), 'A');
        assert_eq!(single_case('\u{df}', '\u{df}'.to_uppercase()), '\u{df}');
        assert_eq!(single_case('\u{130}', '\u{130}'.to_lowercase()), '\u{130}');
    }

    #[test]
    fn pattern_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();
    }
}
