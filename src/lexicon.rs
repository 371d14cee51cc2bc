// src/lexicon.rs
//! Marker-token lexicon for Thai comments.
//!
//! Three sets of tokens (Thai words and emoji): positive, negative and
//! neutral/question markers. The built-in set is compiled in from
//! `thai_lexicon.json`; an override file (JSON or TOML with the same three keys)
//! replaces it wholesale.
//!
//! Matching is plain substring counting on normalized text, so a token also
//! matches inside longer words ("ดี" inside "ดีมาก").

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    let raw = include_str!("../thai_lexicon.json");
    let lex: Lexicon = serde_json::from_str(raw).expect("valid built-in thai lexicon");
    Arc::new(lex.cleaned())
});

/// Which token set a count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub positive: BTreeSet<String>,
    #[serde(default)]
    pub negative: BTreeSet<String>,
    #[serde(default)]
    pub neutral: BTreeSet<String>,
}

impl Lexicon {
    /// The compiled-in Thai lexicon (shared, parsed once per process).
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    pub fn new<I, S>(positive: I, negative: I, neutral: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
            neutral: neutral.into_iter().map(Into::into).collect(),
        }
        .cleaned()
    }

    /// Load an override lexicon. Format by extension (`.toml` / `.json`),
    /// falling back to sniffing the content.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_lexicon(&content, ext.as_str())
            .with_context(|| format!("parsing lexicon {}", path.display()))
    }

    pub fn tokens(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
            Category::Neutral => &self.neutral,
        }
    }

    /// Sum of non-overlapping occurrences of every token of `category` in `text`.
    pub fn count_in(&self, category: Category, text: &str) -> usize {
        self.tokens(category)
            .iter()
            .map(|tok| text.matches(tok.as_str()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty() && self.neutral.is_empty()
    }

    /// Trim tokens and drop empty ones; an empty needle would match everywhere.
    fn cleaned(self) -> Self {
        fn clean(set: BTreeSet<String>) -> BTreeSet<String> {
            set.into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        }
        Self {
            positive: clean(self.positive),
            negative: clean(self.negative),
            neutral: clean(self.neutral),
        }
    }
}

fn parse_lexicon(s: &str, hint_ext: &str) -> Result<Lexicon> {
    let try_toml_first =
        hint_ext == "toml" || (hint_ext != "json" && !s.trim_start().starts_with('{'));
    if try_toml_first {
        if let Ok(lex) = toml::from_str::<Lexicon>(s) {
            return Ok(lex.cleaned());
        }
    }
    if let Ok(lex) = serde_json::from_str::<Lexicon>(s) {
        return Ok(lex.cleaned());
    }
    if !try_toml_first {
        if let Ok(lex) = toml::from_str::<Lexicon>(s) {
            return Ok(lex.cleaned());
        }
    }
    Err(anyhow!("unsupported lexicon format (expected JSON or TOML)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_three_sets() {
        let lex = Lexicon::builtin();
        assert!(lex.positive.contains("ดี"));
        assert!(lex.negative.contains("แย่"));
        assert!(lex.neutral.contains("ทำไม"));
        assert!(lex.positive.contains("❤️"));
    }

    #[test]
    fn substring_counting_matches_inside_words() {
        let lex = Lexicon::builtin();
        // "ดี" and "ดีมาก" both hit
        assert_eq!(lex.count_in(Category::Positive, "ดีมาก"), 2);
        // "ไม่", "ไม่ดี", plus "ดี" on the positive side
        assert_eq!(lex.count_in(Category::Negative, "ไม่ดี"), 2);
        assert_eq!(lex.count_in(Category::Positive, "ไม่ดี"), 1);
    }

    #[test]
    fn repeated_token_counts_each_occurrence() {
        let lex = Lexicon::new(vec!["aa"], vec![], vec![]);
        // non-overlapping scan: "aaaa" holds two
        assert_eq!(lex.count_in(Category::Positive, "aaaa"), 2);
        assert_eq!(lex.count_in(Category::Positive, "aaa"), 1);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let lex = Lexicon::new(vec!["", "  ", "ok"], vec![], vec![]);
        assert_eq!(lex.positive.len(), 1);
        assert_eq!(lex.count_in(Category::Positive, "anything"), 0);
    }

    #[test]
    fn parses_toml_and_json() {
        let toml = r#"
positive = ["เจ๋ง"]
negative = ["บ้า"]
"#;
        let json = r#"{"positive": ["เจ๋ง"], "negative": ["บ้า"]}"#;
        let a = parse_lexicon(toml, "toml").unwrap();
        let b = parse_lexicon(json, "").unwrap();
        assert_eq!(a, b);
        assert!(a.neutral.is_empty());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_lexicon("positive = [", "toml").is_err());
        assert!(parse_lexicon("{", "json").is_err());
    }
}
