// src/polarity.rs
//! General-purpose polarity estimate used when no Thai lexicon token matched.
//!
//! `PatternPolarity` is a small English pattern lexicon: the polarity of a text
//! is the mean polarity of its sentiment-bearing words. Intensifiers scale the
//! next sentiment word, and a negator within the previous 1..=3 tokens flips it
//! at half strength. Output is clamped to [-1, 1].
//!
//! Text without any Latin letters cannot be scored by this estimator and is
//! reported as `PolarityError::UnsupportedScript`. The scorer treats any error
//! here as a neutral result.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolarityError {
    #[error("empty input")]
    Empty,
    #[error("no Latin-script words to score")]
    UnsupportedScript,
}

/// Sentence-level polarity in [-1, 1].
pub trait PolarityEstimator: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, PolarityError>;
}

impl<F> PolarityEstimator for F
where
    F: Fn(&str) -> Result<f64, PolarityError> + Send + Sync,
{
    fn polarity(&self, text: &str) -> Result<f64, PolarityError> {
        self(text)
    }
}

static WORDS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("awesome", 1.0),
        ("amazing", 0.6),
        ("wonderful", 1.0),
        ("best", 1.0),
        ("better", 0.5),
        ("nice", 0.6),
        ("love", 0.5),
        ("like", 0.2),
        ("happy", 0.8),
        ("glad", 0.5),
        ("useful", 0.3),
        ("helpful", 0.5),
        ("interesting", 0.5),
        ("clear", 0.1),
        ("perfect", 1.0),
        ("beautiful", 0.85),
        ("agree", 0.3),
        ("thanks", 0.2),
        ("thank", 0.2),
        ("cool", 0.35),
        ("fantastic", 0.4),
        // negative
        ("bad", -0.7),
        ("worse", -0.4),
        ("worst", -1.0),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("poor", -0.4),
        ("wrong", -0.5),
        ("sad", -0.5),
        ("angry", -0.5),
        ("hate", -0.8),
        ("boring", -1.0),
        ("useless", -0.5),
        ("stupid", -0.8),
        ("disappointing", -0.6),
        ("disappointed", -0.75),
        ("confusing", -0.3),
        ("annoying", -0.8),
        ("fake", -0.5),
        ("disagree", -0.3),
        ("nonsense", -0.6),
    ]
    .into_iter()
    .collect()
});

fn intensity(tok: &str) -> Option<f64> {
    let m = match tok {
        "very" | "super" => 1.3,
        "really" | "so" | "truly" => 1.2,
        "extremely" | "incredibly" => 1.5,
        "quite" | "pretty" => 1.1,
        "slightly" | "somewhat" => 0.7,
        _ => return None,
    };
    Some(m)
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "nothing" | "neither" | "nor" | "cannot" | "without"
    ) || tok.ends_with("n't")
}

/// Lowercase word tokens; apostrophes stay inside words ("don't").
fn tokenize(s: &str) -> Vec<String> {
    s.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '\u{2019}'))
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\u{2019}', "'").to_lowercase())
        .collect()
}

/// Built-in English pattern estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternPolarity;

impl PolarityEstimator for PatternPolarity {
    fn polarity(&self, text: &str) -> Result<f64, PolarityError> {
        if text.trim().is_empty() {
            return Err(PolarityError::Empty);
        }
        if !text.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PolarityError::UnsupportedScript);
        }

        let tokens = tokenize(text);
        let mut hits: Vec<f64> = Vec::new();
        let mut boost = 1.0_f64;

        for (i, tok) in tokens.iter().enumerate() {
            if let Some(m) = intensity(tok) {
                boost *= m;
                continue;
            }
            if let Some(&base) = WORDS.get(tok.as_str()) {
                let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
                let mut v = base * boost;
                if negated {
                    v *= -0.5;
                }
                hits.push(v);
            }
            boost = 1.0;
        }

        if hits.is_empty() {
            return Ok(0.0);
        }
        let mean = hits.iter().sum::<f64>() / hits.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> f64 {
        PatternPolarity.polarity(text).unwrap()
    }

    #[test]
    fn positive_and_negative_words() {
        assert!(p("This article is great") > 0.1);
        assert!(p("what a terrible idea") < -0.1);
    }

    #[test]
    fn negation_flips_at_half_strength() {
        let v = p("this is not good");
        assert!((v - (-0.35)).abs() < 1e-9, "got {v}");
        assert!(p("I don't like it") < 0.0);
    }

    #[test]
    fn intensifier_scales_and_clamps() {
        assert!(p("very good") > p("good"));
        assert_eq!(p("extremely extremely excellent"), 1.0);
    }

    #[test]
    fn unknown_words_are_zero() {
        assert_eq!(p("the weather today"), 0.0);
    }

    #[test]
    fn non_latin_input_is_unsupported() {
        assert_eq!(
            PatternPolarity.polarity("อยากทราบรายละเอียดเพิ่มเติมครับ"),
            Err(PolarityError::UnsupportedScript)
        );
        assert_eq!(PatternPolarity.polarity("   "), Err(PolarityError::Empty));
    }

    #[test]
    fn closures_are_estimators() {
        let fixed = |_: &str| -> Result<f64, PolarityError> { Ok(0.42) };
        assert_eq!(fixed.polarity("x"), Ok(0.42));
    }
}
