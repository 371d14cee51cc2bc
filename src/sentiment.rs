// src/sentiment.rs
//! Per-text sentiment scoring.
//!
//! Two paths:
//! - **lexicon**: at least one positive/negative marker token matched.
//!   `score = (pos - neg) / (pos + neg)`, labelled with the ±0.2 band.
//! - **fallback**: no marker matched; the polarity estimator scores the raw
//!   text, labelled with the ±0.1 band. Estimator errors yield neutral.
//!
//! The two bands are intentionally different.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::lexicon::{Category, Lexicon};
use crate::normalize::{normalize, word_count};
use crate::polarity::{PatternPolarity, PolarityEstimator};
use crate::telemetry;

pub const LEXICON_POSITIVE_ABOVE: f64 = 0.2;
pub const LEXICON_NEGATIVE_BELOW: f64 = -0.2;
pub const FALLBACK_POSITIVE_ABOVE: f64 = 0.1;
pub const FALLBACK_NEGATIVE_BELOW: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which branch produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPath {
    Empty,
    Lexicon,
    Fallback,
}

impl ScoringPath {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoringPath::Empty => "empty",
            ScoringPath::Lexicon => "lexicon",
            ScoringPath::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDetails {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Whitespace-delimited tokens in the normalized text.
    pub total_words: usize,
    /// `positive_count + negative_count`; stays 0 on the fallback path.
    pub sentiment_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    /// In [-1, 1], rounded to 3 decimals.
    pub score: f64,
    /// In [0, 1], rounded to 3 decimals.
    pub confidence: f64,
    pub details: SentimentDetails,
}

impl SentimentResult {
    /// Neutral, zero-confidence result with all counters zero.
    pub fn neutral_empty() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.0,
            details: SentimentDetails::default(),
        }
    }
}

#[derive(Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
    polarity: Arc<dyn PolarityEstimator>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("positive_tokens", &self.lexicon.positive.len())
            .field("negative_tokens", &self.lexicon.negative.len())
            .field("neutral_tokens", &self.lexicon.neutral.len())
            .finish_non_exhaustive()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Built-in Thai lexicon + English pattern polarity fallback.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            polarity: Arc::new(PatternPolarity),
        }
    }

    /// Replace the three token sets.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    /// Replace the fallback polarity estimator.
    pub fn with_polarity(mut self, estimator: impl PolarityEstimator + 'static) -> Self {
        self.polarity = Arc::new(estimator);
        self
    }

    /// Build from config; fails only if an override lexicon can't be loaded.
    pub fn from_config(cfg: &AnalyzerConfig) -> anyhow::Result<Self> {
        let analyzer = Self::new();
        match cfg.load_lexicon()? {
            Some(lex) => Ok(analyzer.with_lexicon(lex)),
            None => Ok(analyzer),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        self.analyze_with_path(Some(text)).0
    }

    /// Same as `analyze_sentiment`, accepting an absent text.
    pub fn analyze_optional(&self, text: Option<&str>) -> SentimentResult {
        self.analyze_with_path(text).0
    }

    /// Score and report which branch was taken.
    pub fn analyze_with_path(&self, text: Option<&str>) -> (SentimentResult, ScoringPath) {
        let clean = normalize(text);
        if clean.is_empty() {
            telemetry::record_text(SentimentLabel::Neutral, ScoringPath::Empty);
            return (SentimentResult::neutral_empty(), ScoringPath::Empty);
        }

        let positive_count = self.lexicon.count_in(Category::Positive, &clean);
        let negative_count = self.lexicon.count_in(Category::Negative, &clean);
        let neutral_count = self.lexicon.count_in(Category::Neutral, &clean);
        let total_words = word_count(&clean);
        let total = positive_count + negative_count;

        let (sentiment, score, confidence, path) = if total == 0 {
            // Raw text goes to the estimator, not the normalized one.
            let (label, score, confidence) = self.fallback(text.unwrap_or_default());
            (label, score, confidence, ScoringPath::Fallback)
        } else {
            let score = (positive_count as f64 - negative_count as f64) / total as f64;
            let confidence = total as f64 / total_words.max(1) as f64;
            let label = label_for(score, LEXICON_POSITIVE_ABOVE, LEXICON_NEGATIVE_BELOW);
            (label, score, confidence, ScoringPath::Lexicon)
        };

        telemetry::record_text(sentiment, path);

        let result = SentimentResult {
            sentiment,
            score: round_to(score, 3),
            confidence: round_to(confidence.min(1.0), 3),
            details: SentimentDetails {
                positive_count,
                negative_count,
                neutral_count,
                total_words,
                sentiment_words: total,
            },
        };
        (result, path)
    }

    fn fallback(&self, raw: &str) -> (SentimentLabel, f64, f64) {
        match self.polarity.polarity(raw) {
            Ok(p) if p.is_finite() => {
                let p = p.clamp(-1.0, 1.0);
                let label = label_for(p, FALLBACK_POSITIVE_ABOVE, FALLBACK_NEGATIVE_BELOW);
                let score = if label == SentimentLabel::Neutral { 0.0 } else { p };
                (label, score, p.abs())
            }
            outcome => {
                debug!(
                    id = %telemetry::anon_hash(raw),
                    outcome = ?outcome,
                    "polarity fallback failed; using neutral"
                );
                telemetry::record_polarity_failure();
                (SentimentLabel::Neutral, 0.0, 0.0)
            }
        }
    }
}

fn label_for(score: f64, positive_above: f64, negative_below: f64) -> SentimentLabel {
    if score > positive_above {
        SentimentLabel::Positive
    } else if score < negative_below {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Round to `places` decimals, ties to even on the exact binary value.
///
/// Float formatting is correctly rounded, so `6.25` becomes `6.2` and
/// `0.0625` becomes `0.062`. Scaling by a power of ten first would not be.
pub(crate) fn round_to(x: f64, places: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.places$}").parse().unwrap_or(x)
}
