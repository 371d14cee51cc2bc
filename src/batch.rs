// src/batch.rs
//! Batch aggregation over a list of comments.
//!
//! Comments arrive either as plain strings or as `{ "text": .., "id": .. }`
//! records. Results keep input order; `comment_id` is the record id when
//! the key is present (even if it is `null`), otherwise the 0-based position.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::normalize::truncate_preview;
use crate::sentiment::{round_to, SentimentAnalyzer, SentimentLabel, SentimentResult};
use crate::telemetry;

/// One incoming comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentInput {
    Text(String),
    Record {
        #[serde(default)]
        text: String,
        /// `None` when the key is absent; `Some(Value::Null)` for `"id": null`.
        #[serde(
            default,
            deserialize_with = "present_id",
            skip_serializing_if = "Option::is_none"
        )]
        id: Option<Value>,
    },
}

fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CommentInput {
    pub fn text(&self) -> &str {
        match self {
            CommentInput::Text(t) => t,
            CommentInput::Record { text, .. } => text,
        }
    }

    /// Record id (a present `null` included), or the position in the batch.
    pub fn id_or(&self, index: usize) -> Value {
        match self {
            CommentInput::Record { id: Some(id), .. } => id.clone(),
            _ => Value::from(index),
        }
    }
}

impl From<&str> for CommentInput {
    fn from(s: &str) -> Self {
        CommentInput::Text(s.to_string())
    }
}

impl From<String> for CommentInput {
    fn from(s: String) -> Self {
        CommentInput::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAnalysis {
    #[serde(flatten)]
    pub result: SentimentResult,
    pub comment_id: Value,
    /// First 100 characters, with "..." when cut.
    pub original_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn bump(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Percentages rounded to 1 decimal each; they need not sum to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentPercentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentPercentages {
    fn from_counts(counts: &SentimentCounts, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        let pct = |n: usize| round_to(n as f64 / total as f64 * 100.0, 1);
        Self {
            positive: pct(counts.positive),
            negative: pct(counts.negative),
            neutral: pct(counts.neutral),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub total_comments: usize,
    pub sentiment_distribution: SentimentCounts,
    pub sentiment_percentages: SentimentPercentages,
    pub average_score: f64,
    pub individual_results: Vec<CommentAnalysis>,
}

impl BatchAnalysis {
    pub fn empty() -> Self {
        Self {
            total_comments: 0,
            sentiment_distribution: SentimentCounts::default(),
            sentiment_percentages: SentimentPercentages::default(),
            average_score: 0.0,
            individual_results: Vec::new(),
        }
    }
}

impl SentimentAnalyzer {
    /// Score every comment and aggregate label counts, percentages and the mean score.
    pub fn analyze_batch(&self, comments: &[CommentInput]) -> BatchAnalysis {
        telemetry::record_batch(comments.len());
        if comments.is_empty() {
            return BatchAnalysis::empty();
        }

        let mut counts = SentimentCounts::default();
        let mut score_sum = 0.0_f64;
        let mut results = Vec::with_capacity(comments.len());

        for (i, comment) in comments.iter().enumerate() {
            let text = comment.text();
            let result = self.analyze_sentiment(text);
            counts.bump(result.sentiment);
            score_sum += result.score;
            results.push(CommentAnalysis {
                result,
                comment_id: comment.id_or(i),
                original_text: truncate_preview(text),
            });
        }

        let total = comments.len();
        let batch = BatchAnalysis {
            total_comments: total,
            sentiment_distribution: counts,
            sentiment_percentages: SentimentPercentages::from_counts(&counts, total),
            average_score: round_to(score_sum / total as f64, 3),
            individual_results: results,
        };

        info!(
            total,
            positive = counts.positive,
            negative = counts.negative,
            neutral = counts.neutral,
            average = batch.average_score,
            "batch analyzed"
        );
        batch
    }

    /// Convenience for plain string slices.
    pub fn analyze_texts<S: AsRef<str>>(&self, texts: &[S]) -> BatchAnalysis {
        let comments: Vec<CommentInput> = texts
            .iter()
            .map(|t| CommentInput::Text(t.as_ref().to_string()))
            .collect();
        self.analyze_batch(&comments)
    }
}
