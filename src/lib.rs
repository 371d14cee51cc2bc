// src/lib.rs
//! Rule-based Thai sentiment analysis for social-media comment batches.
//!
//! Pipeline: normalize → score each comment against the marker lexicon
//! (falling back to a general polarity estimate when nothing matches) →
//! aggregate the batch → derive recommendations for the post.
//!
//! Everything here is a pure function of its inputs plus the read-only lexicon;
//! a `SentimentAnalyzer` can be shared across threads freely.

pub mod batch;
pub mod config;
pub mod lexicon;
pub mod normalize;
pub mod polarity;
pub mod post;
pub mod recommend;
pub mod sentiment;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use batch::{
    BatchAnalysis, CommentAnalysis, CommentInput, SentimentCounts, SentimentPercentages,
};
pub use config::AnalyzerConfig;
pub use lexicon::{Category, Lexicon};
pub use normalize::normalize;
pub use polarity::{PatternPolarity, PolarityError, PolarityEstimator};
pub use post::{extract_post_id, PostAnalysisReport, PostAnalyzer};
pub use recommend::{generate_recommendations, Recommendation};
pub use sentiment::{
    ScoringPath, SentimentAnalyzer, SentimentDetails, SentimentLabel, SentimentResult,
};
