// src/post.rs
//! Post-level report: post id from the URL, batch analysis of its comments,
//! and recommendations.

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::batch::{BatchAnalysis, CommentInput};
use crate::recommend::generate_recommendations;
use crate::sentiment::SentimentAnalyzer;
use crate::telemetry;

/// Tried in order; the first capture group of the first match wins.
static POST_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/p/([^/]+)/",
        r"posts/([^/]+)",
        r"story_fbid=(\d+)",
        r"fbid=(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("post id regex"))
    .collect()
});

pub fn extract_post_id(url: &str) -> Option<String> {
    POST_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAnalysisReport {
    pub post_url: String,
    pub post_id: Option<String>,
    /// RFC 3339 (ISO-8601) UTC timestamp.
    pub analysis_timestamp: String,
    pub comments_analysis: BatchAnalysis,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostAnalyzer {
    analyzer: SentimentAnalyzer,
}

impl PostAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analyzer(analyzer: SentimentAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    pub fn analyze_post(&self, post_url: &str, comments: &[CommentInput]) -> PostAnalysisReport {
        self.analyze_post_at(post_url, comments, Utc::now())
    }

    /// Same as `analyze_post` with an explicit analysis time.
    pub fn analyze_post_at(
        &self,
        post_url: &str,
        comments: &[CommentInput],
        at: DateTime<Utc>,
    ) -> PostAnalysisReport {
        let post_id = extract_post_id(post_url);
        let comments_analysis = self.analyzer.analyze_batch(comments);
        let recommendations = generate_recommendations(&comments_analysis)
            .into_iter()
            .map(|r| r.message().to_string())
            .collect::<Vec<_>>();

        telemetry::record_post();
        info!(
            post_id = post_id.as_deref().unwrap_or("-"),
            comments = comments_analysis.total_comments,
            recommendations = recommendations.len(),
            "post analyzed"
        );

        PostAnalysisReport {
            post_url: post_url.to_string(),
            post_id,
            analysis_timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
            comments_analysis,
            recommendations,
        }
    }
}
