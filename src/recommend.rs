// src/recommend.rs
//! Human-readable guidance derived from a batch analysis.
//!
//! Rules are evaluated in a fixed order and each one appends independently,
//! with two exceptions: the comment-volume pair (<5 / >50) and the average
//! score pair (>0.5 / <-0.5) are `if / else if`, so at most one of each fires.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::batch::BatchAnalysis;

pub const HIGH_POSITIVE_PCT: f64 = 70.0;
pub const HIGH_NEGATIVE_PCT: f64 = 50.0;
pub const LOW_ENGAGEMENT_BELOW: usize = 5;
pub const HIGH_ENGAGEMENT_ABOVE: usize = 50;
pub const OVERALL_POSITIVE_ABOVE: f64 = 0.5;
pub const OVERALL_NEGATIVE_BELOW: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Mostly positive: good candidate to amplify or use as a case study.
    HighPositive,
    /// Mostly negative: review the content or add clarification.
    HighNegative,
    /// Few comments: promote the post for more engagement.
    LowEngagement,
    /// Many comments: the content drew strong interest.
    HighEngagement,
    /// Average score clearly positive.
    OverallPositive,
    /// Overall negative: the content needs improvement.
    OverallNegative,
}

impl Recommendation {
    /// The sentence shown to editors.
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::HighPositive => {
                "📈 ความคิดเห็นเป็นบวกสูง - เหมาะสำหรับการขยายผลหรือใช้เป็น case study"
            }
            Recommendation::HighNegative => {
                "⚠️ ความคิดเห็นเป็นลบสูง - ควรทบทวนเนื้อหาหรือชี้แจงเพิ่มเติม"
            }
            Recommendation::LowEngagement => {
                "💬 ความคิดเห็นน้อย - ควรเพิ่ม engagement หรือ promote เพิ่มเติม"
            }
            Recommendation::HighEngagement => "🔥 ความคิดเห็นมาก - เนื้อหาได้รับความสนใจสูง",
            Recommendation::OverallPositive => "✅ คะแนนความรู้สึกเป็นบวกโดยรวม",
            Recommendation::OverallNegative => {
                "❌ คะแนนความรู้สึกเป็นลบโดยรวม - ต้องการการปรับปรุง"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn generate_recommendations(analysis: &BatchAnalysis) -> Vec<Recommendation> {
    let pct = &analysis.sentiment_percentages;
    let total = analysis.total_comments;
    let mut out = Vec::new();

    if pct.positive > HIGH_POSITIVE_PCT {
        out.push(Recommendation::HighPositive);
    }
    if pct.negative > HIGH_NEGATIVE_PCT {
        out.push(Recommendation::HighNegative);
    }

    if total < LOW_ENGAGEMENT_BELOW {
        out.push(Recommendation::LowEngagement);
    } else if total > HIGH_ENGAGEMENT_ABOVE {
        out.push(Recommendation::HighEngagement);
    }

    if analysis.average_score > OVERALL_POSITIVE_ABOVE {
        out.push(Recommendation::OverallPositive);
    } else if analysis.average_score < OVERALL_NEGATIVE_BELOW {
        out.push(Recommendation::OverallNegative);
    }

    out
}
