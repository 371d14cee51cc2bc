//! Runs the sample comments through the scorer and the batch aggregator and
//! prints a short summary (stdout/log only).

use thai_sentiment_analyzer::{telemetry, CommentInput, PostAnalyzer, SentimentAnalyzer};

const SAMPLE_COMMENTS: [&str; 5] = [
    "เนื้อหาดีมาก ให้ความรู้เยอะ 👍",
    "ไม่เห็นด้วยกับเรื่องนี้เลย แย่มาก",
    "อยากทราบรายละเอียดเพิ่มเติมครับ",
    "สุดยอดเลย ชอบมาก ❤️",
    "ไร้สาระ ไม่มีประโยชน์ 👎",
];

fn main() {
    telemetry::init_tracing(false);
    let analyzer = SentimentAnalyzer::new();

    for comment in SAMPLE_COMMENTS {
        let r = analyzer.analyze_sentiment(comment);
        println!("Comment: {comment}");
        println!(
            "Sentiment: {} (Score: {}, Confidence: {})",
            r.sentiment, r.score, r.confidence
        );
        println!("---");
    }

    let batch = analyzer.analyze_texts(&SAMPLE_COMMENTS);
    let pct = &batch.sentiment_percentages;
    println!();
    println!("Batch Analysis:");
    println!("Total Comments: {}", batch.total_comments);
    println!(
        "Sentiment Distribution: positive {}%, negative {}%, neutral {}%",
        pct.positive, pct.negative, pct.neutral
    );
    println!("Average Score: {}", batch.average_score);

    let comments: Vec<CommentInput> = SAMPLE_COMMENTS.iter().map(|&c| c.into()).collect();
    let report = PostAnalyzer::with_analyzer(analyzer)
        .analyze_post("https://www.facebook.com/story.php?story_fbid=12345", &comments);
    println!();
    println!("Post id: {}", report.post_id.as_deref().unwrap_or("-"));
    for rec in &report.recommendations {
        println!("- {rec}");
    }

    println!("sentiment-demo done");
}
