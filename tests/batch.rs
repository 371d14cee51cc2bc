// tests/batch.rs
use serde_json::json;
use thai_sentiment_analyzer::{CommentInput, SentimentAnalyzer, SentimentLabel};

const SAMPLE_COMMENTS: [&str; 5] = [
    "เนื้อหาดีมาก ให้ความรู้เยอะ 👍",
    "ไม่เห็นด้วยกับเรื่องนี้เลย แย่มาก",
    "อยากทราบรายละเอียดเพิ่มเติมครับ",
    "สุดยอดเลย ชอบมาก ❤️",
    "ไร้สาระ ไม่มีประโยชน์ 👎",
];

#[test]
fn sample_batch_distribution() {
    let a = SentimentAnalyzer::new();
    let b = a.analyze_texts(&SAMPLE_COMMENTS);

    assert_eq!(b.total_comments, 5);
    assert_eq!(b.sentiment_distribution.positive, 2);
    assert_eq!(b.sentiment_distribution.negative, 2);
    assert_eq!(b.sentiment_distribution.neutral, 1);
    assert_eq!(b.sentiment_percentages.positive, 40.0);
    assert_eq!(b.sentiment_percentages.negative, 40.0);
    assert_eq!(b.sentiment_percentages.neutral, 20.0);

    let mean: f64 = SAMPLE_COMMENTS
        .iter()
        .map(|c| a.analyze_sentiment(c).score)
        .sum::<f64>()
        / 5.0;
    assert!((b.average_score - mean).abs() < 1e-9);
    assert!((b.average_score - 0.18).abs() < 1e-9);
}

#[test]
fn empty_batch_does_not_divide() {
    let b = SentimentAnalyzer::new().analyze_batch(&[]);
    assert_eq!(b.total_comments, 0);
    assert_eq!(b.sentiment_distribution.total(), 0);
    assert_eq!(b.sentiment_percentages.positive, 0.0);
    assert_eq!(b.average_score, 0.0);
    assert!(b.individual_results.is_empty());
}

#[test]
fn order_is_preserved() {
    let texts = ["แย่", "ดี", "ทำไม", "ดี", "แย่"];
    let b = SentimentAnalyzer::new().analyze_texts(&texts);
    let labels: Vec<SentimentLabel> = b.individual_results.iter().map(|r| r.result.sentiment).collect();
    assert_eq!(
        labels,
        vec![
            SentimentLabel::Negative,
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
            SentimentLabel::Negative,
        ]
    );
    for (i, r) in b.individual_results.iter().enumerate() {
        assert_eq!(r.comment_id, json!(i));
        assert_eq!(r.original_text, texts[i]);
    }
}

#[test]
fn long_comments_are_truncated_in_preview() {
    let long = "ก".repeat(150);
    let short = "ข".repeat(50);
    let b = SentimentAnalyzer::new().analyze_texts(&[long.as_str(), short.as_str()]);

    let first = &b.individual_results[0].original_text;
    assert_eq!(first.chars().count(), 103);
    assert!(first.ends_with("..."));
    assert!(first.starts_with(&"ก".repeat(100)));

    assert_eq!(b.individual_results[1].original_text, short);
}

#[test]
fn mixed_records_and_strings_from_json() {
    let raw = r#"[
        "ชอบมาก",
        {"text": "ไม่ชอบเลย", "id": 1001},
        {"text": "ทำไมถึงเป็นแบบนี้", "id": {"platform": "fb", "n": 3}}
    ]"#;
    let comments: Vec<CommentInput> = serde_json::from_str(raw).unwrap();
    let b = SentimentAnalyzer::new().analyze_batch(&comments);

    assert_eq!(b.total_comments, 3);
    assert_eq!(b.individual_results[0].comment_id, json!(0));
    assert_eq!(b.individual_results[1].comment_id, json!(1001));
    assert_eq!(b.individual_results[2].comment_id, json!({"platform": "fb", "n": 3}));
    assert_eq!(b.sentiment_distribution.total(), 3);
}

#[test]
fn batch_serializes_to_expected_keys() {
    let b = SentimentAnalyzer::new().analyze_texts(&SAMPLE_COMMENTS);
    let v = serde_json::to_value(&b).unwrap();
    for key in [
        "total_comments",
        "sentiment_distribution",
        "sentiment_percentages",
        "average_score",
        "individual_results",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    let item = &v["individual_results"][1];
    for key in ["sentiment", "score", "confidence", "details", "comment_id", "original_text"] {
        assert!(item.get(key).is_some(), "missing item.{key}");
    }
}

#[test]
fn exact_ties_round_to_even() {
    // one positive among sixteen: 6.25% and a 0.0625 mean, both exact in binary
    let mut texts = vec!["ดี"];
    texts.extend(std::iter::repeat("ทำไม").take(15));
    let b = SentimentAnalyzer::new().analyze_texts(&texts);

    assert_eq!(b.sentiment_distribution.positive, 1);
    assert_eq!(b.sentiment_distribution.neutral, 15);
    assert_eq!(b.sentiment_percentages.positive, 6.2);
    assert_eq!(b.sentiment_percentages.neutral, 93.8);
    assert_eq!(b.average_score, 0.062);
}

#[test]
fn explicit_null_id_is_echoed() {
    let comments: Vec<CommentInput> =
        serde_json::from_str(r#"[{"text": "x", "id": null}, {"text": "y"}]"#).unwrap();
    let b = SentimentAnalyzer::new().analyze_batch(&comments);
    assert_eq!(b.individual_results[0].comment_id, serde_json::Value::Null);
    assert_eq!(b.individual_results[1].comment_id, json!(1));
}
