// tests/metrics.rs
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use thai_sentiment_analyzer::{telemetry, PostAnalyzer, SentimentAnalyzer};

/// (name, labels, counter value)
type Row = (String, Vec<(String, String)>, u64);

fn counter_total(rows: &[Row], name: &str, label: Option<(&str, &str)>) -> u64 {
    rows.iter()
        .filter(|(n, ..)| n == name)
        .filter(|(_, labels, _)| match label {
            Some((k, v)) => labels.iter().any(|(lk, lv)| lk == k && lv == v),
            None => true,
        })
        .map(|(.., value)| *value)
        .sum()
}

#[test]
fn scoring_emits_counters() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let analyzer = SentimentAnalyzer::new();
        analyzer.analyze_texts(&["ดีมาก", "แย่มาก", "อยากทราบรายละเอียด", ""]);
        PostAnalyzer::with_analyzer(analyzer).analyze_post("https://example.com/posts/9", &[]);
    });

    let rows: Vec<Row> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter_map(|(key, _unit, _desc, value)| match value {
            DebugValue::Counter(n) => {
                let k = key.key();
                let labels = k
                    .labels()
                    .map(|l| (l.key().to_string(), l.value().to_string()))
                    .collect();
                Some((k.name().to_string(), labels, n))
            }
            _ => None,
        })
        .collect();

    assert_eq!(counter_total(&rows, telemetry::TEXTS_TOTAL, None), 4);
    assert_eq!(counter_total(&rows, telemetry::TEXTS_TOTAL, Some(("path", "lexicon"))), 2);
    assert_eq!(counter_total(&rows, telemetry::TEXTS_TOTAL, Some(("path", "empty"))), 1);
    assert_eq!(counter_total(&rows, telemetry::TEXTS_TOTAL, Some(("label", "negative"))), 1);
    // Thai text without markers: the English estimator declines
    assert_eq!(counter_total(&rows, telemetry::POLARITY_FAILURES_TOTAL, None), 1);
    assert_eq!(counter_total(&rows, telemetry::BATCHES_TOTAL, None), 2);
    assert_eq!(counter_total(&rows, telemetry::POSTS_TOTAL, None), 1);
}
