use std::io::Write;
use std::time::Duration;

use super::*;
use crate::backend::BackendKind;
use crate::scoring::ClassificationLabel::{Correct, Incorrect, Unanswered};

#[test]
fn test_summarize_reference_counts() {
    let labels = [Correct, Correct, Correct, Incorrect, Unanswered];
    let summary = summarize(&labels, &[]);

    assert_eq!(summary.counts.correct, 3);
    assert_eq!(summary.counts.incorrect, 1);
    assert_eq!(summary.counts.unanswered, 1);
    assert_eq!(summary.precision, 0.75);
    assert_eq!(summary.recall, 0.75);
    assert_eq!(summary.f1, 0.75);
    assert_eq!(summary.average_latency, Duration::ZERO);
}

#[test]
fn test_summarize_is_idempotent() {
    let labels = [Correct, Incorrect, Unanswered, Correct, Incorrect, Incorrect];
    let latencies = [
        Duration::from_millis(800),
        Duration::from_millis(1200),
        Duration::from_millis(450),
    ];

    let first = summarize(&labels, &latencies);
    let second = summarize(&labels, &latencies);
    assert_eq!(first, second);
}

#[test]
fn test_summarize_empty() {
    let summary = summarize(&[], &[]);

    assert_eq!(summary.precision, 0.0);
    assert_eq!(summary.recall, 0.0);
    assert_eq!(summary.f1, 0.0);
    assert_eq!(summary.counts.total(), 0);
}

#[test]
fn test_summarize_only_unanswered() {
    let summary = summarize(&[Unanswered, Unanswered], &[]);

    assert_eq!(summary.precision, 0.0);
    assert_eq!(summary.recall, 0.0);
    assert_eq!(summary.f1, 0.0);
}

#[test]
fn test_summarize_only_incorrect() {
    let summary = summarize(&[Incorrect], &[]);

    // No unanswered questions: recall's denominator is correct + unanswered = 0.
    assert_eq!(summary.precision, 0.0);
    assert_eq!(summary.recall, 0.0);
}

#[test]
fn test_summarize_all_correct() {
    let summary = summarize(&[Correct, Correct], &[]);

    assert_eq!(summary.precision, 1.0);
    assert_eq!(summary.recall, 1.0);
    assert_eq!(summary.f1, 1.0);
}

#[test]
fn test_summarize_average_latency() {
    let latencies = [
        Duration::from_millis(1000),
        Duration::from_millis(2000),
        Duration::from_millis(3000),
    ];
    let summary = summarize(&[Correct, Correct, Correct], &latencies);

    assert_eq!(summary.average_latency, Duration::from_secs(2));
    assert_eq!(summary.average_latency_secs(), 2.0);
}

#[test]
fn test_rounded_for_display() {
    // precision 2/3, recall 2/4.
    let summary = summarize(&[Correct, Correct, Incorrect, Unanswered, Unanswered], &[]);
    let rounded = summary.rounded();

    assert_eq!(rounded.precision, 0.67);
    assert_eq!(rounded.recall, 0.5);
    assert_eq!(rounded.f1, 0.57);
    assert_eq!(rounded.counts, summary.counts);
}

#[test]
fn test_summary_display() {
    let summary = summarize(&[Correct, Correct, Correct, Incorrect, Unanswered], &[]);
    let rendered = summary.to_string();

    assert!(rendered.contains("precision=0.75"));
    assert!(rendered.contains("TP=3"));
    assert!(rendered.contains("FN=1"));
}

#[test]
fn test_label_counts_from_labels() {
    let counts = LabelCounts::from_labels(&[Correct, Unanswered, Unanswered]);
    assert_eq!(counts.correct, 1);
    assert_eq!(counts.incorrect, 0);
    assert_eq!(counts.unanswered, 2);
    assert_eq!(counts.total(), 3);
}

fn write_results(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_results_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = summarize_results_file(&dir.path().join("none.csv"), &BackendKind::ALL).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_results_file_summaries() {
    let file = write_results(
        "question,intent,expected_team,xai_response,xai_status,gemini_response,gemini_status\n\
         q1,Ask_Team,barcelona,a,TP,b,FP\n\
         q2,Ask_Team,barcelona,a,TP,b,FN\n\
         q3,Ask_Team,barcelona,a,TP,b,TP\n\
         q4,Ask_Team,barcelona,a,FP,b,TP\n\
         q5,Ask_Team,barcelona,a,FN,b,??\n",
    );

    let summaries = summarize_results_file(file.path(), &BackendKind::ALL)
        .unwrap()
        .expect("file exists");

    assert_eq!(summaries.len(), 2);

    let xai = &summaries[0];
    assert_eq!(xai.backend, BackendKind::Xai);
    assert_eq!(xai.summary.counts.correct, 3);
    assert_eq!(xai.summary.precision, 0.75);
    assert_eq!(xai.summary.recall, 0.75);

    let gemini = &summaries[1];
    assert_eq!(gemini.backend, BackendKind::Gemini);
    assert_eq!(gemini.summary.counts.total(), 4);
    assert_eq!(gemini.summary.counts.correct, 2);
}

#[test]
fn test_results_file_skips_missing_columns() {
    let file = write_results("question,xai_status\nq1,TP\nq2,FP\n");

    let summaries = summarize_results_file(file.path(), &BackendKind::ALL)
        .unwrap()
        .unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].backend, BackendKind::Xai);
    assert_eq!(summaries[0].summary.precision, 0.5);
}
