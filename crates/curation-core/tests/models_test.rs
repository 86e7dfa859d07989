use curation_core::models::*;

#[test]
fn status_serializes_kebab_case() {
    let json = serde_json::to_string(&Status::NeedsWork).unwrap();
    assert_eq!(json, "\"needs-work\"");
    let back: Status = serde_json::from_str("\"converged\"").unwrap();
    assert_eq!(back, Status::Converged);
}

#[test]
fn file_record_deserializes_with_missing_optional_fields() {
    let json = r#"{"id": "f1", "confidence": {"overall": 0.6, "iteration": 2}}"#;
    let file: FileRecord = serde_json::from_str(json).unwrap();
    assert_eq!(file.id, "f1");
    assert!(file.categories.is_empty());
    assert_eq!(file.iteration(), 2);
    assert_eq!(file.status(), Status::NeedsWork);
}

#[test]
fn unanalyzed_file_defaults_to_first_iteration() {
    let file = FileRecord::new("f1", "a.md");
    assert_eq!(file.iteration(), 1);
    assert!(!file.is_analyzed());
    assert_eq!(file.status(), Status::Unprocessed);
}

#[test]
fn suggestion_priority_score_weighs_easy_like_high() {
    let make = |priority, difficulty, expected| Suggestion {
        id: "s".into(),
        scope: SuggestionScope::General,
        title: String::new(),
        description: String::new(),
        priority,
        difficulty,
        expected_improvement: expected,
        time_estimate: "1 min".into(),
        action: serde_json::Value::Null,
    };
    let high_hard = make(Priority::High, Difficulty::Hard, 10);
    let low_easy = make(Priority::Low, Difficulty::Easy, 10);
    assert_eq!(high_hard.priority_score(), low_easy.priority_score());
    assert_eq!(
        make(Priority::High, Difficulty::Easy, 20).priority_score(),
        8.0
    );
}

#[test]
fn suggestion_scope_serializes_dimension_or_general() {
    let dim = serde_json::to_value(SuggestionScope::Dimension(Dimension::Categorical)).unwrap();
    assert_eq!(dim, serde_json::json!({"dimension": "categorical"}));
    let general = serde_json::to_value(SuggestionScope::General).unwrap();
    assert_eq!(general, serde_json::json!("general"));
}

#[test]
fn events_are_tagged_by_name() {
    let event = CurationEvent::CategoryAccepted {
        file_id: "f1".into(),
        category: "rust".into(),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "category_accepted");
    assert_eq!(event.name(), "category_accepted");
}

#[test]
fn status_counts_track_each_status() {
    let mut counts = StatusCounts::default();
    counts.increment(Status::Converged);
    counts.increment(Status::Converged);
    counts.increment(Status::Stagnant);
    assert_eq!(counts.get(Status::Converged), 2);
    assert_eq!(counts.get(Status::Stagnant), 1);
    assert_eq!(counts.total(), 3);
}
