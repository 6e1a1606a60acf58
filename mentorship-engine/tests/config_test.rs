//! Config loading and defaults integration tests

use mentorship_engine::{EngineConfig, EngineError};

#[test]
fn test_partial_yaml_keeps_defaults() {
    let yaml = r#"
program:
  max_mentees_per_mentor: 4
  inactivity_threshold_days: 14
matching:
  weights:
    shared_slot: 20
"#;

    let config = EngineConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.program.max_mentees_per_mentor, 4);
    assert_eq!(config.program.inactivity_threshold_days, 14);
    assert_eq!(config.program.min_sessions_for_completion, 6);
    assert_eq!(config.matching.max_mentees_per_mentor, 2);
    assert_eq!(config.matching.weights.shared_slot, 20);
    assert_eq!(config.matching.weights.skill_overlap, 25);
    assert_eq!(config.reminders.window_hours, 24);
}

#[test]
fn test_yaml_round_trip() {
    let mut config = EngineConfig::default();
    config.program.max_cancellations_allowed = 5;
    config.matching.max_mentees_per_mentor = 3;

    let yaml = config.to_yaml().unwrap();
    let parsed = EngineConfig::from_yaml(&yaml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_zero_matching_capacity_rejected() {
    let yaml = r#"
matching:
  max_mentees_per_mentor: 0
"#;

    let err = EngineConfig::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_negative_penalty_rejected() {
    let yaml = r#"
matching:
  weights:
    no_overlap_penalty: -40
"#;

    let err = EngineConfig::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, EngineError::Config(ref msg) if msg.contains("no_overlap_penalty")));
}

#[test]
fn test_large_weight_scores_without_overflow() {
    use mentorship_engine::matching::run_auto_matching_with;
    use mentorship_model::Person;

    let config = EngineConfig::from_yaml("matching:\n  weights:\n    skill_overlap: 2000000000\n").unwrap();
    let mentor = Person::mentor("1", "Sarah Chen").with_skills(&["React", "System Design"]);
    let mentee = Person::mentee("2", "Alex Rivera").with_interests(&["React", "System Design"]);

    let recs = run_auto_matching_with(&config.matching, &[mentor], &[mentee]);

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].score, i32::MAX as u32);
}

#[test]
fn test_config_file_loading() {
    let path = std::env::temp_dir().join(format!("mentorship-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "reminders:\n  window_hours: 48\n").unwrap();

    let config = EngineConfig::from_yaml_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.reminders.window_hours, 48);
}

#[test]
fn test_missing_config_file() {
    let err = EngineConfig::from_yaml_file("/nonexistent/mentorship.yaml").unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}
