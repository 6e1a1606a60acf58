//! Pilot evaluation integration tests
//!
//! Full cohort scenarios through `generate_report` and the admin facade.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use mentorship_engine::{generate_report, EngineError, ProgramAdmin, ProgramSnapshot};
use mentorship_model::{
    FeedbackRecord, GoalRecord, GoalStatus, Person, PilotCohort, PilotOutcome, PilotStatus,
    SessionRecord, SessionStatus,
};

// ============================================================================
// Fixtures
// ============================================================================

fn pilot_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 2, 9, 0, 0).unwrap()
}

fn make_pilot(participants: &[&str]) -> PilotCohort {
    PilotCohort {
        id: "pilot-1".to_string(),
        name: "Q4 Product Design Pilot".to_string(),
        start_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        min_sessions_required: 6,
        duration_months: 6,
        status: PilotStatus::Active,
        participant_ids: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn make_sessions(mentor: &str, mentee: &str, completed: usize) -> Vec<SessionRecord> {
    (0..completed)
        .map(|i| {
            SessionRecord::new(
                format!("{}-{}-{}", mentor, mentee, i),
                mentor,
                mentee,
                pilot_start() + Duration::weeks(i as i64),
                SessionStatus::Completed,
            )
        })
        .collect()
}

fn make_goals(mentee: &str, total: usize, completed: usize) -> Vec<GoalRecord> {
    (0..total)
        .map(|i| {
            let goal = GoalRecord::new(
                format!("{}-g{}", mentee, i),
                mentee,
                format!("Goal {}", i),
                pilot_start(),
                pilot_start() + Duration::days(90),
            );
            if i < completed {
                goal.with_status(GoalStatus::Completed)
            } else {
                goal.with_status(GoalStatus::InProgress)
            }
        })
        .collect()
}

fn make_feedback(to: &str, ratings: &[u8]) -> Vec<FeedbackRecord> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, r)| FeedbackRecord::new(format!("{}-f{}", to, i), "s0", "1", to, *r).unwrap())
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_fully_engaged_mentee_is_successful() {
    let persons = vec![Person::mentor("1", "Sarah Chen"), Person::mentee("2", "Alex Rivera")];
    let report = generate_report(
        &make_pilot(&["2"]),
        &persons,
        &make_sessions("1", "2", 6),
        &make_goals("2", 2, 2),
        &make_feedback("2", &[5]),
    );

    let outcome = &report.individual_outcomes[0];
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.outcome, PilotOutcome::Successful);
    assert_eq!(
        outcome.details,
        vec![
            "6/6 sessions completed".to_string(),
            "2/2 goals achieved".to_string(),
            "Avg Feedback Rating: 5.0/5.0".to_string(),
        ]
    );
    assert_eq!(report.success_rate, 100.0);
}

#[test]
fn test_disengaged_mentee_is_unsuccessful() {
    let persons = vec![Person::mentee("2", "Alex Rivera")];
    let report = generate_report(
        &make_pilot(&["2"]),
        &persons,
        &make_sessions("1", "2", 3),
        &make_goals("2", 2, 0),
        &[],
    );

    let outcome = &report.individual_outcomes[0];
    assert_eq!(outcome.score, 20);
    assert_eq!(outcome.outcome, PilotOutcome::Unsuccessful);
    assert_eq!(outcome.details[2], "Avg Feedback Rating: 0.0/5.0");
    assert_eq!(report.successful_count, 0);
}

#[test]
fn test_poor_feedback_needs_improvement() {
    let persons = vec![Person::mentee("2", "Alex Rivera")];
    let report = generate_report(
        &make_pilot(&["2"]),
        &persons,
        &make_sessions("1", "2", 6),
        &make_goals("2", 2, 2),
        &make_feedback("2", &[1, 2]),
    );

    let outcome = &report.individual_outcomes[0];
    assert_eq!(outcome.score, 79);
    assert_eq!(outcome.outcome, PilotOutcome::NeedsImprovement);
}

#[test]
fn test_high_score_without_required_sessions_is_not_successful() {
    // Mentors get full goal credit: 5/6 sessions + goals + perfect feedback
    let persons = vec![Person::mentor("1", "Sarah Chen")];
    let report = generate_report(
        &make_pilot(&["1"]),
        &persons,
        &make_sessions("1", "2", 5),
        &[],
        &make_feedback("1", &[5]),
    );

    let outcome = &report.individual_outcomes[0];
    assert_eq!(outcome.score, 93);
    assert_eq!(outcome.outcome, PilotOutcome::NeedsImprovement);
}

#[test]
fn test_mixed_cohort_aggregates() {
    let persons = vec![
        Person::mentor("1", "Sarah Chen"),
        Person::mentee("2", "Alex Rivera"),
        Person::mentee("5", "Elena Vance"),
        Person::admin("3", "David Admin"),
    ];
    let mut sessions = make_sessions("1", "2", 6);
    sessions.extend(make_sessions("1", "5", 3));
    let mut goals = make_goals("2", 2, 2);
    goals.extend(make_goals("5", 2, 0));
    let mut feedback = make_feedback("2", &[5]);
    feedback.extend(make_feedback("1", &[5, 5]));

    let report = generate_report(&make_pilot(&["1", "2", "5"]), &persons, &sessions, &goals, &feedback);

    assert_eq!(report.total_participants, 3);
    // Mentor 100, Alex 100, Elena 20
    assert_eq!(report.successful_count, 2);
    assert!((report.success_rate - 200.0 / 3.0).abs() < 1e-9);
    assert!((report.avg_engagement - 220.0 / 3.0).abs() < 1e-9);
}

// ============================================================================
// Through the facade
// ============================================================================

#[test]
fn test_pilot_report_via_admin() {
    let snapshot = ProgramSnapshot {
        persons: vec![Person::mentee("2", "Alex Rivera"), Person::admin("3", "David Admin")],
        sessions: make_sessions("1", "2", 6),
        goals: make_goals("2", 2, 2),
        feedbacks: make_feedback("2", &[5]),
        pilots: vec![make_pilot(&["2"])],
    };
    let admin = Person::admin("3", "David Admin");
    let service = ProgramAdmin::default();

    let report = service.pilot_report(&admin, &snapshot, "pilot-1").unwrap();
    assert_eq!(report.pilot_name, "Q4 Product Design Pilot");
    assert_eq!(report.successful_count, 1);

    let err = service.pilot_report(&admin, &snapshot, "pilot-9").unwrap_err();
    assert!(matches!(err, EngineError::PilotNotFound(ref id) if id == "pilot-9"));
}

#[test]
fn test_pilot_status_change() {
    let snapshot = ProgramSnapshot {
        pilots: vec![make_pilot(&[])],
        ..Default::default()
    };
    let admin = Person::admin("3", "David Admin");
    let now = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();

    let change = ProgramAdmin::default()
        .update_pilot_status(&admin, &snapshot, "pilot-1", PilotStatus::Completed, now)
        .unwrap();

    assert_eq!(change.from, PilotStatus::Active);
    assert_eq!(change.to, PilotStatus::Completed);
    assert_eq!(change.audit.details["to"], "completed");
    // Snapshot is untouched
    assert_eq!(snapshot.pilots[0].status, PilotStatus::Active);
}
