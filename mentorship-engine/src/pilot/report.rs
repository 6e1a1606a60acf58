//! Cohort-level pilot report.

use mentorship_model::{
    FeedbackRecord, GoalRecord, Person, PilotCohort, PilotOutcome, Role, SessionRecord,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::participant::evaluate_participant;

/// A participant's line in the cohort report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualOutcome {
    pub person_id: String,
    pub person_name: String,
    pub role: Role,
    pub outcome: PilotOutcome,
    pub score: u32,
    pub details: Vec<String>,
}

/// Aggregate evaluation of a pilot cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotEvaluationReport {
    pub pilot_id: String,
    pub pilot_name: String,
    pub total_participants: usize,
    pub successful_count: usize,
    /// Share of participants with a successful outcome (0-100)
    pub success_rate: f64,
    /// Mean participant score
    pub avg_engagement: f64,
    pub individual_outcomes: Vec<IndividualOutcome>,
}

/// Evaluate every enrolled participant and aggregate the cohort.
///
/// Participants are taken from `all_persons` in roster order. An empty
/// cohort reports a success rate and engagement of 0.
pub fn generate_report(
    pilot: &PilotCohort,
    all_persons: &[Person],
    all_sessions: &[SessionRecord],
    all_goals: &[GoalRecord],
    all_feedbacks: &[FeedbackRecord],
) -> PilotEvaluationReport {
    let individual_outcomes: Vec<IndividualOutcome> = all_persons
        .iter()
        .filter(|p| pilot.includes(&p.id))
        .map(|person| {
            let result =
                evaluate_participant(person, pilot, all_sessions, all_goals, all_feedbacks);
            IndividualOutcome {
                person_id: person.id.clone(),
                person_name: person.name.clone(),
                role: person.role,
                outcome: result.outcome,
                score: result.score,
                details: result.details,
            }
        })
        .collect();

    let total_participants = individual_outcomes.len();
    let successful_count = individual_outcomes
        .iter()
        .filter(|o| o.outcome == PilotOutcome::Successful)
        .count();

    let (success_rate, avg_engagement) = if total_participants == 0 {
        warn!(pilot_id = %pilot.id, "Pilot has no participants on the roster");
        (0.0, 0.0)
    } else {
        let total = total_participants as f64;
        let score_sum: u32 = individual_outcomes.iter().map(|o| o.score).sum();
        (
            successful_count as f64 / total * 100.0,
            f64::from(score_sum) / total,
        )
    };

    info!(
        pilot_id = %pilot.id,
        participants = total_participants,
        successful = successful_count,
        success_rate,
        "Pilot report generated"
    );

    PilotEvaluationReport {
        pilot_id: pilot.id.clone(),
        pilot_name: pilot.name.clone(),
        total_participants,
        successful_count,
        success_rate,
        avg_engagement,
        individual_outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use mentorship_model::{PilotStatus, SessionStatus};

    fn make_pilot(participants: &[&str]) -> PilotCohort {
        PilotCohort {
            id: "pilot-1".to_string(),
            name: "Q4 Product Design Pilot".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            min_sessions_required: 2,
            duration_months: 6,
            status: PilotStatus::Active,
            participant_ids: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_report_aggregates_participants() {
        let persons = vec![
            Person::mentor("1", "Sarah Chen"),
            Person::mentee("2", "Alex Rivera"),
            Person::admin("3", "David Admin"),
        ];
        let base = Utc.with_ymd_and_hms(2023, 10, 2, 9, 0, 0).unwrap();
        let sessions: Vec<SessionRecord> = (0..2)
            .map(|i| {
                SessionRecord::new(format!("s{}", i), "1", "2", base + Duration::weeks(i), SessionStatus::Completed)
            })
            .collect();
        let feedback = vec![
            FeedbackRecord::new("f1", "s0", "2", "1", 5).unwrap(),
            FeedbackRecord::new("f2", "s0", "1", "2", 5).unwrap(),
        ];

        let report = generate_report(&make_pilot(&["1", "2"]), &persons, &sessions, &[], &feedback);

        assert_eq!(report.total_participants, 2);
        // Mentor: 40 + 30 + 30; mentee without goals: 40 + 0 + 30
        assert_eq!(report.individual_outcomes[0].score, 100);
        assert_eq!(report.individual_outcomes[0].outcome, PilotOutcome::Successful);
        assert_eq!(report.individual_outcomes[1].score, 70);
        assert_eq!(report.individual_outcomes[1].outcome, PilotOutcome::NeedsImprovement);
        assert_eq!(report.successful_count, 1);
        assert_eq!(report.success_rate, 50.0);
        assert_eq!(report.avg_engagement, 85.0);
    }

    #[test]
    fn test_unknown_participant_ids_skipped() {
        let persons = vec![Person::mentee("2", "Alex Rivera")];
        let report = generate_report(&make_pilot(&["2", "missing"]), &persons, &[], &[], &[]);

        assert_eq!(report.total_participants, 1);
        assert_eq!(report.individual_outcomes[0].person_name, "Alex Rivera");
    }

    #[test]
    fn test_empty_cohort_reports_zero() {
        let persons = vec![Person::mentee("2", "Alex Rivera")];
        let report = generate_report(&make_pilot(&[]), &persons, &[], &[], &[]);

        assert_eq!(report.total_participants, 0);
        assert_eq!(report.success_rate, 0.0);
        assert_eq!(report.avg_engagement, 0.0);
        assert!(report.individual_outcomes.is_empty());
    }
}
