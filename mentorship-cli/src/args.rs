//! Command-line arguments for the mentorship CLI.
//!
//! Every option can also come from the environment (or a `.env` file).

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use mentorship_model::PilotStatus;
use std::path::PathBuf;

/// Mentorship - matching, governance and pilot evaluation from a program snapshot
#[derive(Parser, Debug, Clone)]
#[command(name = "mentorship")]
#[command(about = "Run mentorship engine decisions against a program snapshot")]
pub struct Args {
    /// Program snapshot (YAML, or JSON when the file ends in .json)
    #[arg(long, env = "MENTORSHIP_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Engine configuration (YAML); defaults apply when omitted
    #[arg(long, env = "MENTORSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Id of the acting program admin
    #[arg(long, env = "MENTORSHIP_ACTOR")]
    pub actor: Option<String>,

    /// Evaluation instant (RFC 3339); defaults to the current time
    #[arg(long, env = "MENTORSHIP_NOW")]
    pub now: Option<DateTime<Utc>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend mentors for unassigned mentees
    Match,

    /// Check whether a mentee may be assigned to a mentor
    Validate { mentee: String, mentor: String },

    /// Validate and commit an assignment
    Assign { mentee: String, mentor: String },

    /// Set a mentee's mentor without validation; omit the mentor to release
    Override { mentee: String, mentor: Option<String> },

    /// List every mentee with relationship health
    Pairs,

    /// Program-wide analytics
    Analytics,

    /// Evaluate a pilot cohort
    Report { pilot: String },

    /// Move a pilot to a new status
    PilotStatus { pilot: String, status: StatusArg },

    /// Reminders for sessions starting soon
    Reminders {
        /// Look-ahead window; overrides the configured one
        #[arg(long)]
        window_hours: Option<u32>,
    },
}

impl Command {
    /// Whether the command runs on behalf of an admin.
    pub fn needs_actor(&self) -> bool {
        !matches!(self, Command::Reminders { .. })
    }
}

/// Pilot status as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Draft,
    Active,
    Completed,
}

impl From<StatusArg> for PilotStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Draft => PilotStatus::Draft,
            StatusArg::Active => PilotStatus::Active,
            StatusArg::Completed => PilotStatus::Completed,
        }
    }
}

impl Args {
    /// Validate the arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.command.needs_actor() && self.actor.is_none() {
            return Err("--actor (MENTORSHIP_ACTOR) is required for this command".to_string());
        }

        if let Command::Reminders { window_hours: Some(0) } = self.command {
            return Err("--window-hours must be greater than zero".to_string());
        }

        Ok(())
    }

    /// The evaluation instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mentorship").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_assign() {
        let args = parse(&[
            "--snapshot",
            "program.yaml",
            "--actor",
            "3",
            "--now",
            "2024-06-01T08:00:00Z",
            "assign",
            "5",
            "4",
        ]);

        assert!(matches!(args.command, Command::Assign { ref mentee, ref mentor } if mentee == "5" && mentor == "4"));
        assert_eq!(args.now(), Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_actor_required() {
        let args = parse(&["--snapshot", "program.yaml", "pairs"]);
        assert!(args.validate().is_err());

        let args = parse(&["--snapshot", "program.yaml", "reminders", "--window-hours", "48"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_pilot_status_arg() {
        let args = parse(&["--snapshot", "p.yaml", "--actor", "3", "pilot-status", "pilot-1", "completed"]);
        match args.command {
            Command::PilotStatus { status, .. } => assert_eq!(PilotStatus::from(status), PilotStatus::Completed),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
