//! Mentorship CLI - run engine decisions against a snapshot file
//!
//! Prints pretty JSON on stdout; logs go to stderr.

mod args;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{Args, Command};
use mentorship_engine::{due_reminders, EngineConfig, ProgramAdmin, ProgramSnapshot};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mentorship_engine={0},mentorship={0}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(2);
    }

    let config = match &args.config {
        Some(path) => EngineConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let snapshot = ProgramSnapshot::load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;
    info!(
        persons = snapshot.persons.len(),
        sessions = snapshot.sessions.len(),
        pilots = snapshot.pilots.len(),
        "Snapshot loaded"
    );

    let now = args.now();
    debug!(%now, "Evaluation instant");
    run(&args, ProgramAdmin::new(config), &snapshot, now)
}

fn run(
    args: &Args,
    service: ProgramAdmin,
    snapshot: &ProgramSnapshot,
    now: chrono::DateTime<chrono::Utc>,
) -> anyhow::Result<()> {
    let actor = || -> anyhow::Result<_> {
        let id = args.actor.as_deref().context("--actor is required")?;
        Ok(snapshot.person(id)?)
    };

    match &args.command {
        Command::Match => print_json(&service.recommended_matches(actor()?, snapshot)?),
        Command::Validate { mentee, mentor } => {
            print_json(&service.validate(actor()?, snapshot, mentee, mentor)?)
        }
        Command::Assign { mentee, mentor } => {
            print_json(&service.assign_mentor(actor()?, snapshot, mentee, mentor, now)?)
        }
        Command::Override { mentee, mentor } => print_json(&service.override_assignment(
            actor()?,
            snapshot,
            mentee,
            mentor.as_deref(),
            now,
        )?),
        Command::Pairs => print_json(&service.pair_list(actor()?, snapshot, now)?),
        Command::Analytics => print_json(&service.analytics(actor()?, snapshot)?),
        Command::Report { pilot } => print_json(&service.pilot_report(actor()?, snapshot, pilot)?),
        Command::PilotStatus { pilot, status } => print_json(&service.update_pilot_status(
            actor()?,
            snapshot,
            pilot,
            (*status).into(),
            now,
        )?),
        Command::Reminders { window_hours } => {
            let window = window_hours.unwrap_or(service.config().reminders.window_hours);
            print_json(&due_reminders(&snapshot.sessions, now, window))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
