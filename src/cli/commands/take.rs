use crate::capture::CaptureFlow;
use crate::capture::photo::AttendancePhoto;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::confirmation::{self, View};
use crate::errors::{AppError, AppResult, Field, ValidationError};
use crate::models::attendance::AttendanceOutcome;
use crate::nav::{Navigator, Screen};
use crate::recognition::HttpRecognitionClient;
use crate::ui::messages::{error, header, info, success, warning};

use super::selection_from;

/// Handle the `take` command: validate, submit once, render the result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Take {
        photo,
        class,
        slot,
        json,
    } = cmd
    {
        let mut nav = Navigator::default();
        nav.go(Screen::TakeAttendance);
        if !*json {
            header(nav.current());
        }

        let mut flow = CaptureFlow::new(selection_from(class, *slot)?);
        if let Some(arg) = photo {
            flow.select_photo(AttendancePhoto::load(arg)?)?;
        }

        let service = HttpRecognitionClient::from_config(cfg)?;
        if !*json && flow.validate().is_ok() {
            info("Processing...");
        }

        let handoff = match flow.submit(&service) {
            Ok(h) => h,
            Err(AppError::Validation(v)) => {
                show_hint(&v);
                return Err(v.into());
            }
            Err(e) => {
                if let AppError::Server { status, .. } = &e
                    && *status > 0
                {
                    error(format!("Recognition service answered HTTP {status}"));
                }
                return Err(e);
            }
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&handoff)?);
            return Ok(());
        }

        nav.go(Screen::Success);
        match confirmation::render(Some(&handoff)) {
            View::Summary(summary) => {
                match summary.outcome {
                    AttendanceOutcome::Marked { .. } => {
                        success("Attendance recorded successfully!")
                    }
                    _ => warning(summary.outcome.message()),
                }
                header(nav.current());
                println!("{}", summary);
                println!(
                    "View records: rattendance {} (same class flags)",
                    Screen::Records.command()
                );
            }
            View::Redirect(screen) => {
                nav.go(screen);
            }
        }
    }
    Ok(())
}

fn show_hint(e: &ValidationError) {
    let hint = match e.field {
        Field::Photo => "--photo FILE (or - for stdin)",
        Field::TimeSlot => "--slot morning|afternoon|evening",
        _ => "--department --course --branch --year --semester",
    };
    info(format!("Missing {}: use {}", e.field, hint));
}
