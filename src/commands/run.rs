//! Run command: handle one lifecycle event

use console::Style;

use super::helpers::{CliDispatcher, open_dispatcher, plural};
use crate::config::Settings;
use crate::dispatch::DispatchReport;
use crate::error::Result;
use crate::reconcile::{AutoFetchOutcome, PendingOutcome};

/// Run command
pub fn run(settings: &Settings) -> Result<()> {
    let mut dispatcher = open_dispatcher(settings)?;
    dispatch_and_report(&mut dispatcher)
}

/// Dispatch once and print what happened
pub fn dispatch_and_report(dispatcher: &mut CliDispatcher) -> Result<()> {
    let report = dispatcher.dispatch()?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &DispatchReport) {
    match &report.auto_fetch {
        AutoFetchOutcome::AlreadyDone => println!("Auto-fetch already completed."),
        AutoFetchOutcome::Completed { fetched } => {
            println!(
                "{} {} resource{} fetched.",
                Style::new().green().bold().apply_to("Auto-fetch completed:"),
                fetched.len(),
                plural(fetched.len())
            );
            for name in fetched {
                println!("  {name}");
            }
        }
    }

    if report.pending == PendingOutcome::Fetched {
        println!(
            "{}",
            Style::new().green().bold().apply_to("Pending fetch completed.")
        );
    }
}
