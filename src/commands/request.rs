//! Request command: queue resources for the next pending fetch

use super::helpers::open_dispatcher;
use super::run::dispatch_and_report;
use crate::cli::RequestArgs;
use crate::config::Settings;
use crate::error::Result;

/// Run request command
pub fn run(settings: &Settings, args: RequestArgs) -> Result<()> {
    let mut dispatcher = open_dispatcher(settings)?;
    dispatcher.request_fetch(args.names.as_slice())?;
    println!("Fetch requested: {}", args.names.join(", "));

    if args.now {
        dispatch_and_report(&mut dispatcher)?;
    } else {
        println!("Run 'autofetch run' to fetch now.");
    }

    Ok(())
}
