//! Reset command: explicit re-provisioning of the reconcile state

use super::helpers::open_dispatcher;
use crate::cli::ResetArgs;
use crate::config::Settings;
use crate::error::Result;

/// Run reset command
pub fn run(settings: &Settings, args: &ResetArgs) -> Result<()> {
    let mut dispatcher = open_dispatcher(settings)?;
    dispatcher.reset(args.all)?;

    if args.all {
        println!("Reconcile state cleared.");
    } else {
        println!("Auto-fetch will run again on the next 'autofetch run'.");
    }

    Ok(())
}
