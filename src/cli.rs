//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// autofetch - idempotent auto-fetch of declared container images
///
/// Reconciles a unit's declared docker resources against what has been fetched.
#[derive(Parser, Debug)]
#[command(
    name = "autofetch",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fetch declared container image resources once per lifecycle",
    long_about = "autofetch reads the resources declared in a unit's metadata.yaml, fetches every \
                  docker resource marked auto-fetch exactly once per lifecycle, and serves \
                  fetch requests raised by later events.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  autofetch run\n    \
                  autofetch request web-image\n    \
                  autofetch status\n    \
                  autofetch list --all\n    \
                  autofetch reset"
)]
pub struct Cli {
    /// Unit metadata file declaring the resources
    #[arg(long, short = 'm', global = true, env = "AUTOFETCH_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory holding the durable reconcile state
    #[arg(long, short = 's', global = true, env = "AUTOFETCH_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Handle a lifecycle event: run the initial pass and any pending fetch
    Run,

    /// Request a fetch of declared docker resources on the next run
    Request(RequestArgs),

    /// Show reconcile flags, pending queue and fetch outcomes
    Status,

    /// List declared resources
    List(ListArgs),

    /// Show one declared resource and its fetched image
    Show(ShowArgs),

    /// Reset the reconcile state (re-provisioning)
    Reset(ResetArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the request command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Request one resource:\n    autofetch request web-image\n\n\
                  Request and fetch immediately:\n    autofetch request web-image worker-image --now")]
pub struct RequestArgs {
    /// Resource names as declared in the manifest
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Dispatch right away instead of waiting for the next event
    #[arg(long)]
    pub now: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List auto-fetch resources:\n    autofetch list\n\n\
                  List every declared resource:\n    autofetch list --all")]
pub struct ListArgs {
    /// Include resources that are not auto-fetched
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Resource name to show
    pub name: String,
}

/// Arguments for the reset command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Re-run the initial pass on the next event:\n    autofetch reset\n\n\
                  Forget everything, including queued requests:\n    autofetch reset --all")]
pub struct ResetArgs {
    /// Also drop pending requests and recorded fetch outcomes
    #[arg(long)]
    pub all: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
