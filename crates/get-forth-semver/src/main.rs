use std::io;
use std::process::ExitCode;

use clap::Parser;
use get_forth_semver::{VersionFlags, compute_applied, normalize_args, select_versions};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "get-forth-semver", version, args_override_self = true)]
#[command(
    about = "Apply the change between two versions to a third version",
    long_about = None
)]
struct Cli {
    /// Previous version (first positional argument)
    #[arg(long)]
    previous: Option<String>,

    /// Latest version (second positional argument)
    #[arg(long)]
    latest: Option<String>,

    /// Version to apply the change to (third positional argument)
    #[arg(long)]
    current: Option<String>,

    /// Versions in the order: previous latest current
    #[arg(value_name = "VERSION")]
    versions: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing();

    let flags = VersionFlags {
        previous: cli.previous,
        latest: cli.latest,
        current: cli.current,
    };
    let args = match select_versions(flags, cli.versions) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match compute_applied(&args.previous, &args.latest, &args.current) {
        Ok(version) => {
            println!("{version}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
