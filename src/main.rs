use clap::Parser;
use setupkit::cli::{self, Args};
use setupkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();
    tracing::debug!(jobs = args.jobs.len(), "starting");
    let summary = cli::run(&args, &mut std::io::stdout().lock())?;

    if summary.failed > 0 {
        tracing::error!(
            failed = summary.failed,
            succeeded = summary.succeeded,
            "some jobs failed"
        );
        std::process::exit(1);
    }

    Ok(())
}
