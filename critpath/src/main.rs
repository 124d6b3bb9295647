use std::io::{self, Write};

use critpath::input::PromptSource;
use critpath::render::render_schedule;
use critpath::{cli, compute_schedule, logging};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("cpm error: {err}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level.map(Into::into), args.verbosity)?;
    let config = args.schedule_config();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let tasks = PromptSource::new(stdin.lock(), stdout.lock()).collect_tasks()?;
    tracing::info!(tasks = tasks.len(), "task entry finished");

    let schedule = compute_schedule(&tasks, &config)?;

    let mut out = stdout.lock();
    render_schedule(&schedule, &mut out)?;
    out.flush()?;
    Ok(())
}
