use anyhow::Result;
use clap::Parser;

use vgstats::cli::Args;
use vgstats::output::write_report;
use vgstats::{load_file, Dashboard, LoadOptions, ViewOptions};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let dataset = load_file(&args.path, &LoadOptions::from(&args))?;
    let dashboard = Dashboard::new(dataset, ViewOptions::from(&args));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &dashboard, args.format, args.section)?;
    Ok(())
}
