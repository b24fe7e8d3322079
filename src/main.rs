use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;

use advect_rs::cli::{self, CliCommand, CliOptions};

fn main() -> Result<()> {
    let command = CliOptions::parse(env::args().skip(1)).context("invalid command line")?;

    let options = match command {
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        CliCommand::Version => {
            println!("advect {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    let level = if options.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    let (_, outputs) = cli::run(&options).context("advection run failed")?;

    if let Some(path) = outputs.plot {
        println!("plot written to {}", path.display());
    }
    if let Some(path) = outputs.evolution_plot {
        println!("snapshot plot written to {}", path.display());
    }
    if let Some(path) = outputs.csv {
        println!("profiles written to {}", path.display());
    }

    Ok(())
}
