#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fitstats::{cli, package, read_package, utils};

#[macro_use]
extern crate fitstats;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match &cli.packages {
        Some(path) => package::load_packages(path)?,
        None => {
            dlog!("mode=demo");
            package::demo_packages()
        }
    };

    for (i, p) in packages.iter().enumerate() {
        let training = read_package(&p.code, &p.data)
            .with_context(|| format!("package #{} ({})", i + 1, p.code))?;
        println!("{}", training.show_training_info());
    }

    tracing::info!(workouts = packages.len(), "done");
    Ok(())
}
