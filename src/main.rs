#![allow(clippy::doc_markdown)]

mod cli;
mod tables;

use bess_model::{battery::BatteryRecord, prelude::*};
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, OutputFormat},
    tables::{build_parameters_json, build_parameters_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    if let Some(config) = &args.config {
        info!(config = %config.display(), "using the settings file");
    }
    let record = BatteryRecord::from(args.settings()?);

    match args.format {
        OutputFormat::Table => {
            println!("{}", build_parameters_table(&record));
        }
        OutputFormat::Json => {
            println!("{}", build_parameters_json(&record)?);
        }
    }

    info!("done!");
    Ok(())
}
