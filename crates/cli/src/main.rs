use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use commandflow_cli::cli_args::Args;
use commandflow_cli::render::{list_flows, render_flow};
use commandflow_core::error::Result;
use commandflow_core::{config, file_handling};

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let flows = file_handling::get_flow_definitions(&config_path)?;

    if args.list {
        println!("{}", list_flows(&flows));
        return Ok(());
    }

    let command = render_flow(&flows, args.flow_id_or_index.as_deref(), &args)?;
    println!("{}", command.command());

    if args.skip_record {
        info!("Skipping record was specified. Not writing to the history.");
    } else {
        let history_path = config::get_history_path(&args.history_path);
        file_handling::append_records(&history_path, command.records())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
