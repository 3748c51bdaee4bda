mod cli;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;
use counter_logging::{counter_error, counter_info};
use wordcount_core::report;
use wordcount_engine::count_file;

use crate::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log_destination());

    let path = match cli.resolve_path() {
        Ok(path) => path,
        Err(err) => {
            counter_error!("failed to resolve source path: {err:#}");
            eprintln!("Error: could not read a file path from standard input.");
            return ExitCode::FAILURE;
        }
    };

    counter_info!("counting words in {:?}", path);
    let map = match count_file(&path) {
        Ok(map) => map,
        Err(err) => {
            counter_error!("count failed: {err}");
            eprintln!(
                "Error: the file '{}' was not found or could not be read.",
                path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let entries = report(&map);
    match cli.format {
        OutputFormat::Text => render::print_text(&entries),
        OutputFormat::Json => match render::to_json(&entries) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                counter_error!("failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
