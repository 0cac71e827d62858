use args::cidrnet::Args;
use clap::Parser;
use common::{
    format::{describe_fields, render},
    logging::enable_logger,
};
use netcalc::resolve_fields;

mod args;
mod common;

pub fn main() {
    // Parse CLI args
    let args = Args::parse();

    // Initialize logging
    if let Err(error) = enable_logger(args.verbose) {
        eprintln!("Failed to initialize logging: {error}");
    }

    // The field reference needs no requests
    if args.describe {
        print!("{}", describe_fields(args.description_style));
        return;
    }

    // Collect the requests from the command line or a request file
    let data = match args.data() {
        Ok(data) => data,
        Err(error) => {
            log::error!("{}", error);
            std::process::exit(1);
        }
    };
    let format = args.output.or(data.output).unwrap_or_default();
    log::debug!("Resolving {} request(s) as {:?}", data.networks.len(), format);

    // Resolve every request. A failure is reported without stopping the others
    let mut summaries = Vec::with_capacity(data.networks.len());
    let mut failures = 0;
    for (index, fields) in data.networks.into_iter().enumerate() {
        match resolve_fields(fields) {
            Ok(summary) => summaries.push(summary),
            Err(error) => {
                match args.has_config_file() {
                    true => log::error!("Request {}: {}", index + 1, error),
                    false => log::error!("{}", error),
                }
                failures += 1;
            }
        }
    }

    if !summaries.is_empty() {
        match render(&summaries, format, args.has_config_file()) {
            Ok(output) => print!("{output}"),
            Err(error) => {
                log::error!("Failed to render output: {}", error);
                std::process::exit(1);
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
