use endpoint_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("endpoint: logging disabled: {err}");
    }

    match CliCommand::run_from_args() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("endpoint error: {:#}", err);
            std::process::exit(1);
        }
    }
}
