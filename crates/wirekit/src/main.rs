//! wirekit - Entry Point
//!
//! Binary entry point for the `wirekit` planning tool.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `wirekit plan --manifest FILE --service ID` | Print the resolution plan of one service |
//! | `wirekit check --manifest FILE` | Plan every bound service and report failures |

use std::process::ExitCode;

use clap::Parser;
use wirekit::cli::{Cli, load_config, run};
use wirekit::infrastructure::logging::init_logging;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    let succeeded = run(&cli, &config, &mut std::io::stdout().lock())?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
