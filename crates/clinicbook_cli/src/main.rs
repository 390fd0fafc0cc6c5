//! Interactive Clinic Book entry point.
//!
//! # Responsibility
//! - Load configuration and start file logging.
//! - Run a line-oriented command loop over stdin until `exit` or EOF.
//!
//! Usage: `clinicbook [CONFIG_JSON]`

use clinicbook_core::{init_logging, AppConfig, ClinicService};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // The book is usable without logs; report and carry on.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("event=session_end module=cli status=error");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut service = ClinicService::new();
    info!(
        "event=session_start module=cli status=ok version={}",
        clinicbook_core::core_version()
    );

    writeln!(output, "Welcome to Clinic Book. Type `help` for commands.")?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match service.execute(&line) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                if let Some(kind) = result.view {
                    for row in service.render_view(kind) {
                        writeln!(output, "{row}")?;
                    }
                }
                if result.exit {
                    break;
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
        output.flush()?;
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}
