//! CLI logic for the Peloton registration tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write};

use log::info;

use peloton::{PelotonError, Registrar};

/// Run the Peloton CLI application
///
/// Reads the input file, registers the participant it describes, and writes
/// the participant record as TOML to the output file or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PelotonError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Syntax and validation errors
pub fn run(args: &Args) -> Result<(), PelotonError> {
    info!(
        input_path = args.input,
        sequence = args.sequence;
        "Processing registration"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let registrar = Registrar::new(app_config);
    let participant = registrar.register(&source, args.sequence)?;

    let record = render_record(&participant)?;

    match &args.output {
        Some(path) => {
            fs::write(path, record)?;
            info!(output_file = path; "Participant record written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(record.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Serialize a participant record as TOML.
fn render_record(participant: &peloton::Participant) -> Result<String, PelotonError> {
    toml::to_string(participant)
        .map_err(|err| PelotonError::Export(format!("Failed to serialize record: {err}")))
}
