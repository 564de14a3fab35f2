//! Convert a JSON Content Description to PDF
//!
//! Reads a `Document` serialized as JSON and writes the encoded PDF.
//!
//! Usage:
//!   cargo run --bin json_to_pdf -- content.json
//!   cargo run --bin json_to_pdf -- content.json --output report.pdf --config encoder.json
//!
//! Input format:
//!
//! ```text
//! {
//!   "background": {"r": 1.0, "g": 1.0, "b": 1.0},
//!   "items": [
//!     {"kind": "text", "text": "Hello", "point_size": 24, "alignment": "left"},
//!     {"kind": "bitmap_text", "text": "RETRO", "scale": 3}
//!   ]
//! }
//! ```

use pdf_scribe::{Document, EncoderConfig};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

struct CliConfig {
    input: PathBuf,
    output: PathBuf,
    encoder_config: Option<PathBuf>,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = None;
        let mut encoder_config = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = Some(PathBuf::from(&args[i]));
                    }
                },
                "--config" => {
                    i += 1;
                    if i < args.len() {
                        encoder_config = Some(PathBuf::from(&args[i]));
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other if input.is_none() && !other.starts_with('-') => {
                    input = Some(PathBuf::from(other));
                },
                other => {
                    eprintln!("Ignoring unknown argument: {}", other);
                },
            }
            i += 1;
        }

        let input = input?;
        let output = output.unwrap_or_else(|| input.with_extension("pdf"));
        Some(Self {
            input,
            output,
            encoder_config,
            verbose,
        })
    }
}

fn run(cli: &CliConfig) -> pdf_scribe::Result<usize> {
    let json = fs::read_to_string(&cli.input)?;
    let document = Document::from_json(&json)?;

    let config = match &cli.encoder_config {
        Some(path) => EncoderConfig::from_json(&fs::read_to_string(path)?)?,
        None => EncoderConfig::default(),
    };

    if cli.verbose {
        println!("Loaded {} content item(s)", document.len());
    }

    let bytes = document.write_with_config(Vec::new(), config)?;
    fs::write(&cli.output, &bytes)?;
    Ok(bytes.len())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(cli) = CliConfig::from_args() else {
        eprintln!("Usage: json_to_pdf <content.json> [--output <file.pdf>] [--config <encoder.json>] [--verbose]");
        return ExitCode::from(2);
    };

    let start = Instant::now();
    match run(&cli) {
        Ok(size) => {
            println!(
                "Wrote {} ({} bytes) in {:.1}ms",
                cli.output.display(),
                size,
                start.elapsed().as_secs_f64() * 1000.0
            );
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
