use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::debug;

use distconv::cli::batch::convert_lines;
use distconv::cli::interactive::{run_session, SESSION_HELP};
use distconv::cli::{handle_error, Args, CliConfig, CliUtils, Commands};
use distconv::error::ConverterError;
use distconv::session::reference_formulas;
use distconv::{convert, OutputFormat};

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    distconv::logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = CliConfig::from_args(args)?;
    debug!(input = %config.input_description(), "starting");

    match config.args.command.clone() {
        Commands::Convert { value } => handle_convert(&value, &config),
        Commands::Batch { input, .. } => {
            let reader: Box<dyn BufRead> = match &input {
                Some(path) => {
                    let file = File::open(path).map_err(|e| {
                        ConverterError::io(e.to_string(), Some(path.clone()))
                    })?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(BufReader::new(std::io::stdin())),
            };
            handle_batch(reader, &config)
        }
        Commands::Interactive => handle_interactive(&config),
        Commands::Formulas => {
            for line in reference_formulas() {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn handle_convert(value: &str, config: &CliConfig) -> Result<ExitCode> {
    let direction = config.converter_config.direction;
    let outcome = convert(value, direction);
    let rendered = config.formatter().render_outcome(value, direction, &outcome);

    match (&outcome, config.converter_config.output_format) {
        (Err(_), OutputFormat::Text) => {
            CliUtils::show_error(&rendered);
            Ok(ExitCode::FAILURE)
        }
        (Err(_), OutputFormat::Json) => {
            println!("{}", rendered);
            Ok(ExitCode::FAILURE)
        }
        (Ok(_), _) => {
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn handle_batch(reader: Box<dyn BufRead>, config: &CliConfig) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    let summary = convert_lines(
        reader,
        &mut writer,
        &config.converter_config,
        &config.formatter(),
    )?;
    writer.flush().context("Failed to flush output")?;

    let quiet = config.is_quiet() || config.converter_config.output_format == OutputFormat::Json;
    if summary.failed > 0 {
        CliUtils::show_warning(
            &format!(
                "Converted {} lines, {} failed",
                summary.converted, summary.failed
            ),
            quiet,
        );
        Ok(ExitCode::FAILURE)
    } else {
        CliUtils::show_success(&format!("Converted {} lines", summary.converted), quiet);
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_interactive(config: &CliConfig) -> Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start session runtime")?;

    if !config.is_quiet() && config.converter_config.output_format == OutputFormat::Text {
        eprintln!("{}\n", SESSION_HELP);
    }

    let reader = tokio::io::BufReader::new(tokio::io::stdin());
    let output = Arc::new(Mutex::new(std::io::stdout()));
    let result = runtime.block_on(run_session(reader, output, &config.converter_config));

    // A blocking stdin read may still be parked after :quit
    runtime.shutdown_background();
    result?;

    Ok(ExitCode::SUCCESS)
}
