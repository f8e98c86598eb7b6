//! Command-line interface module

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::config::DEFAULT_DEBOUNCE;
use crate::conversion::{ConversionDirection, ConverterConfig};
use crate::error::{ConverterError, ConverterResult};
use crate::formatter::{OutputFormat, ResultFormatter};

pub mod batch;
pub mod interactive;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "distconv")]
#[command(about = "Convert distances between kilometers and miles")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Conversion direction (default: km-to-miles)
    #[arg(short, long, value_enum, global = true)]
    pub direction: Option<Direction>,

    /// Output format: text or json (default: text)
    #[arg(long, value_enum, global = true)]
    pub format: Option<Format>,

    /// Quiet period before typed input is converted, in milliseconds (default: 500)
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert a single distance
    Convert {
        /// Distance to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Convert one distance per line from a file or standard input
    Batch {
        /// Input file (default: standard input)
        input: Option<PathBuf>,
        /// Report failing lines and keep going
        #[arg(long)]
        continue_on_error: bool,
    },
    /// Line-driven converter session with debounced auto-convert
    Interactive,
    /// Print the conversion formulas
    Formulas,
}

/// Direction names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Direction {
    #[value(name = "km-to-miles", alias = "km")]
    KmToMiles,
    #[value(name = "miles-to-km", alias = "miles")]
    MilesToKm,
}

impl From<Direction> for ConversionDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::KmToMiles => ConversionDirection::KmToMiles,
            Direction::MilesToKm => ConversionDirection::MilesToKm,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub converter_config: ConverterConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConverterResult<Self> {
        let color = !args.no_color && CliUtils::should_use_color();
        let converter_config = Self::create_converter_config(&args, color)?;

        Ok(Self {
            args,
            converter_config,
        })
    }

    /// Create converter configuration from CLI arguments
    fn create_converter_config(args: &Args, color: bool) -> ConverterResult<ConverterConfig> {
        let output_format: OutputFormat = args.format.map(Into::into).unwrap_or(OutputFormat::Text);
        let debounce = args
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE);
        let continue_on_error = match &args.command {
            Commands::Batch {
                continue_on_error, ..
            } => *continue_on_error,
            _ => false,
        };

        let config = ConverterConfig {
            direction: args.direction.map(Into::into).unwrap_or_default(),
            debounce,
            output_format,
            color: color && output_format == OutputFormat::Text,
            quiet: args.quiet,
            continue_on_error,
        };

        config.validate().map_err(ConverterError::configuration)?;

        Ok(config)
    }

    /// Formatter matching the configured output
    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(
            self.converter_config.output_format,
            self.converter_config.color,
        )
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        match &self.args.command {
            Commands::Convert { value } => format!("'{}'", value),
            Commands::Batch {
                input: Some(path), ..
            } => format!("'{}'", path.display()),
            Commands::Batch { input: None, .. } | Commands::Interactive => {
                "standard input".to_string()
            }
            Commands::Formulas => "no input".to_string(),
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &anyhow::Error) {
    let message = match error.downcast_ref::<ConverterError>() {
        Some(converter_error) => converter_error.user_message(),
        None => error.to_string(),
    };
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error.downcast_ref::<ConverterError>() {
        Some(ConverterError::BatchLine { .. }) => {
            eprintln!("\nTip: Use --continue-on-error to skip invalid lines");
        }
        Some(ConverterError::Configuration { .. }) => {
            eprintln!("\nTip: --debounce-ms accepts values from 1 to 10000");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'distconv --help' for usage information.");
}
