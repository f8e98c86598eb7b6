//! Line-driven converter session
//!
//! Each plain line replaces the input text, the way typing into the distance
//! field would, and is converted once the debounce interval passes without
//! another change. Lines starting with `:` are commands.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::conversion::{ConversionDirection, ConverterConfig};
use crate::error::{ConverterError, ConverterResult};
use crate::formatter::{OutputFormat, ResultFormatter};
use crate::session::{reference_formulas, ConverterSession, Debouncer, SharedSession};

/// Help text for session commands
pub const SESSION_HELP: &str = "\
Type a distance to convert it. Commands:
  :km        convert kilometers to miles
  :miles     convert miles to kilometers
  :dir NAME  select a direction by name
  :swap      reverse the direction
  :go        convert now
  :clear     clear the input
  :formulas  show the conversion formulas
  :quit      leave the session";

/// One parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Input(String),
    Direction(ConversionDirection),
    Swap,
    Convert,
    Clear,
    Formulas,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    /// Parse a line read from the session input
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Input(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("km"), None) => Self::Direction(ConversionDirection::KmToMiles),
            (Some("miles"), None) => Self::Direction(ConversionDirection::MilesToKm),
            (Some("dir"), Some(name)) => name
                .parse()
                .map(Self::Direction)
                .unwrap_or_else(|_| Self::Unknown(line.trim().to_string())),
            (Some("swap"), None) => Self::Swap,
            (Some("go") | Some("convert"), None) => Self::Convert,
            (Some("clear"), None) => Self::Clear,
            (Some("formulas"), None) => Self::Formulas,
            (Some("help"), None) => Self::Help,
            (Some("quit") | Some("q") | Some("exit"), None) => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

/// Run a session until `:quit` or end of input
///
/// Output is written to `output` as results become available. A conversion
/// still waiting on the debounce interval at end of input is allowed to run.
/// Returns the final session state.
pub async fn run_session<R, W>(
    reader: R,
    output: Arc<Mutex<W>>,
    config: &ConverterConfig,
) -> ConverterResult<ConverterSession>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let session = SharedSession::new(ConverterSession::new(config.direction));
    let formatter = ResultFormatter::new(config.output_format, config.color);
    let mut debouncer = Debouncer::new(config.debounce);

    info!(
        direction = config.direction.as_str(),
        debounce_ms = config.debounce.as_millis() as u64,
        "session started"
    );

    if !config.quiet {
        let placeholder = formatter.render_view(session.lock().view());
        emit(&output, &placeholder);
    }

    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| ConverterError::io(e.to_string(), None))?
    {
        match SessionCommand::parse(&line) {
            SessionCommand::Input(text) => {
                let changed = session.lock().set_input(text);
                if changed {
                    schedule_refresh(&mut debouncer, &session, &output, &formatter);
                }
            }
            SessionCommand::Direction(direction) => {
                let changed = session.lock().set_direction(direction);
                if changed {
                    announce_direction(&output, direction, config);
                    schedule_refresh(&mut debouncer, &session, &output, &formatter);
                }
            }
            SessionCommand::Swap => {
                let direction = session.lock().swap_direction();
                announce_direction(&output, direction, config);
                schedule_refresh(&mut debouncer, &session, &output, &formatter);
            }
            SessionCommand::Convert => {
                debouncer.cancel();
                let rendered = formatter.render_view(session.lock().convert_now());
                emit(&output, &rendered);
            }
            SessionCommand::Clear => {
                let changed = session.lock().clear();
                if changed {
                    schedule_refresh(&mut debouncer, &session, &output, &formatter);
                }
            }
            SessionCommand::Formulas => {
                emit(&output, &reference_formulas().join("\n"));
            }
            SessionCommand::Help => emit(&output, SESSION_HELP),
            SessionCommand::Quit => {
                debouncer.cancel();
                break;
            }
            SessionCommand::Unknown(command) => {
                warn!(command = %command, "unknown session command");
                emit(
                    &output,
                    &format!("Unknown command '{}'. Type :help for commands", command),
                );
            }
        }
    }

    debouncer.flush().await;
    info!("session finished");

    let final_state = session.lock().clone();
    Ok(final_state)
}

fn schedule_refresh<W>(
    debouncer: &mut Debouncer,
    session: &SharedSession,
    output: &Arc<Mutex<W>>,
    formatter: &ResultFormatter,
) where
    W: Write + Send + 'static,
{
    let session = session.clone();
    let output = Arc::clone(output);
    let formatter = formatter.clone();

    debouncer.schedule(move || {
        let rendered = formatter.render_view(session.lock().refresh());
        emit(&output, &rendered);
    });
}

fn announce_direction<W: Write>(
    output: &Arc<Mutex<W>>,
    direction: ConversionDirection,
    config: &ConverterConfig,
) {
    if !config.quiet && config.output_format == OutputFormat::Text {
        emit(output, &format!("Direction: {}", direction.label()));
    }
}

fn emit<W: Write>(output: &Arc<Mutex<W>>, text: &str) {
    let mut writer = output.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
        warn!(error = %e, "failed to write session output");
    }
}
