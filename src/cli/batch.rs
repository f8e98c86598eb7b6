//! Batch conversion of one distance per line
//!
//! Lines are decoded lossily, so bytes that are not UTF-8 fail that line
//! as an invalid number instead of ending the run.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::conversion::{ConversionEngine, ConverterConfig};
use crate::error::{ConverterError, ConverterResult};
use crate::formatter::ResultFormatter;

/// Counts from a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Convert one distance per line. Optionally continue on errors.
///
/// Blank lines are skipped. Without `continue_on_error` the first failing
/// line aborts the run with its 1-based line number.
pub fn convert_lines<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    config: &ConverterConfig,
    formatter: &ResultFormatter,
) -> ConverterResult<BatchSummary> {
    let engine = ConversionEngine::new();
    let mut summary = BatchSummary::default();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| ConverterError::io(e.to_string(), None))?;
        if read == 0 {
            break;
        }
        line_number += 1;
        let line = decode_line(&buffer);

        if line.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }

        let outcome = engine.convert(&line, config.direction);
        match &outcome {
            Ok(_) => summary.converted += 1,
            Err(kind) => {
                if !config.continue_on_error {
                    return Err(ConverterError::BatchLine {
                        line: line_number,
                        kind: kind.clone(),
                    });
                }
                debug!(line = line_number, error = %kind, "skipping failed line");
                summary.failed += 1;
            }
        }

        writeln!(
            writer,
            "{}",
            formatter.render_outcome(&line, config.direction, &outcome)
        )
        .map_err(|e| ConverterError::io(e.to_string(), None))?;
    }

    info!(
        converted = summary.converted,
        failed = summary.failed,
        skipped = summary.skipped,
        "batch finished"
    );
    Ok(summary)
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
