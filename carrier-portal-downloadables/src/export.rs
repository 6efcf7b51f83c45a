//! Drives the converters over a stream of newline-delimited JSON records.

use std::fmt;
use std::io::{BufRead, Write};

use carrier_portal_shared::EventRecord;
use csv::{Terminator, Writer, WriterBuilder};
use tracing::{debug, error, info, instrument};

use crate::errors::DownloadableError;
use crate::fields::{DownloadableRow, FIELD_NAMES};
use crate::{encounter, events, loitering, port};

/// Event type of a public download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Encounter,
    Loitering,
    Port,
}

impl EventKind {
    /// Convert a record of this event type into a download row.
    pub fn record_to_row(
        self,
        record: &EventRecord,
    ) -> Result<Option<DownloadableRow>, DownloadableError> {
        match self {
            Self::Encounter => encounter::record_to_row(record),
            Self::Loitering => loitering::record_to_row(record),
            Self::Port => port::record_to_row(record),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Encounter => encounter::EVENT_TYPE,
            Self::Loitering => loitering::EVENT_TYPE,
            Self::Port => port::EVENT_TYPE,
        };
        f.write_str(name)
    }
}

/// CSV writer for the exported files. Rows end with CRLF and no header is
/// written implicitly.
fn csv_writer<W: Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(output)
}

fn parse_record(line_number: usize, line: &str) -> Result<EventRecord, DownloadableError> {
    EventRecord::from_json_line(line)
        .map_err(|e| DownloadableError::json(format!("record on line {}", line_number), e))
}

/// Write the public download of one event type.
///
/// The header is always written, even when no record produces a row. Blank
/// input lines are skipped. The first record that cannot be converted stops
/// the export; it is logged before the error is returned.
///
/// # Returns
///
/// * `Ok(usize)` - Number of rows written
/// * `Err(DownloadableError)` - If a record cannot be converted or written
#[instrument(skip(input, output))]
pub fn write_downloadable<R: BufRead, W: Write>(
    kind: EventKind,
    input: R,
    output: W,
) -> Result<usize, DownloadableError> {
    let mut writer = csv_writer(output);
    writer.write_record(FIELD_NAMES)?;

    let mut rows_written = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let converted = parse_record(index + 1, &line)
            .and_then(|record| kind.record_to_row(&record))
            .inspect_err(|e| {
                error!(line = index + 1, record = %line, error = %e, "Unable to convert record to csv");
            })?;

        match converted {
            Some(row) => {
                writer.serialize(row)?;
                rows_written += 1;
            }
            None => debug!(line = index + 1, "Record not published"),
        }
    }

    writer.flush()?;
    info!(kind = %kind, rows = rows_written, "Download written");
    Ok(rows_written)
}

/// Write relational event rows for every record of the input.
///
/// # Returns
///
/// * `Ok(usize)` - Number of rows written
/// * `Err(DownloadableError)` - If a record cannot be parsed or written
#[instrument(skip(input, output))]
pub fn write_relational_events<R: BufRead, W: Write>(
    input: R,
    output: W,
) -> Result<usize, DownloadableError> {
    let mut writer = csv_writer(output);

    let mut rows_written = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(index + 1, &line).inspect_err(|e| {
            error!(line = index + 1, record = %line, error = %e, "Unable to convert record to csv");
        })?;

        writer.write_record(&events::record_to_row(&record))?;
        rows_written += 1;
    }

    writer.flush()?;
    info!(rows = rows_written, "Relational events written");
    Ok(rows_written)
}
