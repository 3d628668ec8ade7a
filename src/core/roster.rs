use crate::core::{Assignment, Result};
use crate::domain::model::AssignmentRow;
use crate::utils::error::RaffleError;

pub const ASSIGNMENTS_HEADER: [&str; 3] = ["Email", "Number", "Organization"];

/// Reads the first column of a comma-delimited participant list.
///
/// Values are trimmed; blank lines and rows whose first field is empty are skipped.
/// An empty result is not an error here, the caller knows where the data came from.
pub fn read_identifiers(data: &[u8], has_header: bool) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(data);

    let mut identifiers = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            let identifier = first.trim();
            if !identifier.is_empty() {
                identifiers.push(identifier.to_string());
            }
        }
    }

    tracing::debug!("Parsed {} identifiers", identifiers.len());
    Ok(identifiers)
}

/// Serializes assignments as `Email,Number,Organization` rows, in assignment order.
pub fn assignments_to_csv(assignments: &[Assignment], organization: &str) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(ASSIGNMENTS_HEADER)?;
    for assignment in assignments {
        writer.serialize(AssignmentRow {
            email: &assignment.identifier,
            number: assignment.number,
            organization,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| RaffleError::IoError(e.into_error()))
}
