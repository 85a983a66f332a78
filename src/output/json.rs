//! JSON report output writer.
//!
//! Writes Report structs to JSON files with 2-space indentation.

use crate::loader::schema::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::{File, Permissions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// The document is written to a temporary file next to the destination and
/// renamed over it, so the destination holds either the old content or the
/// complete new report.
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write or rename
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = build_report(&table)?;
/// write_report(&report, "data/College_admission.json")?;
/// ```
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create parent directories if needed
    if !dir.exists() {
        debug!("Creating parent directories: {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", dir.display(), e))
        })?;
    }

    persist_atomically(dir, output_path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writer.write_all(b"\n")?;
        Ok(())
    })?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a report to the exact text `write_report` puts on disk
///
/// **Public** - useful for tests and stdout output
pub fn report_to_string(report: &Report) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Write through a temporary file in `dir`, then rename it over `output_path`
///
/// **Private** - if `fill` fails the temporary file is dropped and the
/// destination is left as it was.
fn persist_atomically<F>(dir: &Path, output_path: &Path, fill: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<(), OutputError>,
{
    let mut temp = NamedTempFile::new_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        fill(&mut writer)?;
        writer.flush()?;
    }

    if let Some(perms) = target_permissions(output_path)? {
        temp.as_file().set_permissions(perms)?;
    }

    temp.persist(output_path)
        .map_err(|e| OutputError::WriteFailed(e.error))?;

    Ok(())
}

/// Permissions the written report should end up with
///
/// **Private** - keeps the mode of an existing file; new files get 0644
/// instead of the owner-only mode of a fresh temporary file.
fn target_permissions(output_path: &Path) -> Result<Option<Permissions>, OutputError> {
    match std::fs::metadata(output_path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(OutputError::WriteFailed(e)),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use crate::utils::config::NEW_REPORT_MODE;
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_REPORT_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation, recommendation, and testing
///
/// # Errors
/// * `OutputError::ReadFailed` - File missing or unreadable
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| OutputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    let report: Report = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!("Report loaded: {} ranks", report.len());

    Ok(report)
}
