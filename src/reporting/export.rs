use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::constants::export;
use crate::core::error::Result;
use crate::core::types::ProbeResult;
use crate::reporting::status::status_label;

/// Write results as `URL,Status` CSV, one row per result in result order.
pub fn write_csv<W: Write>(writer: W, results: &[ProbeResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([export::URL_HEADER, export::STATUS_HEADER])?;

    for result in results {
        csv_writer.write_record([result.url(), status_label(result.outcome).as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the export to a string
pub fn to_csv_string(results: &[ProbeResult]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, results)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the export to `path`, replacing any existing file.
pub fn export_to_file<P: AsRef<Path>>(path: P, results: &[ProbeResult]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, results)
}
