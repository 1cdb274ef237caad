// LandSearch - core/export.rs
//
// CSV export of the full filtered match set (never just the current page).
// Core layer: writes to any Write trait object.
//
// Format: unquoted locale header row, then one row per record with every
// field wrapped in double quotes, rows terminated by '\n'. Column order:
// index, taluka, village, holder name, year, survey no, type, download link.

use crate::core::model::LandRecord;
use crate::util::error::ExportError;
use crate::util::locale::CSV_HEADER;
use std::io::Write;
use std::path::Path;

/// How double quotes inside field values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvQuoting {
    /// Embedded quotes are doubled (RFC 4180) by the `csv` writer.
    #[default]
    Standard,

    /// Values are wrapped in quotes verbatim with no escaping (the legacy
    /// fixed format; a value containing `"` yields an ambiguous field).
    Literal,
}

impl CsvQuoting {
    /// Parse a config value ("standard" / "literal", case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "literal" => Some(Self::Literal),
            _ => None,
        }
    }
}

/// Export records to CSV.
///
/// Returns the number of data rows written. Fails with
/// [`ExportError::NoRecords`] before writing anything when `records` is empty.
pub fn export_csv<W: Write>(
    records: &[&LandRecord],
    mut writer: W,
    export_path: &Path,
    quoting: CsvQuoting,
) -> Result<usize, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let io_err = |e: std::io::Error| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };

    writeln!(writer, "{}", CSV_HEADER.join(",")).map_err(io_err)?;

    match quoting {
        CsvQuoting::Standard => {
            let mut csv_writer = csv::WriterBuilder::new()
                .quote_style(csv::QuoteStyle::Always)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(writer);

            for (idx, record) in records.iter().enumerate() {
                let index = (idx + 1).to_string();
                let year = record.year_label();
                csv_writer
                    .write_record([
                        index.as_str(),
                        record.taluka.as_str(),
                        record.village.as_str(),
                        record.holder_name.as_str(),
                        year.as_str(),
                        record.survey_no.as_str(),
                        record.land_type.as_str(),
                        record.download_link.as_str(),
                    ])
                    .map_err(|e| ExportError::Csv {
                        path: export_path.to_path_buf(),
                        source: e,
                    })?;
            }

            csv_writer.flush().map_err(io_err)?;
        }
        CsvQuoting::Literal => {
            for (idx, record) in records.iter().enumerate() {
                writeln!(
                    writer,
                    "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
                    idx + 1,
                    record.taluka,
                    record.village,
                    record.holder_name,
                    record.year_label(),
                    record.survey_no,
                    record.land_type,
                    record.download_link,
                )
                .map_err(io_err)?;
            }
            writer.flush().map_err(io_err)?;
        }
    }

    tracing::debug!(
        rows = records.len(),
        path = %export_path.display(),
        ?quoting,
        "CSV export written"
    );

    Ok(records.len())
}

/// Serialise records to an in-memory CSV string.
pub fn to_csv(records: &[&LandRecord], quoting: CsvQuoting) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    export_csv(
        records,
        &mut buf,
        Path::new(crate::util::constants::EXPORT_FILE_NAME),
        quoting,
    )?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
