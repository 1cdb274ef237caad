// LandSearch - platform/fs.rs
//
// Filesystem access: bounded reads of the data file and font files, and
// creation of the CSV export file.

use crate::core::export::{self, CsvQuoting};
use crate::core::model::{Dataset, LandRecord};
use crate::util::constants::{MAX_DATA_FILE_SIZE, MAX_FONT_FILE_SIZE};
use crate::util::error::{ExportError, LoadError};
use std::io;
use std::path::Path;

/// Read and parse the JSON dataset at `path`.
///
/// The file size is checked before reading so an oversized or mistaken path
/// is rejected without allocating its contents.
pub fn read_dataset(path: &Path) -> Result<Vec<LandRecord>, LoadError> {
    let io_err = |e: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_DATA_FILE_SIZE {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: MAX_DATA_FILE_SIZE,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let dataset: Dataset = serde_json::from_slice(&bytes).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = size,
        records = dataset.land_records.len(),
        "Dataset parsed"
    );

    Ok(dataset.land_records)
}

/// Read a font file, refusing anything larger than `MAX_FONT_FILE_SIZE`.
pub fn read_font_file(path: &Path) -> io::Result<Vec<u8>> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_FONT_FILE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("font file is {size} bytes, exceeds maximum of {MAX_FONT_FILE_SIZE}"),
        ));
    }
    std::fs::read(path)
}

/// Write `records` as CSV to a new file at `path`.
///
/// The empty check happens before the file is created, so a failed export
/// never leaves an empty or partial file behind.
pub fn write_csv_export(
    records: &[&LandRecord],
    path: &Path,
    quoting: CsvQuoting,
) -> Result<usize, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let count = export::export_csv(records, io::BufWriter::new(file), path, quoting)?;
    tracing::info!(rows = count, path = %path.display(), "CSV export complete");
    Ok(count)
}
