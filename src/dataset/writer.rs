//! CSV output
//!
//! Serializes readings with the `csv` crate, which handles quoting and
//! escaping per RFC 4180 and emits the header row from the struct's field
//! renames. The target file is truncated on open, so each run fully
//! replaces the previous snapshot.

use std::path::Path;

use crate::dataset::{DatasetError, WardReading};

/// Write the readings to `path`, overwriting any existing file.
///
/// Fails if the parent directory does not exist; the generator does not
/// create directories.
pub fn write_snapshot(path: &Path, rows: &[WardReading]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
