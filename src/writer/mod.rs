//! CSV sinks for generated datasets.
//!
//! A [`CsvSink`] streams rows into a temporary file next to its destination
//! and only renames it into place on [`CsvSink::finish`]. Dropping an
//! unfinished sink (early return, error, panic) removes the temporary file, so
//! a partially written dataset never appears under its final name.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

pub struct CsvSink {
    writer: csv::Writer<NamedTempFile>,
    path: PathBuf,
    rows: u64,
    progress: Option<Box<dyn Fn(u64)>>,
}

impl CsvSink {
    /// Open a sink for `path` with the given field delimiter.
    ///
    /// The parent directory must already exist.
    pub fn create(path: &Path, delimiter: u8) -> io::Result<Self> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let temp = tempfile::Builder::new()
            .prefix(".datagen-")
            .suffix(".csv.tmp")
            .tempfile_in(dir)?;

        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .buffer_capacity(WRITER_BUFFER_SIZE)
            .from_writer(temp);

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows: 0,
            progress: None,
        })
    }

    /// Call `callback` with the running data-row count after every row
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(u64) + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows written so far (the header is not counted)
    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn write_header(&mut self, columns: &[&str]) -> io::Result<()> {
        self.writer.write_record(columns)?;
        Ok(())
    }

    pub fn write_row<T: Serialize>(&mut self, row: &T) -> io::Result<()> {
        self.writer.serialize(row)?;
        self.rows += 1;
        if let Some(ref callback) = self.progress {
            callback(self.rows);
        }
        Ok(())
    }

    /// Write every row of `rows`, stopping at the first failure
    pub fn write_all<T, I>(&mut self, rows: I) -> io::Result<()>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        for row in rows {
            self.write_row(&row)?;
        }
        Ok(())
    }

    /// Flush, sync and move the file into place. Returns the data-row count.
    pub fn finish(self) -> io::Result<u64> {
        let rows = self.rows;
        let mut writer = self.writer;
        writer.flush()?;
        let temp = writer.into_inner().map_err(|e| e.into_error())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(rows)
    }
}
