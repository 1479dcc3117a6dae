// src/store.rs
//
// The delimited table both stages meet at. Extraction writes it front to back;
// analysis reads it back by column name. Nothing else is shared between them.

use std::fs::{self, File};
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use crate::config::TableFormat;
use crate::error::{Error, Result};
use crate::record::Record;

/// Streaming writer for extracted records. The header goes out on creation,
/// so even a run that keeps nothing leaves a valid table behind.
pub struct TableWriter {
    inner: csv::Writer<File>,
    rows: usize,
}

impl TableWriter {
    pub fn create(path: &Path, format: TableFormat) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut inner = csv::WriterBuilder::new()
            .delimiter(format.delim())
            .has_headers(false)
            .from_writer(file);
        inner.write_record(Record::HEADERS)?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write(&mut self, rec: &Record) -> Result<()> {
        self.inner.serialize(rec)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the number of data rows written.
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush().map_err(csv::Error::from)?;
        Ok(self.rows)
    }
}

/// One persisted row, uncoerced. Count columns stay text here so that the
/// analysis pass decides what a malformed value means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TableRow {
    pub brand: String,
    pub year: String,
    pub total_stores: String,
    pub new_open: String,
    pub terminate: String,
    pub cancel: String,
    pub transfer: String,
    pub avg_sales: String,
    pub area_sales: String,
}

/// Read every row of a table.
///
/// An empty file is a table with no rows. A missing column is fatal. Every
/// other row comes back, even a broken one: short rows are padded with empty
/// cells and bytes that aren't UTF-8 are replaced, so the analysis pass sees
/// and counts them as malformed.
pub fn read_table(path: &Path, format: TableFormat) -> Result<Vec<TableRow>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delim())
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        debug!(path = %path.display(), "empty table");
        return Ok(Vec::new());
    }
    for column in Record::HEADERS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn { path: path.to_path_buf(), column });
        }
    }

    let mut rows = Vec::new();
    for (i, result) in reader.byte_records().enumerate() {
        let bytes = result?;
        let mut record = StringRecord::from_byte_record_lossy(bytes);
        if record.len() < headers.len() {
            debug!(line = i + 2, fields = record.len(), "short row padded");
            while record.len() < headers.len() {
                record.push_field("");
            }
        }
        match record.deserialize::<TableRow>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => debug!(line = i + 2, error = %e, "skipping unreadable row"),
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(brand: &str, new_open: i64) -> Record {
        Record {
            brand: brand.into(),
            year: 2023,
            new_open,
            total_stores: 10,
            ..Default::default()
        }
    }

    #[test]
    fn header_is_written_even_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let w = TableWriter::create(&path, TableFormat::Csv).unwrap();
        assert_eq!(w.finish().unwrap(), 0);
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "brand,year,total_stores,new_open,terminate,cancel,transfer,avg_sales,area_sales\n"
        );
    }

    #[test]
    fn rows_come_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.tsv");
        let mut w = TableWriter::create(&path, TableFormat::Tsv).unwrap();
        w.write(&rec("가", 3)).unwrap();
        w.write(&rec("나, 주식회사", 5)).unwrap();
        assert_eq!(w.rows(), 2);
        w.finish().unwrap();

        let rows = read_table(&path, TableFormat::Tsv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].brand, "가");
        assert_eq!(rows[1].brand, "나, 주식회사");
        assert_eq!(rows[1].new_open, "5");
        assert_eq!(rows[1].year, "2023");
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.csv");
        fs::write(&path, "brand,year,total_stores\nx,2023,5\n").unwrap();
        let err = read_table(&path, TableFormat::Csv).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { column: "new_open", .. }));
    }

    #[test]
    fn short_rows_come_back_padded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        let mut text = Record::HEADERS.join(",");
        text.push_str("\na,2023,1,2,3,4,5,6,7\nb,2023,1\nc,0,1,1,1,1,1,1,1\n");
        fs::write(&path, text).unwrap();
        let rows = read_table(&path, TableFormat::Csv).unwrap();
        let brands: Vec<&str> = rows.iter().map(|r| r.brand.as_str()).collect();
        assert_eq!(brands, vec!["a", "b", "c"]);
        assert_eq!(rows[1].total_stores, "1");
        assert_eq!(rows[1].new_open, "");
        assert_eq!(rows[1].area_sales, "");
    }

    #[test]
    fn non_utf8_cells_are_replaced_not_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.csv");
        let mut bytes = Record::HEADERS.join(",").into_bytes();
        bytes.extend_from_slice(b"\nx,2023,1,2,3,4,5,\xff\xfe,7\n");
        fs::write(&path, bytes).unwrap();
        let rows = read_table(&path, TableFormat::Csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_sales, "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.csv");
        fs::write(&path, "").unwrap();
        assert!(read_table(&path, TableFormat::Csv).unwrap().is_empty());
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("doc.html");
        fs::write(&blocker, "").unwrap();
        let err = TableWriter::create(&blocker.join("x.csv"), TableFormat::Csv)
            .err()
            .unwrap();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn missing_table_is_an_io_error() {
        let err = read_table(Path::new("definitely/not/here.csv"), TableFormat::Csv).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
