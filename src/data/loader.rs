use std::path::Path;

use super::arff;
use super::model::{Table, Value};
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Table formats
// ---------------------------------------------------------------------------

/// How a table file is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Delimited text. With `header` false, columns are named `0`, `1`, ...
    Delimited { delimiter: u8, header: bool },
    /// Attribute-relation file format.
    Arff,
}

impl TableFormat {
    pub const SEMICOLON: TableFormat = TableFormat::Delimited {
        delimiter: b';',
        header: true,
    };
    pub const COMMA: TableFormat = TableFormat::Delimited {
        delimiter: b',',
        header: true,
    };
    pub const HEADERLESS_COMMA: TableFormat = TableFormat::Delimited {
        delimiter: b',',
        header: false,
    };

    /// File extension used for sample files in this format.
    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Delimited { .. } => "csv",
            TableFormat::Arff => "arff",
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a table from `path` in the given format.
pub fn read_table(path: &Path, format: TableFormat) -> Result<Table> {
    log::debug!("reading {} as {format:?}", path.display());
    match format {
        TableFormat::Delimited { delimiter, header } => read_delimited(path, delimiter, header),
        TableFormat::Arff => arff::read_arff(path),
    }
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

/// Delimited text with an optional header row. Cell types are inferred,
/// then integer cells in float columns are promoted; ragged rows are an
/// error.
pub fn read_delimited(path: &Path, delimiter: u8, header: bool) -> Result<Table> {
    let csv_err = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(header)
        .from_path(path)
        .map_err(csv_err)?;

    let mut columns: Option<Vec<String>> = if header {
        Some(
            reader
                .headers()
                .map_err(csv_err)?
                .iter()
                .map(|h| h.to_string())
                .collect(),
        )
    } else {
        None
    };

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        if columns.is_none() {
            columns = Some((0..record.len()).map(|i| i.to_string()).collect());
        }
        rows.push(record.iter().map(Value::infer).collect());
    }

    let mut table = Table::new(columns.unwrap_or_default(), rows);
    table.promote_numeric_columns();
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_semicolon_table_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "train_001.csv",
            "name;frameTime;mfcc[0]\n'unknown';0.00;-1.5\n'unknown';0.01;2\n",
        );
        let table = read_table(&path, TableFormat::SEMICOLON).unwrap();
        assert_eq!(table.columns, vec!["name", "frameTime", "mfcc[0]"]);
        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.rows[1][1], Value::Float(0.01));
        // promoted to match the float cell above it
        assert_eq!(table.rows[1][2], Value::Float(2.0));
    }

    #[test]
    fn headerless_columns_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "AU.csv", "1,2.5,x\n3,?,y\n");
        let table = read_table(&path, TableFormat::HEADERLESS_COMMA).unwrap();
        assert_eq!(table.columns, vec!["0", "1", "2"]);
        assert_eq!(table.len(), 2);
        assert!(table.rows[1][1].is_null());
        assert_eq!(table.rows[1][0], Value::Integer(3));
    }

    #[test]
    fn missing_markers_load_as_null_in_float_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "dev_001.csv", "a;b\n1;NA\n2;?\n3;4\n");
        let table = read_table(&path, TableFormat::SEMICOLON).unwrap();
        assert!(table.rows[0][1].is_null());
        assert!(table.rows[1][1].is_null());
        assert_eq!(table.rows[2][1], Value::Float(4.0));
        assert_eq!(table.rows[2][0], Value::Integer(3));
    }

    #[test]
    fn header_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "empty.csv", "a,b\n");
        let table = read_table(&path, TableFormat::COMMA).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.csv", "a;b\n1;2\n3\n");
        assert!(matches!(
            read_table(&path, TableFormat::SEMICOLON),
            Err(DataError::Csv { .. })
        ));
    }

    #[test]
    fn missing_file_propagates() {
        let err = read_table(Path::new("/no/such/table.csv"), TableFormat::COMMA).unwrap_err();
        assert!(matches!(err, DataError::Csv { ref path, .. } if path.ends_with("table.csv")));
    }
}
