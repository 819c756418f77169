//! Headerless CSV/TSV matrix files.
//!
//! One matrix row per line, one entry per field. Lines starting with `#`
//! are skipped and surrounding whitespace is trimmed from every field.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::config::Delimiter;
use crate::matrix::Matrix;

/// Read a matrix, choosing the delimiter from the file extension.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    read_matrix_with(path, Delimiter::Auto)
}

pub fn read_matrix_with<P: AsRef<Path>>(path: P, delimiter: Delimiter) -> Result<Matrix> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte_for(path))
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;

    let mut data = Vec::new();
    let mut cols = None;
    let mut rows = 0;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        match cols {
            None => cols = Some(record.len()),
            Some(n) if n != record.len() => {
                return Err(anyhow!(
                    "Row {} has {} fields, expected {}",
                    row_idx + 1,
                    record.len(),
                    n
                ));
            }
            Some(_) => {}
        }
        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().with_context(|| {
                format!(
                    "Invalid value '{}' at row {}, column {}",
                    field,
                    row_idx + 1,
                    col_idx + 1
                )
            })?;
            data.push(value);
        }
        rows += 1;
    }

    let cols = cols.ok_or_else(|| anyhow!("Matrix file is empty: {}", path.display()))?;
    log::debug!("read {}x{} matrix from {}", rows, cols, path.display());
    Matrix::from_shape_vec((rows, cols), data)
        .with_context(|| format!("Failed to build matrix from {}", path.display()))
}

/// Write `x` one row per line. Values use the shortest representation that
/// reads back to the same `f64`.
pub fn write_matrix<P: AsRef<Path>>(path: P, x: &Matrix, delimiter: Delimiter) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.byte_for(path))
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    for r in 0..x.nrows() {
        let record: Vec<String> = x.row_slice(r).iter().map(|v| v.to_string()).collect();
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write row {}", r + 1))?;
    }
    writer.flush().context("Failed to flush matrix file")?;
    log::debug!("wrote {}x{} matrix to {}", x.nrows(), x.ncols(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_comma_and_tab_files() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("a.csv");
        std::fs::write(&csv_path, "# header comment\n1, 2\n3,4\n").unwrap();
        let x = read_matrix(&csv_path).unwrap();
        assert_eq!(x, Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());

        let tsv_path = dir.path().join("a.tsv");
        let mut f = File::create(&tsv_path).unwrap();
        writeln!(f, "0.5\t-1").unwrap();
        drop(f);
        assert_eq!(read_matrix(&tsv_path).unwrap().to_vec(), vec![0.5, -1.0]);
    }

    #[test]
    fn ragged_and_invalid_rows_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");

        std::fs::write(&path, "1,2\n3\n").unwrap();
        let err = read_matrix(&path).unwrap_err();
        assert!(err.to_string().contains("Row 2 has 1 fields"));

        std::fs::write(&path, "1,x\n").unwrap();
        let err = read_matrix(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid value 'x'"));

        std::fs::write(&path, "").unwrap();
        assert!(read_matrix(&path).is_err());
    }

    #[test]
    fn written_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let x = Matrix::from_rows(&[[0.1, -2.0, 1e-9], [3.0, 4.25, 5.0]]).unwrap();
        write_matrix(&path, &x, Delimiter::Tab).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
        assert_eq!(read_matrix_with(&path, Delimiter::Tab).unwrap(), x);
    }
}
