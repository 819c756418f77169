use std::fmt;

use crate::matrix::Matrix;

/// Bracketed rows with tab-separated entries, one row per line.
///
/// A precision in the format spec (`{:.3}`) is applied to every entry.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.nrows() {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(r).iter().enumerate() {
                if idx > 0 {
                    write!(f, "\t")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
            if r + 1 != self.nrows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Matrix {
    /// Same layout as `Display`, rounded to four decimals.
    pub fn to_limited_string(&self) -> String {
        format!("{:.4}", self)
    }
}
