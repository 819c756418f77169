use std::path::Path;

use anyhow::{anyhow, Context, Result};

use matrixtool::io::read_matrix_with;
use matrixtool::matrix::structure::column;
use matrixtool::matrix::{determinant, echelon_form, inverse_with, rank, transpose};
use matrixtool::{fit_curve_with, KernelConfig, Matrix};

/// Load a JSON kernel configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<KernelConfig> {
    let Some(path) = path else {
        return Ok(KernelConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: KernelConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Format a matrix using the configured precision.
pub fn render(x: &Matrix, config: &KernelConfig) -> String {
    match config.precision {
        Some(p) => format!("{:.*}", p, x),
        None => x.to_string(),
    }
}

fn render_scalar(v: f64, config: &KernelConfig) -> String {
    match config.precision {
        Some(p) => format!("{:.*}", p, v),
        None => v.to_string(),
    }
}

fn load(path: &Path, config: &KernelConfig) -> Result<Matrix> {
    read_matrix_with(path, config.delimiter)
}

pub fn run_det(path: &Path, config: &KernelConfig) -> Result<String> {
    let x = load(path, config)?;
    let det = determinant(&x).context("Failed to compute determinant")?;
    Ok(render_scalar(det, config))
}

pub fn run_inverse(path: &Path, config: &KernelConfig) -> Result<String> {
    let x = load(path, config)?;
    let inv = inverse_with(&x, config).context("Failed to invert matrix")?;
    Ok(render(&inv, config))
}

pub fn run_rank(path: &Path, config: &KernelConfig) -> Result<String> {
    let x = load(path, config)?;
    Ok(rank(&x).to_string())
}

pub fn run_echelon(path: &Path, config: &KernelConfig) -> Result<String> {
    let x = load(path, config)?;
    Ok(render(&echelon_form(&x), config))
}

pub fn run_transpose(path: &Path, config: &KernelConfig) -> Result<String> {
    let x = load(path, config)?;
    Ok(render(&transpose(&x), config))
}

/// Fit a polynomial through the `x,y` pairs of a two-column file. The
/// coefficients are printed as one row, highest power first.
pub fn run_fit(path: &Path, config: &KernelConfig) -> Result<String> {
    let points = load(path, config)?;
    if points.ncols() != 2 {
        return Err(anyhow!(
            "Expected two columns (x, y) in {}, found {}",
            path.display(),
            points.ncols()
        ));
    }
    let xs = column(&points, 0)?;
    let ys = column(&points, 1)?;
    let coeffs = fit_curve_with(&xs, &ys, config).context("Failed to fit curve")?;
    Ok(render(&transpose(&coeffs), config))
}

pub fn run_random(
    rows: usize,
    cols: usize,
    range: Option<(f64, f64)>,
    config: &KernelConfig,
) -> Result<String> {
    let mut rng = config.rng();
    let x = match range {
        Some((min, max)) => Matrix::random_range(rows, cols, min, max, &mut rng)?,
        None => Matrix::random(rows, cols, &mut rng)?,
    };
    Ok(render(&x, config))
}
