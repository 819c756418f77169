use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Largest matrix that `inverse` / `adjugate` expand by cofactors by default.
pub const DEFAULT_MAX_COFACTOR_DIM: usize = 16;

/// Central configuration for the kernel.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct KernelConfig {
    /// Upper bound on the dimension handed to cofactor expansion.
    /// `None` disables the guard.
    pub max_cofactor_dim: Option<usize>,

    /// Seed for random matrix generators. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Decimal places used when printing. `None` prints full precision.
    pub precision: Option<usize>,

    /// Field separator used by `io::read_matrix` / `io::write_matrix`.
    pub delimiter: Delimiter,
}

impl KernelConfig {
    pub fn new(max_cofactor_dim: Option<usize>, seed: Option<u64>) -> Self {
        Self {
            max_cofactor_dim,
            seed,
            ..Self::default()
        }
    }

    /// Build the random source used by `Matrix::random*`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            max_cofactor_dim: Some(DEFAULT_MAX_COFACTOR_DIM),
            seed: None,
            precision: None,
            delimiter: Delimiter::Auto,
        }
    }
}

/// Field separator for delimited matrix files.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Pick from the file extension: `.tsv` is tab separated, anything else comma.
    #[default]
    Auto,
    #[serde(alias = "csv")]
    Comma,
    #[serde(alias = "tsv")]
    Tab,
}

impl Delimiter {
    pub fn byte_for(self, path: &std::path::Path) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Auto => {
                let ext = path
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_lowercase());
                match ext.as_deref() {
                    Some("tsv") => b'\t',
                    _ => b',',
                }
            }
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Delimiter::Auto),
            "csv" | "comma" => Ok(Delimiter::Comma),
            "tsv" | "tab" => Ok(Delimiter::Tab),
            _ => Err(format!(
                "Unknown delimiter: {}. Expected one of `auto`, `csv`, `tsv`",
                s
            )),
        }
    }
}
