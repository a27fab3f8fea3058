use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LinalgError, Result};
use crate::solve::DEFAULT_PIVOT_TOLERANCE;

/// Tuning knobs for Gaussian elimination.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Pivots with an absolute value below this are treated as zero.
    #[serde(default = "default_pivot_tolerance")]
    pub pivot_tolerance: f64,
}

fn default_pivot_tolerance() -> f64 {
    DEFAULT_PIVOT_TOLERANCE
}

impl SolverConfig {
    pub fn new(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance <= 0.0 {
            return Err(LinalgError::InvalidInput(format!(
                "pivot tolerance must be finite and positive, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

/// Configuration for a polynomial least-squares fit.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub degree: usize,

    #[serde(flatten)]
    pub solver: SolverConfig,
}

impl FitConfig {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            solver: SolverConfig::default(),
        }
    }

    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.solver.pivot_tolerance = pivot_tolerance;
        self
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Parses `"<degree>"` or `"<degree>:<pivot_tolerance>"`, e.g. `"3"` or `"3:1e-12"`.
impl FromStr for FitConfig {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(2, ':');
        let degree = parts
            .next()
            .unwrap_or_default()
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("Invalid degree in '{}': {}", s, e))?;

        let config = FitConfig::new(degree);
        match parts.next() {
            None => Ok(config),
            Some(tol) => {
                let tol = tol
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| format!("Invalid pivot tolerance in '{}': {}", s, e))?;
                let config = config.with_pivot_tolerance(tol);
                config.solver.validate().map_err(|e| e.to_string())?;
                Ok(config)
            }
        }
    }
}
