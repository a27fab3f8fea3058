use statrs::statistics::Statistics;

use crate::error::{LinalgError, Result};

fn check_lengths(observed: &[f64], predicted: &[f64]) -> Result<()> {
    if observed.len() != predicted.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "fit statistics",
            left: (observed.len(), 1),
            right: (predicted.len(), 1),
        });
    }
    Ok(())
}

/// Sum of squared differences between observed and predicted values.
pub fn residual_sum_of_squares(observed: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(observed, predicted)?;
    Ok(observed
        .iter()
        .zip(predicted.iter())
        .map(|(o, p)| (o - p) * (o - p))
        .sum())
}

/// Coefficient of determination, `1 - RSS / TSS`.
///
/// Sums of squares at or below `f64::EPSILON * Σy²` are rounding noise and
/// count as zero. When the observations have no spread the fit is scored 1.0
/// if it reproduces them and 0.0 otherwise.
///
/// # Arguments
///
/// * `observed` - The measured response values.
/// * `predicted` - Model predictions, one per observation.
pub fn r_squared(observed: &[f64], predicted: &[f64]) -> Result<f64> {
    let rss = residual_sum_of_squares(observed, predicted)?;
    if observed.is_empty() {
        return Err(LinalgError::InvalidInput(
            "r_squared requires at least one observation".to_string(),
        ));
    }
    let mean = observed.iter().mean();
    let tss: f64 = observed.iter().map(|o| (o - mean) * (o - mean)).sum();
    let noise = f64::EPSILON * observed.iter().map(|o| o * o).sum::<f64>();

    if tss <= noise {
        return Ok(if rss <= noise { 1.0 } else { 0.0 });
    }
    Ok(1.0 - rss / tss)
}

/// Root mean squared error.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> Result<f64> {
    let rss = residual_sum_of_squares(observed, predicted)?;
    if observed.is_empty() {
        return Err(LinalgError::InvalidInput(
            "rmse requires at least one observation".to_string(),
        ));
    }
    Ok((rss / observed.len() as f64).sqrt())
}
