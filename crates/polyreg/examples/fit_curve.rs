use anyhow::Result;
use itertools_num::linspace;
use polyreg::math::{Array1, Array2};
use polyreg::regression::{fit_polynomial, Point};
use polyreg::solve::solve;
use polyreg::FitConfig;

fn main() -> Result<()> {
    env_logger::init();

    // 2x + y = 3, x + 3y = 5
    let a = Array2::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]])?;
    let b = Array1::from_vec(vec![3.0, 5.0]);
    println!("solve: x = {}", solve(&a, &b)?);

    // Noisy samples of y = 1 - 0.5x + 2x^2
    let noise = [0.04, -0.03, 0.01, 0.05, -0.02, -0.04, 0.02, 0.03, -0.01, 0.0, -0.05];
    let points: Vec<Point> = linspace(-1.0, 1.0, noise.len())
        .zip(noise.iter())
        .map(|(x, e)| Point::new(x, 1.0 - 0.5 * x + 2.0 * x * x + e))
        .collect();

    for degree in 0..=3 {
        let fit = fit_polynomial(&points, &FitConfig::new(degree))?;
        println!(
            "degree {}: coefficients = {:?}, R^2 = {:.4}",
            degree, fit.coefficients, fit.r_squared
        );
    }

    Ok(())
}
