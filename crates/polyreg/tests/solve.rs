//! Integration tests for the Gaussian elimination solver.

use polyreg::linalg::mat_vec;
use polyreg::math::{Array1, Array2};
use polyreg::solve::{solve, solve_with, DEFAULT_PIVOT_TOLERANCE};
use polyreg::{LinalgError, SolverConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random diagonally dominant matrix, which is always well conditioned.
fn random_system(rng: &mut StdRng, n: usize) -> Array2<f64> {
    let mut a = Array2::zeros(n, n);
    for i in 0..n {
        let mut off_diag = 0.0;
        for j in 0..n {
            if i != j {
                let v: f64 = rng.gen_range(-1.0..1.0);
                a[(i, j)] = v;
                off_diag += v.abs();
            }
        }
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        a[(i, i)] = sign * (off_diag + rng.gen_range(1.0..2.0));
    }
    a
}

// ---------------------------------------------------------------------------
// Known systems
// ---------------------------------------------------------------------------

#[test]
fn solve_two_by_two() {
    let a = Array2::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
    let b = Array1::from_vec(vec![3.0, 5.0]);
    let x = solve(&a, &b).unwrap();
    assert!((x[0] - 0.8).abs() < 1e-12, "x[0] = {}", x[0]);
    assert!((x[1] - 1.4).abs() < 1e-12, "x[1] = {}", x[1]);
}

#[test]
fn solve_identity_returns_rhs() {
    let a = Array2::identity(4);
    let b = Array1::from_vec(vec![1.0, -2.0, 3.5, 0.0]);
    assert_eq!(solve(&a, &b).unwrap(), b);
}

#[test]
fn solve_true_zero_solution_is_ok() {
    let a = Array2::from_rows(vec![vec![3.0, 1.0], vec![1.0, 2.0]]).unwrap();
    let b = Array1::zeros(2);
    let x = solve(&a, &b).unwrap();
    assert_eq!(x.to_vec(), vec![0.0, 0.0]);
}

#[test]
fn solve_leaves_inputs_untouched() {
    let a = Array2::from_rows(vec![vec![0.0, 2.0], vec![4.0, 1.0]]).unwrap();
    let b = Array1::from_vec(vec![2.0, 9.0]);
    let (a0, b0) = (a.clone(), b.clone());
    let x = solve(&a, &b).unwrap();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
    assert!((x[0] - 2.0).abs() < 1e-12);
    assert!((x[1] - 1.0).abs() < 1e-12);
}

#[test]
fn solve_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [1usize, 2, 3, 5, 8, 12] {
        let a = random_system(&mut rng, n);
        let x: Array1<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let b = mat_vec(&a, &x).unwrap();
        let got = solve(&a, &b).unwrap();
        for i in 0..n {
            assert!(
                (got[i] - x[i]).abs() < 1e-6,
                "n={} i={} got {} want {}",
                n,
                i,
                got[i],
                x[i]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Singular systems
// ---------------------------------------------------------------------------

#[test]
fn solve_dependent_rows_is_singular() {
    let a = Array2::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let b = Array1::from_vec(vec![1.0, 2.0]);
    match solve(&a, &b) {
        Err(LinalgError::Singular { column, .. }) => assert_eq!(column, 1),
        other => panic!("expected singular error, got {:?}", other),
    }
}

#[test]
fn solve_zero_row_is_singular() {
    let a = Array2::from_rows(vec![vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
    let b = Array1::from_vec(vec![0.0, 1.0]);
    assert!(matches!(solve(&a, &b), Err(LinalgError::Singular { .. })));
}

#[test]
fn pivot_tolerance_is_tunable() {
    let a = Array2::from_rows(vec![vec![1e-12, 0.0], vec![0.0, 1e-12]]).unwrap();
    let b = Array1::from_vec(vec![1e-12, 2e-12]);

    assert!(matches!(solve(&a, &b), Err(LinalgError::Singular { column: 0, .. })));

    let loose = SolverConfig::new(1e-15);
    let x = solve_with(&a, &b, &loose).unwrap();
    assert!((x[0] - 1.0).abs() < 1e-9);
    assert!((x[1] - 2.0).abs() < 1e-9);
}

#[test]
fn default_tolerance_constant() {
    assert_eq!(DEFAULT_PIVOT_TOLERANCE, 1e-10);
    assert_eq!(SolverConfig::default().pivot_tolerance, DEFAULT_PIVOT_TOLERANCE);
}

// ---------------------------------------------------------------------------
// Shape validation
// ---------------------------------------------------------------------------

#[test]
fn solve_non_square_errors() {
    let a = Array2::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let b = Array1::from_vec(vec![1.0, 2.0]);
    assert!(matches!(
        solve(&a, &b),
        Err(LinalgError::DimensionMismatch { op: "solve", .. })
    ));
}

#[test]
fn solve_rhs_length_mismatch_errors() {
    let a = Array2::identity(3);
    let b = Array1::from_vec(vec![1.0, 2.0]);
    assert!(matches!(
        solve(&a, &b),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn solve_empty_system_errors() {
    let a: Array2<f64> = Array2::zeros(0, 0);
    let b = Array1::from_vec(vec![]);
    assert!(matches!(solve(&a, &b), Err(LinalgError::InvalidInput(_))));
}

#[test]
fn solve_rejects_zero_tolerance() {
    let a = Array2::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let b = Array1::from_vec(vec![1.0, 2.0]);
    let cfg = SolverConfig::new(0.0);
    assert!(matches!(solve_with(&a, &b, &cfg), Err(LinalgError::InvalidInput(_))));
}

#[test]
fn exact_zero_pivot_is_singular_under_tiny_tolerance() {
    let a = Array2::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let b = Array1::from_vec(vec![1.0, 2.0]);
    let cfg = SolverConfig::new(f64::MIN_POSITIVE);
    assert!(matches!(
        solve_with(&a, &b, &cfg),
        Err(LinalgError::Singular { column: 1, .. })
    ));
}

#[test]
fn infinite_entry_is_singular() {
    let a = Array2::from_rows(vec![vec![f64::INFINITY, 1.0], vec![1.0, 1.0]]).unwrap();
    let b = Array1::from_vec(vec![1.0, 2.0]);
    assert!(matches!(solve(&a, &b), Err(LinalgError::Singular { column: 0, .. })));
}

#[test]
fn solve_rejects_negative_tolerance() {
    let a = Array2::identity(2);
    let b = Array1::from_vec(vec![1.0, 1.0]);
    let cfg = SolverConfig::new(-1.0);
    assert!(matches!(solve_with(&a, &b, &cfg), Err(LinalgError::InvalidInput(_))));
}
