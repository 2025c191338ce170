//! Integration tests for the NMF engine
//!
//! Exercises the public API end to end: matrix construction, validation,
//! factorization with both update rules, and the error metrics.

use fast_nmf::config::sample_matrix;
use fast_nmf::ops::{frobenius_norm, multiply};
use fast_nmf::{DenseMatrix, NmfConfig, NmfEngine, NmfError, UpdateRule};
use ndarray::Array2;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a non-negative matrix with planted low-rank structure plus noise
fn create_test_matrix(n_rows: usize, n_cols: usize, rank: usize, seed: u64) -> DenseMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = Array2::random_using((n_rows, rank), Uniform::new(0.0, 1.0), &mut rng);
    let h = Array2::random_using((rank, n_cols), Uniform::new(0.0, 1.0), &mut rng);
    let noise = Array2::random_using((n_rows, n_cols), Uniform::new(0.0, 0.05), &mut rng);
    DenseMatrix::from_array(w.dot(&h) + noise)
}

#[test]
fn test_sample_matrix_scenario() {
    init_logger();
    let config = NmfConfig {
        rank: 2,
        max_iter: 500,
        epsilon: 1e-9,
        update_rule: UpdateRule::RowNormRegularized { lambda: 0.01 },
        seed: Some(2025),
    };
    let mut engine = NmfEngine::new(sample_matrix(), config).unwrap();
    let summary = engine.factorize().unwrap();

    assert_eq!(engine.w().shape(), (4, 2));
    assert_eq!(engine.h().shape(), (2, 5));
    assert!(summary.relative_error < 0.3, "relative error {}", summary.relative_error);
    assert!(summary.relative_error >= 0.0);
    assert!(
        (engine.relative_reconstruction_error().unwrap()
            - engine.reconstruction_error().unwrap() / (frobenius_norm(engine.v()) + 1e-9))
            .abs()
            < 1e-15
    );
}

#[test]
fn test_engine_input_is_untouched() {
    init_logger();
    let v = sample_matrix();
    let mut engine = NmfEngine::new(v.clone(), NmfConfig { seed: Some(1), ..NmfConfig::new(2, 50) })
        .unwrap();
    engine.factorize().unwrap();
    assert_eq!(engine.v(), &v);
}

#[test]
fn test_planted_low_rank_structure() {
    init_logger();
    let v = create_test_matrix(30, 20, 3, 17);
    let config = NmfConfig {
        update_rule: UpdateRule::LeeSeung,
        seed: Some(5),
        ..NmfConfig::new(3, 400)
    };
    let mut engine = NmfEngine::new(v, config).unwrap();

    let mut prev = engine.reconstruction_error().unwrap();
    for _ in 0..8 {
        engine.run_iterations(50).unwrap();
        let err = engine.reconstruction_error().unwrap();
        assert!(err <= prev * (1.0 + 1e-6) + 1e-12, "{} -> {}", prev, err);
        prev = err;
    }

    assert_eq!(engine.iterations_run(), 400);
    assert!(engine.relative_reconstruction_error().unwrap() < 0.1);
    assert!(engine.w().is_non_negative());
    assert!(engine.h().is_non_negative());
}

#[test]
fn test_injected_rng_is_reproducible() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(99);
        let mut engine = NmfEngine::with_rng(sample_matrix(), NmfConfig::new(2, 100), &mut rng)
            .unwrap();
        engine.factorize().unwrap();
        engine.into_factors()
    };
    let (w1, h1) = run();
    let (w2, h2) = run();
    assert_eq!(w1, w2);
    assert_eq!(h1, h2);
}

#[test]
fn test_unseeded_engines_start_differently() {
    let a = NmfEngine::new(sample_matrix(), NmfConfig::default()).unwrap();
    let b = NmfEngine::new(sample_matrix(), NmfConfig::default()).unwrap();
    assert_ne!(a.w(), b.w());
}

#[test]
fn test_validation_errors() {
    assert!(matches!(
        DenseMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]),
        Err(NmfError::RaggedRows { row: 1, .. })
    ));

    let too_large_rank = NmfEngine::new(sample_matrix(), NmfConfig::new(6, 10));
    assert!(matches!(too_large_rank, Err(NmfError::InvalidHyperparameter(_))));

    let negative = DenseMatrix::from_rows(vec![vec![1.0, -0.5], vec![0.0, 2.0]]).unwrap();
    let err = NmfEngine::new(negative, NmfConfig::new(1, 10)).unwrap_err();
    assert!(matches!(err, NmfError::NumericDegeneracy { row: 0, col: 1, .. }));
    assert!(err.to_string().contains("non-negativity"));
}

#[test]
fn test_multiply_rejects_mismatched_shapes() {
    let a = DenseMatrix::zeros(2, 3);
    let b = DenseMatrix::zeros(4, 5);
    let err = multiply(&a, &b).unwrap_err();
    assert_eq!(
        err,
        NmfError::DimensionMismatch {
            op: "multiply",
            left: (2, 3),
            right: (4, 5)
        }
    );
}

#[test]
fn test_frobenius_norm_of_3_4_row() {
    let a = DenseMatrix::from_rows(vec![vec![3.0, 4.0], vec![0.0, 0.0]]).unwrap();
    assert!((frobenius_norm(&a) - 5.0).abs() < 1e-12);
}

#[test]
fn test_rendering_exposes_rows() {
    let engine = NmfEngine::new(sample_matrix(), NmfConfig { seed: Some(3), ..NmfConfig::new(2, 1) })
        .unwrap();
    let rows = engine.w().to_rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 2));
    let text = engine.to_string();
    assert!(text.contains("W = "));
    assert!(text.contains("H = "));
}
