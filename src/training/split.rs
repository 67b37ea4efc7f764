use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{AdSalesError, Result};

/// Train/holdout partition of a feature matrix and its targets
#[derive(Debug, Clone)]
pub struct Split {
    pub x_train: Array2<f64>,
    pub y_train: Array1<f64>,
    pub x_holdout: Array2<f64>,
    pub y_holdout: Array1<f64>,
}

/// Shuffle rows with a seeded RNG and hold out `ceil(n * holdout_ratio)` of them.
///
/// The same inputs, ratio and seed always give the same partition. A ratio
/// of `0.0` keeps every row for training, in input order.
pub fn train_test_split(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    holdout_ratio: f64,
    seed: u64,
) -> Result<Split> {
    if x.nrows() != y.len() {
        return Err(AdSalesError::Validation(format!(
            "feature rows {} != target rows {}",
            x.nrows(),
            y.len()
        )));
    }
    if !holdout_ratio.is_finite() || !(0.0..1.0).contains(&holdout_ratio) {
        return Err(AdSalesError::Validation(format!(
            "holdout_ratio must be in [0, 1), got {holdout_ratio}"
        )));
    }

    let n = y.len();
    let n_holdout = (n as f64 * holdout_ratio).ceil() as usize;
    if n_holdout >= n {
        return Err(AdSalesError::Validation(format!(
            "holdout of {n_holdout} rows leaves nothing to train on ({n} rows total)"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    if n_holdout > 0 {
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    }
    let (holdout_idx, train_idx) = indices.split_at(n_holdout);

    Ok(Split {
        x_train: x.select(Axis(0), train_idx),
        y_train: y.select(Axis(0), train_idx),
        x_holdout: x.select(Axis(0), holdout_idx),
        y_holdout: y.select(Axis(0), holdout_idx),
    })
}
