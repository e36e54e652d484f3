//! Pearson correlation and the moment helpers behind it.

use crate::error::{DecorrError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Mean of a vector.
pub fn mean(x: &ArrayView1<f64>) -> f64 {
    x.sum() / x.len() as f64
}

/// Sample standard deviation (ddof = 1).
pub fn sample_std(x: &ArrayView1<f64>) -> f64 {
    let m = mean(x);
    let ss: f64 = x.iter().map(|&v| (v - m) * (v - m)).sum();
    (ss / (x.len() - 1) as f64).sqrt()
}

/// Pearson correlation coefficient between two equal-length vectors.
///
/// # Errors
///
/// Returns `ShapeMismatch` on unequal lengths, `InvalidArgument` for fewer
/// than two observations, and `DegenerateInput` when either vector has zero
/// variance (the correlation is undefined for a constant vector).
pub fn pearson(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> Result<f64> {
    if x.len() != y.len() {
        return Err(DecorrError::ShapeMismatch {
            expected: format!("two vectors of length {}", x.len()),
            actual: format!("lengths {} and {}", x.len(), y.len()),
        });
    }
    if x.len() < 2 {
        return Err(DecorrError::InvalidArgument(
            "correlation requires at least two observations".to_string(),
        ));
    }

    let mx = mean(x);
    let my = mean(y);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mx;
        let dy = yi - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Err(DecorrError::DegenerateInput(
            "correlation is undefined for a zero-variance vector".to_string(),
        ));
    }
    Ok(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Pairwise Pearson correlations between the columns of a matrix.
///
/// Returns a p x p symmetric matrix with unit diagonal.
pub fn correlation_matrix(columns: &ArrayView2<f64>) -> Result<Array2<f64>> {
    let (n, p) = columns.dim();
    if n < 2 {
        return Err(DecorrError::InvalidArgument(
            "correlation requires at least two rows".to_string(),
        ));
    }
    let mut corr = Array2::eye(p);
    for i in 0..p {
        for j in (i + 1)..p {
            let r = pearson(&columns.column(i), &columns.column(j))?;
            corr[[i, j]] = r;
            corr[[j, i]] = r;
        }
    }
    Ok(corr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_perfect_positive_correlation() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        let y = array![2.0, 4.0, 6.0, 8.0];
        let r = pearson(&x.view(), &y.view()).unwrap();
        assert_relative_eq!(r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![3.0, 2.0, 1.0];
        let r = pearson(&x.view(), &y.view()).unwrap();
        assert_relative_eq!(r, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_idempotent_on_fixed_inputs() {
        let x = array![0.3, -1.2, 2.5, 0.0, 1.1];
        let y = array![1.0, 0.4, -0.7, 2.2, 0.9];
        let first = pearson(&x.view(), &y.view()).unwrap();
        let second = pearson(&x.view(), &y.view()).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_constant_vector_rejected() {
        let x = array![1.0, 1.0, 1.0];
        let y = array![1.0, 2.0, 3.0];
        let result = pearson(&x.view(), &y.view());
        assert!(matches!(result, Err(DecorrError::DegenerateInput(_))));
    }

    #[test]
    fn test_single_observation_rejected() {
        let x = array![1.0];
        let y = array![2.0];
        assert!(pearson(&x.view(), &y.view()).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let x = array![1.0, 2.0];
        let y = array![1.0, 2.0, 3.0];
        assert!(matches!(
            pearson(&x.view(), &y.view()),
            Err(DecorrError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_correlation_matrix_diagonal_and_symmetry() {
        let data = array![[1.0, 2.0], [2.0, 1.0], [3.0, 5.0], [4.0, 2.5]];
        let corr = correlation_matrix(&data.view()).unwrap();
        assert_relative_eq!(corr[[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(corr[[1, 1]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(corr[[0, 1]], corr[[1, 0]], epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std() {
        let x = array![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Known sample variance 4.571428..., std = sqrt of that.
        assert_relative_eq!(
            sample_std(&x.view()),
            (32.0_f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
    }
}
