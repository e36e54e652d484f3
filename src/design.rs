//! Regression design-matrix construction.

use crate::error::{DecorrError, Result};
use ndarray::{Array2, ArrayView1};

/// Assemble an N x (k+1) design matrix from `k` predictor vectors.
///
/// The first column is the constant 1 (intercept); the remaining columns are
/// the predictors in the order supplied.
///
/// # Arguments
///
/// * `predictors` - One or more predictor vectors of equal length N.
///
/// # Errors
///
/// Returns `InvalidArgument` if no predictors are given or the predictors are
/// empty, and `ShapeMismatch` if the predictors have unequal lengths.
pub fn design_matrix(predictors: &[ArrayView1<f64>]) -> Result<Array2<f64>> {
    if predictors.is_empty() {
        return Err(DecorrError::InvalidArgument(
            "at least one predictor is required".to_string(),
        ));
    }
    let n = predictors[0].len();
    if n == 0 {
        return Err(DecorrError::InvalidArgument(
            "predictors must be non-empty".to_string(),
        ));
    }
    for (j, p) in predictors.iter().enumerate() {
        if p.len() != n {
            return Err(DecorrError::ShapeMismatch {
                expected: format!("{} rows (from predictor 0)", n),
                actual: format!("{} rows (predictor {})", p.len(), j),
            });
        }
    }

    let mut design = Array2::ones((n, predictors.len() + 1));
    for (j, p) in predictors.iter().enumerate() {
        design.column_mut(j + 1).assign(p);
    }
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_single_predictor_layout() {
        let x = array![2.0, 4.0, 6.0];
        let design = design_matrix(&[x.view()]).unwrap();
        assert_eq!(design.dim(), (3, 2));
        assert_eq!(design.column(0), array![1.0, 1.0, 1.0]);
        assert_eq!(design.column(1), x);
    }

    #[test]
    fn test_preserves_predictor_order() {
        let x = array![1.0, 2.0];
        let z = array![3.0, 4.0];
        let design = design_matrix(&[x.view(), z.view()]).unwrap();
        assert_eq!(design.dim(), (2, 3));
        assert_eq!(design.column(1), x);
        assert_eq!(design.column(2), z);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let x = array![1.0, 2.0, 3.0];
        let z = array![1.0, 2.0];
        let result = design_matrix(&[x.view(), z.view()]);
        assert!(matches!(result, Err(DecorrError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(design_matrix(&[]).is_err());
        let x = ndarray::Array1::<f64>::zeros(0);
        assert!(design_matrix(&[x.view()]).is_err());
    }
}
