//! Ordinary least squares via singular value decomposition.
//!
//! The solver converts the `ndarray` inputs to `nalgebra` at the boundary and
//! solves the least-squares problem through an SVD rather than the normal
//! equations, so it stays well-defined when the design matrix is
//! rank-deficient or near-collinear. Singular values below [`SVD_EPS`] are
//! treated as zero, which yields the minimum-norm solution in the
//! rank-deficient case.

use crate::error::{DecorrError, Result};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Singular values at or below this threshold are treated as zero.
pub const SVD_EPS: f64 = 1e-12;

/// The result of fitting a single response by ordinary least squares.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Coefficient per design-matrix column, intercept first.
    pub coefficients: Array1<f64>,
    /// Design matrix times coefficients.
    pub fitted: Array1<f64>,
    /// Response minus fitted values. Orthogonal to every design column up to
    /// floating-point tolerance; with an intercept column the residuals sum
    /// to (approximately) zero.
    pub residuals: Array1<f64>,
}

/// The result of fitting `m` responses simultaneously against one design.
#[derive(Debug, Clone)]
pub struct OlsFitMulti {
    /// (k+1) x m coefficient matrix, one column per response.
    pub coefficients: Array2<f64>,
    /// N x m fitted values.
    pub fitted: Array2<f64>,
    /// N x m residuals.
    pub residuals: Array2<f64>,
}

/// Fit a response vector against a design matrix by least squares.
///
/// # Arguments
///
/// * `design` - N x (k+1) design matrix, typically from
///   [`design_matrix`](crate::design::design_matrix).
/// * `response` - Response vector of length N.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the response length differs from the design's
/// row count, `InvalidArgument` if the design has fewer rows than columns
/// (no degrees of freedom), and `DegenerateInput` if the decomposition cannot
/// produce a solution.
pub fn fit(design: &ArrayView2<f64>, response: &ArrayView1<f64>) -> Result<OlsFit> {
    let (n, k) = design.dim();
    check_design(n, k)?;
    if response.len() != n {
        return Err(DecorrError::ShapeMismatch {
            expected: format!("response of length {}", n),
            actual: format!("length {}", response.len()),
        });
    }

    let a = DMatrix::from_row_iterator(n, k, design.iter().copied());
    let b = DVector::from_iterator(n, response.iter().copied());
    let beta = a
        .svd(true, true)
        .solve(&b, SVD_EPS)
        .map_err(|e| DecorrError::DegenerateInput(e.to_string()))?;

    let coefficients = Array1::from_iter(beta.iter().copied());
    let fitted = design.dot(&coefficients);
    let residuals = response - &fitted;
    Ok(OlsFit {
        coefficients,
        fitted,
        residuals,
    })
}

/// Fit an N x m response matrix against a design matrix, one least-squares
/// problem per response column, sharing a single decomposition.
pub fn fit_multi(design: &ArrayView2<f64>, responses: &ArrayView2<f64>) -> Result<OlsFitMulti> {
    let (n, k) = design.dim();
    check_design(n, k)?;
    let (rn, m) = responses.dim();
    if rn != n {
        return Err(DecorrError::ShapeMismatch {
            expected: format!("{} response rows", n),
            actual: format!("{} rows", rn),
        });
    }

    let a = DMatrix::from_row_iterator(n, k, design.iter().copied());
    let b = DMatrix::from_row_iterator(n, m, responses.iter().copied());
    let beta = a
        .svd(true, true)
        .solve(&b, SVD_EPS)
        .map_err(|e| DecorrError::DegenerateInput(e.to_string()))?;

    let mut coefficients = Array2::zeros((k, m));
    for i in 0..k {
        for j in 0..m {
            coefficients[[i, j]] = beta[(i, j)];
        }
    }
    let fitted = design.dot(&coefficients);
    let residuals = responses - &fitted;
    Ok(OlsFitMulti {
        coefficients,
        fitted,
        residuals,
    })
}

fn check_design(n: usize, k: usize) -> Result<()> {
    if n == 0 || k == 0 {
        return Err(DecorrError::InvalidArgument(
            "design matrix must be non-empty".to_string(),
        ));
    }
    if n < k {
        return Err(DecorrError::InvalidArgument(format!(
            "{} observations cannot identify {} coefficients",
            n, k
        )));
    }
    Ok(())
}
