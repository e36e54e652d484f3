//! Construction of exactly uncorrelated vectors and matrices.
//!
//! Two independent random draws are only uncorrelated in expectation; any
//! finite sample carries some incidental correlation. The trick here is to
//! stop hoping and construct: regress the second draw on the first and keep
//! the residual, which the least-squares normal conditions force to be
//! orthogonal to the regressor (and, through the intercept, mean-zero), hence
//! uncorrelated with it up to floating-point error.
//!
//! The multi-column path generalizes the idea to p columns at once through an
//! orthonormal basis of a centered random matrix rather than a chain of
//! regressions.

use crate::correlation::{pearson, sample_std};
use crate::design::design_matrix;
use crate::error::{DecorrError, Result};
use crate::ols;
use crate::sampler::Sampler;
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayView1};

/// A predictor together with a residual constructed to be uncorrelated
/// with it.
#[derive(Debug, Clone)]
pub struct OrthogonalPair {
    /// The predictor vector, drawn standard-normal.
    pub x: Array1<f64>,
    /// Residual of a second independent draw regressed on `[1, x]`.
    pub residual: Array1<f64>,
    /// Sample correlation between `x` and `residual`; zero up to
    /// floating-point tolerance by the orthogonality of OLS residuals.
    pub correlation: f64,
}

/// Replace `y` with the part of it that is uncorrelated with `x`.
///
/// Regresses `y` on the design `[1, x]` and returns the residual. The result
/// has (numerically) zero mean and zero sample correlation with `x`.
///
/// # Errors
///
/// Propagates the design-matrix and solver failure modes; in particular the
/// vectors must have equal length and at least two observations are needed
/// for the two-column regression to be posed at all.
pub fn decorrelate(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> Result<Array1<f64>> {
    if y.len() != x.len() {
        return Err(DecorrError::ShapeMismatch {
            expected: format!("response of length {}", x.len()),
            actual: format!("length {}", y.len()),
        });
    }
    let design = design_matrix(&[x.view()])?;
    let fit = ols::fit(&design.view(), y)?;
    Ok(fit.residuals)
}

/// Draw two independent standard-normal vectors of length `n` and return the
/// first together with the decorrelated residual of the second.
///
/// # Arguments
///
/// * `sampler` - Source of standard-normal draws; advanced by two vectors.
/// * `n` - Number of observations. Must be at least 3: two observations
///   exactly determine the two-coefficient regression and leave a zero
///   residual with undefined correlation.
pub fn orthogonal_pair(sampler: &mut Sampler, n: usize) -> Result<OrthogonalPair> {
    if n < 3 {
        return Err(DecorrError::InvalidArgument(format!(
            "orthogonal pair requires at least 3 observations, got {}",
            n
        )));
    }
    let x = sampler.standard_normal(n)?;
    let y = sampler.standard_normal(n)?;
    let residual = decorrelate(&x.view(), &y.view())?;
    let correlation = pearson(&x.view(), &residual.view())?;
    Ok(OrthogonalPair {
        x,
        residual,
        correlation,
    })
}

/// Draw an `n` x `p` matrix and reshape it into `p` mutually uncorrelated,
/// unit-variance columns.
///
/// Each column of the draw is centered, an orthonormal basis of the centered
/// column space is extracted from the SVD, and each basis column is rescaled
/// to unit sample standard deviation. Centering makes every basis column
/// orthogonal to the constant vector, so orthogonality of the basis is
/// exactly zero sample covariance.
///
/// Unlike [`orthogonal_pair`] this produces mutually orthogonal directions,
/// not the residuals of any particular regression.
///
/// # Errors
///
/// Returns `UndersizedInput` when `n <= p` (centering removes one dimension,
/// so p orthogonal mean-zero directions need at least p + 1 rows) and
/// `DegenerateInput` if the draw is rank-deficient, which for continuous
/// draws indicates a numerical problem rather than bad luck.
pub fn orthonormal_columns(sampler: &mut Sampler, n: usize, p: usize) -> Result<Array2<f64>> {
    if p == 0 {
        return Err(DecorrError::InvalidArgument(
            "at least one column is required".to_string(),
        ));
    }
    if n <= p {
        return Err(DecorrError::UndersizedInput { rows: n, cols: p });
    }

    let mut draw = sampler.standard_normal_matrix(n, p)?;
    for mut col in draw.columns_mut() {
        let m = col.sum() / n as f64;
        col.mapv_inplace(|v| v - m);
    }

    let svd = DMatrix::from_row_iterator(n, p, draw.iter().copied()).svd(true, true);
    let u = svd
        .u
        .ok_or_else(|| DecorrError::DegenerateInput("SVD produced no basis".to_string()))?;
    let rank = svd
        .singular_values
        .iter()
        .filter(|&&s| s > ols::SVD_EPS)
        .count();
    if rank < p {
        return Err(DecorrError::DegenerateInput(format!(
            "drawn matrix has rank {} < {}",
            rank, p
        )));
    }

    let mut basis = Array2::zeros((n, p));
    for j in 0..p {
        for i in 0..n {
            basis[[i, j]] = u[(i, j)];
        }
        let s = sample_std(&basis.column(j).view());
        basis.column_mut(j).mapv_inplace(|v| v / s);
    }
    Ok(basis)
}
