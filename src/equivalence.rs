//! Coefficient equivalence between simple and multiple regressions.
//!
//! When two regressors are uncorrelated, the coefficient each one earns in
//! its own simple regression equals the coefficient it earns in the joint
//! multiple regression. This module fits all three models on a shared
//! response and packages the coefficients side by side.

use crate::correlation::pearson;
use crate::design::design_matrix;
use crate::error::Result;
use crate::ols;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Slopes of two regressors across simple and joint fits on one response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientComparison {
    /// Sample correlation between the two regressors.
    pub regressor_correlation: f64,
    /// Slope of x in `y ~ x`.
    pub simple_x: f64,
    /// Slope of z in `y ~ z`.
    pub simple_z: f64,
    /// Slope of x in `y ~ x + z`.
    pub joint_x: f64,
    /// Slope of z in `y ~ x + z`.
    pub joint_z: f64,
}

impl CoefficientComparison {
    /// Largest absolute gap between a simple slope and its joint counterpart.
    pub fn max_discrepancy(&self) -> f64 {
        let dx = (self.simple_x - self.joint_x).abs();
        let dz = (self.simple_z - self.joint_z).abs();
        dx.max(dz)
    }
}

/// Fit `y ~ x`, `y ~ z`, and `y ~ x + z` and compare the slopes.
///
/// All three vectors must share the same length. When
/// `regressor_correlation` is (numerically) zero the simple and joint slopes
/// agree up to floating-point tolerance; when the regressors are correlated
/// the simple slopes absorb part of each other's effect and the comparison
/// quantifies by how much.
pub fn compare_regressions(
    x: &ArrayView1<f64>,
    z: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
) -> Result<CoefficientComparison> {
    let regressor_correlation = pearson(x, z)?;

    let design_x = design_matrix(&[x.view()])?;
    let design_z = design_matrix(&[z.view()])?;
    let design_xz = design_matrix(&[x.view(), z.view()])?;

    let fit_x = ols::fit(&design_x.view(), y)?;
    let fit_z = ols::fit(&design_z.view(), y)?;
    let fit_xz = ols::fit(&design_xz.view(), y)?;

    Ok(CoefficientComparison {
        regressor_correlation,
        simple_x: fit_x.coefficients[1],
        simple_z: fit_z.coefficients[1],
        joint_x: fit_xz.coefficients[1],
        joint_z: fit_xz.coefficients[2],
    })
}
