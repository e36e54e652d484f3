//! # decorr
//!
//! Constructing exactly uncorrelated regressors via OLS residuals.
//!
//! Two independent random vectors are uncorrelated in expectation, but any
//! finite sample of them is not. This crate constructs uncorrelatedness
//! instead of hoping for it: regress one draw on the other by ordinary least
//! squares and keep the residual, which is orthogonal to the regressor by
//! the normal equations. A bonus path generalizes the trick to an arbitrary
//! number of mutually uncorrelated, unit-variance columns through an
//! SVD-derived orthonormal basis.
//!
//! The econometric payoff: when regressors are uncorrelated, their slopes in
//! separate simple regressions match their slopes in the joint multiple
//! regression ([`equivalence::compare_regressions`]).
//!
//! ## Example
//!
//! ```
//! use decorr::prelude::*;
//!
//! let mut sampler = Sampler::seeded(42);
//! let pair = orthogonal_pair(&mut sampler, 30).unwrap();
//! assert!(pair.correlation.abs() < 1e-9);
//! ```

pub mod correlation;
pub mod design;
pub mod equivalence;
pub mod error;
pub mod ols;
pub mod orthogonal;
pub mod report;
pub mod sampler;

pub mod prelude {
    //! Convenient re-exports of commonly used items.
    pub use crate::correlation::{correlation_matrix, pearson, sample_std};
    pub use crate::design::design_matrix;
    pub use crate::equivalence::{CoefficientComparison, compare_regressions};
    pub use crate::error::{DecorrError, Result};
    pub use crate::ols::{OlsFit, OlsFitMulti, fit, fit_multi};
    pub use crate::orthogonal::{
        OrthogonalPair, decorrelate, orthogonal_pair, orthonormal_columns,
    };
    pub use crate::report::{SummaryTable, comparison_table};
    pub use crate::sampler::Sampler;
}
