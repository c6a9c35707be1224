//! # Numrus Core
//!
//! Shared building blocks for the numrus BLAS.
//!
//! This crate provides:
//! - **Layout adapter**: CBLAS option enums and the single (row, col) to
//!   offset mapping, including banded and packed addressing.
//! - **Scalar model**: the [`Scalar`] trait the kernels are generic over,
//!   implemented for `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
//! - **Validation**: precondition checks and the fatal [`error::fail`] path.
//! - **Vector kernels**: contiguous and general-increment loops.

pub mod check;
pub mod error;
pub mod kernels;
pub mod layout;
pub mod scalar;

pub use error::{BlasError, Result};
pub use layout::{Diag, Layout, Side, Transpose, Uplo};
pub use scalar::{RealScalar, Scalar, C32, C64};
