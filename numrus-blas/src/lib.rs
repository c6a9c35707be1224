// BLAS functions match CBLAS signatures, so long parameter lists are inherent to the API.
// Numeric kernels use index loops on packed arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # numrus BLAS
//!
//! Portable reference BLAS in pure Rust. No FFI, no C dependencies.
//!
//! Every routine is written once, generic over [`Scalar`] (`f32`, `f64`,
//! [`C32`], [`C64`]). The conventional precision-prefixed names live in
//! [`named`].
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `dot`, `dotc`, `axpy`, `scal`, `nrm2`,
//!   `asum`, `iamax`, `copy`, `swap`, plus the plane rotations in [`rotation`]
//! - **Level 2** (matrix-vector): general, symmetric/Hermitian and triangular
//!   products, rank updates and triangular solves in dense, banded and
//!   packed storage
//! - **Level 3** (matrix-matrix): `gemm`, `symm`, `hemm`, `syrk`, `herk`,
//!   `syr2k`, `her2k`, `trmm`, `trsm`
//!
//! ## Memory Layout
//!
//! Both row-major and column-major layouts are supported via CBLAS-style API.
//! All matrix operations accept a `Layout` parameter.
//!
//! ## Errors
//!
//! Invalid arguments (zero increments, short buffers, small leading
//! dimensions) are programming errors: the routine logs a
//! [`BlasError`] through `tracing` and panics before touching any buffer.
//! The validators in [`numrus_core::check`] are public for callers that
//! prefer to test arguments up front.
//!
//! ```
//! use numrus_blas::{level3, Layout, Transpose};
//!
//! let (m, n, k) = (2, 2, 3);
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let b = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let mut c = [0.0f64; 4];
//! level3::gemm(Layout::RowMajor, Transpose::NoTrans, Transpose::NoTrans,
//!              m, n, k, 1.0, &a, k, &b, n, 0.0, &mut c, n);
//! assert_eq!(c, [4.0, 5.0, 10.0, 11.0]);
//! ```

pub mod backend;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod named;
pub mod rotation;

pub use numrus_core::layout::{Diag, Layout, Side, Transpose, Uplo};
pub use numrus_core::{BlasError, RealScalar, Result, Scalar, C32, C64};

pub use backend::{Backend, Level1, Level2, Level3, Native, Rotations};
pub use rotation::{Givens, RotationForm, RotmParams};
