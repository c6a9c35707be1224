//! Swappable BLAS backend interface.
//!
//! [`Level1`], [`Level2`], [`Level3`] and [`Rotations`] describe the generic
//! routine surface. Every method has a default body that runs the portable
//! kernels of this crate, so the reference backend is [`Native`] with empty
//! impls. An adapter over a foreign library overrides the methods it
//! accelerates and inherits the rest:
//!
//! ```
//! use numrus_blas::{Backend, Layout, Level1, Level2, Native};
//!
//! fn norm_of_product<B: Level1<f64> + Level2<f64>>(b: &B, a: &[f64], x: &[f64]) -> f64 {
//!     let mut y = vec![0.0; 2];
//!     b.gemv(Layout::RowMajor, numrus_blas::Transpose::NoTrans, 2, 2,
//!            1.0, a, 2, x, 1, 0.0, &mut y, 1);
//!     b.nrm2(2, &y, 1)
//! }
//!
//! assert_eq!(norm_of_product(&Native, &[3.0, 0.0, 0.0, 4.0], &[1.0, 1.0]), 5.0);
//! assert!(Native.supports(Layout::ColMajor));
//! ```
//!
//! Matrix routines admit their storage order through [`Backend::admit`]
//! before delegating; an order missing from [`Backend::layouts`] fails with
//! [`BlasError::UnsupportedLayout`](numrus_core::BlasError::UnsupportedLayout).

use numrus_core::check;
use numrus_core::layout::{Diag, Layout, Side, Transpose, Uplo};
use numrus_core::{RealScalar, Scalar};

use crate::named::ensure;
use crate::rotation::{Givens, RotmParams};
use crate::{level1, level2, level3, rotation};

const BOTH: &[Layout] = &[Layout::RowMajor, Layout::ColMajor];

/// Identity and capabilities of a BLAS implementation.
///
/// Backends are stateless: `&self` exists for dispatch only.
pub trait Backend: Send + Sync {
    /// Human-readable name for diagnostics and benchmarking.
    fn name(&self) -> &'static str;

    /// Storage orders the backend implements.
    fn layouts(&self) -> &'static [Layout] {
        BOTH
    }

    fn supports(&self, layout: Layout) -> bool {
        self.layouts().contains(&layout)
    }

    /// Terminates `routine` on element type `T` if `layout` is not
    /// implemented.
    #[track_caller]
    fn admit<T: Scalar>(&self, routine: &'static str, layout: Layout) {
        ensure::<T>(check::layout_supported(routine, layout, self.layouts()));
    }
}

/// Vector-vector routines.
pub trait Level1<T: Scalar>: Backend {
    fn dot(&self, n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
        level1::dot(n, x, incx, y, incy)
    }

    fn dotu(&self, n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
        level1::dotu(n, x, incx, y, incy)
    }

    fn dotc(&self, n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
        level1::dotc(n, x, incx, y, incy)
    }

    fn nrm2(&self, n: usize, x: &[T], incx: isize) -> T::Real {
        level1::nrm2(n, x, incx)
    }

    fn asum(&self, n: usize, x: &[T], incx: isize) -> T::Real {
        level1::asum(n, x, incx)
    }

    fn iamax(&self, n: usize, x: &[T], incx: isize) -> Option<usize> {
        level1::iamax(n, x, incx)
    }

    fn scal(&self, n: usize, alpha: T, x: &mut [T], incx: isize) {
        level1::scal(n, alpha, x, incx)
    }

    fn rscal(&self, n: usize, alpha: T::Real, x: &mut [T], incx: isize) {
        level1::rscal(n, alpha, x, incx)
    }

    fn copy(&self, n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) {
        level1::copy(n, x, incx, y, incy)
    }

    fn swap(&self, n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) {
        level1::swap(n, x, incx, y, incy)
    }

    fn axpy(&self, n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) {
        level1::axpy(n, alpha, x, incx, y, incy)
    }
}

/// Plane rotations, defined for real element types only.
pub trait Rotations<T: RealScalar>: Backend {
    fn rotg(&self, a: T, b: T) -> Givens<T> {
        rotation::rotg(a, b)
    }

    fn rotmg(&self, d1: T, d2: T, x1: T, y1: T) -> (RotmParams<T>, T, T, T) {
        rotation::rotmg(d1, d2, x1, y1)
    }

    fn rot(&self, n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize, c: T, s: T) {
        rotation::rot(n, x, incx, y, incy, c, s)
    }

    fn rotm(&self, n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize, p: &RotmParams<T>) {
        rotation::rotm(n, x, incx, y, incy, p)
    }
}

/// Matrix-vector routines.
pub trait Level2<T: Scalar>: Backend {
    #[track_caller]
    fn gemv(
        &self, layout: Layout, trans: Transpose, m: usize, n: usize, alpha: T, a: &[T],
        lda: usize, x: &[T], incx: isize, beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("gemv", layout);
        level2::gemv(layout, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn gbmv(
        &self, layout: Layout, trans: Transpose, m: usize, n: usize, kl: usize, ku: usize,
        alpha: T, a: &[T], lda: usize, x: &[T], incx: isize, beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("gbmv", layout);
        level2::gbmv(layout, trans, m, n, kl, ku, alpha, a, lda, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn ger(
        &self, layout: Layout, m: usize, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("ger", layout);
        level2::ger(layout, m, n, alpha, x, incx, y, incy, a, lda)
    }

    #[track_caller]
    fn geru(
        &self, layout: Layout, m: usize, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("geru", layout);
        level2::geru(layout, m, n, alpha, x, incx, y, incy, a, lda)
    }

    #[track_caller]
    fn gerc(
        &self, layout: Layout, m: usize, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("gerc", layout);
        level2::gerc(layout, m, n, alpha, x, incx, y, incy, a, lda)
    }

    #[track_caller]
    fn symv(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, a: &[T], lda: usize, x: &[T],
        incx: isize, beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("symv", layout);
        level2::symv(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn hemv(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, a: &[T], lda: usize, x: &[T],
        incx: isize, beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("hemv", layout);
        level2::hemv(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn sbmv(
        &self, layout: Layout, uplo: Uplo, n: usize, k: usize, alpha: T, a: &[T], lda: usize,
        x: &[T], incx: isize, beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("sbmv", layout);
        level2::sbmv(layout, uplo, n, k, alpha, a, lda, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn hbmv(
        &self, layout: Layout, uplo: Uplo, n: usize, k: usize, alpha: T, a: &[T], lda: usize,
        x: &[T], incx: isize, beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("hbmv", layout);
        level2::hbmv(layout, uplo, n, k, alpha, a, lda, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn spmv(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, ap: &[T], x: &[T], incx: isize,
        beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("spmv", layout);
        level2::spmv(layout, uplo, n, alpha, ap, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn hpmv(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, ap: &[T], x: &[T], incx: isize,
        beta: T, y: &mut [T], incy: isize,
    ) {
        self.admit::<T>("hpmv", layout);
        level2::hpmv(layout, uplo, n, alpha, ap, x, incx, beta, y, incy)
    }

    #[track_caller]
    fn syr(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize,
        a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("syr", layout);
        level2::syr(layout, uplo, n, alpha, x, incx, a, lda)
    }

    #[track_caller]
    fn her(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T::Real, x: &[T], incx: isize,
        a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("her", layout);
        level2::her(layout, uplo, n, alpha, x, incx, a, lda)
    }

    #[track_caller]
    fn spr(&self, layout: Layout, uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize, ap: &mut [T]) {
        self.admit::<T>("spr", layout);
        level2::spr(layout, uplo, n, alpha, x, incx, ap)
    }

    #[track_caller]
    fn hpr(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T::Real, x: &[T], incx: isize,
        ap: &mut [T],
    ) {
        self.admit::<T>("hpr", layout);
        level2::hpr(layout, uplo, n, alpha, x, incx, ap)
    }

    #[track_caller]
    fn syr2(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("syr2", layout);
        level2::syr2(layout, uplo, n, alpha, x, incx, y, incy, a, lda)
    }

    #[track_caller]
    fn her2(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, a: &mut [T], lda: usize,
    ) {
        self.admit::<T>("her2", layout);
        level2::her2(layout, uplo, n, alpha, x, incx, y, incy, a, lda)
    }

    #[track_caller]
    fn spr2(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, ap: &mut [T],
    ) {
        self.admit::<T>("spr2", layout);
        level2::spr2(layout, uplo, n, alpha, x, incx, y, incy, ap)
    }

    #[track_caller]
    fn hpr2(
        &self, layout: Layout, uplo: Uplo, n: usize, alpha: T, x: &[T], incx: isize, y: &[T],
        incy: isize, ap: &mut [T],
    ) {
        self.admit::<T>("hpr2", layout);
        level2::hpr2(layout, uplo, n, alpha, x, incx, y, incy, ap)
    }

    #[track_caller]
    fn trmv(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[T],
        lda: usize, x: &mut [T], incx: isize,
    ) {
        self.admit::<T>("trmv", layout);
        level2::trmv(layout, uplo, trans, diag, n, a, lda, x, incx)
    }

    #[track_caller]
    fn tbmv(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, k: usize,
        a: &[T], lda: usize, x: &mut [T], incx: isize,
    ) {
        self.admit::<T>("tbmv", layout);
        level2::tbmv(layout, uplo, trans, diag, n, k, a, lda, x, incx)
    }

    #[track_caller]
    fn tpmv(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, ap: &[T],
        x: &mut [T], incx: isize,
    ) {
        self.admit::<T>("tpmv", layout);
        level2::tpmv(layout, uplo, trans, diag, n, ap, x, incx)
    }

    #[track_caller]
    fn trsv(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[T],
        lda: usize, x: &mut [T], incx: isize,
    ) {
        self.admit::<T>("trsv", layout);
        level2::trsv(layout, uplo, trans, diag, n, a, lda, x, incx)
    }

    #[track_caller]
    fn tbsv(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, k: usize,
        a: &[T], lda: usize, x: &mut [T], incx: isize,
    ) {
        self.admit::<T>("tbsv", layout);
        level2::tbsv(layout, uplo, trans, diag, n, k, a, lda, x, incx)
    }

    #[track_caller]
    fn tpsv(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, ap: &[T],
        x: &mut [T], incx: isize,
    ) {
        self.admit::<T>("tpsv", layout);
        level2::tpsv(layout, uplo, trans, diag, n, ap, x, incx)
    }
}

/// Matrix-matrix routines.
pub trait Level3<T: Scalar>: Backend {
    #[track_caller]
    fn gemm(
        &self, layout: Layout, trans_a: Transpose, trans_b: Transpose, m: usize, n: usize,
        k: usize, alpha: T, a: &[T], lda: usize, b: &[T], ldb: usize, beta: T, c: &mut [T],
        ldc: usize,
    ) {
        self.admit::<T>("gemm", layout);
        level3::gemm(layout, trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    #[track_caller]
    fn symm(
        &self, layout: Layout, side: Side, uplo: Uplo, m: usize, n: usize, alpha: T, a: &[T],
        lda: usize, b: &[T], ldb: usize, beta: T, c: &mut [T], ldc: usize,
    ) {
        self.admit::<T>("symm", layout);
        level3::symm(layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    #[track_caller]
    fn hemm(
        &self, layout: Layout, side: Side, uplo: Uplo, m: usize, n: usize, alpha: T, a: &[T],
        lda: usize, b: &[T], ldb: usize, beta: T, c: &mut [T], ldc: usize,
    ) {
        self.admit::<T>("hemm", layout);
        level3::hemm(layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    #[track_caller]
    fn syrk(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize, alpha: T,
        a: &[T], lda: usize, beta: T, c: &mut [T], ldc: usize,
    ) {
        self.admit::<T>("syrk", layout);
        level3::syrk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }

    #[track_caller]
    fn herk(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize, alpha: T::Real,
        a: &[T], lda: usize, beta: T::Real, c: &mut [T], ldc: usize,
    ) {
        self.admit::<T>("herk", layout);
        level3::herk(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }

    #[track_caller]
    fn syr2k(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize, alpha: T,
        a: &[T], lda: usize, b: &[T], ldb: usize, beta: T, c: &mut [T], ldc: usize,
    ) {
        self.admit::<T>("syr2k", layout);
        level3::syr2k(layout, uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    #[track_caller]
    fn her2k(
        &self, layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize, alpha: T,
        a: &[T], lda: usize, b: &[T], ldb: usize, beta: T::Real, c: &mut [T], ldc: usize,
    ) {
        self.admit::<T>("her2k", layout);
        level3::her2k(layout, uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    #[track_caller]
    fn trmm(
        &self, layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize,
        n: usize, alpha: T, a: &[T], lda: usize, b: &mut [T], ldb: usize,
    ) {
        self.admit::<T>("trmm", layout);
        level3::trmm(layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
    }

    #[track_caller]
    fn trsm(
        &self, layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize,
        n: usize, alpha: T, a: &[T], lda: usize, b: &mut [T], ldb: usize,
    ) {
        self.admit::<T>("trsm", layout);
        level3::trsm(layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
    }
}

/// The portable kernels of this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl Backend for Native {
    fn name(&self) -> &'static str {
        "native"
    }
}

impl<T: Scalar> Level1<T> for Native {}
impl<T: RealScalar> Rotations<T> for Native {}
impl<T: Scalar> Level2<T> for Native {}
impl<T: Scalar> Level3<T> for Native {}
