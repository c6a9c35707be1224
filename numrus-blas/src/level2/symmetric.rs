//! Symmetric and Hermitian matrices: products and rank updates in dense,
//! banded and packed storage.
//!
//! Only the `uplo` triangle is read or written. The other triangle is
//! implied: `A(j, i) = A(i, j)` for symmetric and `conj(A(i, j))` for
//! Hermitian matrices. Hermitian diagonals are taken as real, and rank
//! updates store them with a zero imaginary part.

use num_traits::Zero;
use numrus_core::check;
use numrus_core::kernels::{strided, unitary};
use numrus_core::layout::{Layout, Uplo};
use numrus_core::Scalar;

use super::{off_diagonal, with_output, Square};
use crate::named::ensure;

// ============================================================================
// Products: y := alpha * A * x + beta * y
// ============================================================================

/// Walks the stored triangle once, one contiguous line per step: column `j`
/// for column-major storage, row `j` for row-major. Each stored
/// off-diagonal element contributes to both `y[i]` and `y[j]`.
fn product<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    n: usize,
    alpha: T,
    a: &[T],
    st: Square,
    x: &[T],
    y: &mut [T],
) {
    let reach = st.reach(n);
    let col_major = layout == Layout::ColMajor;
    for j in 0..n {
        let t1 = alpha * x[j];
        // A column's partners lie across the diagonal from the stored side, a row's on it.
        let part = off_diagonal((uplo == Uplo::Upper) != col_major, j, n, reach);
        let mut t2 = T::zero();
        if !part.is_empty() {
            let (i0, j0) = if col_major { (part.start, j) } else { (j, part.start) };
            let start = st.offset(layout, uplo, n, i0, j0);
            let line = &a[start..start + part.len()];
            let (xp, yp) = (&x[part.clone()], &mut y[part]);
            if col_major {
                // line[k] = A(i, j): y[i] += A(i, j) x[j], y[j] += conj(A(i, j)) x[i].
                unitary::axpy(t1, line, yp);
                t2 = if herm { unitary::dotc(line, xp) } else { unitary::dot(line, xp) };
            } else {
                // line[k] = A(j, i): y[j] += A(j, i) x[i], y[i] += conj(A(j, i)) x[j].
                if herm {
                    unitary::axpyc(t1, line, yp);
                } else {
                    unitary::axpy(t1, line, yp);
                }
                t2 = unitary::dot(line, xp);
            }
        }
        let mut d = a[st.offset(layout, uplo, n, j, j)];
        if herm {
            d = d.real_part();
        }
        y[j] += t1 * d + alpha * t2;
    }
}

fn mv<T: Scalar>(
    herm: bool,
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    st: Square,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    if n == 0 {
        return;
    }
    with_output(n, y, incy, beta, |y| {
        if alpha == T::zero() {
            return;
        }
        let x = strided::gather(n, x, incx);
        product(layout, uplo, herm, n, alpha, a, st, &x, y);
    });
}

fn check_xy<T: Scalar>(routine: &'static str, n: usize, x: &[T], incx: isize, y: &[T], incy: isize) {
    ensure::<T>(check::vector(routine, "x", n, x.len(), incx));
    ensure::<T>(check::vector(routine, "y", n, y.len(), incy));
}

#[inline]
fn band_extent(uplo: Uplo, k: usize) -> (usize, usize) {
    match uplo {
        Uplo::Upper => (0, k),
        Uplo::Lower => (k, 0),
    }
}

/// Symmetric matrix-vector multiply: `y := alpha * A * x + beta * y`.
pub fn symv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    ensure::<T>(check::matrix("symv", "a", layout, n, n, a.len(), lda));
    check_xy("symv", n, x, incx, y, incy);
    let st = Square::Dense { ld: lda };
    mv(false, layout, uplo, n, alpha, a, st, x, incx, beta, y, incy);
}

/// Hermitian matrix-vector multiply: `y := alpha * A * x + beta * y`.
pub fn hemv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    ensure::<T>(check::matrix("hemv", "a", layout, n, n, a.len(), lda));
    check_xy("hemv", n, x, incx, y, incy);
    let st = Square::Dense { ld: lda };
    mv(true, layout, uplo, n, alpha, a, st, x, incx, beta, y, incy);
}

/// Symmetric band matrix-vector multiply with `k` off-diagonals.
pub fn sbmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    let (kl, ku) = band_extent(uplo, k);
    ensure::<T>(check::band("sbmv", "a", layout, n, n, kl, ku, a.len(), lda));
    check_xy("sbmv", n, x, incx, y, incy);
    let st = Square::Band { k, ld: lda };
    mv(false, layout, uplo, n, alpha, a, st, x, incx, beta, y, incy);
}

/// Hermitian band matrix-vector multiply with `k` off-diagonals.
pub fn hbmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    let (kl, ku) = band_extent(uplo, k);
    ensure::<T>(check::band("hbmv", "a", layout, n, n, kl, ku, a.len(), lda));
    check_xy("hbmv", n, x, incx, y, incy);
    let st = Square::Band { k, ld: lda };
    mv(true, layout, uplo, n, alpha, a, st, x, incx, beta, y, incy);
}

/// Symmetric packed matrix-vector multiply.
pub fn spmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    ensure::<T>(check::packed("spmv", "ap", n, ap.len()));
    check_xy("spmv", n, x, incx, y, incy);
    mv(false, layout, uplo, n, alpha, ap, Square::Packed, x, incx, beta, y, incy);
}

/// Hermitian packed matrix-vector multiply.
pub fn hpmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    ensure::<T>(check::packed("hpmv", "ap", n, ap.len()));
    check_xy("hpmv", n, x, incx, y, incy);
    mv(true, layout, uplo, n, alpha, ap, Square::Packed, x, incx, beta, y, incy);
}

// ============================================================================
// Rank updates on the stored triangle
// ============================================================================

/// `A(i, j) += delta(i, j)` over the stored triangle.
fn update<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    n: usize,
    a: &mut [T],
    st: Square,
    delta: impl Fn(usize, usize) -> T,
) {
    for j in 0..n {
        let rows = match uplo {
            Uplo::Upper => 0..j + 1,
            Uplo::Lower => j..n,
        };
        for i in rows {
            a[st.offset(layout, uplo, n, i, j)] += delta(i, j);
        }
        if herm {
            let d = st.offset(layout, uplo, n, j, j);
            a[d] = a[d].real_part();
        }
    }
}

fn rank1<T: Scalar>(
    herm: bool,
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    st: Square,
) {
    if n == 0 || alpha == T::zero() {
        return;
    }
    let x = strided::gather(n, x, incx);
    update(layout, uplo, herm, n, a, st, |i, j| {
        alpha * x[i] * x[j].conj_if(herm)
    });
}

fn rank2<T: Scalar>(
    herm: bool,
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    st: Square,
) {
    if n == 0 || alpha == T::zero() {
        return;
    }
    let x = strided::gather(n, x, incx);
    let y = strided::gather(n, y, incy);
    let alpha2 = alpha.conj_if(herm);
    update(layout, uplo, herm, n, a, st, |i, j| {
        alpha * x[i] * y[j].conj_if(herm) + alpha2 * y[i] * x[j].conj_if(herm)
    });
}

/// Symmetric rank-1 update: `A := alpha * x * x^T + A`.
pub fn syr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) {
    ensure::<T>(check::vector("syr", "x", n, x.len(), incx));
    ensure::<T>(check::matrix("syr", "a", layout, n, n, a.len(), lda));
    rank1(false, layout, uplo, n, alpha, x, incx, a, Square::Dense { ld: lda });
}

/// Symmetric packed rank-1 update.
pub fn spr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) {
    ensure::<T>(check::vector("spr", "x", n, x.len(), incx));
    ensure::<T>(check::packed("spr", "ap", n, ap.len()));
    rank1(false, layout, uplo, n, alpha, x, incx, ap, Square::Packed);
}

/// Hermitian rank-1 update: `A := alpha * x * x^H + A` with real `alpha`.
pub fn her<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) {
    ensure::<T>(check::vector("her", "x", n, x.len(), incx));
    ensure::<T>(check::matrix("her", "a", layout, n, n, a.len(), lda));
    let alpha = T::from_real(alpha);
    rank1(true, layout, uplo, n, alpha, x, incx, a, Square::Dense { ld: lda });
}

/// Hermitian packed rank-1 update with real `alpha`.
pub fn hpr<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T::Real,
    x: &[T],
    incx: isize,
    ap: &mut [T],
) {
    ensure::<T>(check::vector("hpr", "x", n, x.len(), incx));
    ensure::<T>(check::packed("hpr", "ap", n, ap.len()));
    let alpha = T::from_real(alpha);
    rank1(true, layout, uplo, n, alpha, x, incx, ap, Square::Packed);
}

/// Symmetric rank-2 update: `A := alpha * x * y^T + alpha * y * x^T + A`.
pub fn syr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    check_xy("syr2", n, x, incx, y, incy);
    ensure::<T>(check::matrix("syr2", "a", layout, n, n, a.len(), lda));
    let st = Square::Dense { ld: lda };
    rank2(false, layout, uplo, n, alpha, x, incx, y, incy, a, st);
}

/// Symmetric packed rank-2 update.
pub fn spr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    ap: &mut [T],
) {
    check_xy("spr2", n, x, incx, y, incy);
    ensure::<T>(check::packed("spr2", "ap", n, ap.len()));
    rank2(false, layout, uplo, n, alpha, x, incx, y, incy, ap, Square::Packed);
}

/// Hermitian rank-2 update:
/// `A := alpha * x * y^H + conj(alpha) * y * x^H + A`.
pub fn her2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    check_xy("her2", n, x, incx, y, incy);
    ensure::<T>(check::matrix("her2", "a", layout, n, n, a.len(), lda));
    let st = Square::Dense { ld: lda };
    rank2(true, layout, uplo, n, alpha, x, incx, y, incy, a, st);
}

/// Hermitian packed rank-2 update.
pub fn hpr2<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    ap: &mut [T],
) {
    check_xy("hpr2", n, x, incx, y, incy);
    ensure::<T>(check::packed("hpr2", "ap", n, ap.len()));
    rank2(true, layout, uplo, n, alpha, x, incx, y, incy, ap, Square::Packed);
}
