//! General matrices: GEMV, GBMV and the rank-1 updates.

use num_traits::Zero;
use numrus_core::check;
use numrus_core::kernels::{strided, unitary};
use numrus_core::layout::{Layout, Transpose};
use numrus_core::Scalar;

use super::{apply_line, with_output};
use crate::named::ensure;

/// Lengths of x and y for `op(A)` of an `m x n` matrix.
#[inline]
fn op_lengths(trans: Transpose, m: usize, n: usize) -> (usize, usize) {
    if trans.is_trans() {
        (m, n)
    } else {
        (n, m)
    }
}

// ============================================================================
// GEMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// General matrix-vector multiply: `y := alpha * op(A) * x + beta * y`.
///
/// A is `m x n`. With `beta == 0`, y is write-only.
pub fn gemv<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    m: usize,
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
    let (lenx, leny) = op_lengths(trans, m, n);
    ensure::<T>(check::matrix("gemv", "a", layout, m, n, a.len(), lda));
    ensure::<T>(check::vector("gemv", "x", lenx, x.len(), incx));
    ensure::<T>(check::vector("gemv", "y", leny, y.len(), incy));
    if m == 0 || n == 0 {
        return;
    }

    // Row-major lines are rows of A; column-major lines are columns.
    let (lines, len) = match layout {
        Layout::RowMajor => (m, n),
        Layout::ColMajor => (n, m),
    };
    let dot_form = (layout == Layout::RowMajor) != trans.is_trans();
    let conj = trans == Transpose::ConjTrans;

    with_output(leny, y, incy, beta, |y| {
        if alpha == T::zero() {
            return;
        }
        let x = strided::gather(lenx, x, incx);
        for k in 0..lines {
            let start = layout.line_offset(k, lda);
            apply_line(dot_form, conj, alpha, &a[start..start + len], k, 0, &x, y);
        }
    });
}

// ============================================================================
// GBMV: General band matrix-vector multiply
// ============================================================================

/// Band matrix-vector multiply: `y := alpha * op(A) * x + beta * y`.
///
/// A is `m x n` with `kl` sub-diagonals and `ku` super-diagonals in band
/// storage (`lda >= kl + ku + 1`).
pub fn gbmv<T: Scalar>(
    layout: Layout,
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    let (lenx, leny) = op_lengths(trans, m, n);
    ensure::<T>(check::band("gbmv", "a", layout, m, n, kl, ku, a.len(), lda));
    ensure::<T>(check::vector("gbmv", "x", lenx, x.len(), incx));
    ensure::<T>(check::vector("gbmv", "y", leny, y.len(), incy));
    if m == 0 || n == 0 {
        return;
    }

    let dot_form = (layout == Layout::RowMajor) != trans.is_trans();
    let conj = trans == Transpose::ConjTrans;

    with_output(leny, y, incy, beta, |y| {
        if alpha == T::zero() {
            return;
        }
        let x = strided::gather(lenx, x, incx);
        match layout {
            Layout::RowMajor => {
                for i in 0..m.min(n + kl) {
                    let lo = i.saturating_sub(kl);
                    let hi = n.min(i + ku + 1);
                    let start = layout.band_index(i, lo, kl, ku, lda);
                    apply_line(dot_form, conj, alpha, &a[start..start + hi - lo], i, lo, &x, y);
                }
            }
            Layout::ColMajor => {
                for j in 0..n.min(m + ku) {
                    let lo = j.saturating_sub(ku);
                    let hi = m.min(j + kl + 1);
                    let start = layout.band_index(lo, j, kl, ku, lda);
                    apply_line(dot_form, conj, alpha, &a[start..start + hi - lo], j, lo, &x, y);
                }
            }
        }
    });
}

// ============================================================================
// GER: rank-1 update
// A := alpha * x * y^T + A      (ger, geru)
// A := alpha * x * y^H + A      (gerc)
// ============================================================================

fn rank1<T: Scalar>(
    routine: &'static str,
    conj: bool,
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    ensure::<T>(check::vector(routine, "x", m, x.len(), incx));
    ensure::<T>(check::vector(routine, "y", n, y.len(), incy));
    ensure::<T>(check::matrix(routine, "a", layout, m, n, a.len(), lda));
    if m == 0 || n == 0 || alpha == T::zero() {
        return;
    }

    let x = strided::gather(m, x, incx);
    let y = strided::gather(n, y, incy);
    match layout {
        Layout::RowMajor => {
            // Row i gains alpha * x[i] * op(y).
            for i in 0..m {
                let start = layout.line_offset(i, lda);
                let row = &mut a[start..start + n];
                if conj {
                    unitary::axpyc(alpha * x[i], &y, row);
                } else {
                    unitary::axpy(alpha * x[i], &y, row);
                }
            }
        }
        Layout::ColMajor => {
            // Column j gains alpha * op(y[j]) * x.
            for j in 0..n {
                let start = layout.line_offset(j, lda);
                unitary::axpy(alpha * y[j].conj_if(conj), &x, &mut a[start..start + m]);
            }
        }
    }
}

/// Rank-1 update: `A := alpha * x * y^T + A`.
pub fn ger<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    rank1("ger", false, layout, m, n, alpha, x, incx, y, incy, a, lda);
}

/// Unconjugated complex rank-1 update. Same as [`ger`].
pub fn geru<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    rank1("geru", false, layout, m, n, alpha, x, incx, y, incy, a, lda);
}

/// Conjugated rank-1 update: `A := alpha * x * y^H + A`.
pub fn gerc<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) {
    rank1("gerc", true, layout, m, n, alpha, x, incx, y, incy, a, lda);
}

#[cfg(test)]
mod tests {
    use super::*;
    use numrus_core::C64;

    fn c(re: f64, im: f64) -> C64 {
        C64::new(re, im)
    }

    #[test]
    fn test_gemv_rowmajor_notrans() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let x = vec![1.0f32, 1.0];
        let mut y = vec![0.0f32; 2];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![3.0, 7.0]);
    }

    #[test]
    fn test_gemv_with_alpha_beta() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let x = vec![1.0f32, 1.0];
        let mut y = vec![10.0f32, 20.0];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 2.0, &a, 2, &x, 1, 3.0, &mut y, 1);
        assert_eq!(y, vec![36.0, 74.0]);
    }

    #[test]
    fn test_gemv_trans() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let x = vec![1.0f32, 1.0];
        let mut y = vec![0.0f32; 2];
        gemv(Layout::RowMajor, Transpose::Trans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![4.0, 6.0]);
    }

    #[test]
    fn test_gemv_strided() {
        // Strided x: use every 2nd element
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let x = vec![1.0f32, 0.0, 1.0];
        let mut y = vec![0.0f32; 3];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 2, 0.0, &mut y, 2);
        assert_eq!(y, vec![3.0, 0.0, 7.0]);
    }

    #[test]
    fn test_gemv_colmajor_rectangular() {
        // A = [[1, 3, 5], [2, 4, 6]] stored by columns with lda = 3.
        let a = vec![1.0f64, 2.0, -1.0, 3.0, 4.0, -1.0, 5.0, 6.0, -1.0];
        let x = vec![1.0, 1.0, 1.0];
        let mut y = vec![0.0; 2];
        gemv(Layout::ColMajor, Transpose::NoTrans, 2, 3, 1.0, &a, 3, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![9.0, 12.0]);

        let mut yt = vec![0.0; 3];
        gemv(Layout::ColMajor, Transpose::Trans, 2, 3, 1.0, &a, 3, &x, 1, 0.0, &mut yt, 1);
        assert_eq!(yt, vec![3.0, 7.0, 11.0]);
    }

    #[test]
    fn test_gemv_beta_zero_overwrites_nan() {
        let a = vec![1.0f64, 2.0, 3.0, 4.0];
        let x = vec![1.0, 1.0];
        let mut y = vec![f64::NAN, f64::NAN];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![3.0, 7.0]);
    }

    #[test]
    fn test_gemv_alpha_zero_only_scales() {
        let a = vec![f64::NAN; 4];
        let x = vec![1.0, 1.0];
        let mut y = vec![1.0, 2.0];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 0.0, &a, 2, &x, 1, 2.0, &mut y, 1);
        assert_eq!(y, vec![2.0, 4.0]);
    }

    #[test]
    fn test_gemv_conj_trans_both_layouts() {
        // A = [[1+i, 2], [0, i]], A^H * [1, 1] = [1-i, 2-i].
        let row = vec![c(1.0, 1.0), c(2.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)];
        let col = vec![c(1.0, 1.0), c(0.0, 0.0), c(2.0, 0.0), c(0.0, 1.0)];
        let x = vec![c(1.0, 0.0); 2];
        for (layout, a) in [(Layout::RowMajor, &row), (Layout::ColMajor, &col)] {
            let mut y = vec![C64::zero(); 2];
            gemv(layout, Transpose::ConjTrans, 2, 2, c(1.0, 0.0), a, 2, &x, 1, C64::zero(), &mut y, 1);
            assert_eq!(y, vec![c(1.0, -1.0), c(2.0, -1.0)], "{layout:?}");
        }
    }

    #[test]
    fn test_gemv_empty_leaves_y() {
        let mut y = vec![5.0f64; 3];
        gemv(Layout::RowMajor, Transpose::Trans, 0, 3, 1.0, &[], 3, &[], 1, 0.0, &mut y, 1);
        assert_eq!(y, vec![5.0; 3]);
    }

    fn to_band(layout: Layout, dense: &[Vec<f64>], kl: usize, ku: usize, ld: usize) -> Vec<f64> {
        let (m, n) = (dense.len(), dense[0].len());
        let lines = match layout {
            Layout::RowMajor => m,
            Layout::ColMajor => n,
        };
        let mut band = vec![f64::NAN; lines * ld];
        for i in 0..m {
            for j in 0..n {
                if j <= i + ku && i <= j + kl {
                    band[layout.band_index(i, j, kl, ku, ld)] = dense[i][j];
                }
            }
        }
        band
    }

    #[test]
    fn test_gbmv_matches_gemv() {
        // 4 x 5 with one sub- and two super-diagonals.
        let (m, n, kl, ku) = (4, 5, 1, 2);
        let mut dense = vec![vec![0.0f64; n]; m];
        for i in 0..m {
            for j in 0..n {
                if j <= i + ku && i <= j + kl {
                    dense[i][j] = (1 + i * n + j) as f64;
                }
            }
        }
        let flat: Vec<f64> = dense.iter().flatten().copied().collect();
        for layout in [Layout::RowMajor, Layout::ColMajor] {
            let band = to_band(layout, &dense, kl, ku, kl + ku + 1);
            for trans in [Transpose::NoTrans, Transpose::Trans] {
                let (lenx, leny) = op_lengths(trans, m, n);
                let x: Vec<f64> = (0..lenx).map(|i| i as f64 - 1.0).collect();
                let mut want = vec![1.0; leny];
                let mut got = vec![1.0; leny];
                gemv(Layout::RowMajor, trans, m, n, 2.0, &flat, n, &x, 1, 0.5, &mut want, 1);
                gbmv(layout, trans, m, n, kl, ku, 2.0, &band, kl + ku + 1, &x, 1, 0.5, &mut got, 1);
                assert_eq!(got, want, "{layout:?} {trans:?}");
            }
        }
    }

    #[test]
    fn test_ger() {
        let x = vec![1.0f32, 2.0];
        let y = vec![3.0f32, 4.0];
        let mut a = vec![0.0f32; 4];
        ger(Layout::RowMajor, 2, 2, 1.0, &x, 1, &y, 1, &mut a, 2);
        assert_eq!(a, vec![3.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_ger_strided_colmajor() {
        let x = vec![1.0f64, 9.0, 2.0];
        let y = vec![4.0f64, 3.0];
        let mut a = vec![0.0f64; 4];
        ger(Layout::ColMajor, 2, 2, 1.0, &x, 2, &y, -1, &mut a, 2);
        // y logical order is [3, 4]; A = x * y^T stored by columns.
        assert_eq!(a, vec![3.0, 6.0, 4.0, 8.0]);
    }

    #[test]
    fn test_gerc_conjugates_y() {
        let x = vec![c(1.0, 0.0), c(0.0, 1.0)];
        let y = vec![c(0.0, 1.0), c(2.0, 0.0)];
        for layout in [Layout::RowMajor, Layout::ColMajor] {
            let mut a = vec![C64::zero(); 4];
            gerc(layout, 2, 2, c(1.0, 0.0), &x, 1, &y, 1, &mut a, 2);
            // A(i, j) = x[i] * conj(y[j])
            assert_eq!(a[layout.index(0, 0, 2)], c(0.0, -1.0));
            assert_eq!(a[layout.index(1, 0, 2)], c(1.0, 0.0));
            assert_eq!(a[layout.index(0, 1, 2)], c(2.0, 0.0));
            assert_eq!(a[layout.index(1, 1, 2)], c(0.0, 2.0));

            let mut u = vec![C64::zero(); 4];
            geru(layout, 2, 2, c(1.0, 0.0), &x, 1, &y, 1, &mut u, 2);
            assert_eq!(u[layout.index(0, 0, 2)], c(0.0, 1.0));
        }
    }

    #[test]
    #[should_panic(expected = "sgemv: buffer y too short")]
    fn test_gemv_short_y_panics() {
        let a = vec![1.0f32; 6];
        let x = vec![1.0f32; 3];
        let mut y = vec![0.0f32; 1];
        gemv(Layout::RowMajor, Transpose::NoTrans, 2, 3, 1.0, &a, 3, &x, 1, 0.0, &mut y, 1);
    }
}
