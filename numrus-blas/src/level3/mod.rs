//! BLAS Level 3: Matrix-matrix operations.
//!
//! Products follow one scheme: rows of the left operand and columns of the
//! right operand are packed into contiguous buffers (transposition and
//! conjugation applied while packing), then every destination element is a
//! single contiguous dot product. Packing reads through [`Layout::index`],
//! so row-major and column-major inputs meet the same kernel.
//!
//! The destination is scaled by `beta` first; `beta == 0` overwrites it
//! without reading. When `alpha == 0` or the inner dimension is zero the
//! operands are never read.

mod symmetric;
mod triangular;

pub use symmetric::{hemm, her2k, herk, symm, syr2k, syrk};
pub use triangular::{trmm, trsm};

use std::ops::Range;

use num_traits::{One, Zero};
use numrus_core::check;
use numrus_core::kernels::unitary;
use numrus_core::layout::{Layout, Transpose, Uplo};
use numrus_core::Scalar;

use crate::named::ensure;

/// Element (i, j) of `op(X)` for X stored with `layout` and `ld`.
#[inline(always)]
fn op_at<T: Scalar>(layout: Layout, trans: Transpose, x: &[T], ld: usize, i: usize, j: usize) -> T {
    match trans {
        Transpose::NoTrans => x[layout.index(i, j, ld)],
        Transpose::Trans => x[layout.index(j, i, ld)],
        Transpose::ConjTrans => x[layout.index(j, i, ld)].conj(),
    }
}

/// Packs `lines` contiguous runs of `depth` elements: run `l` holds
/// `at(l, 0..depth)`.
fn pack<T: Scalar>(lines: usize, depth: usize, at: impl Fn(usize, usize) -> T) -> Vec<T> {
    let mut buf = Vec::with_capacity(lines * depth);
    for l in 0..lines {
        for p in 0..depth {
            buf.push(at(l, p));
        }
    }
    buf
}

/// Run `l` of a buffer built by [`pack`].
#[inline(always)]
fn run<T>(buf: &[T], l: usize, depth: usize) -> &[T] {
    &buf[l * depth..(l + 1) * depth]
}

/// `c := beta * c`; with `beta == 0` the old value is not read.
#[inline(always)]
fn apply_beta<T: Scalar>(beta: T, c: &mut T) {
    if beta == T::zero() {
        *c = T::zero();
    } else if beta != T::one() {
        *c *= beta;
    }
}

/// Rows of column `j` that lie in the `uplo` triangle of an n x n matrix.
#[inline(always)]
fn triangle_rows(uplo: Uplo, j: usize, n: usize) -> Range<usize> {
    match uplo {
        Uplo::Upper => 0..j + 1,
        Uplo::Lower => j..n,
    }
}

/// Scales the whole `m x n` block of C by `beta`.
fn scale_block<T: Scalar>(layout: Layout, beta: T, m: usize, n: usize, c: &mut [T], ldc: usize) {
    if beta == T::one() {
        return;
    }
    for i in 0..m {
        for j in 0..n {
            apply_beta(beta, &mut c[layout.index(i, j, ldc)]);
        }
    }
}

/// `C(i, j) += alpha * dot(rows[i], cols[j])` over the whole block.
fn accumulate<T: Scalar>(
    layout: Layout,
    m: usize,
    n: usize,
    depth: usize,
    alpha: T,
    rows: &[T],
    cols: &[T],
    c: &mut [T],
    ldc: usize,
) {
    for i in 0..m {
        let r = run(rows, i, depth);
        for j in 0..n {
            c[layout.index(i, j, ldc)] += alpha * unitary::dot(r, run(cols, j, depth));
        }
    }
}

// ============================================================================
// GEMM: General Matrix Multiply
// C := alpha * op(A) * op(B) + beta * C
// ============================================================================

/// General matrix multiply: `C := alpha * op(A) * op(B) + beta * C`.
///
/// `op(A)` is `m x k`, `op(B)` is `k x n` and C is `m x n`. With
/// `alpha == 0` or `k == 0` neither A nor B is read, so NaN or Inf in them
/// cannot reach C.
pub fn gemm<T: Scalar>(
    layout: Layout,
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    tracing::trace!(m, n, k, ?layout, ?trans_a, ?trans_b, "gemm");
    let (ar, ac) = if trans_a.is_trans() { (k, m) } else { (m, k) };
    let (br, bc) = if trans_b.is_trans() { (n, k) } else { (k, n) };
    ensure::<T>(check::matrix("gemm", "a", layout, ar, ac, a.len(), lda));
    ensure::<T>(check::matrix("gemm", "b", layout, br, bc, b.len(), ldb));
    ensure::<T>(check::matrix("gemm", "c", layout, m, n, c.len(), ldc));
    if m == 0 || n == 0 {
        return;
    }

    scale_block(layout, beta, m, n, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }

    // Rows of op(A) and columns of op(B), k elements each.
    let a_rows = pack(m, k, |i, p| op_at(layout, trans_a, a, lda, i, p));
    let b_cols = pack(n, k, |j, p| op_at(layout, trans_b, b, ldb, p, j));
    accumulate(layout, m, n, k, alpha, &a_rows, &b_cols, c, ldc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use numrus_core::C64;

    #[test]
    fn test_gemm_identity() {
        // A = I(2), B = [[1,2],[3,4]], C should be [[1,2],[3,4]]
        let a = vec![1.0f32, 0.0, 0.0, 1.0];
        let b = vec![1.0f32, 2.0, 3.0, 4.0];
        let mut c = vec![0.0f32; 4];
        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            1.0,
            &a,
            2,
            &b,
            2,
            0.0,
            &mut c,
            2,
        );
        assert_eq!(c, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_gemm_simple_multiply() {
        // A = [[1,2],[3,4]], B = [[5,6],[7,8]]
        // C = A*B = [[19,22],[43,50]]
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let b = vec![5.0f32, 6.0, 7.0, 8.0];
        let mut c = vec![0.0f32; 4];
        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            1.0,
            &a,
            2,
            &b,
            2,
            0.0,
            &mut c,
            2,
        );
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_gemm_alpha_beta() {
        // C = 2 * I * B + 3 * C
        let a = vec![1.0f64, 0.0, 0.0, 1.0];
        let b = vec![1.0f64, 2.0, 3.0, 4.0];
        let mut c = vec![1.0f64; 4];
        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            2.0,
            &a,
            2,
            &b,
            2,
            3.0,
            &mut c,
            2,
        );
        assert_eq!(c, vec![5.0, 7.0, 9.0, 11.0]);
    }

    #[test]
    fn test_gemm_transpose_a_colmajor() {
        // Column-major A = [[1,3],[2,4]] (stored 1,2,3,4); A^T * I = [[1,2],[3,4]].
        let a = vec![1.0f64, 2.0, 3.0, 4.0];
        let b = vec![1.0f64, 0.0, 0.0, 1.0];
        let mut c = vec![0.0f64; 4];
        gemm(
            Layout::ColMajor,
            Transpose::Trans,
            Transpose::NoTrans,
            2,
            2,
            2,
            1.0,
            &a,
            2,
            &b,
            2,
            0.0,
            &mut c,
            2,
        );
        // [[1,2],[3,4]] stored by columns.
        assert_eq!(c, vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_gemm_non_square_with_padding() {
        // A: 2 x 3 (lda 4), B: 3 x 1 (ldb 2), C: 2 x 1 (ldc 3), row-major.
        let a = vec![1.0f64, 2.0, 3.0, -9.0, 4.0, 5.0, 6.0, -9.0];
        let b = vec![1.0f64, -9.0, 1.0, -9.0, 1.0, -9.0];
        let mut c = vec![0.0f64, 7.0, 7.0, 0.0];
        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            1,
            3,
            1.0,
            &a,
            4,
            &b,
            2,
            0.0,
            &mut c,
            3,
        );
        assert_eq!(c, vec![6.0, 7.0, 7.0, 15.0]);
    }

    #[test]
    fn test_gemm_conj_trans_complex() {
        // A = [[i, 1]] (1 x 2), A^H = [[-i], [1]]; A^H * [[1, 1]] = [[-i, -i], [1, 1]].
        let a = vec![C64::new(0.0, 1.0), C64::new(1.0, 0.0)];
        let b = vec![C64::new(1.0, 0.0); 2];
        let mut c = vec![C64::zero(); 4];
        gemm(
            Layout::RowMajor,
            Transpose::ConjTrans,
            Transpose::NoTrans,
            2,
            2,
            1,
            C64::one(),
            &a,
            2,
            &b,
            2,
            C64::zero(),
            &mut c,
            2,
        );
        assert_eq!(
            c,
            vec![
                C64::new(0.0, -1.0),
                C64::new(0.0, -1.0),
                C64::new(1.0, 0.0),
                C64::new(1.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_gemm_alpha_zero_never_reads_operands() {
        let a = vec![f64::NAN; 4];
        let b = vec![f64::INFINITY; 4];
        let mut c = vec![1.0, 2.0, 3.0, 4.0];
        gemm(
            Layout::ColMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            0.0,
            &a,
            2,
            &b,
            2,
            2.0,
            &mut c,
            2,
        );
        assert_eq!(c, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_gemm_k_zero_scales_only() {
        let mut c = vec![f64::NAN, 1.0];
        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            1,
            2,
            0,
            1.0,
            &[],
            1,
            &[],
            2,
            0.0,
            &mut c,
            2,
        );
        assert_eq!(c, vec![0.0, 0.0]);
    }

    #[test]
    fn test_gemm_64x64_matches_naive() {
        let n = 64;
        let a: Vec<f64> = (0..n * n).map(|i| (i % 17) as f64 * 0.1).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i % 13) as f64 * 0.1).collect();
        let mut c = vec![0.0f64; n * n];
        let mut c_ref = vec![0.0f64; n * n];

        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            n,
            n,
            n,
            1.0,
            &a,
            n,
            &b,
            n,
            0.0,
            &mut c,
            n,
        );

        for i in 0..n {
            for j in 0..n {
                for p in 0..n {
                    c_ref[i * n + j] += a[i * n + p] * b[p * n + j];
                }
            }
        }

        let max_err = c
            .iter()
            .zip(c_ref.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f64, f64::max);
        assert!(max_err < 1e-9, "gemm 64x64 max error: {}", max_err);
    }

    #[test]
    #[should_panic(expected = "sgemm: invalid dimension ldb")]
    fn test_gemm_small_ldb_panics() {
        let a = vec![1.0f32; 6];
        let b = vec![1.0f32; 6];
        let mut c = vec![0.0f32; 4];
        gemm(
            Layout::RowMajor,
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            3,
            1.0,
            &a,
            3,
            &b,
            1,
            0.0,
            &mut c,
            2,
        );
    }
}
