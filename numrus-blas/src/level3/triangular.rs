//! Triangular Level 3: TRMM and TRSM.
//!
//! Each column of B (side `Left`) or row of B (side `Right`) is an
//! independent Level 2 problem. A right-hand product `b * op(A)` is the
//! left-hand product `op(A)^T * b^T`, so the right side runs the same
//! triangle walk with the transpose flag flipped and conjugation kept.

use num_traits::{One, Zero};
use numrus_core::check;
use numrus_core::layout::{Diag, Layout, Side, Transpose, Uplo};
use numrus_core::Scalar;

use crate::level2::{Square, Triangle};
use crate::named::ensure;

fn side_triangle<T: Scalar>(
    routine: &'static str,
    solve: bool,
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    tracing::trace!(m, n, ?layout, ?side, ?uplo, ?trans, ?diag, routine);
    let ka = match side {
        Side::Left => m,
        Side::Right => n,
    };
    ensure::<T>(check::matrix(routine, "a", layout, ka, ka, a.len(), lda));
    ensure::<T>(check::matrix(routine, "b", layout, m, n, b.len(), ldb));
    if m == 0 || n == 0 {
        return;
    }

    if alpha == T::zero() {
        for i in 0..m {
            for j in 0..n {
                b[layout.index(i, j, ldb)] = T::zero();
            }
        }
        return;
    }

    let tri = Triangle {
        a,
        st: Square::Dense { ld: lda },
        layout,
        uplo,
        transpose: trans.is_trans() == (side == Side::Left),
        conj: trans == Transpose::ConjTrans,
        unit: diag == Diag::Unit,
        n: ka,
    };
    // Left: columns of B (length m). Right: rows of B (length n).
    let (lines, len) = match side {
        Side::Left => (n, m),
        Side::Right => (m, n),
    };
    let offset = |l: usize, p: usize| match side {
        Side::Left => layout.index(p, l, ldb),
        Side::Right => layout.index(l, p, ldb),
    };
    let mut buf = vec![T::zero(); len];
    for l in 0..lines {
        for (p, v) in buf.iter_mut().enumerate() {
            *v = b[offset(l, p)];
            if alpha != T::one() {
                *v *= alpha;
            }
        }
        if solve {
            tri.solve(&mut buf);
        } else {
            tri.multiply(&mut buf);
        }
        for (p, &v) in buf.iter().enumerate() {
            b[offset(l, p)] = v;
        }
    }
}

/// Triangular matrix multiply: `B := alpha * op(A) * B` (`Left`) or
/// `B := alpha * B * op(A)` (`Right`). B is `m x n`.
pub fn trmm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    side_triangle(
        "trmm", false, layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb,
    );
}

/// Triangular solve with multiple right-hand sides: overwrites B with X
/// where `op(A) * X = alpha * B` (`Left`) or `X * op(A) = alpha * B`
/// (`Right`). No singularity test is performed.
pub fn trsm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    side_triangle(
        "trsm", true, layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb,
    );
}
