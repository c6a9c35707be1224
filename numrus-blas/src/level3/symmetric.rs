//! Symmetric and Hermitian Level 3: SYMM/HEMM products and the rank-k and
//! rank-2k updates.
//!
//! Rank updates touch only the `uplo` triangle of C. Hermitian updates
//! store a real diagonal.

use num_traits::{One, Zero};
use numrus_core::check;
use numrus_core::kernels::unitary;
use numrus_core::layout::{Layout, Side, Transpose, Uplo};
use numrus_core::Scalar;

use crate::named::ensure;

use super::{accumulate, apply_beta, op_at, pack, run, scale_block, triangle_rows};

/// Element (i, j) of a symmetric (or Hermitian, `herm`) matrix whose `uplo`
/// triangle is stored.
#[inline(always)]
fn mirrored<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    a: &[T],
    lda: usize,
    i: usize,
    j: usize,
) -> T {
    let stored = match uplo {
        Uplo::Upper => i <= j,
        Uplo::Lower => i >= j,
    };
    if i == j {
        let d = a[layout.index(i, i, lda)];
        if herm {
            d.real_part()
        } else {
            d
        }
    } else if stored {
        a[layout.index(i, j, lda)]
    } else {
        a[layout.index(j, i, lda)].conj_if(herm)
    }
}

// ============================================================================
// SYMM / HEMM
// C := alpha * A * B + beta * C   (Left)
// C := alpha * B * A + beta * C   (Right)
// ============================================================================

fn side_product<T: Scalar>(
    routine: &'static str,
    herm: bool,
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    tracing::trace!(m, n, ?layout, ?side, ?uplo, routine);
    let ka = match side {
        Side::Left => m,
        Side::Right => n,
    };
    ensure::<T>(check::matrix(routine, "a", layout, ka, ka, a.len(), lda));
    ensure::<T>(check::matrix(routine, "b", layout, m, n, b.len(), ldb));
    ensure::<T>(check::matrix(routine, "c", layout, m, n, c.len(), ldc));
    if m == 0 || n == 0 {
        return;
    }

    scale_block(layout, beta, m, n, c, ldc);
    if alpha == T::zero() {
        return;
    }

    let sym = |i, j| mirrored(layout, uplo, herm, a, lda, i, j);
    let (rows, cols) = match side {
        Side::Left => (
            pack(m, m, sym),
            pack(n, m, |j, p| b[layout.index(p, j, ldb)]),
        ),
        Side::Right => (
            pack(m, n, |i, p| b[layout.index(i, p, ldb)]),
            pack(n, n, |j, p| sym(p, j)),
        ),
    };
    accumulate(layout, m, n, ka, alpha, &rows, &cols, c, ldc);
}

/// Symmetric matrix multiply with A on the `side` of B.
pub fn symm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    side_product(
        "symm", false, layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc,
    );
}

/// Hermitian matrix multiply with A on the `side` of B. The imaginary part
/// of A's diagonal is not read.
pub fn hemm<T: Scalar>(
    layout: Layout,
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    side_product(
        "hemm", true, layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc,
    );
}

// ============================================================================
// Rank-k and rank-2k updates on one triangle of C
// ============================================================================

/// `C := beta * C` on the triangle; Hermitian targets get a real diagonal.
fn scale_triangle<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    n: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    for j in 0..n {
        for i in triangle_rows(uplo, j, n) {
            apply_beta(beta, &mut c[layout.index(i, j, ldc)]);
        }
        if herm {
            let d = layout.index(j, j, ldc);
            c[d] = c[d].real_part();
        }
    }
}

/// `C(i, j) += delta(i, j)` on the triangle.
fn update_triangle<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    herm: bool,
    n: usize,
    c: &mut [T],
    ldc: usize,
    delta: impl Fn(usize, usize) -> T,
) {
    for j in 0..n {
        for i in triangle_rows(uplo, j, n) {
            c[layout.index(i, j, ldc)] += delta(i, j);
        }
        if herm {
            let d = layout.index(j, j, ldc);
            c[d] = c[d].real_part();
        }
    }
}

/// Shape of A for a rank-k update of an n x n C.
#[inline]
fn rank_k_shape(trans: Transpose, n: usize, k: usize) -> (usize, usize) {
    if trans.is_trans() {
        (k, n)
    } else {
        (n, k)
    }
}

/// Symmetric rank-k update:
/// `C := alpha * A * A^T + beta * C` (`NoTrans`, A is `n x k`) or
/// `C := alpha * A^T * A + beta * C` (`Trans`, A is `k x n`).
///
/// Complex matrices reject `ConjTrans`; real ones read it as `Trans`.
pub fn syrk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    tracing::trace!(n, k, ?layout, ?uplo, ?trans, "syrk");
    if T::IS_COMPLEX {
        ensure::<T>(check::reject_trans("syrk", trans, Transpose::ConjTrans));
    }
    let (ar, ac) = rank_k_shape(trans, n, k);
    ensure::<T>(check::matrix("syrk", "a", layout, ar, ac, a.len(), lda));
    ensure::<T>(check::matrix("syrk", "c", layout, n, n, c.len(), ldc));
    if n == 0 {
        return;
    }

    scale_triangle(layout, uplo, false, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }

    let op = if trans.is_trans() { Transpose::Trans } else { Transpose::NoTrans };
    let rows = pack(n, k, |i, p| op_at(layout, op, a, lda, i, p));
    update_triangle(layout, uplo, false, n, c, ldc, |i, j| {
        alpha * unitary::dot(run(&rows, i, k), run(&rows, j, k))
    });
}

/// Hermitian rank-k update with real `alpha` and `beta`:
/// `C := alpha * A * A^H + beta * C` (`NoTrans`) or
/// `C := alpha * A^H * A + beta * C` (`ConjTrans`).
///
/// Complex matrices reject `Trans`.
pub fn herk<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) {
    tracing::trace!(n, k, ?layout, ?uplo, ?trans, "herk");
    if T::IS_COMPLEX {
        ensure::<T>(check::reject_trans("herk", trans, Transpose::Trans));
    }
    let (ar, ac) = rank_k_shape(trans, n, k);
    ensure::<T>(check::matrix("herk", "a", layout, ar, ac, a.len(), lda));
    ensure::<T>(check::matrix("herk", "c", layout, n, n, c.len(), ldc));
    let (alpha, beta) = (T::from_real(alpha), T::from_real(beta));
    let no_update = alpha == T::zero() || k == 0;
    if n == 0 || (no_update && beta == T::one()) {
        return;
    }

    scale_triangle(layout, uplo, true, n, beta, c, ldc);
    if no_update {
        return;
    }

    // op(A) rows; C(i, j) += alpha * sum op(A)(i, p) * conj(op(A)(j, p)).
    let rows = pack(n, k, |i, p| op_at(layout, trans, a, lda, i, p));
    update_triangle(layout, uplo, true, n, c, ldc, |i, j| {
        alpha * unitary::dotc(run(&rows, j, k), run(&rows, i, k))
    });
}

/// Symmetric rank-2k update:
/// `C := alpha * A * B^T + alpha * B * A^T + beta * C` (`NoTrans`) or
/// `C := alpha * A^T * B + alpha * B^T * A + beta * C` (`Trans`).
pub fn syr2k<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
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
    tracing::trace!(n, k, ?layout, ?uplo, ?trans, "syr2k");
    if T::IS_COMPLEX {
        ensure::<T>(check::reject_trans("syr2k", trans, Transpose::ConjTrans));
    }
    let (ar, ac) = rank_k_shape(trans, n, k);
    ensure::<T>(check::matrix("syr2k", "a", layout, ar, ac, a.len(), lda));
    ensure::<T>(check::matrix("syr2k", "b", layout, ar, ac, b.len(), ldb));
    ensure::<T>(check::matrix("syr2k", "c", layout, n, n, c.len(), ldc));
    if n == 0 {
        return;
    }

    scale_triangle(layout, uplo, false, n, beta, c, ldc);
    if alpha == T::zero() || k == 0 {
        return;
    }

    let op = if trans.is_trans() { Transpose::Trans } else { Transpose::NoTrans };
    let ra = pack(n, k, |i, p| op_at(layout, op, a, lda, i, p));
    let rb = pack(n, k, |i, p| op_at(layout, op, b, ldb, i, p));
    update_triangle(layout, uplo, false, n, c, ldc, |i, j| {
        let ab = unitary::dot(run(&ra, i, k), run(&rb, j, k));
        let ba = unitary::dot(run(&rb, i, k), run(&ra, j, k));
        alpha * (ab + ba)
    });
}

/// Hermitian rank-2k update with real `beta`:
/// `C := alpha * A * B^H + conj(alpha) * B * A^H + beta * C` (`NoTrans`) or
/// `C := alpha * A^H * B + conj(alpha) * B^H * A + beta * C` (`ConjTrans`).
pub fn her2k<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) {
    tracing::trace!(n, k, ?layout, ?uplo, ?trans, "her2k");
    if T::IS_COMPLEX {
        ensure::<T>(check::reject_trans("her2k", trans, Transpose::Trans));
    }
    let (ar, ac) = rank_k_shape(trans, n, k);
    ensure::<T>(check::matrix("her2k", "a", layout, ar, ac, a.len(), lda));
    ensure::<T>(check::matrix("her2k", "b", layout, ar, ac, b.len(), ldb));
    ensure::<T>(check::matrix("her2k", "c", layout, n, n, c.len(), ldc));
    let beta = T::from_real(beta);
    let no_update = alpha == T::zero() || k == 0;
    if n == 0 || (no_update && beta == T::one()) {
        return;
    }

    scale_triangle(layout, uplo, true, n, beta, c, ldc);
    if no_update {
        return;
    }

    let ra = pack(n, k, |i, p| op_at(layout, trans, a, lda, i, p));
    let rb = pack(n, k, |i, p| op_at(layout, trans, b, ldb, i, p));
    let alpha_conj = alpha.conj();
    update_triangle(layout, uplo, true, n, c, ldc, |i, j| {
        alpha * unitary::dotc(run(&rb, j, k), run(&ra, i, k))
            + alpha_conj * unitary::dotc(run(&ra, j, k), run(&rb, i, k))
    });
}
