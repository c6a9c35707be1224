//! Triangular matrices: TRMV/TBMV/TPMV multiply and TRSV/TBSV/TPSV solve
//! in place on x.
//!
//! Both loops work on the effective matrix `op(A)`. Transposing swaps which
//! triangle holds the data, so an upper matrix read with `Trans` behaves as
//! a lower one. Unit-diagonal entries are never read. The solves perform no
//! singularity test.

use num_traits::Zero;
use numrus_core::check;
use numrus_core::kernels::{strided, unitary};
use numrus_core::layout::{Diag, Layout, Transpose, Uplo};
use numrus_core::Scalar;

use super::{off_diagonal, Square};
use crate::named::ensure;

/// `op(A)` for a triangle in any storage scheme.
///
/// `transpose` and `conj` are independent so that `conj(A)` (needed when a
/// right-hand product `B * A^H` is turned into a left-hand one) is
/// expressible next to `A`, `A^T` and `A^H`.
pub(crate) struct Triangle<'a, T> {
    pub(crate) a: &'a [T],
    pub(crate) st: Square,
    pub(crate) layout: Layout,
    pub(crate) uplo: Uplo,
    pub(crate) transpose: bool,
    pub(crate) conj: bool,
    pub(crate) unit: bool,
    pub(crate) n: usize,
}

impl<'a, T: Scalar> Triangle<'a, T> {
    pub(crate) fn new(
        a: &'a [T],
        st: Square,
        layout: Layout,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
    ) -> Self {
        Triangle {
            a,
            st,
            layout,
            uplo,
            transpose: trans.is_trans(),
            conj: trans == Transpose::ConjTrans,
            unit: diag == Diag::Unit,
            n,
        }
    }

    /// True when `op(A)` is upper triangular.
    fn upper(&self) -> bool {
        (self.uplo == Uplo::Upper) != self.transpose
    }

    /// Storage offset of element (i, j) of `op(A)`.
    #[inline(always)]
    fn offset(&self, i: usize, j: usize) -> usize {
        let (r, c) = if self.transpose { (j, i) } else { (i, j) };
        self.st.offset(self.layout, self.uplo, self.n, r, c)
    }

    /// Element (i, j) of `op(A)`, inside its triangle.
    #[inline(always)]
    fn get(&self, i: usize, j: usize) -> T {
        self.a[self.offset(i, j)].conj_if(self.conj)
    }

    /// Sum of `op(A)(i, j) * x[j]` over the off-diagonal part of row `i`.
    ///
    /// Rows of `op(A)` are contiguous in every storage scheme when the
    /// layout is row-major and A is not transposed, or column-major and it
    /// is.
    #[inline]
    fn row_sum(&self, i: usize, x: &[T]) -> T {
        let cols = off_diagonal(self.upper(), i, self.n, self.st.reach(self.n));
        if cols.is_empty() {
            return T::zero();
        }
        if (self.layout == Layout::RowMajor) != self.transpose {
            let start = self.offset(i, cols.start);
            let line = &self.a[start..start + cols.len()];
            let x = &x[cols];
            return if self.conj {
                unitary::dotc(line, x)
            } else {
                unitary::dot(line, x)
            };
        }
        let mut s = T::zero();
        for j in cols {
            s += self.get(i, j) * x[j];
        }
        s
    }

    /// `x := op(A) * x`. Rows are visited so that every `x[j]` a row needs
    /// is still unmodified.
    pub(crate) fn multiply(&self, x: &mut [T]) {
        let mut step = |i: usize| {
            let d = if self.unit { x[i] } else { self.get(i, i) * x[i] };
            x[i] = d + self.row_sum(i, x);
        };
        if self.upper() {
            (0..self.n).for_each(&mut step);
        } else {
            (0..self.n).rev().for_each(&mut step);
        }
    }

    /// `x := op(A)^-1 * x`: back substitution for upper, forward for lower.
    pub(crate) fn solve(&self, x: &mut [T]) {
        let mut step = |i: usize| {
            let s = x[i] - self.row_sum(i, x);
            x[i] = if self.unit { s } else { s / self.get(i, i) };
        };
        if self.upper() {
            (0..self.n).rev().for_each(&mut step);
        } else {
            (0..self.n).for_each(&mut step);
        }
    }
}

#[derive(Clone, Copy)]
enum Op {
    Multiply,
    Solve,
}

fn run<T: Scalar>(
    op: Op,
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    st: Square,
    x: &mut [T],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    let tri = Triangle::new(a, st, layout, uplo, trans, diag, n);
    strided::with_contiguous_mut(n, x, incx, |x| match op {
        Op::Multiply => tri.multiply(x),
        Op::Solve => tri.solve(x),
    });
}

#[inline]
fn band_extent(uplo: Uplo, k: usize) -> (usize, usize) {
    match uplo {
        Uplo::Upper => (0, k),
        Uplo::Lower => (k, 0),
    }
}

// ============================================================================
// Multiply: x := op(A) * x
// ============================================================================

/// Triangular matrix-vector multiply: `x := op(A) * x`.
pub fn trmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) {
    ensure::<T>(check::matrix("trmv", "a", layout, n, n, a.len(), lda));
    ensure::<T>(check::vector("trmv", "x", n, x.len(), incx));
    let st = Square::Dense { ld: lda };
    run(Op::Multiply, layout, uplo, trans, diag, n, a, st, x, incx);
}

/// Triangular band matrix-vector multiply with `k` off-diagonals.
pub fn tbmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) {
    let (kl, ku) = band_extent(uplo, k);
    ensure::<T>(check::band("tbmv", "a", layout, n, n, kl, ku, a.len(), lda));
    ensure::<T>(check::vector("tbmv", "x", n, x.len(), incx));
    let st = Square::Band { k, ld: lda };
    run(Op::Multiply, layout, uplo, trans, diag, n, a, st, x, incx);
}

/// Triangular packed matrix-vector multiply.
pub fn tpmv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) {
    ensure::<T>(check::packed("tpmv", "ap", n, ap.len()));
    ensure::<T>(check::vector("tpmv", "x", n, x.len(), incx));
    run(Op::Multiply, layout, uplo, trans, diag, n, ap, Square::Packed, x, incx);
}

// ============================================================================
// Solve: x := op(A)^-1 * x
// ============================================================================

/// Triangular solve: `x := op(A)^-1 * x`.
pub fn trsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) {
    ensure::<T>(check::matrix("trsv", "a", layout, n, n, a.len(), lda));
    ensure::<T>(check::vector("trsv", "x", n, x.len(), incx));
    let st = Square::Dense { ld: lda };
    run(Op::Solve, layout, uplo, trans, diag, n, a, st, x, incx);
}

/// Triangular band solve with `k` off-diagonals.
pub fn tbsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) {
    let (kl, ku) = band_extent(uplo, k);
    ensure::<T>(check::band("tbsv", "a", layout, n, n, kl, ku, a.len(), lda));
    ensure::<T>(check::vector("tbsv", "x", n, x.len(), incx));
    let st = Square::Band { k, ld: lda };
    run(Op::Solve, layout, uplo, trans, diag, n, a, st, x, incx);
}

/// Triangular packed solve.
pub fn tpsv<T: Scalar>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[T],
    x: &mut [T],
    incx: isize,
) {
    ensure::<T>(check::packed("tpsv", "ap", n, ap.len()));
    ensure::<T>(check::vector("tpsv", "x", n, x.len(), incx));
    run(Op::Solve, layout, uplo, trans, diag, n, ap, Square::Packed, x, incx);
}
