//! BLAS Level 2: Matrix-vector operations.
//!
//! All operations support both row-major and column-major layouts
//! via the CBLAS-style `Layout` parameter, and dense, banded or packed
//! storage where BLAS defines it.
//!
//! Strided vectors are gathered into contiguous buffers, the kernels run on
//! unit-stride slices and outputs are scattered back. Matrix elements are
//! addressed through [`Layout::index`] and its band and packed variants.

mod general;
mod symmetric;
mod triangular;

pub use general::{gbmv, gemv, ger, gerc, geru};
pub use symmetric::{
    hbmv, hemv, her, her2, hpmv, hpr, hpr2, sbmv, spmv, spr, spr2, symv, syr, syr2,
};
pub use triangular::{tbmv, tbsv, tpmv, tpsv, trmv, trsv};

pub(crate) use triangular::Triangle;

use std::ops::Range;

use num_traits::{One, Zero};
use numrus_core::kernels::{strided, unitary};
use numrus_core::layout::{Layout, Uplo};
use numrus_core::Scalar;

/// Storage scheme of a square operand whose `uplo` triangle is referenced.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Square {
    Dense { ld: usize },
    Band { k: usize, ld: usize },
    Packed,
}

impl Square {
    /// Offset of (i, j), which must lie in the stored triangle and band.
    #[inline(always)]
    fn offset(self, layout: Layout, uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
        match self {
            Square::Dense { ld } => layout.index(i, j, ld),
            Square::Band { k, ld } => match uplo {
                Uplo::Upper => layout.band_index(i, j, 0, k, ld),
                Uplo::Lower => layout.band_index(i, j, k, 0, ld),
            },
            Square::Packed => layout.packed_index(uplo, n, i, j),
        }
    }

    /// Largest `|i - j|` that can be non-zero.
    #[inline(always)]
    fn reach(self, n: usize) -> usize {
        match self {
            Square::Band { k, .. } => k,
            _ => n.saturating_sub(1),
        }
    }
}

/// Off-diagonal partners of `i` inside a triangle: indices above `i`
/// (`upper`) or below it, at most `reach` away.
#[inline(always)]
fn off_diagonal(upper: bool, i: usize, n: usize, reach: usize) -> Range<usize> {
    if upper {
        i + 1..n.min(i + reach + 1)
    } else {
        i.saturating_sub(reach)..i
    }
}

#[inline]
fn scale_by_beta<T: Scalar>(beta: T, y: &mut [T]) {
    if beta == T::zero() {
        y.fill(T::zero());
    } else if beta != T::one() {
        unitary::scal(beta, y);
    }
}

/// Applies `y := beta * y` to the `n` logical elements of `y`, then runs `f`
/// over them as one contiguous slice.
///
/// With `beta == 0` a strided `y` is never gathered: the scratch buffer
/// starts from zeros.
fn with_output<T: Scalar>(n: usize, y: &mut [T], incy: isize, beta: T, f: impl FnOnce(&mut [T])) {
    if incy == 1 {
        let y = &mut y[..n];
        scale_by_beta(beta, y);
        f(y);
        return;
    }
    let mut buf = if beta == T::zero() {
        vec![T::zero(); n]
    } else {
        let mut buf = strided::gather(n, y, incy).into_owned();
        scale_by_beta(beta, &mut buf);
        buf
    };
    f(&mut buf);
    strided::scatter(&buf, y, incy);
}

/// Folds one contiguous stretch of A into `y += alpha * op(A) * x`.
///
/// `seg` holds line `k` of A (a row when row-major, a column when
/// column-major) starting at cross index `lo`. In dot form line `k` produces
/// `y[k]`; otherwise `x[k]` scales the line into `y[lo..]`.
#[inline]
fn apply_line<T: Scalar>(
    dot_form: bool,
    conj: bool,
    alpha: T,
    seg: &[T],
    k: usize,
    lo: usize,
    x: &[T],
    y: &mut [T],
) {
    let hi = lo + seg.len();
    if dot_form {
        let d = if conj {
            unitary::dotc(seg, &x[lo..hi])
        } else {
            unitary::dot(seg, &x[lo..hi])
        };
        y[k] += alpha * d;
    } else {
        let t = alpha * x[k];
        if conj {
            unitary::axpyc(t, seg, &mut y[lo..hi]);
        } else {
            unitary::axpy(t, seg, &mut y[lo..hi]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_output_beta_zero_ignores_nan() {
        let mut y = vec![f64::NAN, -1.0, f64::NAN, -1.0, f64::NAN];
        with_output(3, &mut y, 2, 0.0, |buf| {
            assert!(buf.iter().all(|&v| v == 0.0));
            buf[1] = 5.0;
        });
        assert_eq!(y, vec![0.0, -1.0, 5.0, -1.0, 0.0]);
    }

    #[test]
    fn test_with_output_negative_increment() {
        // Logical order runs from the end of the buffer.
        let mut y = vec![1.0f32, 0.0, 2.0];
        with_output(2, &mut y, -2, 3.0, |buf| {
            assert_eq!(buf, &[6.0, 3.0]);
            buf[0] += 1.0;
        });
        assert_eq!(y, vec![3.0, 0.0, 7.0]);
    }

    #[test]
    fn test_off_diagonal_ranges() {
        assert_eq!(off_diagonal(true, 1, 5, 4), 2..5);
        assert_eq!(off_diagonal(true, 1, 5, 1), 2..3);
        assert_eq!(off_diagonal(false, 3, 5, 4), 0..3);
        assert_eq!(off_diagonal(false, 3, 5, 2), 1..3);
    }
}
