//! General-increment kernels.
//!
//! Logical element `i` of a vector with increment `inc` lives at
//! `start + i * inc`, where `start` is zero for positive increments and
//! `(n - 1) * |inc|` for negative ones, so a negative increment walks the
//! buffer from the end toward the start.

use std::borrow::Cow;

use num_traits::Zero;

use super::SumSquares;
use crate::scalar::Scalar;

/// Buffer offset of logical element 0.
#[inline(always)]
pub fn start(n: usize, inc: isize) -> usize {
    if inc < 0 {
        (n.saturating_sub(1)) * inc.unsigned_abs()
    } else {
        0
    }
}

/// Buffer offsets of logical elements `0..n`.
#[inline(always)]
pub fn offsets(n: usize, inc: isize) -> impl Iterator<Item = usize> {
    let s = start(n, inc) as isize;
    (0..n as isize).map(move |i| (s + i * inc) as usize)
}

#[inline]
pub fn dot<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    let mut sum = T::zero();
    for (ix, iy) in offsets(n, incx).zip(offsets(n, incy)) {
        sum += x[ix] * y[iy];
    }
    sum
}

#[inline]
pub fn dotc<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    let mut sum = T::zero();
    for (ix, iy) in offsets(n, incx).zip(offsets(n, incy)) {
        sum += x[ix].conj() * y[iy];
    }
    sum
}

#[inline]
pub fn axpy<T: Scalar>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    for (ix, iy) in offsets(n, incx).zip(offsets(n, incy)) {
        y[iy] += alpha * x[ix];
    }
}

#[inline]
pub fn scal<T: Scalar>(n: usize, alpha: T, x: &mut [T], incx: isize) {
    for ix in offsets(n, incx) {
        x[ix] *= alpha;
    }
}

#[inline]
pub fn rscal<T: Scalar>(n: usize, alpha: T::Real, x: &mut [T], incx: isize) {
    for ix in offsets(n, incx) {
        x[ix] = x[ix].scale_by(alpha);
    }
}

#[inline]
pub fn asum<T: Scalar>(n: usize, x: &[T], incx: isize) -> T::Real {
    let mut sum = T::Real::zero();
    for ix in offsets(n, incx) {
        sum += x[ix].abs1();
    }
    sum
}

#[inline]
pub fn nrm2<T: Scalar>(n: usize, x: &[T], incx: isize) -> T::Real {
    let mut acc = SumSquares::new();
    for ix in offsets(n, incx) {
        acc.push(x[ix].re());
        if T::IS_COMPLEX {
            acc.push(x[ix].im());
        }
    }
    acc.norm()
}

/// Logical index of the first element with the largest `|re| + |im|`.
#[inline]
pub fn iamax<T: Scalar>(n: usize, x: &[T], incx: isize) -> Option<usize> {
    let mut best: Option<(usize, T::Real)> = None;
    for (i, ix) in offsets(n, incx).enumerate() {
        let v = x[ix].abs1();
        if best.map_or(true, |(_, max)| v > max) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

#[inline]
pub fn copy<T: Scalar>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    for (ix, iy) in offsets(n, incx).zip(offsets(n, incy)) {
        y[iy] = x[ix];
    }
}

#[inline]
pub fn swap<T: Scalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) {
    for (ix, iy) in offsets(n, incx).zip(offsets(n, incy)) {
        std::mem::swap(&mut x[ix], &mut y[iy]);
    }
}

/// Logical elements of `x` as a contiguous slice, borrowing when `inc == 1`.
#[inline]
pub fn gather<T: Scalar>(n: usize, x: &[T], inc: isize) -> Cow<'_, [T]> {
    if inc == 1 {
        Cow::Borrowed(&x[..n])
    } else {
        Cow::Owned(offsets(n, inc).map(|ix| x[ix]).collect())
    }
}

/// Writes contiguous `buf` back to the logical elements of `x`.
#[inline]
pub fn scatter<T: Scalar>(buf: &[T], x: &mut [T], inc: isize) {
    for (ix, &v) in offsets(buf.len(), inc).zip(buf) {
        x[ix] = v;
    }
}

/// Runs `f` over the logical elements of `x` as one contiguous slice.
///
/// With `inc == 1` the caller's buffer is handed over directly; otherwise
/// the elements are gathered into scratch and scattered back afterwards.
#[inline]
pub fn with_contiguous_mut<T: Scalar, R>(
    n: usize,
    x: &mut [T],
    inc: isize,
    f: impl FnOnce(&mut [T]) -> R,
) -> R {
    if inc == 1 {
        return f(&mut x[..n]);
    }
    let mut buf: Vec<T> = offsets(n, inc).map(|ix| x[ix]).collect();
    let out = f(&mut buf);
    scatter(&buf, x, inc);
    out
}
