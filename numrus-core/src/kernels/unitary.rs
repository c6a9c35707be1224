//! Increment-one kernels over contiguous slices.
//!
//! Reductions keep four independent accumulators, combined at the end.
//! Callers pass slices of equal length.

use num_traits::{Float, Zero};

use super::SumSquares;
use crate::scalar::Scalar;

/// `sum x[i] * y[i]`.
#[inline]
pub fn dot<T: Scalar>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    let mut acc = [T::zero(); 4];
    let mut xc = x.chunks_exact(4);
    let mut yc = y.chunks_exact(4);
    for (xs, ys) in (&mut xc).zip(&mut yc) {
        acc[0] += xs[0] * ys[0];
        acc[1] += xs[1] * ys[1];
        acc[2] += xs[2] * ys[2];
        acc[3] += xs[3] * ys[3];
    }
    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for (&xi, &yi) in xc.remainder().iter().zip(yc.remainder()) {
        sum += xi * yi;
    }
    sum
}

/// `sum conj(x[i]) * y[i]`.
#[inline]
pub fn dotc<T: Scalar>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    let mut acc = [T::zero(); 4];
    let mut xc = x.chunks_exact(4);
    let mut yc = y.chunks_exact(4);
    for (xs, ys) in (&mut xc).zip(&mut yc) {
        acc[0] += xs[0].conj() * ys[0];
        acc[1] += xs[1].conj() * ys[1];
        acc[2] += xs[2].conj() * ys[2];
        acc[3] += xs[3].conj() * ys[3];
    }
    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for (&xi, &yi) in xc.remainder().iter().zip(yc.remainder()) {
        sum += xi.conj() * yi;
    }
    sum
}

/// `y[i] += alpha * x[i]`.
#[inline]
pub fn axpy<T: Scalar>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

/// `y[i] += alpha * conj(x[i])`.
#[inline]
pub fn axpyc<T: Scalar>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi.conj();
    }
}

/// `x[i] *= alpha`.
#[inline]
pub fn scal<T: Scalar>(alpha: T, x: &mut [T]) {
    for xi in x {
        *xi *= alpha;
    }
}

/// `x[i] *= alpha` for a real `alpha`.
#[inline]
pub fn rscal<T: Scalar>(alpha: T::Real, x: &mut [T]) {
    for xi in x {
        *xi = xi.scale_by(alpha);
    }
}

/// `sum |re(x[i])| + |im(x[i])|`.
#[inline]
pub fn asum<T: Scalar>(x: &[T]) -> T::Real {
    let mut acc = [T::Real::zero(); 4];
    let mut xc = x.chunks_exact(4);
    for xs in &mut xc {
        acc[0] += xs[0].abs1();
        acc[1] += xs[1].abs1();
        acc[2] += xs[2].abs1();
        acc[3] += xs[3].abs1();
    }
    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for xi in xc.remainder() {
        sum += xi.abs1();
    }
    sum
}

/// Euclidean norm with scale tracking.
#[inline]
pub fn nrm2<T: Scalar>(x: &[T]) -> T::Real {
    if let [only] = x {
        if !T::IS_COMPLEX {
            return Float::abs(only.re());
        }
    }
    let mut acc = SumSquares::new();
    for xi in x {
        acc.push(xi.re());
        if T::IS_COMPLEX {
            acc.push(xi.im());
        }
    }
    acc.norm()
}

/// Index of the first element with the largest `|re| + |im|`.
#[inline]
pub fn iamax<T: Scalar>(x: &[T]) -> Option<usize> {
    let (first, rest) = x.split_first()?;
    let mut max_idx = 0;
    let mut max_val = first.abs1();
    for (i, xi) in rest.iter().enumerate() {
        let v = xi.abs1();
        if v > max_val {
            max_val = v;
            max_idx = i + 1;
        }
    }
    Some(max_idx)
}
