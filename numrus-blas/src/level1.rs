//! BLAS Level 1: Vector-vector operations.
//!
//! Every routine validates its arguments, then takes the unitary path when
//! all increments are one and the strided path otherwise. Increments may be
//! negative; results are defined in terms of logical element order.

use numrus_core::check;
use numrus_core::kernels::{strided, unitary};
use numrus_core::Scalar;

use crate::named::ensure;
use crate::Result;

#[inline]
fn check_x(routine: &'static str, n: usize, x_len: usize, incx: isize) -> Result<()> {
    check::vector(routine, "x", n, x_len, incx)
}

#[inline]
fn check_xy(
    routine: &'static str,
    n: usize,
    x_len: usize,
    incx: isize,
    y_len: usize,
    incy: isize,
) -> Result<()> {
    check::vector(routine, "x", n, x_len, incx)?;
    check::vector(routine, "y", n, y_len, incy)
}

// ============================================================================
// DOT: inner products
// ============================================================================

/// Unconjugated dot product: `sum x[i] * y[i]`.
#[inline]
pub fn dot<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    ensure::<T>(check_xy("dot", n, x.len(), incx, y.len(), incy));
    if incx == 1 && incy == 1 {
        unitary::dot(&x[..n], &y[..n])
    } else {
        strided::dot(n, x, incx, y, incy)
    }
}

/// Complex unconjugated dot product. Same as [`dot`].
#[inline]
pub fn dotu<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    dot(n, x, incx, y, incy)
}

/// Conjugated dot product: `sum conj(x[i]) * y[i]`.
#[inline]
pub fn dotc<T: Scalar>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize) -> T {
    ensure::<T>(check_xy("dotc", n, x.len(), incx, y.len(), incy));
    if incx == 1 && incy == 1 {
        unitary::dotc(&x[..n], &y[..n])
    } else {
        strided::dotc(n, x, incx, y, incy)
    }
}

#[inline]
fn dot_f32_in_f64(n: usize, x: &[f32], incx: isize, y: &[f32], incy: isize) -> f64 {
    if incx == 1 && incy == 1 {
        x[..n]
            .iter()
            .zip(&y[..n])
            .map(|(&a, &b)| f64::from(a) * f64::from(b))
            .sum()
    } else {
        strided::offsets(n, incx)
            .zip(strided::offsets(n, incy))
            .map(|(ix, iy)| f64::from(x[ix]) * f64::from(y[iy]))
            .sum()
    }
}

/// `alpha + sum x[i] * y[i]` accumulated in double precision, returned as `f32`.
pub fn sdsdot(n: usize, alpha: f32, x: &[f32], incx: isize, y: &[f32], incy: isize) -> f32 {
    ensure::<f32>(check_xy("sdsdot", n, x.len(), incx, y.len(), incy));
    (f64::from(alpha) + dot_f32_in_f64(n, x, incx, y, incy)) as f32
}

/// Single-precision inputs, double-precision accumulation and result.
pub fn dsdot(n: usize, x: &[f32], incx: isize, y: &[f32], incy: isize) -> f64 {
    ensure::<f32>(check_xy("dsdot", n, x.len(), incx, y.len(), incy));
    dot_f32_in_f64(n, x, incx, y, incy)
}

// ============================================================================
// NRM2 / ASUM / IAMAX: reductions
// ============================================================================

/// Euclidean norm `||x||_2`, computed with a running scale so values near
/// the overflow or underflow threshold do not spoil the result.
#[inline]
pub fn nrm2<T: Scalar>(n: usize, x: &[T], incx: isize) -> T::Real {
    ensure::<T>(check_x("nrm2", n, x.len(), incx));
    if incx == 1 {
        unitary::nrm2(&x[..n])
    } else {
        strided::nrm2(n, x, incx)
    }
}

/// Sum of magnitudes, `|re| + |im|` per element for complex vectors.
#[inline]
pub fn asum<T: Scalar>(n: usize, x: &[T], incx: isize) -> T::Real {
    ensure::<T>(check_x("asum", n, x.len(), incx));
    if incx == 1 {
        unitary::asum(&x[..n])
    } else {
        strided::asum(n, x, incx)
    }
}

/// Logical index of the first element of maximum `|re| + |im|`.
///
/// Returns `None` when `n == 0`.
#[inline]
pub fn iamax<T: Scalar>(n: usize, x: &[T], incx: isize) -> Option<usize> {
    ensure::<T>(check_x("iamax", n, x.len(), incx));
    if incx == 1 {
        unitary::iamax(&x[..n])
    } else {
        strided::iamax(n, x, incx)
    }
}

// ============================================================================
// SCAL / COPY / SWAP / AXPY: updates
// ============================================================================

/// `x := alpha * x`. A zero `alpha` stores zeros without reading `x`.
#[inline]
pub fn scal<T: Scalar>(n: usize, alpha: T, x: &mut [T], incx: isize) {
    ensure::<T>(check_x("scal", n, x.len(), incx));
    if alpha == T::zero() {
        fill_zero(n, x, incx);
    } else if incx == 1 {
        unitary::scal(alpha, &mut x[..n]);
    } else {
        strided::scal(n, alpha, x, incx);
    }
}

/// `x := alpha * x` with a real `alpha` (`csscal`, `zdscal`).
#[inline]
pub fn rscal<T: Scalar>(n: usize, alpha: T::Real, x: &mut [T], incx: isize) {
    ensure::<T>(check_x("rscal", n, x.len(), incx));
    if alpha == <T::Real as num_traits::Zero>::zero() {
        fill_zero(n, x, incx);
    } else if incx == 1 {
        unitary::rscal(alpha, &mut x[..n]);
    } else {
        strided::rscal(n, alpha, x, incx);
    }
}

fn fill_zero<T: Scalar>(n: usize, x: &mut [T], incx: isize) {
    if incx == 1 {
        x[..n].fill(T::zero());
    } else {
        for ix in strided::offsets(n, incx) {
            x[ix] = T::zero();
        }
    }
}

/// `y := x`.
#[inline]
pub fn copy<T: Scalar>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    ensure::<T>(check_xy("copy", n, x.len(), incx, y.len(), incy));
    if incx == 1 && incy == 1 {
        y[..n].copy_from_slice(&x[..n]);
    } else {
        strided::copy(n, x, incx, y, incy);
    }
}

/// `x <-> y`.
#[inline]
pub fn swap<T: Scalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) {
    ensure::<T>(check_xy("swap", n, x.len(), incx, y.len(), incy));
    if incx == 1 && incy == 1 {
        x[..n].swap_with_slice(&mut y[..n]);
    } else {
        strided::swap(n, x, incx, y, incy);
    }
}

/// `y := alpha * x + y`. A zero `alpha` leaves `y` untouched.
#[inline]
pub fn axpy<T: Scalar>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    ensure::<T>(check_xy("axpy", n, x.len(), incx, y.len(), incy));
    if alpha == T::zero() {
        return;
    }
    if incx == 1 && incy == 1 {
        unitary::axpy(alpha, &x[..n], &mut y[..n]);
    } else {
        strided::axpy(n, alpha, x, incx, y, incy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numrus_core::C64;

    #[test]
    fn test_dot_f32() {
        let x = vec![1.0f32, 2.0, 3.0, 4.0];
        let y = vec![5.0f32, 6.0, 7.0, 8.0];
        assert_eq!(dot(4, &x, 1, &y, 1), 70.0);
    }

    #[test]
    fn test_dot_strided() {
        let x = vec![1.0f32, 0.0, 2.0, 0.0, 3.0];
        let y = vec![4.0f32, 0.0, 5.0, 0.0, 6.0];
        assert_eq!(dot(3, &x, 2, &y, 2), 32.0);
    }

    #[test]
    fn test_dot_negative_increment() {
        let x = vec![1.0f64, 2.0, 3.0];
        let y = vec![4.0f64, 5.0, 6.0];
        // Reversing both walks the same pairs.
        assert_eq!(dot(3, &x, -1, &y, -1), 32.0);
        // Reversing one pairs 1*6 + 2*5 + 3*4.
        assert_eq!(dot(3, &x, 1, &y, -1), 28.0);
    }

    #[test]
    fn test_dotc_complex() {
        let x = vec![C64::new(1.0, 2.0), C64::new(3.0, -1.0)];
        let y = vec![C64::new(2.0, 1.0), C64::new(0.0, 1.0)];
        // conj(1+2i)(2+i) + conj(3-i)(i) = (4-3i) + (-1+3i)
        assert_eq!(dotc(2, &x, 1, &y, 1), C64::new(3.0, 0.0));
        // (1+2i)(2+i) + (3-i)(i) = 5i + (1+3i)
        assert_eq!(dotu(2, &x, 1, &y, 1), C64::new(1.0, 8.0));
    }

    #[test]
    fn test_sdsdot_accumulates_in_double() {
        // 1e8 + 1 - 1e8 vanishes in f32 accumulation.
        let x = vec![1.0e8f32, 1.0, -1.0e8];
        let y = vec![1.0f32; 3];
        assert_eq!(sdsdot(3, 0.5, &x, 1, &y, 1), 1.5);
        assert_eq!(dsdot(3, &x, 1, &y, 1), 1.0);
    }

    #[test]
    fn test_axpy() {
        let x = vec![1.0f32, 2.0, 3.0, 4.0];
        let mut y = vec![10.0f32, 20.0, 30.0, 40.0];
        axpy(4, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, vec![12.0, 24.0, 36.0, 48.0]);
    }

    #[test]
    fn test_axpy_strided() {
        let x = vec![1.0f32, 0.0, 2.0, 0.0, 3.0];
        let mut y = vec![10.0f32, 0.0, 20.0, 0.0, 30.0];
        axpy(3, 2.0, &x, 2, &mut y, -2);
        // x forwards onto y backwards: y[4] += 2, y[2] += 4, y[0] += 6.
        assert_eq!(y, vec![16.0, 0.0, 24.0, 0.0, 32.0]);
    }

    #[test]
    fn test_scal() {
        let mut x = vec![1.0f32, 2.0, 3.0, 4.0];
        scal(4, 3.0, &mut x, 1);
        assert_eq!(x, vec![3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_scal_zero_clears_nan() {
        let mut x = vec![f64::NAN, 1.0, f64::INFINITY];
        scal(3, 0.0, &mut x, 1);
        assert_eq!(x, vec![0.0; 3]);
    }

    #[test]
    fn test_rscal_complex() {
        let mut x = vec![C64::new(1.0, -2.0), C64::new(9.0, 9.0), C64::new(0.5, 0.5)];
        rscal(2, 2.0, &mut x, 2);
        assert_eq!(x[0], C64::new(2.0, -4.0));
        assert_eq!(x[1], C64::new(9.0, 9.0));
        assert_eq!(x[2], C64::new(1.0, 1.0));
    }

    #[test]
    fn test_nrm2() {
        let x = vec![3.0f32, 4.0];
        assert!((nrm2(2, &x, 1) - 5.0).abs() < 1e-6);
        let x = vec![3.0f32, 0.0, 4.0];
        assert!((nrm2(2, &x, 2) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_nrm2_does_not_overflow() {
        let x = vec![f64::MAX / 2.0, f64::MAX / 2.0];
        let got = nrm2(2, &x, 1);
        assert!(got.is_finite());
        assert!((got / (f64::MAX / 2.0 * 2f64.sqrt()) - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_asum() {
        let x = vec![-1.0f32, 2.0, -3.0, 4.0];
        assert_eq!(asum(4, &x, 1), 10.0);
        assert_eq!(asum(2, &x, -3), 5.0);
    }

    #[test]
    fn test_iamax() {
        let x = vec![1.0f32, -5.0, 3.0, -2.0];
        assert_eq!(iamax(4, &x, 1), Some(1));
        assert_eq!(iamax(0, &x, 1), None);
    }

    #[test]
    fn test_copy_and_swap() {
        let x = vec![1.0f32, 2.0, 3.0];
        let mut y = vec![0.0f32; 3];
        copy(3, &x, 1, &mut y, 1);
        assert_eq!(y, vec![1.0, 2.0, 3.0]);

        let mut a = vec![1.0f32, 2.0, 3.0];
        let mut b = vec![4.0f32, 5.0, 6.0];
        swap(3, &mut a, 1, &mut b, -1);
        assert_eq!(a, vec![6.0, 5.0, 4.0]);
        assert_eq!(b, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_zero_length_leaves_buffers() {
        let x: Vec<f64> = vec![];
        let mut y: Vec<f64> = vec![];
        assert_eq!(dot(0, &x, 1, &x, 1), 0.0);
        assert_eq!(nrm2(0, &x, 1), 0.0);
        axpy(0, 1.0, &x, 1, &mut y, 1);
        copy(0, &x, 3, &mut y, -2);
    }

    #[test]
    fn test_empty_vectors_accept_zero_increment() {
        let empty: [f64; 0] = [];
        assert_eq!(dot(0, &empty, 0, &empty, 1), 0.0);
        assert_eq!(nrm2(0, &empty, 0), 0.0);
        assert_eq!(asum(0, &empty, 0), 0.0);
        assert_eq!(iamax(0, &empty, 0), None);

        let mut y = [f64::NAN];
        axpy(0, 2.0, &empty, 0, &mut y, 0);
        scal(0, 0.0, &mut y, 0);
        assert!(y[0].is_nan());
    }

    #[test]
    #[should_panic(expected = "ddot: increment incy must not be zero")]
    fn test_zero_increment_panics() {
        let x = vec![1.0f64; 3];
        dot(3, &x, 1, &x, 0);
    }

    #[test]
    #[should_panic(expected = "dasum: buffer x too short")]
    fn test_short_buffer_panics() {
        let x = vec![1.0f64; 4];
        asum(3, &x, 2);
    }
}
