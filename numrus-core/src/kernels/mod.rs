//! Vector kernels shared by every BLAS level.
//!
//! - [`unitary`]: increment-one loops over contiguous slices, unrolled for ILP.
//! - [`strided`]: loops honoring arbitrary (possibly negative) increments,
//!   plus gather/scatter helpers so matrix routines can run a contiguous
//!   core over strided vectors.
//!
//! Higher levels pick the unitary path whenever every increment is one.

pub mod strided;
pub mod unitary;

use num_traits::Float;

use crate::scalar::RealScalar;

/// Running `scale² · ssq` accumulator for overflow-safe Euclidean norms.
///
/// Values are normalized by the largest magnitude seen so far, so neither
/// huge nor tiny exponents overflow or flush to zero before the final
/// square root.
#[derive(Debug, Clone, Copy)]
pub struct SumSquares<R> {
    scale: R,
    ssq: R,
    nan: bool,
}

impl<R: RealScalar> Default for SumSquares<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RealScalar> SumSquares<R> {
    pub fn new() -> Self {
        Self {
            scale: R::zero(),
            ssq: R::one(),
            nan: false,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, v: R) {
        if v.is_nan() {
            self.nan = true;
            return;
        }
        if v == R::zero() {
            return;
        }
        let absv = Float::abs(v);
        if self.scale < absv {
            let r = self.scale / absv;
            self.ssq = R::one() + self.ssq * r * r;
            self.scale = absv;
        } else {
            let r = absv / self.scale;
            self.ssq += r * r;
        }
    }

    /// `sqrt(sum of squares)` of everything pushed.
    pub fn norm(&self) -> R {
        if self.nan {
            return R::nan();
        }
        if self.scale.is_infinite() {
            return R::infinity();
        }
        self.scale * self.ssq.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_squares_extreme_exponents() {
        let mut acc = SumSquares::<f64>::new();
        acc.push(3e300);
        acc.push(4e300);
        assert!((acc.norm() / 5e300 - 1.0).abs() < 1e-15);

        let mut tiny = SumSquares::<f64>::new();
        tiny.push(3e-300);
        tiny.push(-4e-300);
        assert!((tiny.norm() / 5e-300 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_sum_squares_nan_and_empty() {
        let mut acc = SumSquares::<f32>::new();
        assert_eq!(acc.norm(), 0.0);
        acc.push(1.0);
        acc.push(f32::NAN);
        assert!(acc.norm().is_nan());
    }
}
