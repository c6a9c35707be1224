//! Element types the BLAS kernels are generic over.
//!
//! Every routine is written once against [`Scalar`] and instantiated for
//! `f32`, `f64`, `Complex<f32>` and `Complex<f64>`. For real types
//! conjugation is the identity, so `ConjTrans` and `Trans` coincide.

use std::fmt::Debug;
use std::ops::Neg;

use num_complex::Complex;
use num_traits::{Float, NumAssign};

/// Single-precision complex.
pub type C32 = Complex<f32>;
/// Double-precision complex.
pub type C64 = Complex<f64>;

/// A real or complex BLAS element.
pub trait Scalar:
    Copy + Debug + PartialEq + Send + Sync + 'static + NumAssign + Neg<Output = Self>
{
    /// The underlying real type (`Self` for real scalars).
    type Real: RealScalar;

    /// Whether `conj` can change a value.
    const IS_COMPLEX: bool;

    /// BLAS precision letter: `s`, `d`, `c` or `z`.
    const PREFIX: char;

    fn conj(self) -> Self;

    fn re(self) -> Self::Real;

    fn im(self) -> Self::Real;

    fn from_real(re: Self::Real) -> Self;

    /// `|re| + |im|`, the magnitude used by `asum` and `iamax`.
    fn abs1(self) -> Self::Real;

    #[inline(always)]
    fn conj_if(self, conj: bool) -> Self {
        if conj {
            self.conj()
        } else {
            self
        }
    }

    /// `self` with its imaginary part dropped.
    #[inline(always)]
    fn real_part(self) -> Self {
        Self::from_real(self.re())
    }

    #[inline(always)]
    fn scale_by(self, r: Self::Real) -> Self {
        self * Self::from_real(r)
    }
}

/// A real BLAS element.
pub trait RealScalar: Scalar<Real = Self> + Float {
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_real {
    ($($t:ty => $p:literal),*) => {$(
        impl Scalar for $t {
            type Real = $t;
            const IS_COMPLEX: bool = false;
            const PREFIX: char = $p;

            #[inline(always)]
            fn conj(self) -> Self {
                self
            }

            #[inline(always)]
            fn re(self) -> Self {
                self
            }

            #[inline(always)]
            fn im(self) -> Self {
                0.0
            }

            #[inline(always)]
            fn from_real(re: Self) -> Self {
                re
            }

            #[inline(always)]
            fn abs1(self) -> Self {
                self.abs()
            }
        }

        impl RealScalar for $t {
            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }
    )*};
}

macro_rules! impl_complex {
    ($($t:ty => $p:literal),*) => {$(
        impl Scalar for Complex<$t> {
            type Real = $t;
            const IS_COMPLEX: bool = true;
            const PREFIX: char = $p;

            #[inline(always)]
            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }

            #[inline(always)]
            fn re(self) -> $t {
                self.re
            }

            #[inline(always)]
            fn im(self) -> $t {
                self.im
            }

            #[inline(always)]
            fn from_real(re: $t) -> Self {
                Complex::new(re, 0.0)
            }

            #[inline(always)]
            fn abs1(self) -> $t {
                self.re.abs() + self.im.abs()
            }

            #[inline(always)]
            fn scale_by(self, r: $t) -> Self {
                Complex::new(self.re * r, self.im * r)
            }
        }
    )*};
}

impl_real!(f32 => 's', f64 => 'd');
impl_complex!(f32 => 'c', f64 => 'z');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_conj_is_identity() {
        assert_eq!(Scalar::conj(-2.5f64), -2.5);
        assert_eq!(Scalar::im(3.0f32), 0.0);
        assert!(!<f64 as Scalar>::IS_COMPLEX);
    }

    #[test]
    fn test_complex_helpers() {
        let z = C64::new(3.0, -4.0);
        assert_eq!(Scalar::conj(z), C64::new(3.0, 4.0));
        assert_eq!(z.abs1(), 7.0);
        assert_eq!(z.real_part(), C64::new(3.0, 0.0));
        assert_eq!(z.scale_by(2.0), C64::new(6.0, -8.0));
        assert_eq!(z.conj_if(false), z);
        assert!(<C32 as Scalar>::IS_COMPLEX);
        assert_eq!(<C32 as Scalar>::PREFIX, 'c');
        assert_eq!(<f64 as Scalar>::PREFIX, 'd');
    }
}
