//! Givens plane rotations and the modified (fast) Givens transform.
//!
//! `rotg`/`rot` build and apply the classic rotation that zeroes the second
//! component of a 2-vector. `rotmg`/`rotm` do the same with the modified
//! form, whose [`RotationForm`] tag records which entries of `H` are
//! implicit so the apply step skips redundant multiplies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use numrus_core::check;
use numrus_core::kernels::strided;
use numrus_core::RealScalar;

use crate::named::ensure;

/// Shape of the modified-Givens matrix `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum RotationForm {
    /// `H` is the identity; nothing to apply.
    Identity = -2,
    /// All four entries of `H` are stored.
    Rescaling = -1,
    /// `h11 = h22 = 1`; only the off-diagonal is stored.
    OffDiagonal = 0,
    /// `h12 = 1`, `h21 = -1`; only the diagonal is stored.
    Diagonal = 1,
}

/// Modified-Givens descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotmParams<T> {
    pub form: RotationForm,
    /// Column-major `[h11, h21, h12, h22]`. Entries implied by `form` are
    /// not read by [`rotm`].
    pub h: [T; 4],
}

impl<T: RealScalar> RotmParams<T> {
    pub fn identity() -> Self {
        Self {
            form: RotationForm::Identity,
            h: [T::zero(); 4],
        }
    }

    /// The full 2x2 matrix with implied entries filled in.
    pub fn matrix(&self) -> [[T; 2]; 2] {
        let [h11, h21, h12, h22] = self.h;
        let (one, zero) = (T::one(), T::zero());
        match self.form {
            RotationForm::Identity => [[one, zero], [zero, one]],
            RotationForm::Rescaling => [[h11, h12], [h21, h22]],
            RotationForm::OffDiagonal => [[one, h12], [h21, one]],
            RotationForm::Diagonal => [[h11, one], [-one, h22]],
        }
    }
}

/// Result of [`rotg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Givens<T> {
    pub c: T,
    pub s: T,
    pub r: T,
    /// Packed encoding from which `(c, s)` can be rebuilt with [`Givens::from_z`].
    pub z: T,
}

impl<T: RealScalar> Givens<T> {
    /// Rebuilds `(c, s)` from the packed `z`.
    pub fn from_z(z: T) -> (T, T) {
        let one = T::one();
        if z == one {
            (T::zero(), one)
        } else if z.abs() < one {
            ((one - z * z).sqrt(), z)
        } else {
            (one / z, (one - one / (z * z)).sqrt())
        }
    }
}

/// Constructs the Givens rotation that maps `(a, b)` to `(r, 0)`.
///
/// `r` takes the sign of whichever of `a`, `b` is larger in magnitude.
pub fn rotg<T: RealScalar>(a: T, b: T) -> Givens<T> {
    let (zero, one) = (T::zero(), T::one());
    let roe = if a.abs() > b.abs() { a } else { b };
    let scale = a.abs() + b.abs();
    if scale == zero {
        return Givens {
            c: one,
            s: zero,
            r: zero,
            z: zero,
        };
    }
    let (sa, sb) = (a / scale, b / scale);
    let mut r = scale * (sa * sa + sb * sb).sqrt();
    if roe < zero {
        r = -r;
    }
    let c = a / r;
    let s = b / r;
    let z = if a.abs() > b.abs() {
        s
    } else if c != zero {
        one / c
    } else {
        one
    };
    Givens { c, s, r, z }
}

/// Constructs the modified Givens transform for `(sqrt(d1) * x1, sqrt(d2) * y1)`.
///
/// Returns the descriptor and the updated `(d1, d2, x1)`.
pub fn rotmg<T: RealScalar>(d1: T, d2: T, x1: T, y1: T) -> (RotmParams<T>, T, T, T) {
    let zero = T::zero();
    let one = T::one();
    let gam = T::from_f64(4096.0);
    let gamsq = T::from_f64(16_777_216.0);
    let rgamsq = T::from_f64(5.960_464_477_539_063e-8);

    let zeroed = || {
        (
            RotmParams {
                form: RotationForm::Rescaling,
                h: [zero; 4],
            },
            zero,
            zero,
            zero,
        )
    };

    if d1 < zero {
        return zeroed();
    }
    let p2 = d2 * y1;
    if p2 == zero {
        return (RotmParams::identity(), d1, d2, x1);
    }

    let p1 = d1 * x1;
    let q2 = p2 * y1;
    let q1 = p1 * x1;

    let (mut d1, mut d2, mut x1) = (d1, d2, x1);
    // Column-major [h11, h21, h12, h22].
    let mut h = [zero; 4];
    let mut form;
    if q1.abs() > q2.abs() {
        h[1] = -y1 / x1;
        h[2] = p2 / p1;
        let u = one - h[2] * h[1];
        if u <= zero {
            return zeroed();
        }
        form = RotationForm::OffDiagonal;
        d1 /= u;
        d2 /= u;
        x1 *= u;
    } else {
        if q2 < zero {
            return zeroed();
        }
        form = RotationForm::Diagonal;
        h[0] = p1 / p2;
        h[3] = x1 / y1;
        let u = one + h[0] * h[3];
        let tmp = d2 / u;
        d2 = d1 / u;
        d1 = tmp;
        x1 = y1 * u;
    }

    // Materialize the implied entries before rescaling touches them.
    let to_rescaling = |form: &mut RotationForm, h: &mut [T; 4]| match *form {
        RotationForm::OffDiagonal => {
            h[0] = one;
            h[3] = one;
            *form = RotationForm::Rescaling;
        }
        RotationForm::Diagonal => {
            h[1] = -one;
            h[2] = one;
            *form = RotationForm::Rescaling;
        }
        _ => {}
    };

    while d1 != zero && (d1 <= rgamsq || d1 >= gamsq) {
        to_rescaling(&mut form, &mut h);
        if d1 <= rgamsq {
            d1 *= gamsq;
            x1 /= gam;
            h[0] /= gam;
            h[2] /= gam;
        } else {
            d1 /= gamsq;
            x1 *= gam;
            h[0] *= gam;
            h[2] *= gam;
        }
    }

    while d2 != zero && (d2.abs() <= rgamsq || d2.abs() >= gamsq) {
        to_rescaling(&mut form, &mut h);
        if d2.abs() <= rgamsq {
            d2 *= gamsq;
            h[1] /= gam;
            h[3] /= gam;
        } else {
            d2 /= gamsq;
            h[1] *= gam;
            h[3] *= gam;
        }
    }

    (RotmParams { form, h }, d1, d2, x1)
}

fn check_pair<T: RealScalar>(
    routine: &'static str,
    n: usize,
    x_len: usize,
    incx: isize,
    y_len: usize,
    incy: isize,
) {
    ensure::<T>(
        check::vector(routine, "x", n, x_len, incx)
            .and_then(|()| check::vector(routine, "y", n, y_len, incy)),
    );
}

/// Applies the plane rotation: `x := c x + s y`, `y := c y - s x`.
pub fn rot<T: RealScalar>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize, c: T, s: T) {
    check_pair::<T>("rot", n, x.len(), incx, y.len(), incy);
    if incx == 1 && incy == 1 {
        for (xi, yi) in x[..n].iter_mut().zip(&mut y[..n]) {
            let (vx, vy) = (*xi, *yi);
            *xi = c * vx + s * vy;
            *yi = c * vy - s * vx;
        }
    } else {
        for (ix, iy) in strided::offsets(n, incx).zip(strided::offsets(n, incy)) {
            let (vx, vy) = (x[ix], y[iy]);
            x[ix] = c * vx + s * vy;
            y[iy] = c * vy - s * vx;
        }
    }
}

/// Applies the modified Givens transform `p` to the pairs `(x[i], y[i])`.
///
/// Only the entries that `p.form` declares as stored are read.
pub fn rotm<T: RealScalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    p: &RotmParams<T>,
) {
    check_pair::<T>("rotm", n, x.len(), incx, y.len(), incy);
    let [h11, h21, h12, h22] = p.h;
    match p.form {
        RotationForm::Identity => {}
        RotationForm::Rescaling => apply_pairs(n, x, incx, y, incy, |vx, vy| {
            (h11 * vx + h12 * vy, h21 * vx + h22 * vy)
        }),
        RotationForm::OffDiagonal => {
            apply_pairs(n, x, incx, y, incy, |vx, vy| (vx + h12 * vy, h21 * vx + vy))
        }
        RotationForm::Diagonal => {
            apply_pairs(n, x, incx, y, incy, |vx, vy| (h11 * vx + vy, -vx + h22 * vy))
        }
    }
}

#[inline(always)]
fn apply_pairs<T: RealScalar>(
    n: usize,
    x: &mut [T],
    incx: isize,
    y: &mut [T],
    incy: isize,
    f: impl Fn(T, T) -> (T, T),
) {
    if incx == 1 && incy == 1 {
        for (xi, yi) in x[..n].iter_mut().zip(&mut y[..n]) {
            (*xi, *yi) = f(*xi, *yi);
        }
    } else {
        for (ix, iy) in strided::offsets(n, incx).zip(strided::offsets(n, incy)) {
            (x[ix], y[iy]) = f(x[ix], y[iy]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-14 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_rotg_zeroes_second_component() {
        for &(a, b) in &[(3.0, 4.0), (0.0, 2.0), (5.0, 0.0), (1.5, 1.5), (-2.0, 7.0), (0.0, 0.0)] {
            let g = rotg(a, b);
            let mut x = [a];
            let mut y = [b];
            rot(1, &mut x, 1, &mut y, 1, g.c, g.s);
            assert!(close(x[0], g.r), "({a},{b}): {} vs r={}", x[0], g.r);
            assert!(close(y[0], 0.0), "({a},{b}): residual {}", y[0]);
        }
    }

    #[test]
    fn test_rotg_z_reconstructs_c_and_s() {
        for &(a, b) in &[(3.0, 4.0), (4.0, 3.0), (0.0, 1.0), (-1.0, 0.5)] {
            let g = rotg(a, b);
            let (c, s) = Givens::from_z(g.z);
            assert!(close(c, g.c) && close(s, g.s), "({a},{b}): {g:?} -> ({c},{s})");
        }
    }

    #[test]
    fn test_rotg_sign_follows_larger() {
        let g = rotg(-4.0f64, 3.0);
        assert!(close(g.r, -5.0));
        assert!(close(g.c, 0.8) && close(g.s, -0.6));
    }

    #[test]
    fn test_rotmg_zeroes_y() {
        let cases: [(f64, f64, f64, f64); 3] = [(1.0, 1.0, 3.0, 1.0), (2.0, 3.0, 1.0, 4.0), (1e-9, 1e9, 1.0, 1.0)];
        for &(d1, d2, x1, y1) in &cases {
            let (p, _, _, _) = rotmg(d1, d2, x1, y1);
            let mut x = [x1];
            let mut y = [y1];
            rotm(1, &mut x, 1, &mut y, 1, &p);
            assert!(y[0].abs() < 1e-12 * x1.abs().max(y1.abs()), "{:?}: y = {}", p, y[0]);
        }
    }

    #[test]
    fn test_rotmg_forms() {
        assert_eq!(rotmg(1.0, 1.0, 3.0, 1.0).0.form, RotationForm::OffDiagonal);
        assert_eq!(rotmg(1.0, 1.0, 1.0, 3.0).0.form, RotationForm::Diagonal);
        assert_eq!(rotmg(1.0, 0.0, 1.0, 3.0).0.form, RotationForm::Identity);
        let (p, d1, d2, x1) = rotmg(-1.0, 1.0, 1.0, 1.0);
        assert_eq!(p.form, RotationForm::Rescaling);
        assert_eq!((d1, d2, x1), (0.0, 0.0, 0.0));
        // d2 far outside [gam^-2, gam^2] forces explicit rescaling.
        assert_eq!(rotmg(1.0, 1e12, 1e6, 1.0).0.form, RotationForm::Rescaling);
    }

    #[test]
    fn test_rotm_honors_tag_not_coefficients() {
        // Diagonal form ignores stored h21/h12 and uses -1 / +1.
        let p = RotmParams {
            form: RotationForm::Diagonal,
            h: [2.0, 100.0, 100.0, 3.0],
        };
        let mut x = [1.0f64, 2.0];
        let mut y = [10.0f64, 20.0];
        rotm(2, &mut x, 1, &mut y, 1, &p);
        assert_eq!(x, [12.0, 24.0]);
        assert_eq!(y, [29.0, 58.0]);

        let p = RotmParams {
            form: RotationForm::Identity,
            h: [9.0, 9.0, 9.0, 9.0],
        };
        rotm(2, &mut x, 1, &mut y, -1, &p);
        assert_eq!(x, [12.0, 24.0]);
    }

    #[test]
    fn test_rotm_matches_dense_matrix() {
        let p = RotmParams {
            form: RotationForm::OffDiagonal,
            h: [7.0, 0.5, -0.25, 7.0],
        };
        let m = p.matrix();
        let mut x = [4.0f64, 0.0, -2.0];
        let mut y = [1.0f64, 3.0];
        rotm(2, &mut x, 2, &mut y, 1, &p);
        assert_eq!(x[0], m[0][0] * 4.0 + m[0][1] * 1.0);
        assert_eq!(y[0], m[1][0] * 4.0 + m[1][1] * 1.0);
        assert_eq!(x[2], m[0][0] * -2.0 + m[0][1] * 3.0);
    }
}
