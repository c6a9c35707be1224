//! Precision-prefixed BLAS names.
//!
//! One function per (routine, element type), each a direct instantiation of
//! the generic kernel with the same argument order: `s` = `f32`,
//! `d` = `f64`, `c` = [`C32`], `z` = [`C64`]. Mixed prefixes follow BLAS:
//! `scnrm2`/`dznrm2` return a real norm of a complex vector, `csscal`/
//! `zdscal` scale a complex vector by a real, `isamax`..`izamax` locate the
//! largest element.
//!
//! ```
//! use numrus_blas::named::{daxpy, ddot};
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [1.0, 1.0, 1.0];
//! daxpy(3, 2.0, &x, 1, &mut y, 1);
//! assert_eq!(ddot(3, &x, 1, &y, 1), 3.0 + 10.0 + 21.0);
//! ```

use numrus_core::error::fail;
use numrus_core::layout::{Diag, Layout, Side, Transpose, Uplo};
use numrus_core::{Result, Scalar, C32, C64};

use crate::rotation::{Givens, RotmParams};
use crate::{level1, level2, level3, rotation};

pub use crate::level1::{dsdot, sdsdot};

macro_rules! named {
    // ---------------------------------------------------------------- Level 1
    (dot: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, x: &[$t], incx: isize, y: &[$t], incy: isize) -> $t {
            level1::$f(n, x, incx, y, incy)
        }
    )+};
    (reduce: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, x: &[$t], incx: isize) -> <$t as Scalar>::Real {
            level1::$f(n, x, incx)
        }
    )+};
    (iamax: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, x: &[$t], incx: isize) -> Option<usize> {
            level1::$f(n, x, incx)
        }
    )+};
    (scal: $($name:ident = $f:ident($t:ty, $s:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, alpha: $s, x: &mut [$t], incx: isize) {
            level1::$f(n, alpha, x, incx)
        }
    )+};
    (copy: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, x: &[$t], incx: isize, y: &mut [$t], incy: isize) {
            level1::$f(n, x, incx, y, incy)
        }
    )+};
    (swap: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, x: &mut [$t], incx: isize, y: &mut [$t], incy: isize) {
            level1::$f(n, x, incx, y, incy)
        }
    )+};
    (axpy: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(n: usize, alpha: $t, x: &[$t], incx: isize, y: &mut [$t], incy: isize) {
            level1::$f(n, alpha, x, incx, y, incy)
        }
    )+};
    (rotation: $($rotg:ident, $rotmg:ident, $rot:ident, $rotm:ident = $t:ty);+ $(;)?) => {$(
        #[doc = concat!("`rotg` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $rotg(a: $t, b: $t) -> Givens<$t> {
            rotation::rotg(a, b)
        }

        #[doc = concat!("`rotmg` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $rotmg(d1: $t, d2: $t, x1: $t, y1: $t) -> (RotmParams<$t>, $t, $t, $t) {
            rotation::rotmg(d1, d2, x1, y1)
        }

        #[doc = concat!("`rot` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $rot(n: usize, x: &mut [$t], incx: isize, y: &mut [$t], incy: isize, c: $t, s: $t) {
            rotation::rot(n, x, incx, y, incy, c, s)
        }

        #[doc = concat!("`rotm` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $rotm(n: usize, x: &mut [$t], incx: isize, y: &mut [$t], incy: isize, p: &RotmParams<$t>) {
            rotation::rotm(n, x, incx, y, incy, p)
        }
    )+};

    // ---------------------------------------------------------------- Level 2
    (gemv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, trans: Transpose, m: usize, n: usize, alpha: $t, a: &[$t], lda: usize,
            x: &[$t], incx: isize, beta: $t, y: &mut [$t], incy: isize,
        ) {
            level2::$f(layout, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
        }
    )+};
    (gbmv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, trans: Transpose, m: usize, n: usize, kl: usize, ku: usize, alpha: $t,
            a: &[$t], lda: usize, x: &[$t], incx: isize, beta: $t, y: &mut [$t], incy: isize,
        ) {
            level2::$f(layout, trans, m, n, kl, ku, alpha, a, lda, x, incx, beta, y, incy)
        }
    )+};
    (ger: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, m: usize, n: usize, alpha: $t, x: &[$t], incx: isize, y: &[$t],
            incy: isize, a: &mut [$t], lda: usize,
        ) {
            level2::$f(layout, m, n, alpha, x, incx, y, incy, a, lda)
        }
    )+};
    (symv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, n: usize, alpha: $t, a: &[$t], lda: usize, x: &[$t],
            incx: isize, beta: $t, y: &mut [$t], incy: isize,
        ) {
            level2::$f(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
        }
    )+};
    (sbmv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, n: usize, k: usize, alpha: $t, a: &[$t], lda: usize,
            x: &[$t], incx: isize, beta: $t, y: &mut [$t], incy: isize,
        ) {
            level2::$f(layout, uplo, n, k, alpha, a, lda, x, incx, beta, y, incy)
        }
    )+};
    (spmv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, n: usize, alpha: $t, ap: &[$t], x: &[$t], incx: isize,
            beta: $t, y: &mut [$t], incy: isize,
        ) {
            level2::$f(layout, uplo, n, alpha, ap, x, incx, beta, y, incy)
        }
    )+};
    (syr: $($name:ident = $f:ident($t:ty, $s:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, n: usize, alpha: $s, x: &[$t], incx: isize,
            a: &mut [$t], lda: usize,
        ) {
            level2::$f(layout, uplo, n, alpha, x, incx, a, lda)
        }
    )+};
    (spr: $($name:ident = $f:ident($t:ty, $s:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(layout: Layout, uplo: Uplo, n: usize, alpha: $s, x: &[$t], incx: isize, ap: &mut [$t]) {
            level2::$f(layout, uplo, n, alpha, x, incx, ap)
        }
    )+};
    (syr2: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, n: usize, alpha: $t, x: &[$t], incx: isize, y: &[$t],
            incy: isize, a: &mut [$t], lda: usize,
        ) {
            level2::$f(layout, uplo, n, alpha, x, incx, y, incy, a, lda)
        }
    )+};
    (spr2: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, n: usize, alpha: $t, x: &[$t], incx: isize, y: &[$t],
            incy: isize, ap: &mut [$t],
        ) {
            level2::$f(layout, uplo, n, alpha, x, incx, y, incy, ap)
        }
    )+};
    (trmv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[$t],
            lda: usize, x: &mut [$t], incx: isize,
        ) {
            level2::$f(layout, uplo, trans, diag, n, a, lda, x, incx)
        }
    )+};
    (tbmv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, k: usize,
            a: &[$t], lda: usize, x: &mut [$t], incx: isize,
        ) {
            level2::$f(layout, uplo, trans, diag, n, k, a, lda, x, incx)
        }
    )+};
    (tpmv: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, ap: &[$t],
            x: &mut [$t], incx: isize,
        ) {
            level2::$f(layout, uplo, trans, diag, n, ap, x, incx)
        }
    )+};

    // ---------------------------------------------------------------- Level 3
    (gemm: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, trans_a: Transpose, trans_b: Transpose, m: usize, n: usize, k: usize,
            alpha: $t, a: &[$t], lda: usize, b: &[$t], ldb: usize, beta: $t, c: &mut [$t],
            ldc: usize,
        ) {
            level3::$f(layout, trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
        }
    )+};
    (symm: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, side: Side, uplo: Uplo, m: usize, n: usize, alpha: $t, a: &[$t],
            lda: usize, b: &[$t], ldb: usize, beta: $t, c: &mut [$t], ldc: usize,
        ) {
            level3::$f(layout, side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
        }
    )+};
    (syrk: $($name:ident = $f:ident($t:ty, $s:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize, alpha: $s,
            a: &[$t], lda: usize, beta: $s, c: &mut [$t], ldc: usize,
        ) {
            level3::$f(layout, uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
        }
    )+};
    (syr2k: $($name:ident = $f:ident($t:ty, $s:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize, alpha: $t,
            a: &[$t], lda: usize, b: &[$t], ldb: usize, beta: $s, c: &mut [$t], ldc: usize,
        ) {
            level3::$f(layout, uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
        }
    )+};
    (trmm: $($name:ident = $f:ident($t:ty)),+ $(,)?) => {$(
        #[doc = concat!("`", stringify!($f), "` on `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(
            layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize,
            n: usize, alpha: $t, a: &[$t], lda: usize, b: &mut [$t], ldb: usize,
        ) {
            level3::$f(layout, side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
        }
    )+};
}

// Level 1
named!(dot:
    sdot = dot(f32), ddot = dot(f64),
    cdotu = dotu(C32), zdotu = dotu(C64),
    cdotc = dotc(C32), zdotc = dotc(C64),
);
named!(reduce:
    snrm2 = nrm2(f32), dnrm2 = nrm2(f64), scnrm2 = nrm2(C32), dznrm2 = nrm2(C64),
    sasum = asum(f32), dasum = asum(f64), scasum = asum(C32), dzasum = asum(C64),
);
named!(iamax: isamax = iamax(f32), idamax = iamax(f64), icamax = iamax(C32), izamax = iamax(C64));
named!(scal:
    sscal = scal(f32, f32), dscal = scal(f64, f64),
    cscal = scal(C32, C32), zscal = scal(C64, C64),
    csscal = rscal(C32, f32), zdscal = rscal(C64, f64),
);
named!(copy: scopy = copy(f32), dcopy = copy(f64), ccopy = copy(C32), zcopy = copy(C64));
named!(swap: sswap = swap(f32), dswap = swap(f64), cswap = swap(C32), zswap = swap(C64));
named!(axpy: saxpy = axpy(f32), daxpy = axpy(f64), caxpy = axpy(C32), zaxpy = axpy(C64));
named!(rotation:
    srotg, srotmg, srot, srotm = f32;
    drotg, drotmg, drot, drotm = f64;
);

// Level 2
named!(gemv: sgemv = gemv(f32), dgemv = gemv(f64), cgemv = gemv(C32), zgemv = gemv(C64));
named!(gbmv: sgbmv = gbmv(f32), dgbmv = gbmv(f64), cgbmv = gbmv(C32), zgbmv = gbmv(C64));
named!(ger:
    sger = ger(f32), dger = ger(f64),
    cgeru = geru(C32), zgeru = geru(C64),
    cgerc = gerc(C32), zgerc = gerc(C64),
);
named!(symv: ssymv = symv(f32), dsymv = symv(f64), chemv = hemv(C32), zhemv = hemv(C64));
named!(sbmv: ssbmv = sbmv(f32), dsbmv = sbmv(f64), chbmv = hbmv(C32), zhbmv = hbmv(C64));
named!(spmv: sspmv = spmv(f32), dspmv = spmv(f64), chpmv = hpmv(C32), zhpmv = hpmv(C64));
named!(syr: ssyr = syr(f32, f32), dsyr = syr(f64, f64), cher = her(C32, f32), zher = her(C64, f64));
named!(spr: sspr = spr(f32, f32), dspr = spr(f64, f64), chpr = hpr(C32, f32), zhpr = hpr(C64, f64));
named!(syr2: ssyr2 = syr2(f32), dsyr2 = syr2(f64), cher2 = her2(C32), zher2 = her2(C64));
named!(spr2: sspr2 = spr2(f32), dspr2 = spr2(f64), chpr2 = hpr2(C32), zhpr2 = hpr2(C64));
named!(trmv:
    strmv = trmv(f32), dtrmv = trmv(f64), ctrmv = trmv(C32), ztrmv = trmv(C64),
    strsv = trsv(f32), dtrsv = trsv(f64), ctrsv = trsv(C32), ztrsv = trsv(C64),
);
named!(tbmv:
    stbmv = tbmv(f32), dtbmv = tbmv(f64), ctbmv = tbmv(C32), ztbmv = tbmv(C64),
    stbsv = tbsv(f32), dtbsv = tbsv(f64), ctbsv = tbsv(C32), ztbsv = tbsv(C64),
);
named!(tpmv:
    stpmv = tpmv(f32), dtpmv = tpmv(f64), ctpmv = tpmv(C32), ztpmv = tpmv(C64),
    stpsv = tpsv(f32), dtpsv = tpsv(f64), ctpsv = tpsv(C32), ztpsv = tpsv(C64),
);

// Level 3
named!(gemm: sgemm = gemm(f32), dgemm = gemm(f64), cgemm = gemm(C32), zgemm = gemm(C64));
named!(symm:
    ssymm = symm(f32), dsymm = symm(f64), csymm = symm(C32), zsymm = symm(C64),
    chemm = hemm(C32), zhemm = hemm(C64),
);
named!(syrk:
    ssyrk = syrk(f32, f32), dsyrk = syrk(f64, f64),
    csyrk = syrk(C32, C32), zsyrk = syrk(C64, C64),
    cherk = herk(C32, f32), zherk = herk(C64, f64),
);
named!(syr2k:
    ssyr2k = syr2k(f32, f32), dsyr2k = syr2k(f64, f64),
    csyr2k = syr2k(C32, C32), zsyr2k = syr2k(C64, C64),
    cher2k = her2k(C32, f32), zher2k = her2k(C64, f64),
);
named!(trmm:
    strmm = trmm(f32), dtrmm = trmm(f64), ctrmm = trmm(C32), ztrmm = trmm(C64),
    strsm = trsm(f32), dtrsm = trsm(f64), ctrsm = trsm(C32), ztrsm = trsm(C64),
);

// ---------------------------------------------------------------- Diagnostics

macro_rules! routine_names {
    (
        regular: [$($base:literal),+ $(,)?];
        $($name:literal => [$s:literal, $d:literal, $c:literal, $z:literal]),+ $(,)?
    ) => {
        /// Precision-prefixed BLAS name of the generic routine `base` on `T`,
        /// e.g. `nrm2` on [`C64`] is `dznrm2`. Unknown names come back as is.
        pub fn routine_name<T: Scalar>(base: &'static str) -> &'static str {
            let names: [&'static str; 4] = match base {
                $($base => [concat!("s", $base), concat!("d", $base), concat!("c", $base), concat!("z", $base)],)+
                $($name => [$s, $d, $c, $z],)+
                _ => return base,
            };
            match T::PREFIX {
                's' => names[0],
                'd' => names[1],
                'c' => names[2],
                _ => names[3],
            }
        }
    };
}

routine_names! {
    regular: [
        "scal", "copy", "swap", "axpy", "rot", "rotm",
        "gemv", "gbmv", "symv", "sbmv", "spmv", "syr", "spr", "syr2", "spr2",
        "trmv", "tbmv", "tpmv", "trsv", "tbsv", "tpsv",
        "gemm", "symm", "syrk", "syr2k", "trmm", "trsm",
    ];
    "dot" => ["sdot", "ddot", "cdotu", "zdotu"],
    "dotc" => ["sdot", "ddot", "cdotc", "zdotc"],
    "nrm2" => ["snrm2", "dnrm2", "scnrm2", "dznrm2"],
    "asum" => ["sasum", "dasum", "scasum", "dzasum"],
    "iamax" => ["isamax", "idamax", "icamax", "izamax"],
    "rscal" => ["sscal", "dscal", "csscal", "zdscal"],
    "ger" => ["sger", "dger", "cgeru", "zgeru"],
    "geru" => ["sger", "dger", "cgeru", "zgeru"],
    "gerc" => ["sger", "dger", "cgerc", "zgerc"],
    "hemv" => ["ssymv", "dsymv", "chemv", "zhemv"],
    "hbmv" => ["ssbmv", "dsbmv", "chbmv", "zhbmv"],
    "hpmv" => ["sspmv", "dspmv", "chpmv", "zhpmv"],
    "her" => ["ssyr", "dsyr", "cher", "zher"],
    "hpr" => ["sspr", "dspr", "chpr", "zhpr"],
    "her2" => ["ssyr2", "dsyr2", "cher2", "zher2"],
    "hpr2" => ["sspr2", "dspr2", "chpr2", "zhpr2"],
    "hemm" => ["ssymm", "dsymm", "chemm", "zhemm"],
    "herk" => ["ssyrk", "dsyrk", "cherk", "zherk"],
    "her2k" => ["ssyr2k", "dsyr2k", "cher2k", "zher2k"],
}

/// Terminates the call if `check` failed, naming the routine for `T`.
#[inline(always)]
#[track_caller]
pub(crate) fn ensure<T: Scalar>(check: Result<()>) {
    if let Err(err) = check {
        let name = routine_name::<T>(err.routine());
        fail(err.with_routine(name));
    }
}
