//! CBLAS-style layout, transpose and matrix-shape enumerations.
//!
//! Both row-major and column-major layouts are supported throughout the
//! numrus BLAS. Storage order is interpreted in exactly one place,
//! [`Layout::index`]; banded and packed addressing are expressed on top of it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BlasError;

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    #[default]
    RowMajor = 101,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    ColMajor = 102,
}

/// Transpose operation for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
    /// Conjugate transpose. Same as `Trans` for real types.
    ConjTrans = 113,
}

impl Layout {
    /// Leading dimension stride for an M x N matrix.
    #[inline(always)]
    pub fn leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols,
            Layout::ColMajor => rows,
        }
    }

    /// Linear index into a flat array for element (i, j) of a matrix with
    /// leading dimension `ld`.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => j * ld + i,
        }
    }

    /// Offset of the first element of contiguous line `k`: row `k` for
    /// row-major storage, column `k` for column-major.
    #[inline(always)]
    pub fn line_offset(self, k: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => self.index(k, 0, ld),
            Layout::ColMajor => self.index(0, k, ld),
        }
    }

    /// Offset of dense element (i, j) inside band storage with `kl`
    /// sub-diagonals and `ku` super-diagonals.
    ///
    /// Column-major keeps one diagonal per band row (`ku + i - j`, column
    /// `j`); row-major keeps one matrix row per band row (row `i`, column
    /// `kl + j - i`). The caller guarantees `j <= i + ku` and `i <= j + kl`.
    #[inline(always)]
    pub fn band_index(self, i: usize, j: usize, kl: usize, ku: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => self.index(i, kl + j - i, ld),
            Layout::ColMajor => self.index(ku + i - j, j, ld),
        }
    }

    /// Offset of element (i, j) in packed storage of the `uplo` triangle of
    /// an n x n matrix. The caller guarantees (i, j) lies in that triangle.
    #[inline(always)]
    pub fn packed_index(self, uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
        match (self, uplo) {
            (Layout::ColMajor, Uplo::Upper) => i + j * (j + 1) / 2,
            (Layout::ColMajor, Uplo::Lower) => i + j * (2 * n - j - 1) / 2,
            (Layout::RowMajor, Uplo::Upper) => j + i * (2 * n - i - 1) / 2,
            (Layout::RowMajor, Uplo::Lower) => j + i * (i + 1) / 2,
        }
    }
}

impl Transpose {
    /// True for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        self != Transpose::NoTrans
    }
}

/// BLAS triangle specifier (upper/lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

impl Uplo {
    /// The triangle that holds the stored one after a transpose.
    #[inline(always)]
    pub fn flip(self) -> Uplo {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

/// BLAS side specifier (left/right multiplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Side {
    #[default]
    Left = 141,
    Right = 142,
}

/// BLAS diagonal specifier (unit/non-unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    Unit = 132,
}

macro_rules! impl_cblas_code {
    ($ty:ident { $($code:literal => $variant:ident),+ $(,)? }) => {
        impl TryFrom<i32> for $ty {
            type Error = BlasError;

            fn try_from(code: i32) -> Result<Self, BlasError> {
                match code {
                    $($code => Ok($ty::$variant),)+
                    _ => Err(BlasError::InvalidEnum {
                        routine: concat!(stringify!($ty), "::try_from"),
                        option: stringify!($ty),
                        value: code.to_string(),
                    }),
                }
            }
        }

        impl From<$ty> for i32 {
            fn from(v: $ty) -> i32 {
                v as u32 as i32
            }
        }
    };
}

impl_cblas_code!(Layout { 101 => RowMajor, 102 => ColMajor });
impl_cblas_code!(Transpose { 111 => NoTrans, 112 => Trans, 113 => ConjTrans });
impl_cblas_code!(Uplo { 121 => Upper, 122 => Lower });
impl_cblas_code!(Diag { 131 => NonUnit, 132 => Unit });
impl_cblas_code!(Side { 141 => Left, 142 => Right });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_row_and_col_major() {
        assert_eq!(Layout::RowMajor.index(1, 2, 5), 7);
        assert_eq!(Layout::ColMajor.index(1, 2, 5), 11);
    }

    #[test]
    fn test_cblas_codes() {
        assert_eq!(Layout::try_from(102), Ok(Layout::ColMajor));
        assert_eq!(Transpose::try_from(113), Ok(Transpose::ConjTrans));
        assert_eq!(i32::from(Side::Right), 142);
        assert!(matches!(
            Uplo::try_from(7),
            Err(BlasError::InvalidEnum { option: "Uplo", .. })
        ));
    }

    #[test]
    fn test_packed_index_covers_triangle_once() {
        let n = 5;
        for layout in [Layout::RowMajor, Layout::ColMajor] {
            for uplo in [Uplo::Upper, Uplo::Lower] {
                let mut seen = vec![false; n * (n + 1) / 2];
                for i in 0..n {
                    for j in 0..n {
                        let inside = match uplo {
                            Uplo::Upper => i <= j,
                            Uplo::Lower => i >= j,
                        };
                        if inside {
                            let off = layout.packed_index(uplo, n, i, j);
                            assert!(!seen[off], "{layout:?} {uplo:?} ({i},{j}) reused {off}");
                            seen[off] = true;
                        }
                    }
                }
                assert!(seen.iter().all(|&s| s));
            }
        }
    }

    #[test]
    fn test_band_index_col_major_diagonal_rows() {
        // kl = 1, ku = 1, n = 4, lda = 3: the main diagonal lives in band row 1.
        let ld = 3;
        for j in 0..4 {
            assert_eq!(Layout::ColMajor.band_index(j, j, 1, 1, ld), j * ld + 1);
        }
        assert_eq!(Layout::ColMajor.band_index(0, 1, 1, 1, ld), ld);
        assert_eq!(Layout::RowMajor.band_index(2, 1, 1, 1, ld), 2 * ld);
    }
}
