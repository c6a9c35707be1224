//! Parameter validation shared by every BLAS routine.
//!
//! Each check returns `Err` describing the first violated precondition.
//! Routines run their full check set before reading or writing any buffer
//! and turn a failure into [`crate::error::fail`]. The checks are public so
//! callers that want to recover can validate arguments themselves.

use crate::error::{BlasError, Result};
use crate::layout::{Layout, Transpose};

/// Increment must be non-zero.
#[inline]
pub fn increment(routine: &'static str, name: &'static str, inc: isize) -> Result<()> {
    if inc == 0 {
        return Err(BlasError::InvalidIncrement { routine, name });
    }
    Ok(())
}

/// Number of slots a vector of `n` elements with increment `inc` spans,
/// or `None` if that count does not fit in `usize`.
#[inline(always)]
pub fn vector_span(n: usize, inc: isize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    (n - 1).checked_mul(inc.unsigned_abs())?.checked_add(1)
}

/// Increment is non-zero and `len` covers every touched slot.
///
/// An empty vector is never read, so `n == 0` passes whatever the
/// increment and length.
#[inline]
pub fn vector(
    routine: &'static str,
    name: &'static str,
    n: usize,
    len: usize,
    inc: isize,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    increment(routine, inc_name(name), inc)?;
    let needed = vector_span(n, inc).unwrap_or(usize::MAX);
    if len < needed {
        return Err(BlasError::BufferTooShort {
            routine,
            name,
            needed,
            len,
        });
    }
    Ok(())
}

/// Leading dimension is at least `max(1, min)`.
#[inline]
pub fn leading_dim(routine: &'static str, name: &'static str, ld: usize, min: usize) -> Result<()> {
    let min = min.max(1);
    if ld < min {
        return Err(BlasError::InvalidDimension {
            routine,
            name,
            value: ld,
            min,
        });
    }
    Ok(())
}

/// Dense `rows x cols` matrix with leading dimension `ld` fits in `len`.
#[inline]
pub fn matrix(
    routine: &'static str,
    name: &'static str,
    layout: Layout,
    rows: usize,
    cols: usize,
    len: usize,
    ld: usize,
) -> Result<()> {
    leading_dim(routine, ld_name(name), ld, layout.leading_dim(rows, cols))?;
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let needed = layout.index(rows - 1, cols - 1, ld) + 1;
    if len < needed {
        return Err(BlasError::BufferTooShort {
            routine,
            name,
            needed,
            len,
        });
    }
    Ok(())
}

/// Band storage of an `m x n` matrix with `kl` sub- and `ku` super-diagonals.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn band(
    routine: &'static str,
    name: &'static str,
    layout: Layout,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    len: usize,
    ld: usize,
) -> Result<()> {
    leading_dim(routine, ld_name(name), ld, kl + ku + 1)?;
    if m == 0 || n == 0 {
        return Ok(());
    }
    // Last stored element in memory order.
    let (i, j) = match layout {
        Layout::RowMajor => {
            let i = m.min(n + kl) - 1;
            (i, (n - 1).min(i + ku))
        }
        Layout::ColMajor => {
            let j = n.min(m + ku) - 1;
            ((m - 1).min(j + kl), j)
        }
    };
    let needed = layout.band_index(i, j, kl, ku, ld) + 1;
    if len < needed {
        return Err(BlasError::BufferTooShort {
            routine,
            name,
            needed,
            len,
        });
    }
    Ok(())
}

/// Packed triangle of an `n x n` matrix fits in `len`.
#[inline]
pub fn packed(routine: &'static str, name: &'static str, n: usize, len: usize) -> Result<()> {
    let needed = n
        .checked_add(1)
        .and_then(|m| if n % 2 == 0 { (n / 2).checked_mul(m) } else { n.checked_mul(m / 2) })
        .unwrap_or(usize::MAX);
    if len < needed {
        return Err(BlasError::BufferTooShort {
            routine,
            name,
            needed,
            len,
        });
    }
    Ok(())
}

/// Rejects a transpose option the routine does not define.
#[inline]
pub fn reject_trans(routine: &'static str, trans: Transpose, forbidden: Transpose) -> Result<()> {
    if trans == forbidden {
        return Err(BlasError::InvalidEnum {
            routine,
            option: "Transpose",
            value: format!("{trans:?}"),
        });
    }
    Ok(())
}

/// Storage order is one the backend implements.
#[inline]
pub fn layout_supported(routine: &'static str, layout: Layout, supported: &[Layout]) -> Result<()> {
    if !supported.contains(&layout) {
        return Err(BlasError::UnsupportedLayout { routine, layout });
    }
    Ok(())
}

fn inc_name(name: &'static str) -> &'static str {
    match name {
        "x" => "incx",
        "y" => "incy",
        _ => "inc",
    }
}

fn ld_name(name: &'static str) -> &'static str {
    match name {
        "a" | "ap" => "lda",
        "b" => "ldb",
        "c" => "ldc",
        _ => "ld",
    }
}
