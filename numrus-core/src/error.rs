//! Precondition failures for BLAS routines.
//!
//! BLAS has no error-return channel: a routine called with bad arguments
//! stops immediately, before touching any buffer. The checks in
//! [`crate::check`] produce a [`BlasError`]; routines hand it to [`fail`].

use thiserror::Error;

use crate::layout::Layout;

/// Result type alias for precondition checks.
pub type Result<T> = std::result::Result<T, BlasError>;

/// Violated precondition of a BLAS routine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlasError {
    /// A dimension or leading dimension below its minimum.
    #[error("{routine}: invalid dimension {name} = {value}, must be at least {min}")]
    InvalidDimension {
        routine: &'static str,
        name: &'static str,
        value: usize,
        min: usize,
    },

    /// A vector increment equal to zero.
    #[error("{routine}: increment {name} must not be zero")]
    InvalidIncrement {
        routine: &'static str,
        name: &'static str,
    },

    /// A buffer shorter than its dimensions require.
    #[error("{routine}: buffer {name} too short, need {needed} elements, got {len}")]
    BufferTooShort {
        routine: &'static str,
        name: &'static str,
        needed: usize,
        len: usize,
    },

    /// An option outside its defined set, or a combination the routine rejects.
    #[error("{routine}: invalid {option} value {value}")]
    InvalidEnum {
        routine: &'static str,
        option: &'static str,
        value: String,
    },

    /// A storage order the backend does not implement.
    #[error("{routine}: storage order {layout:?} is not supported by this backend")]
    UnsupportedLayout {
        routine: &'static str,
        layout: Layout,
    },
}

impl BlasError {
    /// Name of the routine whose precondition failed.
    pub fn routine(&self) -> &'static str {
        match self {
            BlasError::InvalidDimension { routine, .. }
            | BlasError::InvalidIncrement { routine, .. }
            | BlasError::BufferTooShort { routine, .. }
            | BlasError::InvalidEnum { routine, .. }
            | BlasError::UnsupportedLayout { routine, .. } => routine,
        }
    }

    /// The same failure attributed to `name`.
    pub fn with_routine(mut self, name: &'static str) -> Self {
        match &mut self {
            BlasError::InvalidDimension { routine, .. }
            | BlasError::InvalidIncrement { routine, .. }
            | BlasError::BufferTooShort { routine, .. }
            | BlasError::InvalidEnum { routine, .. }
            | BlasError::UnsupportedLayout { routine, .. } => *routine = name,
        }
        self
    }
}

/// Terminates the current call on a violated precondition.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fail(err: BlasError) -> ! {
    tracing::error!(routine = err.routine(), error = %err, "BLAS precondition violated");
    panic!("{err}");
}

/// Runs a check and terminates the call if it failed.
#[inline(always)]
#[track_caller]
pub fn ensure(check: Result<()>) {
    if let Err(err) = check {
        fail(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_routine() {
        let err = BlasError::BufferTooShort {
            routine: "dgemv",
            name: "y",
            needed: 10,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "dgemv: buffer y too short, need 10 elements, got 3"
        );
        assert_eq!(err.routine(), "dgemv");
        let err = err.with_routine("zgemv");
        assert_eq!(err.routine(), "zgemv");
        assert!(err.to_string().starts_with("zgemv: buffer y"));
    }

    #[test]
    #[should_panic(expected = "increment incx must not be zero")]
    fn test_ensure_panics() {
        ensure(Err(BlasError::InvalidIncrement {
            routine: "ddot",
            name: "incx",
        }));
    }

    #[test]
    fn test_ensure_ok_is_silent() {
        ensure(Ok(()));
    }
}
