//! Error types with diagnostics using miette
//!
//! Layout math itself never fails. Errors only come from the collaborators
//! that measure text and resample images, plus the opt-in checked
//! constructors on the value types.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Numeric Errors
// ============================================================================

/// Error type for invalid numeric values passed to checked constructors
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    #[diagnostic(code(label_anchor::numeric::nan))]
    NaN,

    #[error("value is infinite")]
    #[diagnostic(code(label_anchor::numeric::infinite))]
    Infinite,

    #[error("value is negative")]
    #[diagnostic(code(label_anchor::numeric::negative))]
    Negative,
}

impl NumericError {
    /// Reject NaN and infinite values
    pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(val)
        }
    }

    /// Reject NaN, infinite and negative values
    pub(crate) fn check_non_negative(val: f64) -> Result<f64, NumericError> {
        let val = Self::check_finite(val)?;
        if val < 0.0 { Err(NumericError::Negative) } else { Ok(val) }
    }
}

// ============================================================================
// Collaborator Errors
// ============================================================================

/// Errors reported by a [`TextMeasure`](crate::text::TextMeasure) implementation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("font size must be a positive finite number, got {size}")]
    #[diagnostic(code(label_anchor::measure::invalid_font_size))]
    InvalidFontSize { size: f64 },

    #[error("constraining width {width} leaves no room for text")]
    #[diagnostic(
        code(label_anchor::measure::empty_constraint),
        help("pass f64::INFINITY as the width to disable wrapping")
    )]
    EmptyConstraint { width: f64 },
}

/// Errors reported by a [`Resample`](crate::bitmap::Resample) implementation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ResampleError {
    #[error("cannot resample to {width}x{height}: target has no pixels")]
    #[diagnostic(code(label_anchor::resample::zero_size))]
    ZeroSize { width: f64, height: f64 },

    #[error("cannot resample to {width}x{height}: target exceeds the pixel range")]
    #[diagnostic(code(label_anchor::resample::too_large))]
    TooLarge { width: f64, height: f64 },
}

// ============================================================================
// Draw Errors
// ============================================================================

/// Anything that can go wrong while drawing a [`Label`](crate::layout::Label)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Measure(#[from] MeasureError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resample(#[from] ResampleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert_eq!(NumericError::check_finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(
            NumericError::check_finite(f64::NEG_INFINITY),
            Err(NumericError::Infinite)
        );
        assert_eq!(NumericError::check_finite(-2.0), Ok(-2.0));
    }

    #[test]
    fn check_non_negative_rejects_negative() {
        assert_eq!(
            NumericError::check_non_negative(-0.5),
            Err(NumericError::Negative)
        );
        assert_eq!(NumericError::check_non_negative(0.0), Ok(0.0));
    }

    #[test]
    fn draw_error_wraps_collaborator_errors() {
        let err: DrawError = MeasureError::EmptyConstraint { width: 0.0 }.into();
        assert_eq!(
            err.to_string(),
            "constraining width 0 leaves no room for text"
        );
        let err: DrawError = ResampleError::ZeroSize { width: 0.0, height: 4.0 }.into();
        assert!(matches!(err, DrawError::Resample(_)));
    }
}
