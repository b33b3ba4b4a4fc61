//! Error types for layout configuration.
//!
//! Text accumulation and synthesis never fail; only invalid
//! [`LayoutOptions`](crate::LayoutOptions) values are reported, through
//! [`LayoutError`].

use thiserror::Error;

/// Error raised when layout options cannot produce meaningful columns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The synthetic character cell width is zero, negative, or not finite.
    #[error("fixed character width must be a positive finite number, got {0}")]
    InvalidCharWidth(f64),

    /// The column-zero reference coordinate is not finite.
    #[error("page left origin must be finite, got {0}")]
    NonFiniteOrigin(f64),
}
