//! Error types for widget calls

use thiserror::Error;

/// Errors a widget or layout call can report back to the host.
///
/// All of them are local to the call that produced them; the context stays
/// usable afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Formatted text would not fit in the bounded format buffer
    #[error("formatted text needs {needed} bytes but the buffer holds {capacity}")]
    FormatOverflow { needed: usize, capacity: usize },

    /// `end_row` (or a row-scoped draw) with no open row
    #[error("no row is open")]
    StackUnderflow,

    /// `begin_row` past the configured nesting capacity
    #[error("row stack is full ({capacity} rows)")]
    StackOverflow { capacity: usize },

    /// A counter format spec that cannot be applied
    #[error("invalid format spec {spec:?}: {reason}")]
    InvalidFormat { spec: String, reason: &'static str },

    /// A series whose min and max coincide
    #[error("series has zero range (every value is {value})")]
    DegenerateRange { value: f64 },

    /// Font bytes rejected by the rasterizer
    #[error("failed to load font: {0}")]
    Font(&'static str),
}

pub type Result<T> = std::result::Result<T, UiError>;
