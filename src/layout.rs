//! Row grouping for sequential draws
//!
//! A row is a cursor rectangle; row-scoped draws land at the cursor and push
//! it right. Rows nest up to a fixed depth and only the innermost one is live.

use crate::error::{Result, UiError};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROW_CAPACITY: usize = 100;

/// Cursor advance the legacy fixed policy uses after each element.
pub const LEGACY_ROW_ADVANCE: i32 = 50;

/// How far the row cursor moves after an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAdvance {
    /// Constant step regardless of the element's size
    Fixed(i32),
    /// The element's measured width plus `spacing`
    Measured { spacing: i32 },
}

impl Default for RowAdvance {
    fn default() -> Self {
        RowAdvance::Measured { spacing: 4 }
    }
}

impl RowAdvance {
    pub fn step(&self, element_width: i32) -> i32 {
        match *self {
            RowAdvance::Fixed(step) => step,
            RowAdvance::Measured { spacing } => element_width + spacing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    /// Area given to `begin_row`
    pub bounds: Rect,
    /// Where the next element goes; `x` advances, the rest stays
    pub cursor: Rect,
}

#[derive(Debug)]
pub struct RowStack {
    rows: Vec<RowContext>,
    capacity: usize,
}

impl RowStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: Vec::new(),
            capacity,
        }
    }

    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    pub fn push(&mut self, bounds: Rect) -> Result<()> {
        if self.rows.len() >= self.capacity {
            return Err(UiError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.rows.push(RowContext {
            bounds,
            cursor: bounds,
        });
        Ok(())
    }

    pub fn pop(&mut self) -> Result<RowContext> {
        self.rows.pop().ok_or(UiError::StackUnderflow)
    }

    pub fn current(&self) -> Result<&RowContext> {
        self.rows.last().ok_or(UiError::StackUnderflow)
    }

    /// Move the innermost cursor right by `step`.
    pub fn advance(&mut self, step: i32) -> Result<()> {
        let row = self.rows.last_mut().ok_or(UiError::StackUnderflow)?;
        row.cursor.x += step;
        row.cursor.width -= step;
        Ok(())
    }
}
