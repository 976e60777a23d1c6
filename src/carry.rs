//! Carry state: the last non-blank value seen in each active column.

use crate::row::is_blank;

/// Per-column memory of the last non-blank value.
///
/// Slot `k` holds the value for column `start + k`, where `start` is the
/// first column of the configured range. The width is fixed either at
/// construction or, for an auto-detected range, by the first call to
/// `resize_once`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarryState {
    slots: Vec<Vec<u8>>,
    sized: bool,
}

impl CarryState {
    /// A carry state with `width` empty slots.
    pub fn new(width: usize) -> Self {
        Self {
            slots: vec![Vec::new(); width],
            sized: true,
        }
    }

    /// A carry state whose width is not known until the first row.
    pub fn deferred() -> Self {
        Self::default()
    }

    /// Fix the width to `width` empty slots. Does nothing once sized.
    pub fn resize_once(&mut self, width: usize) {
        if self.sized {
            return;
        }
        self.slots = vec![Vec::new(); width];
        self.sized = true;
    }

    /// Merge the fields of one row into the carried values.
    ///
    /// Columns `[start, start + width)` that exist in `fields` and are not
    /// blank overwrite their slot. Blank or missing columns keep the
    /// carried value.
    pub fn merge(&mut self, fields: &[&[u8]], start: usize) {
        for (slot, field) in self.slots.iter_mut().zip(fields.iter().skip(start)) {
            if !is_blank(field) {
                slot.clear();
                slot.extend_from_slice(field);
            }
        }
    }

    pub fn slots(&self) -> &[Vec<u8>] {
        &self.slots
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }
}
