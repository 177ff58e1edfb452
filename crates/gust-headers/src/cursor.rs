//! Parser cursor
//!
//! A bounded scan position over a `&str` buffer. Offsets are byte offsets.
//! The cursor is shared by reference across composed parser calls, so a
//! caller can parse several values out of one buffer without re-slicing.

use crate::{Error, Result};
use std::fmt;

/// Mutable scan position within `[lower_bound, upper_bound)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserCursor {
    lower_bound: usize,
    upper_bound: usize,
    pos: usize,
}

impl ParserCursor {
    /// Create a cursor positioned at `lower_bound`
    ///
    /// # Panics
    /// If `lower_bound > upper_bound`.
    pub fn new(lower_bound: usize, upper_bound: usize) -> Self {
        assert!(
            lower_bound <= upper_bound,
            "lower bound {} exceeds upper bound {}",
            lower_bound,
            upper_bound
        );
        Self {
            lower_bound,
            upper_bound,
            pos: lower_bound,
        }
    }

    /// Create a cursor, reporting inverted bounds as an error
    pub fn try_new(lower_bound: usize, upper_bound: usize) -> Result<Self> {
        if lower_bound > upper_bound {
            return Err(Error::InvalidCursor {
                lower: lower_bound,
                upper: upper_bound,
                len: upper_bound,
            });
        }
        Ok(Self::new(lower_bound, upper_bound))
    }

    /// Cursor spanning the whole buffer
    pub fn for_value(buffer: &str) -> Self {
        Self::new(0, buffer.len())
    }

    /// Cursor over `buffer[lower_bound..upper_bound]`, checked against the buffer
    pub fn within(buffer: &str, lower_bound: usize, upper_bound: usize) -> Result<Self> {
        if lower_bound > upper_bound || upper_bound > buffer.len() {
            return Err(Error::InvalidCursor {
                lower: lower_bound,
                upper: upper_bound,
                len: buffer.len(),
            });
        }
        for bound in [lower_bound, upper_bound] {
            if !buffer.is_char_boundary(bound) {
                return Err(Error::CharBoundary(bound));
            }
        }
        Ok(Self::new(lower_bound, upper_bound))
    }

    #[inline]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    #[inline]
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes left before `upper_bound`
    #[inline]
    pub fn remaining(&self) -> usize {
        self.upper_bound - self.pos
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.upper_bound
    }

    /// Move to `pos`
    ///
    /// # Panics
    /// If `pos` falls outside `[lower_bound, upper_bound]`.
    #[inline]
    pub fn update_pos(&mut self, pos: usize) {
        assert!(
            pos >= self.lower_bound && pos <= self.upper_bound,
            "position {} out of cursor range {}",
            pos,
            self
        );
        self.pos = pos;
    }

    /// Panic unless the cursor range fits `buffer`
    pub(crate) fn assert_fits(&self, buffer: &str) {
        assert!(
            self.upper_bound <= buffer.len(),
            "cursor {} exceeds buffer of {} bytes",
            self,
            buffer.len()
        );
        assert!(
            buffer.is_char_boundary(self.pos) && buffer.is_char_boundary(self.upper_bound),
            "cursor {} splits a multi-byte character",
            self
        );
    }
}

impl fmt::Display for ParserCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}>{}>{}]", self.lower_bound, self.pos, self.upper_bound)
    }
}
