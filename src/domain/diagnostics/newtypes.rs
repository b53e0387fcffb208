// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Buffer capacity bounds (16 to 4096 player actions).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 16;
    /// Maximum buffer capacity.
    pub const MAX: usize = 4_096;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Capacity of the player action buffer.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (16–4096 actions).
///
/// # Example
///
/// ```
/// use codecast::domain::diagnostics::BufferCapacity;
///
/// let capacity = BufferCapacity::new(512);
/// assert_eq!(capacity.value(), 512);
///
/// // Values outside range are clamped
/// let too_high = BufferCapacity::new(50_000);
/// assert_eq!(too_high.value(), 4_096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        MIN_DIAGNOSTICS_BUFFER_CAPACITY,
    };

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(buffer_capacity_bounds::MIN, MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(buffer_capacity_bounds::MAX, MAX_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            buffer_capacity_bounds::DEFAULT,
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(BufferCapacity::new(100).value(), 100);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(
            BufferCapacity::default().value(),
            buffer_capacity_bounds::DEFAULT
        );
    }
}
