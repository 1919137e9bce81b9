//! Stroke size slider model.

use std::ops::RangeInclusive;

/// Horizontal size slider.
///
/// Like a toolkit slider, changing the range or the value reports the new
/// value only when it actually changed; callers forward that report to the
/// same handler a user drag would reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSlider {
    range: RangeInclusive<u32>,
    value: u32,
}

impl SizeSlider {
    /// Creates a slider, clamping `value` into `range`.
    pub fn new(range: RangeInclusive<u32>, value: u32) -> Self {
        let value = value.clamp(*range.start(), *range.end());
        Self { range, value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.range.clone()
    }

    /// Replaces the range; the value is clamped into it.
    ///
    /// Returns the new value if clamping changed it.
    pub fn set_range(&mut self, range: RangeInclusive<u32>) -> Option<u32> {
        self.range = range;
        self.set_value(self.value)
    }

    /// Sets the value, clamped into the range.
    ///
    /// Returns the new value if it changed.
    pub fn set_value(&mut self, value: u32) -> Option<u32> {
        let clamped = value.clamp(*self.range.start(), *self.range.end());
        if clamped == self.value {
            return None;
        }
        self.value = clamped;
        Some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_reports_only_changes() {
        let mut slider = SizeSlider::new(1..=31, 3);
        assert_eq!(slider.set_value(3), None);
        assert_eq!(slider.set_value(10), Some(10));
        assert_eq!(slider.set_value(99), Some(31));
        assert_eq!(slider.set_value(200), None);
    }

    #[test]
    fn set_range_clamps_current_value() {
        let mut slider = SizeSlider::new(1..=31, 3);
        assert_eq!(slider.set_range(31..=310), Some(31));
        assert_eq!(slider.value(), 31);
        assert_eq!(slider.set_range(1..=100), None);
        assert_eq!(slider.range(), 1..=100);
    }

    #[test]
    fn new_clamps_initial_value() {
        assert_eq!(SizeSlider::new(31..=310, 3).value(), 31);
    }
}
