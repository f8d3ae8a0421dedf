//! Status bars (PV, SAN, PE).
//!
//! A bar never drops below zero but may exceed its maximum, and its
//! maximum is at least one.

use serde::{Deserialize, Serialize};

use super::coerce;

/// A current/maximum resource bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBar {
    /// Current value.
    #[serde(rename = "atual", default, deserialize_with = "coerce::lenient_int")]
    pub current: i64,
    /// Maximum value.
    #[serde(default = "default_max", deserialize_with = "coerce::lenient_int")]
    pub max: i64,
}

fn default_max() -> i64 {
    10
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new(default_max())
    }
}

impl StatusBar {
    /// Create a full bar.
    pub fn new(max: i64) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    /// Adjust the current value by a delta, flooring at zero. Returns the
    /// new value.
    pub fn adjust(&mut self, delta: i64) -> i64 {
        self.current = self.current.saturating_add(delta).max(0);
        self.current
    }

    /// Set the current value, flooring at zero.
    pub fn set_current(&mut self, value: i64) {
        self.current = value.max(0);
    }

    /// Set the maximum, flooring at one.
    pub fn set_max(&mut self, value: i64) {
        self.max = value.max(1);
    }

    /// Returns true if the bar is at zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the current value is above the maximum.
    pub fn is_overfull(&self) -> bool {
        self.current > self.max
    }

    /// Filled fraction, clamped to 0.0..=1.0.
    pub fn fraction(&self) -> f64 {
        (self.current as f64 / self.max.max(1) as f64).clamp(0.0, 1.0)
    }
}

impl std::fmt::Display for StatusBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_starts_full() {
        let bar = StatusBar::new(12);
        assert_eq!(bar.current, 12);
        assert_eq!(bar.max, 12);
        assert_eq!(StatusBar::default().to_string(), "10/10");
    }

    #[test]
    fn adjust_floors_at_zero() {
        let mut bar = StatusBar::new(10);
        assert_eq!(bar.adjust(-15), 0);
        assert!(bar.is_empty());
    }

    #[test]
    fn adjust_may_exceed_max() {
        let mut bar = StatusBar::new(10);
        assert_eq!(bar.adjust(5), 15);
        assert!(bar.is_overfull());
        assert_eq!(bar.fraction(), 1.0);
    }

    #[test]
    fn setters_floor() {
        let mut bar = StatusBar::new(10);
        bar.set_current(-3);
        assert_eq!(bar.current, 0);
        bar.set_max(0);
        assert_eq!(bar.max, 1);
    }

    #[test]
    fn fraction() {
        let bar = StatusBar { current: 5, max: 10 };
        assert!((bar.fraction() - 0.5).abs() < f64::EPSILON);
        let broken = StatusBar { current: 5, max: 0 };
        assert_eq!(broken.fraction(), 1.0);
    }

    #[test]
    fn reads_form_values() {
        let bar: StatusBar = serde_json::from_value(json!({ "atual": "", "max": "8" })).unwrap();
        assert_eq!(bar.current, 0);
        assert_eq!(bar.max, 8);
    }
}
