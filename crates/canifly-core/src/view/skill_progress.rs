//! Progress ring geometry for "characters qualified" indicators.

use std::f64::consts::PI;

/// Ring state for `value` out of `total`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillProgress {
    pub value: usize,
    pub total: usize,
}

impl SkillProgress {
    pub fn new(value: usize, total: usize) -> Self {
        Self { value, total }
    }

    /// Percentage in `0..=100`. Zero when there is nothing to count.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.value as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn circumference(radius: f64) -> f64 {
        2.0 * PI * radius
    }

    /// SVG `stroke-dashoffset` that leaves the filled arc visible.
    pub fn dash_offset(&self, radius: f64) -> f64 {
        Self::circumference(radius) * (1.0 - self.percent() / 100.0)
    }

    /// Rounded percentage for labels
    pub fn label(&self) -> String {
        format!("{}%", self.percent().round() as u32)
    }
}
