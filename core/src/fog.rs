//! Fog parameter set edited by the demo menu

use std::ops::RangeInclusive;

use glam::Vec3;

use crate::menu::MenuItem;

/// Valid range of each fog color channel
pub const COLOR_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Valid range of the fog start and end distances
pub const DISTANCE_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Distances move ten times faster than colors for the same input
pub const DISTANCE_STEP_SCALE: f32 = 10.0;

/// The six editable fog values.
///
/// `start` and `end` are clamped independently. Nothing keeps `start` below
/// `end`; the renderer handles the inverted case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogParameters {
    /// Whether fog is applied at all
    pub enabled: bool,
    /// Fog color, each channel in [0, 1]
    pub color: Vec3,
    /// Distance where fog begins, in [0, 100]
    pub start: f32,
    /// Distance where fog is fully opaque, in [0, 100]
    pub end: f32,
}

impl Default for FogParameters {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Vec3::ONE,
            start: 60.0,
            end: 100.0,
        }
    }
}

impl FogParameters {
    /// Apply one frame's adjustment to the given menu item.
    ///
    /// A zero or non-finite `move_value` is a no-op for every item, including
    /// `Enabled`.
    pub fn apply(&mut self, item: MenuItem, move_value: f32) {
        if move_value == 0.0 || !move_value.is_finite() {
            return;
        }

        match item {
            MenuItem::Enabled => self.enabled = move_value > 0.0,
            MenuItem::Red => self.color.x = clamp_to(self.color.x + move_value, COLOR_RANGE),
            MenuItem::Green => self.color.y = clamp_to(self.color.y + move_value, COLOR_RANGE),
            MenuItem::Blue => self.color.z = clamp_to(self.color.z + move_value, COLOR_RANGE),
            MenuItem::Start => {
                self.start = clamp_to(
                    self.start + move_value * DISTANCE_STEP_SCALE,
                    DISTANCE_RANGE,
                )
            }
            MenuItem::End => {
                self.end = clamp_to(self.end + move_value * DISTANCE_STEP_SCALE, DISTANCE_RANGE)
            }
        }
    }

    /// Current value of a menu row as overlay text.
    pub fn value_text(&self, item: MenuItem) -> String {
        match item {
            MenuItem::Enabled => if self.enabled { "True" } else { "False" }.to_string(),
            MenuItem::Red => self.color.x.to_string(),
            MenuItem::Green => self.color.y.to_string(),
            MenuItem::Blue => self.color.z.to_string(),
            MenuItem::Start => self.start.to_string(),
            MenuItem::End => self.end.to_string(),
        }
    }
}

fn clamp_to(value: f32, range: RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_defaults() {
        let fog = FogParameters::default();
        assert!(fog.enabled);
        assert_eq!(fog.color, Vec3::ONE);
        assert_eq!(fog.start, 60.0);
        assert_eq!(fog.end, 100.0);
    }

    #[test]
    fn test_red_decrease() {
        let mut fog = FogParameters::default();
        fog.apply(MenuItem::Red, -0.5);
        assert!((fog.color.x - 0.5).abs() < EPSILON);
        assert_eq!(fog.color.y, 1.0);
        assert_eq!(fog.color.z, 1.0);
    }

    #[test]
    fn test_start_saturates_at_max() {
        let mut fog = FogParameters::default();
        fog.apply(MenuItem::Start, 5.0);
        assert_eq!(fog.start, 100.0);
    }

    #[test]
    fn test_end_saturates_at_zero() {
        let mut fog = FogParameters::default();
        fog.apply(MenuItem::End, -50.0);
        assert_eq!(fog.end, 0.0);
    }

    #[test]
    fn test_enabled_follows_sign() {
        let mut fog = FogParameters::default();
        fog.apply(MenuItem::Enabled, -0.2);
        assert!(!fog.enabled);
        fog.apply(MenuItem::Enabled, 0.01);
        assert!(fog.enabled);
    }

    #[test]
    fn test_zero_move_is_noop() {
        let before = FogParameters {
            enabled: false,
            color: Vec3::new(0.2, 0.4, 0.6),
            start: 10.0,
            end: 20.0,
        };
        for item in MenuItem::ALL {
            let mut fog = before;
            fog.apply(item, 0.0);
            assert_eq!(fog, before, "{:?} changed on zero move", item);
        }
    }

    #[test]
    fn test_non_finite_move_is_ignored() {
        let before = FogParameters::default();
        for item in MenuItem::ALL {
            for move_value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
                let mut fog = before;
                fog.apply(item, move_value);
                assert_eq!(fog, before, "{:?} changed on {}", item, move_value);
            }
        }
    }

    #[test]
    fn test_start_may_exceed_end() {
        let mut fog = FogParameters::default();
        fog.apply(MenuItem::End, -8.0);
        fog.apply(MenuItem::Start, 3.0);
        assert!((fog.end - 20.0).abs() < EPSILON);
        assert!((fog.start - 90.0).abs() < EPSILON);
        assert!(fog.start > fog.end);
    }

    #[test]
    fn test_random_sequences_stay_in_range() {
        let mut rng = Pcg32::seed_from_u64(0x5eed);
        let mut fog = FogParameters::default();

        for _ in 0..10_000 {
            let item = MenuItem::ALL[rng.random_range(0..MenuItem::COUNT)];
            let move_value: f32 = rng.random_range(-3.0..3.0);
            fog.apply(item, move_value);

            for channel in fog.color.to_array() {
                assert!(COLOR_RANGE.contains(&channel), "channel {} out of range", channel);
            }
            assert!(DISTANCE_RANGE.contains(&fog.start), "start {} out of range", fog.start);
            assert!(DISTANCE_RANGE.contains(&fog.end), "end {} out of range", fog.end);
        }
    }

    #[test]
    fn test_value_text() {
        let mut fog = FogParameters::default();
        assert_eq!(fog.value_text(MenuItem::Enabled), "True");
        assert_eq!(fog.value_text(MenuItem::Red), "1");
        assert_eq!(fog.value_text(MenuItem::Start), "60");
        assert_eq!(fog.value_text(MenuItem::End), "100");

        fog.apply(MenuItem::Green, -0.5);
        fog.apply(MenuItem::Enabled, -1.0);
        assert_eq!(fog.value_text(MenuItem::Green), "0.5");
        assert_eq!(fog.value_text(MenuItem::Enabled), "False");
    }
}
