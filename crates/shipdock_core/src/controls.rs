//! Live scene controls
//!
//! Three controls can be changed while the scene is idle: the ramp tilt, the
//! pillar height offset, and the reflector color. The animation locks all of
//! them until it finishes.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

bitflags! {
    /// Which live controls currently accept input
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        /// Ramp tilt
        const RAMP = 1 << 0;
        /// Pillar height offset
        const PILLARS = 1 << 1;
        /// Reflector color
        const LIGHT = 1 << 2;
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Allowed values of the numeric controls
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRanges {
    pub ramp_min: f32,
    pub ramp_max: f32,
    pub ramp_step: f32,
    pub pillar_min: f32,
    pub pillar_max: f32,
    pub pillar_step: f32,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            ramp_min: 0.0,
            ramp_max: 45.0,
            ramp_step: 5.0,
            pillar_min: 0.0,
            pillar_max: 80.0,
            pillar_step: 10.0,
        }
    }
}

impl ControlRanges {
    /// Check that both ranges are finite and ordered
    pub fn validate(&self) -> Result<(), String> {
        let ranges = [
            ("ramp", self.ramp_min, self.ramp_max, self.ramp_step),
            ("pillar", self.pillar_min, self.pillar_max, self.pillar_step),
        ];
        for (name, min, max, step) in ranges {
            if !min.is_finite() || !max.is_finite() {
                return Err(format!("{} range must be finite, got {}..{}", name, min, max));
            }
            if min > max {
                return Err(format!("{}_min {} is above {}_max {}", name, min, name, max));
            }
            if !step.is_finite() || step < 0.0 {
                return Err(format!("{}_step must be zero or more, got {}", name, step));
            }
        }
        Ok(())
    }

    // f32::clamp panics on inverted or NaN bounds
    pub fn clamp_ramp(&self, angle: f32) -> f32 {
        angle.max(self.ramp_min).min(self.ramp_max)
    }

    pub fn clamp_pillar(&self, offset: f32) -> f32 {
        offset.max(self.pillar_min).min(self.pillar_max)
    }
}

/// Fixed set of reflector colors cycled one at a time
#[derive(Clone, Debug, PartialEq)]
pub struct LightPalette {
    colors: Vec<[f32; 3]>,
    index: usize,
}

impl Default for LightPalette {
    fn default() -> Self {
        Self::new(vec![
            [1.0, 1.0, 1.0],
            [1.0, 0.85, 0.6],
            [1.0, 0.2, 0.2],
            [0.2, 1.0, 0.2],
            [0.3, 0.5, 1.0],
            [1.0, 1.0, 0.2],
            [0.2, 1.0, 1.0],
            [1.0, 0.2, 1.0],
        ])
    }
}

impl LightPalette {
    /// Create a palette; an empty list falls back to white
    pub fn new(colors: Vec<[f32; 3]>) -> Self {
        let colors = if colors.is_empty() {
            vec![[1.0, 1.0, 1.0]]
        } else {
            colors
        };
        Self { colors, index: 0 }
    }

    /// The selected color
    pub fn current(&self) -> [f32; 3] {
        self.colors[self.index]
    }

    /// Select the next color, wrapping around, and return it
    pub fn next_color(&mut self) -> [f32; 3] {
        self.index = (self.index + 1) % self.colors.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_enabled_by_default() {
        let flags = ControlFlags::default();
        assert!(flags.contains(ControlFlags::RAMP));
        assert!(flags.contains(ControlFlags::PILLARS));
        assert!(flags.contains(ControlFlags::LIGHT));
    }

    #[test]
    fn test_flag_operations() {
        let mut flags = ControlFlags::all();
        flags.remove(ControlFlags::LIGHT);
        assert!(!flags.contains(ControlFlags::LIGHT));
        assert!(flags.contains(ControlFlags::RAMP | ControlFlags::PILLARS));
        assert!(ControlFlags::empty().is_empty());
    }

    #[test]
    fn test_clamp() {
        let ranges = ControlRanges::default();
        assert_eq!(ranges.clamp_ramp(50.0), 45.0);
        assert_eq!(ranges.clamp_ramp(-5.0), 0.0);
        assert_eq!(ranges.clamp_pillar(100.0), 80.0);
        assert_eq!(ranges.clamp_pillar(30.0), 30.0);
    }

    #[test]
    fn test_ranges_validate() {
        assert!(ControlRanges::default().validate().is_ok());

        let inverted = ControlRanges {
            ramp_min: 50.0,
            ..ControlRanges::default()
        };
        assert!(inverted.validate().unwrap_err().contains("ramp_min"));

        let nan = ControlRanges {
            pillar_max: f32::NAN,
            ..ControlRanges::default()
        };
        assert!(nan.validate().unwrap_err().contains("pillar range"));
    }

    #[test]
    fn test_clamp_inverted_range_does_not_panic() {
        let inverted = ControlRanges {
            ramp_min: 50.0,
            ..ControlRanges::default()
        };
        assert_eq!(inverted.clamp_ramp(10.0), 45.0);
    }

    #[test]
    fn test_palette_cycles() {
        let mut palette = LightPalette::new(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(palette.current(), [1.0, 0.0, 0.0]);
        assert_eq!(palette.next_color(), [0.0, 1.0, 0.0]);
        assert_eq!(palette.next_color(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_palette_falls_back_to_white() {
        let palette = LightPalette::new(Vec::new());
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.current(), [1.0, 1.0, 1.0]);
    }
}
