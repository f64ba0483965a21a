use serde::{Deserialize, Serialize};

use crate::node::INITIAL_BIOMASS;

/// Inclusive bounds a parameter value must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ParamRange {
    /// Clamps a value into the range.
    pub fn clip(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// True when the value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Slider bounds of the game client. Initial biomass is never a slider but
/// still needs bounds when it is perturbed.
const REGISTERED: [(&str, ParamRange); 4] = [
    ("K", ParamRange { min: 1000.0, max: 15000.0 }),
    ("R", ParamRange { min: 0.0, max: 3.0 }),
    ("X", ParamRange { min: 0.0, max: 1.0 }),
    (INITIAL_BIOMASS, ParamRange { min: 0.0, max: 15000.0 }),
];

/// Registered valid range for a parameter name.
pub fn registered_range(name: &str) -> Option<ParamRange> {
    REGISTERED
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, range)| *range)
}

/// Clips a value into the registered range; unregistered names pass through.
pub fn clip_to_registered(name: &str, value: f64) -> f64 {
    match registered_range(name) {
        Some(range) => range.clip(value),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_registered_parameters() {
        assert_eq!(clip_to_registered("K", 500.0), 1000.0);
        assert_eq!(clip_to_registered("K", 20000.0), 15000.0);
        assert_eq!(clip_to_registered("X", 0.5), 0.5);
        assert_eq!(clip_to_registered("X", 1.7), 1.0);
        assert_eq!(clip_to_registered("initialBiomass", -3.0), 0.0);
    }

    #[test]
    fn unregistered_names_pass_through() {
        assert!(registered_range("perUnitBiomass").is_none());
        assert_eq!(clip_to_registered("perUnitBiomass", 1e9), 1e9);
    }
}
