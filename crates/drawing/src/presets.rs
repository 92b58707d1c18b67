//! Curated mechanism presets

use crate::types::MechanismParams;

/// A named set of mechanism parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub mechanism: MechanismParams,
}

const fn preset(name: &'static str, outer: f64, inner: f64, offset: f64) -> Preset {
    Preset {
        name,
        mechanism: MechanismParams::new(outer, inner, offset),
    }
}

pub const PRESETS: [Preset; 12] = [
    preset("Classic", 150.0, 80.0, 100.0),
    preset("Star", 200.0, 130.0, 150.0),
    preset("Petal", 180.0, 45.0, 120.0),
    preset("Rose", 150.0, 60.0, 60.0),
    preset("Infinity", 200.0, 70.0, 190.0),
    preset("Snowflake", 120.0, 55.0, 80.0),
    preset("Ring", 175.0, 25.0, 140.0),
    preset("Galaxy", 200.0, 110.0, 200.0),
    preset("Web", 160.0, 48.0, 110.0),
    preset("Diamond", 190.0, 95.0, 90.0),
    preset("Mandala", 145.0, 29.0, 145.0),
    preset("Spiral", 200.0, 150.0, 100.0),
];

/// Find a preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::compute_ghost_curve;

    #[test]
    fn test_find_preset() {
        let classic = find_preset("classic").unwrap();
        assert_eq!(classic.mechanism, MechanismParams::new(150.0, 80.0, 100.0));
        assert!(find_preset("Nope").is_none());
    }

    #[test]
    fn test_presets_are_renderable() {
        for p in &PRESETS {
            let params = p.mechanism;
            assert_eq!(params.sanitized(), params, "{} needs clamping", p.name);
            assert!(compute_ghost_curve(params).iter().all(|pt| pt.is_finite()));
        }
    }
}
