//! Bounded composition: declared value bands and sum-preserving
//! redistribution.
//!
//! Every physically named field is clamped into its Band after sampling.
//! Clamping is the recovery path for out-of-range samples, never an error.

use serde::{Deserialize, Serialize};

/// A closed [min, max] interval declared as a system constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bound `value` into the band. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Free-function form of `Band::clamp`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    Band::new(min, max).clamp(value)
}

/// Result of `normalize_to_total`.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub parts: Vec<f64>,
    pub residual: f64,
    /// Amount moved into (positive) or out of (negative) `parts`.
    pub redistributed: f64,
}

impl Composition {
    pub fn total(&self) -> f64 {
        self.parts.iter().sum::<f64>() + self.residual
    }
}

/// Derive the residual `target - sum(parts)`, pull it back into `band`
/// if needed, and let `parts` absorb the difference in proportion to
/// their magnitudes. All-zero parts share it equally.
pub fn normalize_to_total(parts: &[f64], band: Band, target: f64) -> Composition {
    let mut parts = parts.to_vec();
    let raw = target - parts.iter().sum::<f64>();
    let residual = band.clamp(raw);
    let excess = raw - residual;

    if excess != 0.0 && !parts.is_empty() {
        let weight: f64 = parts.iter().map(|p| p.abs()).sum();
        let n = parts.len() as f64;
        for p in parts.iter_mut() {
            let share = if weight > 0.0 { p.abs() / weight } else { 1.0 / n };
            *p += excess * share;
        }
        log::debug!(
            "residual {raw:.4} outside [{}, {}], moved {excess:.4} into {} parts",
            band.min,
            band.max,
            parts.len()
        );
    }

    Composition {
        parts,
        residual,
        redistributed: excess,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHT: Band = Band::new(10.0, 20.0);

    #[test]
    fn clamp_bounds_and_swallows_nan() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn in_band_residual_is_left_alone() {
        let c = normalize_to_total(&[35.0, 20.0, 30.0], LIGHT, 100.0);
        assert_eq!(c.parts, vec![35.0, 20.0, 30.0]);
        assert!((c.residual - 15.0).abs() < 1e-12);
        assert_eq!(c.redistributed, 0.0);
    }

    #[test]
    fn deficit_is_taken_proportionally() {
        // residual would be 4, lifted to 10; parts give back 6 in proportion.
        let c = normalize_to_total(&[40.0, 28.0, 28.0], LIGHT, 100.0);
        assert_eq!(c.residual, 10.0);
        assert!((c.total() - 100.0).abs() < 1e-9);
        assert!((c.parts[0] - (40.0 - 6.0 * 40.0 / 96.0)).abs() < 1e-9);
        assert!((c.parts[1] - c.parts[2]).abs() < 1e-12);
    }

    #[test]
    fn surplus_is_spread_proportionally() {
        let c = normalize_to_total(&[30.0, 15.0, 15.0], LIGHT, 100.0);
        assert_eq!(c.residual, 20.0);
        assert!((c.total() - 100.0).abs() < 1e-9);
        assert!((c.parts[0] - 40.0).abs() < 1e-9);
        assert!((c.parts[1] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_parts_split_equally() {
        let c = normalize_to_total(&[0.0, 0.0, 0.0], LIGHT, 100.0);
        assert_eq!(c.residual, 20.0);
        for p in &c.parts {
            assert!((p - 80.0 / 3.0).abs() < 1e-9);
        }
        assert!(c.parts.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn band_helpers() {
        let b = Band::new(20.0, 20.0);
        assert!(b.is_degenerate());
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.midpoint(), 20.0);
        assert!(b.contains(20.0));
    }
}
