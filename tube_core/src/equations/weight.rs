//! # Weight Formulas
//!
//! Mass of steel from metal area and run length at a fixed density of
//! 7850 kg/m³ (7.85 × 10⁻⁶ kg/mm³).
//!
//! ```text
//! w  = A [mm²] × L₁ [mm] × ρ [kg/mm³]      kg per one foot or one meter
//! W  = w × L                               kg for L feet or meters
//! ```
//!
//! ## Shortcut factors
//!
//! Mill tables often quote a round tube's mass as `(OD − t) × t × 0.02466`
//! kg/m with dimensions in millimeters. That multiplier is `π × ρ × 1000`
//! rounded to four figures: the exact round area reduces to `π t (OD − t)`.
//! [`shortcut_factor`] derives the multiplier for each shape and run unit
//! instead of hard-coding one.

use crate::numeric::is_positive_finite;
use crate::profile::{NormalizedProfile, ShapeKind};
use crate::units::{length_factor_mm, RunUnit};

/// Steel density in kilograms per cubic meter
pub const STEEL_DENSITY_KG_PER_M3: f64 = 7850.0;

/// Steel density in kilograms per cubic millimeter
pub const STEEL_DENSITY_KG_PER_MM3: f64 = 7.85e-6;

/// Mass of one foot or one meter of tube with the given metal area.
///
/// NaN area gives NaN weight.
///
/// # Example
/// ```rust
/// use tube_core::equations::weight::weight_per_run_unit;
/// use tube_core::units::RunUnit;
///
/// // 384 mm² square tube, per meter
/// let w = weight_per_run_unit(384.0, RunUnit::Meter);
/// assert!((w - 3.0144).abs() < 1e-9);
/// ```
#[inline]
pub fn weight_per_run_unit(area_mm2: f64, run_unit: RunUnit) -> f64 {
    area_mm2 * length_factor_mm(run_unit) * STEEL_DENSITY_KG_PER_MM3
}

/// Total mass for `run_length` units of tube.
///
/// Returns NaN when the run length is absent, zero, negative or not finite.
/// That NaN means "no total requested", not an error.
#[inline]
pub fn total_weight(weight_per_run_unit: f64, run_length: Option<f64>) -> f64 {
    match run_length {
        Some(length) if is_positive_finite(length) => weight_per_run_unit * length,
        _ => f64::NAN,
    }
}

/// Derived multiplier for the shape's thin-wall shortcut formula.
///
/// | Shape     | Exact area identity        | Shortcut                  |
/// |-----------|----------------------------|---------------------------|
/// | Round     | `π t (OD − t)`             | `(OD − t) t × k`          |
/// | Square    | `4 t (S − t)`              | `(S − t) t × k`           |
/// | Rectangle | `2 t (W + H − 2t)`         | `(W + H − 2t) t × k`      |
///
/// `k` is the area coefficient times ρ times millimeters per run unit.
pub fn shortcut_factor(kind: ShapeKind, run_unit: RunUnit) -> f64 {
    let coefficient = match kind {
        ShapeKind::Round => std::f64::consts::PI,
        ShapeKind::Square => 4.0,
        ShapeKind::Rectangle => 2.0,
    };
    coefficient * STEEL_DENSITY_KG_PER_MM3 * length_factor_mm(run_unit)
}

/// Weight per run unit through the derived shortcut factor.
///
/// Agrees with the exact area route to floating-point rounding.
pub fn shortcut_weight(profile: &NormalizedProfile, run_unit: RunUnit) -> f64 {
    let k = shortcut_factor(profile.kind(), run_unit);
    match *profile {
        NormalizedProfile::Round {
            outer_diameter_mm,
            thickness_mm,
        } => (outer_diameter_mm - thickness_mm) * thickness_mm * k,
        NormalizedProfile::Square { side_mm, thickness_mm } => (side_mm - thickness_mm) * thickness_mm * k,
        NormalizedProfile::Rectangle {
            width_mm,
            height_mm,
            thickness_mm,
        } => (width_mm + height_mm - 2.0 * thickness_mm) * thickness_mm * k,
    }
}
