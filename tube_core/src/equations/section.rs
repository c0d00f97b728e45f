//! # Cross-Section Area Formulas
//!
//! Metal area of hollow sections: the outer shape's area minus the bore's
//! area, where every bore dimension is the outer dimension less two walls.
//! All functions take millimeters and return square millimeters.
//!
//! ## Notation
//!
//! - `OD` = Outer diameter
//! - `ID` = Inner (bore) diameter, `OD - 2t`
//! - `S`  = Outer side of a square section
//! - `W`, `H` = Outer width and height of a rectangular section
//! - `t`  = Wall thickness
//!
//! ## References
//!
//! - EN 10219-2: Cold formed welded structural hollow sections - Tolerances, dimensions and sectional properties
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//!
//! Corner radii are ignored; sections are treated as sharp-cornered.

use crate::profile::NormalizedProfile;
use crate::units::SqMm;

// =============================================================================
// ROUND (CIRCULAR HOLLOW SECTION)
// =============================================================================

/// Metal area of a round tube.
///
/// ```text
///        ___
///      /  _  \
///     |  / \  |  OD
///     |  \_/  |
///      \ ___ /
///       t ↔
/// ```
///
/// # Formula
/// A = (π/4) × (OD² − ID²), ID = OD − 2t
///
/// # Example
/// ```rust
/// use tube_core::equations::section::round_tube_area;
///
/// let area = round_tube_area(50.8, 2.54);
/// assert!((area - 385.0).abs() < 1.0);
/// ```
#[inline]
pub fn round_tube_area(od: f64, t: f64) -> f64 {
    let id = od - 2.0 * t;
    std::f64::consts::FRAC_PI_4 * (od * od - id * id)
}

// =============================================================================
// SQUARE HOLLOW SECTION
// =============================================================================

/// Metal area of a square tube.
///
/// ```text
///     ┌─────────┐
///     │ ┌─────┐ │
///   S │ │     │ │
///     │ └─────┘ │
///     └─────────┘
///          S
/// ```
///
/// # Formula
/// A = S² − (S − 2t)²
///
/// # Example
/// ```rust
/// use tube_core::equations::section::square_tube_area;
///
/// assert_eq!(square_tube_area(50.0, 2.0), 384.0);
/// ```
#[inline]
pub fn square_tube_area(s: f64, t: f64) -> f64 {
    let inner = s - 2.0 * t;
    s * s - inner * inner
}

// =============================================================================
// RECTANGULAR HOLLOW SECTION
// =============================================================================

/// Metal area of a rectangular tube.
///
/// ```text
///     ┌─────────────────┐
///     │ ┌─────────────┐ │
///   H │ │             │ │
///     │ └─────────────┘ │
///     └─────────────────┘
///              W
/// ```
///
/// # Formula
/// A = W × H − (W − 2t) × (H − 2t)
///
/// # Example
/// ```rust
/// use tube_core::equations::section::rectangular_tube_area;
///
/// // 100 x 50 x 4: 5000 - 92 * 42 = 1136
/// assert_eq!(rectangular_tube_area(100.0, 50.0, 4.0), 1136.0);
/// ```
#[inline]
pub fn rectangular_tube_area(w: f64, h: f64, t: f64) -> f64 {
    w * h - (w - 2.0 * t) * (h - 2.0 * t)
}

/// Metal area for any normalized profile.
///
/// Callers are expected to have passed the profile through
/// [`geometry::check`](crate::geometry::check) first; for a feasible profile
/// the result is finite and strictly positive.
pub fn cross_section_area(profile: &NormalizedProfile) -> SqMm {
    let area = match *profile {
        NormalizedProfile::Round {
            outer_diameter_mm,
            thickness_mm,
        } => round_tube_area(outer_diameter_mm, thickness_mm),
        NormalizedProfile::Square { side_mm, thickness_mm } => square_tube_area(side_mm, thickness_mm),
        NormalizedProfile::Rectangle {
            width_mm,
            height_mm,
            thickness_mm,
        } => rectangular_tube_area(width_mm, height_mm, thickness_mm),
    };
    SqMm(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_round_matches_thin_wall_identity() {
        // (π/4)(OD² − (OD−2t)²) = π t (OD − t)
        let (od, t) = (60.3, 3.2);
        let identity = PI * t * (od - t);
        assert!((round_tube_area(od, t) - identity).abs() < 1e-9);
    }

    #[test]
    fn test_square_area() {
        // 2500 - 2116
        assert_eq!(square_tube_area(50.0, 2.0), 384.0);
    }

    #[test]
    fn test_square_equals_rectangle_with_equal_sides() {
        assert_eq!(square_tube_area(80.0, 5.0), rectangular_tube_area(80.0, 80.0, 5.0));
    }

    #[test]
    fn test_area_monotonic_in_outer_dimension() {
        let t = 3.0;
        let mut last_round = 0.0;
        let mut last_square = 0.0;
        let mut last_rect_w = 0.0;
        let mut last_rect_h = 0.0;
        for step in 1..50 {
            let outer = 6.5 + step as f64 * 2.5;
            let round = round_tube_area(outer, t);
            let square = square_tube_area(outer, t);
            let rect_w = rectangular_tube_area(outer, 40.0, t);
            let rect_h = rectangular_tube_area(40.0, outer, t);
            assert!(round > last_round);
            assert!(square > last_square);
            assert!(rect_w > last_rect_w);
            assert!(rect_h > last_rect_h);
            last_round = round;
            last_square = square;
            last_rect_w = rect_w;
            last_rect_h = rect_h;
        }
    }

    #[test]
    fn test_cross_section_dispatch() {
        let round = NormalizedProfile::Round {
            outer_diameter_mm: 50.8,
            thickness_mm: 2.0,
        };
        assert_eq!(cross_section_area(&round).0, round_tube_area(50.8, 2.0));

        let rect = NormalizedProfile::Rectangle {
            width_mm: 100.0,
            height_mm: 50.0,
            thickness_mm: 4.0,
        };
        assert_eq!(cross_section_area(&rect).0, 1136.0);
    }

    #[test]
    fn test_area_positive_just_past_boundary() {
        let area = round_tube_area(4.0 + 1e-6, 2.0);
        assert!(area > 0.0 && area.is_finite());
    }
}
