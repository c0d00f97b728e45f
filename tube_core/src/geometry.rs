//! # Geometry Validation
//!
//! Feasibility rules for hollow sections. Each outer dimension loses one wall
//! thickness on both sides to form the bore, so a tube only exists when every
//! outer dimension is strictly greater than twice the wall. Equality leaves a
//! bore of zero width and is rejected.
//!
//! | Shape     | Rule                                         |
//! |-----------|----------------------------------------------|
//! | Round     | `t > 0` and `OD > 2t`                        |
//! | Square    | `t > 0` and `S > 2t`                         |
//! | Rectangle | `t > 0` and `W > 2t` and `H > 2t`            |
//!
//! Any NaN or infinite dimension makes the profile infeasible.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::NormalizedProfile;

/// Why a normalized profile cannot be a tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Infeasibility {
    /// A dimension is NaN or infinite
    MissingValue,
    /// Wall thickness is zero
    NonPositiveThickness,
    /// An outer dimension is not more than twice the wall
    WallTooThick,
    /// Dimensions too large or too disparate for the area to be computed
    OutOfRange,
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Infeasibility::MissingValue => "a dimension is missing or not a number",
            Infeasibility::NonPositiveThickness => "wall thickness must be greater than zero",
            Infeasibility::WallTooThick => "outer dimension must exceed twice the wall thickness",
            Infeasibility::OutOfRange => "dimensions are out of the computable range",
        };
        write!(f, "{}", msg)
    }
}

/// Check a normalized profile, reporting the first rule it breaks.
pub fn check(profile: &NormalizedProfile) -> Result<(), Infeasibility> {
    if profile.has_nan() {
        return Err(Infeasibility::MissingValue);
    }
    let t = profile.thickness_mm();
    if !t.is_finite() || profile.outer_dimensions_mm().iter().any(|d| !d.is_finite()) {
        return Err(Infeasibility::MissingValue);
    }
    if t <= 0.0 {
        return Err(Infeasibility::NonPositiveThickness);
    }

    let feasible = match *profile {
        NormalizedProfile::Round {
            outer_diameter_mm, ..
        } => outer_diameter_mm > 2.0 * t,
        NormalizedProfile::Square { side_mm, .. } => side_mm > 2.0 * t,
        NormalizedProfile::Rectangle {
            width_mm, height_mm, ..
        } => width_mm > 2.0 * t && height_mm > 2.0 * t,
    };

    if feasible {
        Ok(())
    } else {
        Err(Infeasibility::WallTooThick)
    }
}

/// True when the profile describes a tube with a nonempty bore.
pub fn is_valid(profile: &NormalizedProfile) -> bool {
    check(profile).is_ok()
}
