//! # Tube Profiles
//!
//! The closed set of hollow cross-sections the calculator understands.
//! [`Profile`] holds dimensions as entered (each with its own unit);
//! [`NormalizedProfile`] holds the same dimensions in millimeters and is what
//! the validator and the area formulas consume.
//!
//! ```text
//!   Round            Square           Rectangle
//!    ___            ┌──────┐         ┌──────────┐
//!  /  _  \          │ ┌──┐ │         │ ┌──────┐ │ H
//! |  ( )  | OD      │ │  │ │ S       │ └──────┘ │
//!  \ ‾‾‾ /          │ └──┘ │         └──────────┘
//!    ‾‾‾            └──────┘              W
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tube_core::profile::{Profile, NormalizedProfile};
//! use tube_core::units::Dimension;
//!
//! let profile = Profile::Round {
//!     outer_diameter: Dimension::inches(2.0),
//!     thickness: Dimension::mm(2.0),
//! };
//! let normalized = profile.normalize();
//! assert_eq!(normalized, NormalizedProfile::Round { outer_diameter_mm: 50.8, thickness_mm: 2.0 });
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;
use crate::units::Dimension;

/// Shape tag without dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Round,
    Square,
    Rectangle,
}

impl ShapeKind {
    /// All shapes for iteration
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Round, ShapeKind::Square, ShapeKind::Rectangle];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Round => "Round Tube",
            ShapeKind::Square => "Square Tube",
            ShapeKind::Rectangle => "Rectangular Tube",
        }
    }

    /// Tag as accepted by `FromStr` and serde
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Round => "round",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ShapeKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" => Ok(ShapeKind::Round),
            "square" => Ok(ShapeKind::Square),
            "rectangle" => Ok(ShapeKind::Rectangle),
            _ => Err(CalcError::unknown_shape(s)),
        }
    }
}

/// A tube cross-section with dimensions in their entered units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Profile {
    /// Circular hollow section
    Round {
        outer_diameter: Dimension,
        thickness: Dimension,
    },
    /// Square hollow section
    Square {
        side: Dimension,
        thickness: Dimension,
    },
    /// Rectangular hollow section
    Rectangle {
        width: Dimension,
        height: Dimension,
        thickness: Dimension,
    },
}

impl Profile {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Profile::Round { .. } => ShapeKind::Round,
            Profile::Square { .. } => ShapeKind::Square,
            Profile::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Field names paired with their dimensions, outer dimensions first.
    pub fn fields(&self) -> Vec<(&'static str, Dimension)> {
        match *self {
            Profile::Round {
                outer_diameter,
                thickness,
            } => vec![("outer_diameter", outer_diameter), ("thickness", thickness)],
            Profile::Square { side, thickness } => vec![("side", side), ("thickness", thickness)],
            Profile::Rectangle {
                width,
                height,
                thickness,
            } => vec![("width", width), ("height", height), ("thickness", thickness)],
        }
    }

    /// Convert every dimension to millimeters.
    pub fn normalize(&self) -> NormalizedProfile {
        match *self {
            Profile::Round {
                outer_diameter,
                thickness,
            } => NormalizedProfile::Round {
                outer_diameter_mm: outer_diameter.to_mm().0,
                thickness_mm: thickness.to_mm().0,
            },
            Profile::Square { side, thickness } => NormalizedProfile::Square {
                side_mm: side.to_mm().0,
                thickness_mm: thickness.to_mm().0,
            },
            Profile::Rectangle {
                width,
                height,
                thickness,
            } => NormalizedProfile::Rectangle {
                width_mm: width.to_mm().0,
                height_mm: height.to_mm().0,
                thickness_mm: thickness.to_mm().0,
            },
        }
    }
}

/// A tube cross-section with every dimension in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum NormalizedProfile {
    Round {
        outer_diameter_mm: f64,
        thickness_mm: f64,
    },
    Square {
        side_mm: f64,
        thickness_mm: f64,
    },
    Rectangle {
        width_mm: f64,
        height_mm: f64,
        thickness_mm: f64,
    },
}

impl NormalizedProfile {
    pub fn kind(&self) -> ShapeKind {
        match self {
            NormalizedProfile::Round { .. } => ShapeKind::Round,
            NormalizedProfile::Square { .. } => ShapeKind::Square,
            NormalizedProfile::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Wall thickness in millimeters
    pub fn thickness_mm(&self) -> f64 {
        match *self {
            NormalizedProfile::Round { thickness_mm, .. }
            | NormalizedProfile::Square { thickness_mm, .. }
            | NormalizedProfile::Rectangle { thickness_mm, .. } => thickness_mm,
        }
    }

    /// Outer dimensions in millimeters (one for round/square, two for rectangle)
    pub fn outer_dimensions_mm(&self) -> Vec<f64> {
        match *self {
            NormalizedProfile::Round { outer_diameter_mm, .. } => vec![outer_diameter_mm],
            NormalizedProfile::Square { side_mm, .. } => vec![side_mm],
            NormalizedProfile::Rectangle {
                width_mm, height_mm, ..
            } => vec![width_mm, height_mm],
        }
    }

    /// True if any dimension is NaN
    pub fn has_nan(&self) -> bool {
        self.thickness_mm().is_nan() || self.outer_dimensions_mm().iter().any(|d| d.is_nan())
    }
}
