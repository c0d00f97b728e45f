//! # Unit Types
//!
//! Unit tags and normalization for tube dimensions. Every linear dimension is
//! converted to millimeters before geometry is checked, and run lengths are
//! handled through the number of millimeters in one foot or one meter.
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Only a handful of length units are ever accepted
//! - We want JSON serialization to be clean (just numbers)
//! - NaN has to pass through conversions untouched
//!
//! ## Example
//!
//! ```rust
//! use tube_core::units::{to_millimeters, length_factor_mm, Inches, LengthUnit, Millimeters, RunUnit};
//!
//! assert_eq!(to_millimeters(2.0, LengthUnit::Inch), 50.8);
//! assert_eq!(length_factor_mm(RunUnit::Foot), 304.8);
//!
//! let od: Millimeters = Inches(2.0).into();
//! assert_eq!(od.0, 50.8);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::errors::CalcError;

/// Millimeters in one inch (exact by definition)
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters in one foot (exact by definition)
pub const MM_PER_FOOT: f64 = 304.8;

/// Millimeters in one meter
pub const MM_PER_METER: f64 = 1000.0;

// ============================================================================
// Unit Tags
// ============================================================================

/// Unit attached to a linear dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[serde(alias = "in")]
    Inch,
    #[serde(alias = "mm")]
    Millimeter,
    #[serde(alias = "ft")]
    Foot,
    #[serde(alias = "m")]
    Meter,
}

impl LengthUnit {
    /// All length units for iteration
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Inch,
        LengthUnit::Millimeter,
        LengthUnit::Foot,
        LengthUnit::Meter,
    ];

    /// Millimeters in one of this unit
    pub fn mm_factor(self) -> f64 {
        match self {
            LengthUnit::Inch => MM_PER_INCH,
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Foot => MM_PER_FOOT,
            LengthUnit::Meter => MM_PER_METER,
        }
    }

    /// Short symbol ("in", "mm", "ft", "m")
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Inch => "in",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Foot => "ft",
            LengthUnit::Meter => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" => Ok(LengthUnit::Inch),
            "mm" | "millimeter" => Ok(LengthUnit::Millimeter),
            "ft" | "foot" => Ok(LengthUnit::Foot),
            "m" | "meter" => Ok(LengthUnit::Meter),
            _ => Err(CalcError::unknown_unit(s, "in, inch, mm, millimeter, ft, foot, m, meter")),
        }
    }
}

/// Unit of run length. Weight per unit length is reported per one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunUnit {
    #[serde(alias = "ft")]
    Foot,
    #[default]
    #[serde(alias = "m")]
    Meter,
}

impl RunUnit {
    /// Short symbol ("ft" or "m")
    pub fn symbol(self) -> &'static str {
        match self {
            RunUnit::Foot => "ft",
            RunUnit::Meter => "m",
        }
    }

    /// Label for a weight per one of this unit ("kg/ft" or "kg/m")
    pub fn weight_label(self) -> &'static str {
        match self {
            RunUnit::Foot => "kg/ft",
            RunUnit::Meter => "kg/m",
        }
    }
}

impl From<RunUnit> for LengthUnit {
    fn from(unit: RunUnit) -> Self {
        match unit {
            RunUnit::Foot => LengthUnit::Foot,
            RunUnit::Meter => LengthUnit::Meter,
        }
    }
}

impl fmt::Display for RunUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for RunUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ft" | "foot" => Ok(RunUnit::Foot),
            "m" | "meter" => Ok(RunUnit::Meter),
            _ => Err(CalcError::unknown_unit(s, "ft, foot, m, meter")),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert a value in `unit` to millimeters. NaN stays NaN.
#[inline]
pub fn to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value,
        other => value * other.mm_factor(),
    }
}

/// Number of millimeters in one unit of run length.
#[inline]
pub fn length_factor_mm(unit: RunUnit) -> f64 {
    LengthUnit::from(unit).mm_factor()
}

/// A raw number tagged with the unit it was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Dimension {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Dimension { value, unit }
    }

    /// Shorthand for a millimeter dimension
    pub fn mm(value: f64) -> Self {
        Dimension::new(value, LengthUnit::Millimeter)
    }

    /// Shorthand for an inch dimension
    pub fn inches(value: f64) -> Self {
        Dimension::new(value, LengthUnit::Inch)
    }

    /// Normalize to millimeters
    pub fn to_mm(self) -> Millimeters {
        Millimeters(to_millimeters(self.value, self.unit))
    }
}

/// Optional run length for a total-weight request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunLength {
    pub value: f64,
    pub unit: RunUnit,
}

impl RunLength {
    pub fn new(value: f64, unit: RunUnit) -> Self {
        RunLength { value, unit }
    }

    /// Express this run length as a count of `target` units.
    ///
    /// 20 ft in meters is 6.096; NaN stays NaN.
    pub fn in_unit(self, target: RunUnit) -> f64 {
        if self.unit == target {
            self.value
        } else {
            self.value * length_factor_mm(self.unit) / length_factor_mm(target)
        }
    }
}

// ============================================================================
// Newtypes
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(to_millimeters(inches.0, LengthUnit::Inch))
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Inches);
impl_arithmetic!(SqMm);
