//! # Tube Weight Calculation
//!
//! Turns raw form input into a [`CalculationResult`]:
//!
//! 1. Parse every text field (bad text becomes NaN)
//! 2. Normalize every dimension to millimeters
//! 3. Check the profile is a feasible tube
//! 4. Compute metal area, weight per run unit and, if a run length was
//!    given, total weight
//!
//! Nothing here returns an error or panics. A field that does not parse, an
//! infeasible profile or a missing run length all show up on the result as
//! `valid`, NaN values and an [`CalcIssue`].
//!
//! ## Example
//!
//! ```rust
//! use tube_core::calculations::tube::{calculate, RawDimension, RawProfile, RawRunLength, TubeInput};
//! use tube_core::units::{LengthUnit, RunUnit};
//!
//! let input = TubeInput {
//!     label: "Handrail".to_string(),
//!     profile: RawProfile::Round {
//!         outer_diameter: RawDimension::new("2", LengthUnit::Inch),
//!         thickness: RawDimension::new("0.1", LengthUnit::Inch),
//!     },
//!     length: Some(RawRunLength::new("20", RunUnit::Foot)),
//!     weight_unit: RunUnit::Foot,
//! };
//!
//! let result = calculate(&input);
//! assert!(result.valid);
//! assert_eq!(result.unit_label, "kg/ft");
//! assert!(result.total_weight > result.weight_per_unit);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::equations::section::cross_section_area;
use crate::equations::weight::{total_weight, weight_per_run_unit};
use crate::geometry::{self, Infeasibility};
use crate::numeric::{is_positive_finite, parse_dimension};
use crate::profile::{NormalizedProfile, Profile, ShapeKind};
use crate::units::{Dimension, LengthUnit, RunLength, RunUnit};

// ============================================================================
// Input
// ============================================================================

/// Text from one dimension field plus the unit chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDimension {
    pub text: String,
    pub unit: LengthUnit,
}

impl RawDimension {
    pub fn new(text: impl Into<String>, unit: LengthUnit) -> Self {
        RawDimension {
            text: text.into(),
            unit,
        }
    }

    /// Parse into a dimension; unparseable text gives a NaN value.
    pub fn parse(&self) -> Dimension {
        Dimension::new(parse_dimension(&self.text), self.unit)
    }
}

/// Text from the run-length field plus its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRunLength {
    pub text: String,
    pub unit: RunUnit,
}

impl RawRunLength {
    pub fn new(text: impl Into<String>, unit: RunUnit) -> Self {
        RawRunLength {
            text: text.into(),
            unit,
        }
    }

    pub fn parse(&self) -> RunLength {
        RunLength::new(parse_dimension(&self.text), self.unit)
    }
}

/// Raw dimension fields for the active shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum RawProfile {
    Round {
        outer_diameter: RawDimension,
        thickness: RawDimension,
    },
    Square {
        side: RawDimension,
        thickness: RawDimension,
    },
    Rectangle {
        width: RawDimension,
        height: RawDimension,
        thickness: RawDimension,
    },
}

impl RawProfile {
    pub fn kind(&self) -> ShapeKind {
        match self {
            RawProfile::Round { .. } => ShapeKind::Round,
            RawProfile::Square { .. } => ShapeKind::Square,
            RawProfile::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Parse every field. Fields that fail to parse carry NaN.
    pub fn parse(&self) -> Profile {
        match self {
            RawProfile::Round {
                outer_diameter,
                thickness,
            } => Profile::Round {
                outer_diameter: outer_diameter.parse(),
                thickness: thickness.parse(),
            },
            RawProfile::Square { side, thickness } => Profile::Square {
                side: side.parse(),
                thickness: thickness.parse(),
            },
            RawProfile::Rectangle {
                width,
                height,
                thickness,
            } => Profile::Rectangle {
                width: width.parse(),
                height: height.parse(),
                thickness: thickness.parse(),
            },
        }
    }
}

/// Input for one tube weight calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Frame rail",
///   "shape": "rectangle",
///   "width": { "text": "40", "unit": "mm" },
///   "height": { "text": "20", "unit": "mm" },
///   "thickness": { "text": "2", "unit": "mm" },
///   "length": { "text": "6", "unit": "m" },
///   "weight_unit": "meter"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeInput {
    /// User label (e.g., "Handrail post")
    #[serde(default)]
    pub label: String,

    /// Shape and its dimension fields
    #[serde(flatten)]
    pub profile: RawProfile,

    /// Run length for a total weight; `None` for per-length weight only
    #[serde(default)]
    pub length: Option<RawRunLength>,

    /// Unit that weight per length is reported in
    #[serde(default)]
    pub weight_unit: RunUnit,
}

// ============================================================================
// Output
// ============================================================================

/// Why a result is invalid or lacks a total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcIssue {
    /// A dimension field is not a finite nonnegative number
    ParseFailure { field: String },
    /// Dimensions parsed but do not form a tube
    GeometryInfeasible { reason: Infeasibility },
    /// Weight per length is valid but there is no usable run length
    LengthUnspecified,
}

impl CalcIssue {
    /// True if this issue leaves the result invalid
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CalcIssue::LengthUnspecified)
    }
}

impl fmt::Display for CalcIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcIssue::ParseFailure { field } => write!(f, "'{}' is not a valid number", field),
            CalcIssue::GeometryInfeasible { reason } => write!(f, "{}", reason),
            CalcIssue::LengthUnspecified => write!(f, "no length given, total weight not computed"),
        }
    }
}

/// Result of a tube weight calculation.
///
/// `weight_per_unit`, `total_weight` and `area_mm2` are NaN when not
/// computable; in JSON they appear as `null`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "valid": true,
///   "weight_per_unit": 3.0144,
///   "unit_label": "kg/m",
///   "total_weight": null,
///   "area_mm2": 384.0,
///   "issue": { "kind": "length_unspecified" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Whether the geometry is a feasible tube
    pub valid: bool,

    /// Mass of one run unit (kg/ft or kg/m)
    #[serde(with = "nan_as_null")]
    pub weight_per_unit: f64,

    /// "kg/ft" or "kg/m"
    pub unit_label: String,

    /// Mass of the requested run length (kg)
    #[serde(with = "nan_as_null")]
    pub total_weight: f64,

    /// Metal cross-section area (mm²)
    #[serde(with = "nan_as_null")]
    pub area_mm2: f64,

    /// Reason for any NaN field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<CalcIssue>,
}

impl CalculationResult {
    fn invalid(weight_unit: RunUnit, issue: CalcIssue) -> Self {
        CalculationResult {
            valid: false,
            weight_per_unit: f64::NAN,
            unit_label: weight_unit.weight_label().to_string(),
            total_weight: f64::NAN,
            area_mm2: f64::NAN,
            issue: Some(issue),
        }
    }

    /// True if a finite total weight was computed
    pub fn has_total(&self) -> bool {
        self.valid && self.total_weight.is_finite()
    }
}

/// NaN fields serialize as `null` and read back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculate tube weight from raw form input.
pub fn calculate(input: &TubeInput) -> CalculationResult {
    let profile = input.profile.parse();
    if let Some((field, _)) = profile.fields().into_iter().find(|(_, dim)| dim.value.is_nan()) {
        tracing::debug!(label = %input.label, field, "dimension did not parse");
        return CalculationResult::invalid(
            input.weight_unit,
            CalcIssue::ParseFailure {
                field: field.to_string(),
            },
        );
    }

    let run_length = input.length.as_ref().map(RawRunLength::parse);
    calculate_profile(&profile, run_length, input.weight_unit)
}

/// Calculate tube weight from already-typed dimensions.
///
/// `run_length` may be in either run unit; it is converted to `weight_unit`
/// before the total is formed.
///
/// # Example
///
/// ```rust
/// use tube_core::calculations::tube::calculate_profile;
/// use tube_core::profile::Profile;
/// use tube_core::units::{Dimension, RunUnit};
///
/// let profile = Profile::Square {
///     side: Dimension::mm(50.0),
///     thickness: Dimension::mm(2.0),
/// };
/// let result = calculate_profile(&profile, None, RunUnit::Meter);
/// assert!(result.valid);
/// assert!(result.total_weight.is_nan());
/// ```
pub fn calculate_profile(profile: &Profile, run_length: Option<RunLength>, weight_unit: RunUnit) -> CalculationResult {
    let normalized = profile.normalize();
    tracing::trace!(?normalized, "normalized profile");
    let length = run_length.map(|run| run.in_unit(weight_unit));
    evaluate(&normalized, length, weight_unit)
}

/// Validate, then compute area and weights for a normalized profile.
///
/// `length` is expressed in `weight_unit`.
pub fn evaluate(profile: &NormalizedProfile, length: Option<f64>, weight_unit: RunUnit) -> CalculationResult {
    if let Err(reason) = geometry::check(profile) {
        tracing::debug!(shape = %profile.kind(), %reason, "infeasible profile");
        return CalculationResult::invalid(weight_unit, CalcIssue::GeometryInfeasible { reason });
    }

    let area = cross_section_area(profile).value();
    if !is_positive_finite(area) {
        // overflow or cancellation at extreme magnitudes
        let reason = Infeasibility::OutOfRange;
        tracing::debug!(shape = %profile.kind(), area_mm2 = area, %reason, "area not representable");
        return CalculationResult::invalid(weight_unit, CalcIssue::GeometryInfeasible { reason });
    }
    let weight_per_unit = weight_per_run_unit(area, weight_unit);
    let total = total_weight(weight_per_unit, length);

    let issue = if total.is_nan() {
        Some(CalcIssue::LengthUnspecified)
    } else {
        None
    };

    tracing::debug!(
        shape = %profile.kind(),
        area_mm2 = area,
        weight_per_unit,
        unit = weight_unit.weight_label(),
        total_weight = total,
        "tube weight calculated"
    );

    CalculationResult {
        valid: true,
        weight_per_unit,
        unit_label: weight_unit.weight_label().to_string(),
        total_weight: total,
        area_mm2: area,
        issue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::approx_eq;
    use std::f64::consts::PI;

    fn round_input(od: &str, od_unit: LengthUnit, t: &str, t_unit: LengthUnit) -> TubeInput {
        TubeInput {
            label: "Test Tube".to_string(),
            profile: RawProfile::Round {
                outer_diameter: RawDimension::new(od, od_unit),
                thickness: RawDimension::new(t, t_unit),
            },
            length: None,
            weight_unit: RunUnit::Meter,
        }
    }

    #[test]
    fn test_scenario_round_inches_per_foot() {
        let mut input = round_input("2", LengthUnit::Inch, "0.1", LengthUnit::Inch);
        input.length = Some(RawRunLength::new("20", RunUnit::Foot));
        input.weight_unit = RunUnit::Foot;

        let result = calculate(&input);
        assert!(result.valid);
        assert_eq!(result.unit_label, "kg/ft");
        assert_eq!(result.issue, None);

        let od: f64 = 2.0 * 25.4;
        let t: f64 = 0.1 * 25.4;
        let expected = (PI / 4.0) * (od * od - (od - 2.0 * t).powi(2)) * 304.8 * 7.85e-6;
        assert!(approx_eq(result.weight_per_unit, expected, 1e-12));
        assert!(approx_eq(result.total_weight, expected * 20.0, 1e-12));
        assert!(result.weight_per_unit > 0.0 && result.weight_per_unit.is_finite());
    }

    #[test]
    fn test_scenario_round_wall_too_thick() {
        let input = round_input("2", LengthUnit::Inch, "1.1", LengthUnit::Inch);
        let result = calculate(&input);
        assert!(!result.valid);
        assert!(result.weight_per_unit.is_nan());
        assert!(result.total_weight.is_nan());
        assert_eq!(
            result.issue,
            Some(CalcIssue::GeometryInfeasible {
                reason: Infeasibility::WallTooThick
            })
        );
    }

    #[test]
    fn test_scenario_square_no_length() {
        let input = TubeInput {
            label: String::new(),
            profile: RawProfile::Square {
                side: RawDimension::new("50", LengthUnit::Millimeter),
                thickness: RawDimension::new("2", LengthUnit::Millimeter),
            },
            length: None,
            weight_unit: RunUnit::Meter,
        };
        let result = calculate(&input);
        assert!(result.valid);
        assert_eq!(result.unit_label, "kg/m");
        let expected = (50.0_f64.powi(2) - 46.0_f64.powi(2)) * 7.85e-6 * 1000.0;
        assert!(approx_eq(result.weight_per_unit, expected, 1e-12));
        assert!(result.total_weight.is_nan());
        assert_eq!(result.issue, Some(CalcIssue::LengthUnspecified));
        assert!(!result.has_total());
    }

    #[test]
    fn test_scenario_rectangle_height_at_boundary() {
        let input = TubeInput {
            label: String::new(),
            profile: RawProfile::Rectangle {
                width: RawDimension::new("40", LengthUnit::Millimeter),
                height: RawDimension::new("20", LengthUnit::Millimeter),
                thickness: RawDimension::new("10", LengthUnit::Millimeter),
            },
            length: Some(RawRunLength::new("6", RunUnit::Meter)),
            weight_unit: RunUnit::Meter,
        };
        let result = calculate(&input);
        assert!(!result.valid);
        assert!(result.weight_per_unit.is_nan());
        assert!(result.total_weight.is_nan());
    }

    #[test]
    fn test_unit_invariance() {
        let inches = calculate(&round_input("2", LengthUnit::Inch, "2", LengthUnit::Millimeter));
        let mm = calculate(&round_input("50.8", LengthUnit::Millimeter, "2", LengthUnit::Millimeter));
        assert!(inches.valid && mm.valid);
        assert!(approx_eq(inches.weight_per_unit, mm.weight_per_unit, 1e-9));
        assert!(approx_eq(inches.area_mm2, mm.area_mm2, 1e-9));
    }

    #[test]
    fn test_per_foot_to_per_meter() {
        let mut per_ft = round_input("60.3", LengthUnit::Millimeter, "3.2", LengthUnit::Millimeter);
        per_ft.weight_unit = RunUnit::Foot;
        let per_m = round_input("60.3", LengthUnit::Millimeter, "3.2", LengthUnit::Millimeter);

        let ft = calculate(&per_ft).weight_per_unit;
        let m = calculate(&per_m).weight_per_unit;
        assert!(approx_eq(ft * (1.0 / 0.3048), m, 1e-9));
    }

    #[test]
    fn test_total_linear_in_length() {
        let profile = Profile::Rectangle {
            width: Dimension::mm(100.0),
            height: Dimension::mm(50.0),
            thickness: Dimension::mm(4.0),
        };
        let one = calculate_profile(&profile, Some(RunLength::new(1.0, RunUnit::Meter)), RunUnit::Meter);
        for length in [0.5, 2.0, 6.0, 12.25] {
            let result = calculate_profile(&profile, Some(RunLength::new(length, RunUnit::Meter)), RunUnit::Meter);
            assert!(approx_eq(result.total_weight, one.total_weight * length, 1e-12));
        }
    }

    #[test]
    fn test_run_length_in_other_unit() {
        let profile = Profile::Square {
            side: Dimension::mm(50.0),
            thickness: Dimension::mm(2.0),
        };
        let feet = calculate_profile(&profile, Some(RunLength::new(20.0, RunUnit::Foot)), RunUnit::Meter);
        let meters = calculate_profile(&profile, Some(RunLength::new(6.096, RunUnit::Meter)), RunUnit::Meter);
        assert!(approx_eq(feet.total_weight, meters.total_weight, 1e-9));
    }

    #[test]
    fn test_parse_failure_reports_field() {
        let input = round_input("2", LengthUnit::Inch, "abc", LengthUnit::Millimeter);
        let result = calculate(&input);
        assert!(!result.valid);
        assert!(result.weight_per_unit.is_nan());
        assert_eq!(
            result.issue,
            Some(CalcIssue::ParseFailure {
                field: "thickness".to_string()
            })
        );
    }

    #[test]
    fn test_negative_text_is_not_zero() {
        let input = round_input("-50", LengthUnit::Millimeter, "2", LengthUnit::Millimeter);
        let result = calculate(&input);
        assert!(!result.valid);
        assert!(matches!(result.issue, Some(CalcIssue::ParseFailure { .. })));
    }

    #[test]
    fn test_zero_thickness_invalid_for_all_shapes() {
        let shapes = [
            RawProfile::Round {
                outer_diameter: RawDimension::new("100", LengthUnit::Millimeter),
                thickness: RawDimension::new("0", LengthUnit::Millimeter),
            },
            RawProfile::Square {
                side: RawDimension::new("100", LengthUnit::Millimeter),
                thickness: RawDimension::new("0", LengthUnit::Millimeter),
            },
            RawProfile::Rectangle {
                width: RawDimension::new("100", LengthUnit::Millimeter),
                height: RawDimension::new("80", LengthUnit::Millimeter),
                thickness: RawDimension::new("0", LengthUnit::Millimeter),
            },
        ];
        for profile in shapes {
            let input = TubeInput {
                label: String::new(),
                profile,
                length: Some(RawRunLength::new("3", RunUnit::Meter)),
                weight_unit: RunUnit::Meter,
            };
            let result = calculate(&input);
            assert!(!result.valid);
            assert_eq!(
                result.issue,
                Some(CalcIssue::GeometryInfeasible {
                    reason: Infeasibility::NonPositiveThickness
                })
            );
        }
    }

    #[test]
    fn test_unparseable_length_keeps_weight() {
        let mut input = round_input("50", LengthUnit::Millimeter, "2", LengthUnit::Millimeter);
        input.length = Some(RawRunLength::new("six", RunUnit::Meter));
        let result = calculate(&input);
        assert!(result.valid);
        assert!(result.weight_per_unit.is_finite());
        assert!(result.total_weight.is_nan());
        assert_eq!(result.issue, Some(CalcIssue::LengthUnspecified));
        assert!(!CalcIssue::LengthUnspecified.is_fatal());
    }

    #[test]
    fn test_area_overflow_is_invalid() {
        let input = round_input("1e200", LengthUnit::Millimeter, "1e199", LengthUnit::Millimeter);
        let result = calculate(&input);
        assert!(!result.valid);
        assert!(result.weight_per_unit.is_nan());
        assert!(result.area_mm2.is_nan());
        assert_eq!(
            result.issue,
            Some(CalcIssue::GeometryInfeasible {
                reason: Infeasibility::OutOfRange
            })
        );
    }

    #[test]
    fn test_area_cancellation_is_invalid() {
        let input = round_input("1e20", LengthUnit::Millimeter, "1", LengthUnit::Millimeter);
        let result = calculate(&input);
        assert!(!result.valid);
        assert!(result.weight_per_unit.is_nan());
        assert_eq!(
            result.issue,
            Some(CalcIssue::GeometryInfeasible {
                reason: Infeasibility::OutOfRange
            })
        );
    }

    #[test]
    fn test_parse_failure_names_first_bad_field() {
        let input = TubeInput {
            label: String::new(),
            profile: RawProfile::Rectangle {
                width: RawDimension::new("40", LengthUnit::Millimeter),
                height: RawDimension::new("x", LengthUnit::Millimeter),
                thickness: RawDimension::new("", LengthUnit::Millimeter),
            },
            length: None,
            weight_unit: RunUnit::Meter,
        };
        let result = calculate(&input);
        assert_eq!(
            result.issue,
            Some(CalcIssue::ParseFailure {
                field: "height".to_string()
            })
        );
    }

    #[test]
    fn test_typed_nan_is_invalid() {
        let profile = Profile::Round {
            outer_diameter: Dimension::mm(f64::NAN),
            thickness: Dimension::mm(2.0),
        };
        let result = calculate_profile(&profile, None, RunUnit::Meter);
        assert!(!result.valid);
        assert_eq!(
            result.issue,
            Some(CalcIssue::GeometryInfeasible {
                reason: Infeasibility::MissingValue
            })
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = round_input("2", LengthUnit::Inch, "0.1", LengthUnit::Inch);
        let first = calculate(&input);
        let second = calculate(&input);
        assert_eq!(first.weight_per_unit.to_bits(), second.weight_per_unit.to_bits());
    }

    #[test]
    fn test_input_json() {
        let json = r#"{
            "label": "Frame rail",
            "shape": "rectangle",
            "width": { "text": "40", "unit": "mm" },
            "height": { "text": "20", "unit": "mm" },
            "thickness": { "text": "2", "unit": "mm" },
            "length": { "text": "6", "unit": "m" }
        }"#;
        let input: TubeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.profile.kind(), ShapeKind::Rectangle);
        assert_eq!(input.weight_unit, RunUnit::Meter);

        let result = calculate(&input);
        assert!(result.valid);
        assert!(approx_eq(result.area_mm2, 800.0 - 36.0 * 16.0, 1e-12));
        assert!(result.has_total());
    }

    #[test]
    fn test_result_json_uses_null_for_nan() {
        let input = round_input("2", LengthUnit::Inch, "1.1", LengthUnit::Inch);
        let result = calculate(&input);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"weight_per_unit\":null"));
        assert!(json.contains("\"kind\":\"geometry_infeasible\""));

        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert!(back.weight_per_unit.is_nan());
        assert!(!back.valid);
    }
}
