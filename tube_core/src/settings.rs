//! # Calculator Settings
//!
//! Defaults used by front ends when a field's unit is not given explicitly.
//! Settings serialize to a small JSON file (see [`file_io`](crate::file_io)).
//!
//! Steel density is fixed and is deliberately not a setting.
//!
//! ## Example
//!
//! ```rust
//! use tube_core::settings::CalcSettings;
//! use tube_core::units::{LengthUnit, RunUnit};
//!
//! let settings = CalcSettings::default();
//! assert_eq!(settings.dimension_unit, LengthUnit::Millimeter);
//! assert_eq!(settings.run_unit, RunUnit::Meter);
//!
//! let json = serde_json::to_string_pretty(&settings).unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{LengthUnit, RunUnit};

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Largest precision accepted for display
pub const MAX_DECIMAL_PLACES: u8 = 9;

/// Front-end defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Unit for outer dimensions when none is given
    pub dimension_unit: LengthUnit,

    /// Unit for wall thickness when none is given
    pub thickness_unit: LengthUnit,

    /// Unit weight per length is reported in, and the default run-length unit
    pub run_unit: RunUnit,

    /// Decimal places shown in reports
    pub decimal_places: u8,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            version: SCHEMA_VERSION.to_string(),
            dimension_unit: LengthUnit::Millimeter,
            thickness_unit: LengthUnit::Millimeter,
            run_unit: RunUnit::Meter,
            decimal_places: 3,
        }
    }
}

impl CalcSettings {
    /// Precision clamped to what reports can show
    pub fn precision(&self) -> usize {
        usize::from(self.decimal_places.min(MAX_DECIMAL_PLACES))
    }
}
