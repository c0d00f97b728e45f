//! # tube_core - Steel Tube Weight Calculation Engine
//!
//! `tube_core` computes the weight per length and total weight of hollow
//! steel tube (round, square or rectangular) from outer dimensions, wall
//! thickness and an optional run length. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **No Panics on Bad Input**: Unparseable text and infeasible geometry
//!   become NaN values and a `valid: false` flag, never an error
//! - **Exact Geometry**: Areas come from outer-minus-bore formulas at a fixed
//!   density of 7850 kg/m³
//!
//! ## Quick Start
//!
//! ```rust
//! use tube_core::calculations::{calculate, RawDimension, RawProfile, TubeInput};
//! use tube_core::units::{LengthUnit, RunUnit};
//!
//! let input = TubeInput {
//!     label: "Post".to_string(),
//!     profile: RawProfile::Square {
//!         side: RawDimension::new("50", LengthUnit::Millimeter),
//!         thickness: RawDimension::new("2", LengthUnit::Millimeter),
//!     },
//!     length: None,
//!     weight_unit: RunUnit::Meter,
//! };
//!
//! let result = calculate(&input);
//! assert!(result.valid);
//! assert!((result.weight_per_unit - 3.0144).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Input/result types and the `calculate` entry points
//! - [`equations`] - Area and weight formulas, steel density
//! - [`geometry`] - Feasibility rules for hollow sections
//! - [`profile`] - Round, square and rectangular profile types
//! - [`units`] - Unit tags and millimeter normalization
//! - [`numeric`] - Text parsing and NaN handling
//! - [`settings`] - Front-end defaults
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings and batch files

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod numeric;
pub mod profile;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_profile, CalcIssue, CalculationResult, TubeInput};
pub use errors::{CalcError, CalcResult};
pub use profile::{Profile, ShapeKind};
pub use settings::CalcSettings;
pub use units::{Dimension, LengthUnit, RunLength, RunUnit};
