//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! Tube weight never fails: problems with the input are described on the
//! result rather than returned as errors.
//!
//! ## Available Calculations
//!
//! - [`tube`] - Weight per length and total weight of hollow steel tube

pub mod tube;

// Re-export commonly used types
pub use tube::{
    calculate, calculate_profile, CalcIssue, CalculationResult, RawDimension, RawProfile, RawRunLength, TubeInput,
};
