//! # Tube Equations
//!
//! All formulas used by the calculator, kept in one place so they can be
//! checked against published section tables.
//!
//! ## Modules
//!
//! - [`section`] - Metal cross-section area of round, square and rectangular tube
//! - [`weight`] - Steel density, weight per run unit, total weight and derived shortcut factors
//!
//! ## Conventions
//!
//! - **Lengths**: millimeters
//! - **Areas**: square millimeters
//! - **Mass**: kilograms, per one foot or one meter of run
//! - **Missing values**: NaN in, NaN out

pub mod section;
pub mod weight;

// Re-export commonly used items
pub use section::{cross_section_area, rectangular_tube_area, round_tube_area, square_tube_area};

pub use weight::{
    shortcut_factor,
    shortcut_weight,
    total_weight,
    weight_per_run_unit,
    STEEL_DENSITY_KG_PER_M3,
    STEEL_DENSITY_KG_PER_MM3,
};
