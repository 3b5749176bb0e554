//! # Formulas
//!
//! All physics and geometry formulas, grouped by domain. Every function is
//! pure: the same arguments always give the same result, and nothing is
//! shared except the read-only [`constants`](crate::constants).
//!
//! ## Modules
//!
//! - [`geometry`] - Arc length, circumference, areas, volumes, surface areas
//! - [`pressure`] - Force over area, hydrostatic pressure
//! - [`quantum`] - Photon energy, mass-energy, half-life, decay constant
//! - [`registry`] - Formula metadata and evaluation by name
//!
//! ## Numeric Type
//!
//! Inputs and outputs are `f64`. Integer measurements are converted by the
//! caller (`f64::from(12)`), and results are always floating point.

pub mod geometry;
pub mod pressure;
pub mod quantum;
pub mod registry;

// Re-export commonly used items
pub use geometry::{
    arc_length,
    circumference,
    triangle_area,
    trapezium_area,
    rectangle_area,
    circle_area,
    sphere_volume,
    cone_volume,
    cylinder_volume,
    sphere_surface_area,
    cone_surface_area,
    cylinder_surface_area,
};

pub use pressure::{hydrostatic_pressure, pressure};

pub use quantum::{decay_constant, energy_v4, half_life, photon_energy};

pub use registry::{
    Formula,
    FormulaGroup,
    FormulaMetadata,
    ReferenceExample,
    Variable,
    ALL_FORMULAS,
    generate_formulas_markdown,
};
