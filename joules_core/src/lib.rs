//! # joules_core - Physics and Geometry Formula Library
//!
//! `joules_core` provides closed-form formulas for geometry (lengths, areas,
//! volumes, surface areas), pressure and quantum physics. Every formula is a
//! pure function over `f64`; a registry adds metadata and evaluation by
//! name, with JSON-serializable inputs and outputs.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; the only shared data is the read-only constants set
//! - **Unchecked by default**: Documented preconditions are the caller's job
//! - **Explicit where it matters**: `half_life` and `decay_constant` reject zero with an error
//! - **JSON-First**: Registry and calculation types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use joules_core::formulas::{sphere_volume, half_life};
//!
//! let v = sphere_volume(12.0);
//! assert!((v - 7238.229473870883).abs() < 1e-9);
//!
//! assert!(half_life(0.0).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Geometry, pressure and quantum formulas plus the registry
//! - [`calculations`] - JSON-friendly evaluation by formula name
//! - [`constants`] - Physical constants (g, h, c)
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod formulas;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, FormulaInput, FormulaOutput};
pub use constants::PhysicalConstants;
pub use errors::{JoulesError, JoulesResult};
pub use formulas::{Formula, FormulaGroup};
