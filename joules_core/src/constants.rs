//! # Physical Constants
//!
//! The named constants read by the pressure and quantum formulas. The
//! standard values are available as plain `const`s; the formulas themselves
//! read the process-wide set returned by [`get`], which is fixed on first use.
//!
//! | Constant | Value | Units |
//! |----------|-------|-------|
//! | Gravitational acceleration (g) | 9.81 | m/s² |
//! | Planck constant (h) | 6.63e-34 | J·s |
//! | Speed of light (c) | 3.00e8 | m/s |
//!
//! ## Overriding the standard set
//!
//! A host application may install its own set exactly once, before any
//! formula runs. After the first [`install`] or [`get`] the set is frozen.
//!
//! ```rust
//! use joules_core::constants::{self, PhysicalConstants};
//!
//! let custom = PhysicalConstants::from_json(r#"{ "gravitational_acceleration": 9.80665 }"#).unwrap();
//! constants::install(custom).unwrap();
//!
//! assert_eq!(constants::get().gravitational_acceleration, 9.80665);
//! assert_eq!(constants::get().speed_of_light, constants::SPEED_OF_LIGHT);
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::errors::{JoulesError, JoulesResult};

/// Free-fall acceleration near Earth's surface (m/s²)
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.81;

/// Planck constant (J·s)
pub const PLANCK_CONSTANT: f64 = 6.63e-34;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 3.00e8;

static CONSTANTS: OnceCell<PhysicalConstants> = OnceCell::new();

/// The set of physical constants used by the formulas.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gravitational_acceleration": 9.81,
///   "planck_constant": 6.63e-34,
///   "speed_of_light": 300000000.0
/// }
/// ```
///
/// Fields left out of the JSON take their standard values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// g in m/s²
    pub gravitational_acceleration: f64,
    /// h in J·s
    pub planck_constant: f64,
    /// c in m/s
    pub speed_of_light: f64,
}

impl PhysicalConstants {
    /// The standard constant values
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        gravitational_acceleration: GRAVITATIONAL_ACCELERATION,
        planck_constant: PLANCK_CONSTANT,
        speed_of_light: SPEED_OF_LIGHT,
    };

    /// Parse a constants set from JSON and validate it.
    pub fn from_json(json: &str) -> JoulesResult<Self> {
        let constants: PhysicalConstants = serde_json::from_str(json)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Every constant must be finite and strictly positive.
    pub fn validate(&self) -> JoulesResult<()> {
        let fields = [
            ("gravitational_acceleration", self.gravitational_acceleration),
            ("planck_constant", self.planck_constant),
            ("speed_of_light", self.speed_of_light),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(JoulesError::invalid_input(field, value.to_string(), "Constant must be finite"));
            }
            if value <= 0.0 {
                return Err(JoulesError::invalid_input(field, value.to_string(), "Constant must be positive"));
            }
        }
        Ok(())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Install the process-wide constants set.
///
/// Fails with [`JoulesError::ConstantsAlreadyInitialized`] if a set was
/// installed before or [`get`] has already been called.
pub fn install(constants: PhysicalConstants) -> JoulesResult<()> {
    constants.validate()?;
    if CONSTANTS.set(constants).is_err() {
        log::warn!("Refusing to replace physical constants after initialization");
        return Err(JoulesError::ConstantsAlreadyInitialized);
    }
    log::info!(
        "Installed physical constants: g = {}, h = {:e}, c = {:e}",
        constants.gravitational_acceleration,
        constants.planck_constant,
        constants.speed_of_light
    );
    Ok(())
}

/// The process-wide constants set, initialized to [`PhysicalConstants::STANDARD`]
/// on first read if nothing was installed.
pub fn get() -> &'static PhysicalConstants {
    CONSTANTS.get_or_init(|| PhysicalConstants::STANDARD)
}

/// Whether the set has been fixed (installed or read).
///
/// Diagnostic only: formulas never need it, since [`get`] always returns a
/// set. Useful for a host checking that its [`install`] will still succeed.
pub fn is_initialized() -> bool {
    CONSTANTS.get().is_some()
}
