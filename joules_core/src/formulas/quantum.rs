//! # Quantum Formulas
//!
//! Photon energy, mass–energy equivalence and radioactive decay.
//!
//! Half-life and decay constant are inverses of each other through ln 2.
//! Both reject an exactly-zero argument with
//! [`JoulesError::DivisionByZero`] before dividing, rather than returning
//! infinity.

use std::f64::consts::LN_2;

use crate::constants;
use crate::errors::{JoulesError, JoulesResult};

/// Calculate the energy of a photon given its frequency
///
/// # Formula
/// E = h × f
///
/// # Arguments
/// * `frequency` - Frequency in hertz (should be > 0)
///
/// # Returns
/// Energy in joules
///
/// # Example
/// ```rust
/// use joules_core::formulas::quantum::photon_energy;
///
/// let e = photon_energy(509337860780984.75);
/// assert!((e - 3.376910016977929e-19).abs() < 1e-30);
/// ```
#[inline]
pub fn photon_energy(frequency: f64) -> f64 {
    constants::get().planck_constant * frequency
}

/// Calculate the rest energy of a mass
///
/// # Formula
/// E = m × c²
///
/// Named `_v4` as the fourth of the library's energy relations.
///
/// # Example
/// ```rust
/// use joules_core::formulas::quantum::energy_v4;
///
/// assert!((energy_v4(60.5) - 5.445e18).abs() < 1e3);
/// ```
#[inline]
pub fn energy_v4(mass: f64) -> f64 {
    mass * constants::get().speed_of_light.powi(2)
}

/// Calculate the half-life of a decaying quantity given its decay constant
///
/// # Formula
/// t½ = ln 2 / λ
///
/// # Arguments
/// * `decay_constant` - λ in per second
///
/// # Returns
/// * `Ok(f64)` - Half-life in seconds
/// * `Err(JoulesError::DivisionByZero)` - If `decay_constant` is exactly zero
///
/// # Example
/// ```rust
/// use joules_core::formulas::quantum::half_life;
///
/// let t = half_life(7.7e4).unwrap();
/// assert!((t - 9.001911435843445e-06).abs() < 1e-18);
/// assert!(half_life(0.0).is_err());
/// ```
pub fn half_life(decay_constant: f64) -> JoulesResult<f64> {
    ln2_over("half_life", decay_constant)
}

/// Calculate the decay constant of a decaying quantity given its half-life
///
/// # Formula
/// λ = ln 2 / t½
///
/// # Arguments
/// * `half_life` - t½ in seconds
///
/// # Returns
/// * `Ok(f64)` - Decay constant in per second
/// * `Err(JoulesError::DivisionByZero)` - If `half_life` is exactly zero
pub fn decay_constant(half_life: f64) -> JoulesResult<f64> {
    ln2_over("decay_constant", half_life)
}

fn ln2_over(operation: &str, divisor: f64) -> JoulesResult<f64> {
    // Matches -0.0 too
    if divisor == 0.0 {
        log::warn!("{} rejected a zero argument", operation);
        return Err(JoulesError::division_by_zero(operation, divisor));
    }
    Ok(LN_2 / divisor)
}
