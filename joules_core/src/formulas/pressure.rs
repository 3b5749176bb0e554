//! # Pressure Formulas
//!
//! Mechanical and hydrostatic pressure in SI units (pascals).
//!
//! ## Division by zero
//!
//! [`pressure`] divides unchecked. A zero area gives the IEEE 754 result:
//! `±inf` for a nonzero force, `NaN` when the force is also zero. Callers
//! that need an error instead should check `area` themselves.

use crate::constants;

/// Calculate pressure given force and area
///
/// # Formula
/// P = F / A
///
/// # Arguments
/// * `force` - Force in newtons
/// * `area` - Area in square meters (should be nonzero)
///
/// # Returns
/// Pressure in pascals
///
/// # Example
/// ```rust
/// use joules_core::formulas::pressure::pressure;
///
/// assert_eq!(pressure(10.0, 2.0), 5.0);
/// assert_eq!(pressure(10.0, 0.0), f64::INFINITY);
/// ```
#[inline]
pub fn pressure(force: f64, area: f64) -> f64 {
    force / area
}

/// Calculate hydrostatic pressure given fluid density and depth
///
/// # Formula
/// P = ρ × g × h
///
/// where g is the installed gravitational acceleration (9.81 m/s² by default).
///
/// # Arguments
/// * `density` - Fluid density in kg/m³
/// * `height` - Depth below the free surface in meters
///
/// # Returns
/// Gauge pressure in pascals
///
/// # Example
/// ```rust
/// use joules_core::formulas::pressure::hydrostatic_pressure;
///
/// // 10 m of fresh water
/// let p = hydrostatic_pressure(1000.0, 10.0);
/// assert!((p - 98_100.0).abs() < 1e-6);
/// ```
#[inline]
pub fn hydrostatic_pressure(density: f64, height: f64) -> f64 {
    density * constants::get().gravitational_acceleration * height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure() {
        assert_eq!(pressure(10.0, 2.0), 5.0);
        assert_eq!(pressure(0.0, 4.0), 0.0);
    }

    #[test]
    fn test_pressure_zero_area_is_native_division() {
        assert_eq!(pressure(10.0, 0.0), f64::INFINITY);
        assert_eq!(pressure(-10.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(pressure(10.0, -0.0), f64::NEG_INFINITY);
        assert!(pressure(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_hydrostatic_pressure() {
        let p = hydrostatic_pressure(1000.0, 10.0);
        assert!((p - 98_100.0).abs() < 1e-6, "P = {}", p);
        assert_eq!(hydrostatic_pressure(1000.0, 0.0), 0.0);
    }

    #[test]
    fn test_hydrostatic_pressure_linear_in_depth() {
        let shallow = hydrostatic_pressure(1025.0, 3.0);
        let deep = hydrostatic_pressure(1025.0, 6.0);
        assert!((deep - 2.0 * shallow).abs() < 1e-9);
    }
}
