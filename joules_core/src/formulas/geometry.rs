//! # Geometry Formulas
//!
//! Lengths, areas, volumes and surface areas of plane and solid figures.
//!
//! ## Notation
//!
//! - `r` = Radius
//! - `θ` = Central angle (radians)
//! - `b` = Base
//! - `h` = Height
//! - `l` = Slant height
//!
//! ## Domain
//!
//! Every input is documented as `>= 0` and in a consistent unit of length
//! (angles in radians). Nothing is checked: a negative radius simply flows
//! through the arithmetic. Integer measurements are passed as `f64`.

use std::f64::consts::PI;

// =============================================================================
// ARC LENGTH AND CIRCUMFERENCE
// =============================================================================

/// Calculate the arc length of a circle given radius and central angle
///
/// ```text
///        ╭──s──╮
///         \ θ /
///        r \ / r
///           •
/// ```
///
/// # Formula
/// s = r × θ
///
/// # Arguments
/// * `radius` - Radius, in a unit of length
/// * `central_angle` - Central angle in radians
///
/// # Returns
/// Arc length in the same units as `radius`
///
/// # Example
/// ```rust
/// use std::f64::consts::PI;
/// use joules_core::formulas::geometry::arc_length;
///
/// let s = arc_length(12.0, PI / 4.0);
/// assert!((s - 9.42477796076938).abs() < 1e-9);
/// ```
#[inline]
pub fn arc_length(radius: f64, central_angle: f64) -> f64 {
    radius * central_angle
}

/// Calculate the circumference of a circle given radius
///
/// # Formula
/// C = 2πr
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::circumference;
///
/// assert!((circumference(12.0) - 75.398223686155).abs() < 1e-9);
/// ```
#[inline]
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

// =============================================================================
// AREAS
// =============================================================================

/// Calculate the area of a triangle given base and height
///
/// # Formula
/// A = ½ × b × h
///
/// # Arguments
/// * `base` - Base, in a unit of length
/// * `height` - Perpendicular height, same units as `base`
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::triangle_area;
///
/// assert_eq!(triangle_area(2.0, 3.4), 3.4);
/// ```
#[inline]
pub fn triangle_area(base: f64, height: f64) -> f64 {
    0.5 * base * height
}

/// Calculate the area of a trapezium given top base, bottom base and height
///
/// ```text
///        top_base
///       ┌───────┐
///      /         \   height
///     └───────────┘
///      bottom_base
/// ```
///
/// # Formula
/// A = ½ × (a + b) × h
///
/// # Arguments
/// * `top_base` - Length of one parallel side
/// * `bottom_base` - Length of the other parallel side
/// * `height` - Distance between the parallel sides
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::trapezium_area;
///
/// assert_eq!(trapezium_area(10.0, 15.0, 3.0), 37.5);
/// ```
#[inline]
pub fn trapezium_area(top_base: f64, bottom_base: f64, height: f64) -> f64 {
    0.5 * (top_base + bottom_base) * height
}

/// Calculate the area of a rectangle given length and width
///
/// # Formula
/// A = l × w
#[inline]
pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// Calculate the area of a circle given radius
///
/// The volume and surface area formulas below are all built on this one.
///
/// # Formula
/// A = πr²
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::circle_area;
///
/// assert!((circle_area(12.0) - 452.38934211693).abs() < 1e-9);
/// ```
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius.powi(2)
}

// =============================================================================
// VOLUMES
// =============================================================================

/// Calculate the volume of a sphere given radius
///
/// # Formula
/// V = 4/3 × πr² × r
///
/// # Returns
/// Volume in cubed units of `radius`
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::sphere_volume;
///
/// assert!((sphere_volume(12.0) - 7238.229473870883).abs() < 1e-9);
/// ```
#[inline]
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 * circle_area(radius) * radius) / 3.0
}

/// Calculate the volume of a cone given radius and height
///
/// # Formula
/// V = ⅓ × πr² × h
///
/// # Arguments
/// * `radius` - Radius of the base
/// * `height` - Perpendicular height from base to apex
#[inline]
pub fn cone_volume(radius: f64, height: f64) -> f64 {
    (circle_area(radius) * height) / 3.0
}

/// Calculate the volume of a cylinder given radius and height
///
/// # Formula
/// V = πr² × h
#[inline]
pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    circle_area(radius) * height
}

// =============================================================================
// SURFACE AREAS
// =============================================================================

/// Calculate the surface area of a sphere given radius
///
/// # Formula
/// A = 4πr²
#[inline]
pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * circle_area(radius)
}

/// Calculate the surface area of a cone given radius and slant height
///
/// ```text
///          •
///         /|\
///      l / | \
///       /  |  \
///      └───┴───┘
///          r
/// ```
///
/// Includes the base disc.
///
/// # Formula
/// A = πr² + πrl
///
/// # Arguments
/// * `radius` - Radius of the base
/// * `slant_height` - Apex to base edge along the lateral surface
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::cone_surface_area;
///
/// assert!((cone_surface_area(3.0, 5.83) - 83.22078939359362).abs() < 1e-9);
/// ```
#[inline]
pub fn cone_surface_area(radius: f64, slant_height: f64) -> f64 {
    circle_area(radius) + (PI * radius * slant_height)
}

/// Calculate the surface area of a cylinder given radius and height
///
/// Lateral surface only; the end discs are not included.
///
/// # Formula
/// A = 2πr × h
///
/// # Example
/// ```rust
/// use joules_core::formulas::geometry::cylinder_surface_area;
///
/// assert!((cylinder_surface_area(6.5, 3.0) - 122.522113490002).abs() < 1e-9);
/// ```
#[inline]
pub fn cylinder_surface_area(radius: f64, height: f64) -> f64 {
    circumference(radius) * height
}
