//! # Formula Registry
//!
//! Central catalog of every formula in the library. Each formula has
//! metadata (plain-text formula, variables, units, preconditions and a
//! reference example) and can be evaluated by name with a slice of
//! arguments.
//!
//! ## Usage
//!
//! ```rust
//! use joules_core::formulas::registry::Formula;
//!
//! let formula: Formula = "trapezium_area".parse().unwrap();
//! assert_eq!(formula.evaluate(&[10.0, 15.0, 3.0]).unwrap(), 37.5);
//!
//! let meta = formula.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{JoulesError, JoulesResult};
use crate::formulas::{geometry, pressure, quantum};

// ============================================================================
// Formula Groups
// ============================================================================

/// The three domains formulas are organized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaGroup {
    /// Lengths, areas, volumes, surface areas
    Geometry,
    /// Force over area and fluid pressure
    Pressure,
    /// Photon energy, mass-energy, radioactive decay
    Quantum,
}

impl FormulaGroup {
    /// Display name for the group
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaGroup::Geometry => "Geometry",
            FormulaGroup::Pressure => "Pressure",
            FormulaGroup::Quantum => "Quantum",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "r", "h", "λ")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "Hz", "rad")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Documented reference value: arguments and the expected result.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceExample {
    pub arguments: &'static [f64],
    pub expected: f64,
}

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Sphere Volume")
    pub name: &'static str,
    /// Brief description of what this formula calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Group for organizing documentation
    pub group: FormulaGroup,
    /// Input variables, in argument order
    pub variables: Vec<Variable>,
    /// Units of the result
    pub result_units: &'static str,
    /// Documented (unenforced unless stated) input preconditions
    pub preconditions: Vec<&'static str>,
    /// Reference value for auditing
    pub example: ReferenceExample,
    /// Source module where the formula lives
    pub source_module: &'static str,
    /// Function implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// All formulas in the library.
///
/// Serializes as the implementing function's name, e.g. `"sphere_volume"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------
    /// s = rθ
    ArcLength,
    /// C = 2πr
    Circumference,
    /// A = bh/2
    TriangleArea,
    /// A = (a + b)h/2
    TrapeziumArea,
    /// A = lw
    RectangleArea,
    /// A = πr²
    CircleArea,
    /// V = 4πr³/3
    SphereVolume,
    /// V = πr²h/3
    ConeVolume,
    /// V = πr²h
    CylinderVolume,
    /// A = 4πr²
    SphereSurfaceArea,
    /// A = πr² + πrl
    ConeSurfaceArea,
    /// A = 2πrh
    CylinderSurfaceArea,

    // -------------------------------------------------------------------------
    // Pressure
    // -------------------------------------------------------------------------
    /// P = F/A
    Pressure,
    /// P = ρgh
    HydrostaticPressure,

    // -------------------------------------------------------------------------
    // Quantum
    // -------------------------------------------------------------------------
    /// E = hf
    PhotonEnergy,
    /// E = mc²
    EnergyV4,
    /// t½ = ln2/λ
    HalfLife,
    /// λ = ln2/t½
    DecayConstant,
}

impl Formula {
    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        const GEOMETRY: &str = "src/formulas/geometry.rs";
        const PRESSURE: &str = "src/formulas/pressure.rs";
        const QUANTUM: &str = "src/formulas/quantum.rs";

        match self {
            Formula::ArcLength => FormulaMetadata {
                name: "Arc Length",
                description: "Length of a circular arc subtending a central angle",
                formula_plain: "s = r * theta",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("r", "Radius", "length"),
                    Variable::new("theta", "Central angle", "rad"),
                ],
                result_units: "length",
                preconditions: vec!["r >= 0", "theta >= 0"],
                example: ReferenceExample {
                    arguments: &[12.0, std::f64::consts::FRAC_PI_4],
                    expected: 9.42477796076938,
                },
                source_module: GEOMETRY,
                source_function: "arc_length",
            },

            Formula::Circumference => FormulaMetadata {
                name: "Circumference",
                description: "Perimeter of a circle",
                formula_plain: "C = 2 * pi * r",
                group: FormulaGroup::Geometry,
                variables: vec![Variable::new("r", "Radius", "length")],
                result_units: "length",
                preconditions: vec!["r >= 0"],
                example: ReferenceExample { arguments: &[12.0], expected: 75.398223686155 },
                source_module: GEOMETRY,
                source_function: "circumference",
            },

            Formula::TriangleArea => FormulaMetadata {
                name: "Triangle Area",
                description: "Area of a triangle from base and perpendicular height",
                formula_plain: "A = 0.5 * b * h",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("b", "Base", "length"),
                    Variable::new("h", "Height", "length"),
                ],
                result_units: "length^2",
                preconditions: vec!["b >= 0", "h >= 0"],
                example: ReferenceExample { arguments: &[2.0, 3.4], expected: 3.4 },
                source_module: GEOMETRY,
                source_function: "triangle_area",
            },

            Formula::TrapeziumArea => FormulaMetadata {
                name: "Trapezium Area",
                description: "Area of a trapezium from its parallel sides and height",
                formula_plain: "A = 0.5 * (a + b) * h",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("a", "Top base", "length"),
                    Variable::new("b", "Bottom base", "length"),
                    Variable::new("h", "Height", "length"),
                ],
                result_units: "length^2",
                preconditions: vec!["a >= 0", "b >= 0", "h >= 0"],
                example: ReferenceExample { arguments: &[10.0, 15.0, 3.0], expected: 37.5 },
                source_module: GEOMETRY,
                source_function: "trapezium_area",
            },

            Formula::RectangleArea => FormulaMetadata {
                name: "Rectangle Area",
                description: "Area of a rectangle",
                formula_plain: "A = l * w",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("l", "Length", "length"),
                    Variable::new("w", "Width", "length"),
                ],
                result_units: "length^2",
                preconditions: vec!["l >= 0", "w >= 0"],
                example: ReferenceExample { arguments: &[2.0, 3.4], expected: 6.8 },
                source_module: GEOMETRY,
                source_function: "rectangle_area",
            },

            Formula::CircleArea => FormulaMetadata {
                name: "Circle Area",
                description: "Area of a circle",
                formula_plain: "A = pi * r^2",
                group: FormulaGroup::Geometry,
                variables: vec![Variable::new("r", "Radius", "length")],
                result_units: "length^2",
                preconditions: vec!["r >= 0"],
                example: ReferenceExample { arguments: &[12.0], expected: 452.38934211693 },
                source_module: GEOMETRY,
                source_function: "circle_area",
            },

            Formula::SphereVolume => FormulaMetadata {
                name: "Sphere Volume",
                description: "Volume enclosed by a sphere",
                formula_plain: "V = 4 * (pi * r^2) * r / 3",
                group: FormulaGroup::Geometry,
                variables: vec![Variable::new("r", "Radius", "length")],
                result_units: "length^3",
                preconditions: vec!["r >= 0"],
                example: ReferenceExample { arguments: &[12.0], expected: 7238.229473870883 },
                source_module: GEOMETRY,
                source_function: "sphere_volume",
            },

            Formula::ConeVolume => FormulaMetadata {
                name: "Cone Volume",
                description: "Volume of a right circular cone",
                formula_plain: "V = (pi * r^2) * h / 3",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("r", "Base radius", "length"),
                    Variable::new("h", "Height", "length"),
                ],
                result_units: "length^3",
                preconditions: vec!["r >= 0", "h >= 0"],
                example: ReferenceExample { arguments: &[6.5, 3.0], expected: 132.73228961416876 },
                source_module: GEOMETRY,
                source_function: "cone_volume",
            },

            Formula::CylinderVolume => FormulaMetadata {
                name: "Cylinder Volume",
                description: "Volume of a right circular cylinder",
                formula_plain: "V = (pi * r^2) * h",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("r", "Radius", "length"),
                    Variable::new("h", "Height", "length"),
                ],
                result_units: "length^3",
                preconditions: vec!["r >= 0", "h >= 0"],
                example: ReferenceExample { arguments: &[6.5, 3.0], expected: 398.196868842506 },
                source_module: GEOMETRY,
                source_function: "cylinder_volume",
            },

            Formula::SphereSurfaceArea => FormulaMetadata {
                name: "Sphere Surface Area",
                description: "Surface area of a sphere",
                formula_plain: "A = 4 * (pi * r^2)",
                group: FormulaGroup::Geometry,
                variables: vec![Variable::new("r", "Radius", "length")],
                result_units: "length^2",
                preconditions: vec!["r >= 0"],
                example: ReferenceExample { arguments: &[12.0], expected: 1809.5573684677208 },
                source_module: GEOMETRY,
                source_function: "sphere_surface_area",
            },

            Formula::ConeSurfaceArea => FormulaMetadata {
                name: "Cone Surface Area",
                description: "Total surface area of a cone, base included",
                formula_plain: "A = pi * r^2 + pi * r * l",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("r", "Base radius", "length"),
                    Variable::new("l", "Slant height", "length"),
                ],
                result_units: "length^2",
                preconditions: vec!["r >= 0", "l >= 0"],
                example: ReferenceExample { arguments: &[3.0, 5.83], expected: 83.22078939359362 },
                source_module: GEOMETRY,
                source_function: "cone_surface_area",
            },

            Formula::CylinderSurfaceArea => FormulaMetadata {
                name: "Cylinder Surface Area",
                description: "Lateral surface area of a cylinder (end discs excluded)",
                formula_plain: "A = (2 * pi * r) * h",
                group: FormulaGroup::Geometry,
                variables: vec![
                    Variable::new("r", "Radius", "length"),
                    Variable::new("h", "Height", "length"),
                ],
                result_units: "length^2",
                preconditions: vec!["r >= 0", "h >= 0"],
                example: ReferenceExample { arguments: &[6.5, 3.0], expected: 122.522113490002 },
                source_module: GEOMETRY,
                source_function: "cylinder_surface_area",
            },

            Formula::Pressure => FormulaMetadata {
                name: "Pressure",
                description: "Pressure exerted by a force spread over an area",
                formula_plain: "P = F / A",
                group: FormulaGroup::Pressure,
                variables: vec![
                    Variable::new("F", "Force", "N"),
                    Variable::new("A", "Area", "m^2"),
                ],
                result_units: "Pa",
                preconditions: vec!["F >= 0", "A > 0 (A = 0 gives inf or NaN)"],
                example: ReferenceExample { arguments: &[10.0, 2.0], expected: 5.0 },
                source_module: PRESSURE,
                source_function: "pressure",
            },

            Formula::HydrostaticPressure => FormulaMetadata {
                name: "Hydrostatic Pressure",
                description: "Pressure at depth in a fluid at rest",
                formula_plain: "P = rho * g * h",
                group: FormulaGroup::Pressure,
                variables: vec![
                    Variable::new("rho", "Fluid density", "kg/m^3"),
                    Variable::new("h", "Depth", "m"),
                ],
                result_units: "Pa",
                preconditions: vec!["rho >= 0", "h >= 0"],
                example: ReferenceExample { arguments: &[1000.0, 10.0], expected: 98_100.0 },
                source_module: PRESSURE,
                source_function: "hydrostatic_pressure",
            },

            Formula::PhotonEnergy => FormulaMetadata {
                name: "Photon Energy",
                description: "Energy carried by a photon of a given frequency",
                formula_plain: "E = h * f",
                group: FormulaGroup::Quantum,
                variables: vec![Variable::new("f", "Frequency", "Hz")],
                result_units: "J",
                preconditions: vec!["f > 0"],
                example: ReferenceExample {
                    arguments: &[509337860780984.75],
                    expected: 3.376910016977929e-19,
                },
                source_module: QUANTUM,
                source_function: "photon_energy",
            },

            Formula::EnergyV4 => FormulaMetadata {
                name: "Mass-Energy Equivalence",
                description: "Rest energy of a mass",
                formula_plain: "E = m * c^2",
                group: FormulaGroup::Quantum,
                variables: vec![Variable::new("m", "Mass", "kg")],
                result_units: "J",
                preconditions: vec!["m >= 0"],
                example: ReferenceExample { arguments: &[60.5], expected: 5.445e18 },
                source_module: QUANTUM,
                source_function: "energy_v4",
            },

            Formula::HalfLife => FormulaMetadata {
                name: "Half-Life",
                description: "Time for a decaying quantity to halve, from its decay constant",
                formula_plain: "t_half = ln(2) / lambda",
                group: FormulaGroup::Quantum,
                variables: vec![Variable::new("lambda", "Decay constant", "1/s")],
                result_units: "s",
                preconditions: vec!["lambda != 0 (checked: DivisionByZero)"],
                example: ReferenceExample { arguments: &[7.7e4], expected: 9.001911435843445e-06 },
                source_module: QUANTUM,
                source_function: "half_life",
            },

            Formula::DecayConstant => FormulaMetadata {
                name: "Decay Constant",
                description: "Exponential decay rate, from the half-life",
                formula_plain: "lambda = ln(2) / t_half",
                group: FormulaGroup::Quantum,
                variables: vec![Variable::new("t_half", "Half-life", "s")],
                result_units: "1/s",
                preconditions: vec!["t_half != 0 (checked: DivisionByZero)"],
                example: ReferenceExample { arguments: &[9.0], expected: 0.0770163533955495 },
                source_module: QUANTUM,
                source_function: "decay_constant",
            },
        }
    }

    /// The function name, also the serialized form (e.g. "sphere_volume")
    pub fn function_name(&self) -> &'static str {
        match self {
            Formula::ArcLength => "arc_length",
            Formula::Circumference => "circumference",
            Formula::TriangleArea => "triangle_area",
            Formula::TrapeziumArea => "trapezium_area",
            Formula::RectangleArea => "rectangle_area",
            Formula::CircleArea => "circle_area",
            Formula::SphereVolume => "sphere_volume",
            Formula::ConeVolume => "cone_volume",
            Formula::CylinderVolume => "cylinder_volume",
            Formula::SphereSurfaceArea => "sphere_surface_area",
            Formula::ConeSurfaceArea => "cone_surface_area",
            Formula::CylinderSurfaceArea => "cylinder_surface_area",
            Formula::Pressure => "pressure",
            Formula::HydrostaticPressure => "hydrostatic_pressure",
            Formula::PhotonEnergy => "photon_energy",
            Formula::EnergyV4 => "energy_v4",
            Formula::HalfLife => "half_life",
            Formula::DecayConstant => "decay_constant",
        }
    }

    /// Number of arguments the formula takes
    pub fn arity(&self) -> usize {
        match self {
            Formula::TrapeziumArea => 3,
            Formula::ArcLength
            | Formula::TriangleArea
            | Formula::RectangleArea
            | Formula::ConeVolume
            | Formula::CylinderVolume
            | Formula::ConeSurfaceArea
            | Formula::CylinderSurfaceArea
            | Formula::Pressure
            | Formula::HydrostaticPressure => 2,
            Formula::Circumference
            | Formula::CircleArea
            | Formula::SphereVolume
            | Formula::SphereSurfaceArea
            | Formula::PhotonEnergy
            | Formula::EnergyV4
            | Formula::HalfLife
            | Formula::DecayConstant => 1,
        }
    }

    /// Evaluate the formula with positional arguments.
    ///
    /// Fails with `ArityMismatch` on the wrong argument count, or with
    /// whatever error the formula itself returns.
    pub fn evaluate(&self, args: &[f64]) -> JoulesResult<f64> {
        if args.len() != self.arity() {
            return Err(JoulesError::arity_mismatch(self.function_name(), self.arity(), args.len()));
        }

        let value = match *self {
            Formula::ArcLength => geometry::arc_length(args[0], args[1]),
            Formula::Circumference => geometry::circumference(args[0]),
            Formula::TriangleArea => geometry::triangle_area(args[0], args[1]),
            Formula::TrapeziumArea => geometry::trapezium_area(args[0], args[1], args[2]),
            Formula::RectangleArea => geometry::rectangle_area(args[0], args[1]),
            Formula::CircleArea => geometry::circle_area(args[0]),
            Formula::SphereVolume => geometry::sphere_volume(args[0]),
            Formula::ConeVolume => geometry::cone_volume(args[0], args[1]),
            Formula::CylinderVolume => geometry::cylinder_volume(args[0], args[1]),
            Formula::SphereSurfaceArea => geometry::sphere_surface_area(args[0]),
            Formula::ConeSurfaceArea => geometry::cone_surface_area(args[0], args[1]),
            Formula::CylinderSurfaceArea => geometry::cylinder_surface_area(args[0], args[1]),
            Formula::Pressure => pressure::pressure(args[0], args[1]),
            Formula::HydrostaticPressure => pressure::hydrostatic_pressure(args[0], args[1]),
            Formula::PhotonEnergy => quantum::photon_energy(args[0]),
            Formula::EnergyV4 => quantum::energy_v4(args[0]),
            Formula::HalfLife => quantum::half_life(args[0])?,
            Formula::DecayConstant => quantum::decay_constant(args[0])?,
        };

        log::debug!("{}({:?}) = {}", self.function_name(), args, value);
        Ok(value)
    }

    /// Get all formulas in a given group
    pub fn in_group(group: FormulaGroup) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().group == group)
            .copied()
            .collect()
    }

    /// Get all groups in documentation order
    pub fn all_groups() -> Vec<FormulaGroup> {
        vec![FormulaGroup::Geometry, FormulaGroup::Pressure, FormulaGroup::Quantum]
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

impl FromStr for Formula {
    type Err = JoulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ALL_FORMULAS
            .iter()
            .copied()
            .find(|f| f.function_name() == name)
            .ok_or_else(|| JoulesError::unknown_formula(name))
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    // Geometry
    Formula::ArcLength,
    Formula::Circumference,
    Formula::TriangleArea,
    Formula::TrapeziumArea,
    Formula::RectangleArea,
    Formula::CircleArea,
    Formula::SphereVolume,
    Formula::ConeVolume,
    Formula::CylinderVolume,
    Formula::SphereSurfaceArea,
    Formula::ConeSurfaceArea,
    Formula::CylinderSurfaceArea,
    // Pressure
    Formula::Pressure,
    Formula::HydrostaticPressure,
    // Quantum
    Formula::PhotonEnergy,
    Formula::EnergyV4,
    Formula::HalfLife,
    Formula::DecayConstant,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the formula reference document from the registry.
///
/// ```rust
/// use joules_core::formulas::registry::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("Joules Formula Reference"));
/// assert!(markdown.contains("## Quantum"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Joules Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula in the library with its inputs, units and a reference value.
Preconditions are documented, not enforced, unless marked "checked".

---

"#,
    );

    let groups = Formula::all_groups();

    for group in &groups {
        let formulas = Formula::in_group(*group);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", group.display_name()));

        for formula in formulas {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            output.push_str("**Variables:**\n\n");
            output.push_str("| Symbol | Description | Units |\n");
            output.push_str("|--------|-------------|-------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
            }
            output.push('\n');

            output.push_str(&format!("**Result units:** {}\n\n", meta.result_units));

            if !meta.preconditions.is_empty() {
                output.push_str("**Preconditions:**\n");
                for precondition in &meta.preconditions {
                    output.push_str(&format!("- {}\n", precondition));
                }
                output.push('\n');
            }

            let args: Vec<String> = meta.example.arguments.iter().map(|a| a.to_string()).collect();
            output.push_str(&format!(
                "**Example:** `{}({}) => {}`\n\n",
                meta.source_function,
                args.join(", "),
                meta.example.expected
            ));

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Groups:** {}\n",
        ALL_FORMULAS.len(),
        groups.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 18);

        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "Formula {:?} has no name", formula);
            assert!(!meta.formula_plain.is_empty(), "Formula {:?} has no formula", formula);
            assert_eq!(meta.variables.len(), formula.arity(), "Formula {:?} variable count", formula);
            assert_eq!(meta.example.arguments.len(), formula.arity(), "Formula {:?} example arity", formula);
            assert_eq!(meta.source_function, formula.function_name());
        }
    }

    #[test]
    fn test_reference_examples_evaluate() {
        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            let value = formula.evaluate(meta.example.arguments).unwrap();
            let expected = meta.example.expected;
            let tolerance = 1e-9 * expected.abs();
            assert!(
                (value - expected).abs() <= tolerance,
                "{}: got {:e}, expected {:e}",
                formula,
                value,
                expected
            );
        }
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(Formula::in_group(FormulaGroup::Geometry).len(), 12);
        assert_eq!(Formula::in_group(FormulaGroup::Pressure).len(), 2);
        assert_eq!(Formula::in_group(FormulaGroup::Quantum).len(), 4);
    }

    #[test]
    fn test_all_groups_order() {
        assert_eq!(
            Formula::all_groups(),
            vec![FormulaGroup::Geometry, FormulaGroup::Pressure, FormulaGroup::Quantum]
        );
        for formula in ALL_FORMULAS {
            assert!(Formula::all_groups().contains(&formula.metadata().group));
        }
    }

    #[test]
    fn test_source_modules_exist() {
        let crate_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(
                crate_root.join(meta.source_module).is_file(),
                "{}: {} not found relative to the crate root",
                formula,
                meta.source_module
            );
        }
    }

    #[test]
    fn test_from_str() {
        for formula in ALL_FORMULAS {
            assert_eq!(formula.function_name().parse::<Formula>().unwrap(), *formula);
        }
        assert_eq!(" half_life ".parse::<Formula>().unwrap(), Formula::HalfLife);

        let err = "warp_factor".parse::<Formula>().unwrap_err();
        assert_eq!(err, JoulesError::unknown_formula("warp_factor"));
    }

    #[test]
    fn test_serde_name_matches_function_name() {
        for formula in ALL_FORMULAS {
            let json = serde_json::to_string(formula).unwrap();
            assert_eq!(json, format!("\"{}\"", formula.function_name()));
        }
    }

    #[test]
    fn test_evaluate_arity_mismatch() {
        let err = Formula::ConeVolume.evaluate(&[1.0]).unwrap_err();
        assert_eq!(err, JoulesError::arity_mismatch("cone_volume", 2, 1));

        let err = Formula::HalfLife.evaluate(&[]).unwrap_err();
        assert_eq!(err.error_code(), "ARITY_MISMATCH");
    }

    #[test]
    fn test_evaluate_propagates_division_by_zero() {
        let err = Formula::DecayConstant.evaluate(&[0.0]).unwrap_err();
        assert_eq!(err, JoulesError::division_by_zero("decay_constant", 0.0));

        // Pressure keeps native float semantics
        assert_eq!(Formula::Pressure.evaluate(&[10.0, 0.0]).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_evaluate_matches_direct_call() {
        let value = Formula::SphereVolume.evaluate(&[12.0]).unwrap();
        assert_eq!(value, geometry::sphere_volume(12.0));
        assert!(approx_eq(value, 7238.229473870883));
    }

    #[test]
    fn test_generate_formulas_markdown() {
        let markdown = generate_formulas_markdown();

        assert!(markdown.contains("# Joules Formula Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");

        assert!(markdown.contains("## Geometry"));
        assert!(markdown.contains("## Pressure"));
        assert!(markdown.contains("## Quantum"));

        assert!(markdown.contains("### Sphere Volume"));
        assert!(markdown.contains("`t_half = ln(2) / lambda`"));
        assert!(markdown.contains("`trapezium_area(10, 15, 3) => 37.5`"));
        assert!(markdown.contains("**Source:** [`half_life`](src/formulas/quantum.rs)"));

        // Groups in documentation order
        let geometry = markdown.find("## Geometry").unwrap();
        let pressure = markdown.find("## Pressure").unwrap();
        let quantum = markdown.find("## Quantum").unwrap();
        assert!(geometry < pressure && pressure < quantum);

        assert!(markdown.contains("**Total Formulas:** 18"), "Wrong formula count");
        assert!(markdown.contains("**Groups:** 3"), "Wrong group count");
    }
}
