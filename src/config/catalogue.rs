//! Built-in resource kinds. Field names and order are the wire contract; tables are fixed.

use crate::config::types::{field, FieldSpec, FieldType, ResourceKind};
use FieldType::{Float, FloatArray, FloatMatrix, Integer, Text};

/// Family paths kept for clients of the misspelled historical route.
pub const FAMILY_ALIASES: &[(&str, &str)] = &[("linear-algrebra", "linear-algebra")];

const ROOT: &str = "root-of-equations";
const LINEAR: &str = "linear-algebra";
const INTERPOLATION: &str = "interpolation";
const REGRESSION: &str = "least-squares-regression";
const INTEGRATION: &str = "integration";
const DIFFERENTIATION: &str = "numerical-diff";

const GRAPHICAL: &[FieldSpec] = &[field("equation", Text), field("scan", Float)];

const BRACKETED: &[FieldSpec] = &[
    field("equation", Text),
    field("xl", Float),
    field("xr", Float),
    field("e", Float),
];

const ONE_POINT: &[FieldSpec] = &[field("equation", Text), field("e", Float)];

const NEWTON_RAPHSON: &[FieldSpec] = &[field("equation", Text), field("x0", Float), field("e", Float)];

const SECANT: &[FieldSpec] = &[
    field("equation", Text),
    field("X0", Float),
    field("X1", Float),
    field("e", Float),
];

const LINEAR_SYSTEM: &[FieldSpec] = &[
    field("matrix_size", Integer),
    field("matrix_data", FloatMatrix),
    field("constant_data", FloatArray),
];

const ITERATIVE_SYSTEM: &[FieldSpec] = &[
    field("matrix_size", Integer),
    field("e", Float),
    field("matrix_data", FloatMatrix),
    field("constant_data", FloatArray),
];

const NEWTON_POINTS: &[FieldSpec] = &[
    field("points", FloatMatrix),
    field("point", FloatArray),
    field("xvalue", Float),
];

const LAGRANGE_POINTS: &[FieldSpec] = &[
    field("points", FloatMatrix),
    field("point", FloatArray),
    field("xvalue", FloatArray),
];

// Regression datasets arrive as delimited strings and are stored verbatim.
const LINEAR_REGRESSION: &[FieldSpec] = &[field("points", Text), field("xvalue", Float)];

const POLYNOMIAL_REGRESSION: &[FieldSpec] = &[
    field("points", Text),
    field("order", Integer),
    field("xvalue", Float),
];

const MULTIPLE_REGRESSION: &[FieldSpec] = &[field("points", Text), field("xvalue", Text)];

const QUADRATURE: &[FieldSpec] = &[
    field("function", Text),
    field("lower", Float),
    field("upper", Float),
    field("interval", Integer),
];

const DIFFERENCE: &[FieldSpec] = &[
    field("function", Text),
    field("x", Integer),
    field("h", Float),
    field("order", Integer),
];

const fn kind(
    family: &'static str,
    resource: &'static str,
    table: &'static str,
    label: &'static str,
    fields: &'static [FieldSpec],
) -> ResourceKind {
    ResourceKind {
        family,
        resource: Some(resource),
        table,
        label,
        fields,
    }
}

pub static CATALOGUE: &[ResourceKind] = &[
    kind(ROOT, "graphical", "graphicals", "Graphical", GRAPHICAL),
    kind(ROOT, "bisection", "bisections", "Bisection", BRACKETED),
    kind(ROOT, "false-position", "false_positions", "False position", BRACKETED),
    kind(ROOT, "one-point", "one_points", "One point", ONE_POINT),
    kind(ROOT, "newton-raphson", "newton_raphsons", "Newton Raphson", NEWTON_RAPHSON),
    kind(ROOT, "secant", "secants", "Secant", SECANT),
    kind(LINEAR, "cramer-rule", "cramer_rules", "Cramer rule", LINEAR_SYSTEM),
    kind(LINEAR, "gauss-eliminate", "gauss_eliminates", "Gauss eliminate", LINEAR_SYSTEM),
    kind(LINEAR, "gauss-jordan", "gauss_jordans", "Gauss Jordan", LINEAR_SYSTEM),
    kind(LINEAR, "lu-decomposition", "lu_decompositions", "LU decomposition", LINEAR_SYSTEM),
    kind(LINEAR, "matrix-inverse", "matrix_inverses", "Matrix inverse", LINEAR_SYSTEM),
    kind(
        LINEAR,
        "cholesky-decomposition",
        "cholesky_decompositions",
        "Cholesky decomposition",
        LINEAR_SYSTEM,
    ),
    kind(LINEAR, "jacobi-iteration", "jacobi_iterations", "Jacobi iteration", ITERATIVE_SYSTEM),
    kind(LINEAR, "gauss-seidel", "gauss_seidel_iterations", "Gauss Seidel iteration", ITERATIVE_SYSTEM),
    kind(LINEAR, "conjugate-gradient", "conjugate_gradients", "Conjugate gradient", ITERATIVE_SYSTEM),
    kind(INTERPOLATION, "linear-newton", "linear_newtons", "Linear Newton", NEWTON_POINTS),
    kind(INTERPOLATION, "quadratic-newton", "quadratic_newtons", "Quadratic Newton", NEWTON_POINTS),
    kind(INTERPOLATION, "polynomial-newton", "polynomial_newtons", "Polynomial Newton", NEWTON_POINTS),
    kind(INTERPOLATION, "quadratic-lagrange", "quadratic_lagranges", "Quadratic Lagrange", LAGRANGE_POINTS),
    kind(REGRESSION, "linear-regression", "linear_regressions", "Linear regression", LINEAR_REGRESSION),
    kind(
        REGRESSION,
        "polynomial-regression",
        "polynomial_regressions",
        "Polynomial regression",
        POLYNOMIAL_REGRESSION,
    ),
    kind(
        REGRESSION,
        "multiple-regression",
        "multiple_regressions",
        "Multiple regression",
        MULTIPLE_REGRESSION,
    ),
    kind(INTEGRATION, "trapezoid", "trapezoids", "Trapezoid", QUADRATURE),
    kind(INTEGRATION, "simpson", "simpsons", "Simpson", QUADRATURE),
    ResourceKind {
        family: DIFFERENTIATION,
        resource: None,
        table: "numerical_diffs",
        label: "Numerical diff",
        fields: DIFFERENCE,
    },
];
