//! Core-Domäne: Binomialkoeffizienten, Bézier-Auswertung, Kontrollpunkt-Speicher.

pub mod coefficients;
pub mod control_points;
pub mod curve;
pub mod error;

pub use coefficients::{binomial_row, CoefficientVector, MAX_DEGREE};
pub use control_points::ControlPointStore;
pub use curve::{evaluate_curve, evaluate_point, CurveEvaluator, CurveSamples};
pub use error::CurveError;
