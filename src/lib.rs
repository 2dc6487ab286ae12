//! Bezier Editor Library.
//! Kurvenkern und Interaktions-Controller als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionState, PointerButton, ViewState,
};
pub use core::{
    binomial_row, evaluate_curve, evaluate_point, CoefficientVector, ControlPointStore,
    CurveError, CurveEvaluator, CurveSamples, MAX_DEGREE,
};
pub use shared::{EditorOptions, RenderScene};
