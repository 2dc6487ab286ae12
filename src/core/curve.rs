//! Bézier-Auswertung beliebigen Grades über die Bernstein-Basis.
//!
//! B(t) = Σ C(n,k) · t^k · (1-t)^(n-k) · P_k  mit n = Anzahl Kontrollpunkte - 1.
//! Abgetastet wird gleichmäßig im Parameter (nicht nach Bogenlänge).

use std::sync::Arc;

use glam::Vec2;

use super::coefficients::{binomial_row, CoefficientVector};
use super::CurveError;

/// Abgetastete Kurve: `division_count + 1` Punkte, leer ohne Kontrollpunkte.
///
/// Arc für O(1)-Clone in die RenderScene.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    points: Arc<[Vec2]>,
}

impl CurveSamples {
    /// Leere Kurve (keine Kontrollpunkte).
    pub fn empty() -> Self {
        Self {
            points: Arc::from(Vec::new()),
        }
    }

    /// Read-only Sicht auf die Abtastpunkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for CurveSamples {
    fn default() -> Self {
        Self::empty()
    }
}

/// Wertet die Kurve an Parameter `t ∈ [0, 1]` aus.
///
/// `coefficients` muss zur aktuellen Punktanzahl passen. Gibt `None` zurück,
/// wenn keine Kontrollpunkte existieren. Gewichte werden in f64 gebildet,
/// Koeffizienten hoher Grade liegen weit außerhalb des f32-Bereichs.
pub fn evaluate_point(
    t: f32,
    control_points: &[Vec2],
    coefficients: &CoefficientVector,
) -> Option<Vec2> {
    if control_points.is_empty() {
        return None;
    }
    debug_assert_eq!(
        coefficients.len(),
        control_points.len(),
        "Koeffizienten passen nicht zur Punktanzahl"
    );

    let n = control_points.len() - 1;
    let t = f64::from(t);
    let inv = 1.0 - t;

    let (mut x, mut y) = (0.0f64, 0.0f64);
    for (k, (point, &c)) in control_points
        .iter()
        .zip(coefficients.weights())
        .enumerate()
    {
        // powi(0) = 1, auch für 0^0 → exakte Endpunkte bei t = 0 und t = 1
        let blend = c * t.powi(k as i32) * inv.powi((n - k) as i32);
        x += f64::from(point.x) * blend;
        y += f64::from(point.y) * blend;
    }

    Some(Vec2::new(x as f32, y as f32))
}

/// Tastet die Kurve bei `t = i / division_count` für `i = 0..=division_count` ab.
///
/// Bei `division_count == 0` entsteht ein einzelnes Sample bei `t = 0`.
pub fn evaluate_curve(
    control_points: &[Vec2],
    division_count: u32,
) -> Result<CurveSamples, CurveError> {
    if control_points.is_empty() {
        return Ok(CurveSamples::empty());
    }
    let coefficients = binomial_row(control_points.len() - 1)?;
    Ok(sample(control_points, &coefficients, division_count))
}

fn sample(
    control_points: &[Vec2],
    coefficients: &CoefficientVector,
    division_count: u32,
) -> CurveSamples {
    let points: Vec<Vec2> = (0..=division_count)
        .filter_map(|i| {
            let t = if division_count == 0 {
                0.0
            } else {
                i as f32 / division_count as f32
            };
            evaluate_point(t, control_points, coefficients)
        })
        .collect();

    CurveSamples {
        points: Arc::from(points),
    }
}

/// Besitzt die abgetastete Kurve einer Session.
///
/// Die Koeffizientenzeile wird nur neu berechnet, wenn sich die Punktanzahl
/// ändert. Eine Neuberechnung passiert ausschließlich über [`Self::recompute`],
/// nie implizit beim Lesen.
#[derive(Debug, Clone)]
pub struct CurveEvaluator {
    division_count: u32,
    coefficients: Option<CoefficientVector>,
    samples: CurveSamples,
}

impl CurveEvaluator {
    /// Erstellt einen Evaluator mit fester Abtastauflösung.
    pub fn new(division_count: u32) -> Self {
        Self {
            division_count,
            coefficients: None,
            samples: CurveSamples::empty(),
        }
    }

    /// Abtastauflösung (Anzahl Parameterschritte).
    pub fn division_count(&self) -> u32 {
        self.division_count
    }

    /// Zuletzt berechnete Kurve.
    pub fn samples(&self) -> &CurveSamples {
        &self.samples
    }

    /// Berechnet die Kurve für die übergebenen Kontrollpunkte neu.
    ///
    /// Bei Fehler wird die Kurve geleert, damit keine veraltete Kurve
    /// angezeigt wird.
    pub fn recompute(&mut self, control_points: &[Vec2]) -> Result<(), CurveError> {
        if control_points.is_empty() {
            self.coefficients = None;
            self.samples = CurveSamples::empty();
            return Ok(());
        }

        let degree = control_points.len() - 1;
        let cached = self
            .coefficients
            .as_ref()
            .is_some_and(|c| c.degree() == degree);
        if !cached {
            match binomial_row(degree) {
                Ok(row) => self.coefficients = Some(row),
                Err(e) => {
                    self.coefficients = None;
                    self.samples = CurveSamples::empty();
                    return Err(e);
                }
            }
        }

        if let Some(coefficients) = &self.coefficients {
            self.samples = sample(control_points, coefficients, self.division_count);
        }
        Ok(())
    }
}
