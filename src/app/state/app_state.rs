use crate::core::{ControlPointStore, CurveEvaluator, CurveSamples};
use crate::shared::EditorOptions;
use glam::Vec2;

use super::{InteractionState, ViewState};

/// Hauptzustand einer Editor-Session
///
/// Kontrollpunkte, Kurve und Interaktionszustand sind nur über Commands des
/// `AppController` veränderbar; der Renderer liest sie über die Accessoren.
pub struct AppState {
    /// Kontrollpunkte in Polynom-Reihenfolge
    pub(crate) control_points: ControlPointStore,
    /// Abgetastete Kurve der aktuell bestätigten Punkte
    pub(crate) curve: CurveEvaluator,
    /// Auswahl für das Zwei-Klick-Verschieben
    pub(crate) interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Beim Start übergebene Optionen (Kapazität, Auflösung, Pick-Radius, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            control_points: ControlPointStore::new(options.max_control_points),
            curve: CurveEvaluator::new(options.division_count),
            interaction: InteractionState::Idle,
            view: ViewState::new(&options),
            options,
            should_exit: false,
        }
    }

    /// Kontrollpunkte in Polynom-Reihenfolge.
    pub fn control_points(&self) -> &[Vec2] {
        self.control_points.as_slice()
    }

    /// Zuletzt berechnete Kurve.
    pub fn curve_samples(&self) -> &CurveSamples {
        self.curve.samples()
    }

    /// Index des zum Verschieben gewählten Kontrollpunkts.
    pub fn selection(&self) -> Option<usize> {
        self.interaction.selected_index()
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Index des ersten Kontrollpunkts innerhalb des Pick-Radius um `pos`.
    pub fn hit_test(&self, pos: Vec2) -> Option<usize> {
        self.control_points
            .find_nearest(pos, self.options.hit_radius)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
