//! Use-Case: Kontrollpunkt zum Verschieben wählen.

use crate::app::{AppState, InteractionState};
use glam::Vec2;

/// Wählt den ersten Kontrollpunkt innerhalb `max_distance` um `pos`.
///
/// Ohne Treffer bleibt der Zustand unverändert. Die Kurve wird nicht neu
/// berechnet, sie zeigt weiterhin nur bestätigte Positionen.
pub fn select_control_point(state: &mut AppState, pos: Vec2, max_distance: f32) {
    let Some(index) = state.control_points.find_nearest(pos, max_distance) else {
        log::debug!("Kein Kontrollpunkt bei ({:.0}, {:.0})", pos.x, pos.y);
        return;
    };

    state.interaction = InteractionState::Dragging { index };
    log::info!("Kontrollpunkt #{} gewählt", index + 1);
}

/// Verwirft eine laufende Auswahl.
pub fn cancel_drag(state: &mut AppState) {
    if let InteractionState::Dragging { index } = state.interaction {
        log::debug!("Auswahl von Kontrollpunkt #{} verworfen", index + 1);
    }
    state.interaction = InteractionState::Idle;
}
