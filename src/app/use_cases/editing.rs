//! Use-Cases: Kontrollpunkte hinzufügen, entfernen und verschieben.
//!
//! Jede erfolgreiche Mutation berechnet die Kurve synchron neu, bevor der
//! nächste Command verarbeitet oder ein Frame gezeichnet wird.

use crate::app::{AppState, InteractionState};
use crate::core::CurveError;
use glam::Vec2;

/// Hängt einen Kontrollpunkt am Ende an.
///
/// Ein voller Store lehnt den Punkt ab; das wird gewarnt, der State bleibt unverändert.
pub fn append_control_point(state: &mut AppState, pos: Vec2) {
    match state.control_points.append(pos) {
        Ok(index) => {
            log::info!(
                "Kontrollpunkt #{} hinzugefügt ({:.0}, {:.0})",
                index + 1,
                pos.x,
                pos.y
            );
            recompute_curve(state);
        }
        Err(e) => {
            log::warn!(
                "Kontrollpunkt ({:.0}, {:.0}) nicht hinzugefügt: {}",
                pos.x,
                pos.y,
                e
            );
        }
    }
}

/// Entfernt den Kontrollpunkt an `index` und beendet eine laufende Auswahl.
pub fn remove_control_point(state: &mut AppState, index: usize) {
    // Nachfolgende Indizes verschieben sich, eine Auswahl wäre danach ungültig
    state.interaction = InteractionState::Idle;

    match state.control_points.remove_at(index) {
        Ok(removed) => {
            log::info!(
                "Kontrollpunkt #{} entfernt ({:.0}, {:.0})",
                index + 1,
                removed.x,
                removed.y
            );
            recompute_curve(state);
        }
        Err(e) => invariant_violation("Entfernen", e),
    }
}

/// Setzt den gewählten Kontrollpunkt an `pos` und kehrt nach Idle zurück.
pub fn commit_move(state: &mut AppState, index: usize, pos: Vec2) {
    state.interaction = InteractionState::Idle;

    match state.control_points.set(index, pos) {
        Ok(previous) => {
            log::info!(
                "Kontrollpunkt #{} verschoben von ({:.0}, {:.0}) nach ({:.0}, {:.0})",
                index + 1,
                previous.x,
                previous.y,
                pos.x,
                pos.y
            );
            recompute_curve(state);
        }
        Err(e) => invariant_violation("Verschieben", e),
    }
}

/// Berechnet die Kurve aus den aktuellen Kontrollpunkten neu.
///
/// Schlägt die Koeffizienten-Berechnung fehl, bleibt die Kurve leer.
pub fn recompute_curve(state: &mut AppState) {
    if let Err(e) = state.curve.recompute(state.control_points.as_slice()) {
        log::error!(
            "Kurve mit {} Kontrollpunkten nicht berechenbar: {}",
            state.control_points.len(),
            e
        );
    }
}

/// Veralteter Index trotz Validierung: in Debug-Builds fatal, sonst ignoriert.
fn invariant_violation(action: &str, err: CurveError) {
    log::error!("{} fehlgeschlagen (interner Fehler): {}", action, err);
    if cfg!(debug_assertions) {
        panic!("Invariante verletzt beim {action}: {err}");
    }
}
