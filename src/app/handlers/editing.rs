//! Handler für Kontrollpunkt-Editing und Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Wählt einen Kontrollpunkt zum Verschieben.
pub fn select_control_point(state: &mut AppState, pos: Vec2, max_distance: f32) {
    use_cases::selection::select_control_point(state, pos, max_distance);
}

/// Setzt den gewählten Kontrollpunkt ab.
pub fn commit_move(state: &mut AppState, index: usize, pos: Vec2) {
    use_cases::editing::commit_move(state, index, pos);
}

/// Hängt einen neuen Kontrollpunkt an.
pub fn append_control_point(state: &mut AppState, pos: Vec2) {
    use_cases::editing::append_control_point(state, pos);
}

/// Entfernt einen Kontrollpunkt.
pub fn remove_control_point(state: &mut AppState, index: usize) {
    use_cases::editing::remove_control_point(state, index);
}

/// Verwirft die laufende Auswahl.
pub fn cancel_drag(state: &mut AppState) {
    use_cases::selection::cancel_drag(state);
}
