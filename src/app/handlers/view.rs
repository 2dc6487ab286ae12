//! Handler für Anzeigezustand (Cursor, Farben, Overlay).

use crate::app::AppState;
use glam::Vec2;

pub fn set_cursor_position(state: &mut AppState, pos: Vec2) {
    state.view.set_cursor(pos);
}

/// Tauscht Vorder- und Hintergrundfarbe.
pub fn invert_colors(state: &mut AppState) {
    state.view.invert_colors();
    log::debug!("Farben invertiert");
}

/// Blendet Kontrollpunkte und Cursor-Anzeige ein oder aus.
pub fn toggle_info(state: &mut AppState) {
    state.view.toggle_info();
    log::debug!("Info-Overlay: {}", state.view.show_info);
}
