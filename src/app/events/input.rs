//! Normalisierte Eingaben des Host-Fensters.
//!
//! Der Host übersetzt seine Plattform-Events in diese Typen; die Zuordnung zu
//! `AppIntent`s passiert hier und ist damit unabhängig vom Fenster-Backend.

use super::AppIntent;
use glam::Vec2;

/// Maustaste eines Pointer-Down-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Taste zum Tauschen von Vorder- und Hintergrundfarbe.
pub const KEY_INVERT_COLORS: char = 'i';
/// Taste zum Ein-/Ausblenden des Info-Overlays.
pub const KEY_TOGGLE_INFO: char = 't';
/// Taste zum Beenden.
pub const KEY_QUIT: char = 'q';

/// Intent für einen Tastendruck; unbekannte Tasten werden ignoriert.
pub fn intent_for_key(key: char) -> Option<AppIntent> {
    match key.to_ascii_lowercase() {
        KEY_INVERT_COLORS => Some(AppIntent::InvertColorsRequested),
        KEY_TOGGLE_INFO => Some(AppIntent::ToggleInfoRequested),
        KEY_QUIT => Some(AppIntent::ExitRequested),
        _ => None,
    }
}

/// Intent für einen Maustasten-Druck; die mittlere Taste hat keine Funktion.
pub fn intent_for_pointer_down(button: PointerButton, pos: Vec2) -> Option<AppIntent> {
    match button {
        PointerButton::Primary => Some(AppIntent::PrimaryPressed { pos }),
        PointerButton::Secondary => Some(AppIntent::SecondaryPressed { pos }),
        PointerButton::Middle => None,
    }
}
