//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet die Tasten I/T/Q und mappt sie auf `AppIntent`s.

use crate::app::events::input::{intent_for_key, KEY_INVERT_COLORS, KEY_QUIT, KEY_TOGGLE_INFO};
use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let bindings = [
        (egui::Key::I, KEY_INVERT_COLORS),
        (egui::Key::T, KEY_TOGGLE_INFO),
        (egui::Key::Q, KEY_QUIT),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| ui.input(|i| i.key_pressed(*key)))
        .filter_map(|(_, ch)| intent_for_key(ch))
        .collect()
}
