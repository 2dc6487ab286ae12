//! Canvas-Input: Maus-Events und Tastatur → AppIntent.
//!
//! Positionen werden in Canvas-Koordinaten übergeben (Ursprung oben links).
//! Ausgelöst wird beim Drücken der Maustaste, nicht beim Loslassen.

use super::keyboard;
use crate::app::events::input::intent_for_pointer_down;
use crate::app::{AppIntent, PointerButton};
use glam::Vec2;

/// Sammelt alle Intents des aktuellen Frames für den Canvas.
pub fn collect_canvas_intents(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let origin = response.rect.min;

    if let Some(hover_pos) = response.hover_pos() {
        let moved = ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO);
        if moved {
            events.push(AppIntent::PointerMoved {
                pos: screen_to_canvas(hover_pos, origin),
            });
        }
    }

    if response.hovered() {
        let (press_pos, primary, secondary) = ui.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_pressed(egui::PointerButton::Secondary),
            )
        });

        if let Some(pos) = press_pos {
            let pos = screen_to_canvas(pos, origin);
            let pressed = [
                (primary, PointerButton::Primary),
                (secondary, PointerButton::Secondary),
            ];
            events.extend(
                pressed
                    .into_iter()
                    .filter(|(down, _)| *down)
                    .filter_map(|(_, button)| intent_for_pointer_down(button, pos)),
            );
        }
    }

    events.extend(keyboard::collect_keyboard_intents(ui));
    events
}

/// Rechnet eine egui-Bildschirmposition in Canvas-Koordinaten um.
pub fn screen_to_canvas(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - origin.x, pos.y - origin.y)
}

/// Rechnet Canvas-Koordinaten zurück in eine egui-Bildschirmposition.
pub fn canvas_to_screen(pos: Vec2, origin: egui::Pos2) -> egui::Pos2 {
    egui::pos2(origin.x + pos.x, origin.y + pos.y)
}
