//! Zeichnet die RenderScene mit dem egui-Painter.

use super::input::canvas_to_screen;
use crate::shared::RenderScene;

/// Schriftgröße der Cursor-Anzeige.
const CURSOR_LABEL_FONT_SIZE: f32 = 18.0;

/// Zeichnet Hintergrund, Kurve, Kontrollpunkte und Cursor-Anzeige in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.background));

    let origin = rect.min;

    if scene.show_info {
        for (i, &point) in scene.control_points.iter().enumerate() {
            let color = if scene.selected == Some(i) {
                scene.selected_point_color
            } else {
                scene.control_point_color
            };
            painter.circle_filled(
                canvas_to_screen(point, origin),
                scene.control_point_radius,
                to_color32(color),
            );
        }
    }

    if scene.has_curve() {
        let points: Vec<egui::Pos2> = scene
            .curve
            .points()
            .iter()
            .map(|&p| canvas_to_screen(p, origin))
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(scene.curve_stroke_width, to_color32(scene.foreground)),
        ));
    }

    if scene.show_info {
        painter.text(
            origin,
            egui::Align2::LEFT_TOP,
            &scene.cursor_label,
            egui::FontId::monospace(CURSOR_LABEL_FONT_SIZE),
            to_color32(scene.foreground),
        );
    }
}

fn to_color32([r, g, b, a]: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
