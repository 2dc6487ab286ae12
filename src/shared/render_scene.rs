//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use crate::core::CurveSamples;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Polynom-Reihenfolge
    pub control_points: Vec<Vec2>,
    /// Zum Verschieben gewählter Kontrollpunkt (Index in `control_points`)
    pub selected: Option<usize>,
    /// Abgetastete Kurve (Arc, O(1)-Clone)
    pub curve: CurveSamples,
    /// Aktuelle Vordergrundfarbe (Kurve, Text)
    pub foreground: [u8; 4],
    /// Aktuelle Hintergrundfarbe
    pub background: [u8; 4],
    pub control_point_color: [u8; 4],
    pub selected_point_color: [u8; 4],
    pub control_point_radius: f32,
    pub curve_stroke_width: f32,
    /// Kontrollpunkte und Cursor-Anzeige zeichnen
    pub show_info: bool,
    /// Cursor-Position als Text, z.B. "(120, 45)"
    pub cursor_label: String,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve zum Zeichnen vorhanden ist.
    pub fn has_curve(&self) -> bool {
        !self.curve.is_empty()
    }
}
