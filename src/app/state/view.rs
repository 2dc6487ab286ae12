use crate::shared::EditorOptions;
use glam::Vec2;

/// Anzeigezustand der Session (Farben, Overlay, Cursor-Anzeige).
///
/// Gehört nicht zum Kurvenkern; wird nur von Ansichts-Commands verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Vordergrundfarbe (Kurve, Text)
    pub foreground: [u8; 4],
    /// Hintergrundfarbe
    pub background: [u8; 4],
    /// Kontrollpunkte und Cursor-Anzeige sichtbar
    pub show_info: bool,
    /// Letzte bekannte Zeigerposition
    pub cursor_pos: Vec2,
    /// Zeigerposition als Text
    pub cursor_label: String,
}

impl ViewState {
    /// Erstellt den Anzeigezustand aus den Start-Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            foreground: options.color_foreground,
            background: options.color_background,
            show_info: options.show_info,
            cursor_pos: Vec2::ZERO,
            cursor_label: format_cursor(Vec2::ZERO),
        }
    }

    /// Tauscht Vorder- und Hintergrundfarbe.
    pub fn invert_colors(&mut self) {
        std::mem::swap(&mut self.foreground, &mut self.background);
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor_pos = pos;
        self.cursor_label = format_cursor(pos);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}

/// Pixel-Koordinaten ganzzahlig, z.B. "(120, 45)".
fn format_cursor(pos: Vec2) -> String {
    format!("({}, {})", pos.x as i32, pos.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_colors_twice_is_identity() {
        let mut view = ViewState::default();
        let original = view.clone();

        view.invert_colors();
        assert_eq!(view.foreground, original.background);
        assert_eq!(view.background, original.foreground);

        view.invert_colors();
        assert_eq!(view, original);
    }

    #[test]
    fn test_cursor_label_truncates_to_pixels() {
        let mut view = ViewState::default();
        assert_eq!(view.cursor_label, "(0, 0)");
        view.set_cursor(Vec2::new(120.7, 45.2));
        assert_eq!(view.cursor_label, "(120, 45)");
    }
}
