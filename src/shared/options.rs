//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle beim Session-Start übergebenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::MAX_DEGREE;

// ── Kurve ───────────────────────────────────────────────────────────

/// Maximale Anzahl Kontrollpunkte (N_max).
pub const MAX_CONTROL_POINTS: usize = 999;
/// Anzahl Parameterschritte bei der Kurvenabtastung.
pub const DIVISION_COUNT: u32 = 1000;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Pixeln: Klick innerhalb dieses Radius trifft einen Kontrollpunkt.
pub const HIT_RADIUS: f32 = 10.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius gezeichneter Kontrollpunkte in Pixeln.
pub const CONTROL_POINT_RADIUS: f32 = 3.0;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 1.0;
/// Vordergrundfarbe (RGBA: Weiß).
pub const COLOR_FOREGROUND: [u8; 4] = [255, 255, 255, 255];
/// Hintergrundfarbe (RGBA: Schwarz).
pub const COLOR_BACKGROUND: [u8; 4] = [0, 0, 0, 255];
/// Farbe normaler Kontrollpunkte (RGBA: Rot).
pub const COLOR_CONTROL_POINT: [u8; 4] = [255, 0, 0, 255];
/// Farbe des zum Verschieben gewählten Kontrollpunkts (RGBA: Grün).
pub const COLOR_CONTROL_POINT_SELECTED: [u8; 4] = [0, 255, 0, 255];

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [600.0, 600.0];

/// Bedienhinweis, wird beim Start geloggt und im Info-Overlay gezeigt.
pub const INFO_MESSAGE: &str = "Rechtsklick: Kontrollpunkt hinzufügen/entfernen, \
Linksklick: Kontrollpunkt wählen und an neue Position setzen.\n\
'i' invertiert die Farben, 't' blendet Infos ein/aus, 'q' beendet.";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start übernommenen Editor-Optionen.
/// Wird als `bezier_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Kapazität des Kontrollpunkt-Speichers (N_max)
    pub max_control_points: usize,
    /// Abtastauflösung der Kurve
    pub division_count: u32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Pixeln
    pub hit_radius: f32,

    // ── Darstellung ─────────────────────────────────────────────
    pub control_point_radius: f32,
    pub curve_stroke_width: f32,
    /// Start-Vordergrundfarbe (Kurve, Text)
    pub color_foreground: [u8; 4],
    /// Start-Hintergrundfarbe
    pub color_background: [u8; 4],
    pub color_control_point: [u8; 4],
    pub color_control_point_selected: [u8; 4],
    /// Info-Overlay beim Start sichtbar
    #[serde(default = "default_show_info")]
    pub show_info: bool,

    // ── Fenster ─────────────────────────────────────────────────
    pub window_size: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_control_points: MAX_CONTROL_POINTS,
            division_count: DIVISION_COUNT,

            hit_radius: HIT_RADIUS,

            control_point_radius: CONTROL_POINT_RADIUS,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            color_foreground: COLOR_FOREGROUND,
            color_background: COLOR_BACKGROUND,
            color_control_point: COLOR_CONTROL_POINT,
            color_control_point_selected: COLOR_CONTROL_POINT_SELECTED,
            show_info: true,

            window_size: WINDOW_SIZE,
        }
    }
}

/// Serde-Default für `show_info` (ältere TOML-Dateien ohne das Feld).
fn default_show_info() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_editor.toml")
    }

    /// Prüft die Werte, von denen Kurve und Interaktion abhängen.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.max_control_points >= 1,
            "max_control_points muss mindestens 1 sein"
        );
        anyhow::ensure!(self.division_count >= 1, "division_count muss mindestens 1 sein");
        anyhow::ensure!(
            self.hit_radius.is_finite() && self.hit_radius > 0.0,
            "hit_radius muss positiv sein (ist {})",
            self.hit_radius
        );
        anyhow::ensure!(
            self.max_control_points <= MAX_DEGREE + 1,
            "max_control_points = {} übersteigt die darstellbare Obergrenze von {} Punkten",
            self.max_control_points,
            MAX_DEGREE + 1
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EditorOptions::default().validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let opts = EditorOptions {
            hit_radius: 14.0,
            division_count: 250,
            ..Default::default()
        };

        let text = toml::to_string_pretty(&opts).unwrap();
        let parsed = EditorOptions::from_toml(&text).unwrap();

        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_zero_division_count_is_rejected() {
        let opts = EditorOptions {
            division_count: 0,
            ..Default::default()
        };
        let text = toml::to_string_pretty(&opts).unwrap();
        assert!(EditorOptions::from_toml(&text).is_err());
    }

    #[test]
    fn test_capacity_beyond_representable_degree_is_rejected() {
        let at_limit = EditorOptions {
            max_control_points: MAX_DEGREE + 1,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let too_large = EditorOptions {
            max_control_points: MAX_DEGREE + 2,
            ..Default::default()
        };
        let text = toml::to_string_pretty(&too_large).unwrap();
        assert!(EditorOptions::from_toml(&text).is_err());
    }

    #[test]
    fn test_missing_show_info_defaults_to_visible() {
        let opts = EditorOptions::default();
        let text = toml::to_string_pretty(&opts)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("show_info"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed = EditorOptions::from_toml(&text).unwrap();
        assert!(parsed.show_info);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/bezier_editor_test.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
