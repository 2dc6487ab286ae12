use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Kontrollpunkte ===
    /// Kontrollpunkt innerhalb `max_distance` zum Verschieben wählen
    SelectControlPoint { pos: Vec2, max_distance: f32 },
    /// Gewählten Kontrollpunkt an neue Position setzen und Auswahl beenden
    CommitMove { index: usize, pos: Vec2 },
    /// Kontrollpunkt am Ende anhängen
    AppendControlPoint { pos: Vec2 },
    /// Kontrollpunkt an Index entfernen
    RemoveControlPoint { index: usize },
    /// Laufende Auswahl verwerfen (zurück nach Idle)
    CancelDrag,

    // === Ansicht ===
    /// Cursor-Anzeige aktualisieren
    SetCursorPosition { pos: Vec2 },
    /// Vorder- und Hintergrundfarbe tauschen
    InvertColors,
    /// Info-Overlay umschalten
    ToggleInfo,

    // === Anwendungssteuerung ===
    RequestExit,
}
