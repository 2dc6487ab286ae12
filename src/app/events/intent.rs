use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Mauszeiger bewegt (nur Cursor-Anzeige)
    PointerMoved { pos: Vec2 },
    /// Primärtaste gedrückt: Kontrollpunkt wählen bzw. gewählten Punkt absetzen
    PrimaryPressed { pos: Vec2 },
    /// Sekundärtaste gedrückt: Kontrollpunkt entfernen oder hinzufügen
    SecondaryPressed { pos: Vec2 },
    /// Vorder- und Hintergrundfarbe tauschen
    InvertColorsRequested,
    /// Info-Overlay (Kontrollpunkte, Cursor-Anzeige) ein-/ausblenden
    ToggleInfoRequested,
    /// Anwendung beenden
    ExitRequested,
}
