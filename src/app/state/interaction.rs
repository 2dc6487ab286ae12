/// Zustand der Kontrollpunkt-Interaktion.
///
/// Verschieben ist ein Zwei-Klick-Vorgang: der erste Primärklick wählt einen
/// Punkt, der nächste Primärklick (an beliebiger Stelle) setzt ihn ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Kein Punkt gewählt
    #[default]
    Idle,
    /// Punkt an `index` wartet auf seine neue Position
    Dragging { index: usize },
}

impl InteractionState {
    /// Index des gewählten Kontrollpunkts, falls vorhanden.
    pub fn selected_index(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::Dragging { index } => Some(index),
        }
    }
}
