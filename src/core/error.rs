//! Fehlertypen der Kurven-Domäne.

use thiserror::Error;

/// Fehler bei Kontrollpunkt-Mutationen und Koeffizienten-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Append auf einen vollen Store (N_max erreicht).
    #[error("Kapazität erschöpft: maximal {capacity} Kontrollpunkte")]
    CapacityExceeded {
        /// Obergrenze des Stores
        capacity: usize,
    },

    /// Zugriff mit veraltetem oder ungültigem Index.
    #[error("Index {index} außerhalb des gültigen Bereichs (n = {len})")]
    IndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Aktuelle Anzahl Kontrollpunkte
        len: usize,
    },

    /// Binomialkoeffizient nicht mehr als endliches `f64`-Gewicht darstellbar.
    #[error("Binomialkoeffizienten für Grad {degree} sind nicht darstellbar")]
    CoefficientOverflow {
        /// Angefragter Polynomgrad
        degree: usize,
    },
}
