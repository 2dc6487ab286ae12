//! Geordneter, nach oben begrenzter Speicher für Kontrollpunkte.

use glam::Vec2;

use super::CurveError;

/// Kontrollpunkte in Polynom-Reihenfolge (Index 0 = Start, n-1 = Ende).
///
/// Die Kapazität wird an jeder Einfüge-Operation explizit geprüft; ein voller
/// Store bleibt bei einem abgelehnten Append unverändert.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointStore {
    points: Vec<Vec2>,
    capacity: usize,
}

impl ControlPointStore {
    /// Erstellt einen leeren Store mit maximal `capacity` Punkten.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            capacity,
        }
    }

    /// Anzahl Kontrollpunkte `n`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Obergrenze `N_max`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Read-only Sicht in Polynom-Reihenfolge.
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Hängt einen Punkt am Ende an und gibt dessen Index zurück.
    pub fn append(&mut self, point: Vec2) -> Result<usize, CurveError> {
        if self.is_full() {
            return Err(CurveError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.points.push(point);
        Ok(self.points.len() - 1)
    }

    /// Fügt einen Punkt an `index` ein (`index ≤ n`), nachfolgende rücken auf.
    pub fn insert_at(&mut self, index: usize, point: Vec2) -> Result<(), CurveError> {
        if index > self.points.len() {
            return Err(self.out_of_range(index));
        }
        if self.is_full() {
            return Err(CurveError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.points.insert(index, point);
        Ok(())
    }

    /// Entfernt den Punkt an `index`; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec2, CurveError> {
        if index >= self.points.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.points.remove(index))
    }

    /// Setzt die Position des Punkts an `index` und gibt die alte zurück.
    pub fn set(&mut self, index: usize, point: Vec2) -> Result<Vec2, CurveError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, point))
    }

    /// Erster Punkt (niedrigster Index), dessen Abstand zu `query` echt kleiner
    /// als `radius` ist.
    pub fn find_nearest(&self, query: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.distance(query) < radius)
    }

    fn out_of_range(&self, index: usize) -> CurveError {
        CurveError::IndexOutOfRange {
            index,
            len: self.points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(points: &[(f32, f32)]) -> ControlPointStore {
        let mut store = ControlPointStore::new(999);
        for &(x, y) in points {
            store.append(Vec2::new(x, y)).unwrap();
        }
        store
    }

    #[test]
    fn test_append_returns_new_index() {
        let mut store = ControlPointStore::new(3);
        assert_eq!(store.append(Vec2::ZERO), Ok(0));
        assert_eq!(store.append(Vec2::ONE), Ok(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_append_beyond_capacity_leaves_store_unchanged() {
        let mut store = ControlPointStore::new(2);
        store.append(Vec2::new(1.0, 1.0)).unwrap();
        store.append(Vec2::new(2.0, 2.0)).unwrap();
        let before = store.clone();

        let err = store.append(Vec2::new(3.0, 3.0)).unwrap_err();

        assert_eq!(err, CurveError::CapacityExceeded { capacity: 2 });
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut store = store_with(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed, Vec2::new(1.0, 1.0));
        assert_eq!(
            store.as_slice(),
            &[Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)]
        );
    }

    #[test]
    fn test_remove_then_reinsert_restores_content() {
        let mut store = store_with(&[(5.0, 1.0), (7.0, 2.0), (9.0, 3.0)]);
        let original = store.clone();

        for index in 0..original.len() {
            let removed = store.remove_at(index).unwrap();
            store.insert_at(index, removed).unwrap();
            assert_eq!(store, original, "Index {index}");
        }
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = store_with(&[(0.0, 0.0)]);
        assert_eq!(
            store.remove_at(1),
            Err(CurveError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_replaces_and_returns_previous() {
        let mut store = store_with(&[(0.0, 0.0), (1.0, 1.0)]);
        let old = store.set(1, Vec2::new(50.0, 50.0)).unwrap();
        assert_eq!(old, Vec2::new(1.0, 1.0));
        assert_eq!(store.get(1), Some(Vec2::new(50.0, 50.0)));
        assert!(store.set(2, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_find_nearest_uses_strict_radius() {
        let store = store_with(&[(10.0, 0.0)]);
        assert_eq!(store.find_nearest(Vec2::new(0.5, 0.0), 10.0), Some(0));
        // Abstand exakt 10 liegt nicht innerhalb
        assert_eq!(store.find_nearest(Vec2::new(0.0, 0.0), 10.0), None);
    }

    #[test]
    fn test_find_nearest_lowest_index_wins() {
        // Erster Treffer in Speicherreihenfolge gewinnt, auch vor näheren Punkten
        let store = store_with(&[(-3.0, 0.0), (3.0, 0.0), (1.0, 0.0)]);
        assert_eq!(store.find_nearest(Vec2::ZERO, 10.0), Some(0));
    }

    #[test]
    fn test_find_nearest_on_empty_store() {
        let store = ControlPointStore::new(10);
        assert_eq!(store.find_nearest(Vec2::ZERO, 10.0), None);
    }
}
