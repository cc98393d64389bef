//! Bounded recorder for the ghost squares actors leave behind.

use glam::Vec2;

use super::constants::TRAIL_CAPACITY;

/// One settled square: where it was stamped and its Z rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailEntry {
    pub position: Vec2,
    pub angle: f32,
}

/// Append-only, capacity-bounded. Once full, further emissions are
/// silently dropped; entries never overwrite and only a reset clears.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailRecorder {
    entries: Vec<TrailEntry>,
}

impl TrailRecorder {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(TRAIL_CAPACITY),
        }
    }

    pub fn record(&mut self, entry: TrailEntry) {
        if self.entries.len() < TRAIL_CAPACITY {
            self.entries.push(entry);
        }
    }

    /// Entries in insertion order; replayed every frame.
    pub fn iter(&self) -> impl Iterator<Item = &TrailEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset path only: drop every entry and rewind the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for TrailRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> TrailEntry {
        TrailEntry {
            position: Vec2::new(i as f32, 0.0),
            angle: 0.0,
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let mut trail = TrailRecorder::new();
        for i in 0..5 {
            trail.record(entry(i));
        }
        let xs: Vec<f32> = trail.iter().map(|e| e.position.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn drops_past_capacity_without_overwrite() {
        let mut trail = TrailRecorder::new();
        for i in 0..TRAIL_CAPACITY + 50 {
            trail.record(entry(i));
        }
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        // The first and last kept entries are untouched by the drops.
        assert_eq!(trail.iter().next(), Some(&entry(0)));
        assert_eq!(trail.iter().last(), Some(&entry(TRAIL_CAPACITY - 1)));
    }

    #[test]
    fn clear_rewinds_to_empty() {
        let mut trail = TrailRecorder::new();
        trail.record(entry(1));
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail, TrailRecorder::new());
    }
}
