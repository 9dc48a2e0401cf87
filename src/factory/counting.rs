//! Variant 2: a factory type that keeps count of what it has built.

use super::{make_game_object, GameObject, ObjectType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of objects built per variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationCounts {
    pub plane: usize,
    pub boat: usize,
}

impl CreationCounts {
    pub fn get(&self, kind: ObjectType) -> usize {
        match kind {
            ObjectType::Plane => self.plane,
            ObjectType::Boat => self.boat,
        }
    }

    pub fn total(&self) -> usize {
        self.plane + self.boat
    }

    fn bump(&mut self, kind: ObjectType) -> usize {
        let slot = match kind {
            ObjectType::Plane => &mut self.plane,
            ObjectType::Boat => &mut self.boat,
        };
        *slot += 1;
        *slot
    }
}

/// A factory that records how many objects of each type it has produced.
///
/// # Architecture Note
/// The counters live in the factory value rather than in process-wide statics. Two
/// factories count independently, and whoever owns the factory owns the counts; pass
/// it (or `&mut` to it) to the code that creates objects.
#[derive(Debug, Default)]
pub struct CountingFactory {
    counts: CreationCounts,
}

impl CountingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, kind: ObjectType) -> Box<dyn GameObject> {
        let count = self.counts.bump(kind);
        debug!(%kind, count, "Counted creation");
        make_game_object(kind)
    }

    pub fn counts(&self) -> CreationCounts {
        self.counts
    }

    /// Human-readable summary, one line per type.
    pub fn report(&self) -> String {
        format!(
            "Number of Plane objects: {}\nNumber of boat objects: {}",
            self.counts.plane, self.counts.boat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_variant() {
        let mut factory = CountingFactory::new();
        factory.create(ObjectType::Plane);
        factory.create(ObjectType::Boat);
        factory.create(ObjectType::Boat);

        let counts = factory.counts();
        assert_eq!(counts.get(ObjectType::Plane), 1);
        assert_eq!(counts.get(ObjectType::Boat), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_factories_count_independently() {
        let mut first = CountingFactory::new();
        let second = CountingFactory::new();
        first.create(ObjectType::Plane);

        assert_eq!(first.counts().plane, 1);
        assert_eq!(second.counts(), CreationCounts::default());
    }

    #[test]
    fn test_report() {
        let mut factory = CountingFactory::new();
        factory.create(ObjectType::Boat);
        assert_eq!(
            factory.report(),
            "Number of Plane objects: 0\nNumber of boat objects: 1"
        );
    }
}
