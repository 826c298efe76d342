//! Path compaction.

use crate::core::Waypoint;

/// Collapse runs of immediately-adjacent, exactly-equal waypoints to a
/// single instance.
///
/// Equality is exact on the already-rounded coordinates. Order is
/// preserved and non-adjacent repeats are left alone; this is not a
/// global deduplication.
pub fn compact_path(mut path: Vec<Waypoint>) -> Vec<Waypoint> {
    path.dedup();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(x: f64, y: f64) -> Waypoint {
        Waypoint::new(x, y)
    }

    #[test]
    fn test_adjacent_duplicates_collapse() {
        let path = vec![wp(0.1, 0.1), wp(0.1, 0.1), wp(0.3, 0.1), wp(0.3, 0.1)];
        assert_eq!(compact_path(path), vec![wp(0.1, 0.1), wp(0.3, 0.1)]);
    }

    #[test]
    fn test_non_adjacent_repeats_survive() {
        let path = vec![wp(0.1, 0.1), wp(0.3, 0.1), wp(0.1, 0.1)];
        assert_eq!(compact_path(path.clone()), path);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert!(compact_path(Vec::new()).is_empty());
        assert_eq!(compact_path(vec![wp(0.5, 0.5)]), vec![wp(0.5, 0.5)]);
    }
}
