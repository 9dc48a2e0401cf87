use pattern_recipes::ownership::{OwnedCell, ReleaseTracker};

/// Walks the construct / copy / assign / destroy sequence and checks that every cell
/// owned its own storage and was released exactly once.
#[test]
fn test_full_ownership_lifecycle() {
    let tracker = ReleaseTracker::new();

    {
        let first = OwnedCell::with_tracker(10, tracker.clone());
        let mut second = first.clone();
        second.set(20);

        assert_eq!(first.get(), 10, "copy must not alias the original");
        assert_eq!(second.get(), 20);

        let mut third = OwnedCell::with_tracker(30, tracker.clone());
        third.clone_from(&second);
        assert_eq!(third.get(), 20);

        third.set(40);
        assert_eq!(second.get(), 20, "assignment must not alias the source");

        let addrs = [first.storage_addr(), second.storage_addr(), third.storage_addr()];
        assert_ne!(addrs[0], addrs[1]);
        assert_ne!(addrs[1], addrs[2]);
        assert_ne!(addrs[0], addrs[2]);

        assert_eq!(tracker.count(), 0, "nothing released while in scope");
    }

    assert_eq!(tracker.count(), 3);
    let mut released = tracker.released();
    released.sort_unstable();
    assert_eq!(released, vec![10, 20, 40]);
}

/// Moving a cell transfers ownership without copying or releasing anything.
#[test]
fn test_move_transfers_ownership() {
    let tracker = ReleaseTracker::new();
    let cell = OwnedCell::with_tracker(5, tracker.clone());
    let addr = cell.storage_addr();

    let moved = cell;
    assert_eq!(moved.storage_addr(), addr);
    assert_eq!(tracker.count(), 0);

    drop(moved);
    assert_eq!(tracker.released(), vec![5]);
}

/// Cells leave scope in reverse declaration order, and the tracker sees each one with
/// the value it held at that point.
#[test]
fn test_releases_follow_reverse_declaration_order() {
    let tracker = ReleaseTracker::new();
    {
        let first = OwnedCell::with_tracker(10, tracker.clone());
        let mut second = first.clone();
        second.set(20);
        let mut third = OwnedCell::with_tracker(30, tracker.clone());
        third.clone_from(&second);
    }
    assert_eq!(tracker.released(), vec![20, 20, 10]);
}
