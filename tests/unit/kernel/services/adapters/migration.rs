use super::*;
use crate::models::{AnnotationSet, BlockPos, Direction, DirectionSet, Facing, PairSide, Rgb};
use tempfile::tempdir;

const DIM: &str = "minecraft:overworld";

fn key(pos: BlockPos) -> ContainerKey {
    ContainerKey::position(pos, DIM)
}

fn filled(slots: std::ops::Range<usize>) -> AnnotationSet {
    let mut set = AnnotationSet::new();
    for slot in slots {
        set.set_border(slot, DirectionSet::single(Direction::Top), Rgb::RED);
    }
    set
}

#[test]
fn test_single_container_resolves_to_itself() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let pos = BlockPos::new(3, 64, 3);
    let resolved = resolve_interaction(&service, &PairedContainer::single(pos), DIM);
    assert_eq!(resolved, key(pos));
}

#[test]
fn test_double_container_resolves_to_smaller_half_from_either_side() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let a = BlockPos::new(0, 64, 0);
    let b = BlockPos::new(1, 64, 0);
    assert_eq!(
        resolve_interaction(&service, &PairedContainer::paired(a, b), DIM),
        key(a)
    );
    assert_eq!(
        resolve_interaction(&service, &PairedContainer::paired(b, a), DIM),
        key(a)
    );
}

#[test]
fn test_merge_moves_existing_data_to_new_main_half() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let old = BlockPos::new(5, 64, 5);
    service.save(&key(old), &filled(0..3));

    // A new half placed west of the old one becomes the main half.
    let placed = BlockPos::new(4, 64, 5);
    let container = PairedContainer::from_facing(placed, Facing::South, PairSide::Right);
    assert_eq!(container.neighbor, Some(old));

    let resolved = resolve_interaction(&service, &container, DIM);
    assert_eq!(resolved, key(placed));
    assert_eq!(service.load(&key(placed)), filled(0..3));
    assert!(!service.exists(&key(old)));
}

#[test]
fn test_merge_never_overwrites_main_half() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let main = BlockPos::new(0, 64, 0);
    let secondary = BlockPos::new(0, 64, 1);
    service.save(&key(main), &filled(0..1));
    service.save(&key(secondary), &filled(5..9));

    resolve_interaction(&service, &PairedContainer::paired(secondary, main), DIM);
    assert_eq!(service.load(&key(main)), filled(0..1));
    assert_eq!(service.load(&key(secondary)), filled(5..9));
}

#[test]
fn test_breaking_main_half_moves_and_truncates() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let main = BlockPos::new(0, 64, 0);
    let neighbor = BlockPos::new(1, 64, 0);
    service.save(&key(main), &filled(0..54));

    let event = BreakEvent {
        container: PairedContainer::paired(main, neighbor),
        dimension: DIM.into(),
    };
    let outcome = handle_break(&service, &event, 27);

    assert_eq!(outcome, BreakOutcome::MovedTo(key(neighbor)));
    assert_eq!(service.load(&key(neighbor)), filled(0..27));
    assert!(!service.exists(&key(main)));
}

#[test]
fn test_breaking_secondary_half_truncates_in_place() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let main = BlockPos::new(0, 64, 0);
    let secondary = BlockPos::new(1, 64, 0);
    service.save(&key(main), &filled(20..40));

    let event = BreakEvent {
        container: PairedContainer::paired(secondary, main),
        dimension: DIM.into(),
    };
    let outcome = handle_break(&service, &event, 27);

    assert_eq!(outcome, BreakOutcome::TruncatedAt(key(main)));
    assert_eq!(service.load(&key(main)), filled(20..27));
    assert!(!service.exists(&key(secondary)));
}

#[test]
fn test_capacity_is_configurable() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let main = BlockPos::new(0, 64, 0);
    let neighbor = BlockPos::new(0, 64, 1);
    service.save(&key(main), &filled(0..10));

    let event = BreakEvent {
        container: PairedContainer::paired(main, neighbor),
        dimension: DIM.into(),
    };
    handle_break(&service, &event, 5);
    assert_eq!(service.load(&key(neighbor)), filled(0..5));
}

#[test]
fn test_breaking_single_container_deletes_file() {
    let dir = tempdir().unwrap();
    let service = PersistenceService::local(dir.path());
    let pos = BlockPos::new(9, 70, -2);
    service.save(&key(pos), &filled(0..3));

    let event = BreakEvent {
        container: PairedContainer::single(pos),
        dimension: DIM.into(),
    };
    assert_eq!(handle_break(&service, &event, 27), BreakOutcome::Cleared);
    assert!(!service.exists(&key(pos)));
}
