use super::*;

const RED: Rgb = Rgb::new(0xFF0000);
const BLUE: Rgb = Rgb::new(0x0000FF);

#[test]
fn test_get_border_on_missing_slot_is_none() {
    let set = AnnotationSet::new();
    for d in Direction::ALL {
        assert_eq!(set.get_border(3, d), None);
    }
    assert!(set.is_empty());
}

#[test]
fn test_set_border_creates_entry_for_requested_directions_only() {
    let mut set = AnnotationSet::new();
    set.set_border(4, DirectionSet::single(Direction::Top).with(Direction::Left), RED);

    assert_eq!(set.get_border(4, Direction::Top), Some(RED));
    assert_eq!(set.get_border(4, Direction::Left), Some(RED));
    assert_eq!(set.get_border(4, Direction::Bottom), None);
    assert_eq!(set.get_border(4, Direction::Right), None);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_set_border_with_no_directions_keeps_map_sparse() {
    let mut set = AnnotationSet::new();
    set.set_border(1, DirectionSet::EMPTY, RED);
    assert!(set.is_empty());
}

#[test]
fn test_set_border_overwrites_color() {
    let mut set = AnnotationSet::new();
    set.set_border(0, Direction::Bottom.into(), RED);
    set.set_border(0, Direction::Bottom.into(), BLUE);
    assert_eq!(set.get_border(0, Direction::Bottom), Some(BLUE));
}

#[test]
fn test_clear_last_border_removes_slot() {
    let mut set = AnnotationSet::new();
    set.set_border(7, DirectionSet::ALL, RED);
    set.clear_border(7, Direction::Top.into());
    assert!(set.contains_slot(7));

    set.clear_border(7, [Direction::Bottom, Direction::Left, Direction::Right].into_iter().collect());
    assert!(!set.contains_slot(7));
    for d in Direction::ALL {
        assert_eq!(set.get_border(7, d), None);
    }
    assert_eq!(set.iter().count(), 0);
}

#[test]
fn test_clear_border_on_missing_slot_is_noop() {
    let mut set = AnnotationSet::new();
    set.clear_border(2, DirectionSet::ALL);
    assert!(set.is_empty());
}

#[test]
fn test_clear_all() {
    let mut set = AnnotationSet::new();
    set.set_border(0, DirectionSet::ALL, RED);
    set.set_border(9, Direction::Right.into(), BLUE);
    set.clear_all();
    assert!(set.is_empty());
}

#[test]
fn test_insert_empty_slot_is_dropped() {
    let mut set = AnnotationSet::new();
    set.set_border(3, Direction::Top.into(), RED);
    set.insert_slot(3, SlotAnnotation::default());
    assert!(set.is_empty());
}

#[test]
fn test_truncate_drops_indices_above_bound() {
    let mut set = AnnotationSet::new();
    for slot in 0..54 {
        set.set_border(slot, Direction::Top.into(), RED);
    }
    assert!(set.truncate(26));
    assert_eq!(set.slot_indices(), (0..=26).collect::<Vec<_>>());
    assert!(!set.truncate(26));
}

#[test]
fn test_slot_annotation_packing() {
    let mut ann = SlotAnnotation::default();
    ann.set(Direction::Left, Some(Rgb::BLACK));
    ann.set(Direction::Top, Some(RED));
    assert_eq!(ann.to_packed(), [0xFFFF_0000, 0, 0xFF00_0000, 0]);

    let back = SlotAnnotation::from_packed([0xFFFF_0000, 0, 0xFF00_0000, 0]);
    assert_eq!(back, ann);
    assert_eq!(
        back.borders().collect::<Vec<_>>(),
        vec![(Direction::Top, RED), (Direction::Left, Rgb::BLACK)]
    );
}

#[test]
fn test_direction_axis_and_set_iteration() {
    assert_eq!(Direction::Top.axis(), Axis::Horizontal);
    assert_eq!(Direction::Bottom.axis(), Axis::Horizontal);
    assert_eq!(Direction::Left.axis(), Axis::Vertical);
    assert_eq!(Direction::Right.axis(), Axis::Vertical);

    let set: DirectionSet = [Direction::Right, Direction::Top].into_iter().collect();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Top, Direction::Right]);
    assert!(!set.contains(Direction::Left));
}
