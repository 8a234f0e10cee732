use hotbox::geometry::{accumulated_origin, map_from_parent, map_to_parent};
use hotbox::{Hotbox, Point, Region, Size};

#[test]
fn coordinate_mapping_round_trips() {
    let origin = Point::new(125, 10);
    for point in [
        Point::new(0, 0),
        Point::new(177, 27),
        Point::new(-40, 3),
        Point::new(i32::MAX - 200, 55),
    ] {
        let local = map_from_parent(point, origin);
        assert_eq!(map_to_parent(local, origin), point);
    }
}

#[test]
fn nested_offsets_accumulate_before_mapping() {
    // A region two levels deep: its offset chain is summed once, then the
    // mapping is a single subtraction.
    let chain = [Point::new(100, 50), Point::new(10, 10)];
    let origin = accumulated_origin(chain);
    assert_eq!(origin, Point::new(110, 60));
    assert_eq!(
        map_from_parent(Point::new(115, 70), origin),
        Point::new(5, 10)
    );
}

#[test]
fn containment_is_boundary_inclusive() {
    let region = Region::new(0u8, Point::new(10, 10), Size::new(105, 35));
    for corner in [
        Point::new(10, 10),
        Point::new(115, 10),
        Point::new(10, 45),
        Point::new(115, 45),
    ] {
        assert!(region.hit_test(corner), "corner {corner:?} must be inside");
    }
    assert!(!region.hit_test(Point::new(9, 10)));
    assert!(!region.hit_test(Point::new(116, 10)));
}

#[test]
fn surface_locates_regions_in_insertion_order() {
    let mut surface = Hotbox::new();
    surface.add_region(Region::new('a', Point::new(10, 10), Size::new(105, 35)));
    surface.add_region(Region::new('b', Point::new(125, 10), Size::new(105, 35)));

    assert_eq!(surface.locate_region_at(Point::new(62, 27)), Some('a'));
    assert_eq!(surface.locate_region_at(Point::new(177, 27)), Some('b'));
    assert_eq!(surface.locate_region_at(Point::new(5, 5)), None);
    assert_eq!(
        surface.region('b').map(|r| r.origin()),
        Some(Point::new(125, 10))
    );
    assert!(surface.hovered().is_none());
}

#[test]
fn negative_sized_region_never_wins() {
    let mut surface = Hotbox::new();
    surface.add_region(Region::new(0u8, Point::new(10, 10), Size::new(-105, 35)));
    assert_eq!(surface.locate_region_at(Point::new(10, 10)), None);
    assert!(surface.handle_pointer_move(Point::new(10, 10)).is_empty());
}
