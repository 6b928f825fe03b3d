use super::*;

const CELL: f64 = 16.0;
const THRESHOLD: f64 = 5.0;

/// A 9x3 container grid with 18px stride followed by one row of player cells.
fn grid() -> Vec<CellGeometry> {
    let mut cells = Vec::new();
    for row in 0..3 {
        for col in 0..9 {
            cells.push(CellGeometry::new(row * 9 + col, 8 + col as i32 * 18, 18 + row as i32 * 18));
        }
    }
    for col in 0..9 {
        cells.push(CellGeometry::player(27 + col, 8 + col as i32 * 18, 85));
    }
    cells
}

fn hit(x: f64, y: f64) -> Option<Direction> {
    hit_border(Point::new(100.0, 100.0), Point::new(100.0 + x, 100.0 + y), CELL, THRESHOLD)
}

#[test]
fn test_hit_each_border() {
    assert_eq!(hit(8.0, 1.0), Some(Direction::Top));
    assert_eq!(hit(8.0, 15.0), Some(Direction::Bottom));
    assert_eq!(hit(1.0, 8.0), Some(Direction::Left));
    assert_eq!(hit(15.0, 8.0), Some(Direction::Right));
}

#[test]
fn test_center_is_not_a_hit() {
    assert_eq!(hit(8.0, 8.0), None);
    assert_eq!(hit(8.0, 5.1), None);
}

#[test]
fn test_threshold_is_inclusive() {
    assert_eq!(hit(8.0, 5.0), Some(Direction::Top));
    assert_eq!(hit(8.0, -5.0), Some(Direction::Top));
    assert_eq!(hit(8.0, -5.5), None);
}

#[test]
fn test_exact_ties_follow_top_bottom_left_right() {
    // Equidistant from top and left.
    assert_eq!(hit(2.0, 2.0), Some(Direction::Top));
    // Equidistant from bottom and right.
    assert_eq!(hit(14.0, 14.0), Some(Direction::Bottom));
    // Equidistant from left and right is impossible inside a 16px cell unless centred,
    // which is out of range; equidistant from top and right picks top.
    assert_eq!(hit(14.0, 2.0), Some(Direction::Top));
    // Bottom vs left.
    assert_eq!(hit(2.0, 14.0), Some(Direction::Bottom));
}

#[test]
fn test_hovered_cell_includes_one_pixel_margin() {
    let cells = grid();
    let origin = Point::new(0.0, 0.0);
    assert_eq!(hovered_cell(&cells, origin, Point::new(7.0, 17.0), CELL).map(|c| c.index), Some(0));
    assert_eq!(hovered_cell(&cells, origin, Point::new(24.9, 20.0), CELL).map(|c| c.index), Some(0));
    assert_eq!(hovered_cell(&cells, origin, Point::new(26.0, 20.0), CELL).map(|c| c.index), Some(1));
    assert!(hovered_cell(&cells, origin, Point::new(0.0, 0.0), CELL).is_none());
}

#[test]
fn test_horizontal_drag_paints_exact_row_range() {
    let cells = grid();
    let start = cells[9 + 2];
    let current = cells[9 + 5];
    let range: Vec<usize> = drag_range(&cells, &start, &current, Axis::Horizontal)
        .iter()
        .map(|c| c.index)
        .collect();
    assert_eq!(range, vec![11, 12, 13, 14]);
}

#[test]
fn test_drag_range_ignores_order() {
    let cells = grid();
    let forward = drag_range(&cells, &cells[2], &cells[5], Axis::Horizontal);
    let backward = drag_range(&cells, &cells[5], &cells[2], Axis::Horizontal);
    assert_eq!(forward, backward);
}

#[test]
fn test_vertical_drag_stays_in_column_and_skips_player_cells() {
    let cells = grid();
    // From the top row straight down onto a player cell in the same column.
    let range: Vec<usize> = drag_range(&cells, &cells[4], &cells[27 + 4], Axis::Vertical)
        .iter()
        .map(|c| c.index)
        .collect();
    assert_eq!(range, vec![4, 13, 22]);
}

#[test]
fn test_horizontal_drag_uses_start_row_even_if_pointer_left_it() {
    let cells = grid();
    let range: Vec<usize> = drag_range(&cells, &cells[1], &cells[9 + 3], Axis::Horizontal)
        .iter()
        .map(|c| c.index)
        .collect();
    assert_eq!(range, vec![1, 2, 3]);
}

#[test]
fn test_container_grid_layout() {
    let cells = container_grid(3);
    assert_eq!(cells.len(), 63);
    assert_eq!(cells[0], CellGeometry::new(0, 8, 18));
    assert_eq!(cells[26], CellGeometry::new(26, 152, 54));
    assert_eq!(cells[27], CellGeometry::player(27, 8, 85));
    assert_eq!(cells[54], CellGeometry::player(54, 8, 143));
    assert_eq!(cells.iter().filter(|c| c.is_editable()).count(), 27);
}
