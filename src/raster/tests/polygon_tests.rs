//! Tests for polygon drawing

use super::test_utils::{block, lit};
use crate::pnm::Grid;
use crate::raster::polygon::{pair_intersections, scanline_intersections};
use crate::raster::{Painter, Point};

#[test]
fn test_filled_polygon_matches_filled_rectangle() {
    let corners = [Point::new(1, 1), Point::new(3, 1), Point::new(3, 2), Point::new(1, 2)];

    let mut polygon = Grid::<u8>::new(6, 5);
    Painter::new(&mut polygon).draw_filled_polygon(&corners, 1);

    let mut rectangle = Grid::<u8>::new(6, 5);
    Painter::new(&mut rectangle).draw_filled_rectangle(Point::new(1, 1), 3, 2, 1);

    assert_eq!(lit(&polygon), lit(&rectangle));
    assert_eq!(lit(&polygon), block(1, 1, 3, 2));
}

#[test]
fn test_polygon_outline_closes() {
    let mut grid = Grid::<u8>::new(5, 5);
    let square = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)];
    Painter::new(&mut grid).draw_polygon(&square, 1);

    let pixels = lit(&grid);
    assert_eq!(pixels.len(), 16);
    // Closing edge from the last vertex back to the first
    assert!(pixels.contains(&(0, 2)));
}

#[test]
fn test_filled_concave_polygon_leaves_notch_empty() {
    // U shape: notch between x = 2 and x = 4 above y = 3
    let shape = [
        Point::new(0, 0), Point::new(2, 0), Point::new(2, 3), Point::new(4, 3),
        Point::new(4, 0), Point::new(6, 0), Point::new(6, 5), Point::new(0, 5),
    ];
    let mut grid = Grid::<u8>::new(8, 7);
    Painter::new(&mut grid).draw_filled_polygon(&shape, 1);

    let pixels = lit(&grid);
    assert!(!pixels.contains(&(3, 1)));
    assert!(!pixels.contains(&(3, 2)));
    assert!(pixels.contains(&(1, 1)));
    assert!(pixels.contains(&(5, 1)));
    assert!(pixels.contains(&(3, 4)));
}

#[test]
fn test_vertex_on_scanline_counted_once() {
    // Diamond: the side vertices sit exactly on scanline 2
    let diamond = [Point::new(2, 0), Point::new(4, 2), Point::new(2, 4), Point::new(0, 2)];
    let xs = scanline_intersections(&diamond, 2);
    assert_eq!(xs, vec![0, 4]);
    // Horizontal edges never produce crossings
    let bar = [Point::new(0, 1), Point::new(3, 1), Point::new(3, 2), Point::new(0, 2)];
    assert_eq!(scanline_intersections(&bar, 1), vec![0, 3]);
}

#[test]
fn test_odd_intersections_drop_trailing() {
    assert_eq!(pair_intersections(&[1, 4, 7]), vec![(1, 4)]);
    assert_eq!(pair_intersections(&[0, 2, 5, 9]), vec![(0, 2), (5, 9)]);
    assert!(pair_intersections(&[3]).is_empty());
}

#[test]
fn test_degenerate_polygons() {
    let mut grid = Grid::<u8>::new(4, 4);
    let mut painter = Painter::new(&mut grid);
    painter.draw_filled_polygon(&[], 1);
    painter.draw_filled_polygon(&[Point::new(1, 1)], 1);
    painter.draw_filled_polygon(&[Point::new(0, 3), Point::new(3, 3)], 1);

    let pixels = lit(&grid);
    assert!(pixels.contains(&(1, 1)));
    assert_eq!(pixels.iter().filter(|&&(_, y)| y == 3).count(), 4);
}

#[test]
fn test_intersections_with_extreme_coordinates() {
    let wide = [Point::new(i32::MIN, 0), Point::new(i32::MAX, 0), Point::new(i32::MAX, 2), Point::new(i32::MIN, 2)];
    assert_eq!(scanline_intersections(&wide, 1), vec![i32::MIN, i32::MAX]);

    let mut grid = Grid::<u8>::new(4, 4);
    let corner = [Point::new(i32::MAX - 2, i32::MAX - 2), Point::new(i32::MAX, i32::MAX - 2), Point::new(i32::MAX, i32::MAX)];
    Painter::new(&mut grid).draw_filled_polygon(&corner, 1);
    assert!(lit(&grid).is_empty());
}
