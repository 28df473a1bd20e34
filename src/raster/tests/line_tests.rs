//! Tests for line rasterization

use super::test_utils::{lit, lit_color};
use crate::pnm::{Encoding, Grid, RasterImage, Rgb, Variant};
use crate::raster::{bresenham, Painter, Point};

#[test]
fn test_horizontal_line_covers_canvas() {
    let mut image = RasterImage::new(Variant::Color, Encoding::Ascii, 4, 1).unwrap();
    let red = Rgb::new(255, 0, 0);
    image.painter::<Rgb>().unwrap().draw_line(Point::new(0, 0), Point::new(3, 0), red);

    let grid = image.grid::<Rgb>().unwrap();
    assert_eq!(lit_color(grid, red).len(), 4);
}

#[test]
fn test_degenerate_line_is_one_pixel() {
    let mut grid = Grid::<u8>::new(5, 5);
    Painter::new(&mut grid).draw_line(Point::new(2, 3), Point::new(2, 3), 1);

    let pixels = lit(&grid);
    assert_eq!(pixels.len(), 1);
    assert!(pixels.contains(&(2, 3)));
}

#[test]
fn test_line_is_symmetric() {
    let endpoints = [
        (Point::new(0, 0), Point::new(7, 3)),
        (Point::new(1, 6), Point::new(6, 0)),
        (Point::new(0, 0), Point::new(3, 7)),
        (Point::new(7, 1), Point::new(0, 4)),
        (Point::new(0, 0), Point::new(5, 5)),
        (Point::new(2, 0), Point::new(2, 7)),
    ];

    for (a, b) in endpoints {
        let mut forward = Grid::<u8>::new(8, 8);
        let mut backward = Grid::<u8>::new(8, 8);
        Painter::new(&mut forward).draw_line(a, b, 1);
        Painter::new(&mut backward).draw_line(b, a, 1);
        assert_eq!(lit(&forward), lit(&backward), "asymmetric line {:?} -> {:?}", a, b);
    }
}

#[test]
fn test_line_is_eight_connected_and_inclusive() {
    let mut visited = Vec::new();
    bresenham(Point::new(0, 0), Point::new(6, 2), |x, y| visited.push((x, y)));

    assert_eq!(visited.first(), Some(&(0, 0)));
    assert_eq!(visited.last(), Some(&(6, 2)));
    // One pixel per column on a shallow line
    assert_eq!(visited.len(), 7);
    for pair in visited.windows(2) {
        let (dx, dy) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
        assert!(dx.abs() <= 1 && dy.abs() <= 1);
    }
}

#[test]
fn test_off_canvas_line_is_clipped() {
    let mut grid = Grid::<u8>::new(3, 3);
    Painter::new(&mut grid).draw_line(Point::new(-5, 1), Point::new(10, 1), 1);

    let pixels = lit(&grid);
    assert_eq!(pixels.len(), 3);
    assert!(pixels.iter().all(|&(_, y)| y == 1));
}

#[test]
fn test_painter_caps_at_image_max_value() {
    let mut image = RasterImage::new(Variant::Gray, Encoding::Ascii, 2, 1).unwrap();
    image.set_max_value(100);
    image.painter::<u8>().unwrap().draw_line(Point::new(0, 0), Point::new(1, 0), 255);

    assert_eq!(image.get::<u8>(0, 0), Some(100));
    assert!(image.painter::<Rgb>().is_none());
}
