//! Tests for whole-image transforms

use crate::pnm::{decode, Encoding, Grid, RasterImage, Rgb, Samples, Variant};

fn gray(rows: Vec<Vec<u8>>, max: u8) -> RasterImage {
    RasterImage::from_samples(Encoding::Ascii, Some(max), Samples::Gray(Grid::from_rows(rows).unwrap())).unwrap()
}

fn color(rows: Vec<Vec<Rgb>>) -> RasterImage {
    RasterImage::from_samples(Encoding::Binary, Some(255), Samples::Color(Grid::from_rows(rows).unwrap())).unwrap()
}

fn gray_rows(image: &RasterImage) -> Vec<Vec<u8>> {
    image.grid::<u8>().unwrap().rows().map(|r| r.to_vec()).collect()
}

#[test]
fn test_invert_bitmap() {
    let mut image = decode(b"P1\n2 2\n1 0\n0 1\n").unwrap();
    image.invert();

    let rows: Vec<Vec<bool>> = image.grid::<bool>().unwrap().rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![false, true], vec![true, false]]);
}

#[test]
fn test_invert_gray_uses_max_value() {
    let mut image = gray(vec![vec![0, 3, 15]], 15);
    image.invert();
    assert_eq!(gray_rows(&image), vec![vec![15, 12, 0]]);
}

#[test]
fn test_invert_color_per_channel() {
    let mut image = color(vec![vec![Rgb::new(0, 100, 255)]]);
    image.invert();
    assert_eq!(image.get::<Rgb>(0, 0), Some(Rgb::new(255, 155, 0)));
}

#[test]
fn test_invert_twice_is_identity() {
    let originals = vec![
        decode(b"P1\n3 1\n1 0 1\n").unwrap(),
        gray(vec![vec![0, 7, 200], vec![1, 2, 3]], 200),
        color(vec![vec![Rgb::new(1, 2, 3), Rgb::new(250, 128, 0)]]),
    ];

    for original in originals {
        let mut image = original.clone();
        image.invert();
        assert_ne!(image, original);
        image.invert();
        assert_eq!(image, original);
    }
}

#[test]
fn test_flip_horizontal() {
    let mut image = gray(vec![vec![1, 2, 3], vec![4, 5, 6]], 255);
    image.flip_horizontal();
    assert_eq!(gray_rows(&image), vec![vec![3, 2, 1], vec![6, 5, 4]]);
}

#[test]
fn test_flip_vertical() {
    let mut image = gray(vec![vec![1, 2], vec![3, 4], vec![5, 6]], 255);
    image.flip_vertical();
    assert_eq!(gray_rows(&image), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
}

#[test]
fn test_flips_are_involutions() {
    let original = gray(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]], 255);

    let mut image = original.clone();
    image.flip_horizontal();
    image.flip_horizontal();
    assert_eq!(image, original);

    image.flip_vertical();
    image.flip_vertical();
    assert_eq!(image, original);
}

#[test]
fn test_flip_and_flop_is_half_turn() {
    let mut image = gray(vec![vec![1, 2], vec![3, 4]], 255);
    image.flip_and_flop();
    assert_eq!(gray_rows(&image), vec![vec![4, 3], vec![2, 1]]);
}

#[test]
fn test_rotate_90_cw() {
    let image = gray(vec![vec![1, 2, 3], vec![4, 5, 6]], 255);
    let rotated = image.rotate_90_cw();

    assert_eq!(rotated.size(), (2, 3));
    assert_eq!(gray_rows(&rotated), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
    // Source is untouched
    assert_eq!(image.size(), (3, 2));
}

#[test]
fn test_rotate_four_times_is_identity() {
    let original = color(vec![
        vec![Rgb::new(1, 0, 0), Rgb::new(2, 0, 0), Rgb::new(3, 0, 0)],
        vec![Rgb::new(4, 0, 0), Rgb::new(5, 0, 0), Rgb::new(6, 0, 0)],
    ]);

    let mut image = original.clone();
    for _ in 0..4 {
        image = image.rotate_90_cw();
    }
    assert_eq!(image, original);
}

#[test]
fn test_color_to_gray_rounds_luma() {
    let image = color(vec![vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255), Rgb::new(200, 200, 200)]]);
    let converted = image.to_gray();

    assert_eq!(converted.variant(), Variant::Gray);
    assert_eq!(converted.max_value(), Some(255));
    assert_eq!(converted.encoding(), Encoding::Binary);
    // 76.245 -> 76, 149.685 -> 150, 29.07 -> 29
    assert_eq!(gray_rows(&converted), vec![vec![76, 150, 29, 200]]);
}

#[test]
fn test_gray_to_bitmap_threshold() {
    let image = gray(vec![vec![0, 127, 128, 255]], 255);
    let bitmap = image.to_bitmap();

    assert_eq!(bitmap.variant(), Variant::Bitmap);
    assert_eq!(bitmap.max_value(), None);
    let row: Vec<bool> = bitmap.grid::<bool>().unwrap().row(0).unwrap().to_vec();
    assert_eq!(row, vec![false, false, true, true]);
}

#[test]
fn test_color_to_bitmap_uses_channel_mean() {
    let image = color(vec![vec![Rgb::new(255, 0, 0), Rgb::new(255, 255, 0)]]);
    let bitmap = image.to_bitmap();

    // means are 85 and 170 against a threshold of 127
    assert_eq!(bitmap.get::<bool>(0, 0), Some(false));
    assert_eq!(bitmap.get::<bool>(1, 0), Some(true));
}

#[test]
fn test_upconversions() {
    let bitmap = decode(b"P1\n2 1\n1 0\n").unwrap();
    let as_gray = bitmap.to_gray();
    assert_eq!(gray_rows(&as_gray), vec![vec![255, 0]]);

    let as_color = gray(vec![vec![9]], 9).to_color();
    assert_eq!(as_color.get::<Rgb>(0, 0), Some(Rgb::new(9, 9, 9)));
    assert_eq!(as_color.max_value(), Some(9));

    assert_eq!(bitmap.convert(Variant::Bitmap), bitmap);
}
