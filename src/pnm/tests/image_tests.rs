//! Tests for the raster image model

use super::test_utils::gray_ramp;
use crate::pnm::{Encoding, Grid, PnmError, PnmFormat, RasterImage, Rgb, Samples, Variant};

#[test]
fn test_new_image_is_zeroed() {
    let image = RasterImage::new(Variant::Color, Encoding::Binary, 3, 2).unwrap();

    assert_eq!(image.size(), (3, 2));
    assert_eq!(image.max_value(), Some(255));
    assert_eq!(image.format().magic(), "P6");
    assert!(image.grid::<Rgb>().unwrap().iter().all(|&p| p == Rgb::default()));
}

#[test]
fn test_new_rejects_zero_dimensions() {
    assert!(matches!(
        RasterImage::new(Variant::Gray, Encoding::Ascii, 0, 4),
        Err(PnmError::DimensionError(_))
    ));
}

#[test]
fn test_from_samples_validates_max_value() {
    let grid = Grid::from_rows(vec![vec![200u8]]).unwrap();
    assert!(matches!(
        RasterImage::from_samples(Encoding::Ascii, Some(100), Samples::Gray(grid.clone())),
        Err(PnmError::SampleParseError(_))
    ));
    assert!(matches!(
        RasterImage::from_samples(Encoding::Ascii, None, Samples::Gray(grid)),
        Err(PnmError::DimensionError(_))
    ));
}

#[test]
fn test_ragged_rows_are_rejected() {
    let result = Grid::from_rows(vec![vec![1u8, 2], vec![3]]);
    assert!(matches!(result, Err(PnmError::ShapeError { expected: 2, found: 1 })));
}

#[test]
fn test_accessors_are_bounds_checked() {
    let mut image = RasterImage::new(Variant::Gray, Encoding::Ascii, 2, 2).unwrap();

    assert!(image.set::<u8>(1, 1, 9));
    assert!(!image.set::<u8>(2, 0, 9));
    assert!(!image.set::<Rgb>(0, 0, Rgb::new(1, 2, 3)));
    assert_eq!(image.get::<u8>(1, 1), Some(9));
    assert_eq!(image.get::<u8>(0, 5), None);
    assert_eq!(image.get::<bool>(0, 0), None);
}

#[test]
fn test_set_caps_at_max_value() {
    let mut image = RasterImage::new(Variant::Gray, Encoding::Ascii, 1, 1).unwrap();
    image.set_max_value(15);
    image.set::<u8>(0, 0, 200);
    assert_eq!(image.get::<u8>(0, 0), Some(15));
}

#[test]
fn test_set_max_value_rescales() {
    let mut image = gray_ramp(Encoding::Ascii);
    image.set_max_value(15);

    assert_eq!(image.max_value(), Some(15));
    assert_eq!(image.get::<u8>(0, 0), Some(0));
    assert_eq!(image.get::<u8>(2, 1), Some(15));
    assert_eq!(image.get::<u8>(2, 0), Some(7));
}

#[test]
fn test_set_encoding_changes_magic() {
    let mut image = gray_ramp(Encoding::Ascii);
    assert_eq!(image.format().magic(), "P2");
    image.set_encoding(Encoding::Binary);
    assert_eq!(image.format().magic(), "P5");
}

#[test]
fn test_format_table_lookup() {
    for magic in ["P1", "P2", "P3", "P4", "P5", "P6"] {
        let format = PnmFormat::from_magic(magic).unwrap();
        assert_eq!(format.magic(), magic);
    }
    assert!(PnmFormat::from_magic("p1").is_err());
    assert_eq!(PnmFormat::from_magic("P6").unwrap().extension(), "ppm");
}

#[test]
fn test_luma_rounds() {
    // 0.299*1 + 0.587*1 + 0.114*0 = 0.886 rounds up to 1
    assert_eq!(Rgb::new(1, 1, 0).luma(), 1);
    assert_eq!(Rgb::new(255, 255, 255).luma(), 255);
}

#[test]
fn test_every_format_has_its_own_table_row() {
    let expected = [
        (Variant::Bitmap, Encoding::Ascii, "P1", "pbm"),
        (Variant::Gray, Encoding::Ascii, "P2", "pgm"),
        (Variant::Color, Encoding::Ascii, "P3", "ppm"),
        (Variant::Bitmap, Encoding::Binary, "P4", "pbm"),
        (Variant::Gray, Encoding::Binary, "P5", "pgm"),
        (Variant::Color, Encoding::Binary, "P6", "ppm"),
    ];
    for (variant, encoding, magic, extension) in expected {
        let format = PnmFormat { variant, encoding };
        assert_eq!(format.magic(), magic);
        assert_eq!(format.extension(), extension);
        assert_eq!(PnmFormat::from_magic(magic).unwrap(), format);
    }
}
