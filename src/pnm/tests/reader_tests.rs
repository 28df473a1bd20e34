//! Tests for the Netpbm decoder

use crate::pnm::{decode, DecodeOptions, Encoding, PnmError, PnmReader, RasterImage, Rgb, Variant, MAX_SAMPLE_COUNT};

#[test]
fn test_decode_plain_bitmap() {
    let image = decode(b"P1\n2 2\n1 0\n0 1\n").unwrap();

    assert_eq!(image.variant(), Variant::Bitmap);
    assert_eq!(image.encoding(), Encoding::Ascii);
    assert_eq!(image.size(), (2, 2));
    assert_eq!(image.max_value(), None);
    assert_eq!(image.get::<bool>(0, 0), Some(true));
    assert_eq!(image.get::<bool>(1, 0), Some(false));
    assert_eq!(image.get::<bool>(0, 1), Some(false));
    assert_eq!(image.get::<bool>(1, 1), Some(true));
}

#[test]
fn test_decode_skips_comments_and_blank_lines() {
    let data = b"P2\n# created by hand\n\n   # indented comment\n3 1\n# max follows\n15\n0 # inline\n7 15\n";
    let image = decode(data).unwrap();

    assert_eq!(image.size(), (3, 1));
    assert_eq!(image.max_value(), Some(15));
    assert_eq!(image.get::<u8>(0, 0), Some(0));
    assert_eq!(image.get::<u8>(1, 0), Some(7));
    assert_eq!(image.get::<u8>(2, 0), Some(15));
}

#[test]
fn test_decode_compact_plain_bitmap_rows() {
    let image = decode(b"P1\n4 2\n0110\n1001\n").unwrap();

    let row0: Vec<bool> = (0..4).map(|x| image.get::<bool>(x, 0).unwrap()).collect();
    assert_eq!(row0, vec![false, true, true, false]);
    assert_eq!(image.get::<bool>(3, 1), Some(true));
}

#[test]
fn test_decode_all_six_magic_numbers() {
    let cases: [(&[u8], Variant, Encoding); 6] = [
        (b"P1\n1 1\n1\n", Variant::Bitmap, Encoding::Ascii),
        (b"P2\n1 1\n9\n4\n", Variant::Gray, Encoding::Ascii),
        (b"P3\n1 1\n9\n1 2 3\n", Variant::Color, Encoding::Ascii),
        (b"P4\n1 1\n\x80", Variant::Bitmap, Encoding::Binary),
        (b"P5\n1 1\n9\n\x04", Variant::Gray, Encoding::Binary),
        (b"P6\n1 1\n9\n\x01\x02\x03", Variant::Color, Encoding::Binary),
    ];

    for (data, variant, encoding) in cases {
        let image = decode(data).unwrap();
        assert_eq!(image.variant(), variant);
        assert_eq!(image.encoding(), encoding);
    }
}

#[test]
fn test_decode_binary_color() {
    let image = decode(b"P6\n2 1\n255\n\x0a\x14\x1e\xff\x00\x80").unwrap();

    assert_eq!(image.get::<Rgb>(0, 0), Some(Rgb::new(10, 20, 30)));
    assert_eq!(image.get::<Rgb>(1, 0), Some(Rgb::new(255, 0, 128)));
}

#[test]
fn test_decode_binary_bitmap_rows_are_byte_aligned() {
    // 10 pixels per row -> 2 bytes per row
    let data = b"P4\n10 2\n\xc0\x40\x00\x80";
    let image = decode(data).unwrap();

    assert_eq!(image.get::<bool>(0, 0), Some(true));
    assert_eq!(image.get::<bool>(1, 0), Some(true));
    assert_eq!(image.get::<bool>(2, 0), Some(false));
    assert_eq!(image.get::<bool>(9, 0), Some(true));
    assert_eq!(image.get::<bool>(8, 1), Some(true));
    assert_eq!(image.get::<bool>(0, 1), Some(false));
}

#[test]
fn test_decode_binary_data_is_not_whitespace_trimmed() {
    // First sample byte is a newline (10) and must not be skipped
    let image = decode(b"P5\n2 1\n255\n\n\x20").unwrap();

    assert_eq!(image.get::<u8>(0, 0), Some(10));
    assert_eq!(image.get::<u8>(1, 0), Some(32));
}

#[test]
fn test_unknown_magic_number() {
    match decode(b"P7\n1 1\n") {
        Err(PnmError::MagicNumberError(token)) => assert_eq!(token, "P7"),
        other => panic!("expected MagicNumberError, got {:?}", other),
    }
    assert!(matches!(decode(b""), Err(PnmError::MagicNumberError(_))));
}

#[test]
fn test_bad_dimensions() {
    assert!(matches!(decode(b"P1\n2\n1 0\n"), Err(PnmError::DimensionError(_))));
    assert!(matches!(decode(b"P1\n0 2\n"), Err(PnmError::DimensionError(_))));
    assert!(matches!(decode(b"P1\nwide 2\n"), Err(PnmError::DimensionError(_))));
    assert!(matches!(decode(b"P1\n"), Err(PnmError::DimensionError(_))));
}

#[test]
fn test_bad_max_value() {
    assert!(matches!(decode(b"P2\n1 1\n"), Err(PnmError::DimensionError(_))));
    assert!(matches!(decode(b"P2\n1 1\n0\n0\n"), Err(PnmError::DimensionError(_))));
    assert!(matches!(decode(b"P2\n1 1\nmax\n0\n"), Err(PnmError::DimensionError(_))));
    assert!(matches!(decode(b"P5\n1 1\n65535\n\x00\x00"), Err(PnmError::DimensionError(_))));
}

#[test]
fn test_bad_sample_tokens() {
    assert!(matches!(decode(b"P1\n2 1\n1 2\n"), Err(PnmError::SampleParseError(_))));
    assert!(matches!(decode(b"P2\n2 1\n255\n1 x\n"), Err(PnmError::SampleParseError(_))));
    assert!(matches!(decode(b"P3\n1 1\n100\n1 2 101\n"), Err(PnmError::SampleParseError(_))));
    assert!(matches!(decode(b"P5\n1 1\n100\n\xc8"), Err(PnmError::SampleParseError(_))));
}

#[test]
fn test_short_data_is_zero_padded_by_default() {
    let image = decode(b"P2\n3 2\n255\n1 2 3\n4\n").unwrap();

    assert_eq!(image.get::<u8>(0, 1), Some(4));
    assert_eq!(image.get::<u8>(1, 1), Some(0));
    assert_eq!(image.get::<u8>(2, 1), Some(0));

    let binary = decode(b"P6\n2 1\n255\n\x01\x02\x03\x04").unwrap();
    assert_eq!(binary.get::<Rgb>(1, 0), Some(Rgb::new(4, 0, 0)));
}

#[test]
fn test_short_data_fails_in_strict_mode() {
    let reader = PnmReader::new(DecodeOptions::strict());

    match reader.read(b"P2\n3 2\n255\n1 2 3\n4\n") {
        Err(PnmError::ShapeError { expected, found }) => {
            assert_eq!(expected, 6);
            assert_eq!(found, 4);
        }
        other => panic!("expected ShapeError, got {:?}", other),
    }

    assert!(matches!(
        reader.read(b"P4\n9 2\n\xff\x80\xff"),
        Err(PnmError::SampleParseError(_))
    ));
}

#[test]
fn test_trailing_tokens_are_ignored() {
    let image = decode(b"P1\n1 1\n1 0 1\n").unwrap();
    assert_eq!(image.size(), (1, 1));
    assert_eq!(image.get::<bool>(0, 0), Some(true));
}

#[test]
fn test_crlf_header() {
    let image = decode(b"P2\r\n2 1\r\n255\r\n5 6\r\n").unwrap();
    assert_eq!(image.get::<u8>(1, 0), Some(6));
}

#[test]
fn test_overflowing_dimensions_are_rejected() {
    let headers: [&[u8]; 3] = [
        b"P4\n18446744073709551615 1\n",
        b"P5\n4294967296 4294967297\n255\n",
        b"P3\n6148914691236517206 1\n255\n",
    ];
    for data in headers {
        assert!(
            matches!(decode(data), Err(PnmError::DimensionError(_))),
            "header {:?} should be rejected",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn test_oversized_image_is_rejected_before_padding() {
    // 10^10 samples declared by a 20-byte file
    let result = decode(b"P5\n100000 100000\n255\n");
    assert!(matches!(result, Err(PnmError::DimensionError(_))));

    let side = 1usize << 14;
    assert_eq!(side * side, MAX_SAMPLE_COUNT);
    let over_limit = format!("P5\n{} {}\n255\n", side, side + 1);
    assert!(matches!(decode(over_limit.as_bytes()), Err(PnmError::DimensionError(_))));

    // Color counts three samples per pixel
    let color = format!("P6\n{} {}\n255\n", side, side / 2);
    assert!(matches!(decode(color.as_bytes()), Err(PnmError::DimensionError(_))));
}

#[test]
fn test_new_image_rejects_oversized_dimensions() {
    let result = RasterImage::new(Variant::Color, Encoding::Binary, usize::MAX, 2);
    assert!(matches!(result, Err(PnmError::DimensionError(_))));
}
