use super::*;

#[test]
fn test_default_palette_is_unset() {
    let palette = CustomPalette::default();
    for i in 0..CUSTOM_PALETTE_LEN {
        assert_eq!(palette.get(i), None);
    }
    assert_eq!(palette.to_packed(), [0; CUSTOM_PALETTE_LEN]);
}

#[test]
fn test_set_out_of_range_is_rejected() {
    let mut palette = CustomPalette::default();
    assert!(!palette.set(CUSTOM_PALETTE_LEN, Some(Rgb::RED)));
    assert!(palette.set(7, Some(Rgb::RED)));
    assert_eq!(palette.get(7), Some(Rgb::RED));
    assert_eq!(palette.get(99), None);
}

#[test]
fn test_from_packed_short_array_zero_fills() {
    let palette = CustomPalette::from_packed(&[0xFF12_3456, 0, 0x00AB_CDEF]);
    assert_eq!(palette.get(0), Some(Rgb::new(0x123456)));
    assert_eq!(palette.get(1), None);
    assert_eq!(palette.get(2), Some(Rgb::new(0xABCDEF)));
    for i in 3..CUSTOM_PALETTE_LEN {
        assert_eq!(palette.get(i), None);
    }
}

#[test]
fn test_from_packed_long_array_is_cut() {
    let values: Vec<i64> = (1..=12).map(|v| 0xFF00_0000 | v).collect();
    let palette = CustomPalette::from_packed(&values);
    assert_eq!(palette.get(7), Some(Rgb::new(8)));
}

#[test]
fn test_paint_source_colors() {
    let mut palette = CustomPalette::default();
    palette.set(2, Some(Rgb::WHITE));

    assert_eq!(PaintSource::Eraser.color(&palette), None);
    assert_eq!(
        PaintSource::Standard(0).color(&palette),
        Some(Rgb::new(0x993333))
    );
    assert_eq!(PaintSource::Custom(2).color(&palette), Some(Rgb::WHITE));
    assert_eq!(PaintSource::Custom(3).color(&palette), None);
    assert_eq!(PaintSource::Standard(STANDARD_PALETTE_LEN).color(&palette), None);
}

#[test]
fn test_legacy_index_mapping() {
    assert_eq!(PaintSource::from_legacy_index(0), Some(PaintSource::Standard(0)));
    assert_eq!(PaintSource::from_legacy_index(15), Some(PaintSource::Standard(15)));
    assert_eq!(PaintSource::from_legacy_index(16), Some(PaintSource::Custom(0)));
    assert_eq!(PaintSource::from_legacy_index(23), Some(PaintSource::Custom(7)));
    assert_eq!(PaintSource::from_legacy_index(24), None);
}
