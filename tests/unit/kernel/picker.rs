use super::*;

#[test]
fn test_default_picker_is_red() {
    let picker = ColorPicker::default();
    assert_eq!(picker.current_color(), Rgb::RED);
    assert_eq!(picker.current_color(), DEFAULT_PICKER_COLOR);
}

#[test]
fn test_set_from_rgb_initializes_hsv() {
    let picker = ColorPicker::from_rgb(Rgb::new(0x808080));
    assert_eq!(picker.hue(), 0.0);
    assert_eq!(picker.saturation(), 0.0);
    assert!((picker.value() - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(picker.current_color(), Rgb::new(0x808080));
}

#[test]
fn test_saturation_value_pointer_maps_corners() {
    let mut picker = ColorPicker::default();

    picker.update_from_saturation_value_pointer(0.0, 0.0, 100.0);
    assert_eq!((picker.saturation(), picker.value()), (0.0, 1.0));
    assert_eq!(picker.current_color(), Rgb::WHITE);

    picker.update_from_saturation_value_pointer(100.0, 100.0, 100.0);
    assert_eq!((picker.saturation(), picker.value()), (1.0, 0.0));
    assert_eq!(picker.current_color(), Rgb::BLACK);

    picker.update_from_saturation_value_pointer(50.0, 25.0, 100.0);
    assert_eq!((picker.saturation(), picker.value()), (0.5, 0.75));
}

#[test]
fn test_pointer_outside_box_is_clamped() {
    let mut picker = ColorPicker::default();
    picker.update_from_saturation_value_pointer(-40.0, 260.0, 100.0);
    assert_eq!((picker.saturation(), picker.value()), (0.0, 0.0));

    picker.update_from_hue_pointer(-3.0, 100.0);
    assert_eq!(picker.hue(), 0.0);
    picker.update_from_hue_pointer(130.0, 100.0);
    assert_eq!(picker.hue(), 1.0);
}

#[test]
fn test_hue_pointer_selects_hue() {
    let mut picker = ColorPicker::default();
    picker.update_from_hue_pointer(100.0 / 3.0, 100.0);
    let (r, g, b) = picker.current_color().channels();
    assert!(r <= 1 && g >= 254 && b <= 1, "expected green, got {r} {g} {b}");
}

#[test]
fn test_degenerate_box_size_is_ignored() {
    let mut picker = ColorPicker::default();
    picker.update_from_saturation_value_pointer(10.0, 10.0, 0.0);
    picker.update_from_hue_pointer(10.0, f64::NAN);
    assert_eq!(picker, ColorPicker::default());
}
