use tinct_color::{
    alpha, contrast_ratio, hex_to_rgba, is_dark, is_light, lighten, mix, parse_color,
};

#[test]
fn opaque_hex_colors_round_trip_through_rgba() {
    let samples = [
        "#000000", "#ffffff", "#f97316", "#22c55e", "#a855f7", "#ef4444", "#1f2937", "#e5e7eb",
        "#0f00ab", "#123456",
    ];
    for hex in samples {
        let rgba = hex_to_rgba(hex).unwrap();
        assert_eq!(rgba.a, 1.0, "{hex}");
        assert_eq!(rgba.to_hex(), hex, "{hex}");
    }
}

#[test]
fn every_input_form_normalizes_to_the_same_color() {
    let from_hex = parse_color("#ff8040").unwrap();
    let from_rgb = parse_color("rgb(255, 128, 64)").unwrap();
    assert_eq!(from_hex, from_rgb);

    // HSL goes through rounding, so allow one unit per channel.
    let from_hsl = parse_color("hsl(20, 100%, 63%)").unwrap();
    assert!((from_hsl.r - from_hex.r).abs() <= 2.0);
    assert!((from_hsl.g - from_hex.g).abs() <= 2.0);
    assert!((from_hsl.b - from_hex.b).abs() <= 2.0);
}

#[test]
fn transforms_compose_across_input_forms() {
    // The same lightening applied to equivalent inputs agrees.
    assert_eq!(
        lighten("#808080", 10.0).unwrap(),
        lighten("rgb(128, 128, 128)", 10.0).unwrap()
    );
}

#[test]
fn clamping_saturates_instead_of_overflowing() {
    assert_eq!(lighten("#000000", 1000.0).unwrap(), "rgb(255, 255, 255)");
    assert_eq!(alpha("#ff0000", 5.0).unwrap(), "rgb(255, 0, 0)");
}

#[test]
fn wcag_anchors_hold() {
    let max = contrast_ratio("#ffffff", "#000000").unwrap();
    assert!((max - 21.0).abs() < 1e-4);

    let min = contrast_ratio("#888888", "#888888").unwrap();
    assert!((min - 1.0).abs() < 1e-6);

    assert!(is_light("#ffffff").unwrap());
    assert!(is_dark("#000000").unwrap());
}

#[test]
fn mix_interpolates_toward_the_first_color() {
    assert_eq!(mix("#ffffff", "#000000", 25.0).unwrap(), "rgb(64, 64, 64)");
    assert_eq!(mix("#ffffff", "#000000", 75.0).unwrap(), "rgb(191, 191, 191)");
}
