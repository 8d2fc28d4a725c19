use super::*;
use proptest::prelude::*;

macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        assert!(
            ($a - $b).abs() < 1e-4,
            "assertion failed: `(left == right)` (left: `{:?}`, right: `{:?}`)",
            $a,
            $b
        );
    };
}

#[test]
fn test_constructors_clamp() {
    let color = hsba(-0.5, 1.5, 0.5, 2.0);
    assert_eq!(color.h, 0.0);
    assert_eq!(color.s, 1.0);
    assert_eq!(color.b, 0.5);
    assert_eq!(color.a, 1.0);

    let color = rgba(f32::NAN, -1.0, 0.25, f32::INFINITY);
    assert_eq!(color.r, 0.0);
    assert_eq!(color.g, 0.0);
    assert_eq!(color.b, 0.25);
    assert_eq!(color.a, 1.0);
}

#[test]
fn test_hsba_to_rgba_primaries() {
    let red = hsba(0.0, 1.0, 1.0, 1.0).to_rgba();
    assert_eq!(red, rgba(1.0, 0.0, 0.0, 1.0));

    let green = hsba(1.0 / 3.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(green.r, 0.0);
    assert_approx_eq!(green.g, 1.0);
    assert_approx_eq!(green.b, 0.0);

    let blue = hsba(2.0 / 3.0, 1.0, 1.0, 0.5).to_rgba();
    assert_approx_eq!(blue.r, 0.0);
    assert_approx_eq!(blue.g, 0.0);
    assert_approx_eq!(blue.b, 1.0);
    assert_approx_eq!(blue.a, 0.5);

    // Hue 1.0 is the same angle as hue 0.0.
    let wrapped = hsba(1.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(wrapped.r, 1.0);
    assert_approx_eq!(wrapped.g, 0.0);
    assert_approx_eq!(wrapped.b, 0.0);
}

#[test]
fn test_hsba_to_rgba_secondaries() {
    let yellow = hsba(1.0 / 6.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(yellow.r, 1.0);
    assert_approx_eq!(yellow.g, 1.0);
    assert_approx_eq!(yellow.b, 0.0);

    let cyan = hsba(0.5, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(cyan.r, 0.0);
    assert_approx_eq!(cyan.g, 1.0);
    assert_approx_eq!(cyan.b, 1.0);

    let magenta = hsba(5.0 / 6.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(magenta.r, 1.0);
    assert_approx_eq!(magenta.g, 0.0);
    assert_approx_eq!(magenta.b, 1.0);
}

#[test]
fn test_hsba_to_rgba_greys() {
    let grey = hsba(0.42, 0.0, 0.6, 1.0).to_rgba();
    assert_approx_eq!(grey.r, 0.6);
    assert_approx_eq!(grey.g, 0.6);
    assert_approx_eq!(grey.b, 0.6);

    let black = hsba(0.42, 0.8, 0.0, 1.0).to_rgba();
    assert_eq!(black, Rgba::BLACK);
}

#[test]
fn test_rgba_to_hsba() {
    let orange = rgba(1.0, 0.5, 0.0, 0.8).to_hsba();
    assert_approx_eq!(orange.h, 30.0 / 360.0);
    assert_approx_eq!(orange.s, 1.0);
    assert_approx_eq!(orange.b, 1.0);
    assert_approx_eq!(orange.a, 0.8);

    let rose = rgba(1.0, 0.0, 0.5, 1.0).to_hsba();
    assert_approx_eq!(rose.h, 330.0 / 360.0);

    let dim_teal = rgba(0.0, 0.4, 0.4, 1.0).to_hsba();
    assert_approx_eq!(dim_teal.h, 0.5);
    assert_approx_eq!(dim_teal.s, 1.0);
    assert_approx_eq!(dim_teal.b, 0.4);
}

#[test]
fn test_achromatic_reports_zero_hue() {
    let grey = rgba(0.3, 0.3, 0.3, 1.0).to_hsba();
    assert_eq!(grey.h, 0.0);
    assert_eq!(grey.s, 0.0);
    assert_approx_eq!(grey.b, 0.3);

    let black = Rgba::BLACK.to_hsba();
    assert_eq!(black, hsba(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_to_hsba_preserving_keeps_hue() {
    let previous = hsba(0.6, 0.7, 0.8, 1.0);

    let grey = rgba(0.5, 0.5, 0.5, 1.0).to_hsba_preserving(previous);
    assert_eq!(grey.h, 0.6);
    assert_eq!(grey.s, 0.0);

    let black = Rgba::BLACK.to_hsba_preserving(previous);
    assert_eq!(black.h, 0.6);
    assert_eq!(black.b, 0.0);

    // A chromatic color reports its own hue.
    let red = rgba(1.0, 0.0, 0.0, 1.0).to_hsba_preserving(previous);
    assert_eq!(red.h, 0.0);

    // Hue 1.0 survives the trip through RGB.
    let full_turn = hsba(1.0, 1.0, 1.0, 1.0);
    let back = full_turn.to_rgba().to_hsba_preserving(full_turn);
    assert_eq!(back.h, 1.0);
}

#[test]
fn test_hue_distance() {
    assert_approx_eq!(hue_distance(0.0, 1.0), 0.0);
    assert_approx_eq!(hue_distance(0.1, 0.9), 0.2);
    assert_approx_eq!(hue_distance(0.25, 0.75), 0.5);
    assert_approx_eq!(hue_distance(0.3, 0.3), 0.0);
}

#[test]
fn test_luminance() {
    assert_eq!(Rgba::WHITE.luminance(), 1.0);
    assert_eq!(Rgba::BLACK.luminance(), 0.0);
    assert_approx_eq!(rgba(1.0, 0.0, 0.0, 1.0).luminance(), 0.2126);
    assert_approx_eq!(rgba(0.0, 1.0, 0.0, 1.0).luminance(), 0.7152);
    assert_approx_eq!(rgba(0.0, 0.0, 1.0, 1.0).luminance(), 0.0722);
    // Alpha does not take part.
    assert_eq!(Rgba::WHITE.with_alpha(0.0).luminance(), 1.0);
}

#[test]
fn test_contrasting() {
    assert_eq!(Rgba::WHITE.contrasting("white", "black", 0.5), "black");
    assert_eq!(Rgba::BLACK.contrasting("white", "black", 0.5), "white");
    // Pure red is a dark background at the default threshold.
    assert_eq!(
        rgba(1.0, 0.0, 0.0, 1.0).contrasting(Rgba::WHITE, Rgba::BLACK, 0.5),
        Rgba::WHITE
    );
    // Luminance equal to the threshold is not "above" it.
    assert_eq!(
        rgba(0.5, 0.5, 0.5, 1.0).contrasting("light", "dark", 0.5),
        "light"
    );
}

#[test]
fn test_approx_eq() {
    let red = rgba(1.0, 0.0, 0.0, 1.0);
    assert!(red.approx_eq(&rgba(1.0, 0.0, 0.0, 1.0), 0.0));
    assert!(!red.approx_eq(&rgba(1.0, 0.0, 0.0, 0.99), 0.0));
    assert!(red.approx_eq(&rgba(1.0, 0.0, 0.0, 0.99), 0.02));
    assert!(!red.approx_eq(&rgba(0.9, 0.0, 0.0, 1.0), 0.05));
}

#[test]
fn test_hex_parse() {
    let color = Rgba::try_from("#ff8000").unwrap();
    assert_approx_eq!(color.r, 1.0);
    assert_approx_eq!(color.g, 128.0 / 255.0);
    assert_approx_eq!(color.b, 0.0);
    assert_approx_eq!(color.a, 1.0);

    let color = Rgba::try_from("  0000ff80 ").unwrap();
    assert_approx_eq!(color.b, 1.0);
    assert_approx_eq!(color.a, 128.0 / 255.0);

    let color = Rgba::try_from("#F0A").unwrap();
    assert_approx_eq!(color.r, 1.0);
    assert_approx_eq!(color.g, 0.0);
    assert_approx_eq!(color.b, 170.0 / 255.0);

    let color = Rgba::try_from("#fff8").unwrap();
    assert_approx_eq!(color.a, 136.0 / 255.0);
}

#[test]
fn test_hex_parse_errors() {
    assert!(Rgba::try_from("").is_err());
    assert!(Rgba::try_from("#").is_err());
    assert!(Rgba::try_from("#12345").is_err());
    assert!(Rgba::try_from("#gg0000").is_err());
    assert!(Rgba::try_from("#+f0000").is_err());
    assert!(Rgba::try_from("rgb(1, 2, 3)").is_err());

    let err = Rgba::try_from("#12").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid hex color `#12`, expected 3, 4, 6 or 8 digits"
    );
}

#[test]
fn test_to_hex() {
    assert_eq!(rgba(1.0, 0.5, 0.0, 1.0).to_hex(), "#ff8000");
    assert_eq!(Rgba::CLEAR.to_hex(), "#00000000");
    assert_eq!(Rgba::WHITE.with_alpha(0.5).to_hex(), "#ffffff80");
    assert_eq!(Rgba::try_from("#3a7bd5").unwrap().to_hex(), "#3a7bd5");
}

#[test]
fn test_serde() {
    let color = rgba(1.0, 0.5, 0.0, 1.0);
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(json, r#"{"r":1.0,"g":0.5,"b":0.0,"a":1.0}"#);
    assert_eq!(serde_json::from_str::<Rgba>(&json).unwrap(), color);

    let from_hex: Rgba = serde_json::from_str(r##""#ff8000""##).unwrap();
    assert_eq!(from_hex.to_hex(), "#ff8000");

    let without_alpha: Rgba = serde_json::from_str(r#"{"r":0.2,"g":0.4,"b":0.6}"#).unwrap();
    assert_eq!(without_alpha.a, 1.0);

    let from_hsb: Rgba = serde_json::from_str(r#"{"h":0.0,"s":1.0,"b":1.0}"#).unwrap();
    assert_eq!(from_hsb, rgba(1.0, 0.0, 0.0, 1.0));

    let clamped: Hsba = serde_json::from_str(r#"{"h":1.5,"s":-1.0,"b":0.5,"a":0.5}"#).unwrap();
    assert_eq!(clamped, hsba(1.0, 0.0, 0.5, 0.5));

    assert!(serde_json::from_str::<Rgba>(r##""#nothex""##).is_err());
    assert!(serde_json::from_str::<Rgba>(r#"{"x":1}"#).is_err());
}

proptest! {
    #[test]
    fn prop_hsba_round_trip(
        h in 0.0f32..=1.0,
        s in 1e-3f32..=1.0,
        b in 1e-3f32..=1.0,
        a in 0.0f32..=1.0,
    ) {
        let original = hsba(h, s, b, a);
        let back = original.to_rgba().to_hsba();

        prop_assert!(hue_distance(original.h, back.h) <= 1e-4, "{:?} -> {:?}", original, back);
        prop_assert!((original.s - back.s).abs() <= 1e-4, "{:?} -> {:?}", original, back);
        prop_assert!((original.b - back.b).abs() <= 1e-4, "{:?} -> {:?}", original, back);
        prop_assert_eq!(original.a, back.a);
    }

    #[test]
    fn prop_preserving_round_trip_is_exact_on_hue(
        h in 0.0f32..=1.0,
        s in 1e-3f32..=1.0,
        b in 1e-3f32..=1.0,
    ) {
        let original = hsba(h, s, b, 1.0);
        let back = original.to_rgba().to_hsba_preserving(original);
        prop_assert_eq!(back.h, original.h);
    }

    #[test]
    fn prop_rgba_components_stay_in_unit_range(
        h in -1.0f32..=2.0,
        s in -1.0f32..=2.0,
        b in -1.0f32..=2.0,
        a in -1.0f32..=2.0,
    ) {
        let color = Hsba { h, s, b, a }.to_rgba();
        for c in [color.r, color.g, color.b, color.a] {
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }
}
