use super::*;

#[test]
fn zoom_out_six_times_clamps_to_floor() {
    let mut style = StyleState::default();
    assert_eq!(style.zoom(), 1.0);

    for _ in 0..6 {
        style.set_zoom(-ZOOM_STEP);
    }

    assert_eq!(style.zoom(), MIN_ZOOM);
}

#[test]
fn zoom_never_drops_below_floor() {
    let mut style = StyleState::default();
    for _ in 0..100 {
        style.set_zoom(-ZOOM_STEP);
        assert!(style.zoom() >= MIN_ZOOM);
    }
    assert!(!style.set_zoom(-ZOOM_STEP));
}

#[test]
fn zoom_steps_round_trip_exactly() {
    let mut style = StyleState::default();
    for _ in 0..10 {
        style.set_zoom(ZOOM_STEP);
    }
    assert_eq!(style.zoom(), 2.0);
    for _ in 0..10 {
        style.set_zoom(-ZOOM_STEP);
    }
    assert_eq!(style.zoom(), 1.0);
    assert_eq!(style.zoom_percent(), 100);
}

#[test]
fn zoom_has_no_ceiling() {
    let mut style = StyleState::default();
    style.set_zoom(50.0);
    assert_eq!(style.zoom(), 51.0);
}

#[test]
fn font_size_scales_with_zoom() {
    let mut style = StyleState::default();
    style.set_zoom(0.5);
    assert!((style.font_size() - 21.0).abs() < 1e-4);
}

#[test]
fn theme_sets_background_and_foreground_together() {
    let mut style = StyleState::default();
    style.set_background(BackgroundColor::Pink);

    assert!(style.set_theme(ThemeKind::Dark));
    assert_eq!(style.background, Rgb::new(0x3c, 0x3f, 0x41));
    assert_eq!(style.foreground, Rgb::new(0xff, 0xff, 0xff));
    assert_eq!(style.theme, ThemeKind::Dark);

    assert!(style.set_theme(ThemeKind::Light));
    assert_eq!(style.background, Rgb::new(0xff, 0xff, 0xff));
    assert_eq!(style.foreground, Rgb::new(0, 0, 0));
}

#[test]
fn background_is_plain_assignment() {
    let mut style = StyleState::default();
    assert!(style.set_background(BackgroundColor::LightYellow));
    assert!(!style.set_background(BackgroundColor::LightYellow));
    assert_eq!(style.background.to_hex(), "#ffffe0");

    style.set_background(BackgroundColor::Rgb(Rgb::new(1, 2, 3)));
    assert_eq!(style.background, Rgb::new(1, 2, 3));
}

#[test]
fn background_parse_accepts_ids_labels_and_hex() {
    assert_eq!(
        BackgroundColor::parse("lightYellow"),
        Some(BackgroundColor::LightYellow)
    );
    assert_eq!(
        BackgroundColor::parse("Light Gray"),
        Some(BackgroundColor::LightGray)
    );
    assert_eq!(
        BackgroundColor::parse("#102030"),
        Some(BackgroundColor::Rgb(Rgb::new(0x10, 0x20, 0x30)))
    );
    assert_eq!(BackgroundColor::parse("mauve"), None);
    assert_eq!(BackgroundColor::parse("#12"), None);
}

#[test]
fn flag_setters_report_changes() {
    let mut style = StyleState::default();
    assert!(style.wrap);
    assert!(style.set_bold(true));
    assert!(!style.set_bold(true));
    assert!(style.set_italic(true));
    assert!(style.set_wrap(false));
    assert!(style.bold && style.italic && !style.wrap);
}

#[test]
fn invalid_base_font_size_falls_back_to_default() {
    let style = StyleState::new(-3.0, true, ThemeKind::Light);
    assert_eq!(style.font_size(), DEFAULT_FONT_SIZE);
}
