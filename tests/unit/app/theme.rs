use super::*;
use crate::kernel::BackgroundColor;

#[test]
fn dark_chrome_uses_dark_gray() {
    let theme = UiTheme::for_kind(ThemeKind::Dark);
    assert_eq!(theme.menu_bar_bg, Color::Rgb(0x2b, 0x2b, 0x2b));
    assert_eq!(theme.status_bg, Color::Rgb(0x2b, 0x2b, 0x2b));
    assert_eq!(theme.menu_bar_fg, Color::Rgb(0xff, 0xff, 0xff));
}

#[test]
fn light_chrome_is_white() {
    let theme = UiTheme::default();
    assert_eq!(theme.menu_bar_bg, Color::Rgb(0xff, 0xff, 0xff));
    assert_eq!(theme.color_support(), TerminalColorSupport::TrueColor);
}

#[test]
fn settings_override_named_and_hex_colors() {
    let settings = ThemeSettings {
        menu_bar_bg: Some("cyan".to_string()),
        selection_bg: Some("#102030".to_string()),
        error_fg: Some("not-a-color".to_string()),
        ..Default::default()
    };
    let mut theme = UiTheme::default();
    let error_before = theme.error_fg;
    theme.apply_settings(&settings);

    assert_eq!(theme.menu_bar_bg, Color::Indexed(6));
    assert_eq!(theme.selection_bg, Color::Rgb(0x10, 0x20, 0x30));
    assert_eq!(theme.error_fg, error_before);
}

#[test]
fn ansi256_fallback_maps_chrome_to_indexed_colors() {
    let theme = UiTheme::resolve(
        ThemeKind::Dark,
        &ThemeSettings::default(),
        TerminalColorSupport::Ansi256,
    );
    assert_eq!(theme.menu_bar_bg, Color::Indexed(235));
    assert_eq!(theme.menu_bar_fg, Color::Indexed(15));
    assert_eq!(theme.color(Rgb::new(0, 0, 0)), Color::Indexed(0));
}

#[test]
fn ansi16_fallback_keeps_basic_indices() {
    let settings = ThemeSettings {
        accent_fg: Some("light_cyan".to_string()),
        ..Default::default()
    };
    let theme = UiTheme::resolve(ThemeKind::Dark, &settings, TerminalColorSupport::Ansi16);
    assert_eq!(theme.menu_bar_bg, Color::Indexed(0));
    assert_eq!(theme.accent_fg, Color::Indexed(14));
    assert_eq!(theme.color(BackgroundColor::Cyan.rgb()), Color::Indexed(14));
}

#[test]
fn text_style_carries_colors_and_font_flags() {
    let mut style = StyleState::default();
    style.set_background(BackgroundColor::LightYellow);
    style.set_bold(true);
    style.set_italic(true);

    let out = UiTheme::default().text_style(&style);

    assert_eq!(out.bg, Some(Color::Rgb(0xff, 0xff, 0xe0)));
    assert_eq!(out.fg, Some(Color::Rgb(0, 0, 0)));
    assert!(out.add_modifier.contains(Modifier::BOLD));
    assert!(out.add_modifier.contains(Modifier::ITALIC));
}

#[test]
fn parse_color_rejects_garbage() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    assert_eq!(parse_color("Dark_Gray"), Some(Color::Indexed(8)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn color_support_parsing_accepts_aliases() {
    assert_eq!(
        parse_color_support(" 24bit "),
        Some(TerminalColorSupport::TrueColor)
    );
    assert_eq!(
        parse_color_support("256"),
        Some(TerminalColorSupport::Ansi256)
    );
    assert_eq!(
        parse_color_support("basic"),
        Some(TerminalColorSupport::Ansi16)
    );
    assert_eq!(parse_color_support("many"), None);
}
