use super::*;
use tempfile::tempdir;

#[test]
fn parse_simple_chords() {
    assert_eq!(
        parse_keybinding("ctrl+s"),
        Some(Key::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
    );
    assert_eq!(
        parse_keybinding("Ctrl + Shift + S"),
        Some(Key::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(
        parse_keybinding("F10"),
        Some(Key::new(KeyCode::F(10), KeyModifiers::NONE))
    );
    assert_eq!(
        parse_keybinding("alt+pageup"),
        Some(Key::new(KeyCode::PageUp, KeyModifiers::ALT))
    );
}

#[test]
fn uppercase_letter_implies_shift() {
    assert_eq!(
        parse_keybinding("ctrl+S"),
        Some(Key::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
}

#[test]
fn plus_key_is_supported() {
    assert_eq!(
        parse_keybinding("ctrl++"),
        Some(Key::new(KeyCode::Char('+'), KeyModifiers::CONTROL))
    );
    assert_eq!(
        parse_keybinding("ctrl+plus"),
        Some(Key::new(KeyCode::Char('+'), KeyModifiers::CONTROL))
    );
}

#[test]
fn invalid_chords_are_rejected() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+shift"), None);
    assert_eq!(parse_keybinding("ctrl+abc"), None);
    assert_eq!(parse_keybinding("fx"), None);
}

#[test]
fn single_f_is_a_letter() {
    assert_eq!(
        parse_keybinding("alt+f"),
        Some(Key::new(KeyCode::Char('f'), KeyModifiers::ALT))
    );
}

#[test]
fn ensure_creates_default_file_once() {
    let dir = tempdir().unwrap();
    let path = settings_path_in(dir.path());

    ensure_settings_file_at(&path).unwrap();
    assert!(path.exists());
    let loaded = load_settings_from(&path).unwrap();
    assert!(loaded.keybindings.is_empty());
    assert_eq!(loaded.editor.tab_size, Some(4));

    std::fs::write(&path, r#"{"editor":{"word_wrap":false}}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.editor.word_wrap, Some(false));
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r##"{"keybindings":[{"key":"ctrl+k","command":"clearAll"}],"theme":{"status_bg":"#102030"}}"##,
    )
    .unwrap();

    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.keybindings.len(), 1);
    assert_eq!(loaded.keybindings[0].context, None);
    assert_eq!(loaded.theme.status_bg.as_deref(), Some("#102030"));
    assert_eq!(loaded.editor.font_size, Some(14.0));
}

#[test]
fn invalid_or_missing_file_is_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert!(load_settings_from(&path).is_none());

    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}
