use super::*;
use crate::core::event::Key;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn ctrl_shift_letter_becomes_lowercase_chord() {
    let event = ct::KeyEvent::new(
        ct::KeyCode::Char('S'),
        ct::KeyModifiers::CONTROL | ct::KeyModifiers::SHIFT,
    );
    let key = Key::from(into_key_event(event));
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('s')));
}

#[test]
fn release_kind_is_preserved() {
    let event = ct::KeyEvent::new_with_kind(
        ct::KeyCode::Enter,
        ct::KeyModifiers::NONE,
        ct::KeyEventKind::Release,
    );
    assert_eq!(into_key_event(event).kind, KeyEventKind::Release);
}

#[test]
fn unsupported_keys_map_to_unknown() {
    let event = ct::KeyEvent::new(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE);
    assert_eq!(into_key_event(event).code, KeyCode::Unknown);
}

#[test]
fn paste_and_resize_pass_through() {
    assert_eq!(
        into_input_event(ct::Event::Paste("a\r\nb".to_string())),
        InputEvent::Paste("a\r\nb".to_string())
    );
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        InputEvent::Resize(80, 24)
    );
}

#[test]
fn mouse_events_keep_position_and_modifiers() {
    let event = ct::MouseEvent {
        kind: ct::MouseEventKind::Drag(ct::MouseButton::Left),
        column: 12,
        row: 3,
        modifiers: ct::KeyModifiers::SHIFT,
    };
    let converted = into_mouse_event(event);
    assert_eq!(converted.kind, MouseEventKind::Drag(MouseButton::Left));
    assert_eq!((converted.column, converted.row), (12, 3));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
}
