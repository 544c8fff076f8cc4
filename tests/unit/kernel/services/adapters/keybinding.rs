use super::*;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn editor_has_cursor_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::Left)),
        Some(&Command::CursorLeft)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::shift(KeyCode::End)),
        Some(&Command::SelectLineEnd)
    );
}

#[test]
fn global_commands_fall_through_in_editor() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('s'))),
        Some(&Command::Save)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Left)),
        None
    );
}

#[test]
fn file_and_edit_defaults() {
    let service = KeybindingService::new();
    let global = KeybindingContext::Global;
    assert_eq!(
        service.resolve(global, &Key::ctrl_shift(KeyCode::Char('s'))),
        Some(&Command::SaveAs)
    );
    assert_eq!(
        service.resolve(global, &Key::ctrl(KeyCode::Char('q'))),
        Some(&Command::Exit)
    );
    assert_eq!(
        service.resolve(global, &Key::ctrl(KeyCode::Char('l'))),
        Some(&Command::ClearAll)
    );
    assert_eq!(
        service.resolve(global, &Key::ctrl(KeyCode::Char('-'))),
        Some(&Command::ZoomOut)
    );
}

#[test]
fn alt_letters_open_menus() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::alt(KeyCode::Char('o'))),
        Some(&Command::OpenMenu(MenuId::Format))
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::F(10))),
        Some(&Command::OpenMenu(MenuId::File))
    );
}

#[test]
fn esc_resolves_to_escape_in_all_contexts() {
    let service = KeybindingService::new();
    for ctx in [KeybindingContext::Global, KeybindingContext::Editor] {
        assert_eq!(
            service.resolve(ctx, &Key::simple(KeyCode::Esc)),
            Some(&Command::Escape)
        );
    }
}

#[test]
fn rules_override_and_unbind() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[
        rule("ctrl+k", "clearAll", None),
        rule("ctrl+l", "none", None),
        rule("alt+left", "cursorLineStart", Some("editor")),
    ]);

    assert_eq!(applied, 3);
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('k'))),
        Some(&Command::ClearAll)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('l'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::alt(KeyCode::Left)),
        Some(&Command::CursorLineStart)
    );
}

#[test]
fn invalid_rules_are_skipped() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[
        rule("ctrl+", "save", None),
        rule("ctrl+j", "doesNotExist", None),
        rule("ctrl+j", "save", Some("sidebar")),
    ]);

    assert_eq!(applied, 0);
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('j'))),
        None
    );
}

#[test]
fn key_for_prefers_shortest_label() {
    let service = KeybindingService::new();
    assert_eq!(
        service.key_for(&Command::ZoomIn),
        Some(Key::ctrl(KeyCode::Char('+')))
    );
    assert_eq!(
        service.key_for(&Command::Save),
        Some(Key::ctrl(KeyCode::Char('s')))
    );
    assert_eq!(
        service.key_for(&Command::SetTheme(crate::kernel::style::ThemeKind::Dark)),
        None
    );
}

#[test]
fn format_key_labels() {
    assert_eq!(format_key(&Key::ctrl_shift(KeyCode::Char('s'))), "Ctrl+Shift+S");
    assert_eq!(format_key(&Key::simple(KeyCode::F(1))), "F1");
    assert_eq!(format_key(&Key::alt(KeyCode::Char('='))), "Alt+=");
    assert_eq!(format_key(&Key::simple(KeyCode::PageDown)), "PgDn");
}
