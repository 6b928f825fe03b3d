use super::*;

#[test]
fn toggle_button_key_is_global() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Char('c'))),
        Some(&Command::ToggleEditButton)
    );
}

#[test]
fn global_commands_fall_through_while_editing() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editing, &Key::ctrl(KeyCode::Char('e'))),
        Some(&Command::ToggleEditMode)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Picker, &Key::ctrl(KeyCode::Char('e'))),
        Some(&Command::ToggleEditMode)
    );
}

#[test]
fn esc_cancels_in_edit_contexts_only() {
    let service = KeybindingService::new();
    let esc = Key::simple(KeyCode::Esc);
    assert_eq!(service.resolve(KeybindingContext::Global, &esc), None);
    assert_eq!(
        service.resolve(KeybindingContext::Editing, &esc),
        Some(&Command::Cancel)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Picker, &esc),
        Some(&Command::Cancel)
    );
}

#[test]
fn clipboard_keys_are_not_active_in_picker() {
    let service = KeybindingService::new();
    let copy = Key::ctrl(KeyCode::Char('c'));
    assert_eq!(
        service.resolve(KeybindingContext::Editing, &copy),
        Some(&Command::Copy)
    );
    assert_eq!(service.resolve(KeybindingContext::Picker, &copy), None);
}

#[test]
fn rules_rebind_and_unbind() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        KeybindingRule {
            key: "ctrl+t".to_string(),
            command: "toggleEditMode".to_string(),
            context: None,
        },
        KeybindingRule {
            key: "c".to_string(),
            command: String::new(),
            context: Some("global".to_string()),
        },
        KeybindingRule {
            key: "x".to_string(),
            command: "selectEraser".to_string(),
            context: Some("editing".to_string()),
        },
        KeybindingRule {
            key: "y".to_string(),
            command: "noSuchCommand".to_string(),
            context: None,
        },
    ]);

    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('t'))),
        Some(&Command::ToggleEditMode)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Char('c'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editing, &Key::simple(KeyCode::Char('x'))),
        Some(&Command::SelectEraser)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Char('y'))),
        None
    );
}

#[test]
fn context_parse() {
    assert_eq!(KeybindingContext::parse(" Picker "), Some(KeybindingContext::Picker));
    assert_eq!(KeybindingContext::parse("edit"), Some(KeybindingContext::Editing));
    assert_eq!(KeybindingContext::parse("sidebar"), None);
}
