use super::*;

#[test]
fn test_empty_document_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(settings.show_edit_button);
    assert!(settings.keybindings.is_empty());
    assert_eq!(settings.editor, EditorConfig::default());
}

#[test]
fn test_partial_editor_section_keeps_other_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"show_edit_button":false,"editor":{"hit_threshold":3.0}}"#)
            .unwrap();
    assert!(!settings.show_edit_button);
    assert_eq!(settings.editor.hit_threshold, 3.0);
    assert_eq!(settings.editor.single_container_capacity, 27);
}

#[test]
fn test_keybinding_rule_context_is_optional() {
    let rule: KeybindingRule = serde_json::from_str(r#"{"key":"f2","command":"copy"}"#).unwrap();
    assert!(rule.context.is_none());

    let json = serde_json::to_string(&rule).unwrap();
    assert!(!json.contains("context"));
}
