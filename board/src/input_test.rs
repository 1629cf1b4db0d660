use super::*;

fn key(name: &str) -> Key {
    Key::new(name)
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Default::default() }
}

fn meta() -> Modifiers {
    Modifiers { meta: true, ..Default::default() }
}

fn ctrl_shift() -> Modifiers {
    Modifiers { ctrl: true, shift: true, ..Default::default() }
}

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_drawing_classification() {
    assert!(Tool::Draw.is_drawing());
    assert!(Tool::Area.is_drawing());
    assert!(!Tool::Select.is_drawing());
    assert!(!Tool::Erase.is_drawing());
}

#[test]
fn only_select_allows_drag() {
    assert!(Tool::Select.allows_drag());
    assert!(!Tool::Draw.allows_drag());
    assert!(!Tool::Erase.allows_drag());
    assert!(!Tool::Area.allows_drag());
}

// =============================================================
// Shortcuts
// =============================================================

#[test]
fn ctrl_z_is_undo() {
    assert_eq!(map_shortcut(&key("z"), ctrl(), FocusContext::Board), Some(Shortcut::Undo));
}

#[test]
fn cmd_z_is_undo() {
    assert_eq!(map_shortcut(&key("z"), meta(), FocusContext::Board), Some(Shortcut::Undo));
}

#[test]
fn ctrl_shift_z_is_redo() {
    assert_eq!(map_shortcut(&key("Z"), ctrl_shift(), FocusContext::Board), Some(Shortcut::Redo));
}

#[test]
fn ctrl_y_is_redo_but_cmd_y_is_not() {
    assert_eq!(map_shortcut(&key("y"), ctrl(), FocusContext::Board), Some(Shortcut::Redo));
    assert_eq!(map_shortcut(&key("y"), meta(), FocusContext::Board), None);
}

#[test]
fn shortcuts_ignored_in_text_input() {
    for (name, mods) in [("z", ctrl()), ("Z", ctrl_shift()), ("Delete", Modifiers::default()), ("d", Modifiers::default())] {
        assert_eq!(map_shortcut(&key(name), mods, FocusContext::TextInput), None);
    }
}

#[test]
fn plain_z_is_not_undo() {
    assert_eq!(map_shortcut(&key("z"), Modifiers::default(), FocusContext::Board), None);
}

#[test]
fn delete_and_backspace_delete_selection() {
    assert_eq!(map_shortcut(&key("Delete"), Modifiers::default(), FocusContext::Board), Some(Shortcut::DeleteSelection));
    assert_eq!(
        map_shortcut(&key("Backspace"), Modifiers::default(), FocusContext::Board),
        Some(Shortcut::DeleteSelection)
    );
}

#[test]
fn escape_cancels() {
    assert_eq!(map_shortcut(&key("Escape"), Modifiers::default(), FocusContext::Board), Some(Shortcut::Cancel));
}

#[test]
fn tool_letters_switch_tools() {
    let none = Modifiers::default();
    assert_eq!(map_shortcut(&key("v"), none, FocusContext::Board), Some(Shortcut::Tool(Tool::Select)));
    assert_eq!(map_shortcut(&key("d"), none, FocusContext::Board), Some(Shortcut::Tool(Tool::Draw)));
    assert_eq!(map_shortcut(&key("e"), none, FocusContext::Board), Some(Shortcut::Tool(Tool::Erase)));
    assert_eq!(map_shortcut(&key("a"), none, FocusContext::Board), Some(Shortcut::Tool(Tool::Area)));
}

#[test]
fn ctrl_a_is_not_area_tool() {
    assert_eq!(map_shortcut(&key("a"), ctrl(), FocusContext::Board), None);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
    assert_eq!(ui.selected_team, Team::Home);
    assert!(ui.selected_player.is_none());
    assert!(!ui.is_placing());
    assert_eq!(ui.erase_mode, EraseMode::Click);
    assert_eq!(ui.area_mode, AreaMode::Freehand);
}

#[test]
fn clear_staging_drops_position_and_ball() {
    let mut ui = UiState {
        position_to_place: Some(Position::Striker),
        placing_ball: true,
        selected_team: Team::Away,
        ..Default::default()
    };
    assert!(ui.is_placing());
    ui.clear_staging();
    assert!(!ui.is_placing());
    assert_eq!(ui.selected_team, Team::Away);
}

#[test]
fn stroke_reflects_staged_values() {
    let ui = UiState {
        draw_color: Color::Blue,
        draw_style: LineStyle::Dashed,
        arrow_kind: ArrowKind::Curved,
        ..Default::default()
    };
    let stroke = ui.stroke();
    assert_eq!(stroke.color, Color::Blue);
    assert_eq!(stroke.style, LineStyle::Dashed);
    assert_eq!(stroke.kind, ArrowKind::Curved);
}

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert!(!InputState::Scrubbing { hits: Vec::new() }.is_idle());
}
