//! Input model: tools, staging state, modifier keys, keyboard shortcuts, and
//! the gesture state machine.
//!
//! `Tool` and `UiState` capture the user's intent at the time of an event.
//! `UiState` is transient and never enters undo history. `InputState` is the
//! gesture tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ArrowKind, Color, EntityId, LineStyle, Position, Team};
use crate::drag::DragState;
use crate::draw::{Sketch, StrokeStyle};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select and reposition tokens (default).
    #[default]
    Select,
    /// Draw arrows.
    Draw,
    /// Remove arrows and areas.
    Erase,
    /// Draw areas.
    Area,
}

impl Tool {
    /// Whether pointer-down starts a new shape in this tool.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Draw | Self::Area)
    }

    /// Whether tokens may be dragged in this tool.
    #[must_use]
    pub fn allows_drag(self) -> bool {
        matches!(self, Self::Select)
    }
}

/// How the erase tool consumes pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EraseMode {
    /// A click removes the single topmost annotation under the pointer.
    #[default]
    Click,
    /// Everything the pointer passes over while pressed is removed on release.
    Scrub,
}

/// What shape the area tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaMode {
    /// Closed polygon through the sampled pointer path.
    #[default]
    Freehand,
    /// Closed axis-aligned rectangle spanned by the drag.
    Rectangle,
    /// Open polyline through the sampled pointer path.
    Path,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key as reported by the browser (e.g. `"z"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Where keyboard focus sits when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    Board,
    /// A text field owns the key; its native undo must not be hijacked.
    TextInput,
}

/// Command a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
    DeleteSelection,
    Cancel,
    Tool(Tool),
}

/// Map a key press to an editor command. Always `None` inside text inputs.
#[must_use]
pub fn map_shortcut(key: &Key, modifiers: Modifiers, focus: FocusContext) -> Option<Shortcut> {
    if focus == FocusContext::TextInput {
        return None;
    }
    let name = key.0.as_str();
    if modifiers.command() {
        return match name {
            "z" | "Z" if modifiers.shift => Some(Shortcut::Redo),
            "z" | "Z" => Some(Shortcut::Undo),
            "y" | "Y" if modifiers.ctrl => Some(Shortcut::Redo),
            _ => None,
        };
    }
    if modifiers.alt {
        return None;
    }
    match name {
        "Delete" | "Backspace" => Some(Shortcut::DeleteSelection),
        "Escape" => Some(Shortcut::Cancel),
        "v" | "V" => Some(Shortcut::Tool(Tool::Select)),
        "d" | "D" => Some(Shortcut::Tool(Tool::Draw)),
        "e" | "E" => Some(Shortcut::Tool(Tool::Erase)),
        "a" | "A" => Some(Shortcut::Tool(Tool::Area)),
        _ => None,
    }
}

/// Transient, non-undoable editor state owned by the tool state machine.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub tool: Tool,
    /// Player shown in the editing panel.
    pub selected_player: Option<EntityId>,
    /// Position staged by the position picker, placed on the next board click.
    pub position_to_place: Option<Position>,
    /// Team new players join.
    pub selected_team: Team,
    /// Whether the next board click places the ball.
    pub placing_ball: bool,
    pub draw_color: Color,
    pub draw_style: LineStyle,
    pub arrow_kind: ArrowKind,
    pub erase_mode: EraseMode,
    pub area_mode: AreaMode,
}

impl UiState {
    /// Drop any staged placement.
    pub fn clear_staging(&mut self) {
        self.position_to_place = None;
        self.placing_ball = false;
    }

    /// Whether a board click would place something.
    #[must_use]
    pub fn is_placing(&self) -> bool {
        self.position_to_place.is_some() || self.placing_ball
    }

    /// Stroke parameters for the next committed shape.
    #[must_use]
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle { color: self.draw_color, style: self.draw_style, kind: self.arrow_kind }
    }
}

/// The gesture in progress, if any.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An arrow or area is being drawn; the sketch is the live preview.
    Sketching(Sketch),
    /// The erase tool is scrubbing; `hits` are removed together on release.
    Scrubbing { hits: Vec<EntityId> },
    /// A token is being dragged.
    Dragging(DragState),
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
