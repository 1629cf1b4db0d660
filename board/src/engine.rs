use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::EditorConfig;
use crate::doc::{ArrowKind, Color, Document, EntityId, LineStyle, Player, Position, Team};
use crate::drag::{BoardMeasure, DragState, DragTarget, DropOutcome, DropTarget, GestureSink, PointerId, preview_offset, resolve_drop};
use crate::draw::{Shape, Sketch};
use crate::formation;
use crate::geometry::{BoardRect, Point};
use crate::hit::{self, TokenHit};
use crate::history::History;
use crate::input::{AreaMode, EraseMode, FocusContext, InputState, Key, Modifiers, Shortcut, Tool, UiState, map_shortcut};
use crate::placement;
use crate::render::{self, Scene};
use crate::store::{DocumentStore, IdentityProvider, StoreError, TacticMeta};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// `history.present()` changed (commit, undo, redo, or reset).
    DocumentChanged,
    /// The live drawing preview or pending-erase set changed.
    PreviewChanged,
    SelectionChanged(Option<EntityId>),
    ToolChanged(Tool),
    RenderNeeded,
}

/// Editor state and every input handler that does not need the DOM.
///
/// Every handler reads `history.present()` at the moment it runs, so a commit
/// made by one event is always visible to the next.
pub struct EngineCore {
    pub history: History<Document>,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
    /// Last measured size of the rendered board, if known.
    pub board_rect: Option<BoardRect>,
    measure: Option<Box<dyn BoardMeasure>>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            history: History::new(Document::new()).with_limit(config.history_limit),
            ui: UiState::default(),
            input: InputState::default(),
            config,
            board_rect: None,
            measure: None,
        }
    }

    // --- Document and history ---

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        self.history.present()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> Vec<Action> {
        if !self.history.undo() {
            return Vec::new();
        }
        debug!(past = self.history.past_len(), future = self.history.future_len(), "undo");
        self.after_document_change()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        if !self.history.redo() {
            return Vec::new();
        }
        debug!(past = self.history.past_len(), future = self.history.future_len(), "redo");
        self.after_document_change()
    }

    /// Install an externally loaded document as a fresh, non-undoable baseline.
    pub fn load_document(&mut self, doc: Document) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        self.history.reset(doc);
        debug!("document reset");
        actions.extend(self.after_document_change());
        actions
    }

    /// Remove everything. Not undoable.
    pub fn clear_all(&mut self) -> Vec<Action> {
        self.load_document(Document::new())
    }

    fn commit(&mut self, next: Document, reason: &'static str) -> Vec<Action> {
        if !self.history.set_state(next) {
            debug!(reason, "commit skipped; document unchanged");
            return Vec::new();
        }
        debug!(reason, past = self.history.past_len(), "document committed");
        self.after_document_change()
    }

    fn after_document_change(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::DocumentChanged];
        let stale = self
            .ui
            .selected_player
            .as_ref()
            .is_some_and(|id| self.document().player(id).is_none());
        if stale {
            self.ui.selected_player = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Tool state machine ---

    /// Switch tools. Discards any in-progress gesture and staged placement.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if tool == self.ui.tool {
            return Vec::new();
        }
        let mut actions = self.cancel_gesture();
        self.ui.clear_staging();
        self.ui.tool = tool;
        actions.push(Action::ToolChanged(tool));
        actions
    }

    /// Abort the current gesture and any staged placement.
    pub fn cancel(&mut self) -> Vec<Action> {
        self.ui.clear_staging();
        self.cancel_gesture()
    }

    fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Sketching(_) | InputState::Scrubbing { .. } => {
                debug!("gesture discarded");
                vec![Action::PreviewChanged]
            }
            InputState::Dragging(_) => vec![Action::RenderNeeded],
        }
    }

    /// Stage a position; the next board click places a player there.
    pub fn stage_position(&mut self, position: Position) {
        self.ui.placing_ball = false;
        self.ui.position_to_place = Some(position);
    }

    /// Stage the ball; the next board click places it.
    pub fn stage_ball(&mut self) {
        self.ui.position_to_place = None;
        self.ui.placing_ball = true;
    }

    pub fn set_team(&mut self, team: Team) {
        self.ui.selected_team = team;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.ui.draw_color = color;
    }

    pub fn set_draw_style(&mut self, style: LineStyle) {
        self.ui.draw_style = style;
    }

    pub fn set_arrow_kind(&mut self, kind: ArrowKind) {
        self.ui.arrow_kind = kind;
    }

    pub fn set_erase_mode(&mut self, mode: EraseMode) {
        self.ui.erase_mode = mode;
    }

    pub fn set_area_mode(&mut self, mode: AreaMode) {
        self.ui.area_mode = mode;
    }

    // --- Clicks: placement, selection, click-erase ---

    /// A click on the board at logical point `at`.
    ///
    /// Staged placement wins in every tool. Otherwise `select` picks the
    /// token under the pointer and `erase` (click mode) removes the topmost
    /// annotation.
    pub fn on_board_click(&mut self, at: Point) -> Vec<Action> {
        if let Some(position) = self.ui.position_to_place.take() {
            let next = placement::place_player(self.document(), position, self.ui.selected_team, at);
            let mut actions = self.commit(next, "place player");
            actions.extend(self.set_tool(Tool::Select));
            return actions;
        }
        if self.ui.placing_ball {
            self.ui.placing_ball = false;
            let next = placement::place_ball(self.document(), at);
            let mut actions = self.commit(next, "place ball");
            actions.extend(self.set_tool(Tool::Select));
            return actions;
        }
        match self.ui.tool {
            Tool::Select => match hit::hit_token(self.document(), at, self.config.token_radius) {
                Some(TokenHit::Player(id)) => self.select_player(Some(id)),
                Some(TokenHit::Ball) | None => Vec::new(),
            },
            Tool::Erase if self.ui.erase_mode == EraseMode::Click => {
                match hit::hit_annotation(self.document(), at, self.config.hit_tolerance) {
                    Some(found) => self.erase(found.id()),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    // --- Pointer: drawing and scrub-erase ---

    /// Pointer pressed at logical point `at`.
    pub fn on_pointer_down(&mut self, at: Point) -> Vec<Action> {
        if self.ui.is_placing() {
            return Vec::new();
        }
        match self.ui.tool {
            Tool::Draw => {
                self.input = InputState::Sketching(Sketch::begin_arrow(at));
                vec![Action::PreviewChanged]
            }
            Tool::Area => {
                self.input = InputState::Sketching(Sketch::begin_area(self.ui.area_mode, at));
                vec![Action::PreviewChanged]
            }
            Tool::Erase if self.ui.erase_mode == EraseMode::Scrub => {
                self.input = InputState::Scrubbing { hits: Vec::new() };
                let mut actions = vec![Action::PreviewChanged];
                actions.extend(self.scrub(at));
                actions
            }
            _ => Vec::new(),
        }
    }

    /// Pointer moved to logical point `at`. Never touches history.
    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        let spacing = self.config.area_sample_spacing;
        if let InputState::Sketching(sketch) = &mut self.input {
            sketch.extend(at, spacing);
            return vec![Action::PreviewChanged];
        }
        self.scrub(at)
    }

    /// Pointer released at logical point `at`. Commits at most once.
    pub fn on_pointer_up(&mut self, at: Point) -> Vec<Action> {
        if matches!(self.input, InputState::Scrubbing { .. }) {
            self.scrub(at);
        }
        match std::mem::take(&mut self.input) {
            InputState::Sketching(sketch) => {
                let mut actions = vec![Action::PreviewChanged];
                match sketch.finish(at, self.ui.stroke(), self.config.area_sample_spacing) {
                    Some(shape) => {
                        let next = shape.append_to(self.document());
                        actions.extend(self.commit(next, "draw"));
                    }
                    None => debug!("draw gesture too short; discarded"),
                }
                actions
            }
            InputState::Scrubbing { hits } => {
                let mut actions = vec![Action::PreviewChanged];
                if !hits.is_empty() {
                    let next = self.document().without_annotations(&hits);
                    actions.extend(self.commit(next, "scrub erase"));
                }
                actions
            }
            other => {
                self.input = other;
                Vec::new()
            }
        }
    }

    /// Pointer left the board mid-gesture: discard without committing.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        match self.input {
            InputState::Sketching(_) | InputState::Scrubbing { .. } => self.cancel_gesture(),
            _ => Vec::new(),
        }
    }

    fn scrub(&mut self, at: Point) -> Vec<Action> {
        if !matches!(self.input, InputState::Scrubbing { .. }) {
            return Vec::new();
        }
        let found = hit::hit_annotations(self.document(), at, self.config.hit_tolerance);
        let InputState::Scrubbing { hits } = &mut self.input else {
            return Vec::new();
        };
        let before = hits.len();
        for hit in found {
            if !hits.contains(hit.id()) {
                hits.push(hit.id().clone());
            }
        }
        if hits.len() > before {
            vec![Action::PreviewChanged]
        } else {
            Vec::new()
        }
    }

    // --- Board measurement ---

    /// Record the rendered board size (call on layout and resize).
    pub fn set_board_rect(&mut self, rect: BoardRect) {
        self.board_rect = Some(rect);
    }

    /// Install the fallback used when a drag ends before the board was measured.
    pub fn set_board_measure(&mut self, measure: Box<dyn BoardMeasure>) {
        self.measure = Some(measure);
    }

    fn current_board_rect(&mut self) -> Option<BoardRect> {
        if let Some(rect) = self.board_rect.filter(BoardRect::is_measured) {
            return Some(rect);
        }
        let measured = self
            .measure
            .as_ref()
            .and_then(|m| m.measure())
            .filter(BoardRect::is_measured);
        if measured.is_some() {
            self.board_rect = measured;
        }
        measured
    }

    // --- Selection and editing ---

    /// Set the player shown in the editing panel. Unknown ids clear the selection.
    pub fn select_player(&mut self, id: Option<EntityId>) -> Vec<Action> {
        let id = id.filter(|id| self.document().player(id).is_some());
        if id == self.ui.selected_player {
            return Vec::new();
        }
        self.ui.selected_player.clone_from(&id);
        vec![Action::SelectionChanged(id), Action::RenderNeeded]
    }

    #[must_use]
    pub fn selected_player(&self) -> Option<&Player> {
        self.ui
            .selected_player
            .as_ref()
            .and_then(|id| self.document().player(id))
    }

    pub fn set_player_label(&mut self, id: &str, label: &str) -> Vec<Action> {
        let next = self.document().with_player_edit(id, |p| p.label = label.to_string());
        self.commit(next, "edit label")
    }

    /// Change a player's position. The label is left as the user set it.
    pub fn set_player_position(&mut self, id: &str, position: Position) -> Vec<Action> {
        let next = self.document().with_player_edit(id, |p| p.position = position);
        self.commit(next, "edit position")
    }

    pub fn set_player_team(&mut self, id: &str, team: Team) -> Vec<Action> {
        let next = self.document().with_player_edit(id, |p| p.team = team);
        self.commit(next, "edit team")
    }

    pub fn delete_player(&mut self, id: &str) -> Vec<Action> {
        let next = self.document().without_player(id);
        self.commit(next, "delete player")
    }

    pub fn delete_ball(&mut self) -> Vec<Action> {
        let next = self.document().without_ball();
        self.commit(next, "delete ball")
    }

    /// Remove the arrow or area with `id`.
    pub fn erase(&mut self, id: &str) -> Vec<Action> {
        let next = self.document().without_annotations(&[id.to_string()]);
        self.commit(next, "erase")
    }

    // --- Formations ---

    /// Replace all players with the named preset for the staged team.
    /// Unknown names change nothing.
    pub fn load_formation(&mut self, name: &str) -> Vec<Action> {
        let Some(preset) = formation::find(name) else {
            debug!(name, "unknown formation ignored");
            return Vec::new();
        };
        let players = preset.players(self.ui.selected_team);
        let next = self.document().with_players(players);
        self.commit(next, "load formation")
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, focus: FocusContext) -> Vec<Action> {
        match map_shortcut(key, modifiers, focus) {
            Some(Shortcut::Undo) => self.undo(),
            Some(Shortcut::Redo) => self.redo(),
            Some(Shortcut::DeleteSelection) => match self.ui.selected_player.clone() {
                Some(id) => self.delete_player(&id),
                None => Vec::new(),
            },
            Some(Shortcut::Cancel) => self.cancel(),
            Some(Shortcut::Tool(tool)) => self.set_tool(tool),
            None => Vec::new(),
        }
    }

    // --- Persistence ---

    /// Hand the present document, unmodified, to `store`.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn save(
        &self,
        store: &mut dyn DocumentStore,
        identity: &dyn IdentityProvider,
        title: &str,
    ) -> Result<String, StoreError> {
        let meta = TacticMeta { title: title.to_string(), author_id: identity.user_id() };
        let id = store.save(self.document(), &meta)?;
        debug!(%id, "document saved");
        Ok(id)
    }

    /// Fetch a document from `store` and install it as a non-undoable baseline.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`]; the current document is kept.
    pub fn open(&mut self, store: &dyn DocumentStore, id: &str) -> Result<Vec<Action>, StoreError> {
        let doc = store.load(id)?;
        Ok(self.load_document(doc))
    }

    // --- Queries for the render layer ---

    /// The live drawing preview, if a shape is being drawn.
    #[must_use]
    pub fn preview(&self) -> Option<Shape> {
        match &self.input {
            InputState::Sketching(sketch) => Some(sketch.preview(self.ui.stroke())),
            _ => None,
        }
    }

    /// The token being dragged and its current logical offset.
    #[must_use]
    pub fn drag_preview(&self) -> Option<(&DragTarget, Point)> {
        match &self.input {
            InputState::Dragging(drag) => Some((&drag.target, preview_offset(drag, self.board_rect))),
            _ => None,
        }
    }

    /// Annotations a scrub erase will remove on release.
    #[must_use]
    pub fn pending_erase(&self) -> &[EntityId] {
        match &self.input {
            InputState::Scrubbing { hits } => hits,
            _ => &[],
        }
    }

    #[must_use]
    pub fn scene(&self, rect: BoardRect, dpr: f64) -> Scene<'_> {
        Scene {
            doc: self.document(),
            preview: self.preview(),
            drag: self.drag_preview(),
            pending_erase: self.pending_erase(),
            selected: self.ui.selected_player.as_deref(),
            token_radius: self.config.token_radius,
            rect,
            dpr,
        }
    }
}

impl GestureSink for EngineCore {
    fn on_gesture_start(&mut self, pointer_id: PointerId, target: DragTarget) -> Vec<Action> {
        if !self.ui.tool.allows_drag() {
            return Vec::new();
        }
        if let InputState::Dragging(previous) = &self.input {
            debug!(previous = previous.pointer_id, pointer_id, "drag superseded");
        }
        self.input = InputState::Dragging(DragState::new(pointer_id, target));
        vec![Action::RenderNeeded]
    }

    fn on_gesture_move(&mut self, delta_px: Point) -> Vec<Action> {
        let activation_px = self.config.drag_activation_px;
        let InputState::Dragging(drag) = &mut self.input else {
            return Vec::new();
        };
        drag.track(delta_px, activation_px);
        vec![Action::RenderNeeded]
    }

    fn on_gesture_end(&mut self, drop: Option<DropTarget>) -> Vec<Action> {
        if !matches!(self.input, InputState::Dragging(_)) {
            return Vec::new();
        }
        let InputState::Dragging(drag) = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        let rect = self.current_board_rect();
        match resolve_drop(self.document(), &drag, drop, rect, self.config.drag_activation_px) {
            DropOutcome::Commit(next) => {
                let reason = if drop == Some(DropTarget::DeleteZone) { "drag delete" } else { "drag move" };
                let mut actions = self.commit(next, reason);
                if actions.is_empty() {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
            DropOutcome::Click => match drag.target {
                DragTarget::Player(id) => {
                    let mut actions = self.select_player(Some(id));
                    actions.push(Action::RenderNeeded);
                    actions
                }
                DragTarget::Ball => vec![Action::RenderNeeded],
            },
            DropOutcome::Ignore => {
                if rect.is_none() && drop != Some(DropTarget::DeleteZone) {
                    warn!(pointer_id = drag.pointer_id, "board not measured; drag dropped");
                }
                vec![Action::RenderNeeded]
            }
        }
    }
}

/// Measures the board element's bounding box.
struct DomBoardMeasure {
    element: Element,
}

impl BoardMeasure for DomBoardMeasure {
    fn measure(&self) -> Option<BoardRect> {
        let rect = self.element.get_bounding_client_rect();
        Some(BoardRect::new(rect.width(), rect.height())).filter(BoardRect::is_measured)
    }
}

/// Whether the focused element edits text on its own.
fn focus_context() -> FocusContext {
    let Some(active) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
    else {
        return FocusContext::Board;
    };
    let editable = active.dyn_ref::<HtmlInputElement>().is_some()
        || active.dyn_ref::<HtmlTextAreaElement>().is_some()
        || active
            .dyn_ref::<HtmlElement>()
            .is_some_and(HtmlElement::is_content_editable);
    if editable { FocusContext::TextInput } else { FocusContext::Board }
}

/// The full board engine. Wraps `EngineCore` and owns the rendered board element.
pub struct Engine {
    board: Element,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given board element.
    #[must_use]
    pub fn new(board: Element) -> Self {
        Self::with_config(board, EditorConfig::default())
    }

    #[must_use]
    pub fn with_config(board: Element, config: EditorConfig) -> Self {
        let mut core = EngineCore::with_config(config);
        core.set_board_measure(Box::new(DomBoardMeasure { element: board.clone() }));
        Self { board, core }
    }

    // --- Viewport ---

    /// Re-read the board element's size. Call on mount and on every resize.
    pub fn sync_board_rect(&mut self) {
        let rect = self.board.get_bounding_client_rect();
        self.core.set_board_rect(BoardRect::new(rect.width(), rect.height()));
    }

    /// Convert a pointer's client coordinates to a logical board point.
    /// `None` while the board has no measurable size.
    #[must_use]
    pub fn client_to_logical(&self, client_x: f64, client_y: f64) -> Option<Point> {
        let rect = self.board.get_bounding_client_rect();
        let board = BoardRect::new(rect.width(), rect.height());
        board
            .is_measured()
            .then(|| board.pixel_to_logical(Point::new(client_x - rect.left(), client_y - rect.top())))
    }

    // --- Input events ---

    pub fn on_board_click(&mut self, at: Point) -> Vec<Action> {
        self.core.on_board_click(at)
    }

    pub fn on_pointer_down(&mut self, at: Point) -> Vec<Action> {
        self.core.on_pointer_down(at)
    }

    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        self.core.on_pointer_move(at)
    }

    pub fn on_pointer_up(&mut self, at: Point) -> Vec<Action> {
        self.core.on_pointer_up(at)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    /// Keyboard shortcuts, suppressed while a text field has focus.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers, focus_context())
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    // --- Render ---

    /// Draw the current state. Skipped while the board has no size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self, ctx: &CanvasRenderingContext2d, dpr: f64) -> Result<(), JsValue> {
        let rect = self.board.get_bounding_client_rect();
        let board = BoardRect::new(rect.width(), rect.height());
        if !board.is_measured() {
            return Ok(());
        }
        render::draw(ctx, &self.core.scene(board, dpr))
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn document(&self) -> &Document {
        self.core.document()
    }

    #[must_use]
    pub fn preview(&self) -> Option<Shape> {
        self.core.preview()
    }
}

impl GestureSink for Engine {
    fn on_gesture_start(&mut self, pointer_id: PointerId, target: DragTarget) -> Vec<Action> {
        self.core.on_gesture_start(pointer_id, target)
    }

    fn on_gesture_move(&mut self, delta_px: Point) -> Vec<Action> {
        self.core.on_gesture_move(delta_px)
    }

    fn on_gesture_end(&mut self, drop: Option<DropTarget>) -> Vec<Action> {
        self.core.on_gesture_end(drop)
    }
}
