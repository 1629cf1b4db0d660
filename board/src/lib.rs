//! Editing core for a football tactics board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! document of players, ball, arrows and areas on a fixed 600 x 400 logical
//! board, the undo/redo history of that document, and the tool state machine
//! that turns pointer, drag and keyboard input into committed edits. The host
//! layer wires DOM events to the engine, reacts to the returned
//! [`engine::Action`]s, and persists documents through [`store::DocumentStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`history`] | Generic past/present/future undo stack |
//! | [`doc`] | Document value types and immutable edit helpers |
//! | [`geometry`] | Logical points, board scaling, curve and distance math |
//! | [`input`] | Tools, editor UI state, gesture state, keyboard shortcuts |
//! | [`placement`] | Click-to-place players and the ball |
//! | [`draw`] | Arrow and area sketches with the accidental-click rule |
//! | [`drag`] | Drag/reposition and delete-zone drops |
//! | [`hit`] | Hit-testing tokens and annotations |
//! | [`formation`] | Preset team shapes |
//! | [`render`] | `Canvas2D` scene rendering and SVG path strings |
//! | [`store`] | Persistence and identity seams |
//! | [`config`] | Tunable editor settings |
//! | [`consts`] | Shared numeric constants (board size, thresholds, etc.) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod draw;
pub mod engine;
pub mod formation;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod placement;
pub mod render;
pub mod store;
