//! Keyboard Hit-State Tracking
//!
//! This crate maintains the demo's keyboard model: a fixed-size
//! hit-state byte array snapshotted once per frame, with rising-edge
//! detection done by comparing the current array against the previous
//! frame's copy. winit key events feed the array; the frame loop calls
//! [`KeyboardState::advance_frame`] at the end of each frame.

mod keyboard;

pub use keyboard::{KeyboardState, KEY_COUNT};
