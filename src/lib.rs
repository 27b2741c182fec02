//! mat4lab - 4x4 matrix operations on screen
//!
//! A small teaching demo: compute the standard 4x4 matrix operations
//! once, then display the results as labeled text grids in a window.
//! See the workspace crates for the pieces: `mat4lab_math` (operations),
//! `mat4lab_display` (formatting and layout), `mat4lab_input` (keyboard
//! hit-state), `mat4lab_render` (wgpu text presentation).

pub mod config;
