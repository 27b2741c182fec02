//! Matrix Display Layer
//!
//! This crate turns [`Matrix4x4`](mat4lab_math::Matrix4x4) values into
//! labeled text grids and places them on screen. The actual pixel
//! output lives behind the [`TextTarget`] trait so the formatting and
//! layout logic stays independent of the windowing/rendering host.

mod panel;
mod target;

pub use panel::{demo_panels, draw_matrix, format_cell, MatrixPanel, PanelLayout};
pub use target::TextTarget;
