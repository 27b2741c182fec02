//! Text output boundary

/// A surface that can draw a line of text at a pixel position.
///
/// Coordinates are in pixels with the origin at the top-left corner,
/// x growing right and y growing down. This is the only capability the
/// display layer needs from the host; the demo binary implements it
/// with a CPU glyph raster, tests with a recording fake.
pub trait TextTarget {
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
}
