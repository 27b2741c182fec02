//! Matrix panel formatting and layout
//!
//! A panel is a labeled 4x4 grid of fixed-width numeric cells. The demo
//! arranges eight panels in two columns: arithmetic results on the
//! left, transposes and the identity on the right.

use mat4lab_math::Matrix4x4;

use crate::target::TextTarget;

/// Pixel spacing of the text grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Vertical distance between matrix rows (and the label line)
    pub row_height: i32,
    /// Horizontal distance between matrix columns
    pub column_width: i32,
    /// Left edge of the panel grid
    pub origin_x: i32,
    /// Top edge of the panel grid
    pub origin_y: i32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            row_height: 20,
            column_width: 60,
            origin_x: 0,
            origin_y: 0,
        }
    }
}

/// A positioned, labeled matrix ready to draw each frame
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixPanel {
    pub x: i32,
    pub y: i32,
    pub label: String,
    pub matrix: Matrix4x4,
}

impl MatrixPanel {
    pub fn new(x: i32, y: i32, label: impl Into<String>, matrix: Matrix4x4) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            matrix,
        }
    }

    /// Draw this panel onto `target`
    pub fn draw<T: TextTarget>(&self, target: &mut T, layout: &PanelLayout) {
        draw_matrix(target, layout, self.x, self.y, &self.matrix, &self.label);
    }
}

/// Format one matrix entry as a fixed-width cell: width 6, 2 decimals.
#[inline]
pub fn format_cell(value: f32) -> String {
    format!("{:6.2}", value)
}

/// Draw `matrix` as a grid of cells at `(x, y)` with `label` on the
/// line above.
///
/// Entry `(row, col)` lands at `(x + col * column_width,
/// y + row * row_height)`; the label at `(x, y - row_height)`.
pub fn draw_matrix<T: TextTarget>(
    target: &mut T,
    layout: &PanelLayout,
    x: i32,
    y: i32,
    matrix: &Matrix4x4,
    label: &str,
) {
    target.draw_text(x, y - layout.row_height, label);

    for row in 0..4 {
        for col in 0..4 {
            target.draw_text(
                x + col as i32 * layout.column_width,
                y + row as i32 * layout.row_height,
                &format_cell(matrix.m[row][col]),
            );
        }
    }
}

/// Build the demo's eight result panels from the two input matrices.
///
/// All results are computed here, once; the frame loop only redraws
/// them. Left column: Add, Subtract, Multiply, Inverse M1, Inverse M2.
/// Right column: Transpose M1, Transpose M2, Identity. Each panel
/// occupies five rows of text (label + four matrix rows) plus one blank
/// row of separation.
pub fn demo_panels(layout: &PanelLayout, m1: Matrix4x4, m2: Matrix4x4) -> Vec<MatrixPanel> {
    let rh = layout.row_height;
    let left = layout.origin_x;
    let right = layout.origin_x + layout.column_width * 5;
    let row = |n: i32| layout.origin_y + rh * n;

    vec![
        MatrixPanel::new(left, row(1), "Add", m1 + m2),
        MatrixPanel::new(left, row(7), "Subtract", m1 - m2),
        MatrixPanel::new(left, row(13), "Multiply", m1 * m2),
        MatrixPanel::new(left, row(19), "Inverse M1", m1.inverse()),
        MatrixPanel::new(left, row(25), "Inverse M2", m2.inverse()),
        MatrixPanel::new(right, row(1), "Transpose M1", m1.transpose()),
        MatrixPanel::new(right, row(7), "Transpose M2", m2.transpose()),
        MatrixPanel::new(right, row(13), "Identity", Matrix4x4::IDENTITY),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every draw_text call for assertions
    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<(i32, i32, String)>,
    }

    impl TextTarget for RecordingTarget {
        fn draw_text(&mut self, x: i32, y: i32, text: &str) {
            self.calls.push((x, y, text.to_string()));
        }
    }

    fn demo_m1() -> Matrix4x4 {
        Matrix4x4::new([
            [3.2, 0.7, 9.6, 4.4],
            [5.5, 1.3, 7.8, 2.1],
            [6.9, 8.0, 2.6, 1.0],
            [0.5, 7.2, 5.1, 3.3],
        ])
    }

    fn demo_m2() -> Matrix4x4 {
        Matrix4x4::new([
            [4.1, 6.5, 3.3, 2.2],
            [8.8, 0.6, 9.9, 7.7],
            [1.1, 5.5, 6.6, 0.0],
            [3.3, 9.9, 8.8, 2.2],
        ])
    }

    #[test]
    fn test_format_cell_width_and_precision() {
        assert_eq!(format_cell(3.2), "  3.20");
        assert_eq!(format_cell(-0.17), " -0.17");
        assert_eq!(format_cell(0.0), "  0.00");
        assert_eq!(format_cell(123.456), "123.46");
    }

    #[test]
    fn test_draw_matrix_label_above_grid() {
        let mut target = RecordingTarget::default();
        let layout = PanelLayout::default();
        draw_matrix(&mut target, &layout, 10, 40, &Matrix4x4::IDENTITY, "Identity");

        let (x, y, text) = &target.calls[0];
        assert_eq!((*x, *y), (10, 20));
        assert_eq!(text, "Identity");
    }

    #[test]
    fn test_draw_matrix_cell_positions() {
        let mut target = RecordingTarget::default();
        let layout = PanelLayout::default();
        draw_matrix(&mut target, &layout, 0, 20, &demo_m1(), "M1");

        // Label + 16 cells
        assert_eq!(target.calls.len(), 17);

        // Cells are emitted row-major after the label
        let (x, y, text) = &target.calls[1];
        assert_eq!((*x, *y), (0, 20));
        assert_eq!(text, "  3.20");

        // Entry (2, 3)
        let (x, y, text) = &target.calls[1 + 2 * 4 + 3];
        assert_eq!((*x, *y), (3 * 60, 20 + 2 * 20));
        assert_eq!(text, "  1.00");
    }

    #[test]
    fn test_draw_matrix_honors_layout_spacing() {
        let mut target = RecordingTarget::default();
        let layout = PanelLayout {
            row_height: 16,
            column_width: 48,
            ..PanelLayout::default()
        };
        draw_matrix(&mut target, &layout, 100, 200, &Matrix4x4::ZERO, "Zero");

        assert_eq!(target.calls[0].1, 200 - 16);
        let (x, y, _) = target.calls[1 + 3 * 4 + 2];
        assert_eq!((x, y), (100 + 2 * 48, 200 + 3 * 16));
    }

    #[test]
    fn test_demo_panels_labels_and_arrangement() {
        let layout = PanelLayout::default();
        let panels = demo_panels(&layout, demo_m1(), demo_m2());

        let labels: Vec<&str> = panels.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Add",
                "Subtract",
                "Multiply",
                "Inverse M1",
                "Inverse M2",
                "Transpose M1",
                "Transpose M2",
                "Identity",
            ]
        );

        // Left column at x=0, right column past five cell widths
        assert!(panels[..5].iter().all(|p| p.x == 0));
        assert!(panels[5..].iter().all(|p| p.x == 300));
        assert_eq!(panels[0].y, 20);
        assert_eq!(panels[4].y, 20 * 25);
    }

    #[test]
    fn test_demo_panels_results_computed_once() {
        let layout = PanelLayout::default();
        let (m1, m2) = (demo_m1(), demo_m2());
        let panels = demo_panels(&layout, m1, m2);

        assert_eq!(panels[0].matrix, m1 + m2);
        assert_eq!(panels[1].matrix, m1 - m2);
        assert_eq!(panels[2].matrix, m1 * m2);
        assert_eq!(panels[3].matrix, m1.inverse());
        assert_eq!(panels[5].matrix, m1.transpose());
        assert_eq!(panels[7].matrix, Matrix4x4::IDENTITY);
    }

    #[test]
    fn test_demo_panels_respect_origin() {
        let layout = PanelLayout {
            origin_x: 8,
            origin_y: 4,
            ..PanelLayout::default()
        };
        let panels = demo_panels(&layout, demo_m1(), demo_m2());
        assert_eq!(panels[0].x, 8);
        assert_eq!(panels[0].y, 4 + 20);
        assert_eq!(panels[5].x, 8 + 300);
    }
}
