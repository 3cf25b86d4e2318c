//! Built-in 5x7 bitmap font
//!
//! Each glyph is seven rows of five bits, most significant bit on the left.
//! Lowercase letters share the uppercase shapes; anything without a glyph is
//! drawn as a hollow box.

use crate::frame::{TextOverlay, Viewport};
use crate::pipeline::OverlayVertex;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance in font pixels (glyph plus one column gap)
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Share of the line spacing taken by the glyph itself
const GLYPH_FILL: f32 = 0.8;

const MISSING: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// Bitmap rows of a character
pub fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '=' => [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        _ => MISSING,
    }
}

/// Horizontal runs of lit pixels in one glyph row, as (start column, length)
fn row_runs(bits: u8) -> impl Iterator<Item = (u32, u32)> {
    let mut runs = Vec::new();
    let mut start = None;
    for col in 0..=GLYPH_WIDTH {
        let lit = col < GLYPH_WIDTH && bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0;
        match (lit, start) {
            (true, None) => start = Some(col),
            (false, Some(s)) => {
                runs.push((s, col - s));
                start = None;
            }
            _ => {}
        }
    }
    runs.into_iter()
}

/// Lay out overlay text as colored quads in normalized device coordinates
///
/// Font pixels that would fall outside the overlay rectangle are dropped.
pub fn layout_text(overlay: &TextOverlay, viewport: Viewport) -> Vec<OverlayVertex> {
    let mut vertices = Vec::new();
    if viewport.width == 0 || viewport.height == 0 {
        return vertices;
    }

    let rect = overlay.rect;
    let line_height = rect.height * overlay.line_spacing;
    let cell = (line_height * GLYPH_FILL / GLYPH_HEIGHT as f32).max(1.0);
    let origin_x = rect.x + overlay.anchor[0] * rect.width;
    let baseline = rect.y + overlay.anchor[1] * rect.height;

    let screen_w = viewport.width as f32;
    let screen_h = viewport.height as f32;
    let to_ndc = |x: f32, y: f32| [x / screen_w * 2.0 - 1.0, 1.0 - y / screen_h * 2.0];

    for (line_index, line) in overlay.lines.iter().enumerate() {
        let top = baseline + line_index as f32 * line_height - GLYPH_HEIGHT as f32 * cell;

        for (char_index, c) in line.chars().enumerate() {
            let left = origin_x + (char_index as u32 * ADVANCE) as f32 * cell;

            for (row, bits) in glyph(c).iter().enumerate() {
                let y0 = top + row as f32 * cell;
                let y1 = y0 + cell;
                if y0 < rect.y || y1 > rect.y + rect.height {
                    continue;
                }

                for (col, len) in row_runs(*bits) {
                    let x0 = left + col as f32 * cell;
                    let x1 = (x0 + len as f32 * cell).min(rect.x + rect.width);
                    if x0 >= x1 {
                        continue;
                    }

                    let tl = to_ndc(x0, y0);
                    let tr = to_ndc(x1, y0);
                    let bl = to_ndc(x0, y1);
                    let br = to_ndc(x1, y1);
                    for position in [tl, bl, br, tl, br, tr] {
                        vertices.push(OverlayVertex {
                            position,
                            color: overlay.color,
                        });
                    }
                }
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(lines: &[&str]) -> (TextOverlay, Viewport) {
        let viewport = Viewport::new(800, 600);
        let overlay = TextOverlay::lower_right(
            lines.iter().map(|s| s.to_string()).collect(),
            [1.0, 0.0, 0.0, 1.0],
            viewport,
        );
        (overlay, viewport)
    }

    #[test]
    fn test_lowercase_uses_uppercase_shape() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_unknown_char_is_box() {
        assert_eq!(glyph('~'), MISSING);
        assert_eq!(glyph('Ž'), MISSING);
    }

    #[test]
    fn test_glyph_rows_fit_width() {
        for c in ('A'..='Z').chain('0'..='9') {
            for row in glyph(c) {
                assert!(row < 1 << GLYPH_WIDTH, "glyph {:?} row {:#x} too wide", c, row);
            }
        }
    }

    #[test]
    fn test_row_runs() {
        assert_eq!(row_runs(0x11).collect::<Vec<_>>(), vec![(0, 1), (4, 1)]);
        assert_eq!(row_runs(0x1F).collect::<Vec<_>>(), vec![(0, 5)]);
        assert_eq!(row_runs(0x0E).collect::<Vec<_>>(), vec![(1, 3)]);
        assert!(row_runs(0).next().is_none());
    }

    #[test]
    fn test_space_draws_nothing() {
        let (o, v) = overlay(&["   "]);
        assert!(layout_text(&o, v).is_empty());
    }

    #[test]
    fn test_single_glyph_quads() {
        // 'I' has one run per row
        let (o, v) = overlay(&["I"]);
        assert_eq!(layout_text(&o, v).len(), 7 * 6);
    }

    #[test]
    fn test_text_stays_in_lower_right_quarter() {
        let (o, v) = overlay(&["HARBOR", "SCENE 2"]);
        let vertices = layout_text(&o, v);
        assert!(!vertices.is_empty());
        for vertex in &vertices {
            assert!(vertex.position[0] >= 0.0 && vertex.position[0] <= 1.0, "{:?}", vertex.position);
            assert!(vertex.position[1] <= 0.0 && vertex.position[1] >= -1.0, "{:?}", vertex.position);
            assert_eq!(vertex.color, [1.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_long_line_is_clipped() {
        let long = "W".repeat(200);
        let (o, v) = overlay(&[long.as_str()]);
        for vertex in layout_text(&o, v) {
            assert!(vertex.position[0] <= 1.0);
        }
    }

    #[test]
    fn test_lines_stack_downward() {
        let (o, v) = overlay(&["I", "I"]);
        let vertices = layout_text(&o, v);
        let first_top = vertices[0].position[1];
        let second_top = vertices[7 * 6].position[1];
        assert!(second_top < first_top);
    }

    #[test]
    fn test_zero_viewport() {
        let (o, _) = overlay(&["HI"]);
        assert!(layout_text(&o, Viewport::new(0, 0)).is_empty());
    }
}
