//! ShapeSheet: lays a `core::ShapeCatalog` out into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Shapes are grouped by rank under a one-line header and flowed left to
//! right, wrapping when the next shape would overflow the sheet width.
//! Every orientation sharing an id gets the same color.

use crate::core::{Shape, ShapeCatalog};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rank, ShapeId};

const PALETTE: [Rgb; 8] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(180, 180, 180),
];

/// A lightweight catalog renderer.
pub struct ShapeSheet {
    /// Square width in terminal columns.
    cell_w: u16,
    /// Columns between neighbouring shapes.
    gap: u16,
    /// Only draw this rank when set.
    rank: Option<Rank>,
    /// Framebuffer height limit, including the truncation line.
    max_rows: u16,
}

impl Default for ShapeSheet {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            gap: 2,
            rank: None,
            max_rows: u16::MAX,
        }
    }
}

/// Where one shape lands on the sheet.
///
/// Layout runs in `u32` so a tall catalog cannot overflow the cursor before
/// it is clamped to the framebuffer.
struct Placement<'a> {
    x: u32,
    y: u32,
    shape: &'a Shape,
}

/// Layout result before anything is drawn.
struct Layout<'a> {
    labels: Vec<(u32, String)>,
    placements: Vec<Placement<'a>>,
    /// Rows used by the placed content.
    rows: u32,
    /// Selected shapes left out once the row limit was reached.
    hidden: usize,
}

impl ShapeSheet {
    pub fn new(cell_w: u16, gap: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            gap,
            ..Self::default()
        }
    }

    pub fn with_rank(mut self, rank: Option<Rank>) -> Self {
        self.rank = rank;
        self
    }

    /// Cap the rendered height; at least two rows are kept.
    pub fn with_max_rows(mut self, max_rows: u16) -> Self {
        self.max_rows = max_rows.max(2);
        self
    }

    /// Render the catalog into a framebuffer `width` columns wide.
    ///
    /// The height grows to fit every selected shape, up to the row limit.
    /// Past the limit no further shapes are placed and the last row reports
    /// how many were left out.
    pub fn render(&self, catalog: &ShapeCatalog, width: u16) -> FrameBuffer {
        let width = width.max(1);
        let layout = self.layout(catalog, u32::from(width));

        let height = if layout.hidden > 0 {
            layout.rows + 1
        } else {
            layout.rows.max(1)
        };
        let height = u16::try_from(height).unwrap_or(self.max_rows).min(self.max_rows);
        let mut fb = FrameBuffer::new(width, height);

        let header = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        for (y, text) in &layout.labels {
            if let Ok(y) = u16::try_from(*y) {
                fb.put_str(0, y, text, header);
            }
        }
        for p in &layout.placements {
            self.draw_shape(&mut fb, p);
        }
        if layout.hidden > 0 {
            let text = format!("... {} more shapes not shown", layout.hidden);
            fb.put_str(0, height - 1, &text, header);
        }
        fb
    }

    fn layout<'a>(&self, catalog: &'a ShapeCatalog, width: u32) -> Layout<'a> {
        // Last row is reserved for the truncation line.
        let limit = u32::from(self.max_rows) - 1;
        let cell_w = u32::from(self.cell_w);
        let gap = u32::from(self.gap);

        let mut layout = Layout {
            labels: Vec::new(),
            placements: Vec::new(),
            rows: 0,
            hidden: 0,
        };
        let mut y: u32 = 0;

        for stats in catalog.rank_stats() {
            if self.rank.is_some_and(|r| r != stats.rank) {
                continue;
            }
            if layout.hidden > 0 || y >= limit {
                layout.hidden += stats.entries;
                continue;
            }

            layout.labels.push((
                y,
                format!(
                    "rank {}: {} orientations, {} free shapes",
                    stats.rank, stats.entries, stats.distinct_ids
                ),
            ));
            y += 1;
            layout.rows = y;

            let mut x: u32 = 0;
            let mut row_h: u32 = 0;
            for (placed, shape) in catalog.of_rank(stats.rank).enumerate() {
                let w = shape.width() * cell_w;
                let h = shape.height();
                if x > 0 && x + w > width {
                    x = 0;
                    y += row_h + 1;
                    row_h = 0;
                }
                if y + h > limit {
                    layout.hidden += stats.entries - placed;
                    break;
                }
                layout.placements.push(Placement { x, y, shape });
                layout.rows = layout.rows.max(y + h);
                x += w + gap;
                row_h = row_h.max(h);
            }
            y += row_h + 1;
        }
        layout
    }

    fn draw_shape(&self, fb: &mut FrameBuffer, p: &Placement<'_>) {
        let style = CellStyle {
            fg: color_for(p.shape.id()),
            ..CellStyle::default()
        };
        let min = p.shape.min_corner();
        let cell_w = u32::from(self.cell_w);
        for c in p.shape.squares() {
            let x = p.x + (c.x - min.x).unsigned_abs() * cell_w;
            let y = p.y + (c.y - min.y).unsigned_abs();
            // Anything beyond u16 is off the framebuffer anyway.
            if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
                fb.put_run(x, y, self.cell_w, '█', style);
            }
        }
    }
}

fn color_for(id: ShapeId) -> Rgb {
    PALETTE[id as usize % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{generate_up_to, GeneratorConfig};

    fn catalog(rank: Rank) -> ShapeCatalog {
        generate_up_to(GeneratorConfig::new(rank).unwrap())
    }

    #[test]
    fn dominoes_are_drawn_under_their_header() {
        let fb = ShapeSheet::new(1, 1).render(&catalog(2), 40);

        assert_eq!(fb.row_text(0), "rank 1: 1 orientations, 1 free shapes");
        assert_eq!(fb.row_text(1), "█");
        assert_eq!(fb.row_text(3), "rank 2: 2 orientations, 1 free shapes");
        // Horizontal domino, gap, then the first row of the vertical one.
        assert_eq!(fb.row_text(4), "██ █");
        assert_eq!(fb.row_text(5), "   █");
    }

    #[test]
    fn rank_filter_skips_other_ranks() {
        let fb = ShapeSheet::default()
            .with_rank(Some(3))
            .render(&catalog(3), 80);
        assert!(fb.row_text(0).starts_with("rank 3:"));
        for y in 1..fb.height() {
            assert!(!fb.row_text(y).starts_with("rank"));
        }
    }

    #[test]
    fn narrow_sheet_wraps_shapes() {
        let wide = ShapeSheet::default().render(&catalog(4), 200);
        let narrow = ShapeSheet::default().render(&catalog(4), 12);
        assert!(narrow.height() > wide.height());
    }

    #[test]
    fn row_limit_truncates_with_a_marker() {
        let full = ShapeSheet::default().render(&catalog(4), 40);
        let capped = ShapeSheet::default().with_max_rows(10).render(&catalog(4), 40);
        assert!(full.height() > 10);
        assert!(capped.height() <= 10);

        let last = capped.row_text(capped.height() - 1);
        assert!(last.starts_with("... "), "{last}");
        assert!(last.ends_with(" more shapes not shown"), "{last}");
        // Earlier ranks still render in full.
        assert_eq!(capped.row_text(0), full.row_text(0));
    }

    #[test]
    fn rank_nine_at_narrow_width_stays_within_u16_rows() {
        // Unclamped, this layout needs more than u16::MAX rows.
        let fb = ShapeSheet::default().render(&catalog(9), 10);
        assert_eq!(fb.width(), 10);
        assert!(fb.height() > u16::MAX - 16);
        assert!(fb.row_text(fb.height() - 1).starts_with("... "));
        assert!(fb.row_text(0).starts_with("rank 1:"));
    }

    #[test]
    fn wide_cells_do_not_overflow_layout() {
        let fb = ShapeSheet::new(u16::MAX, 1).render(&catalog(3), 8);
        assert_eq!(fb.width(), 8);
        assert_eq!(fb.row_text(1), "████████");
    }

    #[test]
    fn siblings_share_a_color() {
        assert_eq!(color_for(3), color_for(3 + PALETTE.len() as ShapeId));
        assert_ne!(color_for(1), color_for(2));
    }
}
