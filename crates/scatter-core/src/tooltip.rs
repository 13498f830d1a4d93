// File: crates/scatter-core/src/tooltip.rs
// Summary: Hover tooltip content and rounded-box drawing.

use skia_safe as skia;

use crate::axis::XAxisField;
use crate::data::DataPoint;
use crate::geometry::clamp;
use crate::text::TextShaper;
use crate::theme::Theme;

/// Offset from the cursor to the box's top-left corner.
const OFFSET: (f32, f32) = (16.0, -10.0);
const PADDING: f32 = 8.0;
const LINE_HEIGHT: f32 = 16.0;
const FONT_SIZE: f32 = 12.0;
const CORNER_RADIUS: f32 = 4.0;

pub struct Tooltip {
    lines: [String; 3],
}

impl Tooltip {
    /// Content for one mark: state name, the active x field, and obesity.
    pub fn for_mark(d: &DataPoint, field: XAxisField) -> Self {
        Self {
            lines: [
                d.state.clone(),
                format!("{} {}", field.label(), field.value(d)),
                format!("Obesity (%): {}", d.obesity),
            ],
        }
    }

    pub fn lines(&self) -> &[String; 3] {
        &self.lines
    }

    /// Draw near `cursor`, clamped to stay on the surface.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        cursor: (f32, f32),
        surface_w: f32,
        surface_h: f32,
        theme: &Theme,
    ) {
        let text_w = self
            .lines
            .iter()
            .map(|l| shaper.measure_width(l, FONT_SIZE, false))
            .fold(0.0f32, f32::max);
        let w = text_w + PADDING * 2.0;
        let h = LINE_HEIGHT * self.lines.len() as f32 + PADDING * 2.0;
        let x = clamp(cursor.0 + OFFSET.0, 0.0, (surface_w - w).max(0.0));
        let y = clamp(cursor.1 + OFFSET.1, 0.0, (surface_h - h).max(0.0));

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.tooltip_bg);
        canvas.draw_round_rect(
            skia::Rect::from_xywh(x, y, w, h),
            CORNER_RADIUS,
            CORNER_RADIUS,
            &bg,
        );

        for (i, line) in self.lines.iter().enumerate() {
            let baseline = y + PADDING + LINE_HEIGHT * (i as f32) + FONT_SIZE;
            shaper.draw_left(canvas, line, x + PADDING, baseline, FONT_SIZE, theme.tooltip_text, false);
        }
    }
}
