// File: crates/scatter-core/src/chart.rs
// Summary: Scatter chart state machine and Skia raster rendering pipeline.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{self, XAxisField, Y_AXIS_LABEL};
use crate::data::DataPoint;
use crate::geometry::{dist2, RectI32};
use crate::scale::{self, LinearScale};
use crate::text::TextShaper;
use crate::tooltip::Tooltip;
use crate::transition::Transition;
use crate::types::{Insets, HEIGHT, MARK_RADIUS, WIDTH};

const TICK_LEN: f32 = 6.0;
const TICK_FONT: f32 = 11.0;
const ABBR_FONT: f32 = 10.0;
const AXIS_TITLE_FONT: f32 = 14.0;
const FIELD_LABEL_FONT: f32 = 16.0;

// Baselines of the two clickable field labels, in pixels below the plot.
const FIELD_LABEL_LINES: [i32; 2] = [40, 64];
const FIELD_LABEL_BOX_W: i32 = 200;
const FIELD_LABEL_BOX_H: i32 = 22;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: crate::theme::Theme,
    pub draw_labels: bool,
    /// Cursor position for the hover tooltip, in surface pixels.
    pub hover: Option<(f32, f32)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: crate::theme::Theme::light(),
            draw_labels: true,
            hover: None,
        }
    }
}

/// The scatter chart: parsed rows, the active x field, and at most one
/// in-flight axis-swap animation.
pub struct ScatterChart {
    data: Vec<DataPoint>,
    chosen_x_axis: XAxisField,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
    transition: Option<Transition>,
}

impl ScatterChart {
    /// Build a chart over `data`, starting on the poverty field.
    /// The y-domain is computed here once and never again.
    pub fn new(data: Vec<DataPoint>) -> Self {
        let chosen = XAxisField::Poverty;
        let x_domain = scale::x_domain(&data, chosen);
        let y_domain = scale::y_domain(&data);
        Self { data, chosen_x_axis: chosen, x_domain, y_domain, transition: None }
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn chosen_x_axis(&self) -> XAxisField {
        self.chosen_x_axis
    }

    /// Settled x-domain (the animation target while one is running).
    pub fn x_domain(&self) -> (f64, f64) {
        self.x_domain
    }

    pub fn y_domain(&self) -> (f64, f64) {
        self.y_domain
    }

    /// Domain currently on screen (interpolated while a transition runs).
    pub fn displayed_x_domain(&self) -> (f64, f64) {
        self.transition.map_or(self.x_domain, |tr| tr.current())
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Switch the x-axis metric. Returns false (and changes nothing, firing
    /// no transition) when `field` is already active. A click mid-animation
    /// retargets from the currently displayed domain.
    pub fn select_x_field(&mut self, field: XAxisField) -> bool {
        if field == self.chosen_x_axis {
            return false;
        }
        let from = self.displayed_x_domain();
        self.chosen_x_axis = field;
        self.x_domain = scale::x_domain(&self.data, field);
        self.transition = Some(Transition::new(from, self.x_domain));
        true
    }

    /// Advance the in-flight transition by `dt` seconds.
    /// Returns true while an animation is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let Some(tr) = self.transition.as_mut() {
            if !tr.advance(dt) {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }

    fn scales(&self, opts: &RenderOptions) -> (LinearScale, LinearScale) {
        let plot_w = (opts.width - opts.insets.hsum() as i32).max(1) as f32;
        let plot_h = (opts.height - opts.insets.vsum() as i32).max(1) as f32;
        (
            scale::x_scale(self.displayed_x_domain(), plot_w),
            scale::y_scale(self.y_domain, plot_h),
        )
    }

    /// Surface-pixel position of one row under the current scales.
    pub fn mark_position(&self, d: &DataPoint, opts: &RenderOptions) -> (f32, f32) {
        let (xs, ys) = self.scales(opts);
        (
            opts.insets.left as f32 + xs.scale(self.chosen_x_axis.value(d)),
            opts.insets.top as f32 + ys.scale(d.obesity),
        )
    }

    /// Index of the mark under `(px, py)`: the nearest one within the mark
    /// radius, or `None`. Marks with non-finite coordinates never match.
    pub fn mark_at(&self, px: f32, py: f32, opts: &RenderOptions) -> Option<usize> {
        let (xs, ys) = self.scales(opts);
        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        let mut best: Option<(usize, f32)> = None;
        for (i, d) in self.data.iter().enumerate() {
            let cx = l + xs.scale(self.chosen_x_axis.value(d));
            let cy = t + ys.scale(d.obesity);
            if !cx.is_finite() || !cy.is_finite() {
                continue;
            }
            let d2 = dist2(px, py, cx, cy);
            if d2 <= MARK_RADIUS * MARK_RADIUS && best.map_or(true, |(_, bd)| d2 < bd) {
                best = Some((i, d2));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Clickable rectangles of the two x-axis field labels, poverty first.
    /// Derived from layout constants only, so they hold without font metrics.
    pub fn label_boxes(&self, opts: &RenderOptions) -> [(XAxisField, RectI32); 2] {
        let l = opts.insets.left as i32;
        let r = opts.width - opts.insets.right as i32;
        let b = opts.height - opts.insets.bottom as i32;
        let cx = (l + r) / 2;
        let mut out = [(XAxisField::Poverty, RectI32::from_ltwh(0, 0, 0, 0)); 2];
        for (i, field) in XAxisField::ALL.into_iter().enumerate() {
            let baseline = b + FIELD_LABEL_LINES[i];
            out[i] = (
                field,
                RectI32::from_ltwh(
                    cx - FIELD_LABEL_BOX_W / 2,
                    baseline - 16,
                    FIELD_LABEL_BOX_W,
                    FIELD_LABEL_BOX_H,
                ),
            );
        }
        out
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = raster(opts)?;
        self.draw_scene(surface.canvas(), &TextShaper::new(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a tightly-packed RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = raster(opts)?;
        self.draw_scene(surface.canvas(), &TextShaper::new(), opts);

        let w = opts.width.max(1) as u32;
        let h = opts.height.max(1) as u32;
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((px, w, h, stride))
    }

    // ---- scene drawing ------------------------------------------------------

    fn draw_scene(&self, canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let l = opts.insets.left as i32;
        let r = opts.width - opts.insets.right as i32;
        let t = opts.insets.top as i32;
        let b = opts.height - opts.insets.bottom as i32;
        let (xs, ys) = self.scales(opts);

        self.draw_axes(canvas, shaper, opts, &xs, &ys, l, t, r, b);
        self.draw_marks(canvas, shaper, opts, &xs, &ys, l, t);
        self.draw_titles(canvas, shaper, opts, l, t, r, b);

        if opts.draw_labels {
            if let Some(cursor) = opts.hover {
                if let Some(i) = self.mark_at(cursor.0, cursor.1, opts) {
                    Tooltip::for_mark(&self.data[i], self.chosen_x_axis).draw(
                        canvas,
                        shaper,
                        cursor,
                        opts.width as f32,
                        opts.height as f32,
                        &opts.theme,
                    );
                }
            }
        }
    }

    fn draw_axes(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        opts: &RenderOptions,
        xs: &LinearScale,
        ys: &LinearScale,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
    ) {
        let theme = &opts.theme;

        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);

        // X and Y axis lines
        canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
        canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        let (xd0, xd1) = self.displayed_x_domain();
        let xticks = axis::ticks(xd0, xd1, 10);
        for &v in &xticks.values {
            let x = l as f32 + xs.scale(v);
            canvas.draw_line((x, b as f32), (x, b as f32 + TICK_LEN), &tick_paint);
            if opts.draw_labels {
                shaper.draw_centered(
                    canvas,
                    &xticks.label(v),
                    x,
                    b as f32 + TICK_LEN + 12.0,
                    TICK_FONT,
                    theme.tick,
                    false,
                );
            }
        }

        let yticks = axis::ticks(self.y_domain.0, self.y_domain.1, 6);
        for &v in &yticks.values {
            let y = t as f32 + ys.scale(v);
            canvas.draw_line((l as f32 - TICK_LEN, y), (l as f32, y), &tick_paint);
            if opts.draw_labels {
                shaper.draw_right(
                    canvas,
                    &yticks.label(v),
                    l as f32 - TICK_LEN - 3.0,
                    y + 4.0,
                    TICK_FONT,
                    theme.tick,
                    false,
                );
            }
        }
    }

    fn draw_marks(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        opts: &RenderOptions,
        xs: &LinearScale,
        ys: &LinearScale,
        l: i32,
        t: i32,
    ) {
        let theme = &opts.theme;

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.mark_fill);

        for d in &self.data {
            let cx = l as f32 + xs.scale(self.chosen_x_axis.value(d));
            let cy = t as f32 + ys.scale(d.obesity);
            // NaN fields degrade to an invisible mark, never an abort.
            if !cx.is_finite() || !cy.is_finite() {
                continue;
            }
            canvas.draw_circle((cx, cy), MARK_RADIUS, &fill);
            if opts.draw_labels {
                shaper.draw_centered(canvas, &d.abbr, cx, cy + 3.5, ABBR_FONT, theme.mark_label, false);
            }
        }
    }

    fn draw_titles(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        opts: &RenderOptions,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
    ) {
        if !opts.draw_labels {
            return;
        }
        let theme = &opts.theme;
        let cx = (l + r) as f32 * 0.5;

        for (i, field) in XAxisField::ALL.into_iter().enumerate() {
            let active = field == self.chosen_x_axis;
            let color = if active { theme.label_active } else { theme.label_inactive };
            shaper.draw_centered(
                canvas,
                field.label(),
                cx,
                (b + FIELD_LABEL_LINES[i]) as f32,
                FIELD_LABEL_FONT,
                color,
                active,
            );
        }

        // Rotated y-axis title, centered on the plot height.
        let pivot = skia::Point::new(l as f32 - 56.0, (t + b) as f32 * 0.5);
        canvas.save();
        canvas.rotate(-90.0, Some(pivot));
        shaper.draw_centered(canvas, Y_AXIS_LABEL, pivot.x, pivot.y, AXIS_TITLE_FONT, theme.axis_label, false);
        canvas.restore();
    }
}

fn raster(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}
