// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub mark_fill: skia::Color,
    pub mark_label: skia::Color,
    pub label_active: skia::Color,
    pub label_inactive: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 252, 252, 254),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            mark_fill: skia::Color::from_argb(200, 137, 189, 211),
            mark_label: skia::Color::from_argb(255, 255, 255, 255),
            label_active: skia::Color::from_argb(255, 20, 20, 30),
            label_inactive: skia::Color::from_argb(255, 170, 170, 178),
            tooltip_bg: skia::Color::from_argb(230, 40, 44, 52),
            tooltip_text: skia::Color::from_argb(255, 245, 245, 250),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            mark_fill: skia::Color::from_argb(200, 86, 156, 196),
            mark_label: skia::Color::from_argb(255, 240, 246, 250),
            label_active: skia::Color::from_argb(255, 235, 235, 245),
            label_inactive: skia::Color::from_argb(255, 110, 110, 120),
            tooltip_bg: skia::Color::from_argb(235, 235, 235, 242),
            tooltip_text: skia::Color::from_argb(255, 24, 24, 30),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
