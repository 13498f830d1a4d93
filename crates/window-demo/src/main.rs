// File: crates/window-demo/src/main.rs
// Summary: Windowed demo with hover tooltip and clickable axis labels,
// rendered via RGBA blit (CPU) using winit + softbuffer.

use scatter_core::{load_states_csv, theme, RenderOptions, ScatterChart, Theme};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    init_logging();

    // Arg: CSV path, defaulting to the bundled dataset
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/data/data.csv".to_string());

    // Any load failure is reported and the render never starts.
    let data = match load_states_csv(Path::new(&raw)) {
        Ok(data) => data,
        Err(err) => {
            error!("loading {raw}: {err}");
            return;
        }
    };
    if data.is_empty() {
        error!("no rows loaded from {raw}");
        return;
    }
    info!("loaded {} states", data.len());

    let mut chart = ScatterChart::new(data);

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Statewise Scatter — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 500.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let themes = theme::presets();
    let mut theme_idx = 0usize;
    let mut size = window.inner_size();
    let mut cursor: Option<(f32, f32)> = None;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x as f32, position.y as f32));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    // A click on the already-active label changes nothing and
                    // schedules no redraw.
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        if let Some((cx, cy)) = cursor {
                            let opts = options(size, &themes[theme_idx], cursor);
                            for (field, rect) in chart.label_boxes(&opts) {
                                if rect.contains(cx as i32, cy as i32) && chart.select_x_field(field) {
                                    info!("x axis now {:?}", field);
                                    last_frame = Instant::now();
                                    window.request_redraw();
                                }
                            }
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed
                        && input.virtual_keycode == Some(VirtualKeyCode::T)
                    {
                        theme_idx = (theme_idx + 1) % themes.len();
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if chart.is_animating() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let dt = (now - last_frame).as_secs_f32();
                last_frame = now;
                chart.tick(dt);

                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let opts = options(size, &themes[theme_idx], cursor);

                // Render to RGBA and convert to packed ARGB for softbuffer
                match chart.render_to_rgba8(&opts) {
                    Ok((rgba, _, _, _)) => {
                        let mut frame = surface.buffer_mut().expect("frame");
                        let max_px = frame.len().min(rgba.len() / 4);
                        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                            let r = px[0] as u32;
                            let g = px[1] as u32;
                            let b = px[2] as u32;
                            let a = px[3] as u32;
                            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                        }
                        if let Err(e) = frame.present() {
                            error!("present error: {e:?}");
                        }
                    }
                    Err(err) => error!("render error: {err:#}"),
                }

                if chart.is_animating() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    });
}

fn options(size: winit::dpi::PhysicalSize<u32>, theme: &Theme, hover: Option<(f32, f32)>) -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = size.width.max(1) as i32;
    opts.height = size.height.max(1) as i32;
    opts.theme = *theme;
    opts.hover = hover;
    opts
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
