// File: crates/window-demo/src/main.rs
// Summary: Windowed viewer that blits a rendered figure via winit + softbuffer; blocks until close.

use scaling_core::pipeline::{compose_from_dataset, ChartConfig};
use scaling_core::{theme, Dataset, SPEEDUP_COLUMN};
use scaling_render_skia::SkiaRenderer;
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    // Args: CSV path, optional theme name
    let raw = std::env::args().nth(1).unwrap_or_else(|| "output.csv".to_string());
    let theme = theme::find(&std::env::args().nth(2).unwrap_or_else(|| "dark".to_string()));

    let dataset = match Dataset::from_path(&raw) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    // Prefer the dual-axis chart; duration-only when the file has no speedup.
    let mut config = if dataset.has_column(SPEEDUP_COLUMN) {
        ChartConfig::duration_and_speedup()
    } else {
        ChartConfig::duration()
    }
    .with_theme(theme);

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scalegraph — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let renderer = SkiaRenderer::new(theme);
    let mut size = window.inner_size();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                // Re-compose at the window size; composition is cheap next to the blit.
                config.width = w as i32;
                config.height = h as i32;
                let figure = match compose_from_dataset(&dataset, &config) {
                    Ok(f) => f,
                    Err(e) => {
                        eprintln!("{e}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                };
                let (rgba, _, _, _) = match renderer.render_to_rgba8(&figure) {
                    Ok(px) => px,
                    Err(e) => {
                        eprintln!("render error: {e}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                };

                // Convert RGBA to the 0RGB u32 layout softbuffer expects
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
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
