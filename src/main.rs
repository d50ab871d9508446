//! Hangman - Entry Point
//!
//! Opens the game window, loads the hangman images and runs the
//! fixed-rate event loop.
//! Controls:
//!   Left click: Choose subject / guess letter / Hint, Quit, Restart
//!   Escape: Quit

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use egui_winit::State as EguiWinitState;
use glam::Vec2;
use winit::{
    dpi::{LogicalPosition, LogicalSize},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use hangman::core::config::{GameConfig, CONFIG_FILE};
use hangman::core::{FrameClock, Result};
use hangman::game::{LoopAction, Session};
use hangman::renderer::{GallowsImages, Renderer};
use hangman::ui::{draw_ui, GameUi};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Hangman");

    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE))?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Hangman Game!")
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    // Create egui context and state
    let egui_ctx = egui::Context::default();
    let mut egui_winit_state = EguiWinitState::new(
        egui_ctx.clone(),
        egui::ViewportId::ROOT,
        &window,
        None,
        None,
    );

    let images = GallowsImages::load_or_generate(&config.asset_dir);
    let mut game_ui = GameUi::new(&egui_ctx, &images);
    let mut session = Session::new(&config);
    let mut rng = rand::thread_rng();

    let mut clock = FrameClock::new(config.tick_period(), Instant::now());
    let mut last_report = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { ref event, .. } => {
            // egui only needs events for its own bookkeeping; all game
            // input is hit-tested against the layout below
            let _ = egui_winit_state.on_window_event(&window, event);

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }

                WindowEvent::Resized(size) => {
                    renderer.resize(size.width, size.height);
                }

                WindowEvent::CursorMoved { position, .. } => {
                    let logical: LogicalPosition<f32> = position.to_logical(window.scale_factor());
                    game_ui.move_cursor(Vec2::new(logical.x, logical.y));
                }

                WindowEvent::CursorLeft { .. } => {
                    game_ui.leave();
                }

                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(point) = game_ui.cursor {
                        if session.click(point, &mut rng) == LoopAction::Quit {
                            tracing::info!("Quit requested");
                            elwt.exit();
                        }
                    }
                }

                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed
                        && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    {
                        elwt.exit();
                    }
                }

                WindowEvent::RedrawRequested => {
                    let raw_input = egui_winit_state.take_egui_input(&window);
                    let mut full_output =
                        egui_ctx.run(raw_input, |ctx| draw_ui(ctx, &game_ui, &session));
                    let platform_output = std::mem::take(&mut full_output.platform_output);
                    egui_winit_state.handle_platform_output(&window, platform_output);

                    match renderer.render(&egui_ctx, full_output) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let (w, h) = renderer.size();
                            renderer.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            tracing::error!("Out of GPU memory!");
                            elwt.exit();
                        }
                        Err(e) => {
                            tracing::warn!("Render error: {:?}", e);
                        }
                    }
                }

                _ => {}
            }
        }

        Event::AboutToWait => {
            let now = Instant::now();
            if clock.is_due(now) {
                let dt = clock.advance(now);
                session.tick(dt, &mut rng);
                window.request_redraw();

                if now.duration_since(last_report) >= Duration::from_secs(1) {
                    tracing::debug!(fps = clock.fps(), "Frame rate");
                    last_report = now;
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(clock.deadline()));
        }

        _ => {}
    })?;

    Ok(())
}
