use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use beam_viewer::cli::Cli;
use beam_viewer::{
    BeamScene, DrawSurface, FrameClock, SceneLifecycle, SurfaceRenderer,
};

const SURFACE_WIDTH: u32 = 500;
const SURFACE_HEIGHT: u32 = 400;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    session: Option<BeamScene>,
    clock: FrameClock,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            session: None,
            clock: FrameClock::new(),
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(session) = self.session.take() {
            self.deactivate(session);
        }
        event_loop.exit();
    }
}

impl SceneLifecycle for App {
    type Session = BeamScene;

    fn activate(&mut self, surface: Option<&dyn DrawSurface>) -> Option<BeamScene> {
        let window = self.window.clone()?;
        let renderer = match SurfaceRenderer::new(window) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("failed to initialize renderer: {e}");
                return None;
            }
        };
        BeamScene::build(surface, Box::new(renderer))
    }

    fn deactivate(&mut self, session: BeamScene) {
        session.dispose();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("Beam Viewer")
                .with_inner_size(PhysicalSize::new(SURFACE_WIDTH, SURFACE_HEIGHT))
                .with_resizable(false);
            let window = match event_loop.create_window(attributes) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window);
        }

        if self.session.is_none() {
            let window = self.window.clone();
            let surface = window.as_deref().map(|w| w as &dyn DrawSurface);
            self.session = self.activate(surface);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = self.session.take() {
            self.deactivate(session);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::RedrawRequested => {
                self.clock.tick();

                let mut frame_limit_reached = false;
                if let Some(session) = self.session.as_mut() {
                    if let Err(e) = session.tick() {
                        log::error!("render error: {e}");
                    }

                    if let Some(limit) = self.cli.frames {
                        frame_limit_reached = session.frames() >= limit;
                    }
                }
                if frame_limit_reached {
                    self.shutdown(event_loop);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Beam Viewer - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
