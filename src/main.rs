//! Lifegrid - Conway's Game of Life
//!
//! Paint cells with the mouse (left alive, right dead), Space to run or pause,
//! Up/Down to change frames per generation, R to reset, I to invert, Escape to quit.

use std::error::Error;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use lifegrid::config::AppConfig;
use lifegrid::input::InputMapper;
use lifegrid::systems::{
    FramePacer, RenderError, RenderSystem, SimulationSystem, WindowSystem,
};
use lifegrid_core::FrameOutcome;
use lifegrid_input::InputState;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    input: InputState,
    pacer: FramePacer,
    /// Fatal error that stopped the event loop
    failure: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig, simulation: SimulationSystem) -> Self {
        let pacer = FramePacer::new(config.simulation.target_fps);
        Self {
            config,
            window: None,
            render: None,
            simulation,
            input: InputState::new(),
            pacer,
            failure: None,
        }
    }

    /// Map this frame's input and run the simulation
    fn run_frame(&mut self) -> FrameOutcome {
        let frame_input = InputMapper::frame_input(&mut self.input);
        self.simulation.update(&frame_input)
    }

    /// Draw the settled grid
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = &mut self.render else {
            return;
        };

        match render.render_frame(self.simulation.controller().grid()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                render.reconfigure();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                self.failure = Some(Box::new(RenderError::OutOfMemory));
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    fn refresh_title(&mut self) {
        if let Some(window) = &mut self.window {
            let title = self.simulation.status_title(window.base_title());
            window.update_title(title);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        log::error!("{}", error);
        self.failure = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, Box::new(e)),
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, Box::new(e)),
        };

        let (width, height) = render.size();
        log::info!("Window ready at {}x{}", width, height);

        self.window = Some(window);
        self.render = Some(render);
        self.refresh_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.input.process_cursor_left();
            }

            WindowEvent::Focused(false) => {
                self.input.process_focus_lost();
            }

            WindowEvent::RedrawRequested => {
                // Input and the generation step settle before anything is drawn
                let outcome = self.run_frame();
                if outcome.quit {
                    event_loop.exit();
                    return;
                }

                self.render_frame(event_loop);
                self.refresh_title();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.pacer.is_due(now) {
            self.pacer.frame_started(now);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_frame()));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Config comes first so it can set the default log filter
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Lifegrid");

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if let Err(e) = config.validate() {
        log::error!("{}", e);
        return Err(e.into());
    }

    let simulation = SimulationSystem::from_config(&config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, simulation);
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use winit::event::{ElementState, MouseButton};
    use winit::keyboard::KeyCode;

    fn headless_app() -> App {
        let mut config = AppConfig::default();
        config.window.width = 200;
        config.window.height = 200;
        config.simulation.initial_tick_threshold = 1;
        let simulation = SimulationSystem::from_config(&config).unwrap();
        App::new(config, simulation)
    }

    #[test]
    fn test_paint_then_run() {
        let mut app = headless_app();

        // Paint a horizontal blinker by dragging across three tiles
        app.input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        for x in [30.0, 50.0, 70.0] {
            app.input.process_cursor_moved(x, 50.0);
            let outcome = app.run_frame();
            assert!(outcome.painted);
            assert!(!outcome.advanced);
        }
        app.input.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(app.simulation.controller().grid().alive_count(), 3);

        app.input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        let outcome = app.run_frame();
        assert!(outcome.advanced);

        let grid = app.simulation.controller().grid();
        assert!(grid.is_alive(1, 2) && grid.is_alive(2, 2) && grid.is_alive(3, 2));
        assert_eq!(grid.alive_count(), 3);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = headless_app();
        app.input.process_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert!(app.run_frame().quit);
    }

    #[test]
    fn test_held_down_arrow_stops_at_one() {
        let mut app = headless_app();
        app.input.process_keyboard(KeyCode::ArrowDown, ElementState::Pressed);
        for _ in 0..5 {
            app.run_frame();
        }
        assert_eq!(app.simulation.controller().tick_threshold(), 1);
    }

    #[test]
    fn test_reset_pauses_and_clears() {
        let mut app = headless_app();
        app.input.process_keyboard(KeyCode::KeyI, ElementState::Pressed);
        app.input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        app.run_frame();
        assert!(app.simulation.controller().is_running());

        app.input.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        app.run_frame();
        assert!(!app.simulation.controller().is_running());
        assert_eq!(app.simulation.controller().grid().alive_count(), 0);
    }
}
