use winit::dpi::LogicalSize;
use winit::event::WindowEvent;

use kinora_engine::coords::{CanvasSpace, Size};
use kinora_engine::core::{App as EngineApp, AppControl, FrameCtx};
use kinora_engine::input::{CanvasInput, Key};
use kinora_engine::logging::{LoggingConfig, init_logging};
use kinora_engine::render::{LogPresenter, Presenter};
use kinora_engine::scene::DrawList;
use kinora_engine::window::{Runtime, RuntimeConfig};

use crate::scene::{UiConfig, UiScene};

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Configure the window, canvas and presenter, then start the event loop
/// with [`run`](Application::run), which builds the widget tree once and
/// drives `update` + `draw` every frame.
///
/// ```rust,ignore
/// Application::new()
///     .title("Kinora")
///     .canvas(1370, 720)
///     .run(|scene: &mut UiScene| {
///         let root = scene.root();
///         scene.add(root, Label::new("Films", 18.0, Color::WHITE), Rect::new(20, 10, 200, 24));
///     });
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    config: UiConfig,
    logging: LoggingConfig,
    presenter: Box<dyn Presenter>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "kinora".to_string(),
            width: 1370.0,
            height: 720.0,
            config: UiConfig::default(),
            logging: LoggingConfig::default(),
            presenter: Box::new(LogPresenter::new()),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the logical canvas the widget tree is laid out on. The canvas is
    /// scaled to fit the window.
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.config.canvas = Size::new(width, height);
        self
    }

    /// Replace the set of keys polled every frame.
    pub fn tracked_keys(mut self, keys: impl Into<Vec<Key>>) -> Self {
        self.config.tracked_keys = keys.into();
        self
    }

    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging = config;
        self
    }

    /// Set the presenter that turns each frame's draw list into pixels.
    pub fn presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    /// Start the event loop.
    ///
    /// `build` is called once with the fresh scene to create the widget
    /// tree. This never returns.
    pub fn run<F>(self, build: F) -> !
    where
        F: FnOnce(&mut UiScene),
    {
        init_logging(self.logging.clone());

        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        let state = UiAppState::new(self, build);

        Runtime::run(config, state).unwrap_or_else(|e| {
            log::error!("kinora runtime error: {e:#}");
            std::process::exit(1);
        });
        // Runtime::run only returns once the event loop has exited.
        std::process::exit(0);
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `kinora_engine::core::App`.
///
/// User code never sees this type.
struct UiAppState {
    scene: UiScene,
    canvas: CanvasSpace,
    draw_list: DrawList,
    presenter: Box<dyn Presenter>,
}

impl UiAppState {
    fn new<F>(app: Application, build: F) -> Self
    where
        F: FnOnce(&mut UiScene),
    {
        let canvas = CanvasSpace::new(app.config.canvas.width, app.config.canvas.height);
        let mut scene = UiScene::new(app.config);
        build(&mut scene);
        log::info!("scene built: {} widget(s) on a {}x{} canvas", scene.widget_count(), canvas.width, canvas.height);

        Self {
            scene,
            canvas,
            draw_list: DrawList::new(),
            presenter: app.presenter,
        }
    }
}

impl EngineApp for UiAppState {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::CloseRequested = event {
            log::info!("close requested");
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        let scale = self.canvas.fit_scale((width as f32, height as f32));
        log::debug!("window resized to {width}x{height}, canvas scale {scale:.3}");
    }

    fn on_update(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let input = CanvasInput::new(ctx.input, ctx.logical_size(), self.canvas);
        self.scene.update(ctx.time.dt_ms(), &input);
        AppControl::Continue
    }

    fn on_draw(&mut self, ctx: &mut FrameCtx<'_>) {
        self.draw_list.clear();
        self.scene.draw(&mut self.draw_list);
        self.presenter.present(ctx.window, self.canvas, &self.draw_list);
    }
}
