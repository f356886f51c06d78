use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputEvent, InputState, Key, Modifiers, MouseButton};
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "kinora".to_string(),
            initial_size: LogicalSize::new(1370.0, 720.0),
        }
    }
}

/// Single-window event loop driver.
pub struct Runtime;

impl Runtime {
    /// Opens the window described by `config` and drives `app` until the
    /// window closes or a callback asks to exit.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = Handler { config, app, window: None };
        event_loop
            .run_app(&mut handler)
            .context("winit event loop terminated with error")?;
        Ok(())
    }
}

/// The open window and what the runtime tracks for it.
struct WindowEntry {
    window: Window,
    input: InputState,
    clock: FrameClock,
    logical_size: (u32, u32),
}

impl WindowEntry {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        let window = event_loop.create_window(attrs).context("failed to create window")?;
        let logical_size = logical_size_u32(&window);
        Ok(Self { window, input: InputState::default(), clock: FrameClock::default(), logical_size })
    }

    /// Re-reads the window size; returns it if it changed.
    fn refresh_size(&mut self) -> Option<(u32, u32)> {
        let size = logical_size_u32(&self.window);
        (size != self.logical_size).then(|| {
            self.logical_size = size;
            size
        })
    }
}

struct Handler<A: App> {
    config: RuntimeConfig,
    app: A,
    window: Option<WindowEntry>,
}

impl<A: App> Handler<A> {
    /// Runs update then draw. Returns the update's verdict.
    fn frame(&mut self) -> AppControl {
        let Some(entry) = &mut self.window else { return AppControl::Continue };
        let mut ctx = FrameCtx {
            window: &entry.window,
            input: &entry.input,
            time: entry.clock.tick(),
        };
        let control = self.app.on_update(&mut ctx);
        if control == AppControl::Continue {
            self.app.on_draw(&mut ctx);
        }
        control
    }
}

impl<A: App> ApplicationHandler for Handler<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match WindowEntry::open(event_loop, &self.config) {
            Ok(entry) => {
                let (w, h) = entry.logical_size;
                log::debug!("window opened at {w}x{h}");
                self.app.on_resize(w, h);
                entry.window.request_redraw();
                self.window = Some(entry);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        // Continuous redraw: widget timers advance once per frame.
        if let Some(entry) = &self.window {
            entry.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(entry) = &mut self.window else { return };
        if let Some(ev) = translate_input_event(&entry.window, &event) {
            entry.input.apply_event(&ev);
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some((w, h)) = entry.refresh_size() {
                    self.app.on_resize(w, h);
                }
                entry.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if self.frame() == AppControl::Exit {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn logical_size_u32(window: &Window) -> (u32, u32) {
    let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    (logical.width.max(0.0) as u32, logical.height.max(0.0) as u32)
}

/// Maps a window event onto the level change it implies, if any.
fn translate_input_event(window: &Window, event: &WindowEvent) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(map_modifiers(m.state())),
        WindowEvent::Focused(f) => InputEvent::Focused(*f),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f64>(window.scale_factor());
            InputEvent::PointerMoved { x: logical.x as f32, y: logical.y as f32 }
        }
        WindowEvent::MouseInput { state, button, .. } => InputEvent::PointerButton {
            button: map_mouse_button(*button),
            pressed: state.is_pressed(),
        },
        // Auto-repeat does not change what is held.
        WindowEvent::KeyboardInput { event, .. } if !event.repeat => InputEvent::Key {
            key: map_key(event.physical_key),
            pressed: event.state.is_pressed(),
        },
        _ => return None,
    };
    Some(ev)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[rustfmt::skip]
const KEY_TABLE: &[(KeyCode, Key)] = &[
    (KeyCode::Escape, Key::Escape), (KeyCode::Enter, Key::Enter), (KeyCode::NumpadEnter, Key::Enter),
    (KeyCode::Tab, Key::Tab), (KeyCode::Backspace, Key::Backspace), (KeyCode::Space, Key::Space),
    (KeyCode::Insert, Key::Insert), (KeyCode::Delete, Key::Delete),
    (KeyCode::Home, Key::Home), (KeyCode::End, Key::End),
    (KeyCode::PageUp, Key::PageUp), (KeyCode::PageDown, Key::PageDown),
    (KeyCode::ArrowUp, Key::ArrowUp), (KeyCode::ArrowDown, Key::ArrowDown),
    (KeyCode::ArrowLeft, Key::ArrowLeft), (KeyCode::ArrowRight, Key::ArrowRight),
    (KeyCode::ShiftLeft, Key::Shift), (KeyCode::ShiftRight, Key::Shift),
    (KeyCode::ControlLeft, Key::Control), (KeyCode::ControlRight, Key::Control),
    (KeyCode::AltLeft, Key::Alt), (KeyCode::AltRight, Key::Alt),
    (KeyCode::SuperLeft, Key::Meta), (KeyCode::SuperRight, Key::Meta),
    (KeyCode::KeyA, Key::A), (KeyCode::KeyB, Key::B), (KeyCode::KeyC, Key::C), (KeyCode::KeyD, Key::D),
    (KeyCode::KeyE, Key::E), (KeyCode::KeyF, Key::F), (KeyCode::KeyG, Key::G), (KeyCode::KeyH, Key::H),
    (KeyCode::KeyI, Key::I), (KeyCode::KeyJ, Key::J), (KeyCode::KeyK, Key::K), (KeyCode::KeyL, Key::L),
    (KeyCode::KeyM, Key::M), (KeyCode::KeyN, Key::N), (KeyCode::KeyO, Key::O), (KeyCode::KeyP, Key::P),
    (KeyCode::KeyQ, Key::Q), (KeyCode::KeyR, Key::R), (KeyCode::KeyS, Key::S), (KeyCode::KeyT, Key::T),
    (KeyCode::KeyU, Key::U), (KeyCode::KeyV, Key::V), (KeyCode::KeyW, Key::W), (KeyCode::KeyX, Key::X),
    (KeyCode::KeyY, Key::Y), (KeyCode::KeyZ, Key::Z),
    (KeyCode::Digit0, Key::Digit0), (KeyCode::Digit1, Key::Digit1), (KeyCode::Digit2, Key::Digit2),
    (KeyCode::Digit3, Key::Digit3), (KeyCode::Digit4, Key::Digit4), (KeyCode::Digit5, Key::Digit5),
    (KeyCode::Digit6, Key::Digit6), (KeyCode::Digit7, Key::Digit7), (KeyCode::Digit8, Key::Digit8),
    (KeyCode::Digit9, Key::Digit9),
    (KeyCode::Minus, Key::Minus), (KeyCode::Equal, Key::Equal),
    (KeyCode::BracketLeft, Key::BracketLeft), (KeyCode::BracketRight, Key::BracketRight),
    (KeyCode::Backslash, Key::Backslash), (KeyCode::Semicolon, Key::Semicolon),
    (KeyCode::Quote, Key::Quote), (KeyCode::Backquote, Key::Backquote),
    (KeyCode::Comma, Key::Comma), (KeyCode::Period, Key::Period), (KeyCode::Slash, Key::Slash),
    (KeyCode::F1, Key::F1), (KeyCode::F2, Key::F2), (KeyCode::F3, Key::F3), (KeyCode::F4, Key::F4),
    (KeyCode::F5, Key::F5), (KeyCode::F6, Key::F6), (KeyCode::F7, Key::F7), (KeyCode::F8, Key::F8),
    (KeyCode::F9, Key::F9), (KeyCode::F10, Key::F10), (KeyCode::F11, Key::F11), (KeyCode::F12, Key::F12),
];

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => KEY_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(Key::Unknown(code as u32), |&(_, key)| key),
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
