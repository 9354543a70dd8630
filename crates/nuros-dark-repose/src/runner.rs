//! Desktop runner: one winit window, a wgpu backend and Repose composition.
//!
//! Routes the inputs the card needs: hover enter/leave, left button press and
//! release with capture, focus by click or Tab, and plain text editing for the
//! focused text field. Recomposes on every redraw.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use nuros_dark_core::{Error, WindowConfig};
use repose_core::input::{
    Modifiers, PointerButton, PointerEvent, PointerEventKind, PointerId, PointerKind,
};
use repose_core::{
    Density, Frame, GlyphRasterConfig, HitRegion, RenderBackend, Role, Scheduler, Vec2, View,
    with_density, with_theme,
};
use repose_ui::{Interactions, TextFieldState, layout_and_paint};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{ImePurpose, Window, WindowAttributes, WindowId};

type Root = Box<dyn FnMut(&mut Scheduler) -> View>;

struct App {
    config: WindowConfig,
    theme: repose_core::Theme,
    root: Root,
    window: Option<Arc<Window>>,
    backend: Option<repose_render_wgpu::WgpuBackend>,
    sched: Scheduler,
    frame_cache: Option<Frame>,
    scale: f32,
    mouse_pos: (f32, f32),
    modifiers: Modifiers,
    textfield_states: HashMap<u64, Rc<RefCell<TextFieldState>>>,
    hover_id: Option<u64>,
    capture_id: Option<u64>,
    pressed_ids: HashSet<u64>,
    failure: Option<Error>,
}

impl App {
    fn new(config: WindowConfig, theme: repose_core::Theme, root: Root) -> Self {
        let mut sched = Scheduler::new();
        sched.size = (config.width, config.height);
        Self {
            config,
            theme,
            root,
            window: None,
            backend: None,
            sched,
            frame_cache: None,
            scale: 1.0,
            mouse_pos: (0.0, 0.0),
            modifiers: Modifiers::default(),
            textfield_states: HashMap::new(),
            hover_id: None,
            capture_id: None,
            pressed_ids: HashSet::new(),
            failure: None,
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn fail(&mut self, el: &ActiveEventLoop, err: Error) {
        log::error!("{err}");
        self.failure = Some(err);
        el.exit();
    }

    fn pointer(&self, event: PointerEventKind) -> PointerEvent {
        PointerEvent {
            id: PointerId(0),
            kind: PointerKind::Mouse,
            event,
            position: self.mouse_vec(),
            pressure: 1.0,
            modifiers: self.modifiers,
        }
    }

    fn mouse_vec(&self) -> Vec2 {
        Vec2 {
            x: self.mouse_pos.0,
            y: self.mouse_pos.1,
        }
    }

    fn hit(&self, id: u64) -> Option<&HitRegion> {
        self.frame_cache
            .as_ref()
            .and_then(|f| f.hit_regions.iter().find(|h| h.id == id))
    }

    /// Topmost region under the cursor; regions are sorted low z first.
    fn top_hit(&self) -> Option<&HitRegion> {
        let pos = self.mouse_vec();
        self.frame_cache
            .as_ref()
            .and_then(|f| f.hit_regions.iter().rev().find(|h| h.rect.contains(pos)))
    }

    fn is_textfield(&self, id: u64) -> bool {
        self.frame_cache.as_ref().is_some_and(|f| {
            f.semantics_nodes
                .iter()
                .any(|n| n.id == id && n.role == Role::TextField)
        })
    }

    fn state_key(hit: &HitRegion) -> u64 {
        hit.tf_state_key.unwrap_or(hit.id)
    }

    fn focused_state(&self) -> Option<(u64, Rc<RefCell<TextFieldState>>)> {
        let id = self.sched.focused?;
        let key = self.hit(id).map(Self::state_key).unwrap_or(id);
        self.textfield_states.get(&key).map(|s| (id, s.clone()))
    }

    fn set_focus(&mut self, id: Option<u64>) {
        self.sched.focused = id;
        let text_input = id.is_some_and(|id| self.is_textfield(id));
        if let Some(key) = id.and_then(|id| self.hit(id)).map(Self::state_key) {
            if text_input {
                self.textfield_states
                    .entry(key)
                    .or_insert_with(|| Rc::new(RefCell::new(TextFieldState::new())));
            }
        }
        if let Some(win) = &self.window {
            win.set_ime_allowed(text_input);
            if text_input {
                win.set_ime_purpose(ImePurpose::Normal);
            }
        }
        log::debug!("focus -> {id:?}");
    }

    fn notify_text_change(&self, id: u64, text: String) {
        if let Some(cb) = self.hit(id).and_then(|h| h.on_text_change.clone()) {
            cb(text);
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextFieldState)) {
        if let Some((id, state)) = self.focused_state() {
            let text = {
                let mut st = state.borrow_mut();
                edit(&mut st);
                st.text.clone()
            };
            self.notify_text_change(id, text);
            self.request_redraw();
        }
    }

    fn cursor_moved(&mut self, x: f32, y: f32) {
        self.mouse_pos = (x, y);
        let top = self.top_hit().map(|h| h.id);

        if top != self.hover_id {
            let leave = self
                .hover_id
                .and_then(|id| self.hit(id))
                .and_then(|h| h.on_pointer_leave.clone());
            if let Some(cb) = leave {
                cb(self.pointer(PointerEventKind::Leave));
            }
            let enter = top
                .and_then(|id| self.hit(id))
                .and_then(|h| h.on_pointer_enter.clone());
            if let Some(cb) = enter {
                cb(self.pointer(PointerEventKind::Enter));
            }
            self.hover_id = top;
            self.request_redraw();
        }

        // Captured region gets moves first.
        let target = self.capture_id.or(top);
        if let Some(cb) = target
            .and_then(|id| self.hit(id))
            .and_then(|h| h.on_pointer_move.clone())
        {
            cb(self.pointer(PointerEventKind::Move));
        }
    }

    fn mouse_pressed(&mut self) {
        let Some((id, focusable, down)) = self
            .top_hit()
            .map(|h| (h.id, h.focusable, h.on_pointer_down.clone()))
        else {
            self.set_focus(None);
            self.request_redraw();
            return;
        };

        self.capture_id = Some(id);
        self.pressed_ids.insert(id);
        if focusable {
            self.set_focus(Some(id));
        }
        if let Some(cb) = down {
            cb(self.pointer(PointerEventKind::Down(PointerButton::Primary)));
        }
        self.request_redraw();
    }

    fn mouse_released(&mut self) {
        let Some(cid) = self.capture_id.take() else {
            return;
        };
        self.pressed_ids.remove(&cid);

        let pos = self.mouse_vec();
        let (up, click) = match self.hit(cid) {
            Some(h) => (
                h.on_pointer_up.clone(),
                h.on_click.clone().filter(|_| h.rect.contains(pos)),
            ),
            None => (None, None),
        };
        if let Some(cb) = up {
            cb(self.pointer(PointerEventKind::Up(PointerButton::Primary)));
        }
        if let Some(cb) = click {
            cb();
        }
        self.request_redraw();
    }

    fn cycle_focus(&mut self) {
        let Some(chain) = self.frame_cache.as_ref().map(|f| f.focus_chain.clone()) else {
            return;
        };
        if chain.is_empty() {
            return;
        }
        let pos = self
            .sched
            .focused
            .and_then(|cur| chain.iter().position(|&id| id == cur));
        let next = match pos {
            Some(i) if self.modifiers.shift => chain[(i + chain.len() - 1) % chain.len()],
            Some(i) => chain[(i + 1) % chain.len()],
            None => chain[0],
        };
        self.set_focus(Some(next));
        self.request_redraw();
    }

    fn key_pressed(&mut self, code: Option<KeyCode>, text: Option<&str>) {
        let shift = self.modifiers.shift;
        match code {
            Some(KeyCode::Tab) => return self.cycle_focus(),
            Some(KeyCode::Backspace) => return self.edit_focused(|st| st.delete_backward()),
            Some(KeyCode::Delete) => return self.edit_focused(|st| st.delete_forward()),
            Some(KeyCode::ArrowLeft) => return self.edit_focused(|st| st.move_cursor(-1, shift)),
            Some(KeyCode::ArrowRight) => return self.edit_focused(|st| st.move_cursor(1, shift)),
            Some(KeyCode::Home) => return self.edit_focused(|st| st.selection = 0..0),
            Some(KeyCode::End) => {
                return self.edit_focused(|st| {
                    let end = st.text.len();
                    st.selection = end..end;
                });
            }
            _ => {}
        }

        if self.modifiers.ctrl || self.modifiers.alt || self.modifiers.meta {
            return;
        }
        let typed: String = text
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_control())
            .collect();
        if !typed.is_empty() {
            self.edit_focused(|st| st.insert_text(&typed));
        }
    }

    fn redraw(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        let focused = self.sched.focused;
        let interactions = Interactions {
            hover: self.hover_id,
            pressed: self.pressed_ids.clone(),
        };
        let tf_states = &self.textfield_states;
        let theme = self.theme;
        let density = Density { scale: self.scale };

        let frame = with_density(density, || {
            with_theme(theme, || {
                self.sched.repose(&mut self.root, |view, size| {
                    layout_and_paint(view, size, tf_states, &interactions, focused)
                })
            })
        });

        backend.frame(&frame.scene, GlyphRasterConfig { px: 18.0 });
        self.frame_cache = Some(frame);
    }
}

impl ApplicationHandler<()> for App {
    fn resumed(&mut self, el: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let win = match el.create_window(attrs) {
            Ok(win) => Arc::new(win),
            Err(e) => return self.fail(el, Error::Window(e.to_string())),
        };
        let size = win.inner_size();
        self.sched.size = (size.width, size.height);
        self.scale = win.scale_factor() as f32;
        log::info!(
            "window {:?} opened at {}x{} (scale {})",
            self.config.title,
            size.width,
            size.height,
            self.scale
        );

        match repose_render_wgpu::WgpuBackend::new(win.clone()) {
            Ok(b) => {
                self.backend = Some(b);
                self.window = Some(win);
                self.request_redraw();
            }
            Err(e) => self.fail(el, Error::Renderer(format!("{e:#}"))),
        }
    }

    fn window_event(&mut self, el: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                el.exit();
            }
            WindowEvent::Resized(size) => {
                self.sched.size = (size.width, size.height);
                if let Some(b) = &mut self.backend {
                    b.configure_surface(size.width, size.height);
                }
                self.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale = scale_factor as f32;
                self.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                // Off-window: pretend the pointer is nowhere.
                self.cursor_moved(f32::NEG_INFINITY, f32::NEG_INFINITY);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.mouse_pressed(),
                ElementState::Released => self.mouse_released(),
            },
            WindowEvent::ModifiersChanged(new_mods) => {
                let s = new_mods.state();
                self.modifiers.shift = s.shift_key();
                self.modifiers.ctrl = s.control_key();
                self.modifiers.alt = s.alt_key();
                self.modifiers.meta = s.super_key();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    let code = match event.physical_key {
                        PhysicalKey::Code(code) => Some(code),
                        PhysicalKey::Unidentified(_) => None,
                    };
                    self.key_pressed(code, event.text.as_deref());
                }
            }
            WindowEvent::Ime(winit::event::Ime::Commit(text)) => {
                self.edit_focused(|st| st.insert_text(&text));
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _el: &ActiveEventLoop) {
        self.request_redraw();
    }
}

/// Open the window described by `config` and run until it is closed.
pub fn run_desktop_app(
    config: WindowConfig,
    theme: repose_core::Theme,
    root: impl FnMut(&mut Scheduler) -> View + 'static,
) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App::new(config, theme, Box::new(root));
    event_loop.run_app(&mut app)?;
    match app.failure.take() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
