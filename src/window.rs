//! Top-level window: owns the backend, the widget arena, the fonts, the
//! shared theme, and the root container, and drives the frame loop.
//!
//! Each frame: drain input (quit and resize are routed specially, everything
//! else goes into the tree), run the caller's per-frame callback, re-arrange
//! the root at the current window-to-initial-size scale, clear to the theme
//! background, render, present. Resizing therefore changes only the scale
//! factors - the logical tree is untouched.

use std::rc::Rc;

use crate::arena::{WidgetArena, WidgetId};
use crate::backend::Backend;
use crate::event::Event;
use crate::font::FontManager;
use crate::layout::Container;
use crate::small_string::SmallString;
use crate::theme::Theme;
use crate::widget::Widget;

pub struct Window<B: Backend> {
    backend: B,
    title: SmallString<64>,
    width: i32,
    height: i32,
    initial_width: i32,
    initial_height: i32,
    running: bool,
    theme: Rc<Theme>,
    fonts: FontManager,
    arena: WidgetArena,
    root: Option<Container>,
}

impl<B: Backend> Window<B> {
    pub fn new(mut backend: B, title: &str, width: i32, height: i32) -> Self {
        backend.set_title(title);
        Self {
            backend,
            title: SmallString::from(title),
            width,
            height,
            initial_width: width.max(1),
            initial_height: height.max(1),
            running: false,
            theme: Rc::new(Theme::default()),
            fonts: FontManager::new(),
            arena: WidgetArena::new(),
            root: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = SmallString::from(title);
        self.backend.set_title(title);
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Uniform scale derived from the current size against the initial one.
    pub fn scale_factors(&self) -> (f32, f32) {
        (
            self.width as f32 / self.initial_width as f32,
            self.height as f32 / self.initial_height as f32,
        )
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn arena(&self) -> &WidgetArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut WidgetArena {
        &mut self.arena
    }

    pub fn fonts(&self) -> &FontManager {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontManager {
        &mut self.fonts
    }

    /// Arena and font manager together, for calls that need both (for
    /// example [`crate::tabs::TabContainer::add_tab`]).
    pub fn stores_mut(&mut self) -> (&mut WidgetArena, &mut FontManager) {
        (&mut self.arena, &mut self.fonts)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Store a widget with the window theme already applied.
    pub fn add(&mut self, mut widget: Widget) -> WidgetId {
        widget.set_theme(&self.theme, &mut self.fonts);
        self.arena.insert(widget)
    }

    /// Install the root container: the theme is broadcast through it and an
    /// initial arrangement is computed at scale 1.
    pub fn set_root(&mut self, root: impl Into<Container>) {
        let mut root = root.into();
        let theme = Rc::clone(&self.theme);
        root.set_theme(&mut self.arena, &mut self.fonts, &theme);
        root.update_layout(
            &mut self.arena,
            &self.fonts,
            0,
            0,
            self.width,
            self.height,
            1.0,
            1.0,
        );
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Container> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Container> {
        self.root.as_mut()
    }

    /// Replace the shared theme and rebroadcast it through the whole tree.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Rc::new(theme);
        let theme = Rc::clone(&self.theme);
        if let Some(root) = &mut self.root {
            root.set_theme(&mut self.arena, &mut self.fonts, &theme);
        }
    }

    /// True between `run` starting and a quit being requested.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop to stop after the current frame.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Drive frames until quit. The callback runs once per frame with the
    /// arena and a keep-running flag it may clear.
    pub fn run(&mut self, mut per_frame: impl FnMut(&mut WidgetArena, &mut bool)) {
        self.running = true;
        while self.running {
            self.run_frame(&mut per_frame);
        }
    }

    /// One iteration of the frame loop.
    pub fn run_frame(&mut self, per_frame: &mut impl FnMut(&mut WidgetArena, &mut bool)) {
        // 1. Drain input.
        for event in self.backend.poll_events() {
            match event {
                Event::Quit => self.running = false,
                Event::Resized { width, height } => {
                    self.width = width;
                    self.height = height;
                }
                event => {
                    if let Some(root) = &mut self.root {
                        root.handle_event(&mut self.arena, &event);
                    }
                }
            }
        }

        // 2. Per-frame callback.
        per_frame(&mut self.arena, &mut self.running);

        // 3. Re-arrange at the current scale.
        let (sx, sy) = self.scale_factors();
        if let Some(root) = &mut self.root {
            root.update_layout(
                &mut self.arena,
                &self.fonts,
                0,
                0,
                self.width,
                self.height,
                sx,
                sy,
            );
        }

        // 4-6. Clear, render, present.
        self.backend.begin_frame(self.theme.background);
        if let Some(root) = &self.root {
            root.render(&self.arena, &self.fonts, self.backend.painter());
        }
        self.backend.present();
    }
}
