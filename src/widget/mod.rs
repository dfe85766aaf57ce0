//! Widget kinds and shared widget machinery.
//!
//! A [`Widget`] is a positioned, sized, renderable, event-receiving UI
//! element: common state lives in [`WidgetBase`], behavior in the closed
//! [`WidgetKind`] variant set. Dispatch is a `match` - no trait objects, no
//! inheritance - and the capability surface is the same four operations for
//! every kind: render, handle_event, measure, set_theme.
//!
//! Geometry has two layers. `set_size` records the *preferred* size, which
//! measurement falls back to when content metrics don't dictate more; a
//! container's arrange pass writes the *actual* rect used for rendering and
//! hit testing. Keeping them separate means measuring is stable no matter how
//! often the tree is re-arranged or re-scaled.

use std::rc::Rc;

use crate::event::Event;
use crate::font::{FontId, FontManager};
use crate::painter::Painter;
use crate::theme::Theme;
use crate::types::Rect;

pub mod button;
pub mod checkbox;
pub mod label;
pub mod slider;
pub mod tab;
pub mod textbox;
pub mod toggle;
pub mod transition;

pub use button::Button;
pub use checkbox::CheckBox;
pub use label::Label;
pub use slider::Slider;
pub use tab::Tab;
pub use textbox::TextBox;
pub use toggle::Toggle;
pub use transition::Transition;

// =============================================================================
// WidgetBase
// =============================================================================

/// State shared by every widget kind.
pub struct WidgetBase {
    rect: Rect,
    preferred: (i32, i32),
    scale: (f32, f32),
    visible: bool,
    theme: Rc<Theme>,
    font: Option<FontId>,
}

impl WidgetBase {
    fn new(width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(0, 0, width, height),
            preferred: (width, height),
            scale: (1.0, 1.0),
            visible: true,
            theme: Rc::new(Theme::default()),
            font: None,
        }
    }

    /// Arranged geometry - what renders and what the pointer hits.
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn font(&self) -> Option<FontId> {
        self.font
    }

    pub fn scale(&self) -> (f32, f32) {
        self.scale
    }

    /// Preferred size as set by the caller, the fallback for measurement.
    pub fn preferred_size(&self) -> (i32, i32) {
        self.preferred
    }

    fn reload_font(&mut self, fonts: &mut FontManager) {
        self.font = None;
        let Some(path) = self.theme.font_path.clone() else {
            tracing::debug!("theme has no font path, text will not render");
            return;
        };
        match fonts.load(&path, self.theme.font_size) {
            Ok(id) => self.font = Some(id),
            Err(err) => tracing::error!(error = %err, "failed to load font"),
        }
    }

    /// Stroke the widget outline when the theme enables it, one rectangle
    /// per outline pixel, shrinking inward.
    fn draw_outline(&self, out: &mut dyn Painter) {
        if !self.theme.outline_enabled || self.theme.outline_size <= 0 {
            return;
        }
        let mut rect = self.rect;
        for _ in 0..self.theme.outline_size {
            out.stroke_rect(rect, self.theme.widget_outline);
            rect = rect.inset(1);
        }
    }
}

// =============================================================================
// ClickCycle
// =============================================================================

/// Hover/press state machine shared by the clickable widgets.
///
/// Idle -> Hovered (pointer inside bounds) -> Pressed (button-down while
/// hovered) -> back to Hovered/Idle on button-up. `update` returns true
/// exactly once per completed press-release-while-hovered cycle; releasing
/// outside the bounds cancels the press without firing.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ClickCycle {
    hovered: bool,
    pressed: bool,
}

impl ClickCycle {
    pub fn update(&mut self, bounds: Rect, event: &Event) -> bool {
        if let Some((x, y)) = event.pointer_position() {
            self.hovered = bounds.contains(x, y);
        }
        match event {
            Event::PointerDown { .. } if self.hovered => {
                self.pressed = true;
                false
            }
            Event::PointerUp { .. } => {
                let fired = self.pressed && self.hovered;
                self.pressed = false;
                fired
            }
            _ => false,
        }
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }
}

// =============================================================================
// Widget
// =============================================================================

/// The closed set of widget kinds.
pub enum WidgetKind {
    Label(Label),
    Button(Button),
    Slider(Slider),
    CheckBox(CheckBox),
    Toggle(Toggle),
    TextBox(TextBox),
    Tab(Tab),
}

/// A UI element: shared base state plus kind-specific behavior.
pub struct Widget {
    pub(crate) base: WidgetBase,
    kind: WidgetKind,
}

impl Widget {
    /// Plain text.
    pub fn label(text: &str) -> Self {
        Self {
            base: WidgetBase::new(0, 0),
            kind: WidgetKind::Label(Label::new(text)),
        }
    }

    /// Push button with a centered label.
    pub fn button(text: &str) -> Self {
        Self {
            base: WidgetBase::new(100, 30),
            kind: WidgetKind::Button(Button::new(text)),
        }
    }

    /// Horizontal value slider over `[min, max]`.
    pub fn slider(label: &str, min: i32, max: i32, value: i32) -> Self {
        Self {
            base: WidgetBase::new(200, 30),
            kind: WidgetKind::Slider(Slider::new(label, min, max, value)),
        }
    }

    /// Check box with a label to its right.
    pub fn checkbox(label: &str, checked: bool) -> Self {
        Self {
            base: WidgetBase::new(120, 24),
            kind: WidgetKind::CheckBox(CheckBox::new(label, checked)),
        }
    }

    /// Animated on/off switch.
    pub fn toggle(label: &str, on: bool) -> Self {
        Self {
            base: WidgetBase::new(60, 28),
            kind: WidgetKind::Toggle(Toggle::new(label, on)),
        }
    }

    /// Editable text box.
    pub fn textbox(label: &str, text: &str) -> Self {
        Self {
            base: WidgetBase::new(80, 24),
            kind: WidgetKind::TextBox(TextBox::new(label, text)),
        }
    }

    /// Tab header.
    pub fn tab(label: &str) -> Self {
        Self {
            base: WidgetBase::new(100, 30),
            kind: WidgetKind::Tab(Tab::new(label)),
        }
    }

    // ---- capability surface -------------------------------------------------

    /// Draw into the painter. No-op while invisible.
    pub fn render(&self, fonts: &FontManager, out: &mut dyn Painter) {
        if !self.base.visible {
            return;
        }
        match &self.kind {
            WidgetKind::Label(k) => k.render(&self.base, fonts, out),
            WidgetKind::Button(k) => k.render(&self.base, fonts, out),
            WidgetKind::Slider(k) => k.render(&self.base, fonts, out),
            WidgetKind::CheckBox(k) => k.render(&self.base, fonts, out),
            WidgetKind::Toggle(k) => k.render(&self.base, fonts, out),
            WidgetKind::TextBox(k) => k.render(&self.base, fonts, out),
            WidgetKind::Tab(k) => k.render(&self.base, fonts, out),
        }
    }

    /// React to one input event, possibly emitting signals. No-op while
    /// invisible.
    pub fn handle_event(&mut self, event: &Event) {
        if !self.base.visible {
            return;
        }
        let Self { base, kind } = self;
        match kind {
            WidgetKind::Label(_) => {}
            WidgetKind::Button(k) => k.handle_event(base, event),
            WidgetKind::Slider(k) => k.handle_event(base, event),
            WidgetKind::CheckBox(k) => k.handle_event(base, event),
            WidgetKind::Toggle(k) => k.handle_event(base, event),
            WidgetKind::TextBox(k) => k.handle_event(base, event),
            WidgetKind::Tab(k) => k.handle_event(base, event),
        }
    }

    /// Natural size: content-derived where metrics exist, otherwise the
    /// preferred size.
    pub fn measure(&self, fonts: &FontManager) -> (i32, i32) {
        match &self.kind {
            WidgetKind::Label(k) => k.measure(&self.base, fonts),
            WidgetKind::Button(k) => k.measure(&self.base, fonts),
            WidgetKind::Slider(k) => k.measure(&self.base, fonts),
            WidgetKind::CheckBox(k) => k.measure(&self.base, fonts),
            WidgetKind::Toggle(k) => k.measure(&self.base, fonts),
            WidgetKind::TextBox(k) => k.measure(&self.base, fonts),
            WidgetKind::Tab(k) => k.measure(&self.base, fonts),
        }
    }

    pub fn width(&self, fonts: &FontManager) -> i32 {
        self.measure(fonts).0
    }

    pub fn height(&self, fonts: &FontManager) -> i32 {
        self.measure(fonts).1
    }

    /// Replace the theme reference and reload kind resources (fonts).
    pub fn set_theme(&mut self, theme: &Rc<Theme>, fonts: &mut FontManager) {
        self.base.theme = Rc::clone(theme);
        self.base.reload_font(fonts);
        if let WidgetKind::Slider(k) = &mut self.kind {
            k.sync_metrics(&self.base, fonts);
        }
    }

    // ---- geometry and visibility -------------------------------------------

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.base.rect.x = x;
        self.base.rect.y = y;
    }

    /// Set the preferred size (and the current rect, for standalone use).
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.base.preferred = (width, height);
        self.base.rect.w = width;
        self.base.rect.h = height;
    }

    /// Write the arranged rect. Called by containers; does not touch the
    /// preferred size.
    pub(crate) fn arrange(&mut self, rect: Rect) {
        self.base.rect = rect;
    }

    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.base.scale = (sx, sy);
    }

    pub fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    /// The theme this widget currently renders with.
    pub fn theme(&self) -> &Theme {
        self.base.theme()
    }

    pub fn is_visible(&self) -> bool {
        self.base.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.base.visible = visible;
    }

    // ---- kind accessors -----------------------------------------------------

    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            WidgetKind::Label(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match &mut self.kind {
            WidgetKind::Label(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            WidgetKind::Button(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.kind {
            WidgetKind::Button(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match &self.kind {
            WidgetKind::Slider(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match &mut self.kind {
            WidgetKind::Slider(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&CheckBox> {
        match &self.kind {
            WidgetKind::CheckBox(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_checkbox_mut(&mut self) -> Option<&mut CheckBox> {
        match &mut self.kind {
            WidgetKind::CheckBox(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<&Toggle> {
        match &self.kind {
            WidgetKind::Toggle(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_toggle_mut(&mut self) -> Option<&mut Toggle> {
        match &mut self.kind {
            WidgetKind::Toggle(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_textbox(&self) -> Option<&TextBox> {
        match &self.kind {
            WidgetKind::TextBox(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_textbox_mut(&mut self) -> Option<&mut TextBox> {
        match &mut self.kind {
            WidgetKind::TextBox(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_tab(&self) -> Option<&Tab> {
        match &self.kind {
            WidgetKind::Tab(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_tab_mut(&mut self) -> Option<&mut Tab> {
        match &mut self.kind {
            WidgetKind::Tab(k) => Some(k),
            _ => None,
        }
    }
}
