//! Check box.

use crate::event::Event;
use crate::font::FontManager;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::small_string::SmallString;
use crate::types::Rect;

use super::{ClickCycle, WidgetBase};

const MIN_BOX_SIZE: i32 = 14;

/// Square check box with a label to its right.
pub struct CheckBox {
    label: SmallString<64>,
    checked: bool,
    cycle: ClickCycle,
    pub state_changed: Signal<bool>,
}

impl CheckBox {
    pub fn new(label: &str, checked: bool) -> Self {
        Self {
            label: SmallString::from(label),
            checked,
            cycle: ClickCycle::default(),
            state_changed: Signal::new(),
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Emit `state_changed` only on an actual change.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.state_changed.emit(&self.checked);
        }
    }

    fn box_rect(&self, base: &WidgetBase) -> Rect {
        let rect = base.bounds();
        let padding = base.theme().padding;
        let size = (rect.h - 2 * padding).max(MIN_BOX_SIZE);
        Rect::new(rect.x + padding, rect.y + (rect.h - size) / 2, size, size)
    }

    pub(super) fn handle_event(&mut self, base: &WidgetBase, event: &Event) {
        if self.cycle.update(base.bounds(), event) {
            let next = !self.checked;
            self.set_checked(next);
        }
    }

    pub(super) fn render(&self, base: &WidgetBase, _fonts: &FontManager, out: &mut dyn Painter) {
        let theme = base.theme();
        let boxed = self.box_rect(base);

        let bg = if self.checked {
            theme.widget_pressed
        } else {
            theme.widget_bg
        };
        out.fill_rect(boxed, bg);
        if self.cycle.hovered() {
            out.fill_rect(boxed, theme.widget_hover);
        }
        out.stroke_rect(boxed, theme.widget_outline);

        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                out.draw_text(
                    font,
                    boxed.x + boxed.w + theme.padding,
                    boxed.y,
                    self.label.as_str(),
                    theme.label_text,
                );
            }
        }

        base.draw_outline(out);
    }

    pub(super) fn measure(&self, base: &WidgetBase, fonts: &FontManager) -> (i32, i32) {
        let theme = base.theme();
        let (preferred_w, preferred_h) = base.preferred_size();
        let height = preferred_h.max(theme.min_height);

        let box_size = (height - 2 * theme.padding).max(MIN_BOX_SIZE);
        let mut width = preferred_w;
        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                let label_w = fonts.text_width(font, self.label.as_str());
                width = width.max(3 * theme.padding + box_size + label_w);
            }
        }
        (width, height)
    }
}
