//! Tab header.

use crate::event::Event;
use crate::font::FontManager;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::small_string::SmallString;

use super::{ClickCycle, WidgetBase};

/// Clickable page header.
///
/// Emits `selected` on a completed click cycle and also latches the click so
/// the owning container can poll it with [`Tab::take_click`] instead of
/// holding a closure back into itself.
pub struct Tab {
    label: SmallString<64>,
    cycle: ClickCycle,
    clicked: bool,
    pub selected: Signal<()>,
}

impl Tab {
    pub fn new(label: &str) -> Self {
        Self {
            label: SmallString::from(label),
            cycle: ClickCycle::default(),
            clicked: false,
            selected: Signal::new(),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// True once per click since the last poll.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    pub(super) fn handle_event(&mut self, base: &WidgetBase, event: &Event) {
        if self.cycle.update(base.bounds(), event) {
            self.clicked = true;
            self.selected.emit(&());
        }
    }

    pub(super) fn render(&self, base: &WidgetBase, fonts: &FontManager, out: &mut dyn Painter) {
        let theme = base.theme();
        let rect = base.bounds();

        let bg = if self.cycle.hovered() {
            theme.widget_hover
        } else {
            theme.widget_bg
        };
        out.fill_rect(rect, bg);
        base.draw_outline(out);

        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                let (tw, th) = fonts.text_size(font, self.label.as_str());
                out.draw_text(
                    font,
                    rect.x + (rect.w - tw) / 2,
                    rect.y + (rect.h - th) / 2,
                    self.label.as_str(),
                    theme.widget_text,
                );
            }
        }
    }

    pub(super) fn measure(&self, base: &WidgetBase, _fonts: &FontManager) -> (i32, i32) {
        base.preferred_size()
    }
}
