//! Push button.

use crate::event::Event;
use crate::font::FontManager;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::small_string::SmallString;

use super::{ClickCycle, WidgetBase};

/// Clickable button with a centered label.
///
/// `clicked` fires exactly once per completed press-release cycle inside the
/// button's bounds; releasing outside cancels the press.
pub struct Button {
    label: SmallString<64>,
    cycle: ClickCycle,
    pub clicked: Signal<()>,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Self {
            label: SmallString::from(label),
            cycle: ClickCycle::default(),
            clicked: Signal::new(),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn is_hovered(&self) -> bool {
        self.cycle.hovered()
    }

    pub fn is_pressed(&self) -> bool {
        self.cycle.pressed()
    }

    pub(super) fn handle_event(&mut self, base: &WidgetBase, event: &Event) {
        if self.cycle.update(base.bounds(), event) {
            self.clicked.emit(&());
        }
    }

    pub(super) fn render(&self, base: &WidgetBase, fonts: &FontManager, out: &mut dyn Painter) {
        let theme = base.theme();
        let rect = base.bounds();

        let bg = if self.cycle.pressed() {
            theme.widget_pressed
        } else if self.cycle.hovered() {
            theme.widget_hover
        } else {
            theme.widget_bg
        };
        out.fill_rect(rect, bg);
        out.stroke_rect(rect, theme.widget_outline);

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

        base.draw_outline(out);
    }

    pub(super) fn measure(&self, base: &WidgetBase, fonts: &FontManager) -> (i32, i32) {
        let (mut w, mut h) = base.preferred_size();
        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                let (tw, th) = fonts.text_size(font, self.label.as_str());
                let padding = base.theme().padding;
                w = w.max(tw + 2 * padding);
                h = h.max(th + 2 * padding);
            }
        }
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::event::Event;
    use crate::widget::Widget;

    #[test]
    fn test_click_fires_exactly_once() {
        let mut button = Widget::button("Ok");
        button.set_position(0, 0);
        button.set_size(100, 30);

        let clicks = Rc::new(Cell::new(0));
        let c = Rc::clone(&clicks);
        let _conn = button
            .as_button()
            .unwrap()
            .clicked
            .connect(move |_| c.set(c.get() + 1));

        button.handle_event(&Event::motion(50, 15));
        button.handle_event(&Event::down(50, 15));
        button.handle_event(&Event::up(50, 15));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_release_outside_does_not_fire() {
        let mut button = Widget::button("Ok");
        button.set_position(0, 0);
        button.set_size(100, 30);

        let clicks = Rc::new(Cell::new(0));
        let c = Rc::clone(&clicks);
        let _conn = button
            .as_button()
            .unwrap()
            .clicked
            .connect(move |_| c.set(c.get() + 1));

        button.handle_event(&Event::down(50, 15));
        button.handle_event(&Event::up(500, 500));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_measure_defaults_without_font() {
        let fonts = crate::font::FontManager::new();
        let button = Widget::button("Ok");
        assert_eq!(button.measure(&fonts), (100, 30));
    }
}
