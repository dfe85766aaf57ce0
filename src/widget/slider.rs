//! Horizontal value slider.

use crate::event::Event;
use crate::font::FontManager;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::small_string::SmallString;
use crate::types::Rect;

use super::WidgetBase;

const BAR_HEIGHT: i32 = 6;
const KNOB_SIZE: i32 = 10;

/// Labeled track with a draggable knob mapping pointer X to `[min, max]`.
///
/// `value_changed` fires iff the clamped value actually differs from the
/// previous one - dragging in place or re-setting the same value is silent.
pub struct Slider {
    label: SmallString<64>,
    min: i32,
    max: i32,
    value: i32,
    dragging: bool,
    /// Vertical room the label occupies above the track; cached when the
    /// theme changes so event handling needs no font access.
    label_height: i32,
    pub value_changed: Signal<i32>,
}

impl Slider {
    pub fn new(label: &str, min: i32, max: i32, value: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            label: SmallString::from(label),
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
            label_height: 0,
            value_changed: Signal::new(),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Clamp into range; emit `value_changed` only when the value moves.
    pub fn set_value(&mut self, value: i32) {
        let clamped = value.clamp(self.min, self.max);
        if clamped != self.value {
            self.value = clamped;
            self.value_changed.emit(&self.value);
        }
    }

    pub(super) fn sync_metrics(&mut self, base: &WidgetBase, fonts: &FontManager) {
        self.label_height = match base.font() {
            Some(font) if !self.label.is_empty() => {
                fonts.line_height(font) + base.theme().text_spacing
            }
            _ => 0,
        };
    }

    fn bar_rect(&self, base: &WidgetBase) -> Rect {
        let rect = base.bounds();
        let padding = base.theme().padding;
        Rect::new(
            rect.x + padding,
            rect.y + self.label_height + padding,
            rect.w - 2 * padding,
            BAR_HEIGHT,
        )
    }

    fn set_value_from_x(&mut self, bar: Rect, x: i32) {
        if bar.w <= 0 {
            return;
        }
        let span = (self.max - self.min) as i64;
        let offset = (x - bar.x) as i64 * span / bar.w as i64;
        self.set_value(self.min + offset as i32);
    }

    pub(super) fn handle_event(&mut self, base: &WidgetBase, event: &Event) {
        let bar = self.bar_rect(base);
        match *event {
            Event::PointerDown { x, y, .. } if bar.contains(x, y) => {
                self.dragging = true;
                self.set_value_from_x(bar, x);
            }
            Event::PointerMoved { x, .. } if self.dragging => {
                // Keep following the pointer even outside the track; the
                // value clamps at the ends.
                self.set_value_from_x(bar, x);
            }
            Event::PointerUp { .. } => {
                self.dragging = false;
            }
            _ => {}
        }
    }

    pub(super) fn render(&self, base: &WidgetBase, _fonts: &FontManager, out: &mut dyn Painter) {
        let theme = base.theme();
        let rect = base.bounds();

        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                out.draw_text(font, rect.x, rect.y, self.label.as_str(), theme.widget_text);
            }
        }

        let bar = self.bar_rect(base);
        out.fill_rect(bar, theme.widget_bg);

        let travel = bar.w - KNOB_SIZE;
        let knob_x = if self.max > self.min && travel > 0 {
            bar.x + (self.value - self.min) * travel / (self.max - self.min)
        } else {
            bar.x
        };
        out.fill_rect(
            Rect::new(knob_x, bar.y - 2, KNOB_SIZE, KNOB_SIZE),
            theme.widget_pressed,
        );

        base.draw_outline(out);
    }

    pub(super) fn measure(&self, base: &WidgetBase, fonts: &FontManager) -> (i32, i32) {
        let theme = base.theme();
        let (preferred_w, _) = base.preferred_size();

        let mut width = preferred_w;
        let mut label_height = 0;
        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                width = width.max(fonts.text_width(font, self.label.as_str()) + 2 * theme.padding);
                label_height = fonts.line_height(font) + theme.text_spacing;
            }
        }
        (width, label_height + BAR_HEIGHT + 2 * theme.padding)
    }
}
