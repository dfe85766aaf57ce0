//! Editable text box.

use unicode_segmentation::UnicodeSegmentation;

use crate::event::{Event, Key};
use crate::font::FontManager;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::small_string::SmallString;
use crate::text::wrap_text;
use crate::types::Rect;

use super::WidgetBase;

/// Single text buffer edited by text-input and backspace events.
///
/// The stored text is never wrapped; rendering and natural-height measurement
/// soft-wrap it to the box width. Every successful mutation emits
/// `text_changed` with the full new text.
pub struct TextBox {
    label: SmallString<64>,
    text: SmallString<128>,
    pub text_changed: Signal<SmallString<128>>,
}

impl TextBox {
    pub fn new(label: &str, text: &str) -> Self {
        Self {
            label: SmallString::from(label),
            text: SmallString::from(text),
            text_changed: Signal::new(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the whole text; emits only on an actual change.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_str() != text {
            self.text = SmallString::from(text);
            self.text_changed.emit(&self.text);
        }
    }

    pub(super) fn handle_event(&mut self, _base: &WidgetBase, event: &Event) {
        match event {
            Event::TextInput { text } if !text.is_empty() => {
                self.text.push_str(text.as_str());
                self.text_changed.emit(&self.text);
            }
            Event::KeyDown {
                key: Key::Backspace,
                ..
            } => {
                if self.pop_grapheme() {
                    self.text_changed.emit(&self.text);
                }
            }
            _ => {}
        }
    }

    /// Remove the last grapheme cluster, not just the last code point, so a
    /// flag or family emoji disappears in one backspace.
    fn pop_grapheme(&mut self) -> bool {
        let Some((idx, _)) = self.text.as_str().grapheme_indices(true).next_back() else {
            return false;
        };
        self.text = self.text.substr(0, idx);
        true
    }

    fn label_height(&self, base: &WidgetBase, fonts: &FontManager) -> i32 {
        match base.font() {
            Some(font) if !self.label.is_empty() => {
                fonts.line_height(font) + base.theme().text_spacing
            }
            _ => 0,
        }
    }

    pub(super) fn render(&self, base: &WidgetBase, fonts: &FontManager, out: &mut dyn Painter) {
        let theme = base.theme();
        let rect = base.bounds();
        let label_height = self.label_height(base, fonts);

        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                out.draw_text(font, rect.x, rect.y, self.label.as_str(), theme.label_text);
            }
        }

        out.fill_rect(
            Rect::new(rect.x, rect.y + label_height, rect.w, rect.h),
            theme.widget_bg,
        );

        if let Some(font) = base.font() {
            let mut y = rect.y + label_height + theme.padding;
            for line in wrap_text(fonts, font, self.text.as_str(), rect.w - 2 * theme.padding) {
                out.draw_text(font, rect.x + theme.padding, y, line.as_str(), theme.widget_text);
                y += fonts.line_height(font) + theme.text_spacing;
            }
        }

        base.draw_outline(out);
    }

    pub(super) fn measure(&self, base: &WidgetBase, fonts: &FontManager) -> (i32, i32) {
        let theme = base.theme();
        let (preferred_w, preferred_h) = base.preferred_size();

        let mut width = preferred_w.max(theme.min_width);
        let label_height = self.label_height(base, fonts);
        let mut line_height = preferred_h;
        let mut line_count = 1;

        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                width = width.max(fonts.text_width(font, self.label.as_str()) + 2 * theme.padding);
            }
            // Widest unwrapped line dictates the natural width.
            for line in self.text.split('\n') {
                width = width.max(fonts.text_width(font, line) + 2 * theme.padding);
            }
            line_height = fonts.line_height(font);
            let wrapped = wrap_text(fonts, font, self.text.as_str(), width - 2 * theme.padding);
            line_count = wrapped.len().max(1) as i32;
        }

        (
            width,
            label_height + line_count * (line_height + theme.text_spacing) + 2 * theme.padding,
        )
    }
}
