//! Plain text widget.

use crate::font::FontManager;
use crate::painter::Painter;
use crate::small_string::SmallString;

use super::WidgetBase;

pub struct Label {
    text: SmallString<64>,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: SmallString::from(text),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = SmallString::from(text);
    }

    pub(super) fn render(&self, base: &WidgetBase, _fonts: &FontManager, out: &mut dyn Painter) {
        let Some(font) = base.font() else { return };
        if self.text.is_empty() {
            return;
        }
        let rect = base.bounds();
        out.draw_text(font, rect.x, rect.y, self.text.as_str(), base.theme().label_text);
    }

    pub(super) fn measure(&self, base: &WidgetBase, fonts: &FontManager) -> (i32, i32) {
        match base.font() {
            Some(font) => fonts.text_size(font, self.text.as_str()),
            None => base.preferred_size(),
        }
    }
}
