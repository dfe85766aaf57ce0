//! Painter - the opaque drawing capability.
//!
//! The widget tree draws through this trait and nothing else: filled
//! rectangles, stroked rectangles, and text runs. A real backend maps these
//! onto its own renderer; [`DrawList`] records them as data, which is what
//! the headless backend and the tests consume.

use crate::font::FontId;
use crate::types::{Rect, Rgba};

/// Drawing surface capability consumed by widgets.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn stroke_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw one line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, font: FontId, x: i32, y: i32, text: &str, color: Rgba);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
    },
    Text {
        font: FontId,
        x: i32,
        y: i32,
        text: String,
        color: Rgba,
    },
}

/// A painter that records commands instead of rasterizing.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// All recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.cmds.push(DrawCmd::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        self.cmds.push(DrawCmd::StrokeRect { rect, color });
    }

    fn draw_text(&mut self, font: FontId, x: i32, y: i32, text: &str, color: Rgba) {
        self.cmds.push(DrawCmd::Text {
            font,
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 10, 10), Rgba::RED);
        list.stroke_rect(Rect::new(0, 0, 10, 10), Rgba::BLACK);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.cmds()[0], DrawCmd::FillRect { .. }));
        assert!(matches!(list.cmds()[1], DrawCmd::StrokeRect { .. }));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_texts_iterator() {
        let mut list = DrawList::new();
        list.draw_text(FontId::test(0), 0, 0, "a", Rgba::BLACK);
        list.fill_rect(Rect::new(0, 0, 1, 1), Rgba::RED);
        list.draw_text(FontId::test(0), 0, 0, "b", Rgba::BLACK);

        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
