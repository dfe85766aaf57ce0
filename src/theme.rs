//! Theme - shared visual and metric configuration.
//!
//! One `Rc<Theme>` instance is shared by the window, every layout, and every
//! widget. Changing the look of a running UI is an explicit rebroadcast
//! (`Window::set_theme` walks the tree), never a silent in-place mutation
//! observed through aliasing.

use std::path::PathBuf;

use crate::types::Rgba;

/// Colors and metrics consumed by widgets when measuring and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Window / background
    pub background: Rgba,

    // Widget colors
    pub widget_bg: Rgba,
    pub widget_hover: Rgba,
    pub widget_pressed: Rgba,
    pub widget_text: Rgba,
    pub widget_outline: Rgba,

    // Text-specific colors (labels, textboxes, sliders)
    pub label_text: Rgba,
    pub placeholder_text: Rgba,
    pub selection: Rgba,

    // Toggle track and knob
    pub toggle_on: Rgba,
    pub toggle_off: Rgba,
    pub toggle_knob: Rgba,

    // Metrics
    pub font_size: u16,
    /// Spacing between lines of text.
    pub text_spacing: i32,
    /// Padding inside widgets.
    pub padding: i32,
    /// Space between widgets.
    pub spacing: i32,
    pub border_radius: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub outline_size: i32,
    pub outline_enabled: bool,

    /// Font face used by every text-bearing widget. `None` renders no text.
    pub font_path: Option<PathBuf>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme - gray surfaces with a subtle blue interaction highlight.
    pub fn light() -> Self {
        Self {
            background: Rgba::rgb(240, 240, 240),
            widget_bg: Rgba::rgb(225, 225, 225),
            widget_hover: Rgba::rgb(200, 200, 255),
            widget_pressed: Rgba::rgb(180, 180, 240),
            widget_text: Rgba::rgb(50, 50, 50),
            widget_outline: Rgba::BLACK,
            label_text: Rgba::rgb(40, 40, 40),
            placeholder_text: Rgba::rgb(150, 150, 150),
            selection: Rgba::new(100, 150, 255, 100),
            toggle_on: Rgba::rgb(100, 200, 255),
            toggle_off: Rgba::rgb(180, 180, 180),
            toggle_knob: Rgba::WHITE,
            font_size: 15,
            text_spacing: 4,
            padding: 8,
            spacing: 10,
            border_radius: 8,
            min_width: 80,
            min_height: 24,
            outline_size: 1,
            outline_enabled: false,
            font_path: None,
        }
    }

    /// Dark theme - near-black surfaces, the same metrics as [`Theme::light`].
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(24, 24, 28),
            widget_bg: Rgba::rgb(40, 40, 46),
            widget_hover: Rgba::rgb(60, 60, 90),
            widget_pressed: Rgba::rgb(80, 80, 120),
            widget_text: Rgba::rgb(220, 220, 220),
            widget_outline: Rgba::rgb(90, 90, 96),
            label_text: Rgba::rgb(235, 235, 235),
            placeholder_text: Rgba::rgb(120, 120, 120),
            selection: Rgba::new(100, 150, 255, 100),
            toggle_on: Rgba::rgb(80, 160, 220),
            toggle_off: Rgba::rgb(70, 70, 76),
            toggle_knob: Rgba::rgb(230, 230, 230),
            ..Self::light()
        }
    }

    /// Same theme with a font face set.
    pub fn with_font(mut self, path: impl Into<PathBuf>, size: u16) -> Self {
        self.font_path = Some(path.into());
        self.font_size = size;
        self
    }
}
