//! Input events.
//!
//! The widget tree consumes an opaque event stream; whatever windowing or
//! input backend feeds the [`crate::backend::Backend`] translates its native
//! events into these variants. Coordinates are window-space pixels.

use crate::small_string::SmallString;

bitflags::bitflags! {
    /// Keyboard modifier state carried on key events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Non-text keys the widgets care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// One input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerMoved {
        x: i32,
        y: i32,
    },
    PointerDown {
        x: i32,
        y: i32,
        button: PointerButton,
    },
    PointerUp {
        x: i32,
        y: i32,
        button: PointerButton,
    },
    /// Committed text input (already composed - one or more characters).
    TextInput {
        text: SmallString<32>,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    Resized {
        width: i32,
        height: i32,
    },
    Quit,
}

impl Event {
    /// Create a pointer motion event.
    pub fn motion(x: i32, y: i32) -> Self {
        Self::PointerMoved { x, y }
    }

    /// Create a left-button press event.
    pub fn down(x: i32, y: i32) -> Self {
        Self::PointerDown {
            x,
            y,
            button: PointerButton::Left,
        }
    }

    /// Create a left-button release event.
    pub fn up(x: i32, y: i32) -> Self {
        Self::PointerUp {
            x,
            y,
            button: PointerButton::Left,
        }
    }

    /// Create a text-input event.
    pub fn text(s: &str) -> Self {
        Self::TextInput {
            text: SmallString::from(s),
        }
    }

    /// Create a key-down event with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Pointer coordinates, for the three pointer variants.
    pub fn pointer_position(&self) -> Option<(i32, i32)> {
        match *self {
            Self::PointerMoved { x, y }
            | Self::PointerDown { x, y, .. }
            | Self::PointerUp { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}
