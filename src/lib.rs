//! # glimt
//!
//! Signal-driven widget toolkit with stacking layouts.
//!
//! The tree is three layers: a [`window::Window`] drives the frame loop, a
//! [`layout::Container`] tree arranges things, and leaf widgets live in a
//! [`arena::WidgetArena`] addressed by stable handles. Widgets emit
//! [`signal::Signal`]s; whoever cares connects to them.
//!
//! Rendering and input are an opaque seam: the core only knows the
//! [`painter::Painter`] draw capability and the [`event::Event`] stream a
//! [`backend::Backend`] feeds it. The built-in [`backend::Headless`] backend
//! records frames as draw lists, which is also how the tests observe output.
//!
//! Everything is single-threaded: one thread owns the event loop, widget
//! state, and rendering.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Rect, Axis)
//! - [`small_string`] - Inline-buffer string with heap fallback
//! - [`signal`] - Signal/Connection event broadcasting
//! - [`event`] - Input events
//! - [`font`] - Font cache and text metrics
//! - [`theme`] - Shared visual configuration
//! - [`arena`] - Widget storage and handles
//! - [`widget`] - Widget kinds (button, slider, checkbox, toggle, textbox, tab)
//! - [`layout`] - Vertical/horizontal stacking containers
//! - [`tabs`] - Tab container
//! - [`window`] - Frame loop
//! - [`settings`] - INI settings persistence

pub mod arena;
pub mod backend;
pub mod event;
pub mod font;
pub mod layout;
pub mod painter;
pub mod settings;
pub mod signal;
pub mod small_string;
pub mod tabs;
pub mod text;
pub mod theme;
pub mod types;
pub mod widget;
pub mod window;

// Re-export commonly used items
pub use arena::{WidgetArena, WidgetId};
pub use backend::{Backend, Headless};
pub use event::{Event, Key, Modifiers, PointerButton};
pub use font::{FontError, FontId, FontManager};
pub use layout::{Container, Layout};
pub use painter::{DrawCmd, DrawList, Painter};
pub use settings::{Ini, Settings, SettingsError};
pub use signal::{Connection, ScopedConnection, Signal};
pub use small_string::SmallString;
pub use tabs::TabContainer;
pub use text::wrap_text;
pub use theme::Theme;
pub use types::{Axis, Rect, Rgba};
pub use widget::{
    Button, CheckBox, Label, Slider, Tab, TextBox, Toggle, Transition, Widget, WidgetKind,
};
pub use window::Window;
