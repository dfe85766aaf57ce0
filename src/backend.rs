//! Rendering/input backend seam.
//!
//! The widget core never talks to a windowing system directly: a [`Backend`]
//! supplies the event queue and the frame surface, and the core drives it
//! through this trait only. [`Headless`] is the built-in implementation - a
//! scripted event queue plus a recorded draw list - used by the tests and by
//! any host that wants to run a UI without a display.

use std::collections::VecDeque;

use crate::event::Event;
use crate::painter::{DrawList, Painter};
use crate::types::Rgba;

/// Windowing/rendering capability consumed by [`crate::window::Window`].
pub trait Backend {
    /// Drain all pending input events. Must not block.
    fn poll_events(&mut self) -> Vec<Event>;

    /// Current surface size in pixels.
    fn size(&self) -> (i32, i32);

    /// Start a frame by clearing to `color`.
    fn begin_frame(&mut self, color: Rgba);

    /// The painter for the frame in progress.
    fn painter(&mut self) -> &mut dyn Painter;

    /// Finish and show the frame.
    fn present(&mut self);

    fn set_title(&mut self, _title: &str) {}
}

/// Backend with no display: events are pushed by the host, frames are
/// recorded as draw lists.
pub struct Headless {
    width: i32,
    height: i32,
    queue: VecDeque<Event>,
    frame: DrawList,
    clear_color: Option<Rgba>,
    frames_presented: u64,
}

impl Headless {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            queue: VecDeque::new(),
            frame: DrawList::new(),
            clear_color: None,
            frames_presented: 0,
        }
    }

    /// Queue one event for the next poll.
    pub fn push_event(&mut self, event: Event) {
        if let Event::Resized { width, height } = event {
            self.width = width;
            self.height = height;
        }
        self.queue.push_back(event);
    }

    /// Queue several events in order.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.push_event(event);
        }
    }

    /// The draw list recorded for the most recent frame.
    pub fn frame(&self) -> &DrawList {
        &self.frame
    }

    /// Clear color of the most recent frame.
    pub fn clear_color(&self) -> Option<Rgba> {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Backend for Headless {
    fn poll_events(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self, color: Rgba) {
        self.clear_color = Some(color);
        self.frame.clear();
    }

    fn painter(&mut self) -> &mut dyn Painter {
        &mut self.frame
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_drains_queue() {
        let mut backend = Headless::new(640, 480);
        backend.push_events([Event::motion(1, 1), Event::down(1, 1)]);

        assert_eq!(backend.poll_events().len(), 2);
        assert!(backend.poll_events().is_empty());
    }

    #[test]
    fn test_resize_event_updates_size() {
        let mut backend = Headless::new(640, 480);
        backend.push_event(Event::Resized {
            width: 800,
            height: 600,
        });
        assert_eq!(backend.size(), (800, 600));
    }

    #[test]
    fn test_frame_lifecycle() {
        let mut backend = Headless::new(100, 100);
        backend.begin_frame(Rgba::GRAY);
        backend
            .painter()
            .fill_rect(crate::types::Rect::new(0, 0, 10, 10), Rgba::RED);
        backend.present();

        assert_eq!(backend.clear_color(), Some(Rgba::GRAY));
        assert_eq!(backend.frame().len(), 1);
        assert_eq!(backend.frames_presented(), 1);
    }
}
