//! On/off switch with an animated knob.

use std::time::Duration;

use crate::event::Event;
use crate::font::FontManager;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::small_string::SmallString;
use crate::types::Rect;

use super::{ClickCycle, Transition, WidgetBase};

const KNOB_MARGIN: i32 = 2;
const KNOB_TRAVEL_SECS: f32 = 0.15;

/// Pill-shaped switch. The logical state flips instantly on a completed
/// click cycle; the knob position (and track color) animate after it with a
/// smoothstep transition.
pub struct Toggle {
    label: SmallString<64>,
    state: bool,
    knob: Transition,
    cycle: ClickCycle,
    pub toggled: Signal<bool>,
}

impl Toggle {
    pub fn new(label: &str, state: bool) -> Self {
        let at = if state { 1.0 } else { 0.0 };
        Self {
            label: SmallString::from(label),
            state,
            knob: Transition::new(at, at, Duration::from_secs_f32(KNOB_TRAVEL_SECS)),
            cycle: ClickCycle::default(),
            toggled: Signal::new(),
        }
    }

    pub fn state(&self) -> bool {
        self.state
    }

    /// Flip to `state`, re-aiming the knob animation from wherever it
    /// currently is. Emits `toggled` only on an actual change.
    pub fn set_state(&mut self, state: bool) {
        if self.state != state {
            self.state = state;
            self.knob.retarget(if state { 1.0 } else { 0.0 });
            self.toggled.emit(&self.state);
        }
    }

    pub(super) fn handle_event(&mut self, base: &WidgetBase, event: &Event) {
        if self.cycle.update(base.bounds(), event) {
            let next = !self.state;
            self.set_state(next);
        }
    }

    pub(super) fn render(&self, base: &WidgetBase, _fonts: &FontManager, out: &mut dyn Painter) {
        let theme = base.theme();
        let rect = base.bounds();
        let t = self.knob.value();

        out.fill_rect(rect, theme.toggle_off.lerp(theme.toggle_on, t));

        let knob_size = rect.h - 2 * KNOB_MARGIN;
        let travel = (rect.w - knob_size - 2 * KNOB_MARGIN).max(0);
        let knob_x = rect.x + KNOB_MARGIN + (t * travel as f32) as i32;
        out.fill_rect(
            Rect::new(knob_x, rect.y + KNOB_MARGIN, knob_size, knob_size),
            theme.toggle_knob,
        );

        if let Some(font) = base.font() {
            if !self.label.is_empty() {
                out.draw_text(
                    font,
                    rect.x + rect.w + theme.spacing,
                    rect.y,
                    self.label.as_str(),
                    theme.label_text,
                );
            }
        }

        base.draw_outline(out);
    }

    pub(super) fn measure(&self, base: &WidgetBase, _fonts: &FontManager) -> (i32, i32) {
        base.preferred_size()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::event::Event;
    use crate::widget::Widget;

    #[test]
    fn test_click_cycle_flips_state() {
        let mut toggle = Widget::toggle("", false);
        toggle.set_position(0, 0);
        toggle.set_size(60, 28);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _ = toggle
            .as_toggle()
            .unwrap()
            .toggled
            .connect(move |v| s.borrow_mut().push(*v));

        toggle.handle_event(&Event::down(30, 14));
        // Logical state only flips once the press completes.
        assert!(!toggle.as_toggle().unwrap().state());
        toggle.handle_event(&Event::up(30, 14));
        assert!(toggle.as_toggle().unwrap().state());

        toggle.handle_event(&Event::down(30, 14));
        toggle.handle_event(&Event::up(500, 500));
        // Cancelled cycle: no flip.
        assert!(toggle.as_toggle().unwrap().state());

        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn test_logical_state_updates_instantly() {
        let mut toggle = Widget::toggle("", false);
        let inner = toggle.as_toggle_mut().unwrap();
        inner.set_state(true);
        // The knob animation is still in flight but the state is already on.
        assert!(inner.state());
    }
}
