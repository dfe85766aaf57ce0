//! Tab container.
//!
//! Owns an ordered list of (header, page) pairs and a single active index.
//! Once any tab exists exactly one page is visible; selecting a header hides
//! every other page and emits `tab_changed` with the new index. Adding the
//! first tab auto-activates it (and emits).

use std::rc::Rc;

use crate::arena::{WidgetArena, WidgetId};
use crate::event::Event;
use crate::font::FontManager;
use crate::layout::Container;
use crate::painter::Painter;
use crate::signal::Signal;
use crate::theme::Theme;
use crate::types::Rect;
use crate::widget::Widget;

const TAB_BAR_HEIGHT: i32 = 30;
const TAB_WIDTH: i32 = 100;
const TAB_GAP: i32 = 2;

/// Container switching between pages through a row of tab headers.
pub struct TabContainer {
    bounds: Rect,
    visible: bool,
    theme: Rc<Theme>,
    tabs: Vec<WidgetId>,
    pages: Vec<Container>,
    active: Option<usize>,
    pub tab_changed: Signal<usize>,
}

impl Default for TabContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl TabContainer {
    pub fn new() -> Self {
        Self {
            bounds: Rect::new(0, 0, 400, 300),
            visible: true,
            theme: Rc::new(Theme::default()),
            tabs: Vec::new(),
            pages: Vec::new(),
            active: None,
            tab_changed: Signal::new(),
        }
    }

    /// Append a (header, page) pair. The header widget is created here so a
    /// tab container can never hold a non-tab header. Returns the header's
    /// handle for signal subscriptions.
    pub fn add_tab(
        &mut self,
        arena: &mut WidgetArena,
        fonts: &mut FontManager,
        label: &str,
        page: impl Into<Container>,
    ) -> WidgetId {
        let theme = Rc::clone(&self.theme);

        let mut tab = Widget::tab(label);
        tab.set_theme(&theme, fonts);
        let id = arena.insert(tab);
        self.tabs.push(id);

        let mut page = page.into();
        page.set_theme(arena, fonts, &theme);
        page.set_visible(false);
        self.pages.push(page);

        if self.tabs.len() == 1 {
            self.set_active(0);
        }
        id
    }

    /// Currently active tab index, `None` only while empty.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[WidgetId] {
        &self.tabs
    }

    pub fn pages(&self) -> &[Container] {
        &self.pages
    }

    /// Activate a tab: show only its page and emit `tab_changed`.
    /// Out-of-range indices are ignored; re-selecting the active index
    /// re-emits.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.active = Some(index);
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.set_visible(i == index);
        }
        self.tab_changed.emit(&index);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    // ---- measurement --------------------------------------------------------

    /// Natural width: the wider of the header row and the widest page.
    pub fn width(&self, arena: &WidgetArena, fonts: &FontManager) -> i32 {
        let row = match self.tabs.len() as i32 {
            0 => 0,
            n => n * TAB_WIDTH + (n - 1) * TAB_GAP,
        };
        let pages = self
            .pages
            .iter()
            .map(|p| p.width(arena, fonts))
            .max()
            .unwrap_or(0);
        row.max(pages)
    }

    /// Natural height: the header row plus the tallest page.
    pub fn height(&self, arena: &WidgetArena, fonts: &FontManager) -> i32 {
        let pages = self
            .pages
            .iter()
            .map(|p| p.height(arena, fonts))
            .max()
            .unwrap_or(0);
        TAB_BAR_HEIGHT + TAB_GAP + pages
    }

    // ---- arrangement --------------------------------------------------------

    /// Headers in a row at the top, the active page filling the remainder.
    #[allow(clippy::too_many_arguments)]
    pub fn update_layout(
        &mut self,
        arena: &mut WidgetArena,
        fonts: &FontManager,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        sx: f32,
        sy: f32,
    ) {
        self.bounds = Rect::new(x, y, w, h);

        let bar_h = (TAB_BAR_HEIGHT as f32 * sy) as i32;
        let tab_w = (TAB_WIDTH as f32 * sx) as i32;
        let gap = (TAB_GAP as f32 * sx) as i32;

        let mut offset_x = x;
        for &id in &self.tabs {
            let Some(tab) = arena.get_mut(id) else { continue };
            tab.set_scale(sx, sy);
            tab.arrange(Rect::new(offset_x, y, tab_w, bar_h));
            offset_x += tab_w + gap;
        }

        if let Some(active) = self.active {
            let page_y = y + bar_h + TAB_GAP;
            self.pages[active].update_layout(
                arena,
                fonts,
                x,
                page_y,
                w,
                h - (bar_h + TAB_GAP),
                sx,
                sy,
            );
        }
    }

    // ---- traversal ----------------------------------------------------------

    pub fn render(&self, arena: &WidgetArena, fonts: &FontManager, out: &mut dyn Painter) {
        if !self.visible {
            return;
        }
        for &id in &self.tabs {
            if let Some(tab) = arena.get(id) {
                tab.render(fonts, out);
            }
        }
        if let Some(active) = self.active {
            self.pages[active].render(arena, fonts, out);
        }
    }

    /// Route the event to every header, apply any header click, then forward
    /// to the active page only.
    pub fn handle_event(&mut self, arena: &mut WidgetArena, event: &Event) {
        if !self.visible {
            return;
        }

        let mut selected = None;
        for (i, &id) in self.tabs.iter().enumerate() {
            let Some(tab) = arena.get_mut(id) else { continue };
            tab.handle_event(event);
            if tab.as_tab_mut().is_some_and(|t| t.take_click()) {
                selected = Some(i);
            }
        }
        if let Some(index) = selected {
            self.set_active(index);
        }

        if let Some(active) = self.active {
            self.pages[active].handle_event(arena, event);
        }
    }

    pub fn set_theme(
        &mut self,
        arena: &mut WidgetArena,
        fonts: &mut FontManager,
        theme: &Rc<Theme>,
    ) {
        self.theme = Rc::clone(theme);
        for &id in &self.tabs {
            if let Some(tab) = arena.get_mut(id) {
                tab.set_theme(theme, fonts);
            }
        }
        for page in &mut self.pages {
            page.set_theme(arena, fonts, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::layout::Layout;

    fn page(arena: &mut WidgetArena, h: i32) -> (Layout, WidgetId) {
        let mut widget = Widget::button("");
        widget.set_size(100, h);
        let id = arena.insert(widget);
        let mut layout = Layout::vertical(0, 0);
        layout.add_widget(id);
        (layout, id)
    }

    #[test]
    fn test_first_tab_auto_activates_and_emits() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();
        let mut tabs = TabContainer::new();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _ = tabs.tab_changed.connect(move |i| s.borrow_mut().push(*i));

        let (page1, _) = page(&mut arena, 30);
        tabs.add_tab(&mut arena, &mut fonts, "One", page1);

        assert_eq!(tabs.active(), Some(0));
        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn test_exactly_one_page_visible() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();
        let mut tabs = TabContainer::new();

        for label in ["One", "Two", "Three"] {
            let (p, _) = page(&mut arena, 30);
            tabs.add_tab(&mut arena, &mut fonts, label, p);
        }

        tabs.set_active(1);

        let visibility: Vec<bool> = tabs.pages().iter().map(|p| p.is_visible()).collect();
        assert_eq!(visibility, vec![false, true, false]);
    }

    #[test]
    fn test_header_click_switches_page() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();
        let mut tabs = TabContainer::new();

        for label in ["One", "Two", "Three"] {
            let (p, _) = page(&mut arena, 30);
            tabs.add_tab(&mut arena, &mut fonts, label, p);
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _ = tabs.tab_changed.connect(move |i| s.borrow_mut().push(*i));

        tabs.update_layout(&mut arena, &FontManager::new(), 0, 0, 400, 300, 1.0, 1.0);

        // Second header occupies x in [102, 202).
        tabs.handle_event(&mut arena, &Event::down(150, 15));
        tabs.handle_event(&mut arena, &Event::up(150, 15));

        assert_eq!(tabs.active(), Some(1));
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_out_of_range_select_is_noop() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();
        let mut tabs = TabContainer::new();

        let (p, _) = page(&mut arena, 30);
        tabs.add_tab(&mut arena, &mut fonts, "One", p);
        tabs.set_active(5);

        assert_eq!(tabs.active(), Some(0));
    }

    #[test]
    fn test_events_reach_only_active_page() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();
        let mut tabs = TabContainer::new();

        let (p1, b1) = page(&mut arena, 30);
        let (p2, b2) = page(&mut arena, 30);
        tabs.add_tab(&mut arena, &mut fonts, "One", p1);
        tabs.add_tab(&mut arena, &mut fonts, "Two", p2);
        tabs.update_layout(&mut arena, &FontManager::new(), 0, 0, 400, 300, 1.0, 1.0);

        // Pages sit below the header row; both buttons overlap at (0..100).
        let by = 32 + 10;
        tabs.handle_event(&mut arena, &Event::down(50, by));

        assert!(arena.get(b1).unwrap().as_button().unwrap().is_pressed());
        assert!(!arena.get(b2).unwrap().as_button().unwrap().is_pressed());
    }

    #[test]
    fn test_add_tab_applies_container_theme() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();
        let mut tabs = TabContainer::new();
        tabs.set_theme(&mut arena, &mut fonts, &Rc::new(Theme::dark()));

        let (p, inner) = page(&mut arena, 30);
        let header = tabs.add_tab(&mut arena, &mut fonts, "One", p);

        let dark_bg = Theme::dark().background;
        assert_eq!(arena.get(header).unwrap().base.theme().background, dark_bg);
        assert_eq!(arena.get(inner).unwrap().base.theme().background, dark_bg);
    }
}
