//! Stacking layout containers.
//!
//! A [`Layout`] arranges an ordered list of widget handles plus an ordered
//! list of nested containers along one axis with fixed spacing and padding -
//! no constraint solving, just accumulation. Insertion order is significant:
//! it is both the traversal order for events and the z-order for rendering,
//! and duplicates are allowed.
//!
//! [`Container`] is the closed set of container shapes (plain stacks and tab
//! containers); everything that recurses over the tree dispatches on it.
//!
//! Geometry is two-phase, bottom-up then top-down: `width`/`height` report
//! the natural (unscaled) size aggregated from children, and `update_layout`
//! walks down assigning scaled rects. Degenerate geometry is allowed -
//! widgets simply get zero-area rects.

use std::rc::Rc;

use crate::arena::{WidgetArena, WidgetId};
use crate::event::Event;
use crate::font::FontManager;
use crate::painter::Painter;
use crate::tabs::TabContainer;
use crate::theme::Theme;
use crate::types::{Axis, Rect};

fn scaled(v: i32, s: f32) -> i32 {
    (v as f32 * s) as i32
}

// =============================================================================
// Container
// =============================================================================

/// The closed set of container kinds a tree is built from.
pub enum Container {
    Stack(Layout),
    Tabs(TabContainer),
}

impl Container {
    /// Natural (unscaled) width.
    pub fn width(&self, arena: &WidgetArena, fonts: &FontManager) -> i32 {
        match self {
            Self::Stack(layout) => layout.width(arena, fonts),
            Self::Tabs(tabs) => tabs.width(arena, fonts),
        }
    }

    /// Natural (unscaled) height.
    pub fn height(&self, arena: &WidgetArena, fonts: &FontManager) -> i32 {
        match self {
            Self::Stack(layout) => layout.height(arena, fonts),
            Self::Tabs(tabs) => tabs.height(arena, fonts),
        }
    }

    /// Arrange the subtree into the given rect with the given scale.
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
        match self {
            Self::Stack(layout) => layout.update_layout(arena, fonts, x, y, w, h, sx, sy),
            Self::Tabs(tabs) => tabs.update_layout(arena, fonts, x, y, w, h, sx, sy),
        }
    }

    pub fn render(&self, arena: &WidgetArena, fonts: &FontManager, out: &mut dyn Painter) {
        match self {
            Self::Stack(layout) => layout.render(arena, fonts, out),
            Self::Tabs(tabs) => tabs.render(arena, fonts, out),
        }
    }

    pub fn handle_event(&mut self, arena: &mut WidgetArena, event: &Event) {
        match self {
            Self::Stack(layout) => layout.handle_event(arena, event),
            Self::Tabs(tabs) => tabs.handle_event(arena, event),
        }
    }

    /// Depth-first, pre-order theme rebroadcast.
    pub fn set_theme(
        &mut self,
        arena: &mut WidgetArena,
        fonts: &mut FontManager,
        theme: &Rc<Theme>,
    ) {
        match self {
            Self::Stack(layout) => layout.set_theme(arena, fonts, theme),
            Self::Tabs(tabs) => tabs.set_theme(arena, fonts, theme),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::Stack(layout) => layout.is_visible(),
            Self::Tabs(tabs) => tabs.is_visible(),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Self::Stack(layout) => layout.set_visible(visible),
            Self::Tabs(tabs) => tabs.set_visible(visible),
        }
    }
}

impl From<Layout> for Container {
    fn from(layout: Layout) -> Self {
        Self::Stack(layout)
    }
}

impl From<TabContainer> for Container {
    fn from(tabs: TabContainer) -> Self {
        Self::Tabs(tabs)
    }
}

// =============================================================================
// Layout
// =============================================================================

/// One stacking container.
pub struct Layout {
    axis: Axis,
    spacing: i32,
    padding: i32,
    bounds: Rect,
    visible: bool,
    widgets: Vec<WidgetId>,
    children: Vec<Container>,
}

impl Layout {
    /// Top-to-bottom stack.
    pub fn vertical(spacing: i32, padding: i32) -> Self {
        Self::new(Axis::Vertical, spacing, padding)
    }

    /// Left-to-right stack.
    pub fn horizontal(spacing: i32, padding: i32) -> Self {
        Self::new(Axis::Horizontal, spacing, padding)
    }

    fn new(axis: Axis, spacing: i32, padding: i32) -> Self {
        Self {
            axis,
            spacing,
            padding,
            bounds: Rect::default(),
            visible: true,
            widgets: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a widget handle. Order is z-order; duplicates are allowed.
    pub fn add_widget(&mut self, id: WidgetId) {
        self.widgets.push(id);
    }

    /// Append a nested container. Nested containers are always arranged
    /// after all direct widgets.
    pub fn add_layout(&mut self, child: impl Into<Container>) {
        self.children.push(child.into());
    }

    pub fn widgets(&self) -> &[WidgetId] {
        &self.widgets
    }

    pub fn children(&self) -> &[Container] {
        &self.children
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
    }

    pub fn set_padding(&mut self, padding: i32) {
        self.padding = padding;
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Last arranged rect.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // ---- measurement --------------------------------------------------------

    /// Natural width: max of children across a vertical stack, sum plus
    /// spacing gaps along a horizontal one, plus padding on both sides.
    pub fn width(&self, arena: &WidgetArena, fonts: &FontManager) -> i32 {
        self.extent(arena, fonts, Axis::Horizontal)
    }

    /// Natural height: sum plus spacing gaps along a vertical stack, max of
    /// children across a horizontal one, plus padding on both sides.
    pub fn height(&self, arena: &WidgetArena, fonts: &FontManager) -> i32 {
        self.extent(arena, fonts, Axis::Vertical)
    }

    fn extent(&self, arena: &WidgetArena, fonts: &FontManager, along: Axis) -> i32 {
        let pick = |(w, h): (i32, i32)| match along {
            Axis::Horizontal => w,
            Axis::Vertical => h,
        };

        let mut total = 0;
        let mut count = 0;
        for &id in &self.widgets {
            let Some(widget) = arena.get(id) else { continue };
            let size = pick(widget.measure(fonts));
            if along == self.axis {
                total += size;
            } else {
                total = total.max(size);
            }
            count += 1;
        }
        for child in &self.children {
            let size = match along {
                Axis::Horizontal => child.width(arena, fonts),
                Axis::Vertical => child.height(arena, fonts),
            };
            if along == self.axis {
                total += size;
            } else {
                total = total.max(size);
            }
            count += 1;
        }

        if along == self.axis && count > 0 {
            total += self.spacing * (count - 1);
        }
        total + 2 * self.padding
    }

    // ---- arrangement --------------------------------------------------------

    /// Place children inside `(x, y, w, h)` scaled by `(sx, sy)`: widgets
    /// first at their scaled natural size, then nested containers stretched
    /// across the cross axis, one shared cursor along the stacking axis.
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
        let px = scaled(self.padding, sx);
        let py = scaled(self.padding, sy);

        match self.axis {
            Axis::Vertical => {
                let gap = scaled(self.spacing, sy);
                let avail_w = w - 2 * px;
                let mut cur_y = y + py;

                for &id in &self.widgets {
                    let Some(widget) = arena.get_mut(id) else { continue };
                    let (nw, nh) = widget.measure(fonts);
                    let (sw, sh) = (scaled(nw, sx), scaled(nh, sy));
                    widget.set_scale(sx, sy);
                    widget.arrange(Rect::new(x + px, cur_y, sw, sh));
                    cur_y += sh + gap;
                }
                for child in &mut self.children {
                    let ch = scaled(child.height(arena, fonts), sy);
                    child.update_layout(arena, fonts, x + px, cur_y, avail_w, ch, sx, sy);
                    cur_y += ch + gap;
                }
            }
            Axis::Horizontal => {
                let gap = scaled(self.spacing, sx);
                let avail_h = h - 2 * py;
                let mut cur_x = x + px;

                for &id in &self.widgets {
                    let Some(widget) = arena.get_mut(id) else { continue };
                    let (nw, nh) = widget.measure(fonts);
                    let (sw, sh) = (scaled(nw, sx), scaled(nh, sy));
                    widget.set_scale(sx, sy);
                    widget.arrange(Rect::new(cur_x, y + py, sw, sh));
                    cur_x += sw + gap;
                }
                for child in &mut self.children {
                    let cw = scaled(child.width(arena, fonts), sx);
                    child.update_layout(arena, fonts, cur_x, y + py, cw, avail_h, sx, sy);
                    cur_x += cw + gap;
                }
            }
        }
    }

    // ---- traversal ----------------------------------------------------------

    pub fn render(&self, arena: &WidgetArena, fonts: &FontManager, out: &mut dyn Painter) {
        if !self.visible {
            return;
        }
        for &id in &self.widgets {
            if let Some(widget) = arena.get(id) {
                widget.render(fonts, out);
            }
        }
        for child in &self.children {
            child.render(arena, fonts, out);
        }
    }

    pub fn handle_event(&mut self, arena: &mut WidgetArena, event: &Event) {
        if !self.visible {
            return;
        }
        for &id in &self.widgets {
            if let Some(widget) = arena.get_mut(id) {
                widget.handle_event(event);
            }
        }
        for child in &mut self.children {
            child.handle_event(arena, event);
        }
    }

    pub fn set_theme(
        &mut self,
        arena: &mut WidgetArena,
        fonts: &mut FontManager,
        theme: &Rc<Theme>,
    ) {
        for &id in &self.widgets {
            if let Some(widget) = arena.get_mut(id) {
                widget.set_theme(theme, fonts);
            }
        }
        for child in &mut self.children {
            child.set_theme(arena, fonts, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;

    fn sized_button(arena: &mut WidgetArena, w: i32, h: i32) -> WidgetId {
        let mut button = Widget::button("");
        button.set_size(w, h);
        arena.insert(button)
    }

    #[test]
    fn test_vertical_height_formula() {
        let mut arena = WidgetArena::new();
        let fonts = FontManager::new();
        let mut layout = Layout::vertical(5, 8);

        for h in [30, 40, 50] {
            let id = sized_button(&mut arena, 100, h);
            layout.add_widget(id);
        }

        // sum(h) + spacing*(n-1) + 2*padding
        assert_eq!(layout.height(&arena, &fonts), 30 + 40 + 50 + 5 * 2 + 8 * 2);
        // max(w) + 2*padding
        assert_eq!(layout.width(&arena, &fonts), 100 + 8 * 2);
    }

    #[test]
    fn test_empty_container_is_twice_padding() {
        let arena = WidgetArena::new();
        let fonts = FontManager::new();
        let layout = Layout::vertical(5, 8);

        assert_eq!(layout.height(&arena, &fonts), 16);
        assert_eq!(layout.width(&arena, &fonts), 16);
    }

    #[test]
    fn test_horizontal_width_formula() {
        let mut arena = WidgetArena::new();
        let fonts = FontManager::new();
        let mut layout = Layout::horizontal(4, 2);

        for w in [10, 20] {
            let id = sized_button(&mut arena, w, 30);
            layout.add_widget(id);
        }

        assert_eq!(layout.width(&arena, &fonts), 10 + 20 + 4 + 2 * 2);
        assert_eq!(layout.height(&arena, &fonts), 30 + 2 * 2);
    }

    #[test]
    fn test_vertical_placement() {
        let mut arena = WidgetArena::new();
        let fonts = FontManager::new();
        let mut layout = Layout::vertical(5, 8);

        let a = sized_button(&mut arena, 100, 30);
        let b = sized_button(&mut arena, 100, 40);
        layout.add_widget(a);
        layout.add_widget(b);

        layout.update_layout(&mut arena, &fonts, 0, 0, 200, 200, 1.0, 1.0);

        assert_eq!(arena.get(a).unwrap().bounds(), Rect::new(8, 8, 100, 30));
        assert_eq!(arena.get(b).unwrap().bounds(), Rect::new(8, 8 + 30 + 5, 100, 40));
    }

    #[test]
    fn test_scale_applies_to_geometry_not_tree() {
        let mut arena = WidgetArena::new();
        let fonts = FontManager::new();
        let mut layout = Layout::vertical(0, 10);

        let a = sized_button(&mut arena, 100, 30);
        layout.add_widget(a);

        layout.update_layout(&mut arena, &fonts, 0, 0, 400, 400, 2.0, 2.0);
        assert_eq!(arena.get(a).unwrap().bounds(), Rect::new(20, 20, 200, 60));

        // Natural size is untouched by arrangement - re-running at scale 1
        // lands back on the original geometry.
        layout.update_layout(&mut arena, &fonts, 0, 0, 200, 200, 1.0, 1.0);
        assert_eq!(arena.get(a).unwrap().bounds(), Rect::new(10, 10, 100, 30));
    }

    #[test]
    fn test_nested_layouts_placed_after_widgets() {
        let mut arena = WidgetArena::new();
        let fonts = FontManager::new();

        let mut inner = Layout::vertical(0, 0);
        let nested = sized_button(&mut arena, 50, 20);
        inner.add_widget(nested);

        let mut outer = Layout::vertical(5, 0);
        let direct = sized_button(&mut arena, 100, 30);
        outer.add_widget(direct);
        outer.add_layout(inner);

        outer.update_layout(&mut arena, &fonts, 0, 0, 200, 200, 1.0, 1.0);

        assert_eq!(arena.get(direct).unwrap().bounds().y, 0);
        // Nested content starts after the widget plus one spacing gap.
        assert_eq!(arena.get(nested).unwrap().bounds().y, 30 + 5);
    }

    #[test]
    fn test_theme_cascades_two_levels_deep() {
        let mut arena = WidgetArena::new();
        let mut fonts = FontManager::new();

        let mut inner = Layout::vertical(0, 0);
        let deep = sized_button(&mut arena, 10, 10);
        inner.add_widget(deep);

        let mut mid = Layout::horizontal(0, 0);
        mid.add_layout(inner);

        let mut outer = Layout::vertical(0, 0);
        outer.add_layout(mid);

        let theme = Rc::new(Theme::dark());
        outer.set_theme(&mut arena, &mut fonts, &theme);

        assert_eq!(
            arena.get(deep).unwrap().base.theme().background,
            Theme::dark().background
        );
    }

    #[test]
    fn test_hidden_layout_skips_events() {
        let mut arena = WidgetArena::new();
        let mut layout = Layout::vertical(0, 0);
        let id = sized_button(&mut arena, 100, 30);
        layout.add_widget(id);
        layout.set_visible(false);

        layout.handle_event(&mut arena, &Event::down(10, 10));
        layout.handle_event(&mut arena, &Event::up(10, 10));

        assert!(!arena.get(id).unwrap().as_button().unwrap().is_pressed());
    }

    #[test]
    fn test_removed_widget_is_skipped() {
        let mut arena = WidgetArena::new();
        let fonts = FontManager::new();
        let mut layout = Layout::vertical(5, 0);

        let a = sized_button(&mut arena, 100, 30);
        let b = sized_button(&mut arena, 100, 40);
        layout.add_widget(a);
        layout.add_widget(b);
        arena.remove(a);

        // The stale handle contributes nothing - not even a spacing gap.
        assert_eq!(layout.height(&arena, &fonts), 40);
        layout.update_layout(&mut arena, &fonts, 0, 0, 200, 200, 1.0, 1.0);
        assert_eq!(arena.get(b).unwrap().bounds().y, 0);
    }
}
